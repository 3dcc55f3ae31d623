use crate::{
    error,
    fixtures::Fixtures,
    provider::Provider,
    util::{body, json},
};
use alloc::string::String;
use chrono::{SecondsFormat, Utc};
use hyper::body::Body;
use model::dashboard::{Evaluation, EvaluationReceipt};
use serde::Serialize;

/// Reporting windows understood by the admin dashboard.
const RANGES: [&str; 4] = ["24h", "7d", "30d", "90d"];

fn parse_range(query: &str) -> &str {
    query
        .split('&')
        .filter_map(|chunk| chunk.split_once('='))
        .find_map(|(key, value)| (key == "range").then_some(value))
        .filter(|range| RANGES.contains(range))
        .unwrap_or("7d")
}

pub fn stats(fixtures: &Fixtures, query: Option<&str>) -> error::Result<json::JsonResponse> {
    let range = parse_range(query.unwrap_or_default());
    log::debug!("serving platform stats for the last {range}");
    json::ok(&serde_json::json!({ "stats": fixtures.stats }))
}

pub fn profile(fixtures: &Fixtures) -> error::Result<json::JsonResponse> {
    json::ok(&serde_json::json!({ "profile": fixtures.profile }))
}

pub fn job_recommendations(fixtures: &Fixtures) -> error::Result<json::JsonResponse> {
    json::ok(&serde_json::json!({ "recommendations": fixtures.jobs }))
}

pub fn mentees(fixtures: &Fixtures) -> error::Result<json::JsonResponse> {
    json::ok(&serde_json::json!({ "mentees": fixtures.mentees }))
}

/// Scores are optional, but present ones must lie within `0..=100`.
fn score(value: Option<i64>) -> error::Result<Option<u8>> {
    value
        .map(|score| u8::try_from(score).ok().filter(|score| *score <= 100).ok_or(error::Error::ScoreOutOfRange))
        .transpose()
}

#[derive(Serialize)]
struct Receipt<'a> {
    success: bool,
    message: &'a str,
    data: EvaluationReceipt,
}

pub async fn submit_score<B>(provider: &Provider, body: B) -> error::Result<json::JsonResponse>
where
    B: Body,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let bytes = body::collect(body).await?;
    let evaluation: Evaluation = serde_json::from_slice(&bytes).map_err(|err| {
        log::warn!("rejected evaluation: {err}");
        error::Error::InvalidEvaluation
    })?;

    let mentee = evaluation.mentee_id.as_deref().filter(|id| !id.is_empty()).ok_or(error::Error::MissingMentee)?;
    let project_score = score(evaluation.project_score)?;
    let internship_score = score(evaluation.internship_score)?;
    let feedback = evaluation.feedback.as_deref();

    provider.record_evaluation(mentee, project_score, internship_score, feedback).await?;
    log::info!("recorded evaluation for mentee {mentee}");

    let data = EvaluationReceipt {
        mentee_id: String::from(mentee),
        project_score,
        internship_score,
        feedback: evaluation.feedback.clone(),
        evaluated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    };
    json::ok(&Receipt { success: true, message: "Evaluation submitted successfully", data })
}
