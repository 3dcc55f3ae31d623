use crate::{
    error,
    provider::Provider,
    util::{body, json},
};
use alloc::vec::Vec;
use grader::{Assessment, RecommendationTable};
use hyper::body::Body;
use model::{QuizResult, Submission};

pub async fn list_subjects(provider: &Provider) -> error::Result<json::JsonResponse> {
    let subjects = provider.subjects().await?;
    json::ok(&serde_json::json!({ "subjects": subjects }))
}

pub async fn list_questions(provider: &Provider, subject: &str) -> error::Result<json::JsonResponse> {
    if subject.is_empty() {
        return Err(error::Error::NotFound);
    }

    let questions = provider.questions(subject).await?;
    json::ok(&serde_json::json!({ "questions": questions }))
}

/// Grades a quiz attempt, recommends a degree for good scores, then records
/// the attempt with the provider.
pub async fn submit<B>(provider: &Provider, degrees: &RecommendationTable, body: B) -> error::Result<json::JsonResponse>
where
    B: Body,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let bytes = body::collect(body).await?;
    let submission: Submission = serde_json::from_slice(&bytes).map_err(|err| {
        log::warn!("rejected quiz submission: {err}");
        error::Error::InvalidQuizData
    })?;
    drop(bytes);

    // Reject empty submissions before touching the store.
    grader::validate(&submission)?;

    let ids: Vec<_> = submission.answers.iter().map(|answer| answer.question_id.as_str()).collect();
    let key = provider.answer_key(&ids).await?;
    let subject_name = provider.subject_name(&submission.subject_id).await?;
    let Assessment { grade, degree } = grader::assess(&submission, &key, &subject_name, degrees)?;

    let quiz_attempt_id =
        provider.record_attempt(&submission.subject_id, &grade, submission.time_taken, degree).await?;
    log::info!(
        "{quiz_attempt_id}: {}/{} on subject {} ({subject_name})",
        grade.correct,
        grade.total,
        submission.subject_id
    );

    json::ok(&QuizResult {
        quiz_attempt_id,
        score_percentage: grade.percentage,
        correct_count: grade.correct,
        total_questions: grade.total,
        recommended_degree: degree.map(Into::into),
        time_taken: submission.time_taken,
        subject_name,
    })
}
