//! Payloads of the admin, graduate and mentor dashboards.

use alloc::{string::String, vec::Vec};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlatformStats {
    pub total_users: u32,
    pub student_12th_count: u32,
    pub graduate_count: u32,
    pub mentor_count: u32,
    pub admin_count: u32,
    pub active_today: u32,
    pub total_quizzes: u32,
    /// Mean quiz score across all attempts, as a whole percentage.
    pub avg_performance: u8,
    pub total_recommendations: u32,
    pub total_evaluations: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct GraduateProfile {
    pub id: String,
    pub resume_url: Option<String>,
    pub extracted_skills: Vec<String>,
    pub projects: Vec<String>,
    pub internships: Vec<String>,
    pub experience_years: u8,
    pub education_level: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct JobRecommendation {
    pub job_title: String,
    pub description: String,
    pub match_percentage: u8,
    pub experience_level: String,
    pub required_skills: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Mentee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub project_count: u16,
    pub internship_count: u16,
    pub evaluated: bool,
    pub project_score: u8,
    pub internship_score: u8,
    pub feedback: String,
}

/// Scores a mentor assigns to one of their mentees.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    #[serde(default)]
    pub mentee_id: Option<String>,
    /// Range checked by the handler, so out-of-range values still parse.
    #[serde(default)]
    pub project_score: Option<i64>,
    #[serde(default)]
    pub internship_score: Option<i64>,
    #[serde(default)]
    pub feedback: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReceipt {
    pub mentee_id: String,
    pub project_score: Option<u8>,
    pub internship_score: Option<u8>,
    pub feedback: Option<String>,
    /// RFC 3339 timestamp of when the evaluation was accepted.
    pub evaluated_at: String,
}
