use alloc::{string::String, vec::Vec};
use serde::{Deserialize, Serialize};

use crate::Choice;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedAnswer {
    pub question_id: String,
    pub selected_option: Choice,
}

/// A student's answers to one quiz attempt.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub subject_id: String,
    pub answers: Vec<SubmittedAnswer>,
    /// Elapsed time in minutes as measured by the client.
    #[serde(default)]
    pub time_taken: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub quiz_attempt_id: String,
    pub score_percentage: f64,
    pub correct_count: usize,
    pub total_questions: usize,
    pub recommended_degree: Option<String>,
    pub time_taken: Option<f64>,
    pub subject_name: String,
}

#[cfg(test)]
mod tests {
    use super::{Submission, SubmittedAnswer};
    use crate::Choice;

    #[test]
    fn parses_client_payload() {
        let json = r#"{"subjectId":"1","answers":[{"questionId":"1-1","selectedOption":"A"}],"timeTaken":4}"#;
        let sub: Submission = serde_json::from_str(json).unwrap();
        assert_eq!(sub.subject_id, "1");
        assert_eq!(sub.time_taken, Some(4.0));
        assert_eq!(
            sub.answers,
            [SubmittedAnswer { question_id: "1-1".into(), selected_option: Choice::A }]
        );
    }

    #[test]
    fn time_taken_is_optional() {
        let sub: Submission = serde_json::from_str(r#"{"subjectId":"2","answers":[]}"#).unwrap();
        assert!(sub.time_taken.is_none());
        assert!(sub.answers.is_empty());
    }

    #[test]
    fn rejects_non_array_answers() {
        assert!(serde_json::from_str::<Submission>(r#"{"subjectId":"1","answers":"A"}"#).is_err());
        assert!(serde_json::from_str::<Submission>(r#"{"answers":[]}"#).is_err());
    }
}
