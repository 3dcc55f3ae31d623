#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod error;
mod recommend;

pub use recommend::{RecommendationTable, RECOMMENDATION_FLOOR};

use alloc::collections::BTreeMap;
use core::borrow::Borrow;
use model::{Choice, Submission};

/// Source of truth for the correct option of each question.
pub trait AnswerKey {
    fn correct_option(&self, question: &str) -> Option<Choice>;
}

impl<K> AnswerKey for BTreeMap<K, Choice>
where
    K: Borrow<str> + Ord,
{
    fn correct_option(&self, question: &str) -> Option<Choice> {
        self.get(question).copied()
    }
}

impl<T: AnswerKey + ?Sized> AnswerKey for &T {
    fn correct_option(&self, question: &str) -> Option<Choice> {
        (**self).correct_option(question)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grade {
    pub correct: usize,
    /// Number of submitted answers, including those for unknown questions.
    pub total: usize,
    /// Always within `0.0..=100.0`. Never rounded.
    pub percentage: f64,
}

/// A submission must name a subject and answer at least one question.
pub fn validate(submission: &Submission) -> error::Result<()> {
    if submission.subject_id.trim().is_empty() || submission.answers.is_empty() {
        return Err(error::Error::InvalidInput);
    }
    Ok(())
}

/// Counts the submitted answers that match the key. Answers to questions
/// missing from the key are skipped without counting against the student.
pub fn grade<K: AnswerKey + ?Sized>(submission: &Submission, key: &K) -> error::Result<Grade> {
    validate(submission)?;

    let total = submission.answers.len();
    let correct = submission
        .answers
        .iter()
        .filter(|answer| key.correct_option(&answer.question_id) == Some(answer.selected_option))
        .count();

    let percentage = correct as f64 / total as f64 * 100.0;
    Ok(Grade { correct, total, percentage })
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assessment<'t> {
    pub grade: Grade,
    pub degree: Option<&'t str>,
}

/// Grades the submission, then looks up a degree for the subject if the
/// score reaches [`RECOMMENDATION_FLOOR`].
pub fn assess<'t, K: AnswerKey + ?Sized>(
    submission: &Submission,
    key: &K,
    subject_name: &str,
    table: &'t RecommendationTable,
) -> error::Result<Assessment<'t>> {
    let grade = grade(submission, key)?;
    let degree = if grade.percentage >= RECOMMENDATION_FLOOR {
        table.recommend(subject_name, grade.percentage)
    } else {
        None
    };
    Ok(Assessment { grade, degree })
}
