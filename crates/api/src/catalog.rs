//! Reference data compiled into the binary. Serves every subject even when
//! no database is configured.

use alloc::{collections::BTreeMap, string::String, vec::Vec};
use model::{Choice, Difficulty, Question, Subject};

const SUBJECTS: &str = include_str!("../data/subjects.json");
const QUESTIONS: &str = include_str!("../data/questions.json");

/// Number of placeholder questions served for subjects without authored ones.
pub const PLACEHOLDER_COUNT: usize = 10;

const PLACEHOLDER_ANSWERS: [Choice; PLACEHOLDER_COUNT] =
    [Choice::A, Choice::B, Choice::C, Choice::A, Choice::D, Choice::B, Choice::C, Choice::A, Choice::D, Choice::B];

const PLACEHOLDER_DIFFICULTIES: [Difficulty; PLACEHOLDER_COUNT] = [
    Difficulty::Easy,
    Difficulty::Medium,
    Difficulty::Medium,
    Difficulty::Hard,
    Difficulty::Medium,
    Difficulty::Easy,
    Difficulty::Medium,
    Difficulty::Hard,
    Difficulty::Medium,
    Difficulty::Easy,
];

/// Subject name used when the subject ID is unknown.
pub const GENERAL: &str = "General";

pub struct Catalog {
    subjects: Vec<Subject>,
    /// Authored questions keyed by subject ID.
    questions: BTreeMap<String, Vec<Question>>,
    /// Correct option of every authored question.
    key: BTreeMap<String, Choice>,
}

impl Catalog {
    pub fn load() -> serde_json::Result<Self> {
        let subjects = serde_json::from_str(SUBJECTS)?;
        let questions = serde_json::from_str(QUESTIONS)?;
        Ok(Self::new(subjects, questions))
    }

    pub fn new(subjects: Vec<Subject>, questions: BTreeMap<String, Vec<Question>>) -> Self {
        let key = questions
            .values()
            .flatten()
            .map(|question| (question.id.clone(), question.correct_answer))
            .collect();
        Self { subjects, questions, key }
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn subject_name(&self, subject: &str) -> &str {
        self.subjects
            .iter()
            .find(|candidate| candidate.id == subject)
            .map_or(GENERAL, |candidate| candidate.subject_name.as_str())
    }

    /// Authored questions of the subject, or generated placeholders if it has none.
    pub fn questions(&self, subject: &str) -> Vec<Question> {
        match self.questions.get(subject) {
            Some(questions) if !questions.is_empty() => questions.clone(),
            _ => placeholders(subject),
        }
    }

    /// Correct option of an authored question. Placeholder questions have no
    /// entry in the key, so answers to them are never counted.
    pub fn correct_option(&self, question: &str) -> Option<Choice> {
        self.key.get(question).copied()
    }
}

fn placeholders(subject: &str) -> Vec<Question> {
    PLACEHOLDER_ANSWERS
        .into_iter()
        .zip(PLACEHOLDER_DIFFICULTIES)
        .zip(1..)
        .map(|((correct_answer, difficulty), n)| Question {
            id: alloc::format!("{subject}-{n}"),
            question_text: alloc::format!("Sample Question {n}"),
            option_a: String::from("Option A"),
            option_b: String::from("Option B"),
            option_c: String::from("Option C"),
            option_d: String::from("Option D"),
            correct_answer,
            difficulty,
        })
        .collect()
}
