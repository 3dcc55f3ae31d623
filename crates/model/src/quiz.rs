use alloc::string::String;
use serde::{Deserialize, Serialize};

/// Label of one of the four options of a question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum Choice {
    A,
    B,
    C,
    D,
}

impl Choice {
    pub const ALL: [Self; 4] = [Self::A, Self::B, Self::C, Self::D];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }

    /// Parses the label as stored in the database.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|choice| choice.as_str() == label.trim())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

/// Multiple-choice question as authored by content writers.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Question {
    pub id: String,
    pub question_text: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    /// Never sent back to students.
    #[serde(skip_serializing)]
    pub correct_answer: Choice,
    pub difficulty: Difficulty,
}

/// Quiz subject offered to students.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Subject {
    pub id: String,
    pub subject_name: String,
    pub description: String,
    pub total_questions: u16,
    pub duration_minutes: u16,
}
