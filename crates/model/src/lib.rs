#![cfg_attr(not(test), no_std)]
extern crate alloc;

pub mod dashboard;
pub mod degree;
pub mod quiz;
pub mod submission;

pub use degree::{DegreeTiers, Tier};
pub use quiz::{Choice, Difficulty, Question, Subject};
pub use submission::{QuizResult, Submission, SubmittedAnswer};
