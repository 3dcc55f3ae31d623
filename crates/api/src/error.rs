use core::fmt::{self, Display};
use hyper::StatusCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    InvalidQuizData,
    InvalidEvaluation,
    MissingMentee,
    ScoreOutOfRange,
    NotFound,
    MethodNotAllowed,
    TooLarge,
    Fatal,
}

impl Error {
    pub const fn status(self) -> StatusCode {
        match self {
            Self::InvalidQuizData | Self::InvalidEvaluation | Self::MissingMentee | Self::ScoreOutOfRange => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::TooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Fatal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<grader::error::Error> for Error {
    fn from(err: grader::error::Error) -> Self {
        match err {
            grader::error::Error::InvalidInput => Self::InvalidQuizData,
        }
    }
}

impl From<db::error::Error> for Error {
    fn from(err: db::error::Error) -> Self {
        log::error!("database request failed: {err}");
        Self::Fatal
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InvalidQuizData => "Invalid quiz data.",
            Self::InvalidEvaluation => "Invalid evaluation data.",
            Self::MissingMentee => "Mentee ID is required.",
            Self::ScoreOutOfRange => "Scores must be between 0 and 100.",
            Self::NotFound => "Not found.",
            Self::MethodNotAllowed => "Method not allowed.",
            Self::TooLarge => "Request body is too large.",
            Self::Fatal => "Oops! We have encountered an unrecoverable error on our end.",
        })
    }
}

pub type Result<T> = core::result::Result<T, Error>;
