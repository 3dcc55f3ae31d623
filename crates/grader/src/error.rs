use core::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The submission is empty or does not name a subject.
    InvalidInput,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InvalidInput => "Invalid quiz data.",
        })
    }
}

pub type Result<T> = core::result::Result<T, Error>;
