use core::fmt::{self, Display};

#[derive(Debug)]
pub enum Error {
    /// The row violates one of the table's check constraints.
    BadInput,
    /// No row matched the query.
    NotFound,
    /// Unrecoverable error.
    Fatal,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::BadInput => "Row rejected by a check constraint.",
            Self::NotFound => "Row not found.",
            Self::Fatal => "Unexpected database error.",
        })
    }
}

pub type Result<T> = core::result::Result<T, Error>;
