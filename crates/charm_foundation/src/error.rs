//! Error types for the Charm front-end.
//!
//! Uses `thiserror` for ergonomic error definition.

use thiserror::Error;

/// The main error type for Charm front-end operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an end-of-input error.
    #[must_use]
    pub fn eof() -> Self {
        Self::new(ErrorKind::Eof)
    }

    /// Creates an interrupt error.
    #[must_use]
    pub fn interrupted() -> Self {
        Self::new(ErrorKind::Interrupted)
    }

    /// Creates a line editor failure.
    #[must_use]
    pub fn editor(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Editor(message.into()))
    }

    /// Creates an error for a token literal that has no opposite bracket.
    #[must_use]
    pub fn no_opposite(literal: impl Into<String>) -> Self {
        Self::new(ErrorKind::NoOpposite(literal.into()))
    }

    /// Returns true if this error means the input source has closed or
    /// was interrupted, rather than failed.
    #[must_use]
    pub const fn is_end_of_input(&self) -> bool {
        matches!(self.kind, ErrorKind::Eof | ErrorKind::Interrupted)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(err.to_string()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input source reached end of input.
    #[error("EOF")]
    Eof,

    /// The input source was interrupted (Ctrl+C).
    #[error("Interrupt")]
    Interrupted,

    /// The line editor failed internally.
    #[error("line editor error: {0}")]
    Editor(String),

    /// Reading or writing a stream failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// A token with no defined opposite bracket was asked for its opposite.
    #[error("token '{0}' has no opposite")]
    NoOpposite(String),
}

/// Result type alias for Charm front-end operations.
pub type Result<T> = std::result::Result<T, Error>;
