//! Error types for civil-time handling.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from timestamp parsing and birth-moment validation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Malformed or out-of-range birth date/time.
    InvalidBirthInput(String),
    /// Longitude or latitude outside the valid range.
    InvalidCoordinates(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBirthInput(msg) => write!(f, "invalid birth input: {msg}"),
            Self::InvalidCoordinates(msg) => write!(f, "invalid coordinates: {msg}"),
        }
    }
}

impl Error for TimeError {}

impl From<chrono::ParseError> for TimeError {
    fn from(e: chrono::ParseError) -> Self {
        Self::InvalidBirthInput(e.to_string())
    }
}
