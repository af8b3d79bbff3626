//! Error types for geocoding.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from resolving a place name.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GeoError {
    /// The service answered but had no match for the query.
    LocationNotFound(String),
    /// Network failure, timeout, or error status from the service.
    GeoServiceUnavailable(String),
    /// The service answered with a body that could not be understood.
    InvalidResponse(String),
}

impl GeoError {
    /// Whether a caller may reasonably retry the same query later.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::GeoServiceUnavailable(_))
    }
}

impl Display for GeoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LocationNotFound(q) => write!(f, "location not found: '{q}'"),
            Self::GeoServiceUnavailable(msg) => write!(f, "geocoding service unavailable: {msg}"),
            Self::InvalidResponse(msg) => write!(f, "invalid geocoding response: {msg}"),
        }
    }
}

impl Error for GeoError {}

impl From<reqwest::Error> for GeoError {
    fn from(e: reqwest::Error) -> Self {
        Self::GeoServiceUnavailable(e.to_string())
    }
}

impl From<serde_json::Error> for GeoError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidResponse(e.to_string())
    }
}
