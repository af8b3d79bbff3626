//! Error types for calendar queries.

use std::error::Error;
use std::fmt::{Display, Formatter};

use chrono::NaiveDate;

/// Errors from sexagenary calendar queries.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CalendarError {
    /// Date outside the range the calendar can compute.
    DateOutOfRange(NaiveDate),
    /// Lunar date that does not exist (bad day, or a leap month the year lacks).
    InvalidLunarDate(String),
    /// No major solar term found within the scan bound.
    ///
    /// Major terms are never more than ~31 days apart, so this indicates a
    /// defective calendar implementation.
    SolarTermSearchExceeded { from: NaiveDate, max_days: u32 },
    /// Iterative algorithm did not converge.
    NoConvergence(&'static str),
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DateOutOfRange(d) => write!(f, "date {d} outside supported calendar range"),
            Self::InvalidLunarDate(msg) => write!(f, "invalid lunar date: {msg}"),
            Self::SolarTermSearchExceeded { from, max_days } => write!(
                f,
                "no major solar term within {max_days} days of {from}"
            ),
            Self::NoConvergence(msg) => write!(f, "no convergence: {msg}"),
        }
    }
}

impl Error for CalendarError {}
