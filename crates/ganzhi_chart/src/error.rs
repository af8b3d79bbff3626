//! Error types for chart computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use ganzhi_calendar::CalendarError;
use ganzhi_geo::GeoError;
use ganzhi_time::TimeError;

/// Errors from building a chart.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Birth place could not be resolved.
    Geo(GeoError),
    /// Calendar lookup failed or was inconsistent.
    Calendar(CalendarError),
    /// Birth date/time or coordinates rejected.
    Time(TimeError),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Geo(e) => write!(f, "geocoding error: {e}"),
            Self::Calendar(e) => write!(f, "calendar error: {e}"),
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for ChartError {}

impl From<GeoError> for ChartError {
    fn from(e: GeoError) -> Self {
        Self::Geo(e)
    }
}

impl From<CalendarError> for ChartError {
    fn from(e: CalendarError) -> Self {
        Self::Calendar(e)
    }
}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
