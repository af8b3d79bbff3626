//! Civil birth timestamps and their validation.
//!
//! Timestamps are naive civil time in the UTC+8 standard zone the rest of
//! the workspace reckons in; second precision is enough for every rule
//! downstream.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::error::TimeError;
use crate::solar_time::true_solar_time;

/// Earliest civil year accepted for a birth moment.
pub const MIN_YEAR: i32 = 1800;

/// Latest civil year accepted for a birth moment.
pub const MAX_YEAR: i32 = 2200;

const CIVIL_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Parse `YYYY-MM-DD HH:MM[:SS]` (a `T` separator is also accepted).
pub fn parse_civil(s: &str) -> Result<NaiveDateTime, TimeError> {
    let s = s.trim();
    let mut last_err = None;
    for fmt in CIVIL_FORMATS {
        match NaiveDateTime::parse_from_str(s, fmt) {
            Ok(dt) => return Ok(dt),
            Err(e) => last_err = Some(e),
        }
    }
    Err(match last_err {
        Some(e) => TimeError::InvalidBirthInput(format!("{s:?}: {e}")),
        None => TimeError::InvalidBirthInput(s.to_string()),
    })
}

/// Parse a bare `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, TimeError> {
    Ok(NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")?)
}

/// Render as `YYYY-MM-DD HH:MM:SS`.
pub fn format_civil(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Whether `year` lies in the supported calendar range.
pub fn year_in_range(year: i32) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&year)
}

/// A civil birth timestamp with its resolved coordinates.
///
/// Immutable once built; [`BirthMoment::new`] is the only constructor and
/// rejects anything the downstream arithmetic cannot handle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BirthMoment {
    civil: NaiveDateTime,
    longitude: f64,
    latitude: f64,
}

impl BirthMoment {
    pub fn new(civil: NaiveDateTime, longitude: f64, latitude: f64) -> Result<Self, TimeError> {
        if !year_in_range(civil.year()) {
            return Err(TimeError::InvalidBirthInput(format!(
                "year {} outside {MIN_YEAR}..={MAX_YEAR}",
                civil.year()
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(TimeError::InvalidCoordinates(format!(
                "longitude {longitude} outside [-180, 180]"
            )));
        }
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(TimeError::InvalidCoordinates(format!(
                "latitude {latitude} outside [-90, 90]"
            )));
        }
        Ok(Self {
            civil,
            longitude,
            latitude,
        })
    }

    /// Civil timestamp as given.
    pub fn civil(&self) -> NaiveDateTime {
        self.civil
    }

    /// East-positive longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// North-positive latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Timestamp shifted to local true solar time.
    pub fn corrected(&self) -> NaiveDateTime {
        true_solar_time(self.civil, self.longitude)
    }
}
