//! Longitude-only true solar time.
//!
//! Civil time is reckoned on the 120°E meridian; every degree east of it
//! puts the local Sun four minutes ahead. The equation of time (up to about
//! ±16 minutes over the year) is not applied.

use chrono::{NaiveDateTime, TimeDelta};

/// Reference meridian of the civil time zone (UTC+8), degrees east.
pub const STANDARD_MERIDIAN_DEG: f64 = 120.0;

/// Minutes of clock time per degree of longitude.
pub const MINUTES_PER_DEGREE: f64 = 4.0;

/// Offset of local true solar time from civil time, in seconds.
pub fn true_solar_offset_seconds(longitude: f64) -> f64 {
    (longitude - STANDARD_MERIDIAN_DEG) * MINUTES_PER_DEGREE * 60.0
}

/// Shift a civil timestamp to true solar time at `longitude`.
///
/// The shift is carried at microsecond resolution. Longitudes in
/// [-180, 180] move the timestamp by at most 20 hours.
pub fn true_solar_time(civil: NaiveDateTime, longitude: f64) -> NaiveDateTime {
    let micros = (true_solar_offset_seconds(longitude) * 1e6).round() as i64;
    civil + TimeDelta::microseconds(micros)
}
