//! Julian Day conversions for civil dates and timestamps.
//!
//! The Julian Day Number (JDN) labels a whole civil date; the Julian Date
//! (JD) is continuous and starts at noon, so civil midnight of a date is
//! `JDN - 0.5`. No time zone is implied: callers pass local civil time and
//! shift by their own offset.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

/// Julian Date of J2000.0 (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in a civil day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// chrono's day count (0001-01-01 = 1) to JDN.
const CE_TO_JDN: i64 = 1_721_425;

/// Julian Day Number of a proleptic Gregorian date.
pub fn jdn(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) + CE_TO_JDN
}

/// Civil date for a Julian Day Number.
pub fn date_from_jdn(jdn: i64) -> Option<NaiveDate> {
    let days = i32::try_from(jdn - CE_TO_JDN).ok()?;
    NaiveDate::from_num_days_from_ce_opt(days)
}

/// Julian Date of a civil timestamp (same time base as the input).
pub fn civil_to_jd(dt: NaiveDateTime) -> f64 {
    let secs = dt.num_seconds_from_midnight() as f64 + dt.nanosecond() as f64 * 1e-9;
    jdn(dt.date()) as f64 - 0.5 + secs / SECONDS_PER_DAY
}

/// Civil timestamp for a Julian Date, rounded to the nearest second.
pub fn jd_to_civil(jd: f64) -> Option<NaiveDateTime> {
    if !jd.is_finite() {
        return None;
    }
    let shifted = jd + 0.5;
    let mut day = shifted.floor() as i64;
    let mut secs = ((shifted - day as f64) * SECONDS_PER_DAY).round() as u32;
    if secs >= 86_400 {
        day += 1;
        secs -= 86_400;
    }
    let date = date_from_jdn(day)?;
    date.and_hms_opt(secs / 3600, secs % 3600 / 60, secs % 60)
}

/// Midnight at the start of `date`, as a Julian Date.
pub fn day_start_jd(date: NaiveDate) -> f64 {
    jdn(date) as f64 - 0.5
}
