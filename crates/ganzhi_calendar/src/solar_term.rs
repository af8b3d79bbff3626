//! Solar-term (节气) detection on civil dates.
//!
//! The term index at an instant is which 15° segment of apparent solar
//! longitude, counted from 270°, the Sun occupies. A term "falls on" a
//! civil date when the index changes between that date's midnight and the
//! next; the exact instant is then bracketed inside the day and bisected.

use chrono::NaiveDate;
use ganzhi_base::{SOLAR_TERM_COUNT, normalize_360, normalize_to_pm180};
use ganzhi_time::{day_start_jd, jd_to_civil};

use crate::error::CalendarError;
use crate::sun::{sun_apparent_longitude_deg, ut_to_tt};
use crate::types::SolarTermEvent;

/// Offset of the calendar's civil time base (UTC+8) from UT, in days.
pub const CST_OFFSET_DAYS: f64 = 8.0 / 24.0;

/// Solar longitude of term index 0 (冬至).
pub const WINTER_SOLSTICE_LON_DEG: f64 = 270.0;

/// Bisection steps; one day / 2^40 is far below a second.
const BISECTION_ITERATIONS: usize = 40;

/// Apparent solar longitude at a civil (UTC+8) Julian Date.
pub fn sun_longitude_local(jd_local: f64) -> f64 {
    sun_apparent_longitude_deg(ut_to_tt(jd_local - CST_OFFSET_DAYS))
}

/// Index of the solar term in force at `jd_local` (0 = 冬至 .. 23 = 大雪).
pub fn term_index_at(jd_local: f64) -> u8 {
    let seg = normalize_360(sun_longitude_local(jd_local) - WINTER_SOLSTICE_LON_DEG) / 15.0;
    (seg.floor() as u8) % SOLAR_TERM_COUNT
}

/// Index of the principal term (中气) segment in force, in `0..12`.
///
/// Principal terms are the even-indexed terms, 30° apart.
pub fn principal_index_at(jd_local: f64) -> u8 {
    term_index_at(jd_local) / 2
}

/// The solar term whose instant falls on civil `date`, if any.
///
/// Terms are about 15 days apart, so a day holds at most one.
pub fn term_on_date(date: NaiveDate) -> Result<Option<SolarTermEvent>, CalendarError> {
    let start = day_start_jd(date);
    let end = start + 1.0;
    let before = term_index_at(start);
    let after = term_index_at(end);
    if before == after {
        return Ok(None);
    }
    let target = WINTER_SOLSTICE_LON_DEG + 15.0 * after as f64;
    let jd = find_longitude_crossing(start, end, target)?;
    let instant = jd_to_civil(jd).ok_or(CalendarError::DateOutOfRange(date))?;
    Ok(Some(SolarTermEvent {
        index: after,
        instant,
    }))
}

/// Civil date of the winter solstice in December of `year`.
pub fn winter_solstice_date(year: i32) -> Result<NaiveDate, CalendarError> {
    for day in 15..=28 {
        let Some(date) = NaiveDate::from_ymd_opt(year, 12, day) else {
            continue;
        };
        let start = day_start_jd(date);
        if term_index_at(start) != 0 && term_index_at(start + 1.0) == 0 {
            return Ok(date);
        }
    }
    Err(CalendarError::NoConvergence("winter solstice not found in December"))
}

/// Find the JD in `[lo, hi]` where the solar longitude reaches `target_deg`.
///
/// The longitude must be below the target at `lo` and at or past it at `hi`.
fn find_longitude_crossing(lo: f64, hi: f64, target_deg: f64) -> Result<f64, CalendarError> {
    let f = |t: f64| normalize_to_pm180(sun_longitude_local(t) - target_deg);
    if !(f(lo) < 0.0 && f(hi) >= 0.0) {
        return Err(CalendarError::NoConvergence(
            "solar longitude not bracketed within the day",
        ));
    }
    let (mut lo, mut hi) = (lo, hi);
    for _ in 0..BISECTION_ITERATIONS {
        let mid = 0.5 * (lo + hi);
        if f(mid) < 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    Ok(0.5 * (lo + hi))
}
