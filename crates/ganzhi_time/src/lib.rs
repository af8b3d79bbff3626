//! Civil time handling for sexagenary charting.
//!
//! This crate provides:
//! - Parsing and validation of civil birth timestamps
//! - Julian Day Number / Julian Date conversions on naive civil time
//! - The longitude-based true-solar-time correction

pub mod civil;
pub mod error;
pub mod julian;
pub mod solar_time;

pub use civil::{
    BirthMoment, MAX_YEAR, MIN_YEAR, format_civil, parse_civil, parse_date, year_in_range,
};
pub use error::TimeError;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, civil_to_jd, date_from_jdn, day_start_jd, jd_to_civil, jdn,
};
pub use solar_time::{
    MINUTES_PER_DEGREE, STANDARD_MERIDIAN_DEG, true_solar_offset_seconds, true_solar_time,
};
