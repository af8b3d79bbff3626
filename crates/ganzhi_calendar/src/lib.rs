//! Sexagenary calendar: pillars, solar terms, and lunar dates.
//!
//! This crate provides:
//! - The [`SexagenaryCalendar`] contract consumed by chart computation
//! - Bounded searches for the adjacent major solar term
//! - [`AstronomicalCalendar`], a built-in implementation from solar and
//!   lunar series (Meeus), valid for 1700..=2300 in UTC+8

pub mod astronomical;
pub mod calendar;
pub mod error;
pub mod lunar;
pub mod moon;
pub mod solar_term;
pub mod sun;
pub mod types;

pub use astronomical::{AstronomicalCalendar, MAX_CALENDAR_YEAR, MIN_CALENDAR_YEAR, day_pillar};
pub use calendar::{MAX_TERM_SCAN_DAYS, SearchDirection, SexagenaryCalendar, scan_major_term};
pub use error::CalendarError;
pub use lunar::{LunarMonth, lunar_to_solar, months_of_sui, solar_to_lunar};
pub use solar_term::{CST_OFFSET_DAYS, term_index_at, term_on_date, winter_solstice_date};
pub use types::{DatePillars, LunarDate, SolarTermEvent};
