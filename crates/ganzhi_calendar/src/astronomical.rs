//! Built-in calendar computed from solar and lunar theory.
//!
//! Civil dates are taken in UTC+8. Solar terms come from the apparent solar
//! longitude and lunar months from true new moons.

use chrono::{Datelike, NaiveDate};
use ganzhi_base::{LICHUN_INDEX, Pillar};
use ganzhi_time::{day_start_jd, jdn};
use tracing::debug;

use crate::calendar::SexagenaryCalendar;
use crate::error::CalendarError;
use crate::lunar;
use crate::solar_term::{self, term_index_at};
use crate::types::{DatePillars, LunarDate, SolarTermEvent};

/// First Gregorian year the built-in calendar answers for.
pub const MIN_CALENDAR_YEAR: i32 = 1700;

/// Last Gregorian year the built-in calendar answers for.
pub const MAX_CALENDAR_YEAR: i32 = 2300;

/// JDN offset placing 甲子 at cycle index 0 for day pillars.
const DAY_CYCLE_OFFSET: i64 = 49;

/// Calendar derived from ephemeris-grade series for the Sun and Moon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AstronomicalCalendar;

impl AstronomicalCalendar {
    pub const fn new() -> Self {
        Self
    }

    fn check(date: NaiveDate) -> Result<(), CalendarError> {
        if (MIN_CALENDAR_YEAR..=MAX_CALENDAR_YEAR).contains(&date.year()) {
            Ok(())
        } else {
            Err(CalendarError::DateOutOfRange(date))
        }
    }
}

/// Day pillar of a civil date: the day count modulo 60, unbroken.
pub fn day_pillar(date: NaiveDate) -> Pillar {
    Pillar::from_cycle_index(jdn(date) + DAY_CYCLE_OFFSET)
}

/// Year and month pillars given the term index in force at the end of the
/// date.
fn year_month_pillars(date: NaiveDate, term_index: u8) -> (Pillar, Pillar) {
    // January and early February belong to the previous year until 立春.
    let year = if date.month() <= 2 && term_index < LICHUN_INDEX {
        date.year() - 1
    } else {
        date.year()
    };
    let year_pillar = Pillar::from_indices(year - 4, year - 4);

    // Month 0 is 寅, opened by 立春.
    let month = (i32::from(term_index) - i32::from(LICHUN_INDEX)).rem_euclid(24) / 2;
    let year_stem = i32::from(year_pillar.stem.index());
    let month_pillar = Pillar::from_indices((year_stem % 5) * 2 + 2 + month, month + 2);
    (year_pillar, month_pillar)
}

impl SexagenaryCalendar for AstronomicalCalendar {
    fn solar_to_lunar(&self, date: NaiveDate) -> Result<LunarDate, CalendarError> {
        Self::check(date)?;
        lunar::solar_to_lunar(date)
    }

    fn lunar_to_solar(
        &self,
        year: i32,
        month: u8,
        day: u8,
        is_leap: bool,
    ) -> Result<NaiveDate, CalendarError> {
        if !(MIN_CALENDAR_YEAR..=MAX_CALENDAR_YEAR).contains(&year) {
            return Err(CalendarError::InvalidLunarDate(format!(
                "year {year} outside {MIN_CALENDAR_YEAR}..={MAX_CALENDAR_YEAR}"
            )));
        }
        lunar::lunar_to_solar(year, month, day, is_leap)
    }

    fn pillars_for_date(&self, date: NaiveDate) -> Result<DatePillars, CalendarError> {
        Self::check(date)?;
        let term_index = term_index_at(day_start_jd(date) + 1.0);
        let (year, month) = year_month_pillars(date, term_index);
        let pillars = DatePillars {
            year,
            month,
            day: day_pillar(date),
        };
        debug!(%date, term_index, year = %pillars.year, month = %pillars.month, day = %pillars.day, "date pillars");
        Ok(pillars)
    }

    fn term_on_date(&self, date: NaiveDate) -> Result<Option<SolarTermEvent>, CalendarError> {
        Self::check(date)?;
        solar_term::term_on_date(date)
    }
}
