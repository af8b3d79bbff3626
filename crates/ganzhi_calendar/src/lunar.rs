//! Chinese lunisolar dates.
//!
//! A month starts on the civil (UTC+8) day of a true new moon. The span from
//! the month holding one winter solstice to the month holding the next (a
//! "sui") has 12 or 13 months; month 11 is the solstice month, and in a
//! 13-month sui the first month without a principal term is intercalary and
//! repeats the previous month's number.

use chrono::{Datelike, NaiveDate};
use ganzhi_time::{date_from_jdn, jdn};

use crate::error::CalendarError;
use crate::moon::{approx_lunation, new_moon_jd_ut};
use crate::solar_term::{CST_OFFSET_DAYS, principal_index_at, winter_solstice_date};
use crate::types::LunarDate;

/// Bound on lunation-number corrections after the mean estimate.
const MAX_LUNATION_ADJUST: usize = 4;

/// One lunar month within a sui.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarMonth {
    pub year: i32,
    pub number: u8,
    pub is_leap: bool,
    /// JDN of the first day.
    pub start_jdn: i64,
    /// 29 or 30.
    pub days: u8,
}

impl LunarMonth {
    fn contains(&self, day_jdn: i64) -> bool {
        (self.start_jdn..self.start_jdn + i64::from(self.days)).contains(&day_jdn)
    }
}

/// Civil day (JDN, UTC+8) of new moon number `k`.
fn new_moon_jdn(k: i64) -> i64 {
    (new_moon_jd_ut(k) + CST_OFFSET_DAYS + 0.5).floor() as i64
}

/// Number of the last new moon falling on or before civil day `day_jdn`.
fn lunation_on_or_before(day_jdn: i64) -> Result<i64, CalendarError> {
    let mut k = approx_lunation(day_jdn as f64);
    for _ in 0..MAX_LUNATION_ADJUST {
        if new_moon_jdn(k + 1) <= day_jdn {
            k += 1;
        } else if new_moon_jdn(k) > day_jdn {
            k -= 1;
        } else {
            return Ok(k);
        }
    }
    Err(CalendarError::NoConvergence("lunation search"))
}

/// Whether a principal term falls in `[start_jdn, end_jdn)`.
fn has_principal_term(start_jdn: i64, end_jdn: i64) -> bool {
    let at = |d: i64| principal_index_at(d as f64 - 0.5);
    at(start_jdn) != at(end_jdn)
}

/// The months from the solstice month of `solstice_year` up to, not
/// including, the solstice month of the following year.
pub fn months_of_sui(solstice_year: i32) -> Result<Vec<LunarMonth>, CalendarError> {
    let first = lunation_on_or_before(jdn(winter_solstice_date(solstice_year)?))?;
    let next = lunation_on_or_before(jdn(winter_solstice_date(solstice_year + 1)?))?;
    let starts: Vec<i64> = (first..=next).map(new_moon_jdn).collect();
    let count = starts.len() - 1;

    let leap = if count == 13 {
        (0..count).find(|&i| !has_principal_term(starts[i], starts[i + 1]))
    } else {
        None
    };

    let mut months = Vec::with_capacity(count);
    let mut number = 11u8;
    let mut year = solstice_year;
    for i in 0..count {
        let is_leap = i > 0 && leap == Some(i);
        if i > 0 && !is_leap {
            number = number % 12 + 1;
            if number == 1 {
                year += 1;
            }
        }
        months.push(LunarMonth {
            year,
            number,
            is_leap,
            start_jdn: starts[i],
            days: (starts[i + 1] - starts[i]) as u8,
        });
    }
    Ok(months)
}

/// Lunar date of a civil date.
pub fn solar_to_lunar(date: NaiveDate) -> Result<LunarDate, CalendarError> {
    let day = jdn(date);
    let mut sui = date.year();
    let sui_start = lunation_on_or_before(jdn(winter_solstice_date(sui)?))?;
    if day < new_moon_jdn(sui_start) {
        sui -= 1;
    }
    months_of_sui(sui)?
        .into_iter()
        .find(|m| m.contains(day))
        .map(|m| LunarDate {
            year: m.year,
            month: m.number,
            day: (day - m.start_jdn + 1) as u8,
            is_leap: m.is_leap,
        })
        .ok_or(CalendarError::DateOutOfRange(date))
}

/// Civil date of a lunar date.
pub fn lunar_to_solar(
    year: i32,
    month: u8,
    day: u8,
    is_leap: bool,
) -> Result<NaiveDate, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidLunarDate(format!(
            "month {month} outside 1..=12"
        )));
    }
    let sui = if month >= 11 { year } else { year - 1 };
    let target = months_of_sui(sui)?
        .into_iter()
        .find(|m| m.year == year && m.number == month && m.is_leap == is_leap)
        .ok_or_else(|| {
            CalendarError::InvalidLunarDate(format!(
                "{year} has no {}month {month}",
                if is_leap { "leap " } else { "" }
            ))
        })?;
    if day == 0 || day > target.days {
        return Err(CalendarError::InvalidLunarDate(format!(
            "day {day} outside 1..={} for {year}-{month}",
            target.days
        )));
    }
    date_from_jdn(target.start_jdn + i64::from(day) - 1)
        .ok_or_else(|| CalendarError::InvalidLunarDate(format!("{year}-{month}-{day}")))
}
