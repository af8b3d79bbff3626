//! Year, month, day, and hour pillars of a corrected birth instant.
//!
//! Year and month come from the instant's own date. From 23:00 the day
//! pillar already belongs to the next date (early zi-hour), while the hour
//! branch is still 子 and its stem follows that next day's stem.

use chrono::{Days, NaiveDateTime, Timelike};
use ganzhi_base::{Branch, FourPillars, Pillar, Stem};
use ganzhi_calendar::{CalendarError, SexagenaryCalendar};

/// First hour that counts toward the next day's pillar.
pub const EARLY_ZI_HOUR: u32 = 23;

/// Whether `hour` falls in the 23:00-24:00 early zi window.
pub const fn is_early_zi_hour(hour: u32) -> bool {
    hour == EARLY_ZI_HOUR
}

/// Hour pillar from the day stem and the clock hour.
///
/// Five-rat rule: the 子 hour of a 甲 or 己 day is 甲子, of a 乙 or 庚 day
/// 丙子, and so on.
pub fn hour_pillar(day_stem: Stem, hour: u32) -> Pillar {
    let branch = Branch::from_hour(hour);
    let stem = i32::from(day_stem.index() % 5) * 2 + i32::from(branch.index());
    Pillar::new(Stem::from_index(stem), branch)
}

/// The four pillars of a corrected (true solar) timestamp.
pub fn four_pillars<C: SexagenaryCalendar + ?Sized>(
    calendar: &C,
    corrected: NaiveDateTime,
) -> Result<FourPillars, CalendarError> {
    let date = corrected.date();
    let hour = corrected.hour();
    let by_date = calendar.pillars_for_date(date)?;
    let day = if is_early_zi_hour(hour) {
        let next = date
            .checked_add_days(Days::new(1))
            .ok_or(CalendarError::DateOutOfRange(date))?;
        calendar.pillars_for_date(next)?.day
    } else {
        by_date.day
    };
    Ok(FourPillars {
        year: by_date.year,
        month: by_date.month,
        day,
        hour: hour_pillar(day.stem, hour),
    })
}
