//! Day-pillar almanac around the present.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};
use ganzhi_base::{Pillar, weekday_name};
use ganzhi_calendar::{CalendarError, DatePillars, SexagenaryCalendar};
use serde::Serialize;

/// Days listed by [`fortnight_almanac`].
pub const ALMANAC_DAYS: u64 = 14;

/// One almanac row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlmanacDay {
    pub date: NaiveDate,
    /// 周一 .. 周日.
    pub weekday: &'static str,
    pub day_pillar: Pillar,
}

/// Year, month, and day pillars in force at `now`.
pub fn pillars_now<C: SexagenaryCalendar + ?Sized>(
    calendar: &C,
    now: NaiveDateTime,
) -> Result<DatePillars, CalendarError> {
    calendar.pillars_for_date(now.date())
}

/// Day pillars for two weeks starting on the Monday of `today`'s week.
pub fn fortnight_almanac<C: SexagenaryCalendar + ?Sized>(
    calendar: &C,
    today: NaiveDate,
) -> Result<Vec<AlmanacDay>, CalendarError> {
    let back = Days::new(u64::from(today.weekday().num_days_from_monday()));
    let monday = today
        .checked_sub_days(back)
        .ok_or(CalendarError::DateOutOfRange(today))?;
    (0..ALMANAC_DAYS)
        .map(|i| {
            let date = monday
                .checked_add_days(Days::new(i))
                .ok_or(CalendarError::DateOutOfRange(monday))?;
            Ok(AlmanacDay {
                date,
                weekday: weekday_name(date.weekday().num_days_from_monday() as u8),
                day_pillar: calendar.pillars_for_date(date)?.day,
            })
        })
        .collect()
}
