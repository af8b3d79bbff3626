//! The sexagenary calendar contract.
//!
//! Chart computation depends only on this trait, so any source of truth
//! (astronomical, tabulated, remote) can back it. Term-boundary searches
//! are provided on top of [`SexagenaryCalendar::major_term_on_date`].

use chrono::{Days, NaiveDate};
use tracing::trace;

use crate::error::CalendarError;
use crate::types::{DatePillars, LunarDate, SolarTermEvent};

/// Upper bound on days probed when looking for the adjacent major term.
///
/// Consecutive major terms are at most ~31 days apart.
pub const MAX_TERM_SCAN_DAYS: u32 = 40;

/// Direction of a date scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDirection {
    Forward,
    Backward,
}

/// Calendar queries needed to build a chart.
pub trait SexagenaryCalendar {
    /// Lunar date of a civil date.
    fn solar_to_lunar(&self, date: NaiveDate) -> Result<LunarDate, CalendarError>;

    /// Civil date of a lunar date.
    fn lunar_to_solar(
        &self,
        year: i32,
        month: u8,
        day: u8,
        is_leap: bool,
    ) -> Result<NaiveDate, CalendarError>;

    /// Year, month, and day pillars of a civil date.
    ///
    /// Year and month pillars reflect the terms in force at the end of the
    /// day.
    fn pillars_for_date(&self, date: NaiveDate) -> Result<DatePillars, CalendarError>;

    /// The solar term (major or minor) falling on `date`, if any.
    fn term_on_date(&self, date: NaiveDate) -> Result<Option<SolarTermEvent>, CalendarError>;

    /// The major term falling on `date`, if any.
    fn major_term_on_date(
        &self,
        date: NaiveDate,
    ) -> Result<Option<SolarTermEvent>, CalendarError> {
        Ok(self.term_on_date(date)?.filter(SolarTermEvent::is_major))
    }

    fn is_major_term_on_date(&self, date: NaiveDate) -> Result<bool, CalendarError> {
        Ok(self.major_term_on_date(date)?.is_some())
    }

    /// First major term on a date strictly after `date`.
    fn next_major_term(&self, date: NaiveDate) -> Result<SolarTermEvent, CalendarError> {
        scan_major_term(self, date, SearchDirection::Forward)
    }

    /// Last major term on a date strictly before `date`.
    fn previous_major_term(&self, date: NaiveDate) -> Result<SolarTermEvent, CalendarError> {
        scan_major_term(self, date, SearchDirection::Backward)
    }
}

/// Probe the dates 1..=[`MAX_TERM_SCAN_DAYS`] days away from `from` for a
/// major term. The start date itself is never probed.
pub fn scan_major_term<C: SexagenaryCalendar + ?Sized>(
    calendar: &C,
    from: NaiveDate,
    direction: SearchDirection,
) -> Result<SolarTermEvent, CalendarError> {
    for step in 1..=MAX_TERM_SCAN_DAYS {
        let days = Days::new(u64::from(step));
        let probe = match direction {
            SearchDirection::Forward => from.checked_add_days(days),
            SearchDirection::Backward => from.checked_sub_days(days),
        }
        .ok_or(CalendarError::DateOutOfRange(from))?;
        trace!(%probe, ?direction, "probing for major term");
        if let Some(event) = calendar.major_term_on_date(probe)? {
            return Ok(event);
        }
    }
    Err(CalendarError::SolarTermSearchExceeded {
        from,
        max_days: MAX_TERM_SCAN_DAYS,
    })
}

impl<C: SexagenaryCalendar + ?Sized> SexagenaryCalendar for &C {
    fn solar_to_lunar(&self, date: NaiveDate) -> Result<LunarDate, CalendarError> {
        (**self).solar_to_lunar(date)
    }

    fn lunar_to_solar(
        &self,
        year: i32,
        month: u8,
        day: u8,
        is_leap: bool,
    ) -> Result<NaiveDate, CalendarError> {
        (**self).lunar_to_solar(year, month, day, is_leap)
    }

    fn pillars_for_date(&self, date: NaiveDate) -> Result<DatePillars, CalendarError> {
        (**self).pillars_for_date(date)
    }

    fn term_on_date(&self, date: NaiveDate) -> Result<Option<SolarTermEvent>, CalendarError> {
        (**self).term_on_date(date)
    }

    fn major_term_on_date(
        &self,
        date: NaiveDate,
    ) -> Result<Option<SolarTermEvent>, CalendarError> {
        (**self).major_term_on_date(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ganzhi_base::Pillar;

    /// Calendar with no terms at all.
    struct Termless;

    impl SexagenaryCalendar for Termless {
        fn solar_to_lunar(&self, date: NaiveDate) -> Result<LunarDate, CalendarError> {
            Err(CalendarError::DateOutOfRange(date))
        }

        fn lunar_to_solar(
            &self,
            _: i32,
            _: u8,
            _: u8,
            _: bool,
        ) -> Result<NaiveDate, CalendarError> {
            Err(CalendarError::InvalidLunarDate("none".into()))
        }

        fn pillars_for_date(&self, _: NaiveDate) -> Result<DatePillars, CalendarError> {
            let p = Pillar::from_cycle_index(0);
            Ok(DatePillars {
                year: p,
                month: p,
                day: p,
            })
        }

        fn term_on_date(&self, _: NaiveDate) -> Result<Option<SolarTermEvent>, CalendarError> {
            Ok(None)
        }
    }

    /// Calendar with a single major term on one date.
    struct OneTerm(NaiveDate);

    impl SexagenaryCalendar for OneTerm {
        fn solar_to_lunar(&self, date: NaiveDate) -> Result<LunarDate, CalendarError> {
            Termless.solar_to_lunar(date)
        }

        fn lunar_to_solar(
            &self,
            y: i32,
            m: u8,
            d: u8,
            l: bool,
        ) -> Result<NaiveDate, CalendarError> {
            Termless.lunar_to_solar(y, m, d, l)
        }

        fn pillars_for_date(&self, date: NaiveDate) -> Result<DatePillars, CalendarError> {
            Termless.pillars_for_date(date)
        }

        fn term_on_date(&self, date: NaiveDate) -> Result<Option<SolarTermEvent>, CalendarError> {
            Ok((date == self.0).then(|| SolarTermEvent {
                index: 1,
                instant: date.and_hms_opt(20, 0, 0).unwrap(),
            }))
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn scan_fails_after_bound() {
        let err = Termless.next_major_term(date(2000, 1, 1)).unwrap_err();
        assert_eq!(
            err,
            CalendarError::SolarTermSearchExceeded {
                from: date(2000, 1, 1),
                max_days: MAX_TERM_SCAN_DAYS
            }
        );
        assert!(Termless.previous_major_term(date(2000, 1, 1)).is_err());
    }

    #[test]
    fn scan_skips_start_date() {
        let cal = OneTerm(date(2002, 1, 5));
        assert!(cal.next_major_term(date(2002, 1, 5)).is_err());
        let ev = cal.next_major_term(date(2001, 12, 23)).unwrap();
        assert_eq!(ev.date(), date(2002, 1, 5));
        let ev = cal.previous_major_term(date(2002, 1, 20)).unwrap();
        assert_eq!(ev.date(), date(2002, 1, 5));
    }

    #[test]
    fn scan_reaches_exactly_the_bound() {
        let from = date(2002, 1, 1);
        let edge = from + Days::new(u64::from(MAX_TERM_SCAN_DAYS));
        assert!(OneTerm(edge).next_major_term(from).is_ok());
        let past = edge + Days::new(1);
        assert!(OneTerm(past).next_major_term(from).is_err());
    }

    #[test]
    fn minor_terms_are_filtered() {
        struct Minor;
        impl SexagenaryCalendar for Minor {
            fn solar_to_lunar(&self, d: NaiveDate) -> Result<LunarDate, CalendarError> {
                Termless.solar_to_lunar(d)
            }
            fn lunar_to_solar(
                &self,
                y: i32,
                m: u8,
                d: u8,
                l: bool,
            ) -> Result<NaiveDate, CalendarError> {
                Termless.lunar_to_solar(y, m, d, l)
            }
            fn pillars_for_date(&self, d: NaiveDate) -> Result<DatePillars, CalendarError> {
                Termless.pillars_for_date(d)
            }
            fn term_on_date(
                &self,
                d: NaiveDate,
            ) -> Result<Option<SolarTermEvent>, CalendarError> {
                Ok(Some(SolarTermEvent {
                    index: 0,
                    instant: d.and_hms_opt(0, 0, 0).unwrap(),
                }))
            }
        }
        assert!(!Minor.is_major_term_on_date(date(2001, 12, 22)).unwrap());
    }

    #[test]
    fn works_through_references() {
        let cal = OneTerm(date(2002, 1, 5));
        let by_ref: &dyn SexagenaryCalendar = &cal;
        assert!(by_ref.is_major_term_on_date(date(2002, 1, 5)).unwrap());
        assert!((&cal).next_major_term(date(2002, 1, 1)).is_ok());
    }
}
