//! Fortune-cycle computation.
//!
//! Direction comes from the year stem and gender. The nearest major term
//! in that direction fixes the onset age, and the decade pillars step
//! through the 60-cycle from the month pillar, starting one step away.

use chrono::{Datelike, NaiveDateTime};
use ganzhi_base::{FourPillars, Pillar, Stem, relation};
use ganzhi_calendar::{CalendarError, SexagenaryCalendar};
use tracing::debug;

use crate::fortune_types::{
    DECADE_COUNT, DECADE_YEARS, DecadePillar, Direction, FortuneCycle, Gender, Handover,
};
use crate::onset::{Onset, age_at_onset, onset_breakdown, onset_years};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// The ten decade pillars following (or preceding) `month`.
pub fn decade_pillars(
    month: Pillar,
    day_stem: Stem,
    direction: Direction,
    age_at_onset: u32,
    birth_year: i32,
) -> Vec<DecadePillar> {
    (0..DECADE_COUNT as u32)
        .map(|i| {
            let offset = direction.sign() * (i as i32 + 1);
            let pillar = month.offset(offset);
            let start_age = age_at_onset + i * DECADE_YEARS;
            DecadePillar {
                start_age,
                start_year: birth_year + start_age as i32,
                pillar,
                relation: relation(day_stem, pillar.stem),
            }
        })
        .collect()
}

/// Index of the last decade whose start age is at most `current_age`.
pub fn current_decade_index(decades: &[DecadePillar], current_age: i32) -> Option<usize> {
    decades
        .iter()
        .rposition(|d| i64::from(d.start_age) <= i64::from(current_age))
}

/// Handover year and month: birth year/month advanced by the onset's
/// whole years and months.
pub fn handover(birth_year: i32, birth_month: u32, onset: &Onset) -> Handover {
    let months = birth_month - 1 + onset.months;
    Handover {
        year: birth_year + onset.years as i32 + (months / 12) as i32,
        month: months % 12 + 1,
    }
}

/// Fortune cycle for a corrected birth instant.
///
/// `now` picks the current decade by calendar year.
pub fn fortune_cycle<C: SexagenaryCalendar + ?Sized>(
    calendar: &C,
    corrected: NaiveDateTime,
    pillars: &FourPillars,
    gender: Gender,
    now: NaiveDateTime,
) -> Result<FortuneCycle, CalendarError> {
    let direction = Direction::for_birth(pillars.year.stem, gender);
    let birth_date = corrected.date();
    let boundary = match direction {
        Direction::Forward => calendar.next_major_term(birth_date)?,
        Direction::Backward => calendar.previous_major_term(birth_date)?,
    };

    let days_to_boundary =
        (boundary.instant - corrected).num_milliseconds().abs() as f64 / MILLIS_PER_DAY;
    let years_float = onset_years(days_to_boundary);
    let onset = onset_breakdown(years_float);
    let age_at_onset = age_at_onset(years_float);

    let birth_year = corrected.year();
    let decades = decade_pillars(
        pillars.month,
        pillars.day_master(),
        direction,
        age_at_onset,
        birth_year,
    );
    let current = current_decade_index(&decades, now.year() - birth_year);
    let handover = handover(birth_year, corrected.month(), &onset);

    debug!(
        ?direction,
        boundary = %boundary,
        days_to_boundary,
        onset_years = onset.years,
        onset_months = onset.months,
        onset_days = onset.days,
        age_at_onset,
        "fortune cycle"
    );

    Ok(FortuneCycle {
        direction,
        boundary,
        days_to_boundary,
        onset,
        age_at_onset,
        handover,
        decades,
        current,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ganzhi_base::{Branch, RelationLabel};

    fn gengzi() -> Pillar {
        Pillar::new(Stem::Geng, Branch::Zi)
    }

    #[test]
    fn forward_decades_start_one_step_on() {
        let d = decade_pillars(gengzi(), Stem::Xin, Direction::Forward, 4, 2001);
        assert_eq!(d.len(), DECADE_COUNT);
        assert_eq!(d[0].pillar.to_string(), "辛丑");
        assert_eq!(d[1].pillar.to_string(), "壬寅");
        assert_eq!(d[9].pillar.to_string(), "庚戌");
        assert_eq!(d[0].start_age, 4);
        assert_eq!(d[0].start_year, 2005);
        assert_eq!(d[9].start_age, 94);
        assert_eq!(d[0].relation, RelationLabel::Companion);
    }

    #[test]
    fn backward_decades() {
        let d = decade_pillars(gengzi(), Stem::Xin, Direction::Backward, 7, 1990);
        assert_eq!(d[0].pillar.to_string(), "己亥");
        assert_eq!(d[1].pillar.to_string(), "戊戌");
        assert_eq!(d[0].relation, RelationLabel::IndirectResource);
    }

    #[test]
    fn first_decade_never_equals_month() {
        for i in 0..60 {
            let m = Pillar::from_cycle_index(i);
            for dir in [Direction::Forward, Direction::Backward] {
                let d = decade_pillars(m, Stem::Jia, dir, 0, 2000);
                assert_ne!(d[0].pillar.stem, m.stem);
                assert_ne!(d[0].pillar.branch, m.branch);
            }
        }
    }

    #[test]
    fn current_pointer() {
        let d = decade_pillars(gengzi(), Stem::Xin, Direction::Forward, 4, 2001);
        assert_eq!(current_decade_index(&d, 3), None);
        assert_eq!(current_decade_index(&d, 4), Some(0));
        assert_eq!(current_decade_index(&d, 13), Some(0));
        assert_eq!(current_decade_index(&d, 14), Some(1));
        assert_eq!(current_decade_index(&d, 24), Some(2));
        assert_eq!(current_decade_index(&d, 150), Some(9));
    }

    #[test]
    fn handover_carries_months() {
        let o = Onset {
            years: 4,
            months: 5,
            days: 7,
        };
        assert_eq!(handover(2001, 12, &o), Handover { year: 2006, month: 5 });
        assert_eq!(handover(2001, 7, &o), Handover { year: 2005, month: 12 });
        let o = Onset {
            years: 0,
            months: 11,
            days: 0,
        };
        assert_eq!(handover(2001, 12, &o), Handover { year: 2002, month: 11 });
    }

    #[test]
    fn birth_year_comes_from_corrected_time() {
        use chrono::NaiveDate;
        use ganzhi_calendar::AstronomicalCalendar;
        use ganzhi_time::true_solar_time;

        use crate::four_pillars::four_pillars;

        let cal = AstronomicalCalendar::new();
        // 23:58 civil at 121°E is 00:02 the next day, in the next year.
        let civil = NaiveDate::from_ymd_opt(2001, 12, 31)
            .unwrap()
            .and_hms_opt(23, 58, 0)
            .unwrap();
        let corrected = true_solar_time(civil, 121.0);
        assert_eq!(corrected.date(), NaiveDate::from_ymd_opt(2002, 1, 1).unwrap());

        let pillars = four_pillars(&cal, corrected).unwrap();
        let now = NaiveDate::from_ymd_opt(2030, 6, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let fc = fortune_cycle(&cal, corrected, &pillars, Gender::Female, now).unwrap();

        let age = fc.age_at_onset as i32;
        assert_eq!(fc.decades[0].start_year, 2002 + age);
        assert_eq!(fc.handover, handover(2002, 1, &fc.onset));
        assert_eq!(fc.current, current_decade_index(&fc.decades, 28));
    }
}
