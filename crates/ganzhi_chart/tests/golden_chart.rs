//! Golden chart scenarios.
//!
//! The reference case is pinned with a table-backed calendar so it does not
//! depend on the built-in astronomy; the built-in calendar is checked
//! separately with tolerances.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use ganzhi_base::{Pillar, RelationLabel};
use ganzhi_calendar::{
    AstronomicalCalendar, CalendarError, DatePillars, LunarDate, SexagenaryCalendar,
    SolarTermEvent,
};
use ganzhi_chart::{
    BirthDate, BirthInput, BirthPlace, ChartError, DECADE_COUNT, Direction, Gender, Onset,
    compute_chart, four_pillars,
};
use ganzhi_geo::{FixedResolver, GeoError, GeoPoint, GeoResolver};
use ganzhi_time::parse_civil;

/// Built-in calendar with day pillars and term instants taken from a
/// fixed reference table where one is listed.
struct ReferenceTableCalendar {
    inner: AstronomicalCalendar,
    day_pillars: HashMap<NaiveDate, Pillar>,
    terms: HashMap<NaiveDate, SolarTermEvent>,
}

impl ReferenceTableCalendar {
    fn reference() -> Self {
        let d = date(2001, 12, 23);
        let xiaohan = date(2002, 1, 5);
        Self {
            inner: AstronomicalCalendar::new(),
            day_pillars: HashMap::from([(d, Pillar::from_indices(7, 9))]), // 辛酉
            terms: HashMap::from([(
                xiaohan,
                SolarTermEvent {
                    index: 1,
                    instant: xiaohan.and_hms_opt(20, 43, 0).unwrap(),
                },
            )]),
        }
    }
}

impl SexagenaryCalendar for ReferenceTableCalendar {
    fn solar_to_lunar(&self, date: NaiveDate) -> Result<LunarDate, CalendarError> {
        self.inner.solar_to_lunar(date)
    }

    fn lunar_to_solar(
        &self,
        year: i32,
        month: u8,
        day: u8,
        is_leap: bool,
    ) -> Result<NaiveDate, CalendarError> {
        self.inner.lunar_to_solar(year, month, day, is_leap)
    }

    fn pillars_for_date(&self, date: NaiveDate) -> Result<DatePillars, CalendarError> {
        let mut p = self.inner.pillars_for_date(date)?;
        if let Some(day) = self.day_pillars.get(&date) {
            p.day = *day;
        }
        Ok(p)
    }

    fn term_on_date(&self, date: NaiveDate) -> Result<Option<SolarTermEvent>, CalendarError> {
        match self.terms.get(&date) {
            Some(ev) => Ok(Some(*ev)),
            None => self.inner.term_on_date(date),
        }
    }
}

/// Geocoder knowing only the reference birth place.
struct DongyangOnly;

impl GeoResolver for DongyangOnly {
    fn resolve(&self, query: &str) -> Result<GeoPoint, GeoError> {
        if query == "浙江省东阳市" {
            Ok(GeoPoint {
                longitude: 120.242,
                latitude: 29.289,
            })
        } else {
            Err(GeoError::LocationNotFound(query.to_string()))
        }
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn now() -> NaiveDateTime {
    parse_civil("2025-06-01 12:00:00").unwrap()
}

fn reference_input(gender: Gender) -> BirthInput {
    BirthInput {
        date: BirthDate::Solar(parse_civil("2001-12-23 13:00:00").unwrap()),
        place: BirthPlace::Named("浙江省东阳市".into()),
        gender,
    }
}

#[test]
fn reference_case_pillars() {
    let cal = ReferenceTableCalendar::reference();
    let chart =
        compute_chart(&cal, &DongyangOnly, &reference_input(Gender::Female), now()).unwrap();
    assert_eq!(chart.pillars.to_string(), "辛巳 庚子 辛酉 乙未");
    let expected = parse_civil("2001-12-23 13:00:58").unwrap() + TimeDelta::milliseconds(80);
    assert_eq!(chart.corrected, expected);
    assert_eq!(chart.shichen, "未时");
    assert_eq!(chart.lunar.to_string(), "2001年冬月初九");
}

#[test]
fn reference_case_fortune() {
    let cal = ReferenceTableCalendar::reference();
    let chart =
        compute_chart(&cal, &DongyangOnly, &reference_input(Gender::Female), now()).unwrap();
    let f = &chart.fortune;
    assert_eq!(f.direction, Direction::Forward);
    assert_eq!(f.boundary.name(), "小寒");
    assert_eq!(
        f.onset,
        Onset {
            years: 4,
            months: 5,
            days: 8
        }
    );
    assert_eq!(f.age_at_onset, 4);
    assert_eq!(f.decades.len(), DECADE_COUNT);

    let names: Vec<String> = f.decades.iter().map(|d| d.pillar.to_string()).collect();
    assert_eq!(
        names,
        ["辛丑", "壬寅", "癸卯", "甲辰", "乙巳", "丙午", "丁未", "戊申", "己酉", "庚戌"]
    );
    let ages: Vec<u32> = f.decades.iter().map(|d| d.start_age).collect();
    assert_eq!(ages, [4, 14, 24, 34, 44, 54, 64, 74, 84, 94]);
    assert_eq!(f.decades[0].start_year, 2005);
    assert_eq!(f.decades[0].relation, RelationLabel::Companion);
    assert_eq!(f.decades[1].relation, RelationLabel::HurtingOfficer);
    assert_eq!(f.decades[2].relation, RelationLabel::EatingGod);

    // 2025 - 2001 = 24
    assert_eq!(f.current, Some(2));
    assert_eq!(f.current_decade().unwrap().pillar.to_string(), "癸卯");
    assert_eq!(f.handover.year, 2006);
    assert_eq!(f.handover.month, 5);
}

#[test]
fn builtin_calendar_reference_case() {
    let cal = AstronomicalCalendar::new();
    let chart =
        compute_chart(&cal, &DongyangOnly, &reference_input(Gender::Female), now()).unwrap();
    // The continuous day count puts 2001-12-23 on 庚申.
    assert_eq!(chart.pillars.to_string(), "辛巳 庚子 庚申 癸未");
    let f = &chart.fortune;
    assert_eq!(f.direction, Direction::Forward);
    assert_eq!(f.boundary.date(), date(2002, 1, 5));
    assert_eq!((f.onset.years, f.onset.months), (4, 5));
    assert!((7..=8).contains(&f.onset.days), "{:?}", f.onset);
    assert_eq!(f.age_at_onset, 4);
    assert_eq!(f.decades[0].relation, RelationLabel::RobWealth);
}

#[test]
fn male_reference_birth_runs_backward() {
    let cal = ReferenceTableCalendar::reference();
    let chart =
        compute_chart(&cal, &DongyangOnly, &reference_input(Gender::Male), now()).unwrap();
    let f = &chart.fortune;
    assert_eq!(f.direction, Direction::Backward);
    assert_eq!(f.boundary.name(), "大雪");
    assert_eq!(f.boundary.date(), date(2001, 12, 7));
    assert_eq!(f.decades[0].pillar.to_string(), "己亥");
    assert_eq!(f.age_at_onset, 5);
}

#[test]
fn early_zi_hour_takes_next_day_pillar() {
    let cal = AstronomicalCalendar::new();
    let late = parse_civil("2024-02-03 23:30:00").unwrap();
    let p = four_pillars(&cal, late).unwrap();
    let today = cal.pillars_for_date(date(2024, 2, 3)).unwrap();
    let tomorrow = cal.pillars_for_date(date(2024, 2, 4)).unwrap();
    assert_eq!(p.year, today.year);
    assert_eq!(p.month, today.month);
    assert_eq!(p.day, tomorrow.day);
    assert_eq!(p.to_string(), "癸卯 乙丑 戊戌 壬子");

    let before = four_pillars(&cal, parse_civil("2024-02-03 22:59:59").unwrap()).unwrap();
    assert_eq!(before.day, today.day);
}

#[test]
fn lunar_birth_defaults_to_noon() {
    let cal = AstronomicalCalendar::new();
    let input = BirthInput {
        date: BirthDate::lunar(2001, 11, 9, false),
        place: BirthPlace::Coordinates(GeoPoint {
            longitude: 120.0,
            latitude: 30.0,
        }),
        gender: Gender::Female,
    };
    let unused = FixedResolver(GeoPoint {
        longitude: 0.0,
        latitude: 0.0,
    });
    let chart = compute_chart(&cal, &unused, &input, now()).unwrap();
    assert_eq!(chart.civil, parse_civil("2001-12-23 12:00:00").unwrap());
    assert_eq!(chart.corrected, chart.civil);
    assert_eq!(chart.shichen, "午时");
}

#[test]
fn unknown_place_is_a_geo_error() {
    let cal = AstronomicalCalendar::new();
    let mut input = reference_input(Gender::Male);
    input.place = BirthPlace::Named("Atlantis".into());
    let err = compute_chart(&cal, &DongyangOnly, &input, now()).unwrap_err();
    assert_eq!(err, ChartError::Geo(GeoError::LocationNotFound("Atlantis".into())));
}

#[test]
fn birth_year_outside_range_is_rejected() {
    let cal = AstronomicalCalendar::new();
    let mut input = reference_input(Gender::Male);
    input.date = BirthDate::Solar(parse_civil("1750-01-01 12:00:00").unwrap());
    let err = compute_chart(&cal, &DongyangOnly, &input, now()).unwrap_err();
    assert!(matches!(err, ChartError::Time(_)), "{err}");
}

#[test]
fn missing_leap_month_is_a_calendar_error() {
    let cal = AstronomicalCalendar::new();
    let mut input = reference_input(Gender::Male);
    input.date = BirthDate::lunar(2024, 3, 1, true);
    let err = compute_chart(&cal, &DongyangOnly, &input, now()).unwrap_err();
    assert!(matches!(err, ChartError::Calendar(CalendarError::InvalidLunarDate(_))));
}

#[test]
fn chart_serializes_with_hanzi_labels() {
    let cal = ReferenceTableCalendar::reference();
    let chart =
        compute_chart(&cal, &DongyangOnly, &reference_input(Gender::Female), now()).unwrap();
    let v = serde_json::to_value(&chart).unwrap();
    assert_eq!(v["pillars"]["year"], "辛巳");
    assert_eq!(v["pillars"]["day"], "辛酉");
    assert_eq!(v["fortune"]["direction"], "forward");
    assert_eq!(v["fortune"]["decades"][0]["pillar"], "辛丑");
    assert_eq!(v["fortune"]["decades"][0]["relation"], "比肩");
    assert_eq!(v["fortune"]["current"], 2);
    assert_eq!(v["gender"], "female");
}
