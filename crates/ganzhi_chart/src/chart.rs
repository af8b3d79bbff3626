//! End-to-end chart assembly.

use chrono::{NaiveDateTime, NaiveTime};
use ganzhi_base::FourPillars;
use ganzhi_calendar::{LunarDate, SexagenaryCalendar};
use ganzhi_geo::{GeoPoint, GeoResolver};
use ganzhi_time::BirthMoment;
use serde::Serialize;
use tracing::debug;

use crate::error::ChartError;
use crate::fortune::fortune_cycle;
use crate::fortune_types::{FortuneCycle, Gender};
use crate::four_pillars::four_pillars;

/// Hour assumed for a lunar birth date given without a time of day.
pub const DEFAULT_LUNAR_BIRTH_HOUR: u32 = 12;

/// 12:00:00, the time of day assumed for a lunar birth date.
pub fn default_lunar_birth_time() -> NaiveTime {
    NaiveTime::from_hms_opt(DEFAULT_LUNAR_BIRTH_HOUR, 0, 0).unwrap_or_default()
}

/// When the subject was born, as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthDate {
    /// Civil (UTC+8) timestamp.
    Solar(NaiveDateTime),
    /// Lunar date with a civil time of day.
    Lunar {
        year: i32,
        month: u8,
        day: u8,
        is_leap: bool,
        time: NaiveTime,
    },
}

impl BirthDate {
    /// Lunar birth at [`default_lunar_birth_time`].
    pub fn lunar(year: i32, month: u8, day: u8, is_leap: bool) -> Self {
        Self::Lunar {
            year,
            month,
            day,
            is_leap,
            time: default_lunar_birth_time(),
        }
    }

    /// Civil timestamp, converting a lunar date through `calendar`.
    pub fn to_civil<C: SexagenaryCalendar + ?Sized>(
        &self,
        calendar: &C,
    ) -> Result<NaiveDateTime, ChartError> {
        match *self {
            Self::Solar(dt) => Ok(dt),
            Self::Lunar {
                year,
                month,
                day,
                is_leap,
                time,
            } => Ok(calendar
                .lunar_to_solar(year, month, day, is_leap)?
                .and_time(time)),
        }
    }
}

/// Where the subject was born.
#[derive(Debug, Clone, PartialEq)]
pub enum BirthPlace {
    /// Free text for the geocoder.
    Named(String),
    /// Coordinates given directly; no geocoding.
    Coordinates(GeoPoint),
}

/// Everything needed to compute a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BirthInput {
    pub date: BirthDate,
    pub place: BirthPlace,
    pub gender: Gender,
}

/// A computed chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaziChart {
    /// Birth timestamp as given (after any lunar conversion).
    pub civil: NaiveDateTime,
    pub location: GeoPoint,
    /// True solar time of birth.
    pub corrected: NaiveDateTime,
    /// Two-hour period of the corrected time, e.g. "未时".
    pub shichen: String,
    /// Lunar date of the corrected time.
    pub lunar: LunarDate,
    pub gender: Gender,
    pub pillars: FourPillars,
    pub fortune: FortuneCycle,
}

/// Compute a chart: resolve the place, correct to true solar time, then
/// derive pillars and the fortune cycle.
pub fn compute_chart<C, G>(
    calendar: &C,
    geo: &G,
    input: &BirthInput,
    now: NaiveDateTime,
) -> Result<BaziChart, ChartError>
where
    C: SexagenaryCalendar + ?Sized,
    G: GeoResolver + ?Sized,
{
    let civil = input.date.to_civil(calendar)?;
    let location = match &input.place {
        BirthPlace::Named(text) => geo.resolve(text)?,
        BirthPlace::Coordinates(p) => *p,
    };
    let moment = BirthMoment::new(civil, location.longitude, location.latitude)?;
    let corrected = moment.corrected();
    debug!(%civil, %corrected, longitude = location.longitude, "true solar time");

    let lunar = calendar.solar_to_lunar(corrected.date())?;
    let pillars = four_pillars(calendar, corrected)?;
    let fortune = fortune_cycle(calendar, corrected, &pillars, input.gender, now)?;
    let shichen = format!("{}时", pillars.hour.branch.hanzi());

    Ok(BaziChart {
        civil,
        location,
        corrected,
        shichen,
        lunar,
        gender: input.gender,
        pillars,
        fortune,
    })
}
