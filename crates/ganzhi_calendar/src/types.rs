//! Result types shared by every calendar implementation.

use std::fmt::{Display, Formatter};

use chrono::{NaiveDate, NaiveDateTime};
use ganzhi_base::{Pillar, is_major_term, lunar_day_name, lunar_month_name, solar_term_name};
use serde::Serialize;

/// Year, month, and day pillars of one civil date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DatePillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
}

/// A solar term with its exact civil instant (UTC+8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SolarTermEvent {
    /// Term index, 0 = 冬至 .. 23 = 大雪.
    pub index: u8,
    /// Instant the Sun reaches the term's longitude, to the second.
    pub instant: NaiveDateTime,
}

impl SolarTermEvent {
    pub fn name(&self) -> &'static str {
        solar_term_name(self.index)
    }

    /// Whether this is one of the 12 "jie" terms.
    pub fn is_major(&self) -> bool {
        is_major_term(self.index)
    }

    /// Civil date the term falls on.
    pub fn date(&self) -> NaiveDate {
        self.instant.date()
    }
}

impl Display for SolarTermEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name(), self.instant.format("%Y-%m-%d %H:%M:%S"))
    }
}

/// A date in the Chinese lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LunarDate {
    /// Lunar year, labelled by the Gregorian year in which it mostly falls.
    pub year: i32,
    /// Month number, 1..=12.
    pub month: u8,
    /// Day of month, 1..=30.
    pub day: u8,
    /// Whether the month is intercalary (闰).
    pub is_leap: bool,
}

impl LunarDate {
    /// e.g. "冬月" or "闰四月".
    pub fn month_name(&self) -> String {
        lunar_month_name(self.month, self.is_leap).unwrap_or_default()
    }

    /// e.g. "初九".
    pub fn day_name(&self) -> &'static str {
        lunar_day_name(self.day).unwrap_or_default()
    }

    /// Pillar of the lunar year. Changes at the lunar new year, not at 立春.
    pub fn year_pillar(&self) -> Pillar {
        Pillar::from_indices(self.year - 4, self.year - 4)
    }

    /// e.g. "辛巳年冬月初九".
    pub fn sexagenary_label(&self) -> String {
        format!("{}年{}{}", self.year_pillar(), self.month_name(), self.day_name())
    }
}

impl Display for LunarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}年{}{}", self.year, self.month_name(), self.day_name())
    }
}
