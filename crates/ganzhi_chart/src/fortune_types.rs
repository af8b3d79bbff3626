//! Types for the fortune cycle (大运).

use ganzhi_base::{Pillar, RelationLabel, Stem};
use ganzhi_calendar::SolarTermEvent;
use serde::Serialize;

use crate::onset::Onset;

/// Number of decade pillars in a cycle.
pub const DECADE_COUNT: usize = 10;

/// Years covered by one decade pillar.
pub const DECADE_YEARS: u32 = 10;

/// Gender of the chart subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Parse `male`/`m`/`男` or `female`/`f`/`女` (ASCII case-insensitive).
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "男" => Some(Self::Male),
            "female" | "f" | "女" => Some(Self::Female),
            _ => None,
        }
    }

    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Male => "男",
            Self::Female => "女",
        }
    }
}

/// Direction in which decade pillars step away from the month pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Forward for a yang year with a male subject or a yin year with a
    /// female subject; backward otherwise.
    pub const fn for_birth(year_stem: Stem, gender: Gender) -> Self {
        let yang = year_stem.is_yang();
        match (yang, gender) {
            (true, Gender::Male) | (false, Gender::Female) => Self::Forward,
            _ => Self::Backward,
        }
    }

    /// +1 forward, -1 backward.
    pub const fn sign(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Forward => "顺排",
            Self::Backward => "逆排",
        }
    }
}

/// One ten-year period of the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DecadePillar {
    /// Age (whole years) at which the period starts.
    pub start_age: u32,
    /// Gregorian year in which the period starts.
    pub start_year: i32,
    pub pillar: Pillar,
    /// Relation of the pillar's stem to the day stem.
    pub relation: RelationLabel,
}

/// Year and month in which the first decade takes over (交运).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Handover {
    pub year: i32,
    /// 1..=12.
    pub month: u32,
}

/// Complete fortune cycle for one birth.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FortuneCycle {
    pub direction: Direction,
    /// Major term that bounds the onset computation.
    pub boundary: SolarTermEvent,
    /// Separation between birth and the boundary, in days.
    pub days_to_boundary: f64,
    pub onset: Onset,
    /// Rounded onset age; `start_age` of the first decade.
    pub age_at_onset: u32,
    pub handover: Handover,
    /// Exactly [`DECADE_COUNT`] entries in ascending age.
    pub decades: Vec<DecadePillar>,
    /// Index into `decades` of the period containing "now".
    pub current: Option<usize>,
}

impl FortuneCycle {
    /// The decade containing "now", if any.
    pub fn current_decade(&self) -> Option<&DecadePillar> {
        self.current.and_then(|i| self.decades.get(i))
    }
}
