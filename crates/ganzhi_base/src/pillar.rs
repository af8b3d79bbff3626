//! Stem-branch pillars (柱) and the 60-term sexagenary cycle.
//!
//! A pillar pairs one stem with one branch. In the true calendar only the 60
//! same-parity pairs occur; [`Pillar`] still accepts any pair so that an
//! external calendar's output can be taken as ground truth.

use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

use crate::stem_branch::{Branch, Stem};

/// Length of the sexagenary cycle.
pub const CYCLE_LEN: u8 = 60;

/// A stem-branch pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Pillar from raw stem and branch indices, each wrapped to its cycle.
    pub fn from_indices(stem: i32, branch: i32) -> Self {
        Self {
            stem: Stem::from_index(stem),
            branch: Branch::from_index(branch),
        }
    }

    /// Pillar at position `i` of the 60-cycle (0 = 甲子), wrapping.
    pub fn from_cycle_index(i: i64) -> Self {
        let i = i.rem_euclid(CYCLE_LEN as i64) as i32;
        Self::from_indices(i, i)
    }

    /// Position in the 60-cycle, or `None` for a mixed-parity pair.
    pub fn cycle_index(self) -> Option<u8> {
        let s = self.stem.index();
        let b = self.branch.index();
        if s % 2 != b % 2 {
            return None;
        }
        // Unique i in 0..60 with i ≡ s (mod 10) and i ≡ b (mod 12).
        (0..CYCLE_LEN).find(|i| i % 10 == s && i % 12 == b)
    }

    /// Advance stem and branch together by `offset` steps (negative = back).
    pub fn offset(self, offset: i32) -> Self {
        Self::from_indices(
            self.stem.index() as i32 + offset,
            self.branch.index() as i32 + offset,
        )
    }

    /// Whether the pair occurs in the sexagenary cycle.
    pub fn is_canonical(self) -> bool {
        self.cycle_index().is_some()
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.hanzi(), self.branch.hanzi())
    }
}

impl Serialize for Pillar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Year, month, day, and hour pillars of one moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    /// The day stem (日主), reference point of every relation label.
    pub fn day_master(&self) -> Stem {
        self.day.stem
    }
}

impl Display for FourPillars {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_starts_at_jiazi() {
        let p = Pillar::from_cycle_index(0);
        assert_eq!(p, Pillar::new(Stem::Jia, Branch::Zi));
        assert_eq!(p.to_string(), "甲子");
    }

    #[test]
    fn cycle_ends_at_guihai() {
        let p = Pillar::from_cycle_index(59);
        assert_eq!(p.to_string(), "癸亥");
        assert_eq!(Pillar::from_cycle_index(60), Pillar::from_cycle_index(0));
        assert_eq!(Pillar::from_cycle_index(-1), p);
    }

    #[test]
    fn cycle_index_roundtrip() {
        for i in 0..60 {
            let p = Pillar::from_cycle_index(i);
            assert_eq!(p.cycle_index(), Some(i as u8));
        }
    }

    #[test]
    fn mixed_parity_has_no_cycle_index() {
        let p = Pillar::new(Stem::Jia, Branch::Chou);
        assert!(!p.is_canonical());
        assert_eq!(p.cycle_index(), None);
    }

    #[test]
    fn offset_moves_both_parts() {
        let p = Pillar::new(Stem::Geng, Branch::Zi);
        assert_eq!(p.offset(1).to_string(), "辛丑");
        assert_eq!(p.offset(-1).to_string(), "己亥");
        assert_eq!(p.offset(10).to_string(), "庚戌");
    }

    #[test]
    fn four_pillars_display() {
        let fp = FourPillars {
            year: Pillar::new(Stem::Xin, Branch::Si),
            month: Pillar::new(Stem::Geng, Branch::Zi),
            day: Pillar::new(Stem::Xin, Branch::You),
            hour: Pillar::new(Stem::Yi, Branch::Wei),
        };
        assert_eq!(fp.to_string(), "辛巳 庚子 辛酉 乙未");
        assert_eq!(fp.day_master(), Stem::Xin);
    }
}
