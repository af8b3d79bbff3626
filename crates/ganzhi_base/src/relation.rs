//! Ten-god (十神) relation of a stem to the day stem.
//!
//! The label depends only on how many generating steps separate the two
//! elements and whether the polarities match, so the whole relation is a
//! 5 x 2 table.

use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

use crate::stem_branch::Stem;

/// The ten relation labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationLabel {
    /// 比肩: same element, same polarity.
    Companion,
    /// 劫财: same element, opposite polarity.
    RobWealth,
    /// 食神: element the day stem generates, same polarity.
    EatingGod,
    /// 伤官: element the day stem generates, opposite polarity.
    HurtingOfficer,
    /// 偏财: element the day stem overcomes, same polarity.
    IndirectWealth,
    /// 正财: element the day stem overcomes, opposite polarity.
    DirectWealth,
    /// 七杀: element that overcomes the day stem, same polarity.
    SevenKillings,
    /// 正官: element that overcomes the day stem, opposite polarity.
    DirectOfficer,
    /// 偏印: element that generates the day stem, same polarity.
    IndirectResource,
    /// 正印: element that generates the day stem, opposite polarity.
    DirectResource,
}

/// All 10 labels, in table order.
pub const ALL_RELATIONS: [RelationLabel; 10] = [
    RelationLabel::Companion,
    RelationLabel::RobWealth,
    RelationLabel::EatingGod,
    RelationLabel::HurtingOfficer,
    RelationLabel::IndirectWealth,
    RelationLabel::DirectWealth,
    RelationLabel::SevenKillings,
    RelationLabel::DirectOfficer,
    RelationLabel::IndirectResource,
    RelationLabel::DirectResource,
];

/// `RELATION_TABLE[element_offset][polarity_differs as usize]`.
const RELATION_TABLE: [[RelationLabel; 2]; 5] = [
    [RelationLabel::Companion, RelationLabel::RobWealth],
    [RelationLabel::EatingGod, RelationLabel::HurtingOfficer],
    [RelationLabel::IndirectWealth, RelationLabel::DirectWealth],
    [RelationLabel::SevenKillings, RelationLabel::DirectOfficer],
    [RelationLabel::IndirectResource, RelationLabel::DirectResource],
];

impl RelationLabel {
    /// Two-character name.
    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Companion => "比肩",
            Self::RobWealth => "劫财",
            Self::EatingGod => "食神",
            Self::HurtingOfficer => "伤官",
            Self::IndirectWealth => "偏财",
            Self::DirectWealth => "正财",
            Self::SevenKillings => "七杀",
            Self::DirectOfficer => "正官",
            Self::IndirectResource => "偏印",
            Self::DirectResource => "正印",
        }
    }

    /// Generating-cycle distance from the day element, in `0..5`.
    pub const fn element_offset(self) -> u8 {
        match self {
            Self::Companion | Self::RobWealth => 0,
            Self::EatingGod | Self::HurtingOfficer => 1,
            Self::IndirectWealth | Self::DirectWealth => 2,
            Self::SevenKillings | Self::DirectOfficer => 3,
            Self::IndirectResource | Self::DirectResource => 4,
        }
    }

    /// Whether the label implies matching polarity.
    pub const fn polarity_matches(self) -> bool {
        matches!(
            self,
            Self::Companion
                | Self::EatingGod
                | Self::IndirectWealth
                | Self::SevenKillings
                | Self::IndirectResource
        )
    }
}

impl Display for RelationLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hanzi())
    }
}

impl Serialize for RelationLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.hanzi())
    }
}

/// Label `other` relative to the day stem.
pub fn relation(day: Stem, other: Stem) -> RelationLabel {
    relation_from_indices(day.index(), other.index())
}

/// Same as [`relation`] over raw stem indices (taken modulo 10).
pub fn relation_from_indices(day: u8, other: u8) -> RelationLabel {
    let day = day % 10;
    let other = other % 10;
    let offset = (other / 2 + 5 - day / 2) % 5;
    let differs = day % 2 != other % 2;
    RELATION_TABLE[offset as usize][differs as usize]
}
