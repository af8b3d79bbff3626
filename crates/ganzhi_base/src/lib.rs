//! Sexagenary primitives: stems, branches, pillars, and relation labels.
//!
//! This crate provides:
//! - The 10 heavenly stems and 12 earthly branches with element and polarity
//! - Stem-branch pillars and the 60-term cycle
//! - The ten-god relation table keyed on element distance and polarity
//! - Display names for solar terms and lunar dates
//!
//! Everything here is pure arithmetic over small fixed tables.

pub mod names;
pub mod pillar;
pub mod relation;
pub mod stem_branch;
pub mod util;

pub use names::{
    LICHUN_INDEX, SOLAR_TERM_COUNT, SOLAR_TERM_NAMES, is_major_term, lunar_day_name,
    lunar_month_name, solar_term_name, weekday_name,
};
pub use pillar::{CYCLE_LEN, FourPillars, Pillar};
pub use relation::{ALL_RELATIONS, RelationLabel, relation, relation_from_indices};
pub use stem_branch::{
    ALL_BRANCHES, ALL_ELEMENTS, ALL_STEMS, Branch, Element, Polarity, Stem,
};
pub use util::{normalize_360, normalize_to_pm180};
