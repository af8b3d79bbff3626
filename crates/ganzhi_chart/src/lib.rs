//! Sexagenary chart computation.
//!
//! This crate provides:
//! - Four pillars of a true-solar birth instant, with the early zi-hour rule
//! - The fortune cycle: direction, onset age, ten decade pillars with
//!   relation labels, handover, and the current decade
//! - [`compute_chart`], running geocoding, correction, and both of the above
//! - Almanac helpers for today's pillars and a two-week day-pillar list
//!
//! Every entry point takes the calendar as a [`ganzhi_calendar::SexagenaryCalendar`]
//! so that any calendar source can be substituted.

pub mod almanac;
pub mod chart;
pub mod error;
pub mod fortune;
pub mod fortune_types;
pub mod four_pillars;
pub mod onset;

pub use almanac::{ALMANAC_DAYS, AlmanacDay, fortnight_almanac, pillars_now};
pub use chart::{
    BaziChart, BirthDate, BirthInput, BirthPlace, DEFAULT_LUNAR_BIRTH_HOUR, compute_chart,
    default_lunar_birth_time,
};
pub use error::ChartError;
pub use fortune::{current_decade_index, decade_pillars, fortune_cycle, handover};
pub use fortune_types::{
    DECADE_COUNT, DECADE_YEARS, DecadePillar, Direction, FortuneCycle, Gender, Handover,
};
pub use four_pillars::{EARLY_ZI_HOUR, four_pillars, hour_pillar, is_early_zi_hour};
pub use onset::{
    DAYS_PER_ONSET_YEAR, NOMINAL_MONTH_DAYS, NOMINAL_YEAR_DAYS, Onset, age_at_onset,
    onset_breakdown, onset_years,
};
