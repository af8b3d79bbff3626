//! Onset (起运) of the fortune cycle.
//!
//! Three days between birth and the bounding major term count as one year
//! of age. The display breakdown uses a nominal 360-day year of 30-day
//! months and truncates; the anchoring age rounds to the nearest year.

use serde::Serialize;

/// Days of separation equivalent to one year of onset age.
pub const DAYS_PER_ONSET_YEAR: f64 = 3.0;

/// Nominal days in a year for the breakdown.
pub const NOMINAL_YEAR_DAYS: f64 = 360.0;

/// Nominal days in a month for the breakdown.
pub const NOMINAL_MONTH_DAYS: f64 = 30.0;

/// Onset age as whole years, months, and days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Onset {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

/// Fractional onset age for a birth-to-term separation in days.
pub fn onset_years(days_diff: f64) -> f64 {
    days_diff.abs() / DAYS_PER_ONSET_YEAR
}

/// Truncated years/months/days breakdown of a fractional onset age.
pub fn onset_breakdown(years_float: f64) -> Onset {
    let years = years_float.floor();
    let rem_days = (years_float - years) * NOMINAL_YEAR_DAYS;
    Onset {
        years: years as u32,
        months: (rem_days / NOMINAL_MONTH_DAYS).floor() as u32,
        days: (rem_days % NOMINAL_MONTH_DAYS).floor() as u32,
    }
}

/// Age at which the first decade starts: the fractional age rounded.
pub fn age_at_onset(years_float: f64) -> u32 {
    years_float.round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_days_per_year() {
        assert!((onset_years(3.0) - 1.0).abs() < 1e-12);
        assert!((onset_years(-6.0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn reference_case_breakdown() {
        // 13.315 days -> 4.438 years -> 4y 5m 7d, anchored at 4
        let y = onset_years(13.315);
        assert_eq!(
            onset_breakdown(y),
            Onset {
                years: 4,
                months: 5,
                days: 7
            }
        );
        assert_eq!(age_at_onset(y), 4);
    }

    #[test]
    fn half_year_is_six_months() {
        let o = onset_breakdown(onset_years(1.5));
        assert_eq!(o, Onset { years: 0, months: 6, days: 0 });
    }

    #[test]
    fn round_and_floor_differ_past_half() {
        let y = 4.6;
        assert_eq!(onset_breakdown(y).years, 4);
        assert_eq!(age_at_onset(y), 5);
    }

    #[test]
    fn zero_separation() {
        let o = onset_breakdown(0.0);
        assert_eq!(o, Onset { years: 0, months: 0, days: 0 });
        assert_eq!(age_at_onset(0.0), 0);
    }
}
