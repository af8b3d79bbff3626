//! Apparent geocentric longitude of the Sun and the TT−UT correction.
//!
//! Low-precision solar theory: mean longitude and mean anomaly as
//! polynomials in Julian centuries, a three-term equation of centre, and a
//! combined aberration + nutation-in-longitude correction driven by the
//! lunar node. Accuracy is about 0.01°, i.e. solar-term instants within
//! roughly a quarter of an hour.
//!
//! Source: J. Meeus, _Astronomical Algorithms_, 2nd ed., ch. 25 (public
//! formulas); ΔT polynomials from Espenak & Meeus, _Five Millennium Canon
//! of Solar Eclipses_ (NASA/TP-2006-214141).

use ganzhi_base::normalize_360;
use ganzhi_time::{J2000_JD, SECONDS_PER_DAY};

/// Days per Julian century.
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Apparent longitude of the Sun in degrees [0, 360), for a JD in TT.
pub fn sun_apparent_longitude_deg(jd_tt: f64) -> f64 {
    let t = (jd_tt - J2000_JD) / DAYS_PER_CENTURY;
    let t2 = t * t;

    let l0 = 280.46646 + 36_000.76983 * t + 0.000_303_2 * t2;
    let m = (357.52911 + 35_999.05029 * t - 0.000_153_7 * t2).to_radians();
    let c = (1.914602 - 0.004817 * t - 0.000014 * t2) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();
    let omega = (125.04 - 1934.136 * t).to_radians();

    normalize_360(l0 + c - 0.00569 - 0.00478 * omega.sin())
}

/// ΔT = TT − UT in seconds for a decimal year.
pub fn delta_t_seconds(year: f64) -> f64 {
    let y = year;
    if (2005.0..2050.0).contains(&y) {
        let t = y - 2000.0;
        62.92 + 0.32217 * t + 0.005589 * t * t
    } else if (1986.0..2005.0).contains(&y) {
        let t = y - 2000.0;
        63.86 + 0.3345 * t - 0.060374 * t.powi(2)
            + 0.0017275 * t.powi(3)
            + 0.000651814 * t.powi(4)
            + 0.00002373599 * t.powi(5)
    } else if (1961.0..1986.0).contains(&y) {
        let t = y - 1975.0;
        45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
    } else if (1941.0..1961.0).contains(&y) {
        let t = y - 1950.0;
        29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
    } else if (1920.0..1941.0).contains(&y) {
        let t = y - 1920.0;
        21.20 + 0.84493 * t - 0.076100 * t.powi(2) + 0.0020936 * t.powi(3)
    } else if (1900.0..1920.0).contains(&y) {
        let t = y - 1900.0;
        -2.79 + 1.494119 * t - 0.0598939 * t.powi(2) + 0.0061966 * t.powi(3)
            - 0.000197 * t.powi(4)
    } else if (1860.0..1900.0).contains(&y) {
        let t = y - 1860.0;
        7.62 + 0.5737 * t - 0.251754 * t.powi(2) + 0.01680668 * t.powi(3)
            - 0.0004473624 * t.powi(4)
            + t.powi(5) / 233_174.0
    } else if (1800.0..1860.0).contains(&y) {
        let t = y - 1800.0;
        13.72 - 0.332447 * t + 0.0068612 * t.powi(2) + 0.0041116 * t.powi(3)
            - 0.00037436 * t.powi(4)
            + 0.0000121272 * t.powi(5)
            - 0.0000001699 * t.powi(6)
            + 0.000000000875 * t.powi(7)
    } else {
        let u = (y - 1820.0) / 100.0;
        let long_term = -20.0 + 32.0 * u * u;
        if (2050.0..2150.0).contains(&y) {
            long_term - 0.5628 * (2150.0 - y)
        } else {
            long_term
        }
    }
}

/// Decimal year of a Julian Date (Julian-year approximation).
pub fn decimal_year(jd: f64) -> f64 {
    2000.0 + (jd - J2000_JD) / 365.25
}

/// JD in UT to JD in TT.
pub fn ut_to_tt(jd_ut: f64) -> f64 {
    jd_ut + delta_t_seconds(decimal_year(jd_ut)) / SECONDS_PER_DAY
}

/// JD in TT to JD in UT.
pub fn tt_to_ut(jd_tt: f64) -> f64 {
    jd_tt - delta_t_seconds(decimal_year(jd_tt)) / SECONDS_PER_DAY
}
