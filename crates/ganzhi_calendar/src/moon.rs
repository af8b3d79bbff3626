//! True new moons (朔).
//!
//! Mean lunation number `k` (k = 0 at the new moon of 2000-01-06) plus the
//! periodic correction terms in the Sun's and Moon's mean anomalies, the
//! Moon's argument of latitude and node, and fourteen planetary arguments.
//! Error is well under a minute across the supported range.
//!
//! Source: J. Meeus, _Astronomical Algorithms_, 2nd ed., ch. 49.

use crate::sun::tt_to_ut;

/// Mean synodic month in days.
pub const SYNODIC_MONTH: f64 = 29.530_588_861;

/// JDE (TT) of mean new moon k = 0.
const LUNATION_EPOCH_JDE: f64 = 2_451_550.097_66;

/// Periodic terms of the new-moon correction.
///
/// Each row `[coef, e_power, n_m, n_mp, n_f, n_om]` contributes
/// `coef · E^e_power · sin(n_m·M + n_mp·M' + n_f·F + n_om·Ω)` days.
#[rustfmt::skip]
const NEW_MOON_TERMS: [[f64; 6]; 25] = [
    [-0.40720, 0.0,  0.0,  1.0,  0.0, 0.0],
    [ 0.17241, 1.0,  1.0,  0.0,  0.0, 0.0],
    [ 0.01608, 0.0,  0.0,  2.0,  0.0, 0.0],
    [ 0.01039, 0.0,  0.0,  0.0,  2.0, 0.0],
    [ 0.00739, 1.0, -1.0,  1.0,  0.0, 0.0],
    [-0.00514, 1.0,  1.0,  1.0,  0.0, 0.0],
    [ 0.00208, 2.0,  2.0,  0.0,  0.0, 0.0],
    [-0.00111, 0.0,  0.0,  1.0, -2.0, 0.0],
    [-0.00057, 0.0,  0.0,  1.0,  2.0, 0.0],
    [ 0.00056, 1.0,  1.0,  2.0,  0.0, 0.0],
    [-0.00042, 0.0,  0.0,  3.0,  0.0, 0.0],
    [ 0.00042, 1.0,  1.0,  0.0,  2.0, 0.0],
    [ 0.00038, 1.0,  1.0,  0.0, -2.0, 0.0],
    [-0.00024, 1.0, -1.0,  2.0,  0.0, 0.0],
    [-0.00017, 0.0,  0.0,  0.0,  0.0, 1.0],
    [-0.00007, 0.0,  2.0,  1.0,  0.0, 0.0],
    [ 0.00004, 0.0,  0.0,  2.0, -2.0, 0.0],
    [ 0.00004, 0.0,  3.0,  0.0,  0.0, 0.0],
    [ 0.00004, 0.0,  1.0,  1.0, -2.0, 0.0],
    [ 0.00003, 0.0,  0.0,  2.0,  2.0, 0.0],
    [-0.00003, 0.0,  1.0,  1.0,  2.0, 0.0],
    [ 0.00003, 0.0, -1.0,  1.0,  2.0, 0.0],
    [-0.00002, 0.0, -1.0,  1.0, -2.0, 0.0],
    [-0.00002, 0.0,  1.0,  3.0,  0.0, 0.0],
    [ 0.00002, 0.0,  0.0,  4.0,  0.0, 0.0],
];

/// Planetary arguments `[a0, a1, coef]`: `coef · sin(a0 + a1·k)` days.
#[rustfmt::skip]
const PLANETARY_TERMS: [[f64; 3]; 14] = [
    [299.77,  0.107408, 0.000325],
    [251.88,  0.016321, 0.000165],
    [251.83, 26.651886, 0.000164],
    [349.42, 36.412478, 0.000126],
    [ 84.66, 18.206239, 0.000110],
    [141.74, 53.303771, 0.000062],
    [207.14,  2.453732, 0.000060],
    [154.84,  7.306860, 0.000056],
    [ 34.52, 27.261239, 0.000047],
    [207.19,  0.121824, 0.000042],
    [291.34,  1.844379, 0.000040],
    [161.72, 24.198154, 0.000037],
    [239.56, 25.513099, 0.000035],
    [331.55,  3.592518, 0.000023],
];

/// JDE (TT) of true new moon number `k`.
pub fn new_moon_jde(k: i64) -> f64 {
    let k = k as f64;
    let t = k / 1236.85;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let mean = LUNATION_EPOCH_JDE + SYNODIC_MONTH * k + 0.000_154_37 * t2 - 0.000_000_150 * t3
        + 0.000_000_000_73 * t4;

    let e = 1.0 - 0.002516 * t - 0.0000074 * t2;
    let m = (2.5534 + 29.105_356_70 * k - 0.000_001_4 * t2 - 0.000_000_11 * t3).to_radians();
    let mp = (201.5643 + 385.816_935_28 * k + 0.010_758_2 * t2 + 0.000_012_38 * t3
        - 0.000_000_058 * t4)
        .to_radians();
    let f = (160.7108 + 390.670_502_84 * k - 0.001_611_8 * t2 - 0.000_002_27 * t3
        + 0.000_000_011 * t4)
        .to_radians();
    let om = (124.7746 - 1.563_755_88 * k + 0.002_067_2 * t2 + 0.000_002_15 * t3).to_radians();

    let periodic: f64 = NEW_MOON_TERMS
        .iter()
        .map(|&[coef, e_pow, n_m, n_mp, n_f, n_om]| {
            coef * e.powi(e_pow as i32) * (n_m * m + n_mp * mp + n_f * f + n_om * om).sin()
        })
        .sum();

    let planetary: f64 = PLANETARY_TERMS
        .iter()
        .enumerate()
        .map(|(i, &[a0, a1, coef])| {
            let mut arg = a0 + a1 * k;
            if i == 0 {
                arg -= 0.009173 * t2;
            }
            coef * arg.to_radians().sin()
        })
        .sum();

    mean + periodic + planetary
}

/// JD (UT) of true new moon number `k`.
pub fn new_moon_jd_ut(k: i64) -> f64 {
    tt_to_ut(new_moon_jde(k))
}

/// Lunation number whose mean new moon is nearest at or before `jd`.
pub fn approx_lunation(jd: f64) -> i64 {
    ((jd - LUNATION_EPOCH_JDE) / SYNODIC_MONTH).floor() as i64
}
