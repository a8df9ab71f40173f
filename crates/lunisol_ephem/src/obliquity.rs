//! Mean obliquity of the ecliptic and a 2-term nutation correction.
//!
//! The mean obliquity is the standard polynomial in Julian centuries since
//! J2000.0. Nutation keeps only the two dominant terms (lunar node and
//! 2 × solar mean longitude), good to ~0.5″, far inside the day-level
//! precision contract.

use lunisol_time::jd_tt_to_centuries;

/// Mean obliquity of the ecliptic in degrees.
///
/// `ε₀ = 23°26′21.448″ − 46.8150″·T − 0.00059″·T² + 0.001813″·T³`
pub fn mean_obliquity_deg(jd_tt: f64) -> f64 {
    let t = jd_tt_to_centuries(jd_tt);
    let t2 = t * t;
    let t3 = t2 * t;
    23.0 + 26.0 / 60.0
        + (21.448 - 46.8150 * t - 0.00059 * t2 + 0.001813 * t3) / 3600.0
}

/// 2-term nutation: returns `(Δψ, Δε)` in degrees.
///
/// `Δψ = −17.20″·sin Ω − 1.32″·sin 2L`
/// `Δε =  +9.20″·cos Ω + 0.57″·cos 2L`
///
/// where Ω is the mean longitude of the lunar ascending node and L the
/// solar mean longitude.
pub fn nutation_deg(jd_tt: f64) -> (f64, f64) {
    let t = jd_tt_to_centuries(jd_tt);
    let omega = (125.04452 - 1934.136_261 * t).to_radians();
    let two_l = (2.0 * (280.4665 + 36000.7698 * t)).to_radians();

    let dpsi = (-17.20 * omega.sin() - 1.32 * two_l.sin()) / 3600.0;
    let deps = (9.20 * omega.cos() + 0.57 * two_l.cos()) / 3600.0;
    (dpsi, deps)
}

/// True obliquity (mean + nutation in obliquity) in degrees.
pub fn true_obliquity_deg(jd_tt: f64) -> f64 {
    let (_, deps) = nutation_deg(jd_tt);
    mean_obliquity_deg(jd_tt) + deps
}
