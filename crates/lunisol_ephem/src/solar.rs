//! Apparent solar position.
//!
//! Mean elements plus a 3-term equation of center give the true longitude;
//! the apparent longitude adds aberration and the Ω-dependent nutation
//! term. Equatorial coordinates are derived for the rise/set solver.

use lunisol_time::{jd_tt_to_centuries, norm360};

use crate::obliquity::true_obliquity_deg;

/// Geometric mean longitude of the Sun in degrees, [0, 360).
pub fn sun_mean_longitude_deg(jd_tt: f64) -> f64 {
    let t = jd_tt_to_centuries(jd_tt);
    norm360(280.46646 + 36_000.76983 * t + 0.000_3032 * t * t)
}

/// Mean anomaly of the Sun in degrees, [0, 360).
pub fn sun_mean_anomaly_deg(jd_tt: f64) -> f64 {
    let t = jd_tt_to_centuries(jd_tt);
    norm360(357.52911 + 35_999.05029 * t - 0.000_1537 * t * t)
}

/// Equation of center in degrees (3-term series in the mean anomaly).
fn equation_of_center_deg(t: f64, mean_anomaly_deg: f64) -> f64 {
    let m = mean_anomaly_deg.to_radians();
    (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin()
}

/// Apparent ecliptic longitude of the Sun in degrees, [0, 360).
///
/// True longitude corrected for aberration and the dominant nutation
/// term: `λ = λ_true − 0.00569° − 0.00478°·sin Ω`.
pub fn sun_apparent_longitude_deg(jd_tt: f64) -> f64 {
    let t = jd_tt_to_centuries(jd_tt);
    let l0 = sun_mean_longitude_deg(jd_tt);
    let m = sun_mean_anomaly_deg(jd_tt);
    let true_lon = l0 + equation_of_center_deg(t, m);

    let omega = (125.04 - 1934.136 * t).to_radians();
    norm360(true_lon - 0.005_69 - 0.004_78 * omega.sin())
}

/// Apparent solar right ascension and declination in radians.
///
/// Derived from the apparent longitude and the true obliquity (solar
/// ecliptic latitude is neglected, < 1.2″). RA in [0, 2π), Dec in
/// [−π/2, π/2].
pub fn sun_ra_dec_rad(jd_tt: f64) -> (f64, f64) {
    let lambda = sun_apparent_longitude_deg(jd_tt).to_radians();
    let eps = true_obliquity_deg(jd_tt).to_radians();

    let ra = (eps.cos() * lambda.sin()).atan2(lambda.cos());
    let dec = (eps.sin() * lambda.sin()).asin();
    (ra.rem_euclid(std::f64::consts::TAU), dec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_25a() {
        // 1992-10-13.0 TT (JD 2448908.5): apparent longitude ≈ 199.9060°
        let lon = sun_apparent_longitude_deg(2_448_908.5);
        assert!((lon - 199.906).abs() < 0.01, "λ = {lon}");
    }

    #[test]
    fn march_equinox_2024() {
        // 2024-03-20 ~03:06 UT: solar longitude crosses 0°.
        let jd_tt = 2_460_389.63;
        let lon = sun_apparent_longitude_deg(jd_tt);
        let dist_from_zero = lon.min(360.0 - lon);
        assert!(dist_from_zero < 0.05, "λ at equinox = {lon}");
    }

    #[test]
    fn december_solstice_2023() {
        // 2023-12-22 ~03:27 UT: solar longitude 270°.
        let jd_tt = 2_460_300.645;
        let lon = sun_apparent_longitude_deg(jd_tt);
        assert!((lon - 270.0).abs() < 0.05, "λ at solstice = {lon}");
    }

    #[test]
    fn longitude_advances_about_one_degree_per_day() {
        let jd = 2_460_000.5;
        let rate = norm360(sun_apparent_longitude_deg(jd + 1.0) - sun_apparent_longitude_deg(jd));
        assert!((0.9..1.1).contains(&rate), "daily motion = {rate}");
    }

    #[test]
    fn declination_bounded_by_obliquity() {
        for i in 0..36 {
            let jd = 2_460_000.5 + i as f64 * 10.0;
            let (_, dec) = sun_ra_dec_rad(jd);
            assert!(
                dec.abs() <= 23.5_f64.to_radians(),
                "declination {dec} exceeds obliquity"
            );
        }
    }

    #[test]
    fn ra_range() {
        for i in 0..12 {
            let jd = 2_460_000.5 + i as f64 * 30.0;
            let (ra, _) = sun_ra_dec_rad(jd);
            assert!((0.0..std::f64::consts::TAU).contains(&ra), "RA = {ra}");
        }
    }
}
