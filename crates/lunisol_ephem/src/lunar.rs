//! Geocentric lunar longitude and distance.
//!
//! Truncated periodic series in the four fundamental arguments (mean
//! elongation D, solar mean anomaly M, lunar mean anomaly M′, argument of
//! latitude F), with the eccentricity factor E applied to terms carrying
//! the solar anomaly, plus the three classical additive terms (Venus,
//! Jupiter, flattening).

use lunisol_time::{gmst_deg, jd_tt_to_centuries, lmst_deg, norm360};

/// Mean lunar distance in km (series base value).
const MEAN_DISTANCE_KM: f64 = 385_000.56;

/// Equatorial Earth radius in km, for the parallax correction.
const EARTH_RADIUS_KM: f64 = 6_378.14;

/// Periodic terms for lunar longitude and distance.
///
/// Each row: `[nD, nM, nM', nF, l, r]` where `l` is the longitude
/// amplitude in 1e-6 degrees (sine term) and `r` the distance amplitude
/// in 1e-3 km (cosine term).
#[rustfmt::skip]
static LUNAR_TERMS: [[i64; 6]; 28] = [
    //  D   M   M'  F         l           r
    [   0,  0,  1,  0,  6_288_774, -20_905_355],
    [   2,  0, -1,  0,  1_274_027,  -3_699_111],
    [   2,  0,  0,  0,    658_314,  -2_955_968],
    [   0,  0,  2,  0,    213_618,    -569_925],
    [   0,  1,  0,  0,   -185_116,      48_888],
    [   0,  0,  0,  2,   -114_332,      -3_149],
    [   2,  0, -2,  0,     58_793,     246_158],
    [   2, -1, -1,  0,     57_066,    -152_138],
    [   2,  0,  1,  0,     53_322,    -170_733],
    [   2, -1,  0,  0,     45_758,    -204_586],
    [   0,  1, -1,  0,    -40_923,    -129_620],
    [   1,  0,  0,  0,    -34_720,     108_743],
    [   0,  1,  1,  0,    -30_383,     104_755],
    [   2,  0,  0, -2,     15_327,      10_321],
    [   0,  0,  1,  2,    -12_528,           0],
    [   0,  0,  1, -2,     10_980,      79_661],
    [   4,  0, -1,  0,     10_675,     -34_782],
    [   0,  0,  3,  0,     10_034,     -23_210],
    [   4,  0, -2,  0,      8_548,     -21_636],
    [   2,  1, -1,  0,     -7_888,      24_208],
    [   2,  1,  0,  0,     -6_766,      30_824],
    [   1,  0, -1,  0,     -5_163,      -8_379],
    [   1,  1,  0,  0,      4_987,     -16_675],
    [   2, -1,  1,  0,      4_036,     -12_831],
    [   2,  0,  2,  0,      3_994,     -10_445],
    [   4,  0,  0,  0,      3_861,     -11_650],
    [   2,  0, -3,  0,      3_665,      14_403],
    [   0,  1, -2,  0,     -2_689,      -7_003],
];

/// Fundamental arguments in degrees: `(L', D, M, M', F)`.
fn fundamental_arguments_deg(t: f64) -> (f64, f64, f64, f64, f64) {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    // Mean longitude of the Moon
    let lp = norm360(
        218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
            - t4 / 65_194_000.0,
    );
    // Mean elongation of the Moon from the Sun
    let d = norm360(
        297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
            - t4 / 113_065_000.0,
    );
    // Mean anomaly of the Sun
    let m = norm360(357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0);
    // Mean anomaly of the Moon
    let mp = norm360(
        134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
            - t4 / 14_712_000.0,
    );
    // Argument of latitude
    let f = norm360(
        93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
            + t4 / 863_310_000.0,
    );
    (lp, d, m, mp, f)
}

/// Geocentric lunar ecliptic longitude (degrees, [0, 360)) and distance (km).
pub fn moon_longitude_distance(jd_tt: f64) -> (f64, f64) {
    let t = jd_tt_to_centuries(jd_tt);
    let (lp, d, m, mp, f) = fundamental_arguments_deg(t);

    // Eccentricity factor for terms carrying the solar anomaly.
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t * t;
    let e2 = e * e;

    let mut sum_l = 0.0; // 1e-6 deg
    let mut sum_r = 0.0; // 1e-3 km
    for row in &LUNAR_TERMS {
        let arg = (row[0] as f64 * d + row[1] as f64 * m + row[2] as f64 * mp
            + row[3] as f64 * f)
            .to_radians();
        let ecc = match row[1].abs() {
            1 => e,
            2 => e2,
            _ => 1.0,
        };
        sum_l += row[4] as f64 * ecc * arg.sin();
        sum_r += row[5] as f64 * ecc * arg.cos();
    }

    // Additive terms: Venus, Jupiter, and Earth-flattening corrections.
    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    sum_l += 3958.0 * a1.sin() + 1962.0 * (lp - f).to_radians().sin() + 318.0 * a2.sin();

    let longitude = norm360(lp + sum_l / 1e6);
    let distance = MEAN_DISTANCE_KM + sum_r / 1e3;
    (longitude, distance)
}

/// Geocentric lunar ecliptic longitude in degrees, [0, 360).
pub fn moon_longitude_deg(jd_tt: f64) -> f64 {
    moon_longitude_distance(jd_tt).0
}

/// Topocentric lunar ecliptic longitude in degrees, [0, 360).
///
/// First-order parallax correction: the horizontal parallax
/// `π = asin(R⊕ / Δ)` is projected with the observer latitude and the
/// Moon's local hour angle, approximated on the ecliptic via the local
/// sidereal time. Shifts the longitude by up to ~1°, which can move a
/// tithi boundary across a civil-day edge.
pub fn moon_topocentric_longitude_deg(
    jd_tt: f64,
    jd_ut: f64,
    latitude_deg: f64,
    longitude_east_deg: f64,
) -> f64 {
    let (lon, dist) = moon_longitude_distance(jd_tt);
    let parallax_deg = (EARTH_RADIUS_KM / dist).asin().to_degrees();
    let lst = lmst_deg(gmst_deg(jd_ut), longitude_east_deg);
    let hour_angle = (lst - lon).to_radians();
    norm360(lon - parallax_deg * latitude_deg.to_radians().cos() * hour_angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_47a() {
        // 1992-04-12.0 TT (JD 2448724.5): λ ≈ 133.1627°, Δ ≈ 368409.7 km
        let (lon, dist) = moon_longitude_distance(2_448_724.5);
        assert!((lon - 133.1627).abs() < 0.05, "λ = {lon}");
        assert!((dist - 368_409.7).abs() < 500.0, "Δ = {dist}");
    }

    #[test]
    fn distance_within_orbit_bounds() {
        for i in 0..60 {
            let jd = 2_460_000.5 + i as f64 * 5.0;
            let (_, dist) = moon_longitude_distance(jd);
            assert!(
                (356_000.0..407_000.0).contains(&dist),
                "distance out of bounds: {dist}"
            );
        }
    }

    #[test]
    fn mean_daily_motion() {
        // The Moon averages ~13.18°/day.
        let jd = 2_460_100.5;
        let motion = norm360(moon_longitude_deg(jd + 1.0) - moon_longitude_deg(jd));
        assert!((11.0..16.0).contains(&motion), "daily motion = {motion}");
    }

    #[test]
    fn topocentric_shift_small() {
        // Parallax moves the apparent longitude by at most ~1.1°.
        let jd_tt = 2_460_310.5;
        let jd_ut = jd_tt - 69.0 / 86_400.0;
        let geo = moon_longitude_deg(jd_tt);
        let topo = moon_topocentric_longitude_deg(jd_tt, jd_ut, 28.6, 77.2);
        let shift = (geo - topo + 180.0).rem_euclid(360.0) - 180.0;
        assert!(shift.abs() < 1.2, "parallax shift = {shift}");
    }

    #[test]
    fn topocentric_vanishes_at_pole() {
        let jd_tt = 2_460_310.5;
        let jd_ut = jd_tt - 69.0 / 86_400.0;
        let geo = moon_longitude_deg(jd_tt);
        let topo = moon_topocentric_longitude_deg(jd_tt, jd_ut, 90.0, 0.0);
        assert!((geo - topo).abs() < 1e-9, "pole shift = {}", geo - topo);
    }
}
