//! Sunrise/sunset solver.
//!
//! Samples the true solar altitude at a fixed step across one local day,
//! brackets the first directional crossing of the standard −0.833°
//! horizon (refraction + solar radius), and bisects. At extreme
//! latitudes, where the sampled day has no crossing, the adjacent days
//! are tried; failing that, local noon is returned as a documented,
//! deliberately non-astronomical sentinel so downstream day-level rules
//! always have an instant to sample.

use lunisol_ephem::sun_ra_dec_rad;
use lunisol_time::{gmst_deg, jd_ut_to_tt, lmst_deg};

/// Standard rise/set altitude: 34′ refraction + 16′ solar semidiameter.
pub const RISE_SET_ALTITUDE_DEG: f64 = -0.8333;

/// Altitude sampling step across the local day (10 minutes).
const SAMPLE_STEP_DAYS: f64 = 10.0 / 1440.0;

/// Maximum bisection iterations per crossing.
const MAX_BISECTIONS: usize = 60;

/// Converged when the altitude residual falls below this (degrees).
const ALTITUDE_TOL_DEG: f64 = 1e-7;

/// Converged when the bracket width falls below this (days).
const BRACKET_TOL_DAYS: f64 = 1e-8;

/// Result of a rise/set search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseSetOutcome {
    /// Event instant as a UT Julian Day.
    pub jd_ut: f64,
    /// False when the local-noon sentinel was used (no crossing found).
    pub exact: bool,
}

/// True solar altitude in degrees at a UT instant for an observer.
pub fn sun_altitude_deg(jd_ut: f64, latitude_deg: f64, longitude_east_deg: f64) -> f64 {
    let jd_tt = jd_ut_to_tt(jd_ut);
    let (ra, dec) = sun_ra_dec_rad(jd_tt);
    let lst = lmst_deg(gmst_deg(jd_ut), longitude_east_deg).to_radians();
    let hour_angle = lst - ra;
    let phi = latitude_deg.to_radians();
    (phi.sin() * dec.sin() + phi.cos() * dec.cos() * hour_angle.cos())
        .asin()
        .to_degrees()
}

/// Bisect an altitude crossing inside `[t_lo, t_hi]`.
fn bisect(
    t_lo: f64,
    t_hi: f64,
    alt_lo: f64,
    latitude_deg: f64,
    longitude_east_deg: f64,
) -> f64 {
    let mut a = t_lo;
    let mut b = t_hi;
    let mut r_a = alt_lo - RISE_SET_ALTITUDE_DEG;

    for _ in 0..MAX_BISECTIONS {
        let mid = 0.5 * (a + b);
        let r_mid = sun_altitude_deg(mid, latitude_deg, longitude_east_deg) - RISE_SET_ALTITUDE_DEG;

        if r_a * r_mid <= 0.0 {
            b = mid;
        } else {
            a = mid;
            r_a = r_mid;
        }

        if r_mid.abs() < ALTITUDE_TOL_DEG || (b - a) < BRACKET_TOL_DAYS {
            break;
        }
    }
    0.5 * (a + b)
}

/// Find the first directional crossing within one sampled day.
fn crossing_in_day(
    jd_day_start_ut: f64,
    latitude_deg: f64,
    longitude_east_deg: f64,
    rising: bool,
) -> Option<f64> {
    let steps = (1.0 / SAMPLE_STEP_DAYS).ceil() as usize;

    let mut t_prev = jd_day_start_ut;
    let mut alt_prev = sun_altitude_deg(t_prev, latitude_deg, longitude_east_deg);

    for i in 1..=steps {
        let t = jd_day_start_ut + (i as f64 * SAMPLE_STEP_DAYS).min(1.0);
        let alt = sun_altitude_deg(t, latitude_deg, longitude_east_deg);

        let crosses = if rising {
            alt_prev < RISE_SET_ALTITUDE_DEG && alt >= RISE_SET_ALTITUDE_DEG
        } else {
            alt_prev > RISE_SET_ALTITUDE_DEG && alt <= RISE_SET_ALTITUDE_DEG
        };
        if crosses {
            return Some(bisect(t_prev, t, alt_prev, latitude_deg, longitude_east_deg));
        }

        t_prev = t;
        alt_prev = alt;
    }
    None
}

/// Search the given day, then the previous and next days, then fall back
/// to local noon of the requested day.
fn solve(
    jd_day_start_ut: f64,
    latitude_deg: f64,
    longitude_east_deg: f64,
    rising: bool,
) -> RiseSetOutcome {
    for offset in [0.0, -1.0, 1.0] {
        if let Some(jd_ut) =
            crossing_in_day(jd_day_start_ut + offset, latitude_deg, longitude_east_deg, rising)
        {
            return RiseSetOutcome { jd_ut, exact: true };
        }
    }
    RiseSetOutcome {
        jd_ut: jd_day_start_ut + 0.5,
        exact: false,
    }
}

/// Sunrise (ascending −0.833° crossing) for the local day starting at
/// `jd_day_start_ut` (the UT instant of local civil midnight).
pub fn sunrise(jd_day_start_ut: f64, latitude_deg: f64, longitude_east_deg: f64) -> RiseSetOutcome {
    solve(jd_day_start_ut, latitude_deg, longitude_east_deg, true)
}

/// Sunset (descending −0.833° crossing) for the local day starting at
/// `jd_day_start_ut`.
pub fn sunset(jd_day_start_ut: f64, latitude_deg: f64, longitude_east_deg: f64) -> RiseSetOutcome {
    solve(jd_day_start_ut, latitude_deg, longitude_east_deg, false)
}
