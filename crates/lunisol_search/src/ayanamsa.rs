//! Lahiri ayanamsa and sidereal conversion.
//!
//! The ayanamsa is the secular offset between the tropical zodiac
//! (equinox-anchored) and the Lahiri sidereal zodiac (Spica-anchored,
//! Indian Calendar Reform Committee convention). It is modeled as the
//! J2000 reference value plus the general precession in longitude:
//! linear with a small quadratic drift.

use lunisol_ephem::sun_apparent_longitude_deg;
use lunisol_time::{jd_tt_to_centuries, norm360};

use crate::crossing::find_crossing;

/// Lahiri ayanamsa at J2000.0 in degrees.
const LAHIRI_J2000_DEG: f64 = 23.853;

/// Lahiri ayanamsa in degrees at a given TT Julian Date.
///
/// `A(T) = 23.853 + (5028.796195·T + 1.1054348·T²) / 3600`
pub fn ayanamsa_deg(jd_tt: f64) -> f64 {
    let t = jd_tt_to_centuries(jd_tt);
    LAHIRI_J2000_DEG + (5028.796_195 * t + 1.105_434_8 * t * t) / 3600.0
}

/// Convert a tropical ecliptic longitude to sidereal, [0, 360).
pub fn sidereal_longitude_deg(tropical_deg: f64, jd_tt: f64) -> f64 {
    norm360(tropical_deg - ayanamsa_deg(jd_tt))
}

/// Sidereal apparent solar longitude in degrees, [0, 360).
pub fn sun_sidereal_longitude_deg(jd_tt: f64) -> f64 {
    sidereal_longitude_deg(sun_apparent_longitude_deg(jd_tt), jd_tt)
}

/// Find the TT instant where the tropical solar longitude crosses
/// `target_deg` (a solstice, equinox, or principal term), near `jd_guess`.
pub fn find_solar_ingress(target_deg: f64, jd_guess_tt: f64) -> f64 {
    find_crossing(sun_apparent_longitude_deg, target_deg, jd_guess_tt)
}

/// Find the TT instant where the sidereal solar longitude crosses
/// `target_deg` (a zodiacal ingress), near `jd_guess`.
pub fn find_sidereal_ingress(target_deg: f64, jd_guess_tt: f64) -> f64 {
    find_crossing(sun_sidereal_longitude_deg, target_deg, jd_guess_tt)
}
