//! Reduced solar and lunar position model.
//!
//! Truncated periodic series for the apparent solar ecliptic longitude and
//! the geocentric lunar longitude/distance, plus obliquity, a 2-term
//! nutation correction, solar equatorial coordinates, and a first-order
//! topocentric parallax correction for the Moon.
//!
//! Precision contract: lunar longitude to a few arc-minutes and distance
//! to a few hundred km over roughly 1600–2400, since all consumers
//! quantize to calendar days. Full-precision series (VSOP87/ELP2000) are
//! deliberately out of scope.

pub mod lunar;
pub mod obliquity;
pub mod solar;

pub use lunar::{
    moon_longitude_deg, moon_longitude_distance, moon_topocentric_longitude_deg,
};
pub use obliquity::{mean_obliquity_deg, nutation_deg, true_obliquity_deg};
pub use solar::{sun_apparent_longitude_deg, sun_ra_dec_rad};

use lunisol_time::wrap180;

/// Moon − Sun elongation in degrees, wrapped to (−180, 180].
///
/// 0° = new moon, ±180° = full moon. Computed from geocentric apparent
/// longitudes; the nutation terms largely cancel in the difference.
pub fn elongation_deg(jd_tt: f64) -> f64 {
    wrap180(moon_longitude_deg(jd_tt) - sun_apparent_longitude_deg(jd_tt))
}
