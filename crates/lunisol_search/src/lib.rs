//! Numerical event search on top of the position model.
//!
//! This crate provides:
//! - A generic secant root-finder locating the instant an angular quantity
//!   crosses a target value, on residuals wrapped to (−180, 180]
//! - A coarse scan-and-refine enumerator for periodic events
//! - A sunrise/sunset solver (sampled altitude + bisection)
//! - Lahiri ayanamsa conversion and zodiacal-ingress search
//!
//! All solvers are best-effort with small fixed iteration bounds: they
//! return the best available estimate instead of raising, because every
//! consumer quantizes to civil days.

pub mod ayanamsa;
pub mod crossing;
pub mod riseset;

pub use ayanamsa::{
    ayanamsa_deg, find_sidereal_ingress, find_solar_ingress, sidereal_longitude_deg,
    sun_sidereal_longitude_deg,
};
pub use crossing::{find_crossing, scan_crossings};
pub use riseset::{RISE_SET_ALTITUDE_DEG, RiseSetOutcome, sun_altitude_deg, sunrise, sunset};
