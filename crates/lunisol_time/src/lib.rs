//! Time-scale and angle utilities for the calendar engine.
//!
//! This crate provides:
//! - Julian Date ↔ proleptic-Gregorian calendar conversions
//! - ΔT (TT − UT) approximation and the UT ↔ TT conversion pair
//! - Greenwich Mean Sidereal Time
//! - Angle normalization ([0, 360)) and wrapping ((−180, 180])
//!
//! All position formulas downstream operate on JD TT; all civil input and
//! output is JD UT. Naive civil date/times are treated as UTC.

pub mod angle;
pub mod civil;
pub mod delta_t;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use angle::{norm360, wrap180};
pub use civil::CivilDateTime;
pub use delta_t::{delta_t_seconds, jd_tt_to_ut, jd_ut_to_tt};
pub use error::TimeError;
pub use julian::{J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar};
pub use sidereal::{gmst_deg, lmst_deg};

/// Convert a Julian Date in TT to Julian centuries since J2000.0.
pub fn jd_tt_to_centuries(jd_tt: f64) -> f64 {
    (jd_tt - J2000_JD) / 36525.0
}
