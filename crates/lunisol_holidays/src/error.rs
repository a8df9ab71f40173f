//! Error types for the holiday engine boundary.
//!
//! Only malformed public-boundary inputs surface as errors. Numerical
//! edge cases inside the solvers are absorbed locally into best-effort
//! estimates and never reach this type.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from holiday-date computation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HolidayError {
    /// Observer location fails validation.
    InvalidLocation(&'static str),
    /// Requested year is outside the supported range.
    InvalidYear(&'static str),
    /// The tradition requires an observer location and none was given.
    MissingLocation(&'static str),
}

impl Display for HolidayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::InvalidYear(msg) => write!(f, "invalid year: {msg}"),
            Self::MissingLocation(msg) => write!(f, "missing location: {msg}"),
        }
    }
}

impl Error for HolidayError {}
