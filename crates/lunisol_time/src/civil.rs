//! Civil (UTC-naive) calendar date/time.
//!
//! `CivilDateTime` is the canonical civil representation at the engine
//! boundary. Naive civil times are treated as UT; conversion to the TT
//! timescale used by the position formulas goes through [`crate::jd_ut_to_tt`].

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, jd_to_calendar};

/// Civil calendar date/time with sub-second precision, treated as UT.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CivilDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl CivilDateTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Check field ranges. Day-of-month overflow against the actual month
    /// length is caught by the JD round-trip in callers that need it.
    pub fn validate(&self) -> Result<(), TimeError> {
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::InvalidDate("month out of range"));
        }
        if !(1..=31).contains(&self.day) {
            return Err(TimeError::InvalidDate("day out of range"));
        }
        if self.hour >= 24 || self.minute >= 60 {
            return Err(TimeError::InvalidDate("time of day out of range"));
        }
        if !self.second.is_finite() || !(0.0..60.0).contains(&self.second) {
            return Err(TimeError::InvalidDate("seconds out of range"));
        }
        Ok(())
    }

    /// Convert to a Julian Date in UT.
    pub fn to_jd_ut(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Convert from a Julian Date in UT back to civil calendar form.
    pub fn from_jd_ut(jd_ut: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd_ut);
        let day = day_frac.floor() as u32;
        let total_seconds = day_frac.fract() * 86_400.0;
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = total_seconds % 60.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }
}

impl std::fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Truncate rather than round so :59.7 never prints as :60.
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second.floor() as u32
        )
    }
}
