//! Civil (Gregorian) calendar dates and local-day arithmetic.
//!
//! `CivilDate` is the engine's output type: a plain year/month/day triple
//! ordered chronologically, usable directly as a `BTreeMap` key. The
//! helpers convert between UT instants and local civil dates through the
//! observer's fixed UTC offset.

use lunisol_time::{calendar_to_jd, jd_to_calendar};

/// A civil (Gregorian) calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CivilDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// The local civil date containing a UT instant, for a fixed offset.
    pub fn from_jd_ut(jd_ut: f64, utc_offset_hours: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd_ut + utc_offset_hours / 24.0);
        Self {
            year,
            month,
            day: day_frac.floor() as u32,
        }
    }

    /// UT Julian Day of this date's local midnight (00:00 local).
    pub fn jd_local_midnight_ut(&self, utc_offset_hours: f64) -> f64 {
        calendar_to_jd(self.year, self.month, self.day as f64) - utc_offset_hours / 24.0
    }

    /// This date shifted by a signed number of days.
    pub fn add_days(&self, days: i64) -> Self {
        let jd = calendar_to_jd(self.year, self.month, self.day as f64) + days as f64;
        let (year, month, day_frac) = jd_to_calendar(jd);
        Self {
            year,
            month,
            day: day_frac.round() as u32,
        }
    }
}

impl std::fmt::Display for CivilDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
