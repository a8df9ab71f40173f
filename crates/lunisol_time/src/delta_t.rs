//! ΔT (TT − UT) approximation.
//!
//! Three regimes dispatched on the calendar year: the tabulated
//! historical record (1600–2000, 20-year step, linearly interpolated)
//! for years before 2005, a quadratic fit for 2005–2050, and the
//! long-term parabola with a secular correction term after 2050.
//! Accurate to a couple of seconds across the 20th century and to a few
//! tens of seconds at the range edges, well inside the day-granularity
//! contract of every consumer.

use crate::julian::{SECONDS_PER_DAY, jd_to_calendar};

/// First tabulated year.
const TABLE_START_YEAR: f64 = 1600.0;

/// Table step in years.
const TABLE_STEP_YEARS: f64 = 20.0;

/// ΔT in seconds at 20-year intervals, 1600–2000 (Meeus, Morrison &
/// Stephenson, IERS).
#[rustfmt::skip]
static DELTA_T_TABLE: [f64; 21] = [
    120.0, 124.0, 62.0, 37.0, 16.0,   // 1600-1680
      9.0,  11.0, 12.0, 15.0, 17.0,   // 1700-1780
     13.7,  12.0,  5.7,  7.9, -5.4,   // 1800-1880
     -2.7,  21.2, 24.3, 33.1, 50.5,   // 1900-1980
     63.8,                            // 2000
];

/// Tabulated regime: linear interpolation, clamped at the table edges.
fn delta_t_tabulated(y: f64) -> f64 {
    let last = DELTA_T_TABLE.len() - 1;
    let pos = ((y - TABLE_START_YEAR) / TABLE_STEP_YEARS).clamp(0.0, last as f64);
    let i = (pos.floor() as usize).min(last - 1);
    let frac = pos - i as f64;
    DELTA_T_TABLE[i] + frac * (DELTA_T_TABLE[i + 1] - DELTA_T_TABLE[i])
}

/// ΔT = TT − UT in seconds for a given calendar year and month.
pub fn delta_t_seconds(year: i32, month: u32) -> f64 {
    let y = year as f64 + (month as f64 - 0.5) / 12.0;

    if year < 2005 {
        delta_t_tabulated(y)
    } else if year < 2050 {
        let t = y - 2000.0;
        62.92 + 0.32217 * t + 0.005589 * t * t
    } else {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - y)
    }
}

/// Convert a Julian Date in UT to TT.
pub fn jd_ut_to_tt(jd_ut: f64) -> f64 {
    let (year, month, _) = jd_to_calendar(jd_ut);
    jd_ut + delta_t_seconds(year, month) / SECONDS_PER_DAY
}

/// Convert a Julian Date in TT back to UT.
///
/// ΔT varies by seconds per year, so looking it up at the TT instant
/// instead of the (unknown) UT instant is well below the day-level
/// precision contract.
pub fn jd_tt_to_ut(jd_tt: f64) -> f64 {
    let (year, month, _) = jd_to_calendar(jd_tt);
    jd_tt - delta_t_seconds(year, month) / SECONDS_PER_DAY
}
