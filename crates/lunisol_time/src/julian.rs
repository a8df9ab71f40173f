//! Julian Date ↔ calendar conversions.
//!
//! Proleptic-Gregorian algorithm from standard astronomical references
//! (Meeus, ch. 7), valid for the whole supported range and beyond.

/// Julian Date of the J2000.0 epoch (2000-01-01T12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Convert a proleptic-Gregorian calendar date to a Julian Date.
///
/// `day_frac` carries the time of day as a fraction (e.g. `15.5` =
/// 15th, 12:00). The returned JD is in the same timescale as the input
/// (civil input → JD UT).
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}

/// Convert a Julian Date back to a proleptic-Gregorian calendar date.
///
/// Returns `(year, month, day_frac)` where `day_frac` carries the time
/// of day in its fractional part.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;

    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day_frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_epoch() {
        let jd = calendar_to_jd(2000, 1, 1.5);
        assert!((jd - J2000_JD).abs() < 1e-9, "JD = {jd}");
    }

    #[test]
    fn known_date_1987() {
        // Meeus example 7.a: 1987-04-10.0 → JD 2446895.5
        let jd = calendar_to_jd(1987, 4, 10.0);
        assert!((jd - 2_446_895.5).abs() < 1e-9, "JD = {jd}");
    }

    #[test]
    fn roundtrip_sample_dates() {
        for &(y, m, d) in &[
            (1600, 1, 1.0),
            (1700, 3, 1.25),
            (1900, 2, 28.75),
            (2000, 2, 29.5),
            (2024, 12, 31.999),
            (2400, 12, 31.0),
        ] {
            let jd = calendar_to_jd(y, m, d);
            let (y2, m2, d2) = jd_to_calendar(jd);
            assert_eq!((y, m), (y2, m2), "date {y}-{m}-{d}");
            assert!((d - d2).abs() < 1e-5, "day_frac {d} → {d2}");
        }
    }

    #[test]
    fn strictly_increasing() {
        let mut prev = calendar_to_jd(1599, 12, 31.0);
        for y in 1600..=2400 {
            for m in [1, 6, 12] {
                let jd = calendar_to_jd(y, m, 15.0);
                assert!(jd > prev, "JD not increasing at {y}-{m}");
                prev = jd;
            }
        }
    }

    #[test]
    fn century_boundaries() {
        // 1900 is not a leap year in the Gregorian calendar: Feb 28 → Mar 1.
        let feb28 = calendar_to_jd(1900, 2, 28.0);
        let mar1 = calendar_to_jd(1900, 3, 1.0);
        assert!((mar1 - feb28 - 1.0).abs() < 1e-9);
    }
}
