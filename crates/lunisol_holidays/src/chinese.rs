//! Chinese lunisolar month table and holidays.
//!
//! Months run new moon to new moon on local civil dates. The lunation
//! interval containing the prior year's winter solstice anchors month 11;
//! walking outward, an interval containing a principal term (solar
//! longitude at a multiple of 30°) takes the next number, and an interval
//! containing none repeats the preceding number and is flagged leap.
//! Holidays are (month, day) lookups, except Qingming, a pure solar-term
//! date with no lunar component.

use lunisol_ephem::{elongation_deg, sun_apparent_longitude_deg};
use lunisol_search::{find_solar_ingress, scan_crossings};
use lunisol_time::{calendar_to_jd, jd_tt_to_ut};

use crate::date::CivilDate;
use crate::location::Location;

/// Coarse scan step for new-moon enumeration (days).
const NEW_MOON_SCAN_STEP_DAYS: f64 = 1.0;

/// Coarse scan step for principal-term enumeration (days).
const TERM_SCAN_STEP_DAYS: f64 = 5.0;

/// Holiday catalog as (name, month, day). Leap months never carry them.
const HOLIDAYS: &[(&str, u32, u32)] = &[
    ("Chinese New Year", 1, 1),
    ("Lantern Festival", 1, 15),
    ("Dragon Boat Festival", 5, 5),
    ("Qixi Festival", 7, 7),
    ("Ghost Festival", 7, 15),
    ("Mid-Autumn Festival", 8, 15),
    ("Double Ninth Festival", 9, 9),
    ("Laba Festival", 12, 8),
];

/// One lunisolar month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChineseMonth {
    /// Month number 1–12. A leap month repeats its predecessor's number.
    pub number: u32,
    /// True when the month contains no principal term.
    pub leap: bool,
    /// Local civil date of day 1 (the new-moon day).
    pub start: CivilDate,
    /// New-moon instant, JD TT.
    pub new_moon_jd_tt: f64,
}

/// Wrap a month number into 1–12.
fn wrap_month(n: i64) -> u32 {
    (n - 1).rem_euclid(12) as u32 + 1
}

/// Build the month table keyed by the Gregorian year containing its New
/// Year. The table internally spans November of the prior year through
/// March of the next.
pub fn month_table(year: i32, location: &Location) -> Vec<ChineseMonth> {
    let offset = location.utc_offset_hours;
    let scan_start = calendar_to_jd(year - 1, 11, 1.0);
    let scan_end = calendar_to_jd(year + 1, 3, 31.0);

    let new_moon_dates: Vec<(CivilDate, f64)> = scan_crossings(
        elongation_deg,
        0.0,
        scan_start,
        scan_end,
        NEW_MOON_SCAN_STEP_DAYS,
    )
    .into_iter()
    .map(|jd_tt| (CivilDate::from_jd_ut(jd_tt_to_ut(jd_tt), offset), jd_tt))
    .collect();

    // Principal terms over the same window, as local civil dates.
    let mut term_dates: Vec<CivilDate> = Vec::new();
    for k in 0..12 {
        let target = k as f64 * 30.0;
        for jd_tt in scan_crossings(
            sun_apparent_longitude_deg,
            target,
            scan_start,
            scan_end,
            TERM_SCAN_STEP_DAYS,
        ) {
            term_dates.push(CivilDate::from_jd_ut(jd_tt_to_ut(jd_tt), offset));
        }
    }
    term_dates.sort();

    // Winter solstice nearest 21 December of the prior year anchors month 11.
    let solstice_jd_tt = find_solar_ingress(270.0, calendar_to_jd(year - 1, 12, 21.0));
    let solstice_date = CivilDate::from_jd_ut(jd_tt_to_ut(solstice_jd_tt), offset);

    // Intervals are [start_i, start_{i+1}); the trailing incomplete
    // interval is dropped.
    let count = new_moon_dates.len().saturating_sub(1);
    if count == 0 {
        return Vec::new();
    }
    let contains = |i: usize, date: CivilDate| {
        (new_moon_dates[i].0..new_moon_dates[i + 1].0).contains(&date)
    };
    let has_term =
        |i: usize| term_dates.iter().any(|&t| contains(i, t));

    let anchor = (0..count)
        .find(|&i| contains(i, solstice_date))
        .unwrap_or(count / 2);

    let mut numbers = vec![(0u32, false); count];
    numbers[anchor] = (11, false);

    // Forward walk: a term interval takes the next number, a term-less
    // interval repeats the previous number as a leap month.
    let mut prev = 11i64;
    for i in anchor + 1..count {
        if has_term(i) {
            prev += 1;
            numbers[i] = (wrap_month(prev), false);
        } else {
            numbers[i] = (wrap_month(prev), true);
        }
    }

    // Backward walk: a leap successor shares this interval's number; a
    // regular successor is one ahead of it.
    for i in (0..anchor).rev() {
        let (next_number, next_leap) = numbers[i + 1];
        let number = if next_leap {
            next_number
        } else {
            wrap_month(next_number as i64 - 1)
        };
        numbers[i] = (number, !has_term(i));
    }

    (0..count)
        .map(|i| ChineseMonth {
            number: numbers[i].0,
            leap: numbers[i].1,
            start: new_moon_dates[i].0,
            new_moon_jd_tt: new_moon_dates[i].1,
        })
        .collect()
}

/// Chinese New Year: day 1 of the (non-leap) first month starting in the
/// given Gregorian year.
pub fn chinese_new_year(table: &[ChineseMonth], year: i32) -> Option<CivilDate> {
    table
        .iter()
        .find(|m| m.number == 1 && !m.leap && m.start.year == year)
        .map(|m| m.start)
}

/// Qingming: the solar-term date at apparent solar longitude 15°.
pub fn qingming(year: i32, location: &Location) -> CivilDate {
    let jd_tt = find_solar_ingress(15.0, calendar_to_jd(year, 4, 5.0));
    CivilDate::from_jd_ut(jd_tt_to_ut(jd_tt), location.utc_offset_hours)
}

/// All Chinese holidays whose civil date falls in the Gregorian year.
pub fn holidays_for_year(
    table: &[ChineseMonth],
    year: i32,
    location: &Location,
) -> Vec<(CivilDate, &'static str)> {
    let mut out = Vec::new();
    for month in table {
        if month.leap {
            continue;
        }
        for &(name, m, d) in HOLIDAYS {
            if month.number == m {
                let date = month.start.add_days(d as i64 - 1);
                if date.year == year {
                    out.push((date, name));
                }
            }
        }
    }
    out.push((qingming(year, location), "Qingming Festival"));
    out
}
