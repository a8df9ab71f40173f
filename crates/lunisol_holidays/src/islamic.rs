//! Islamic (Hijri) month starts and holidays.
//!
//! For each Gregorian year the engine enumerates lunar conjunctions
//! (elongation 0°) over a padded window, tests a crescent-visibility
//! proxy at local sunset on the conjunction evening and the following two
//! evenings, and derives civil month-start dates. Month numbers come from
//! counting elapsed mean synodic months since the Hijri epoch. The
//! results are inherently tentative: real sighting announcements can
//! shift any month start by a day.

use lunisol_ephem::elongation_deg;
use lunisol_search::{scan_crossings, sunset};
use lunisol_time::{calendar_to_jd, jd_tt_to_ut, jd_ut_to_tt};

use crate::date::CivilDate;
use crate::location::Location;

/// Mean synodic month in days.
pub const MEAN_SYNODIC_MONTH_DAYS: f64 = 29.530_588_861;

/// Coarse scan step for conjunction enumeration (days).
const CONJUNCTION_SCAN_STEP_DAYS: f64 = 1.0;

/// Evenings tested after (and including) the conjunction evening.
const CANDIDATE_EVENINGS: i64 = 3;

/// Hijri month names, Muharram through Dhu al-Hijjah.
pub const MONTH_NAMES: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi al-Awwal",
    "Rabi al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Shaban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qadah",
    "Dhu al-Hijjah",
];

/// Holiday catalog as (name, Hijri month, Hijri day).
const HOLIDAYS: &[(&str, u32, u32)] = &[
    ("Islamic New Year", 1, 1),
    ("Ashura", 1, 10),
    ("Mawlid al-Nabi", 3, 12),
    ("Isra and Miraj", 7, 27),
    ("Start of Ramadan", 9, 1),
    ("Laylat al-Qadr", 9, 27),
    ("Eid al-Fitr", 10, 1),
    ("Day of Arafat", 12, 9),
    ("Eid al-Adha", 12, 10),
];

/// One Hijri month start derived from a conjunction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HijriMonthStart {
    /// Month number 1–12 (1 = Muharram).
    pub month: u32,
    /// Conjunction instant, JD TT.
    pub conjunction_jd_tt: f64,
    /// Local civil date of day 1.
    pub first_day: CivilDate,
    /// False when no candidate evening passed the proxy and the
    /// conjunction + 3 days fallback was used.
    pub sighted: bool,
}

/// JD UT of the Hijri epoch, 622-07-19 (proleptic Gregorian) 0h.
fn hijri_epoch_jd() -> f64 {
    calendar_to_jd(622, 7, 19.0)
}

/// Month number 1–12 for a conjunction, by counting elapsed mean synodic
/// months since the epoch.
fn month_number(conjunction_jd_tt: f64) -> u32 {
    let elapsed = ((conjunction_jd_tt - hijri_epoch_jd()) / MEAN_SYNODIC_MONTH_DAYS).round() as i64;
    elapsed.rem_euclid(12) as u32 + 1
}

/// Apply the crescent proxy to one conjunction: the first of three
/// candidate evenings whose sunset passes both thresholds starts the
/// month on the following civil day; if none passes, day 1 defaults to
/// conjunction + 3 days.
fn first_day_for_conjunction(conjunction_jd_tt: f64, location: &Location) -> (CivilDate, bool) {
    let policy = &location.crescent_policy;
    let conjunction_date =
        CivilDate::from_jd_ut(jd_tt_to_ut(conjunction_jd_tt), location.utc_offset_hours);

    for evening in 0..CANDIDATE_EVENINGS {
        let date = conjunction_date.add_days(evening);
        let day_start_ut = date.jd_local_midnight_ut(location.utc_offset_hours);
        let set = sunset(day_start_ut, location.latitude_deg, location.longitude_deg);
        let sunset_tt = jd_ut_to_tt(set.jd_ut);

        let age_hours = (sunset_tt - conjunction_jd_tt) * 24.0;
        if age_hours < 0.0 {
            // Sunset precedes the conjunction; the crescent cannot exist yet.
            continue;
        }
        let elongation = elongation_deg(sunset_tt);
        if age_hours >= policy.min_age_hours && elongation >= policy.min_elongation_deg {
            return (date.add_days(1), true);
        }
    }

    (conjunction_date.add_days(3), false)
}

/// Hijri month starts covering a Gregorian year.
///
/// Conjunctions are enumerated from mid-December of the prior year to
/// mid-January of the next, so every month overlapping the Gregorian
/// year appears.
pub fn month_table(year: i32, location: &Location) -> Vec<HijriMonthStart> {
    let scan_start = calendar_to_jd(year - 1, 12, 15.0);
    let scan_end = calendar_to_jd(year + 1, 1, 15.0);

    scan_crossings(
        elongation_deg,
        0.0,
        scan_start,
        scan_end,
        CONJUNCTION_SCAN_STEP_DAYS,
    )
    .into_iter()
    .map(|conjunction_jd_tt| {
        let (first_day, sighted) = first_day_for_conjunction(conjunction_jd_tt, location);
        HijriMonthStart {
            month: month_number(conjunction_jd_tt),
            conjunction_jd_tt,
            first_day,
            sighted,
        }
    })
    .collect()
}

/// All Islamic holidays whose civil date falls in the Gregorian year.
pub fn holidays_for_year(year: i32, location: &Location) -> Vec<(CivilDate, &'static str)> {
    let table = month_table(year, location);
    let mut out = Vec::new();
    for start in &table {
        for &(name, month, day) in HOLIDAYS {
            if start.month == month {
                let date = start.first_day.add_days(day as i64 - 1);
                if date.year == year {
                    out.push((date, name));
                }
            }
        }
    }
    out
}
