//! Hindu luni-solar festival rules.
//!
//! A per-year lunation table (new and full moons over the padded year)
//! feeds one named rule function per festival. Each rule anchors on a
//! specific lunation window, samples the tithi at its own reference
//! instant (sunrise, sunset, Pradosh, Nishita, or Aparahna), and scans a
//! small day window when the anchor day does not carry the target tithi.
//! The rules are deliberately non-uniform: each reproduces an
//! independently sourced observance convention, and the fallback windows
//! are exact contracts rather than derived quantities.

use lunisol_ephem::{
    elongation_deg, moon_topocentric_longitude_deg, sun_apparent_longitude_deg,
};
use lunisol_search::{find_sidereal_ingress, scan_crossings, sunrise, sunset};
use lunisol_time::{calendar_to_jd, jd_tt_to_ut, jd_ut_to_tt, norm360};

use crate::date::CivilDate;
use crate::location::Location;

/// One tithi spans 12° of Moon−Sun elongation; 30 per lunation.
pub const TITHI_SPAN_DEG: f64 = 12.0;

/// Coarse scan step for the lunation table (1 hour).
const LUNATION_SCAN_STEP_DAYS: f64 = 1.0 / 24.0;

/// Pradosh reference: 72 minutes after sunset.
const PRADOSH_AFTER_SUNSET_DAYS: f64 = 72.0 / 1440.0;

/// Lunation event kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LunationKind {
    NewMoon,
    FullMoon,
}

/// One refined lunation event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lunation {
    pub kind: LunationKind,
    /// Event instant, JD TT.
    pub jd_tt: f64,
}

/// Build the lunation table for a Gregorian year.
///
/// Scans the padded year (mid-December prior to mid-January next) at a
/// coarse hourly step for sign changes of the wrapped elongation residual
/// at 0° and 180°, refines each bracket with the secant finder, and
/// returns the merged, chronologically ordered sequence.
pub fn lunation_table(year: i32) -> Vec<Lunation> {
    let scan_start = calendar_to_jd(year - 1, 12, 15.0);
    let scan_end = calendar_to_jd(year + 1, 1, 15.0);

    let mut events: Vec<Lunation> = Vec::new();
    for jd in scan_crossings(
        elongation_deg,
        0.0,
        scan_start,
        scan_end,
        LUNATION_SCAN_STEP_DAYS,
    ) {
        events.push(Lunation {
            kind: LunationKind::NewMoon,
            jd_tt: jd,
        });
    }
    for jd in scan_crossings(
        elongation_deg,
        180.0,
        scan_start,
        scan_end,
        LUNATION_SCAN_STEP_DAYS,
    ) {
        events.push(Lunation {
            kind: LunationKind::FullMoon,
            jd_tt: jd,
        });
    }

    events.sort_by(|a, b| a.jd_tt.total_cmp(&b.jd_tt));
    // Half-period spacing makes duplicates unambiguous.
    events.dedup_by(|a, b| (a.jd_tt - b.jd_tt).abs() < 1.0);
    events
}

/// Tithi number 1–30 from geocentric elongation at a TT instant.
pub fn tithi_at(jd_tt: f64) -> u32 {
    (norm360(elongation_deg(jd_tt)) / TITHI_SPAN_DEG).floor() as u32 + 1
}

/// Tithi number 1–30 at a UT instant for an observer, using the
/// topocentric lunar longitude (parallax can move a boundary by ~2 h).
pub fn tithi_at_location(jd_ut: f64, location: &Location) -> u32 {
    let jd_tt = jd_ut_to_tt(jd_ut);
    let moon = moon_topocentric_longitude_deg(
        jd_tt,
        jd_ut,
        location.latitude_deg,
        location.longitude_deg,
    );
    let sun = sun_apparent_longitude_deg(jd_tt);
    (norm360(moon - sun) / TITHI_SPAN_DEG).floor() as u32 + 1
}

/// The five reference instants a festival rule may sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceInstant {
    /// Local sunrise.
    Sunrise,
    /// Local sunset.
    Sunset,
    /// Pradosh: 72 minutes after sunset.
    Pradosh,
    /// Nishita: midpoint of sunset and the following sunrise.
    Nishita,
    /// Aparahna: five-sixths of the way through daylight.
    Aparahna,
}

/// UT instant of a reference moment on a local civil date.
fn reference_jd_ut(date: CivilDate, location: &Location, instant: ReferenceInstant) -> f64 {
    let day_start = date.jd_local_midnight_ut(location.utc_offset_hours);
    let lat = location.latitude_deg;
    let lon = location.longitude_deg;

    match instant {
        ReferenceInstant::Sunrise => sunrise(day_start, lat, lon).jd_ut,
        ReferenceInstant::Sunset => sunset(day_start, lat, lon).jd_ut,
        ReferenceInstant::Pradosh => sunset(day_start, lat, lon).jd_ut + PRADOSH_AFTER_SUNSET_DAYS,
        ReferenceInstant::Nishita => {
            let set = sunset(day_start, lat, lon).jd_ut;
            let next_rise = sunrise(day_start + 1.0, lat, lon).jd_ut;
            0.5 * (set + next_rise)
        }
        ReferenceInstant::Aparahna => {
            let rise = sunrise(day_start, lat, lon).jd_ut;
            let set = sunset(day_start, lat, lon).jd_ut;
            rise + 5.0 / 6.0 * (set - rise)
        }
    }
}

/// Tithi at a reference instant on a local civil date.
fn tithi_on(date: CivilDate, location: &Location, instant: ReferenceInstant) -> u32 {
    tithi_at_location(reference_jd_ut(date, location, instant), location)
}

/// Scan `anchor ± window` days (anchor first, earlier day on ties) for a
/// date whose reference-instant tithi equals `target`. Falls back to the
/// anchor itself when the scan is exhausted.
fn find_tithi_day(
    anchor: CivilDate,
    location: &Location,
    instant: ReferenceInstant,
    target: u32,
    window: i64,
) -> CivilDate {
    if tithi_on(anchor, location, instant) == target {
        return anchor;
    }
    for k in 1..=window {
        for offset in [-k, k] {
            let date = anchor.add_days(offset);
            if tithi_on(date, location, instant) == target {
                return date;
            }
        }
    }
    anchor
}

/// Last lunation of the given kind whose local civil date lies inside the
/// month/day window of the festival's Gregorian year.
fn last_in_window(
    table: &[Lunation],
    kind: LunationKind,
    year: i32,
    from: (u32, u32),
    to: (u32, u32),
    location: &Location,
) -> Option<CivilDate> {
    let lo = CivilDate::new(year, from.0, from.1);
    let hi = CivilDate::new(year, to.0, to.1);
    table
        .iter()
        .filter(|l| l.kind == kind)
        .map(|l| CivilDate::from_jd_ut(jd_tt_to_ut(l.jd_tt), location.utc_offset_hours))
        .filter(|d| (lo..=hi).contains(d))
        .next_back()
}

// ---------------------------------------------------------------------------
// Festival rules. Each consumes the precomputed lunation table and returns
// a civil date; the anchor windows and scan widths are fixed contracts.
// ---------------------------------------------------------------------------

/// Makar Sankranti: the Sun's sidereal ingress into 270° (Makara),
/// mid-January. Purely solar; the lunation table is not consulted.
pub fn makar_sankranti(year: i32, location: &Location) -> CivilDate {
    let guess = calendar_to_jd(year, 1, 14.0);
    let jd_tt = find_sidereal_ingress(270.0, guess);
    CivilDate::from_jd_ut(jd_tt_to_ut(jd_tt), location.utc_offset_hours)
}

/// Maha Shivaratri: Krishna Chaturdashi (tithi 29) at Nishita, anchored
/// one day before the last February/March new moon. Scan ±2 days.
pub fn maha_shivaratri(table: &[Lunation], year: i32, location: &Location) -> CivilDate {
    let anchor = last_in_window(table, LunationKind::NewMoon, year, (2, 10), (3, 11), location)
        .map(|d| d.add_days(-1))
        .unwrap_or(CivilDate::new(year, 3, 1));
    find_tithi_day(anchor, location, ReferenceInstant::Nishita, 29, 2)
}

/// Holika Dahan: Purnima (tithi 15) at Pradosh on the eve of Holi,
/// anchored on the last February/March full moon. Scan ±1 day.
pub fn holika_dahan(table: &[Lunation], year: i32, location: &Location) -> CivilDate {
    let anchor = last_in_window(table, LunationKind::FullMoon, year, (2, 24), (3, 25), location)
        .unwrap_or(CivilDate::new(year, 3, 15));
    find_tithi_day(anchor, location, ReferenceInstant::Pradosh, 15, 1)
}

/// Holi: the day after Holika Dahan.
pub fn holi(table: &[Lunation], year: i32, location: &Location) -> CivilDate {
    holika_dahan(table, year, location).add_days(1)
}

/// Rama Navami: Shukla Navami (tithi 9) at sunrise, anchored eight days
/// after the last March/April new moon. Scan ±2 days.
pub fn rama_navami(table: &[Lunation], year: i32, location: &Location) -> CivilDate {
    let anchor = last_in_window(table, LunationKind::NewMoon, year, (3, 20), (4, 18), location)
        .map(|d| d.add_days(8))
        .unwrap_or(CivilDate::new(year, 4, 10));
    find_tithi_day(anchor, location, ReferenceInstant::Sunrise, 9, 2)
}

/// Raksha Bandhan: Purnima (tithi 15) at Aparahna, anchored on the last
/// full moon of late July–early September. Scan ±1 day.
pub fn raksha_bandhan(table: &[Lunation], year: i32, location: &Location) -> CivilDate {
    let anchor = last_in_window(table, LunationKind::FullMoon, year, (7, 28), (9, 3), location)
        .unwrap_or(CivilDate::new(year, 8, 15));
    find_tithi_day(anchor, location, ReferenceInstant::Aparahna, 15, 1)
}

/// Krishna Janmashtami: Krishna Ashtami (tithi 23) at Nishita, anchored
/// seven days after the August full moon. Scan ±2 days.
pub fn krishna_janmashtami(table: &[Lunation], year: i32, location: &Location) -> CivilDate {
    let anchor = last_in_window(table, LunationKind::FullMoon, year, (8, 2), (8, 31), location)
        .map(|d| d.add_days(7))
        .unwrap_or(CivilDate::new(year, 8, 25));
    find_tithi_day(anchor, location, ReferenceInstant::Nishita, 23, 2)
}

/// Ganesh Chaturthi: Shukla Chaturthi (tithi 4) at sunrise, anchored
/// three days after the last August/September new moon. Scan ±2 days.
pub fn ganesh_chaturthi(table: &[Lunation], year: i32, location: &Location) -> CivilDate {
    let anchor = last_in_window(table, LunationKind::NewMoon, year, (8, 18), (9, 16), location)
        .map(|d| d.add_days(3))
        .unwrap_or(CivilDate::new(year, 9, 5));
    find_tithi_day(anchor, location, ReferenceInstant::Sunrise, 4, 2)
}

/// Sharad Navaratri begins: Shukla Pratipada (tithi 1) at sunrise,
/// anchored one day after the September/October new moon. Scan ±1 day.
pub fn navaratri_start(table: &[Lunation], year: i32, location: &Location) -> CivilDate {
    let anchor = last_in_window(table, LunationKind::NewMoon, year, (9, 14), (10, 13), location)
        .map(|d| d.add_days(1))
        .unwrap_or(CivilDate::new(year, 10, 1));
    find_tithi_day(anchor, location, ReferenceInstant::Sunrise, 1, 1)
}

/// Vijayadashami (Dussehra): Shukla Dashami (tithi 10) at Aparahna,
/// anchored nine days after the September/October new moon. Scan ±1 day.
pub fn vijayadashami(table: &[Lunation], year: i32, location: &Location) -> CivilDate {
    let anchor = last_in_window(table, LunationKind::NewMoon, year, (9, 14), (10, 13), location)
        .map(|d| d.add_days(9))
        .unwrap_or(CivilDate::new(year, 10, 10));
    find_tithi_day(anchor, location, ReferenceInstant::Aparahna, 10, 1)
}

/// Diwali (Lakshmi Puja): Amavasya (tithi 30) at Pradosh, anchored on
/// the last October/November new moon. Scan ±1 day.
pub fn diwali(table: &[Lunation], year: i32, location: &Location) -> CivilDate {
    let anchor = last_in_window(table, LunationKind::NewMoon, year, (10, 15), (11, 14), location)
        .unwrap_or(CivilDate::new(year, 11, 1));
    find_tithi_day(anchor, location, ReferenceInstant::Pradosh, 30, 1)
}

/// All Hindu festivals for a year, in catalog order.
pub fn holidays_for_year(
    table: &[Lunation],
    year: i32,
    location: &Location,
) -> Vec<(CivilDate, &'static str)> {
    vec![
        (makar_sankranti(year, location), "Makar Sankranti"),
        (maha_shivaratri(table, year, location), "Maha Shivaratri"),
        (holika_dahan(table, year, location), "Holika Dahan"),
        (holi(table, year, location), "Holi"),
        (rama_navami(table, year, location), "Rama Navami"),
        (raksha_bandhan(table, year, location), "Raksha Bandhan"),
        (
            krishna_janmashtami(table, year, location),
            "Krishna Janmashtami",
        ),
        (ganesh_chaturthi(table, year, location), "Ganesh Chaturthi"),
        (navaratri_start(table, year, location), "Navaratri Begins"),
        (vijayadashami(table, year, location), "Vijayadashami"),
        (diwali(table, year, location), "Diwali"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delhi() -> Location {
        Location::new(28.6139, 77.209, 5.5)
    }

    #[test]
    fn table_alternates_kinds() {
        let table = lunation_table(2024);
        assert!(table.len() >= 25, "table length = {}", table.len());
        for pair in table.windows(2) {
            assert_ne!(pair[0].kind, pair[1].kind, "consecutive kinds equal");
            let gap = pair[1].jd_tt - pair[0].jd_tt;
            // Half a synodic month, 13.8–15.9 days.
            assert!((13.0..17.0).contains(&gap), "gap = {gap}");
        }
    }

    #[test]
    fn new_moon_spacing() {
        let table = lunation_table(2024);
        let new_moons: Vec<f64> = table
            .iter()
            .filter(|l| l.kind == LunationKind::NewMoon)
            .map(|l| l.jd_tt)
            .collect();
        for pair in new_moons.windows(2) {
            let gap = pair[1] - pair[0];
            assert!(
                (gap - 29.530_588_861).abs() < 0.3,
                "synodic gap = {gap}"
            );
        }
    }

    #[test]
    fn tithi_spans_twelve_degrees() {
        // Just after a new moon the tithi is 1; just before, 30.
        let table = lunation_table(2024);
        let nm = table
            .iter()
            .find(|l| l.kind == LunationKind::NewMoon)
            .unwrap()
            .jd_tt;
        assert_eq!(tithi_at(nm + 0.1), 1);
        assert_eq!(tithi_at(nm - 0.1), 30);
    }

    #[test]
    fn makar_sankranti_2024() {
        let d = makar_sankranti(2024, &delhi());
        assert_eq!((d.year, d.month), (2024, 1));
        assert!((14..=16).contains(&d.day), "Makar Sankranti = {d}");
    }

    #[test]
    fn maha_shivaratri_2024() {
        let table = lunation_table(2024);
        let d = maha_shivaratri(&table, 2024, &delhi());
        assert_eq!((d.year, d.month), (2024, 3));
        assert!((7..=9).contains(&d.day), "Shivaratri = {d}");
    }

    #[test]
    fn holi_2024() {
        let table = lunation_table(2024);
        let d = holi(&table, 2024, &delhi());
        assert_eq!((d.year, d.month), (2024, 3));
        assert!((24..=26).contains(&d.day), "Holi = {d}");
    }

    #[test]
    fn rama_navami_2024() {
        let table = lunation_table(2024);
        let d = rama_navami(&table, 2024, &delhi());
        assert_eq!((d.year, d.month), (2024, 4));
        assert!((16..=18).contains(&d.day), "Rama Navami = {d}");
    }

    #[test]
    fn raksha_bandhan_2024() {
        let table = lunation_table(2024);
        let d = raksha_bandhan(&table, 2024, &delhi());
        assert_eq!((d.year, d.month), (2024, 8));
        assert!((18..=20).contains(&d.day), "Raksha Bandhan = {d}");
    }

    #[test]
    fn krishna_janmashtami_2024() {
        let table = lunation_table(2024);
        let d = krishna_janmashtami(&table, 2024, &delhi());
        assert_eq!((d.year, d.month), (2024, 8));
        assert!((25..=27).contains(&d.day), "Janmashtami = {d}");
    }

    #[test]
    fn ganesh_chaturthi_2024() {
        let table = lunation_table(2024);
        let d = ganesh_chaturthi(&table, 2024, &delhi());
        assert_eq!((d.year, d.month), (2024, 9));
        assert!((6..=8).contains(&d.day), "Ganesh Chaturthi = {d}");
    }

    #[test]
    fn navaratri_2024() {
        let table = lunation_table(2024);
        let d = navaratri_start(&table, 2024, &delhi());
        assert_eq!((d.year, d.month), (2024, 10));
        assert!((3..=4).contains(&d.day), "Navaratri = {d}");
    }

    #[test]
    fn vijayadashami_2024() {
        let table = lunation_table(2024);
        let d = vijayadashami(&table, 2024, &delhi());
        assert_eq!((d.year, d.month), (2024, 10));
        assert!((11..=13).contains(&d.day), "Vijayadashami = {d}");
    }

    #[test]
    fn diwali_2024() {
        let table = lunation_table(2024);
        let d = diwali(&table, 2024, &delhi());
        // Lakshmi Puja 2024 fell on Oct 31 (Nov 1 in some conventions).
        assert_eq!(d.year, 2024);
        let lo = CivilDate::new(2024, 10, 30);
        let hi = CivilDate::new(2024, 11, 2);
        assert!((lo..=hi).contains(&d), "Diwali = {d}");
    }

    #[test]
    fn diwali_2023() {
        let table = lunation_table(2023);
        let d = diwali(&table, 2023, &delhi());
        assert_eq!((d.year, d.month), (2023, 11), "Diwali = {d}");
        assert!((11..=13).contains(&d.day), "Diwali = {d}");
    }

    #[test]
    fn holi_follows_dahan() {
        let table = lunation_table(2025);
        let dahan = holika_dahan(&table, 2025, &delhi());
        let h = holi(&table, 2025, &delhi());
        assert_eq!(h, dahan.add_days(1));
    }

    #[test]
    fn catalog_is_deterministic() {
        let table = lunation_table(2024);
        let a = holidays_for_year(&table, 2024, &delhi());
        let b = holidays_for_year(&table, 2024, &delhi());
        assert_eq!(a, b);
    }
}
