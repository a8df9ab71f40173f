//! The calendar-engine facade.
//!
//! Dispatches a closed set of traditions, validates all boundary inputs,
//! and memoizes the expensive per-year tables (Hindu lunations, Chinese
//! months) per engine instance. Every output is a pure function of the
//! inputs: the caches only avoid recomputation, and a concurrent fill for
//! the same year costs duplicated work, never a different result.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::chinese::{self, ChineseMonth};
use crate::christian;
use crate::date::CivilDate;
use crate::error::HolidayError;
use crate::hindu::{self, Lunation};
use crate::islamic;
use crate::location::Location;

/// Supported year range. Outside it the ΔT fits and the truncated series
/// degrade, so the boundary rejects instead of extrapolating.
pub const MIN_YEAR: i32 = 1600;
pub const MAX_YEAR: i32 = 2400;

/// The four supported holiday traditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tradition {
    /// Western/Orthodox Christian feasts (arithmetic computus).
    Gregorian,
    /// Islamic (Hijri) months via the crescent-visibility proxy.
    Islamic,
    /// Hindu luni-solar, tithi-based festivals.
    Hindu,
    /// Chinese lunisolar months via principal-term bracketing.
    Chinese,
}

impl Tradition {
    /// Whether this tradition needs an observer location.
    pub fn needs_location(self) -> bool {
        !matches!(self, Self::Gregorian)
    }
}

/// Chinese tables depend on the observer's UTC offset (local month-start
/// dates), so the cache key carries it quantized to minutes.
type ChineseKey = (i32, i32);

/// Holiday computation engine with per-instance memoization.
#[derive(Debug, Default)]
pub struct CalendarEngine {
    hindu_lunations: Mutex<HashMap<i32, Arc<Vec<Lunation>>>>,
    chinese_months: Mutex<HashMap<ChineseKey, Arc<Vec<ChineseMonth>>>>,
}

/// Recover a cache guard even if another thread panicked mid-insert; the
/// map only ever holds fully built Arc'd tables.
fn lock_cache<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl CalendarEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unwrap the observer for a tradition that requires one.
    fn require_location(location: Option<&Location>) -> Result<&Location, HolidayError> {
        location.ok_or(HolidayError::MissingLocation(
            "tradition requires an observer location",
        ))
    }

    /// Hindu lunation table for a year, built at most once per instance.
    pub fn hindu_lunations(&self, year: i32) -> Arc<Vec<Lunation>> {
        if let Some(table) = lock_cache(&self.hindu_lunations).get(&year) {
            return Arc::clone(table);
        }
        // Built outside the lock: recomputation is pure, so a racing fill
        // merely duplicates work. First insert wins.
        let table = Arc::new(hindu::lunation_table(year));
        Arc::clone(
            lock_cache(&self.hindu_lunations)
                .entry(year)
                .or_insert(table),
        )
    }

    /// Chinese month table for a year and UTC offset.
    pub fn chinese_months(&self, year: i32, location: &Location) -> Arc<Vec<ChineseMonth>> {
        let key = (year, (location.utc_offset_hours * 60.0).round() as i32);
        if let Some(table) = lock_cache(&self.chinese_months).get(&key) {
            return Arc::clone(table);
        }
        let table = Arc::new(chinese::month_table(year, location));
        Arc::clone(lock_cache(&self.chinese_months).entry(key).or_insert(table))
    }

    /// All holidays of a tradition for a Gregorian year, as a mapping from
    /// civil date to holiday name. Colliding dates merge their names.
    pub fn holidays_for_year(
        &self,
        tradition: Tradition,
        year: i32,
        location: Option<&Location>,
    ) -> Result<BTreeMap<CivilDate, String>, HolidayError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(HolidayError::InvalidYear("outside supported range"));
        }
        if let Some(loc) = location {
            loc.validate()?;
        }

        let entries = match tradition {
            Tradition::Gregorian => christian::holidays_for_year(year),
            Tradition::Islamic => {
                let loc = Self::require_location(location)?;
                islamic::holidays_for_year(year, loc)
            }
            Tradition::Hindu => {
                let loc = Self::require_location(location)?;
                let table = self.hindu_lunations(year);
                hindu::holidays_for_year(&table, year, loc)
            }
            Tradition::Chinese => {
                let loc = Self::require_location(location)?;
                let table = self.chinese_months(year, loc);
                chinese::holidays_for_year(&table, year, loc)
            }
        };

        let mut merged: BTreeMap<CivilDate, String> = BTreeMap::new();
        for (date, name) in entries {
            merged
                .entry(date)
                .and_modify(|names| {
                    names.push_str("; ");
                    names.push_str(name);
                })
                .or_insert_with(|| name.to_string());
        }
        Ok(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hong_kong() -> Location {
        Location::new(22.3193, 114.1694, 8.0)
    }

    #[test]
    fn gregorian_needs_no_location() {
        let engine = CalendarEngine::new();
        let map = engine
            .holidays_for_year(Tradition::Gregorian, 2024, None)
            .unwrap();
        assert_eq!(
            map.get(&CivilDate::new(2024, 3, 31)).map(String::as_str),
            Some("Easter Sunday")
        );
    }

    #[test]
    fn lunar_traditions_require_location() {
        let engine = CalendarEngine::new();
        for tradition in [Tradition::Islamic, Tradition::Hindu, Tradition::Chinese] {
            let err = engine.holidays_for_year(tradition, 2024, None);
            assert!(
                matches!(err, Err(HolidayError::MissingLocation(_))),
                "{tradition:?}"
            );
        }
    }

    #[test]
    fn year_bounds_enforced() {
        let engine = CalendarEngine::new();
        for year in [1599, 2401, i32::MIN, i32::MAX] {
            let err = engine.holidays_for_year(Tradition::Gregorian, year, None);
            assert!(matches!(err, Err(HolidayError::InvalidYear(_))), "{year}");
        }
    }

    #[test]
    fn invalid_location_rejected() {
        let engine = CalendarEngine::new();
        let bad = Location::new(99.0, 0.0, 8.0);
        let err = engine.holidays_for_year(Tradition::Chinese, 2024, Some(&bad));
        assert!(matches!(err, Err(HolidayError::InvalidLocation(_))));
    }

    #[test]
    fn cache_is_memoization_only() {
        // The cached table and a fresh computation must be identical.
        let engine = CalendarEngine::new();
        let first = engine.hindu_lunations(2024);
        let second = engine.hindu_lunations(2024);
        assert!(Arc::ptr_eq(&first, &second), "second call should hit cache");

        let fresh = crate::hindu::lunation_table(2024);
        assert_eq!(*first, fresh);
    }

    #[test]
    fn chinese_cache_keyed_by_offset() {
        let engine = CalendarEngine::new();
        let hk = engine.chinese_months(2024, &hong_kong());
        let utc = engine.chinese_months(2024, &Location::new(22.3193, 114.1694, 0.0));
        assert!(!Arc::ptr_eq(&hk, &utc), "offsets must not share a table");
    }

    #[test]
    fn deterministic_outputs() {
        let engine_a = CalendarEngine::new();
        let engine_b = CalendarEngine::new();
        let loc = hong_kong();
        for tradition in [
            Tradition::Gregorian,
            Tradition::Islamic,
            Tradition::Hindu,
            Tradition::Chinese,
        ] {
            let a = engine_a
                .holidays_for_year(tradition, 2024, Some(&loc))
                .unwrap();
            let b = engine_b
                .holidays_for_year(tradition, 2024, Some(&loc))
                .unwrap();
            assert_eq!(a, b, "{tradition:?}");
        }
    }

    #[test]
    fn chinese_new_year_2024_hong_kong() {
        let engine = CalendarEngine::new();
        let map = engine
            .holidays_for_year(Tradition::Chinese, 2024, Some(&hong_kong()))
            .unwrap();
        assert_eq!(
            map.get(&CivilDate::new(2024, 2, 10)).map(String::as_str),
            Some("Chinese New Year")
        );
    }
}
