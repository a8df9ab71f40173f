//! Observer location and policy thresholds.

use crate::error::HolidayError;

/// Crescent-visibility policy for the Hijri month proxy.
///
/// Both thresholds are checked at local sunset on each candidate evening:
/// the Moon's age since conjunction and its elongation from the Sun must
/// both meet the minimum. The defaults reproduce the engine's documented
/// proxy; real sighting announcements can still differ by a day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrescentPolicy {
    /// Minimum Moon age since conjunction in hours. Default: 17.0.
    pub min_age_hours: f64,
    /// Minimum Moon–Sun elongation at sunset in degrees. Default: 9.0.
    pub min_elongation_deg: f64,
}

impl Default for CrescentPolicy {
    fn default() -> Self {
        Self {
            min_age_hours: 17.0,
            min_elongation_deg: 9.0,
        }
    }
}

impl CrescentPolicy {
    /// Check threshold ranges.
    pub fn validate(&self) -> Result<(), HolidayError> {
        if !self.min_age_hours.is_finite() || self.min_age_hours < 0.0 {
            return Err(HolidayError::InvalidLocation("crescent age threshold"));
        }
        if !self.min_elongation_deg.is_finite() || !(0.0..180.0).contains(&self.min_elongation_deg)
        {
            return Err(HolidayError::InvalidLocation("crescent elongation threshold"));
        }
        Ok(())
    }
}

/// Observer location with a fixed UTC offset (no DST).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Fixed offset from UTC in hours, east positive. Range: [-14, 14].
    pub utc_offset_hours: f64,
    /// Elevation above mean sea level in meters. Carried as part of the
    /// observer record; the day-level rise/set solver uses the standard
    /// horizon altitude.
    pub elevation_m: f64,
    /// Crescent-visibility thresholds for the Islamic module.
    pub crescent_policy: CrescentPolicy,
}

impl Location {
    /// Create a location at sea level with the default crescent policy.
    pub fn new(latitude_deg: f64, longitude_deg: f64, utc_offset_hours: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            utc_offset_hours,
            elevation_m: 0.0,
            crescent_policy: CrescentPolicy::default(),
        }
    }

    /// Validate all fields. Called at every public engine boundary.
    pub fn validate(&self) -> Result<(), HolidayError> {
        if !self.latitude_deg.is_finite() || self.latitude_deg.abs() > 90.0 {
            return Err(HolidayError::InvalidLocation("latitude out of range"));
        }
        if !self.longitude_deg.is_finite() || self.longitude_deg.abs() > 180.0 {
            return Err(HolidayError::InvalidLocation("longitude out of range"));
        }
        if !self.utc_offset_hours.is_finite() || self.utc_offset_hours.abs() > 14.0 {
            return Err(HolidayError::InvalidLocation("UTC offset out of range"));
        }
        if !self.elevation_m.is_finite() {
            return Err(HolidayError::InvalidLocation("elevation not finite"));
        }
        self.crescent_policy.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_thresholds() {
        let p = CrescentPolicy::default();
        assert_eq!(p.min_age_hours, 17.0);
        assert_eq!(p.min_elongation_deg, 9.0);
    }

    #[test]
    fn valid_location() {
        assert!(Location::new(22.3193, 114.1694, 8.0).validate().is_ok());
    }

    #[test]
    fn rejects_bad_latitude() {
        let loc = Location::new(91.0, 0.0, 0.0);
        assert!(matches!(
            loc.validate(),
            Err(HolidayError::InvalidLocation(_))
        ));
    }

    #[test]
    fn rejects_nan_fields() {
        assert!(Location::new(f64::NAN, 0.0, 0.0).validate().is_err());
        assert!(Location::new(0.0, f64::NAN, 0.0).validate().is_err());
        assert!(Location::new(0.0, 0.0, f64::NAN).validate().is_err());
    }

    #[test]
    fn rejects_bad_offset() {
        assert!(Location::new(0.0, 0.0, 15.0).validate().is_err());
        assert!(Location::new(0.0, 0.0, -15.0).validate().is_err());
    }

    #[test]
    fn rejects_bad_policy() {
        let mut loc = Location::new(0.0, 0.0, 0.0);
        loc.crescent_policy.min_age_hours = -1.0;
        assert!(loc.validate().is_err());
        loc.crescent_policy = CrescentPolicy::default();
        loc.crescent_policy.min_elongation_deg = 200.0;
        assert!(loc.validate().is_err());
    }
}
