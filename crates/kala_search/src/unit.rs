//! Calendrical unit definitions.

use kala_vedic_base::{NAKSHATRA_SPAN, RASHI_SPAN, TITHI_SPAN};

use crate::error::SearchError;

/// Default half-width of the root-search window around a seed, days.
pub const DEFAULT_SEARCH_WINDOW_DAYS: f64 = 0.7;

/// Seed half-window for Sun-driven units. The solar rate swings about
/// 3 % over the year, so a 30 deg extrapolation can miss by a day.
pub const SOLAR_SEARCH_WINDOW_DAYS: f64 = 2.0;

/// A family of equal-width sectors of a driving angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendricalUnit {
    pub name: &'static str,
    /// Width of one unit in degrees.
    pub span_deg: f64,
    /// Approximate rate of the driving angle, deg/day. Seeds the search only.
    pub rate_deg_per_day: f64,
    /// Half-width of the root-search window around each seed, days.
    pub window_days: f64,
}

/// 30 tithis of Moon-Sun elongation.
pub const TITHI: CalendricalUnit =
    CalendricalUnit::new("tithi", TITHI_SPAN, 12.19, DEFAULT_SEARCH_WINDOW_DAYS);

/// 27 nakshatras of sidereal lunar longitude.
pub const NAKSHATRA: CalendricalUnit =
    CalendricalUnit::new("nakshatra", NAKSHATRA_SPAN, 13.17, DEFAULT_SEARCH_WINDOW_DAYS);

/// 12 signs of sidereal lunar longitude.
pub const RASHI_MOON: CalendricalUnit =
    CalendricalUnit::new("moon rashi", RASHI_SPAN, 13.17, DEFAULT_SEARCH_WINDOW_DAYS);

/// 12 signs of sidereal solar longitude (also the solar masa).
pub const RASHI_SUN: CalendricalUnit =
    CalendricalUnit::new("sun rashi", RASHI_SPAN, 0.9856, SOLAR_SEARCH_WINDOW_DAYS);

impl CalendricalUnit {
    pub const fn new(
        name: &'static str,
        span_deg: f64,
        rate_deg_per_day: f64,
        window_days: f64,
    ) -> Self {
        Self {
            name,
            span_deg,
            rate_deg_per_day,
            window_days,
        }
    }

    /// Same unit with a different search half-window.
    pub const fn with_window(self, window_days: f64) -> Self {
        Self {
            window_days,
            ..self
        }
    }

    /// Units per full circle.
    pub fn count(&self) -> u32 {
        (360.0 / self.span_deg).round() as u32
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        if !self.span_deg.is_finite() || self.span_deg <= 0.0 || self.span_deg > 360.0 {
            return Err(SearchError::InvalidInput("unit span must be in (0, 360]"));
        }
        let sectors = 360.0 / self.span_deg;
        if (sectors - sectors.round()).abs() > 1e-9 {
            return Err(SearchError::InvalidInput("unit span must divide 360 evenly"));
        }
        if !self.rate_deg_per_day.is_finite() || self.rate_deg_per_day <= 0.0 {
            return Err(SearchError::InvalidInput("unit rate must be positive"));
        }
        if !self.window_days.is_finite() || self.window_days <= 0.0 {
            return Err(SearchError::InvalidInput("search window must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts() {
        assert_eq!(TITHI.count(), 30);
        assert_eq!(NAKSHATRA.count(), 27);
        assert_eq!(RASHI_MOON.count(), 12);
        assert_eq!(RASHI_SUN.count(), 12);
    }

    #[test]
    fn builtin_units_are_valid() {
        for u in [TITHI, NAKSHATRA, RASHI_MOON, RASHI_SUN] {
            assert!(u.validate().is_ok(), "{}", u.name);
        }
    }

    #[test]
    fn rejects_bad_definitions() {
        assert!(CalendricalUnit::new("x", 0.0, 1.0, 1.0).validate().is_err());
        assert!(CalendricalUnit::new("x", 12.0, -1.0, 1.0).validate().is_err());
        assert!(CalendricalUnit::new("x", 12.0, 1.0, f64::NAN).validate().is_err());
        assert!(CalendricalUnit::new("x", 400.0, 1.0, 1.0).validate().is_err());
    }

    #[test]
    fn rejects_span_that_leaves_a_partial_sector() {
        assert_eq!(
            CalendricalUnit::new("x", 7.0, 12.0, 0.7).validate(),
            Err(SearchError::InvalidInput("unit span must divide 360 evenly"))
        );
        assert!(CalendricalUnit::new("x", 360.0 / 27.0, 13.2, 0.7).validate().is_ok());
        assert!(CalendricalUnit::new("x", 360.0, 1.0, 1.0).validate().is_ok());
    }

    #[test]
    fn with_window_keeps_geometry() {
        let u = TITHI.with_window(1.5);
        assert_eq!(u.span_deg, TITHI.span_deg);
        assert_eq!(u.window_days, 1.5);
    }
}
