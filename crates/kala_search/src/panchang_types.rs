//! Types for panchang results.

use kala_time::Epoch;
use kala_vedic_base::{
    AyanamshaSystem, Masa, NakshatraInfo, PraharaInfo, Rashi, RashiInfo, TithiPosition, Vaar,
};

use crate::boundary::UnitOccurrence;
use crate::error::SearchError;
use crate::unit::DEFAULT_SEARCH_WINDOW_DAYS;

/// Inputs shared by every panchang element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanchangConfig {
    pub ayanamsha: AyanamshaSystem,
    /// Root-search half-window for Moon-driven units, days.
    pub search_window_days: f64,
}

impl Default for PanchangConfig {
    fn default() -> Self {
        Self {
            ayanamsha: AyanamshaSystem::default(),
            search_window_days: DEFAULT_SEARCH_WINDOW_DAYS,
        }
    }
}

impl PanchangConfig {
    pub fn new(ayanamsha: AyanamshaSystem, search_window_days: f64) -> Self {
        Self {
            ayanamsha,
            search_window_days,
        }
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        if !self.search_window_days.is_finite() || self.search_window_days <= 0.0 {
            return Err(SearchError::InvalidInput(
                "search_window_days must be positive and finite",
            ));
        }
        Ok(())
    }
}

/// Tithi with its start and end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiInfo {
    pub tithi: TithiPosition,
    pub occurrence: UnitOccurrence,
}

/// Moon's nakshatra with its start and end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanchangNakshatraInfo {
    pub nakshatra: NakshatraInfo,
    pub occurrence: UnitOccurrence,
}

/// A body's sidereal rashi with the times it entered and leaves it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiPeriod {
    pub rashi: RashiInfo,
    pub occurrence: UnitOccurrence,
}

/// Solar month: the Sun's sidereal sign, named as a masa.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MasaInfo {
    pub masa: Masa,
    pub sun_rashi: Rashi,
    pub occurrence: UnitOccurrence,
}

/// Vedic weekday, sunrise to sunrise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VaarInfo {
    pub vaar: Vaar,
    /// Sunrise that began this vaar.
    pub start: Epoch,
    /// Next sunrise.
    pub end: Epoch,
    pub progress: f64,
}

/// All panchang elements for one instant.
///
/// Sunrise-based elements are `None` when the Sun does not rise or set
/// around the query instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanchangInfo {
    pub at: Epoch,
    pub tithi: TithiInfo,
    pub nakshatra: PanchangNakshatraInfo,
    pub moon_rashi: RashiPeriod,
    pub sun_rashi: RashiPeriod,
    pub masa: MasaInfo,
    pub vaar: Option<VaarInfo>,
    pub prahara: Option<PraharaInfo>,
}
