//! Pure Vedic calendrical classification.
//!
//! Everything here maps an angle (or a pair of instants) to a named unit.
//! No ephemeris access happens in this crate; `kala_search` feeds it
//! longitudes and rise/set times obtained from an oracle.
//!
//! This crate provides:
//! - Angle normalization and wrap-safe differences
//! - Ayanamsha models and sidereal conversion
//! - Rashi (12 x 30 deg) with DMS, Nakshatra (27 x 13 deg 20') with pada
//! - Tithi and Paksha from Moon-Sun elongation
//! - Solar masa, weekday (vaar), prahara quarters
//! - Moon phase naming, compass points, observing-condition scoring

pub mod angle;
pub mod ayanamsha;
pub mod compass;
pub mod masa;
pub mod moon_phase;
pub mod nakshatra;
pub mod observing;
pub mod prahara;
pub mod rashi;
pub mod tithi;
pub mod vaar;

pub use angle::{angle_diff, normalize_360, signed_arc, unit_index};
pub use ayanamsha::{ALL_SYSTEMS, AyanamshaSystem, ayanamsha_deg, sidereal_longitude};
pub use compass::{COMPASS_POINTS, compass_direction};
pub use masa::{ALL_MASAS, Masa, masa_from_sun_rashi};
pub use moon_phase::{MoonPhaseName, moon_phase_name};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN, nakshatra_from_longitude,
};
pub use observing::{ObservingConditions, WeatherSample};
pub use prahara::{PraharaHalf, PraharaInfo, prahara_from_bracket};
pub use rashi::{
    ALL_RASHIS, Dms, RASHI_SPAN, Rashi, RashiInfo, deg_to_dms, dms_to_deg, rashi_from_longitude,
};
pub use tithi::{ALL_TITHI_NAMES, Paksha, TITHI_SPAN, TithiName, TithiPosition, tithi_from_elongation};
pub use vaar::{ALL_VAARS, Vaar, vaar_from_weekday};
