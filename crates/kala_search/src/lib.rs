//! Calendrical boundary resolution against an ephemeris oracle.
//!
//! This crate provides:
//! - [`resolve_occurrence`]: which unit of a sectored angle is active at an
//!   instant, and when it began and ends
//! - Panchang elements (tithi, nakshatra, moon/sun rashi, masa, vaar,
//!   prahara) with start/end times
//! - Sun/Moon rise-set cycles and the lunation
//! - Sidereal planetary positions and the rashi chart
//!
//! Every function takes its oracle, instant, and configuration as
//! arguments; nothing is cached between calls.

pub mod boundary;
pub mod cycles;
pub mod error;
pub mod panchang;
pub mod panchang_types;
pub mod planets;
pub mod unit;

pub use boundary::{Crossing, UnitOccurrence, find_crossing, resolve_occurrence};
pub use cycles::{BodyCycle, MoonPhaseCycle, body_cycle, moon_phase_cycle};
pub use error::SearchError;
pub use panchang::{
    elongation_at, masa_for_date, moon_rashi_for_date, moon_sidereal_longitude_at,
    nakshatra_for_date, panchang_for_date, prahara_for_date, sun_rashi_for_date,
    sun_sidereal_longitude_at, tithi_for_date, vaar_for_date, vaar_from_sunrises,
    vedic_day_sunrises,
};
pub use panchang_types::{
    MasaInfo, PanchangConfig, PanchangInfo, PanchangNakshatraInfo, RashiPeriod, TithiInfo,
    VaarInfo,
};
pub use planets::{PlanetPosition, RashiChart, planetary_positions, rashi_chart};
pub use unit::{
    CalendricalUnit, DEFAULT_SEARCH_WINDOW_DAYS, NAKSHATRA, RASHI_MOON, RASHI_SUN,
    SOLAR_SEARCH_WINDOW_DAYS, TITHI,
};
