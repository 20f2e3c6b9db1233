//! Analytic (series-based) ephemeris.
//!
//! [`AnalyticEphemeris`] answers the [`kala_core::Ephemeris`] contract
//! from closed-form models instead of kernel files:
//!
//! - Sun: low-precision solar coordinates, ~0.01 deg
//! - Moon: principal terms of the lunar series, ~0.1 deg
//! - Planets: Keplerian mean elements with secular rates (1800-2050),
//!   a few arcminutes for the outer planets
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed.) ch. 13, 22, 25, 47;
//! Standish, "Keplerian Elements for Approximate Positions of the Major
//! Planets" (JPL).

pub mod coords;
pub mod moon;
pub mod planets;
pub mod riseset;
pub mod sun;

pub use coords::{EclipticCoords, HorizontalCoords, ecliptic_to_equatorial, mean_obliquity_deg};
pub use riseset::{MOON_STANDARD_ALTITUDE_DEG, SUN_STANDARD_ALTITUDE_DEG};

use kala_core::{Body, Ephemeris, EphemerisError, GeoLocation, RiseSetKind};
use kala_time::Epoch;

/// Series-based oracle. Stateless; cheap to copy.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticEphemeris;

impl AnalyticEphemeris {
    pub fn new() -> Self {
        Self
    }

    /// Geocentric ecliptic coordinates of date for `body`.
    pub fn ecliptic(&self, body: Body, at: Epoch) -> Result<EclipticCoords, EphemerisError> {
        if !at.is_finite() {
            return Err(EphemerisError::NonFinite("epoch"));
        }
        let t = at.julian_centuries();
        Ok(match body {
            Body::Sun => sun::sun_ecliptic(t),
            Body::Moon => moon::moon_ecliptic(t),
            planet => planets::planet_ecliptic(planet, t)?,
        })
    }

    /// Altitude and azimuth of `body` for an observer.
    pub fn horizontal(
        &self,
        body: Body,
        location: &GeoLocation,
        at: Epoch,
    ) -> Result<HorizontalCoords, EphemerisError> {
        let ecl = self.ecliptic(body, at)?;
        Ok(coords::horizontal(&ecl, location, at))
    }
}

impl Ephemeris for AnalyticEphemeris {
    fn longitude_deg(&self, body: Body, at: Epoch) -> Result<f64, EphemerisError> {
        Ok(self.ecliptic(body, at)?.lon_deg)
    }

    fn search_rise_set(
        &self,
        body: Body,
        location: &GeoLocation,
        kind: RiseSetKind,
        start: Epoch,
        limit_days: f64,
    ) -> Result<Option<Epoch>, EphemerisError> {
        location.validate()?;
        riseset::search_rise_set(self, body, location, kind, start, limit_days)
    }
}
