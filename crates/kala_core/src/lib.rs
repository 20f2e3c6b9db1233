//! Ephemeris oracle contract.
//!
//! Calendrical computations never talk to an ephemeris implementation
//! directly; they receive something that implements [`Ephemeris`]. The
//! trait has three capabilities:
//!
//! - body longitude at an instant
//! - next/previous rise or set of a body for an observer
//! - first zero crossing of a caller-supplied function in a window
//!
//! Tests plug in synthetic deterministic oracles; the CLI plugs in the
//! analytic model from `kala_ephem`.

pub mod error;
pub mod location;
pub mod root;

pub use error::EphemerisError;
pub use location::GeoLocation;
pub use root::{CONVERGENCE_DAYS, find_root, is_genuine_crossing};

use kala_time::Epoch;

/// Bodies the oracle can be asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

/// All bodies in display order (luminaries first, then by distance).
pub const ALL_BODIES: [Body; 9] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
];

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
        }
    }

    /// Whether the body can appear retrograde from Earth.
    pub const fn is_planet(self) -> bool {
        !matches!(self, Self::Sun | Self::Moon)
    }
}

/// Horizon event direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiseSetKind {
    Rise,
    Set,
}

/// Signature of the functions handed to [`Ephemeris::search_root`].
pub type AngleFn<'a> = dyn Fn(Epoch) -> Result<f64, EphemerisError> + 'a;

/// The oracle every calendrical search is computed against.
pub trait Ephemeris {
    /// Geocentric tropical ecliptic longitude of `body` in degrees [0, 360).
    fn longitude_deg(&self, body: Body, at: Epoch) -> Result<f64, EphemerisError>;

    /// Next (`limit_days > 0`) or previous (`limit_days < 0`) rise/set of
    /// `body` within `|limit_days|` of `start`.
    ///
    /// `Ok(None)` means there is no such event in the window, e.g. polar
    /// day or night. It is not an error.
    fn search_rise_set(
        &self,
        body: Body,
        location: &GeoLocation,
        kind: RiseSetKind,
        start: Epoch,
        limit_days: f64,
    ) -> Result<Option<Epoch>, EphemerisError>;

    /// First instant in `[t0, t1]` where `f` crosses zero.
    fn search_root(
        &self,
        f: &AngleFn<'_>,
        t0: Epoch,
        t1: Epoch,
    ) -> Result<Option<Epoch>, EphemerisError> {
        find_root(f, t0, t1)
    }
}

impl<T: Ephemeris + ?Sized> Ephemeris for &T {
    fn longitude_deg(&self, body: Body, at: Epoch) -> Result<f64, EphemerisError> {
        (**self).longitude_deg(body, at)
    }

    fn search_rise_set(
        &self,
        body: Body,
        location: &GeoLocation,
        kind: RiseSetKind,
        start: Epoch,
        limit_days: f64,
    ) -> Result<Option<Epoch>, EphemerisError> {
        (**self).search_rise_set(body, location, kind, start, limit_days)
    }

    fn search_root(
        &self,
        f: &AngleFn<'_>,
        t0: Epoch,
        t1: Epoch,
    ) -> Result<Option<Epoch>, EphemerisError> {
        (**self).search_root(f, t0, t1)
    }
}
