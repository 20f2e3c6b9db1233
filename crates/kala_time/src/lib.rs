//! Time instants, calendar conversion, and scheduling for the kala workspace.
//!
//! This crate provides:
//! - [`Epoch`], an absolute UTC instant stored as seconds past J2000.0
//! - [`Span`], a signed duration between two epochs
//! - Julian Date ↔ calendar conversions and a parsed [`UtcTime`]
//! - Greenwich / local sidereal time
//! - A [`Clock`] abstraction and [`Ticker`] for periodic refresh that tests
//!   can drive without real delays

pub mod clock;
pub mod error;
pub mod julian;
pub mod sidereal;
pub mod ticker;
pub mod utc_time;

use std::ops::{Add, Div, Sub};

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::TimeError;
pub use julian::{J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, jd_to_calendar};
pub use sidereal::{earth_rotation_angle_rad, gmst_rad, local_sidereal_time_rad};
pub use ticker::{CancelToken, TickControl, Ticker};
pub use utc_time::UtcTime;

/// Seconds between the Unix epoch (1970-01-01) and J2000.0.
const UNIX_TO_J2000_S: f64 = (J2000_JD - UNIX_EPOCH_JD) * SECONDS_PER_DAY;

/// An absolute instant on the UTC/UT axis, as seconds past J2000.0.
///
/// Leap seconds are not modelled; one day is always 86 400 s. An `f64`
/// gives sub-microsecond resolution over several millennia around J2000.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Epoch {
    seconds: f64,
}

impl Epoch {
    /// J2000.0 (2000-01-01T12:00:00Z).
    pub const J2000: Epoch = Epoch { seconds: 0.0 };

    /// Create an epoch from seconds past J2000.0.
    pub fn from_j2000_seconds(seconds: f64) -> Self {
        Self { seconds }
    }

    /// Create an epoch, rejecting NaN and infinities.
    pub fn new_checked(seconds: f64) -> Result<Self, TimeError> {
        if seconds.is_finite() {
            Ok(Self { seconds })
        } else {
            Err(TimeError::NonFinite("epoch seconds"))
        }
    }

    /// Create an epoch from a Julian Date (UTC).
    pub fn from_jd(jd: f64) -> Self {
        Self {
            seconds: (jd - J2000_JD) * SECONDS_PER_DAY,
        }
    }

    /// Create an epoch from milliseconds since the Unix epoch.
    pub fn from_unix_millis(ms: i64) -> Self {
        Self {
            seconds: ms as f64 / 1000.0 - UNIX_TO_J2000_S,
        }
    }

    /// Seconds past J2000.0.
    pub fn as_j2000_seconds(self) -> f64 {
        self.seconds
    }

    /// Julian Date (UTC).
    pub fn as_jd(self) -> f64 {
        J2000_JD + self.seconds / SECONDS_PER_DAY
    }

    /// Milliseconds since the Unix epoch, rounded to the nearest millisecond.
    pub fn as_unix_millis(self) -> i64 {
        ((self.seconds + UNIX_TO_J2000_S) * 1000.0).round() as i64
    }

    /// Julian centuries since J2000.0.
    pub fn julian_centuries(self) -> f64 {
        self.seconds / (SECONDS_PER_DAY * 36_525.0)
    }

    /// Shift by a (possibly fractional, possibly negative) number of days.
    pub fn add_days(self, days: f64) -> Self {
        Self {
            seconds: self.seconds + days * SECONDS_PER_DAY,
        }
    }

    /// Whether the underlying value is finite.
    pub fn is_finite(self) -> bool {
        self.seconds.is_finite()
    }

    /// The earlier of two epochs.
    pub fn min(self, other: Epoch) -> Epoch {
        if other.seconds < self.seconds { other } else { self }
    }

    /// The later of two epochs.
    pub fn max(self, other: Epoch) -> Epoch {
        if other.seconds > self.seconds { other } else { self }
    }

    /// Midpoint between two epochs.
    pub fn midpoint(self, other: Epoch) -> Epoch {
        Self {
            seconds: 0.5 * (self.seconds + other.seconds),
        }
    }
}

/// A signed duration in seconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Span {
    seconds: f64,
}

impl Span {
    pub const ZERO: Span = Span { seconds: 0.0 };

    pub fn from_seconds(seconds: f64) -> Self {
        Self { seconds }
    }

    pub fn from_days(days: f64) -> Self {
        Self {
            seconds: days * SECONDS_PER_DAY,
        }
    }

    pub fn as_seconds(self) -> f64 {
        self.seconds
    }

    pub fn as_days(self) -> f64 {
        self.seconds / SECONDS_PER_DAY
    }

    pub fn abs(self) -> Self {
        Self {
            seconds: self.seconds.abs(),
        }
    }

    /// Scale by a factor (used to split a span into equal parts).
    pub fn scale(self, factor: f64) -> Self {
        Self {
            seconds: self.seconds * factor,
        }
    }
}

impl Sub for Epoch {
    type Output = Span;

    fn sub(self, rhs: Epoch) -> Span {
        Span {
            seconds: self.seconds - rhs.seconds,
        }
    }
}

impl Add<Span> for Epoch {
    type Output = Epoch;

    fn add(self, rhs: Span) -> Epoch {
        Epoch {
            seconds: self.seconds + rhs.seconds,
        }
    }
}

impl Sub<Span> for Epoch {
    type Output = Epoch;

    fn sub(self, rhs: Span) -> Epoch {
        Epoch {
            seconds: self.seconds - rhs.seconds,
        }
    }
}

/// Ratio of two spans.
impl Div for Span {
    type Output = f64;

    fn div(self, rhs: Span) -> f64 {
        self.seconds / rhs.seconds
    }
}

impl std::fmt::Display for Epoch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        UtcTime::from_epoch(*self).fmt(f)
    }
}
