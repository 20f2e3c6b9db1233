//! Error types for oracle queries.

use std::error::Error;
use std::fmt::{Display, Formatter};

use kala_time::TimeError;

/// Errors an [`crate::Ephemeris`] implementation may report.
///
/// "No event in window" is not an error; searches return `Ok(None)`.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The oracle cannot evaluate this body or epoch.
    Unavailable(&'static str),
    /// Observer location is outside the valid range.
    InvalidLocation(&'static str),
    /// A function value or time was NaN or infinite.
    NonFinite(&'static str),
    /// Error from time handling.
    Time(TimeError),
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "ephemeris unavailable: {msg}"),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::NonFinite(what) => write!(f, "non-finite value: {what}"),
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for EphemerisError {}

impl From<TimeError> for EphemerisError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
