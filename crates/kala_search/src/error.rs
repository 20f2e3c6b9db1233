//! Error types for calendrical search.

use std::error::Error;
use std::fmt::{Display, Formatter};

use kala_core::EphemerisError;

/// Errors from boundary resolution and panchang search.
///
/// A root search that finds no crossing is not an error; the resolver
/// falls back to its linear seed and flags the result as approximate.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// The oracle failed to evaluate a body or search.
    Ephemeris(EphemerisError),
    /// Caller passed a non-finite or out-of-range value.
    InvalidInput(&'static str),
    /// A required rise/set event does not occur (polar day or night).
    NoEvent(&'static str),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::NoEvent(msg) => write!(f, "no event: {msg}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Ephemeris(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EphemerisError> for SearchError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}
