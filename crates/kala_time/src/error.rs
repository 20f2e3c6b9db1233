//! Error types for time handling.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from time parsing, validation, or scheduling.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Input string could not be parsed as an ISO-8601 UTC timestamp.
    Parse(String),
    /// Calendar fields are out of range (e.g. month 13).
    InvalidDate(&'static str),
    /// A NaN or infinite value was supplied where a finite instant is required.
    NonFinite(&'static str),
    /// Ticker period must be positive.
    InvalidPeriod,
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "time parse error: {msg}"),
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            Self::NonFinite(what) => write!(f, "non-finite value for {what}"),
            Self::InvalidPeriod => write!(f, "ticker period must be positive"),
        }
    }
}

impl Error for TimeError {}
