//! Calendrical boundary resolution.
//!
//! A calendrical unit is a fixed-width sector of a continuously varying
//! angle (Moon-Sun elongation, sidereal lunar longitude, ...). Given an
//! instant, the resolver finds which sector the angle is in and the
//! instants at which the angle entered and will leave it:
//!
//! 1. Evaluate the angle at `t` and take `floor(angle / span)`.
//! 2. Seed each boundary by linear extrapolation with the unit's rate.
//! 3. Ask the oracle for the zero of `angle_diff(angle(τ), target)` in a
//!    window around the seed.
//! 4. On a miss, keep the seed and mark the occurrence approximate.

use kala_core::{AngleFn, Ephemeris, EphemerisError};
use kala_time::Epoch;
use kala_vedic_base::{angle_diff, normalize_360, unit_index};
use tracing::{debug, trace};

use crate::error::SearchError;
use crate::unit::CalendricalUnit;

/// A boundary instant and whether it came from the root search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing {
    pub at: Epoch,
    /// `true` when the search missed and `at` is the linear seed.
    pub approximate: bool,
}

/// The unit occurrence active at an instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitOccurrence {
    /// 0-based unit index within the full circle.
    pub index: u32,
    /// Driving angle at the query instant, [0, 360).
    pub angle_deg: f64,
    pub start: Epoch,
    pub end: Epoch,
    /// `(t - start) / (end - start)`, in [0, 1].
    pub progress: f64,
    /// Either boundary fell back to its seed estimate.
    pub approximate: bool,
}

impl UnitOccurrence {
    /// Progress as a percentage.
    pub fn percent(&self) -> f64 {
        self.progress * 100.0
    }
}

/// Instant at which the driving angle reaches `target_deg`, searched near
/// the linear extrapolation from `(t, current_deg)`.
///
/// `current_deg` is the angle already evaluated at `t`.
pub fn find_crossing<E: Ephemeris + ?Sized>(
    oracle: &E,
    angle_fn: &AngleFn<'_>,
    t: Epoch,
    current_deg: f64,
    target_deg: f64,
    rate_deg_per_day: f64,
    window_days: f64,
) -> Result<Crossing, SearchError> {
    let delta = angle_diff(current_deg, target_deg);
    let seed = t.add_days(-delta / rate_deg_per_day);
    let f = |tau: Epoch| -> Result<f64, EphemerisError> {
        Ok(angle_diff(angle_fn(tau)?, target_deg))
    };
    let found = oracle.search_root(&f, seed.add_days(-window_days), seed.add_days(window_days))?;
    match found {
        Some(at) => {
            trace!(target_deg, %at, "boundary found");
            Ok(Crossing {
                at,
                approximate: false,
            })
        }
        None => {
            debug!(target_deg, %seed, window_days, "no crossing in window, using seed");
            Ok(Crossing {
                at: seed,
                approximate: true,
            })
        }
    }
}

/// Resolve the occurrence of `unit` active at `t`.
pub fn resolve_occurrence<E: Ephemeris + ?Sized>(
    oracle: &E,
    angle_fn: &AngleFn<'_>,
    t: Epoch,
    unit: &CalendricalUnit,
) -> Result<UnitOccurrence, SearchError> {
    if !t.is_finite() {
        return Err(SearchError::InvalidInput("query time must be finite"));
    }
    unit.validate()?;
    let raw = angle_fn(t)?;
    if !raw.is_finite() {
        return Err(SearchError::InvalidInput("angle function returned a non-finite value"));
    }
    let current = normalize_360(raw);
    let index = unit_index(current, unit.span_deg);
    let target_start = index as f64 * unit.span_deg;
    let target_end = normalize_360(target_start + unit.span_deg);

    let rate = unit.rate_deg_per_day;
    let w = unit.window_days;
    let start = find_crossing(oracle, angle_fn, t, current, target_start, rate, w)?;
    let end = find_crossing(oracle, angle_fn, t, current, target_end, rate, w)?;

    // A seed can land on the wrong side of t; keep start <= t <= end.
    let start_at = start.at.min(t);
    let end_at = end.at.max(t);
    let len = (end_at - start_at).as_seconds();
    let progress = if len > 0.0 {
        ((t - start_at).as_seconds() / len).clamp(0.0, 1.0)
    } else {
        0.0
    };

    Ok(UnitOccurrence {
        index,
        angle_deg: current,
        start: start_at,
        end: end_at,
        progress,
        approximate: start.approximate || end.approximate,
    })
}
