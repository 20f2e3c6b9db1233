//! Sun/Moon visibility cycles and the lunation.

use kala_core::{Body, Ephemeris, EphemerisError, GeoLocation, RiseSetKind};
use kala_time::Epoch;
use kala_vedic_base::{MoonPhaseName, angle_diff, moon_phase_name};
use tracing::warn;

use crate::error::SearchError;
use crate::panchang::elongation_at;

/// Rise/set searches for a cycle look this far either side, days.
pub const CYCLE_LIMIT_DAYS: f64 = 2.0;

/// New moons are searched this far either side, days.
pub const NEW_MOON_LIMIT_DAYS: f64 = 45.0;

/// Chunk length for the new-moon scan. Shorter than a lunation so each
/// chunk holds at most one new moon.
const NEW_MOON_CHUNK_DAYS: f64 = 5.0;

/// Where a body is in its rise/set cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyCycle {
    pub body: Body,
    /// Above the horizon now.
    pub is_up: bool,
    /// Next set when up, next rise when down.
    pub next_event: Epoch,
    pub next_event_kind: RiseSetKind,
    /// Previous rise when up, previous set when down.
    pub start: Epoch,
    pub end: Epoch,
    /// Fraction of the current up/down period elapsed, [0, 1].
    pub progress: f64,
}

/// Current up/down period of `body` for an observer.
///
/// `Ok(None)` when any of the four surrounding rise/set events is missing
/// (circumpolar or never-rising at this latitude).
pub fn body_cycle<E: Ephemeris + ?Sized>(
    oracle: &E,
    body: Body,
    location: &GeoLocation,
    at: Epoch,
) -> Result<Option<BodyCycle>, SearchError> {
    location.validate()?;
    let search = |kind, limit| oracle.search_rise_set(body, location, kind, at, limit);
    let next_rise = search(RiseSetKind::Rise, CYCLE_LIMIT_DAYS)?;
    let next_set = search(RiseSetKind::Set, CYCLE_LIMIT_DAYS)?;
    let prev_rise = search(RiseSetKind::Rise, -CYCLE_LIMIT_DAYS)?;
    let prev_set = search(RiseSetKind::Set, -CYCLE_LIMIT_DAYS)?;

    let (Some(next_rise), Some(next_set), Some(prev_rise), Some(prev_set)) =
        (next_rise, next_set, prev_rise, prev_set)
    else {
        warn!(body = body.name(), "no rise/set event within window (polar)");
        return Ok(None);
    };

    let is_up = next_set < next_rise;
    let (start, end, kind) = if is_up {
        (prev_rise, next_set, RiseSetKind::Set)
    } else {
        (prev_set, next_rise, RiseSetKind::Rise)
    };
    let len = (end - start).as_seconds();
    let progress = if len > 0.0 {
        ((at - start).as_seconds() / len).clamp(0.0, 1.0)
    } else {
        0.0
    };
    Ok(Some(BodyCycle {
        body,
        is_up,
        next_event: end,
        next_event_kind: kind,
        start,
        end,
        progress,
    }))
}

/// Position in the current lunation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPhaseCycle {
    /// Moon-Sun elongation, [0, 360).
    pub phase_deg: f64,
    pub name: MoonPhaseName,
    /// `phase_deg / 360`.
    pub progress: f64,
    pub previous_new_moon: Option<Epoch>,
    pub next_new_moon: Option<Epoch>,
}

/// Nearest new moon from `at`, scanning chunk by chunk away from it.
fn nearest_new_moon<E: Ephemeris + ?Sized>(
    oracle: &E,
    at: Epoch,
    forward: bool,
) -> Result<Option<Epoch>, SearchError> {
    let f = |t: Epoch| -> Result<f64, EphemerisError> {
        Ok(angle_diff(elongation_at(oracle, t)?, 0.0))
    };
    let dir = if forward { 1.0 } else { -1.0 };
    let chunks = (NEW_MOON_LIMIT_DAYS / NEW_MOON_CHUNK_DAYS).ceil() as usize;
    for k in 0..chunks {
        let near = at.add_days(dir * NEW_MOON_CHUNK_DAYS * k as f64);
        let reach = (NEW_MOON_CHUNK_DAYS * (k + 1) as f64).min(NEW_MOON_LIMIT_DAYS);
        let far = at.add_days(dir * reach);
        let (t0, t1) = if forward { (near, far) } else { (far, near) };
        if let Some(t) = oracle.search_root(&f, t0, t1)? {
            return Ok(Some(t));
        }
    }
    Ok(None)
}

pub fn moon_phase_cycle<E: Ephemeris + ?Sized>(
    oracle: &E,
    at: Epoch,
) -> Result<MoonPhaseCycle, SearchError> {
    if !at.is_finite() {
        return Err(SearchError::InvalidInput("query time must be finite"));
    }
    let phase_deg = elongation_at(oracle, at)?;
    Ok(MoonPhaseCycle {
        phase_deg,
        name: moon_phase_name(phase_deg),
        progress: phase_deg / 360.0,
        previous_new_moon: nearest_new_moon(oracle, at, false)?,
        next_new_moon: nearest_new_moon(oracle, at, true)?,
    })
}
