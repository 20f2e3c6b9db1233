//! Horizon crossing search.
//!
//! The geometric altitude of the body minus its standard altitude `h0` is
//! sampled hourly from the start instant in the search direction. The
//! nearest bracket whose sign change matches the requested event
//! direction is refined with [`kala_core::find_root`].

use kala_core::{Body, EphemerisError, GeoLocation, RiseSetKind, find_root};
use kala_time::Epoch;
use tracing::trace;

use crate::AnalyticEphemeris;

/// Sun's upper limb on the horizon with standard refraction.
pub const SUN_STANDARD_ALTITUDE_DEG: f64 = -0.8333;

/// Moon's standard altitude at mean distance.
///
/// The search itself recomputes `h0` from the instantaneous parallax.
pub const MOON_STANDARD_ALTITUDE_DEG: f64 = 0.125;

/// Point source on the horizon with standard refraction.
const STAR_STANDARD_ALTITUDE_DEG: f64 = -0.5667;

const EARTH_EQUATORIAL_RADIUS_KM: f64 = 6378.14;

/// Scan step in days.
const SCAN_STEP_DAYS: f64 = 1.0 / 24.0;

fn standard_altitude_deg(body: Body, distance_km: f64) -> f64 {
    match body {
        Body::Sun => SUN_STANDARD_ALTITUDE_DEG,
        Body::Moon => {
            let parallax = (EARTH_EQUATORIAL_RADIUS_KM / distance_km).asin().to_degrees();
            0.7275 * parallax + STAR_STANDARD_ALTITUDE_DEG
        }
        _ => STAR_STANDARD_ALTITUDE_DEG,
    }
}

fn altitude_above_h0(
    eph: &AnalyticEphemeris,
    body: Body,
    location: &GeoLocation,
    at: Epoch,
) -> Result<f64, EphemerisError> {
    let ecl = eph.ecliptic(body, at)?;
    let hz = crate::coords::horizontal(&ecl, location, at);
    Ok(hz.altitude_deg - standard_altitude_deg(body, ecl.distance_km))
}

/// Whether the (earlier, later) sample pair brackets an event of `kind`.
fn brackets(kind: RiseSetKind, g_early: f64, g_late: f64) -> bool {
    match kind {
        RiseSetKind::Rise => g_early < 0.0 && g_late >= 0.0,
        RiseSetKind::Set => g_early >= 0.0 && g_late < 0.0,
    }
}

/// Nearest rise or set from `start`, forward when `limit_days > 0` and
/// backward when negative. `Ok(None)` when no event falls within
/// `|limit_days|` (circumpolar or never-rising body).
pub fn search_rise_set(
    eph: &AnalyticEphemeris,
    body: Body,
    location: &GeoLocation,
    kind: RiseSetKind,
    start: Epoch,
    limit_days: f64,
) -> Result<Option<Epoch>, EphemerisError> {
    if !start.is_finite() || !limit_days.is_finite() {
        return Err(EphemerisError::NonFinite("rise/set search window"));
    }
    if limit_days == 0.0 {
        return Ok(None);
    }
    let g = |t: Epoch| altitude_above_h0(eph, body, location, t);
    let dir = limit_days.signum();
    let steps = (limit_days.abs() / SCAN_STEP_DAYS).ceil() as usize;

    let mut t_a = start;
    let mut g_a = g(t_a)?;
    for i in 1..=steps {
        let offset = (SCAN_STEP_DAYS * i as f64).min(limit_days.abs());
        let t_b = start.add_days(dir * offset);
        let g_b = g(t_b)?;
        let (early, late, g_early, g_late) = if dir > 0.0 {
            (t_a, t_b, g_a, g_b)
        } else {
            (t_b, t_a, g_b, g_a)
        };
        if brackets(kind, g_early, g_late) {
            let found = find_root(&g, early, late)?;
            trace!(body = body.name(), ?kind, ?found, "horizon crossing refined");
            return Ok(found.or(Some(late)));
        }
        t_a = t_b;
        g_a = g_b;
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kala_time::UtcTime;

    fn epoch(s: &str) -> Epoch {
        s.parse::<UtcTime>().unwrap().to_epoch()
    }

    #[test]
    fn moon_h0_near_standard_at_mean_distance() {
        let h0 = standard_altitude_deg(Body::Moon, 384_400.0);
        assert!((h0 - MOON_STANDARD_ALTITUDE_DEG).abs() < 0.01, "h0 = {h0}");
    }

    #[test]
    fn bracket_direction() {
        assert!(brackets(RiseSetKind::Rise, -1.0, 1.0));
        assert!(!brackets(RiseSetKind::Rise, 1.0, -1.0));
        assert!(brackets(RiseSetKind::Set, 1.0, -1.0));
        assert!(!brackets(RiseSetKind::Set, -1.0, 1.0));
    }

    #[test]
    fn delhi_equinox_sunrise() {
        let eph = AnalyticEphemeris::new();
        let delhi = GeoLocation::new_delhi();
        let start = epoch("2024-03-19T18:30:00Z");
        let rise = search_rise_set(&eph, Body::Sun, &delhi, RiseSetKind::Rise, start, 2.0)
            .unwrap()
            .unwrap();
        // ~06:24 IST
        let expected = epoch("2024-03-20T00:54:00Z");
        assert!((rise - expected).as_seconds().abs() < 300.0, "rise = {rise}");
    }

    #[test]
    fn backward_search_finds_previous_sunset() {
        let eph = AnalyticEphemeris::new();
        let delhi = GeoLocation::new_delhi();
        let start = epoch("2024-03-20T06:00:00Z");
        let set = search_rise_set(&eph, Body::Sun, &delhi, RiseSetKind::Set, start, -2.0)
            .unwrap()
            .unwrap();
        assert!(set < start);
        assert!((start - set).as_days() < 1.0);
    }

    #[test]
    fn midnight_sun_has_no_sunset() {
        let eph = AnalyticEphemeris::new();
        let arctic = GeoLocation::new(80.0, 15.0, 0.0);
        let start = epoch("2024-06-21T00:00:00Z");
        let set = search_rise_set(&eph, Body::Sun, &arctic, RiseSetKind::Set, start, 2.0).unwrap();
        assert!(set.is_none());
    }

    #[test]
    fn zero_limit_is_empty() {
        let eph = AnalyticEphemeris::new();
        let r = search_rise_set(
            &eph,
            Body::Sun,
            &GeoLocation::new_delhi(),
            RiseSetKind::Rise,
            Epoch::J2000,
            0.0,
        )
        .unwrap();
        assert!(r.is_none());
    }
}
