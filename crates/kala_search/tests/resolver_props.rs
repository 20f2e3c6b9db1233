//! Properties of the boundary resolver against an exactly linear angle.

use kala_core::{Body, Ephemeris, EphemerisError, GeoLocation, RiseSetKind};
use kala_search::{CalendricalUnit, SearchError, UnitOccurrence, resolve_occurrence};
use kala_time::{Epoch, Span};
use kala_vedic_base::normalize_360;
use proptest::prelude::*;

/// Oracle that only offers the default root search.
struct RootOnly;

impl Ephemeris for RootOnly {
    fn longitude_deg(&self, _body: Body, _at: Epoch) -> Result<f64, EphemerisError> {
        Err(EphemerisError::Unavailable("root-only oracle"))
    }

    fn search_rise_set(
        &self,
        _body: Body,
        _location: &GeoLocation,
        _kind: RiseSetKind,
        _start: Epoch,
        _limit_days: f64,
    ) -> Result<Option<Epoch>, EphemerisError> {
        Ok(None)
    }
}

fn linear(offset: f64, rate: f64) -> impl Fn(Epoch) -> Result<f64, EphemerisError> {
    move |t: Epoch| Ok(normalize_360(offset + rate * (t - Epoch::J2000).as_days()))
}

/// Rate estimate 2 % off the true rate, as for the real Moon.
fn unit(span: f64, rate: f64) -> CalendricalUnit {
    CalendricalUnit::new("test", span, rate * 1.02, 0.7)
}

fn sweep(
    offset: f64,
    rate: f64,
    span: f64,
    samples: usize,
) -> Result<Vec<(Epoch, UnitOccurrence)>, SearchError> {
    let f = linear(offset, rate);
    let u = unit(span, rate);
    let cycle_days = 360.0 / rate;
    (0..samples)
        .map(|i| {
            let t = Epoch::J2000.add_days(cycle_days * i as f64 / samples as f64);
            resolve_occurrence(&RootOnly, &f, t, &u).map(|occ| (t, occ))
        })
        .collect()
}

const SPANS: [f64; 3] = [12.0, 360.0 / 27.0, 30.0];

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn consecutive_units_share_boundaries(
        offset in 0.0f64..360.0,
        rate in 5.0f64..15.0,
        span_idx in 0usize..3,
    ) {
        let span = SPANS[span_idx];
        let occs = sweep(offset, rate, span, 150).unwrap();
        for w in occs.windows(2) {
            let (_, a) = w[0];
            let (_, b) = w[1];
            if a.index != b.index {
                let count = (360.0 / span).round() as u32;
                prop_assert_eq!(b.index, (a.index + 1) % count);
                prop_assert!((b.start - a.end).as_seconds().abs() < 1.0);
            }
        }
    }

    #[test]
    fn every_instant_sits_inside_its_occurrence(
        offset in 0.0f64..360.0,
        rate in 5.0f64..15.0,
        span_idx in 0usize..3,
    ) {
        let span = SPANS[span_idx];
        for (t, occ) in sweep(offset, rate, span, 60).unwrap() {
            prop_assert!(!occ.approximate);
            prop_assert!(occ.start <= t && t < occ.end);
            prop_assert!((0.0..=1.0).contains(&occ.progress));
            prop_assert_eq!(occ.index, (occ.angle_deg / span).floor() as u32);
            let len_days = (occ.end - occ.start).as_days();
            prop_assert!((len_days - span / rate).abs() < 1e-4);
        }
    }

    #[test]
    fn progress_runs_from_zero_to_one(
        offset in 0.0f64..360.0,
        rate in 5.0f64..15.0,
        span_idx in 0usize..3,
    ) {
        let span = SPANS[span_idx];
        let f = linear(offset, rate);
        let u = unit(span, rate);
        let occ = resolve_occurrence(&RootOnly, &f, Epoch::J2000, &u).unwrap();
        let half_second = Span::from_seconds(0.5);

        let closing = resolve_occurrence(&RootOnly, &f, occ.end - half_second, &u).unwrap();
        prop_assert_eq!(closing.index, occ.index);
        prop_assert!(closing.progress > 0.9999, "progress = {}", closing.progress);

        let count = (360.0 / span).round() as u32;
        let opening = resolve_occurrence(&RootOnly, &f, occ.end + half_second, &u).unwrap();
        prop_assert_eq!(opening.index, (occ.index + 1) % count);
        prop_assert!(opening.progress < 1e-4, "progress = {}", opening.progress);
    }

    #[test]
    fn progress_never_decreases_within_an_occurrence(
        offset in 0.0f64..360.0,
        rate in 5.0f64..15.0,
    ) {
        let occs = sweep(offset, rate, 12.0, 150).unwrap();
        for w in occs.windows(2) {
            let (_, a) = w[0];
            let (_, b) = w[1];
            if a.index == b.index {
                prop_assert!(b.progress >= a.progress);
            }
        }
    }

    #[test]
    fn exact_boundary_belongs_to_the_starting_unit(k in 0u32..30, rate in 5.0f64..15.0) {
        let boundary = Epoch::J2000.add_days(3.0);
        let f = move |t: Epoch| -> Result<f64, EphemerisError> {
            Ok(normalize_360(k as f64 * 12.0 + rate * (t - boundary).as_days()))
        };
        let occ = resolve_occurrence(&RootOnly, &f, boundary, &unit(12.0, rate)).unwrap();
        prop_assert_eq!(occ.index, k);
        prop_assert!((occ.start - boundary).as_seconds().abs() < 1.0);
        prop_assert!(occ.progress < 1e-4);
    }

    #[test]
    fn repeated_calls_agree(offset in 0.0f64..360.0, day in 0.0f64..30.0) {
        let f = linear(offset, 12.2);
        let u = unit(12.0, 12.2);
        let t = Epoch::J2000.add_days(day);
        let a = resolve_occurrence(&RootOnly, &f, t, &u).unwrap();
        let b = resolve_occurrence(&RootOnly, &f, t, &u).unwrap();
        prop_assert_eq!(a, b);
    }
}

// ---------------------------------------------------------------------------
// Degraded search
// ---------------------------------------------------------------------------

#[test]
fn wrong_rate_falls_back_to_seed() {
    // Estimate is 5x too fast, so seeds land far inside the unit and the
    // true boundaries lie outside a narrow window.
    let f = linear(0.0, 12.0);
    let u = CalendricalUnit::new("skewed", 12.0, 60.0, 0.01);
    let t = Epoch::J2000.add_days(5.5);
    let occ = resolve_occurrence(&RootOnly, &f, t, &u).unwrap();
    assert!(occ.approximate);
    assert_eq!(occ.index, 5);
    assert!(occ.start <= t && t <= occ.end);
    // seed = t -/+ 6 deg / 60 deg/day
    assert!((occ.start - t.add_days(-0.1)).as_seconds().abs() < 0.01);
    assert!((occ.end - t.add_days(0.1)).as_seconds().abs() < 0.01);
}

#[test]
fn wraparound_unit_resolves_across_zero() {
    // Angle 354 -> 6 across J2000; last rashi of a 30 deg unit ends at 0
    let f = linear(354.0, 12.0);
    let occ = resolve_occurrence(&RootOnly, &f, Epoch::J2000, &unit(30.0, 12.0)).unwrap();
    assert_eq!(occ.index, 11);
    assert!((occ.end - Epoch::J2000.add_days(0.5)).as_seconds().abs() < 1.0);
    assert!((occ.start - Epoch::J2000.add_days(-2.0)).as_seconds().abs() < 1.0);
}

#[test]
fn invalid_unit_is_rejected() {
    let f = linear(0.0, 12.0);
    let bad = CalendricalUnit::new("bad", 12.0, 0.0, 0.7);
    assert!(matches!(
        resolve_occurrence(&RootOnly, &f, Epoch::J2000, &bad),
        Err(SearchError::InvalidInput(_))
    ));
}

#[test]
fn span_with_partial_sector_is_rejected() {
    let f = linear(358.0, 12.0);
    let odd = CalendricalUnit::new("odd", 7.0, 12.0, 0.7);
    assert!(matches!(
        resolve_occurrence(&RootOnly, &f, Epoch::J2000, &odd),
        Err(SearchError::InvalidInput(_))
    ));
}
