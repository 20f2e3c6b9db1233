//! Bracketed zero-crossing search.
//!
//! Functions searched here are angular differences or altitudes in
//! degrees. A normalized angular difference jumps from about +180 to
//! about -180 when the underlying angle wraps; that jump changes sign
//! but is not a root, so [`is_genuine_crossing`] filters it out.

use kala_time::Epoch;
use tracing::trace;

use crate::AngleFn;
use crate::error::EphemerisError;

/// Number of equal sub-intervals scanned for the first sign change.
const SCAN_STEPS: usize = 16;

/// Maximum bisection iterations.
const MAX_ITERATIONS: usize = 60;

/// Bisection stops once the bracket is narrower than this (~0.86 ms).
pub const CONVERGENCE_DAYS: f64 = 1e-8;

/// Whether a sign change between two samples is a real root rather than
/// a ±180 deg wrap-around discontinuity.
pub fn is_genuine_crossing(f_a: f64, f_b: f64) -> bool {
    f_a * f_b < 0.0 && (f_a - f_b).abs() < 270.0
}

fn eval(f: &AngleFn<'_>, t: Epoch) -> Result<f64, EphemerisError> {
    let v = f(t)?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(EphemerisError::NonFinite("search function value"))
    }
}

/// First instant in `[t0, t1]` where `f` crosses zero.
///
/// The window is scanned in equal sub-steps; the earliest genuine sign
/// change is then bisected to [`CONVERGENCE_DAYS`]. An exact zero at a
/// sample point is returned as-is. `Ok(None)` when the window holds no
/// crossing.
pub fn find_root(
    f: &AngleFn<'_>,
    t0: Epoch,
    t1: Epoch,
) -> Result<Option<Epoch>, EphemerisError> {
    if !t0.is_finite() || !t1.is_finite() {
        return Err(EphemerisError::NonFinite("search window"));
    }
    let (lo, hi) = if t0 <= t1 { (t0, t1) } else { (t1, t0) };
    let width_days = (hi - lo).as_days();
    let step = width_days / SCAN_STEPS as f64;

    let mut t_a = lo;
    let mut f_a = eval(f, t_a)?;
    if f_a == 0.0 {
        return Ok(Some(t_a));
    }

    for i in 1..=SCAN_STEPS {
        let t_b = if i == SCAN_STEPS {
            hi
        } else {
            lo.add_days(step * i as f64)
        };
        let f_b = eval(f, t_b)?;
        if f_b == 0.0 {
            return Ok(Some(t_b));
        }
        if is_genuine_crossing(f_a, f_b) {
            return bisect(f, t_a, f_a, t_b).map(Some);
        }
        t_a = t_b;
        f_a = f_b;
    }

    Ok(None)
}

/// Refine a bracket `[t_a, t_b]` with `f(t_a)` and `f(t_b)` of opposite sign.
fn bisect(
    f: &AngleFn<'_>,
    mut t_a: Epoch,
    mut f_a: f64,
    mut t_b: Epoch,
) -> Result<Epoch, EphemerisError> {
    let mut iterations = 0;
    while iterations < MAX_ITERATIONS && (t_b - t_a).as_days() > CONVERGENCE_DAYS {
        let t_mid = t_a.midpoint(t_b);
        let f_mid = eval(f, t_mid)?;
        if f_mid == 0.0 {
            return Ok(t_mid);
        }
        if f_a * f_mid < 0.0 {
            t_b = t_mid;
        } else {
            t_a = t_mid;
            f_a = f_mid;
        }
        iterations += 1;
    }
    trace!(iterations, "bisection converged");
    Ok(t_a.midpoint(t_b))
}
