//! Circular angle arithmetic.

/// Values this close to a unit boundary are treated as lying on it.
const BOUNDARY_SNAP: f64 = 1e-9;

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    // -1e-17 % 360 + 360 rounds to exactly 360
    if r >= 360.0 { 0.0 } else { r }
}

/// `a - b` normalized to (-180, 180].
///
/// Positive when `a` is ahead of `b` along the direction of increasing
/// longitude. `angle_diff(359.0, 1.0) == -2.0`; use [`signed_arc`] for the
/// arc travelled from one longitude to the next.
pub fn angle_diff(a: f64, b: f64) -> f64 {
    let d = (a - b) % 360.0;
    if d > 180.0 {
        d - 360.0
    } else if d <= -180.0 {
        d + 360.0
    } else {
        d
    }
}

/// Shortest signed arc travelled going from `from` to `to`, in (-180, 180].
///
/// `signed_arc(359.0, 1.0) == 2.0` and `signed_arc(1.0, 359.0) == -2.0`.
pub fn signed_arc(from: f64, to: f64) -> f64 {
    angle_diff(to, from)
}

/// 0-based index of the `span`-wide unit containing `angle`.
///
/// An angle that sits on a boundary (within floating-point noise) belongs
/// to the unit that starts there. The index is reduced modulo the number
/// of units in a full circle, so `span` must divide 360.
pub fn unit_index(angle: f64, span: f64) -> u32 {
    let lon = normalize_360(angle);
    let q = lon / span;
    let nearest = q.round();
    let idx = if (q - nearest).abs() < BOUNDARY_SNAP {
        nearest
    } else {
        q.floor()
    };
    let count = (360.0 / span).round().max(1.0) as u32;
    (idx as u32) % count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_wraps() {
        assert_eq!(normalize_360(360.0), 0.0);
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-12);
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
        assert_eq!(normalize_360(-1e-17), 0.0);
    }

    #[test]
    fn diff_is_a_minus_b() {
        assert!((angle_diff(10.0, 4.0) - 6.0).abs() < 1e-12);
        assert!((angle_diff(1.0, 359.0) - 2.0).abs() < 1e-12);
        assert!((angle_diff(359.0, 1.0) + 2.0).abs() < 1e-12);
    }

    #[test]
    fn diff_half_turn_is_positive() {
        assert_eq!(angle_diff(180.0, 0.0), 180.0);
        assert_eq!(angle_diff(0.0, 180.0), 180.0);
    }

    #[test]
    fn arc_across_zero() {
        assert!((signed_arc(359.0, 1.0) - 2.0).abs() < 1e-12);
        assert!((signed_arc(1.0, 359.0) + 2.0).abs() < 1e-12);
    }

    #[test]
    fn index_floor() {
        assert_eq!(unit_index(130.0, 12.0), 10);
        assert_eq!(unit_index(95.0, 30.0), 3);
        assert_eq!(unit_index(200.0, 360.0 / 27.0), 15);
    }

    #[test]
    fn index_on_boundary_starts_unit() {
        assert_eq!(unit_index(12.0, 12.0), 1);
        assert_eq!(unit_index(0.0, 12.0), 0);
        let span = 360.0 / 27.0;
        assert_eq!(unit_index(15.0 * span, span), 15);
    }

    #[test]
    fn index_just_below_full_circle() {
        assert_eq!(unit_index(359.999, 12.0), 29);
        assert_eq!(unit_index(360.0 - 1e-12, 12.0), 0);
    }
}
