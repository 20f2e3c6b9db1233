//! 16-point compass rose.

use crate::angle::normalize_360;

pub const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Nearest compass point for an azimuth measured from north through east.
pub fn compass_direction(azimuth_deg: f64) -> &'static str {
    let idx = (normalize_360(azimuth_deg) / 22.5).round() as usize % 16;
    COMPASS_POINTS[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_points() {
        assert_eq!(compass_direction(0.0), "N");
        assert_eq!(compass_direction(90.0), "E");
        assert_eq!(compass_direction(180.0), "S");
        assert_eq!(compass_direction(270.0), "W");
    }

    #[test]
    fn rounds_to_nearest_and_wraps() {
        assert_eq!(compass_direction(11.0), "N");
        assert_eq!(compass_direction(12.0), "NNE");
        assert_eq!(compass_direction(355.0), "N");
        assert_eq!(compass_direction(-45.0), "NW");
    }
}
