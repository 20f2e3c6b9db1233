//! Ecliptic → equatorial → horizontal conversion.

use kala_core::GeoLocation;
use kala_time::{Epoch, gmst_rad, local_sidereal_time_rad};

/// Astronomical unit in km (IAU 2012).
pub const AU_KM: f64 = 149_597_870.7;

/// Geocentric ecliptic position of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticCoords {
    /// Longitude in degrees [0, 360).
    pub lon_deg: f64,
    /// Latitude in degrees.
    pub lat_deg: f64,
    /// Distance from Earth's centre in km.
    pub distance_km: f64,
}

/// Topocentric-horizon direction (no refraction applied).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalCoords {
    /// Altitude above the horizon in degrees.
    pub altitude_deg: f64,
    /// Azimuth in degrees, measured from north through east [0, 360).
    pub azimuth_deg: f64,
}

/// Mean obliquity of the ecliptic, Meeus eq. 22.2 (truncated).
pub fn mean_obliquity_deg(t: f64) -> f64 {
    23.439_291 - 0.013_004_2 * t - 1.64e-7 * t * t + 5.04e-7 * t * t * t
}

/// Right ascension and declination (radians) from ecliptic coordinates.
pub fn ecliptic_to_equatorial(lon_deg: f64, lat_deg: f64, t: f64) -> (f64, f64) {
    let eps = mean_obliquity_deg(t).to_radians();
    let (lam, beta) = (lon_deg.to_radians(), lat_deg.to_radians());
    let ra = (lam.sin() * eps.cos() - beta.tan() * eps.sin()).atan2(lam.cos());
    let dec = (beta.sin() * eps.cos() + beta.cos() * eps.sin() * lam.sin()).asin();
    (ra.rem_euclid(std::f64::consts::TAU), dec)
}

/// Altitude/azimuth for an observer at `at`.
pub fn horizontal(ecl: &EclipticCoords, location: &GeoLocation, at: Epoch) -> HorizontalCoords {
    let (ra, dec) = ecliptic_to_equatorial(ecl.lon_deg, ecl.lat_deg, at.julian_centuries());
    let lst = local_sidereal_time_rad(gmst_rad(at.as_jd()), location.longitude_rad());
    let h = lst - ra;
    let phi = location.latitude_rad();

    let sin_alt = phi.sin() * dec.sin() + phi.cos() * dec.cos() * h.cos();
    let altitude_deg = sin_alt.clamp(-1.0, 1.0).asin().to_degrees();
    let az = (-dec.cos() * h.sin()).atan2(dec.sin() * phi.cos() - dec.cos() * phi.sin() * h.cos());
    HorizontalCoords {
        altitude_deg,
        azimuth_deg: az.to_degrees().rem_euclid(360.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn obliquity_at_j2000() {
        assert!((mean_obliquity_deg(0.0) - 23.439_291).abs() < 1e-9);
    }

    #[test]
    fn equinox_point_maps_to_origin() {
        let (ra, dec) = ecliptic_to_equatorial(0.0, 0.0, 0.0);
        assert!(ra.abs() < 1e-12 || (ra - std::f64::consts::TAU).abs() < 1e-12);
        assert!(dec.abs() < 1e-12);
    }

    #[test]
    fn solstice_point_has_max_declination() {
        let (ra, dec) = ecliptic_to_equatorial(90.0, 0.0, 0.0);
        assert!((ra.to_degrees() - 90.0).abs() < 1e-9);
        assert!((dec.to_degrees() - 23.439_291).abs() < 1e-6);
    }

    #[test]
    fn meeus_example_13a_declination() {
        // Pollux: lambda 113.215630, beta 6.684170 -> dec +28.026183 (eps 23.4392911)
        let (_ra, dec) = ecliptic_to_equatorial(113.215_630, 6.684_170, 0.0);
        assert!((dec.to_degrees() - 28.026_183).abs() < 1e-3);
    }
}
