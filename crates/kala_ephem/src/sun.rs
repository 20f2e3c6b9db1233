//! Low-precision solar coordinates (Meeus ch. 25).

use crate::coords::{AU_KM, EclipticCoords};

/// Apparent geocentric ecliptic coordinates of the Sun at `t` Julian
/// centuries from J2000.0.
pub fn sun_ecliptic(t: f64) -> EclipticCoords {
    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t;
    let m = (357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t).to_radians();
    let e = 0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t * t;

    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();

    let true_lon = l0 + c;
    let nu = m + c.to_radians();
    let r_au = 1.000_001_018 * (1.0 - e * e) / (1.0 + e * nu.cos());

    // Nutation + aberration
    let omega = (125.04 - 1934.136 * t).to_radians();
    let apparent = true_lon - 0.005_69 - 0.004_78 * omega.sin();

    EclipticCoords {
        lon_deg: apparent.rem_euclid(360.0),
        lat_deg: 0.0,
        distance_km: r_au * AU_KM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_25a() {
        // 1992 Oct 13.0 TD: T = -0.072183436, apparent lambda = 199.90895
        let s = sun_ecliptic(-0.072_183_436);
        assert!((s.lon_deg - 199.908_95).abs() < 1e-3, "lon = {}", s.lon_deg);
        assert!((s.distance_km / AU_KM - 0.997_66).abs() < 1e-4);
    }

    #[test]
    fn moves_about_one_degree_per_day() {
        let day = 1.0 / 36_525.0;
        let a = sun_ecliptic(0.2).lon_deg;
        let b = sun_ecliptic(0.2 + day).lon_deg;
        let rate = (b - a).rem_euclid(360.0);
        assert!((0.95..1.03).contains(&rate), "rate = {rate}");
    }
}
