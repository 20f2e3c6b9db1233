//! Lunar position from the principal periodic terms (Meeus ch. 47).
//!
//! The largest 34 longitude, 13 latitude, and 13 distance terms are kept,
//! which holds longitude to about 0.01 deg over several centuries.

use crate::coords::EclipticCoords;

/// One periodic term: multiples of D, M, M', F and the coefficient.
type Term = (i8, i8, i8, i8, f64);

/// Longitude terms, coefficient in 1e-6 deg.
const LONGITUDE_TERMS: [Term; 34] = [
    (0, 0, 1, 0, 6_288_774.0),
    (2, 0, -1, 0, 1_274_027.0),
    (2, 0, 0, 0, 658_314.0),
    (0, 0, 2, 0, 213_618.0),
    (0, 1, 0, 0, -185_116.0),
    (0, 0, 0, 2, -114_332.0),
    (2, 0, -2, 0, 58_793.0),
    (2, -1, -1, 0, 57_066.0),
    (2, 0, 1, 0, 53_322.0),
    (2, -1, 0, 0, 45_758.0),
    (0, 1, -1, 0, -40_923.0),
    (1, 0, 0, 0, -34_720.0),
    (0, 1, 1, 0, -30_383.0),
    (2, 0, 0, -2, 15_327.0),
    (0, 0, 1, 2, -12_528.0),
    (0, 0, 1, -2, 10_980.0),
    (4, 0, -1, 0, 10_675.0),
    (0, 0, 3, 0, 10_034.0),
    (4, 0, -2, 0, 8_548.0),
    (2, 1, -1, 0, -7_888.0),
    (2, 1, 0, 0, -6_766.0),
    (1, 0, -1, 0, -5_163.0),
    (1, 1, 0, 0, 4_987.0),
    (2, -1, 1, 0, 4_036.0),
    (2, 0, 2, 0, 3_994.0),
    (4, 0, 0, 0, 3_861.0),
    (2, 0, -3, 0, 3_665.0),
    (0, 1, -2, 0, -2_689.0),
    (2, 0, -1, 2, -2_602.0),
    (2, -1, -2, 0, 2_390.0),
    (1, 0, 1, 0, -2_348.0),
    (2, -2, 0, 0, 2_236.0),
    (0, 1, 2, 0, -2_120.0),
    (0, 2, 0, 0, -2_069.0),
];

/// Latitude terms, coefficient in 1e-6 deg.
const LATITUDE_TERMS: [Term; 13] = [
    (0, 0, 0, 1, 5_128_122.0),
    (0, 0, 1, 1, 280_602.0),
    (0, 0, 1, -1, 277_693.0),
    (2, 0, 0, -1, 173_237.0),
    (2, 0, -1, 1, 55_413.0),
    (2, 0, -1, -1, 46_271.0),
    (2, 0, 0, 1, 32_573.0),
    (0, 0, 2, 1, 17_198.0),
    (2, 0, 1, -1, 9_266.0),
    (0, 0, 2, -1, 8_822.0),
    (2, -1, 0, -1, 8_216.0),
    (2, 0, -2, -1, 4_324.0),
    (2, 0, 1, 1, 4_200.0),
];

/// Distance terms, coefficient in metres (cosine series).
const DISTANCE_TERMS: [Term; 13] = [
    (0, 0, 1, 0, -20_905_355.0),
    (2, 0, -1, 0, -3_699_111.0),
    (2, 0, 0, 0, -2_955_968.0),
    (0, 0, 2, 0, -569_925.0),
    (0, 1, 0, 0, 48_888.0),
    (0, 0, 0, 2, -3_149.0),
    (2, 0, -2, 0, 246_158.0),
    (2, -1, 0, 0, -152_138.0),
    (2, 0, 1, 0, -170_733.0),
    (2, -1, -1, 0, -204_586.0),
    (0, 1, -1, 0, -129_620.0),
    (1, 0, 0, 0, 108_743.0),
    (0, 1, 1, 0, 104_755.0),
];

struct Arguments {
    l_prime: f64,
    d: f64,
    m: f64,
    m_prime: f64,
    f: f64,
    e: f64,
}

impl Arguments {
    fn at(t: f64) -> Self {
        let t2 = t * t;
        Self {
            l_prime: 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2,
            d: 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2,
            m: 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2,
            m_prime: 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2,
            f: 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2,
            e: 1.0 - 0.002_516 * t - 0.000_007_4 * t2,
        }
    }

    fn sum(&self, terms: &[Term], trig: fn(f64) -> f64) -> f64 {
        terms
            .iter()
            .map(|&(d, m, mp, f, coeff)| {
                let arg = d as f64 * self.d
                    + m as f64 * self.m
                    + mp as f64 * self.m_prime
                    + f as f64 * self.f;
                coeff * self.e.powi(m.unsigned_abs() as i32) * trig(arg.to_radians())
            })
            .sum()
    }
}

/// Geometric (mean equinox of date) lunar coordinates.
fn moon_geometric(t: f64) -> EclipticCoords {
    let a = Arguments::at(t);
    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    let a3 = (313.45 + 481_266.484 * t).to_radians();
    let lp = a.l_prime.to_radians();
    let f = a.f.to_radians();
    let mp = a.m_prime.to_radians();

    let sum_l = a.sum(&LONGITUDE_TERMS, f64::sin)
        + 3958.0 * a1.sin()
        + 1962.0 * (lp - f).sin()
        + 318.0 * a2.sin();
    let sum_b = a.sum(&LATITUDE_TERMS, f64::sin) - 2235.0 * lp.sin()
        + 382.0 * a3.sin()
        + 175.0 * (a1 - f).sin()
        + 175.0 * (a1 + f).sin()
        + 127.0 * (lp - mp).sin()
        - 115.0 * (lp + mp).sin();
    let sum_r = a.sum(&DISTANCE_TERMS, f64::cos);

    EclipticCoords {
        lon_deg: (a.l_prime + sum_l / 1e6).rem_euclid(360.0),
        lat_deg: sum_b / 1e6,
        distance_km: 385_000.56 + sum_r / 1000.0,
    }
}

/// Apparent geocentric ecliptic coordinates of the Moon.
pub fn moon_ecliptic(t: f64) -> EclipticCoords {
    let mut c = moon_geometric(t);
    // Nutation in longitude, leading terms
    let omega = (125.044_52 - 1934.136_261 * t).to_radians();
    let l_sun = (280.4665 + 36_000.7698 * t).to_radians();
    let l_moon = (218.3165 + 481_267.8813 * t).to_radians();
    let dpsi_arcsec =
        -17.20 * omega.sin() - 1.32 * (2.0 * l_sun).sin() - 0.23 * (2.0 * l_moon).sin()
            + 0.21 * (2.0 * omega).sin();
    c.lon_deg = (c.lon_deg + dpsi_arcsec / 3600.0).rem_euclid(360.0);
    c
}
