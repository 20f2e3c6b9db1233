//! Planetary positions from Keplerian mean elements.
//!
//! Heliocentric positions of the planet and the Earth-Moon barycentre are
//! differenced to get a geocentric vector, then rotated from the J2000
//! ecliptic to the ecliptic of date with the general precession rate.

use kala_core::{Body, EphemerisError};

use crate::coords::{AU_KM, EclipticCoords};

/// General precession in longitude, degrees per Julian century.
const PRECESSION_DEG_PER_CENTURY: f64 = 1.396_971_3;

const KEPLER_MAX_ITER: usize = 30;
const KEPLER_TOL: f64 = 1e-12;

/// Mean elements at J2000 and rates per Julian century.
///
/// `a` (AU), `e`, `i` (deg), mean longitude `l` (deg), longitude of
/// perihelion `peri` (deg), ascending node `node` (deg).
#[derive(Debug, Clone, Copy)]
struct Elements {
    a: (f64, f64),
    e: (f64, f64),
    i: (f64, f64),
    l: (f64, f64),
    peri: (f64, f64),
    node: (f64, f64),
}

const MERCURY: Elements = Elements {
    a: (0.387_099_27, 0.000_000_37),
    e: (0.205_635_93, 0.000_019_06),
    i: (7.004_979_02, -0.005_947_49),
    l: (252.250_323_50, 149_472.674_111_75),
    peri: (77.457_796_28, 0.160_476_89),
    node: (48.330_765_93, -0.125_340_81),
};

const VENUS: Elements = Elements {
    a: (0.723_335_66, 0.000_003_90),
    e: (0.006_776_72, -0.000_041_07),
    i: (3.394_676_05, -0.000_788_90),
    l: (181.979_099_50, 58_517.815_387_29),
    peri: (131.602_467_18, 0.002_683_29),
    node: (76.679_842_55, -0.277_694_18),
};

const EARTH_MOON_BARY: Elements = Elements {
    a: (1.000_002_61, 0.000_005_62),
    e: (0.016_711_23, -0.000_043_92),
    i: (-0.000_015_31, -0.012_946_68),
    l: (100.464_571_66, 35_999.372_449_81),
    peri: (102.937_681_93, 0.323_273_64),
    node: (0.0, 0.0),
};

const MARS: Elements = Elements {
    a: (1.523_710_34, 0.000_018_47),
    e: (0.093_394_10, 0.000_078_82),
    i: (1.849_691_42, -0.008_131_31),
    l: (-4.553_432_05, 19_140.302_684_99),
    peri: (-23.943_629_59, 0.444_410_88),
    node: (49.559_538_91, -0.292_573_43),
};

const JUPITER: Elements = Elements {
    a: (5.202_887_00, -0.000_116_07),
    e: (0.048_386_24, -0.000_132_53),
    i: (1.304_396_95, -0.001_837_14),
    l: (34.396_440_51, 3_034.746_127_75),
    peri: (14.728_479_83, 0.212_526_68),
    node: (100.473_909_09, 0.204_691_06),
};

const SATURN: Elements = Elements {
    a: (9.536_675_94, -0.001_250_60),
    e: (0.053_861_79, -0.000_509_91),
    i: (2.485_991_87, 0.001_936_09),
    l: (49.954_244_23, 1_222.493_622_01),
    peri: (92.598_878_31, -0.418_972_16),
    node: (113.662_424_48, -0.288_677_94),
};

const URANUS: Elements = Elements {
    a: (19.189_164_64, -0.001_961_76),
    e: (0.047_257_44, -0.000_043_97),
    i: (0.772_637_83, -0.002_429_39),
    l: (313.238_104_51, 428.482_027_85),
    peri: (170.954_276_30, 0.408_052_81),
    node: (74.016_925_03, 0.042_405_89),
};

const NEPTUNE: Elements = Elements {
    a: (30.069_922_76, 0.000_262_91),
    e: (0.008_590_48, 0.000_051_05),
    i: (1.770_043_47, 0.000_353_72),
    l: (-55.120_029_69, 218.459_453_25),
    peri: (44.964_762_27, -0.322_414_64),
    node: (131.784_225_74, -0.005_086_64),
};

fn elements_for(body: Body) -> Option<Elements> {
    match body {
        Body::Mercury => Some(MERCURY),
        Body::Venus => Some(VENUS),
        Body::Mars => Some(MARS),
        Body::Jupiter => Some(JUPITER),
        Body::Saturn => Some(SATURN),
        Body::Uranus => Some(URANUS),
        Body::Neptune => Some(NEPTUNE),
        Body::Sun | Body::Moon => None,
    }
}

/// Solve Kepler's equation `E - e sin E = M` (radians) by Newton iteration.
fn solve_kepler(m: f64, e: f64) -> f64 {
    let mut ea = m + e * m.sin();
    for _ in 0..KEPLER_MAX_ITER {
        let delta = (ea - e * ea.sin() - m) / (1.0 - e * ea.cos());
        ea -= delta;
        if delta.abs() < KEPLER_TOL {
            break;
        }
    }
    ea
}

/// Heliocentric J2000-ecliptic position in AU.
fn heliocentric(el: &Elements, t: f64) -> [f64; 3] {
    let at = |(v0, rate): (f64, f64)| v0 + rate * t;
    let a = at(el.a);
    let e = at(el.e);
    let inc = at(el.i).to_radians();
    let l = at(el.l);
    let peri = at(el.peri);
    let node = at(el.node);

    let omega = (peri - node).to_radians();
    let m = ((l - peri + 180.0).rem_euclid(360.0) - 180.0).to_radians();
    let node = node.to_radians();

    let ea = solve_kepler(m, e);
    let xp = a * (ea.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ea.sin();

    let (sw, cw) = omega.sin_cos();
    let (so, co) = node.sin_cos();
    let (si, ci) = inc.sin_cos();
    [
        (cw * co - sw * so * ci) * xp + (-sw * co - cw * so * ci) * yp,
        (cw * so + sw * co * ci) * xp + (-sw * so + cw * co * ci) * yp,
        (sw * si) * xp + (cw * si) * yp,
    ]
}

/// Geocentric ecliptic coordinates of date for a planet.
///
/// Returns [`EphemerisError::Unavailable`] for the Sun and Moon.
pub fn planet_ecliptic(body: Body, t: f64) -> Result<EclipticCoords, EphemerisError> {
    let el = elements_for(body).ok_or(EphemerisError::Unavailable(
        "Keplerian model covers planets only",
    ))?;
    let p = heliocentric(&el, t);
    let earth = heliocentric(&EARTH_MOON_BARY, t);
    let (x, y, z) = (p[0] - earth[0], p[1] - earth[1], p[2] - earth[2]);

    let lon = y.atan2(x).to_degrees() + PRECESSION_DEG_PER_CENTURY * t;
    let lat = z.atan2(x.hypot(y)).to_degrees();
    let dist = (x * x + y * y + z * z).sqrt();
    Ok(EclipticCoords {
        lon_deg: lon.rem_euclid(360.0),
        lat_deg: lat,
        distance_km: dist * AU_KM,
    })
}
