//! Nakshatra (lunar mansion), 27-fold scheme.
//!
//! 27 equal sectors of 13 deg 20' from 0 deg sidereal, each split into
//! four padas of 3 deg 20'.

use crate::angle::{normalize_360, unit_index};

/// Span of one nakshatra: 360/27 deg.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Span of one pada: 3 deg 20'.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// Principal (yoga) star of the mansion.
    pub const fn star(self) -> &'static str {
        match self {
            Self::Ashwini => "Sheratan",
            Self::Bharani => "41 Arietis",
            Self::Krittika => "Alcyone",
            Self::Rohini => "Aldebaran",
            Self::Mrigashira => "Meissa",
            Self::Ardra => "Betelgeuse",
            Self::Punarvasu => "Pollux",
            Self::Pushya => "Asellus Australis",
            Self::Ashlesha => "Epsilon Hydrae",
            Self::Magha => "Regulus",
            Self::PurvaPhalguni => "Zosma",
            Self::UttaraPhalguni => "Denebola",
            Self::Hasta => "Algorab",
            Self::Chitra => "Spica",
            Self::Swati => "Arcturus",
            Self::Vishakha => "Zubenelgenubi",
            Self::Anuradha => "Dschubba",
            Self::Jyeshtha => "Antares",
            Self::Mula => "Shaula",
            Self::PurvaAshadha => "Kaus Media",
            Self::UttaraAshadha => "Nunki",
            Self::Shravana => "Altair",
            Self::Dhanishtha => "Rotanev",
            Self::Shatabhisha => "Lambda Aquarii",
            Self::PurvaBhadrapada => "Markab",
            Self::UttaraBhadrapada => "Algenib",
            Self::Revati => "Zeta Piscium",
        }
    }

    /// 0-based index (Ashwini = 0 .. Revati = 26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Nakshatra for a 0-based index, wrapping modulo 27.
    pub const fn from_index(index: u32) -> Self {
        ALL_NAKSHATRAS[(index % 27) as usize]
    }

    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS
    }
}

/// Result of a nakshatra lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    /// 0-based index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Pada within the nakshatra, 1-4.
    pub pada: u8,
    /// Decimal degrees within the nakshatra [0, 13.333...).
    pub degrees_in_nakshatra: f64,
}

/// Nakshatra and pada from sidereal ecliptic longitude.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let idx = unit_index(lon, NAKSHATRA_SPAN);
    let degrees_in_nakshatra = (lon - idx as f64 * NAKSHATRA_SPAN).max(0.0);
    let pada = unit_index(degrees_in_nakshatra, PADA_SPAN).min(3) as u8 + 1;
    NakshatraInfo {
        nakshatra: Nakshatra::from_index(idx),
        nakshatra_index: idx as u8,
        pada,
        degrees_in_nakshatra,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_and_order() {
        assert_eq!(ALL_NAKSHATRAS.len(), 27);
        for (i, n) in ALL_NAKSHATRAS.iter().enumerate() {
            assert_eq!(n.index() as usize, i);
        }
    }

    #[test]
    fn two_hundred_degrees_is_index_15() {
        let info = nakshatra_from_longitude(200.0);
        assert_eq!(info.nakshatra_index, 15);
        assert_eq!(info.nakshatra, Nakshatra::Vishakha);
        assert_eq!(info.pada, 1);
    }

    #[test]
    fn first_and_last() {
        let info = nakshatra_from_longitude(0.0);
        assert_eq!(info.nakshatra, Nakshatra::Ashwini);
        assert_eq!(info.pada, 1);
        let info = nakshatra_from_longitude(359.9);
        assert_eq!(info.nakshatra, Nakshatra::Revati);
        assert_eq!(info.pada, 4);
    }

    #[test]
    fn pada_boundaries() {
        // Rohini starts at 40 deg; pada 2 at 43 deg 20'
        let info = nakshatra_from_longitude(40.0 + PADA_SPAN);
        assert_eq!(info.nakshatra, Nakshatra::Rohini);
        assert_eq!(info.pada, 2);
    }

    #[test]
    fn every_boundary_starts_its_mansion() {
        for i in 0..27u32 {
            let info = nakshatra_from_longitude(i as f64 * NAKSHATRA_SPAN);
            assert_eq!(info.nakshatra_index as u32, i);
        }
    }
}
