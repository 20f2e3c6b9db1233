//! Solar month (masa) named by the Sun's sidereal rashi.

use crate::rashi::Rashi;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Masa {
    Vaishakha,
    Jyeshtha,
    Ashadha,
    Shravana,
    Bhadrapada,
    Ashvina,
    Kartika,
    Margashirsha,
    Pausha,
    Magha,
    Phalguna,
    Chaitra,
}

/// Masas in rashi order: the Sun in Mesha gives Vaishakha.
pub const ALL_MASAS: [Masa; 12] = [
    Masa::Vaishakha,
    Masa::Jyeshtha,
    Masa::Ashadha,
    Masa::Shravana,
    Masa::Bhadrapada,
    Masa::Ashvina,
    Masa::Kartika,
    Masa::Margashirsha,
    Masa::Pausha,
    Masa::Magha,
    Masa::Phalguna,
    Masa::Chaitra,
];

impl Masa {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vaishakha => "Vaishakha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Ashadha => "Ashadha",
            Self::Shravana => "Shravana",
            Self::Bhadrapada => "Bhadrapada",
            Self::Ashvina => "Ashvina",
            Self::Kartika => "Kartika",
            Self::Margashirsha => "Margashirsha",
            Self::Pausha => "Pausha",
            Self::Magha => "Magha",
            Self::Phalguna => "Phalguna",
            Self::Chaitra => "Chaitra",
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }
}

pub fn masa_from_sun_rashi(rashi: Rashi) -> Masa {
    ALL_MASAS[rashi.index() as usize]
}
