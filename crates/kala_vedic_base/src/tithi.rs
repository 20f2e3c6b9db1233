//! Tithi (lunar day) from Moon-Sun elongation.
//!
//! The synodic month is divided into 30 tithis of 12 deg of elongation.
//! Tithis 1-15 form the bright fortnight (Shukla), ending at Purnima;
//! 16-30 form the dark fortnight (Krishna), ending at Amavasya.

use crate::angle::{normalize_360, unit_index};

/// Elongation covered by one tithi, degrees.
pub const TITHI_SPAN: f64 = 12.0;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paksha {
    /// Waxing half.
    Shukla,
    /// Waning half.
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// Tithi names. Fourteen names repeat in both fortnights; the
/// fifteenth differs (Purnima / Amavasya).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TithiName {
    Pratipada,
    Dwitiya,
    Tritiya,
    Chaturthi,
    Panchami,
    Shashthi,
    Saptami,
    Ashtami,
    Navami,
    Dashami,
    Ekadashi,
    Dwadashi,
    Trayodashi,
    Chaturdashi,
    Purnima,
    Amavasya,
}

/// Name table in order; index 14 is Purnima and 15 Amavasya.
pub const ALL_TITHI_NAMES: [TithiName; 16] = [
    TithiName::Pratipada,
    TithiName::Dwitiya,
    TithiName::Tritiya,
    TithiName::Chaturthi,
    TithiName::Panchami,
    TithiName::Shashthi,
    TithiName::Saptami,
    TithiName::Ashtami,
    TithiName::Navami,
    TithiName::Dashami,
    TithiName::Ekadashi,
    TithiName::Dwadashi,
    TithiName::Trayodashi,
    TithiName::Chaturdashi,
    TithiName::Purnima,
    TithiName::Amavasya,
];

impl TithiName {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pratipada => "Pratipada",
            Self::Dwitiya => "Dwitiya",
            Self::Tritiya => "Tritiya",
            Self::Chaturthi => "Chaturthi",
            Self::Panchami => "Panchami",
            Self::Shashthi => "Shashthi",
            Self::Saptami => "Saptami",
            Self::Ashtami => "Ashtami",
            Self::Navami => "Navami",
            Self::Dashami => "Dashami",
            Self::Ekadashi => "Ekadashi",
            Self::Dwadashi => "Dwadashi",
            Self::Trayodashi => "Trayodashi",
            Self::Chaturdashi => "Chaturdashi",
            Self::Purnima => "Purnima",
            Self::Amavasya => "Amavasya",
        }
    }

    /// Name for a tithi number 1..=30.
    pub const fn for_number(number: u8) -> Self {
        match number {
            30 => Self::Amavasya,
            n => ALL_TITHI_NAMES[((n.saturating_sub(1)) % 15) as usize],
        }
    }
}

/// Tithi classification of an elongation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiPosition {
    /// 1-based tithi number (1..=30).
    pub number: u8,
    /// 0-based index within the month (0..=29).
    pub index: u8,
    pub name: TithiName,
    pub paksha: Paksha,
    /// Degrees elapsed within the tithi [0, 12).
    pub degrees_in_tithi: f64,
    /// Fraction of the fortnight elapsed [0, 1).
    pub paksha_progress: f64,
}

impl TithiPosition {
    /// "Shukla Ekadashi", "Krishna Amavasya", ...
    pub fn label(&self) -> String {
        format!("{} {}", self.paksha.name(), self.name.name())
    }
}

/// Classify a Moon-minus-Sun elongation in degrees.
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiPosition {
    let elong = normalize_360(elongation_deg);
    let index = unit_index(elong, TITHI_SPAN) as u8;
    let number = index + 1;
    let degrees_in_tithi = (elong - index as f64 * TITHI_SPAN).max(0.0);
    let paksha = if number <= 15 {
        Paksha::Shukla
    } else {
        Paksha::Krishna
    };
    let paksha_progress =
        ((index as f64 + degrees_in_tithi / TITHI_SPAN) % 15.0) / 15.0;
    TithiPosition {
        number,
        index,
        name: TithiName::for_number(number),
        paksha,
        degrees_in_tithi,
        paksha_progress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elongation_130_is_shukla_ekadashi() {
        let t = tithi_from_elongation(130.0);
        assert_eq!(t.number, 11);
        assert_eq!(t.index, 10);
        assert_eq!(t.paksha, Paksha::Shukla);
        assert_eq!(t.name, ALL_TITHI_NAMES[10]);
        assert_eq!(t.name, TithiName::Ekadashi);
        assert!((t.degrees_in_tithi - 10.0).abs() < 1e-10);
        assert_eq!(t.label(), "Shukla Ekadashi");
    }

    #[test]
    fn purnima_and_amavasya() {
        let full = tithi_from_elongation(175.0);
        assert_eq!(full.number, 15);
        assert_eq!(full.name, TithiName::Purnima);
        assert_eq!(full.paksha, Paksha::Shukla);

        let new = tithi_from_elongation(355.0);
        assert_eq!(new.number, 30);
        assert_eq!(new.name, TithiName::Amavasya);
        assert_eq!(new.paksha, Paksha::Krishna);
    }

    #[test]
    fn krishna_names_repeat() {
        let t = tithi_from_elongation(185.0);
        assert_eq!(t.number, 16);
        assert_eq!(t.name, TithiName::Pratipada);
        assert_eq!(t.paksha, Paksha::Krishna);
    }

    #[test]
    fn boundary_hit_starts_next_tithi() {
        let t = tithi_from_elongation(12.0);
        assert_eq!(t.number, 2);
        assert!(t.degrees_in_tithi.abs() < 1e-10);
    }

    #[test]
    fn wraps_to_first_tithi() {
        let t = tithi_from_elongation(361.0);
        assert_eq!(t.number, 1);
        let t = tithi_from_elongation(-1.0);
        assert_eq!(t.number, 30);
    }

    #[test]
    fn paksha_progress_halfway() {
        let t = tithi_from_elongation(90.0);
        assert!((t.paksha_progress - 0.5).abs() < 1e-10);
        let t = tithi_from_elongation(270.0);
        assert!((t.paksha_progress - 0.5).abs() < 1e-10);
    }
}
