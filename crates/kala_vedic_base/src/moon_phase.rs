//! Named lunar phases from the Moon-Sun elongation (phase angle).

use crate::angle::normalize_360;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoonPhaseName {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhaseName {
    pub const fn name(self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::FullMoon => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }

    pub const fn emoji(self) -> &'static str {
        match self {
            Self::NewMoon => "🌑",
            Self::WaxingCrescent => "🌒",
            Self::FirstQuarter => "🌓",
            Self::WaxingGibbous => "🌔",
            Self::FullMoon => "🌕",
            Self::WaningGibbous => "🌖",
            Self::LastQuarter => "🌗",
            Self::WaningCrescent => "🌘",
        }
    }
}

/// Phase name for a phase angle in degrees.
///
/// The principal phases own a 20 deg band centred on 0, 90, 180, 270.
pub fn moon_phase_name(phase_deg: f64) -> MoonPhaseName {
    let p = normalize_360(phase_deg);
    if !(10.0..=350.0).contains(&p) {
        MoonPhaseName::NewMoon
    } else if p < 80.0 {
        MoonPhaseName::WaxingCrescent
    } else if p < 100.0 {
        MoonPhaseName::FirstQuarter
    } else if p < 170.0 {
        MoonPhaseName::WaxingGibbous
    } else if p < 190.0 {
        MoonPhaseName::FullMoon
    } else if p < 260.0 {
        MoonPhaseName::WaningGibbous
    } else if p < 280.0 {
        MoonPhaseName::LastQuarter
    } else {
        MoonPhaseName::WaningCrescent
    }
}
