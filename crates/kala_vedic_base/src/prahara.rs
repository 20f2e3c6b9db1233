//! Prahara: quarters of daytime and nighttime.
//!
//! Daytime runs sunrise to sunset and nighttime sunset to the next
//! sunrise; each is split into four equal praharas, so their length
//! changes with the season.

use kala_time::Epoch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PraharaHalf {
    Day,
    Night,
}

impl PraharaHalf {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::Night => "Night",
        }
    }
}

/// The prahara containing an instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PraharaInfo {
    pub half: PraharaHalf,
    /// 1-based quarter (1..=4).
    pub quarter: u8,
    pub start: Epoch,
    pub end: Epoch,
    /// Fraction of this prahara elapsed [0, 1).
    pub progress: f64,
}

/// Locate `t` within the quarters of `[bracket_start, bracket_end)`.
///
/// `None` when `t` is outside the bracket or the bracket is empty.
pub fn prahara_from_bracket(
    half: PraharaHalf,
    bracket_start: Epoch,
    bracket_end: Epoch,
    t: Epoch,
) -> Option<PraharaInfo> {
    if bracket_end <= bracket_start || t < bracket_start || t >= bracket_end {
        return None;
    }
    let quarter_len = (bracket_end - bracket_start).scale(0.25);
    let elapsed = t - bracket_start;
    let q = ((elapsed / quarter_len).floor() as u8).min(3);
    let start = bracket_start + quarter_len.scale(f64::from(q));
    let end = if q == 3 {
        bracket_end
    } else {
        bracket_start + quarter_len.scale(f64::from(q + 1))
    };
    let progress = ((t - start) / quarter_len).clamp(0.0, 1.0);
    Some(PraharaInfo {
        half,
        quarter: q + 1,
        start,
        end,
        progress,
    })
}
