//! Sidereal positions of the Sun, Moon, and planets, and the rashi chart.

use kala_core::{ALL_BODIES, Body, Ephemeris, EphemerisError};
use kala_time::Epoch;
use kala_vedic_base::{
    ALL_RASHIS, AyanamshaSystem, Nakshatra, Rashi, angle_diff, nakshatra_from_longitude,
    rashi_from_longitude, sidereal_longitude,
};
use tracing::debug;

use crate::error::SearchError;

/// Look-back used to decide the direction of motion, days.
const MOTION_LOOKBACK_DAYS: f64 = 1.0 / 24.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetPosition {
    pub body: Body,
    /// Tropical ecliptic longitude, [0, 360).
    pub tropical_deg: f64,
    /// Sidereal ecliptic longitude, [0, 360).
    pub sidereal_deg: f64,
    pub rashi: Rashi,
    /// Degrees within the rashi, [0, 30).
    pub degrees_in_rashi: f64,
    pub nakshatra: Nakshatra,
    /// Longitude decreased over the last hour.
    pub retrograde: bool,
}

/// Positions of every body the oracle can evaluate.
///
/// Bodies the oracle reports as unavailable are skipped; any other
/// oracle error is returned.
pub fn planetary_positions<E: Ephemeris + ?Sized>(
    oracle: &E,
    at: Epoch,
    system: AyanamshaSystem,
) -> Result<Vec<PlanetPosition>, SearchError> {
    if !at.is_finite() {
        return Err(SearchError::InvalidInput("query time must be finite"));
    }
    let before = at.add_days(-MOTION_LOOKBACK_DAYS);
    let mut out = Vec::with_capacity(ALL_BODIES.len());
    for body in ALL_BODIES {
        let pair = oracle
            .longitude_deg(body, at)
            .and_then(|now| Ok((now, oracle.longitude_deg(body, before)?)));
        let (now, prev) = match pair {
            Ok(p) => p,
            Err(EphemerisError::Unavailable(reason)) => {
                debug!(body = body.name(), reason, "body skipped");
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        let sidereal_deg = sidereal_longitude(now, system, at);
        let rashi = rashi_from_longitude(sidereal_deg);
        out.push(PlanetPosition {
            body,
            tropical_deg: now,
            sidereal_deg,
            rashi: rashi.rashi,
            degrees_in_rashi: rashi.degrees_in_rashi,
            nakshatra: nakshatra_from_longitude(sidereal_deg).nakshatra,
            retrograde: angle_diff(now, prev) < 0.0,
        });
    }
    Ok(out)
}

/// Twelve sign cells, Mesha first, each listing the bodies in it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RashiChart {
    cells: [Vec<PlanetPosition>; 12],
}

impl RashiChart {
    pub fn cell(&self, rashi: Rashi) -> &[PlanetPosition] {
        &self.cells[rashi.index() as usize]
    }

    /// `(rashi, occupants)` in sign order.
    pub fn iter(&self) -> impl Iterator<Item = (Rashi, &[PlanetPosition])> {
        ALL_RASHIS
            .iter()
            .zip(self.cells.iter())
            .map(|(r, c)| (*r, c.as_slice()))
    }
}

/// Group positions into their rashi cells, keeping input order within
/// each cell.
pub fn rashi_chart(positions: &[PlanetPosition]) -> RashiChart {
    let mut chart = RashiChart::default();
    for p in positions {
        chart.cells[p.rashi.index() as usize].push(*p);
    }
    chart
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(body: Body, sidereal_deg: f64) -> PlanetPosition {
        let rashi = rashi_from_longitude(sidereal_deg);
        PlanetPosition {
            body,
            tropical_deg: sidereal_deg,
            sidereal_deg,
            rashi: rashi.rashi,
            degrees_in_rashi: rashi.degrees_in_rashi,
            nakshatra: nakshatra_from_longitude(sidereal_deg).nakshatra,
            retrograde: false,
        }
    }

    #[test]
    fn empty_chart() {
        let chart = rashi_chart(&[]);
        assert_eq!(chart.iter().count(), 12);
        assert!(chart.iter().all(|(_, c)| c.is_empty()));
    }

    #[test]
    fn shared_sign_keeps_order() {
        let chart = rashi_chart(&[
            at(Body::Venus, 45.0),
            at(Body::Mars, 5.0),
            at(Body::Mercury, 40.0),
        ]);
        let vrishabha: Vec<Body> = chart.cell(Rashi::Vrishabha).iter().map(|p| p.body).collect();
        assert_eq!(vrishabha, vec![Body::Venus, Body::Mercury]);
        assert_eq!(chart.cell(Rashi::Mesha)[0].body, Body::Mars);
    }
}
