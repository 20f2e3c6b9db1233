//! Commands that evaluate the analytic ephemeris for an observer.

use anyhow::{Context, Result};
use tracing::info;

use kala_core::Body;
use kala_ephem::AnalyticEphemeris;
use kala_search::{body_cycle, moon_phase_cycle, panchang_for_date, planetary_positions, rashi_chart};

use crate::convert::Sky;
use crate::report::{ChartReport, CyclesReport, PanchangReport, PlanetsReport};

pub fn panchang(eph: &AnalyticEphemeris, sky: &Sky) -> Result<String> {
    info!(at = %sky.at, ayanamsha = sky.panchang.ayanamsha.name(), "computing panchang");
    let info = panchang_for_date(eph, sky.at, &sky.location, &sky.panchang)
        .context("panchang search failed")?;
    Ok(PanchangReport {
        info: &info,
        location: &sky.location,
    }
    .to_string())
}

pub fn cycles(eph: &AnalyticEphemeris, sky: &Sky) -> Result<String> {
    info!(at = %sky.at, "computing rise/set cycles");
    let sun = body_cycle(eph, Body::Sun, &sky.location, sky.at).context("sun cycle failed")?;
    let moon = body_cycle(eph, Body::Moon, &sky.location, sky.at).context("moon cycle failed")?;
    let phase = moon_phase_cycle(eph, sky.at).context("lunation search failed")?;
    Ok(CyclesReport {
        sun: sun.as_ref(),
        moon: moon.as_ref(),
        phase: &phase,
    }
    .to_string())
}

pub fn planets(eph: &AnalyticEphemeris, sky: &Sky, chart: bool) -> Result<String> {
    info!(at = %sky.at, "computing planetary positions");
    let positions = planetary_positions(eph, sky.at, sky.panchang.ayanamsha)
        .context("planetary positions failed")?;
    let rows = positions
        .iter()
        .map(|p| Ok((*p, eph.horizontal(p.body, &sky.location, sky.at)?)))
        .collect::<Result<Vec<_>, kala_core::EphemerisError>>()
        .context("horizontal coordinates failed")?;
    let mut out = PlanetsReport { rows: &rows }.to_string();
    if chart {
        out.push('\n');
        out.push_str(&ChartReport(&rashi_chart(&positions)).to_string());
    }
    Ok(out)
}
