//! Plain-text rendering of search results.
//!
//! Missing rise/set events print as an explicit placeholder rather than
//! an empty line.

use std::fmt::{self, Display, Formatter};

use kala_core::GeoLocation;
use kala_ephem::HorizontalCoords;
use kala_search::{BodyCycle, MoonPhaseCycle, PanchangInfo, PlanetPosition, RashiChart, UnitOccurrence};
use kala_time::Epoch;
use kala_vedic_base::{compass_direction, deg_to_dms};

/// Shown in place of an element whose rise/set event does not occur.
pub const NO_EVENT: &str = "No Event / Polar";

fn bounds(f: &mut Formatter<'_>, start: Epoch, end: Epoch, progress: f64) -> fmt::Result {
    write!(f, "{start} -> {end}  ({:.1}%)", progress * 100.0)
}

fn occurrence(f: &mut Formatter<'_>, occ: &UnitOccurrence) -> fmt::Result {
    write!(f, "    ")?;
    bounds(f, occ.start, occ.end, occ.progress)?;
    if occ.approximate {
        write!(f, "  [approximate]")?;
    }
    writeln!(f)
}

/// Full panchang for an observer.
pub struct PanchangReport<'a> {
    pub info: &'a PanchangInfo,
    pub location: &'a GeoLocation,
}

impl Display for PanchangReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let p = self.info;
        writeln!(
            f,
            "Panchang for {} at {:.4}°N, {:.4}°E\n",
            p.at, self.location.latitude_deg, self.location.longitude_deg
        )?;

        let t = &p.tithi.tithi;
        writeln!(
            f,
            "Tithi:      {} ({}/30, {:.1}% of paksha)",
            t.label(),
            t.number,
            t.paksha_progress * 100.0
        )?;
        occurrence(f, &p.tithi.occurrence)?;

        let n = &p.nakshatra.nakshatra;
        writeln!(
            f,
            "Nakshatra:  {} (index {}) pada {}",
            n.nakshatra.name(),
            n.nakshatra_index,
            n.pada
        )?;
        occurrence(f, &p.nakshatra.occurrence)?;

        let mr = &p.moon_rashi.rashi;
        writeln!(f, "Moon rashi: {} ({}) {}", mr.rashi.name(), mr.rashi.western_name(), mr.dms)?;
        occurrence(f, &p.moon_rashi.occurrence)?;

        let sr = &p.sun_rashi.rashi;
        writeln!(f, "Sun rashi:  {} ({}) {}", sr.rashi.name(), sr.rashi.western_name(), sr.dms)?;
        occurrence(f, &p.sun_rashi.occurrence)?;

        writeln!(f, "Masa:       {}", p.masa.masa.name())?;
        occurrence(f, &p.masa.occurrence)?;

        match &p.vaar {
            Some(v) => {
                writeln!(f, "Vaar:       {} ({})", v.vaar.name(), v.vaar.western_name())?;
                write!(f, "    ")?;
                bounds(f, v.start, v.end, v.progress)?;
                writeln!(f)?;
            }
            None => writeln!(f, "Vaar:       {NO_EVENT}")?,
        }
        match &p.prahara {
            Some(pr) => {
                writeln!(f, "Prahara:    {} {}/4", pr.half.name(), pr.quarter)?;
                write!(f, "    ")?;
                bounds(f, pr.start, pr.end, pr.progress)?;
                writeln!(f)?;
            }
            None => writeln!(f, "Prahara:    {NO_EVENT}")?,
        }
        Ok(())
    }
}

/// Sun and Moon rise/set cycles plus the lunation.
pub struct CyclesReport<'a> {
    pub sun: Option<&'a BodyCycle>,
    pub moon: Option<&'a BodyCycle>,
    pub phase: &'a MoonPhaseCycle,
}

fn cycle_line(f: &mut Formatter<'_>, label: &str, cycle: Option<&BodyCycle>) -> fmt::Result {
    let Some(c) = cycle else {
        return writeln!(f, "{label:<6}{NO_EVENT}");
    };
    let (state, next) = if c.is_up {
        ("up", "sets")
    } else {
        ("down", "rises")
    };
    writeln!(f, "{label:<6}{state}, {next} at {}", c.next_event)?;
    write!(f, "    ")?;
    bounds(f, c.start, c.end, c.progress)?;
    writeln!(f)
}

impl Display for CyclesReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        cycle_line(f, "Sun:", self.sun)?;
        cycle_line(f, "Moon:", self.moon)?;
        let ph = self.phase;
        writeln!(
            f,
            "Phase: {} {} ({:.1}°, {:.1}% of lunation)",
            ph.name.emoji(),
            ph.name.name(),
            ph.phase_deg,
            ph.progress * 100.0
        )?;
        match ph.previous_new_moon {
            Some(t) => writeln!(f, "    previous new moon {t}")?,
            None => writeln!(f, "    previous new moon not found")?,
        }
        match ph.next_new_moon {
            Some(t) => writeln!(f, "    next new moon     {t}")?,
            None => writeln!(f, "    next new moon not found")?,
        }
        Ok(())
    }
}

/// One line per body, with its place in the local sky.
pub struct PlanetsReport<'a> {
    pub rows: &'a [(PlanetPosition, HorizontalCoords)],
}

impl Display for PlanetsReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<8} {:>9}  {:<11} {:<12} {:<16} {:>6}  {:<4}",
            "Body", "Sidereal", "Rashi", "In rashi", "Nakshatra", "Alt", "Dir"
        )?;
        for (p, hz) in self.rows {
            let retro = if p.retrograde { " R" } else { "" };
            writeln!(
                f,
                "{:<8} {:>8.3}°  {:<11} {:<12} {:<16} {:>5.1}°  {:<4}{retro}",
                p.body.name(),
                p.sidereal_deg,
                p.rashi.name(),
                deg_to_dms(p.degrees_in_rashi).to_string(),
                p.nakshatra.name(),
                hz.altitude_deg,
                compass_direction(hz.azimuth_deg),
            )?;
        }
        Ok(())
    }
}

/// Twelve sign cells with their occupants.
pub struct ChartReport<'a>(pub &'a RashiChart);

impl Display for ChartReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (rashi, cell) in self.0.iter() {
            let names: Vec<&str> = cell.iter().map(|p| p.body.name()).collect();
            writeln!(f, "{} {:<11} {}", rashi.symbol(), rashi.name(), names.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kala_core::Body;
    use kala_ephem::AnalyticEphemeris;
    use kala_search::{
        PanchangConfig, body_cycle, moon_phase_cycle, panchang_for_date, planetary_positions,
        rashi_chart,
    };
    use kala_time::UtcTime;
    use kala_vedic_base::AyanamshaSystem;

    fn at() -> Epoch {
        UtcTime::new(2024, 3, 20, 6, 0, 0.0).to_epoch()
    }

    #[test]
    fn panchang_lists_every_element() {
        let eph = AnalyticEphemeris::new();
        let delhi = GeoLocation::new_delhi();
        let info = panchang_for_date(&eph, at(), &delhi, &PanchangConfig::default()).unwrap();
        let text = PanchangReport {
            info: &info,
            location: &delhi,
        }
        .to_string();
        for label in ["Tithi:", "Nakshatra:", "Moon rashi:", "Sun rashi:", "Masa:", "Vaar:", "Prahara:"] {
            assert!(text.contains(label), "missing {label}");
        }
        assert!(text.contains("Budhvaar"));
        assert!(!text.contains(NO_EVENT));
    }

    #[test]
    fn polar_elements_show_placeholder() {
        let eph = AnalyticEphemeris::new();
        let svalbard = GeoLocation::new(78.22, 15.65, 0.0);
        let june = UtcTime::new(2024, 6, 21, 12, 0, 0.0).to_epoch();
        let info = panchang_for_date(&eph, june, &svalbard, &PanchangConfig::default()).unwrap();
        let text = PanchangReport {
            info: &info,
            location: &svalbard,
        }
        .to_string();
        assert!(text.contains(&format!("Vaar:       {NO_EVENT}")));
        assert!(text.contains(&format!("Prahara:    {NO_EVENT}")));

        let sun = body_cycle(&eph, Body::Sun, &svalbard, june).unwrap();
        let phase = moon_phase_cycle(&eph, june).unwrap();
        let text = CyclesReport {
            sun: sun.as_ref(),
            moon: None,
            phase: &phase,
        }
        .to_string();
        assert!(text.starts_with(&format!("Sun:  {NO_EVENT}")));
        assert!(text.contains("Phase:"));
    }

    #[test]
    fn planets_table_has_a_row_per_body() {
        let eph = AnalyticEphemeris::new();
        let delhi = GeoLocation::new_delhi();
        let positions = planetary_positions(&eph, at(), AyanamshaSystem::Lahiri).unwrap();
        let rows: Vec<_> = positions
            .iter()
            .map(|p| (*p, eph.horizontal(p.body, &delhi, at()).unwrap()))
            .collect();
        let text = PlanetsReport { rows: &rows }.to_string();
        assert_eq!(text.lines().count(), positions.len() + 1);
        assert!(text.contains("Jupiter"));

        let chart = ChartReport(&rashi_chart(&positions)).to_string();
        assert_eq!(chart.lines().count(), 12);
    }
}
