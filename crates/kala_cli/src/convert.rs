//! Config file + command-line overrides -> library inputs.

use anyhow::{Context, Result, anyhow, bail};

use kala_core::GeoLocation;
use kala_search::PanchangConfig;
use kala_time::{Clock, Epoch, UtcTime};
use kala_vedic_base::AyanamshaSystem;

use crate::cli::SkyArgs;
use crate::config::KalaConfig;

/// Everything a sky command needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sky {
    pub at: Epoch,
    pub location: GeoLocation,
    pub panchang: PanchangConfig,
}

/// Parses an ayanamsha system name.
pub fn parse_ayanamsha(s: &str) -> Result<AyanamshaSystem> {
    AyanamshaSystem::from_name(s).ok_or_else(|| {
        anyhow!("unknown ayanamsha: {s:?} (expected linear, lahiri, fagan-bradley, or raman)")
    })
}

/// Parses a UTC timestamp, or reads the clock when none is given.
pub fn parse_instant<C: Clock>(date: Option<&str>, clock: &C) -> Result<Epoch> {
    match date {
        Some(s) => {
            let utc: UtcTime = s.parse().with_context(|| format!("invalid --date {s:?}"))?;
            Ok(utc.to_epoch())
        }
        None => Ok(clock.now()),
    }
}

pub fn build_location(args: &SkyArgs, config: &KalaConfig) -> Result<GeoLocation> {
    let location = GeoLocation::new(
        args.lat.unwrap_or(config.location.lat),
        args.lon.unwrap_or(config.location.lon),
        args.alt.unwrap_or(config.location.alt),
    );
    location.validate().context("invalid observer location")?;
    Ok(location)
}

pub fn build_panchang_config(args: &SkyArgs, config: &KalaConfig) -> Result<PanchangConfig> {
    let name = args
        .ayanamsha
        .as_deref()
        .unwrap_or(&config.panchang.ayanamsha);
    let window = args.window.unwrap_or(config.panchang.search_window_days);
    let panchang = PanchangConfig::new(parse_ayanamsha(name)?, window);
    panchang.validate().context("invalid panchang settings")?;
    Ok(panchang)
}

pub fn build_sky<C: Clock>(args: &SkyArgs, config: &KalaConfig, clock: &C) -> Result<Sky> {
    Ok(Sky {
        at: parse_instant(args.date.as_deref(), clock)?,
        location: build_location(args, config)?,
        panchang: build_panchang_config(args, config)?,
    })
}

/// Longest accepted refresh interval: one day.
const MAX_WATCH_INTERVAL_SECS: f64 = 86_400.0;

/// Refresh interval in seconds: the flag wins over the config file.
pub fn watch_interval_secs(flag: Option<f64>, config: &KalaConfig) -> Result<f64> {
    let secs = flag.unwrap_or(config.watch.interval_secs);
    if !secs.is_finite() || secs <= 0.0 {
        bail!("watch interval must be a positive number of seconds, got {secs}");
    }
    if secs > MAX_WATCH_INTERVAL_SECS {
        bail!("watch interval must be at most {MAX_WATCH_INTERVAL_SECS} seconds, got {secs}");
    }
    Ok(secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kala_time::ManualClock;

    #[test]
    fn ayanamsha_names() {
        assert_eq!(parse_ayanamsha("Lahiri").unwrap(), AyanamshaSystem::Lahiri);
        assert_eq!(
            parse_ayanamsha("fagan-bradley").unwrap(),
            AyanamshaSystem::FaganBradley
        );
        assert!(parse_ayanamsha("krishnamurti").is_err());
    }

    #[test]
    fn missing_date_reads_clock() {
        let clock = ManualClock::new(Epoch::J2000);
        assert_eq!(parse_instant(None, &clock).unwrap(), Epoch::J2000);
        let at = parse_instant(Some("2000-01-01T12:00:00Z"), &clock).unwrap();
        assert!(at.as_j2000_seconds().abs() < 1e-6);
        assert!(parse_instant(Some("yesterday"), &clock).is_err());
    }

    #[test]
    fn flags_override_config() {
        let config = KalaConfig::default();
        let args = SkyArgs {
            lat: Some(51.48),
            ayanamsha: Some("raman".into()),
            ..SkyArgs::default()
        };
        let sky = build_sky(&args, &config, &ManualClock::new(Epoch::J2000)).unwrap();
        assert_eq!(sky.location.latitude_deg, 51.48);
        assert_eq!(sky.location.longitude_deg, config.location.lon);
        assert_eq!(sky.panchang.ayanamsha, AyanamshaSystem::Raman);
        assert_eq!(sky.panchang.search_window_days, 0.7);
    }

    #[test]
    fn bad_overrides_fail() {
        let config = KalaConfig::default();
        let lat = SkyArgs {
            lat: Some(95.0),
            ..SkyArgs::default()
        };
        assert!(build_location(&lat, &config).is_err());
        let window = SkyArgs {
            window: Some(0.0),
            ..SkyArgs::default()
        };
        assert!(build_panchang_config(&window, &config).is_err());
    }

    #[test]
    fn interval_must_be_positive() {
        let config = KalaConfig::default();
        assert_eq!(watch_interval_secs(None, &config).unwrap(), 1.0);
        assert_eq!(watch_interval_secs(Some(2.5), &config).unwrap(), 2.5);
        assert!(watch_interval_secs(Some(-1.0), &config).is_err());
    }

    #[test]
    fn interval_is_capped_at_one_day() {
        let config = KalaConfig::default();
        assert_eq!(watch_interval_secs(Some(86_400.0), &config).unwrap(), 86_400.0);
        let err = watch_interval_secs(Some(1e20), &config).unwrap_err();
        assert!(err.to_string().contains("at most"), "{err}");
    }
}
