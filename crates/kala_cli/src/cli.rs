use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Vedic calendar and sky positions from an analytic ephemeris.
#[derive(Parser)]
#[command(
    name = "kala",
    version,
    about = "Panchang, rise/set cycles, and planetary positions"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (default: ./kala.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Nakshatra and pada from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Tithi from Moon-Sun elongation
    Tithi {
        /// Elongation in degrees
        elongation: f64,
    },
    /// Convert decimal degrees to DMS
    Dms {
        /// Angle in decimal degrees
        deg: f64,
    },
    /// Ayanamsha for a date
    Ayanamsha {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ); default now
        #[arg(long)]
        date: Option<String>,
        /// linear, lahiri, fagan-bradley, or raman
        #[arg(long)]
        system: Option<String>,
    },
    /// Sixteen-point compass direction for an azimuth
    Compass {
        /// Azimuth in degrees from north through east
        azimuth: f64,
    },
    /// Score sky-observing conditions from weather readings
    Observing {
        /// Cloud cover, percent
        #[arg(long)]
        cloud: f64,
        /// Visibility, km
        #[arg(long)]
        visibility: f64,
        /// US air-quality index
        #[arg(long)]
        aqi: f64,
    },
    /// Tithi, nakshatra, rashi, masa, vaar, and prahara with boundaries
    Panchang(SkyArgs),
    /// Sun and Moon rise/set cycles and the lunation
    Cycles(SkyArgs),
    /// Sidereal positions of the Sun, Moon, and planets
    Planets {
        #[command(flatten)]
        sky: SkyArgs,
        /// Also print the rashi chart
        #[arg(long)]
        chart: bool,
    },
    /// Reprint the panchang on a fixed interval
    Watch {
        #[command(flatten)]
        sky: SkyArgs,
        /// Seconds between refreshes (overrides [watch].interval_secs)
        #[arg(long)]
        interval: Option<f64>,
        /// Stop after this many refreshes
        #[arg(long)]
        count: Option<usize>,
    },
}

/// Observer, instant, and ayanamsha overrides shared by sky commands.
#[derive(Args, Debug, Clone, Default)]
pub struct SkyArgs {
    /// UTC datetime (YYYY-MM-DDThh:mm:ssZ); default now
    #[arg(long)]
    pub date: Option<String>,
    /// Latitude in degrees (north positive)
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,
    /// Longitude in degrees (east positive)
    #[arg(long, allow_negative_numbers = true)]
    pub lon: Option<f64>,
    /// Altitude in meters
    #[arg(long)]
    pub alt: Option<f64>,
    /// linear, lahiri, fagan-bradley, or raman
    #[arg(long)]
    pub ayanamsha: Option<String>,
    /// Root-search half-window for lunar units, days
    #[arg(long)]
    pub window: Option<f64>,
}
