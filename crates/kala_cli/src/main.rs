mod cli;
mod config;
mod convert;
mod logging;
mod report;
mod sky;
mod watch;

use std::io;
use std::process;

use anyhow::Result;
use clap::Parser;

use kala_ephem::AnalyticEphemeris;
use kala_time::{CancelToken, Clock, Span, SystemClock, Ticker};
use kala_vedic_base::{
    ObservingConditions, WeatherSample, ayanamsha_deg, compass_direction, deg_to_dms,
    nakshatra_from_longitude, rashi_from_longitude, tithi_from_elongation,
};

use crate::cli::{Cli, Command};
use crate::config::KalaConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    let clock = SystemClock;
    let eph = AnalyticEphemeris::new();

    match cli.command {
        Command::Rashi { lon } => {
            let info = rashi_from_longitude(lon);
            println!(
                "{} ({}) - {} ({:.4} deg in rashi)",
                info.rashi.name(),
                info.rashi.western_name(),
                info.dms,
                info.degrees_in_rashi
            );
        }

        Command::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon);
            println!(
                "{} (index {}) - Pada {} ({:.4} deg in nakshatra)",
                info.nakshatra.name(),
                info.nakshatra_index,
                info.pada,
                info.degrees_in_nakshatra
            );
        }

        Command::Tithi { elongation } => {
            let t = tithi_from_elongation(elongation);
            println!(
                "{} (tithi {}, {:.4} deg into tithi, {:.1}% of paksha)",
                t.label(),
                t.number,
                t.degrees_in_tithi,
                t.paksha_progress * 100.0
            );
        }

        Command::Dms { deg } => println!("{}", deg_to_dms(deg)),

        Command::Ayanamsha { date, system } => {
            let at = convert::parse_instant(date.as_deref(), &clock)?;
            let system = convert::parse_ayanamsha(
                system.as_deref().unwrap_or(&config.panchang.ayanamsha),
            )?;
            let aya = ayanamsha_deg(system, at);
            println!("{} at {at}: {:.4} deg ({})", system.name(), aya, deg_to_dms(aya));
        }

        Command::Compass { azimuth } => println!("{}", compass_direction(azimuth)),

        Command::Observing {
            cloud,
            visibility,
            aqi,
        } => {
            let sample = WeatherSample {
                cloud_cover_pct: cloud,
                visibility_km: visibility,
                aqi,
            };
            println!("{}", ObservingConditions::from_sample(&sample).label());
        }

        Command::Panchang(args) => {
            let sky = convert::build_sky(&args, &config, &clock)?;
            print!("{}", sky::panchang(&eph, &sky)?);
        }

        Command::Cycles(args) => {
            let sky = convert::build_sky(&args, &config, &clock)?;
            print!("{}", sky::cycles(&eph, &sky)?);
        }

        Command::Planets { sky: args, chart } => {
            let sky = convert::build_sky(&args, &config, &clock)?;
            print!("{}", sky::planets(&eph, &sky, chart)?);
        }

        Command::Watch {
            sky: args,
            interval,
            count,
        } => run_watch(&eph, &clock, &config, &args, interval, count)?,
    }

    Ok(())
}

fn run_watch<C: Clock>(
    eph: &AnalyticEphemeris,
    clock: &C,
    config: &KalaConfig,
    args: &cli::SkyArgs,
    interval: Option<f64>,
    count: Option<usize>,
) -> Result<()> {
    let sky = convert::build_sky(args, config, clock)?;
    let secs = convert::watch_interval_secs(interval, config)?;
    let mut ticker = Ticker::new(Span::from_seconds(secs))?;
    if let Some(n) = count {
        ticker = ticker.with_max_ticks(n);
    }
    let mut stdout = io::stdout().lock();
    watch::run(eph, clock, &ticker, &CancelToken::new(), &sky, &mut stdout)?;
    Ok(())
}
