//! Periodic panchang refresh driven by a [`Ticker`].

use std::io::Write;

use anyhow::{Context, Result};
use tracing::{debug, info};

use kala_ephem::AnalyticEphemeris;
use kala_search::{SearchError, panchang_for_date};
use kala_time::{CancelToken, Clock, TickControl, Ticker};

use crate::convert::Sky;
use crate::report::PanchangReport;

/// Print the panchang on every tick until the ticker stops or an error
/// occurs. The sky's instant is shifted along with the clock, so a
/// `--date` in the past replays from there. Returns the number of ticks.
pub fn run<C: Clock, W: Write>(
    eph: &AnalyticEphemeris,
    clock: &C,
    ticker: &Ticker,
    token: &CancelToken,
    sky: &Sky,
    out: &mut W,
) -> Result<usize> {
    let offset = sky.at - clock.now();
    let mut failure: Option<anyhow::Error> = None;

    let ticks = ticker.run(clock, token, |now| {
        let at = now + offset;
        debug!(%at, "refresh");
        let rendered = panchang_for_date(eph, at, &sky.location, &sky.panchang)
            .map(|info| {
                PanchangReport {
                    info: &info,
                    location: &sky.location,
                }
                .to_string()
            })
            .map_err(|e: SearchError| anyhow::Error::new(e).context("panchang refresh failed"))
            .and_then(|text| writeln!(out, "{text}").context("failed to write output"));
        match rendered {
            Ok(()) => TickControl::Continue,
            Err(e) => {
                failure = Some(e);
                TickControl::Stop
            }
        }
    });

    info!(ticks, "watch finished");
    match failure {
        Some(e) => Err(e),
        None => Ok(ticks),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kala_core::GeoLocation;
    use kala_search::PanchangConfig;
    use kala_time::{Epoch, ManualClock, Span, UtcTime};

    fn sky(at: Epoch, location: GeoLocation) -> Sky {
        Sky {
            at,
            location,
            panchang: PanchangConfig::default(),
        }
    }

    #[test]
    fn prints_once_per_tick_without_real_delay() {
        let start = UtcTime::new(2024, 3, 20, 6, 0, 0.0).to_epoch();
        let clock = ManualClock::new(start);
        let ticker = Ticker::new(Span::from_seconds(60.0)).unwrap().with_max_ticks(3);
        let mut out = Vec::new();
        let ticks = run(
            &AnalyticEphemeris::new(),
            &clock,
            &ticker,
            &CancelToken::new(),
            &sky(start, GeoLocation::new_delhi()),
            &mut out,
        )
        .unwrap();
        assert_eq!(ticks, 3);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Panchang for").count(), 3);
        assert!(text.contains("2024-03-20T06:02:00Z"));
    }

    #[test]
    fn cancelled_token_prints_nothing() {
        let clock = ManualClock::new(Epoch::J2000);
        let ticker = Ticker::new(Span::from_seconds(1.0)).unwrap();
        let token = CancelToken::new();
        token.cancel();
        let mut out = Vec::new();
        let ticks = run(
            &AnalyticEphemeris::new(),
            &clock,
            &ticker,
            &token,
            &sky(Epoch::J2000, GeoLocation::new_delhi()),
            &mut out,
        )
        .unwrap();
        assert_eq!(ticks, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn search_error_stops_the_loop() {
        let clock = ManualClock::new(Epoch::J2000);
        let ticker = Ticker::new(Span::from_seconds(1.0)).unwrap().with_max_ticks(5);
        let bad = Sky {
            panchang: PanchangConfig::new(Default::default(), -1.0),
            ..sky(Epoch::J2000, GeoLocation::new_delhi())
        };
        let mut out = Vec::new();
        let err = run(
            &AnalyticEphemeris::new(),
            &clock,
            &ticker,
            &CancelToken::new(),
            &bad,
            &mut out,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("panchang refresh failed"));
    }
}
