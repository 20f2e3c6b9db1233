//! Panchang elements for an instant: tithi, nakshatra, moon and sun
//! rashi, solar masa, vaar, and prahara.
//!
//! Angle-driven elements go through [`resolve_occurrence`]; vaar and
//! prahara are bracketed by sunrise and sunset searches.

use kala_core::{Body, Ephemeris, EphemerisError, GeoLocation, RiseSetKind};
use kala_time::{Epoch, Span, UtcTime};
use kala_vedic_base::{
    PraharaHalf, PraharaInfo, masa_from_sun_rashi, nakshatra_from_longitude, normalize_360,
    prahara_from_bracket, rashi_from_longitude, sidereal_longitude, tithi_from_elongation,
    vaar_from_weekday,
};
use tracing::warn;

use crate::boundary::resolve_occurrence;
use crate::error::SearchError;
use crate::panchang_types::{
    MasaInfo, PanchangConfig, PanchangInfo, PanchangNakshatraInfo, RashiPeriod, TithiInfo,
    VaarInfo,
};
use crate::unit::{NAKSHATRA, RASHI_MOON, RASHI_SUN, TITHI};

/// How far rise/set searches look from the query instant, days.
pub const RISE_SET_LIMIT_DAYS: f64 = 2.0;

// ---------------------------------------------------------------------------
// Driving angles
// ---------------------------------------------------------------------------

/// Moon-Sun elongation in [0, 360). Ayanamsha cancels in the difference.
pub fn elongation_at<E: Ephemeris + ?Sized>(oracle: &E, at: Epoch) -> Result<f64, EphemerisError> {
    let moon = oracle.longitude_deg(Body::Moon, at)?;
    let sun = oracle.longitude_deg(Body::Sun, at)?;
    Ok(normalize_360(moon - sun))
}

pub fn moon_sidereal_longitude_at<E: Ephemeris + ?Sized>(
    oracle: &E,
    at: Epoch,
    config: &PanchangConfig,
) -> Result<f64, EphemerisError> {
    let lon = oracle.longitude_deg(Body::Moon, at)?;
    Ok(sidereal_longitude(lon, config.ayanamsha, at))
}

pub fn sun_sidereal_longitude_at<E: Ephemeris + ?Sized>(
    oracle: &E,
    at: Epoch,
    config: &PanchangConfig,
) -> Result<f64, EphemerisError> {
    let lon = oracle.longitude_deg(Body::Sun, at)?;
    Ok(sidereal_longitude(lon, config.ayanamsha, at))
}

// ---------------------------------------------------------------------------
// Angle-driven elements
// ---------------------------------------------------------------------------

pub fn tithi_for_date<E: Ephemeris + ?Sized>(
    oracle: &E,
    at: Epoch,
    config: &PanchangConfig,
) -> Result<TithiInfo, SearchError> {
    config.validate()?;
    let f = |t: Epoch| elongation_at(oracle, t);
    let unit = TITHI.with_window(config.search_window_days);
    let occurrence = resolve_occurrence(oracle, &f, at, &unit)?;
    Ok(TithiInfo {
        tithi: tithi_from_elongation(occurrence.angle_deg),
        occurrence,
    })
}

pub fn nakshatra_for_date<E: Ephemeris + ?Sized>(
    oracle: &E,
    at: Epoch,
    config: &PanchangConfig,
) -> Result<PanchangNakshatraInfo, SearchError> {
    config.validate()?;
    let f = |t: Epoch| moon_sidereal_longitude_at(oracle, t, config);
    let unit = NAKSHATRA.with_window(config.search_window_days);
    let occurrence = resolve_occurrence(oracle, &f, at, &unit)?;
    Ok(PanchangNakshatraInfo {
        nakshatra: nakshatra_from_longitude(occurrence.angle_deg),
        occurrence,
    })
}

pub fn moon_rashi_for_date<E: Ephemeris + ?Sized>(
    oracle: &E,
    at: Epoch,
    config: &PanchangConfig,
) -> Result<RashiPeriod, SearchError> {
    config.validate()?;
    let f = |t: Epoch| moon_sidereal_longitude_at(oracle, t, config);
    let unit = RASHI_MOON.with_window(config.search_window_days);
    let occurrence = resolve_occurrence(oracle, &f, at, &unit)?;
    Ok(RashiPeriod {
        rashi: rashi_from_longitude(occurrence.angle_deg),
        occurrence,
    })
}

/// Sun's sidereal rashi. Uses the wider solar search window.
pub fn sun_rashi_for_date<E: Ephemeris + ?Sized>(
    oracle: &E,
    at: Epoch,
    config: &PanchangConfig,
) -> Result<RashiPeriod, SearchError> {
    config.validate()?;
    let f = |t: Epoch| sun_sidereal_longitude_at(oracle, t, config);
    let occurrence = resolve_occurrence(oracle, &f, at, &RASHI_SUN)?;
    Ok(RashiPeriod {
        rashi: rashi_from_longitude(occurrence.angle_deg),
        occurrence,
    })
}

/// Solar masa: the month is named by the Sun's sidereal rashi and lasts
/// from one sankranti to the next.
pub fn masa_for_date<E: Ephemeris + ?Sized>(
    oracle: &E,
    at: Epoch,
    config: &PanchangConfig,
) -> Result<MasaInfo, SearchError> {
    let sun = sun_rashi_for_date(oracle, at, config)?;
    Ok(masa_from_sun_rashi_period(&sun))
}

fn masa_from_sun_rashi_period(sun: &RashiPeriod) -> MasaInfo {
    MasaInfo {
        masa: masa_from_sun_rashi(sun.rashi.rashi),
        sun_rashi: sun.rashi.rashi,
        occurrence: sun.occurrence,
    }
}

// ---------------------------------------------------------------------------
// Sunrise-based elements
// ---------------------------------------------------------------------------

fn sun_event<E: Ephemeris + ?Sized>(
    oracle: &E,
    location: &GeoLocation,
    kind: RiseSetKind,
    at: Epoch,
    limit_days: f64,
) -> Result<Option<Epoch>, SearchError> {
    Ok(oracle.search_rise_set(Body::Sun, location, kind, at, limit_days)?)
}

/// Sunrise on or before `at` and the sunrise after it.
pub fn vedic_day_sunrises<E: Ephemeris + ?Sized>(
    oracle: &E,
    at: Epoch,
    location: &GeoLocation,
) -> Result<(Epoch, Epoch), SearchError> {
    location.validate()?;
    let prev = sun_event(oracle, location, RiseSetKind::Rise, at, -RISE_SET_LIMIT_DAYS)?
        .ok_or(SearchError::NoEvent("no previous sunrise"))?;
    let next = sun_event(oracle, location, RiseSetKind::Rise, at, RISE_SET_LIMIT_DAYS)?
        .ok_or(SearchError::NoEvent("no next sunrise"))?;
    Ok((prev, next))
}

/// Weekday of a sunrise in local mean solar time (UTC shifted by
/// longitude / 15 hours), 0 = Sunday.
fn local_weekday(sunrise: Epoch, location: &GeoLocation) -> u8 {
    let offset = Span::from_seconds(location.longitude_deg / 15.0 * 3600.0);
    UtcTime::from_epoch(sunrise + offset).weekday()
}

/// Vaar from a pair of bracketing sunrises.
pub fn vaar_from_sunrises(
    at: Epoch,
    sunrise: Epoch,
    next_sunrise: Epoch,
    location: &GeoLocation,
) -> VaarInfo {
    let len = (next_sunrise - sunrise).as_seconds();
    let progress = if len > 0.0 {
        ((at - sunrise).as_seconds() / len).clamp(0.0, 1.0)
    } else {
        0.0
    };
    VaarInfo {
        vaar: vaar_from_weekday(local_weekday(sunrise, location)),
        start: sunrise,
        end: next_sunrise,
        progress,
    }
}

/// Vaar runs sunrise to sunrise and takes the weekday of its sunrise.
pub fn vaar_for_date<E: Ephemeris + ?Sized>(
    oracle: &E,
    at: Epoch,
    location: &GeoLocation,
) -> Result<VaarInfo, SearchError> {
    let (sunrise, next_sunrise) = vedic_day_sunrises(oracle, at, location)?;
    Ok(vaar_from_sunrises(at, sunrise, next_sunrise, location))
}

/// Prahara: quarter of the current daytime (sunrise to sunset) or
/// nighttime (sunset to sunrise).
pub fn prahara_for_date<E: Ephemeris + ?Sized>(
    oracle: &E,
    at: Epoch,
    location: &GeoLocation,
) -> Result<PraharaInfo, SearchError> {
    location.validate()?;
    let next_rise = sun_event(oracle, location, RiseSetKind::Rise, at, RISE_SET_LIMIT_DAYS)?
        .ok_or(SearchError::NoEvent("no next sunrise"))?;
    let next_set = sun_event(oracle, location, RiseSetKind::Set, at, RISE_SET_LIMIT_DAYS)?
        .ok_or(SearchError::NoEvent("no next sunset"))?;

    let (half, start, end) = if next_set < next_rise {
        let prev_rise = sun_event(oracle, location, RiseSetKind::Rise, at, -RISE_SET_LIMIT_DAYS)?
            .ok_or(SearchError::NoEvent("no previous sunrise"))?;
        (PraharaHalf::Day, prev_rise, next_set)
    } else {
        let prev_set = sun_event(oracle, location, RiseSetKind::Set, at, -RISE_SET_LIMIT_DAYS)?
            .ok_or(SearchError::NoEvent("no previous sunset"))?;
        (PraharaHalf::Night, prev_set, next_rise)
    };
    prahara_from_bracket(half, start, end, at)
        .ok_or(SearchError::NoEvent("instant outside its day/night bracket"))
}

/// `Ok(None)` for a missing rise/set event, otherwise pass through.
fn optional_event<T>(what: &str, r: Result<T, SearchError>) -> Result<Option<T>, SearchError> {
    match r {
        Ok(v) => Ok(Some(v)),
        Err(SearchError::NoEvent(reason)) => {
            warn!(element = what, reason, "no rise/set event, element omitted");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

// ---------------------------------------------------------------------------
// Aggregate
// ---------------------------------------------------------------------------

/// Every panchang element for `at`. Elements are independent of each
/// other and evaluated in sequence.
pub fn panchang_for_date<E: Ephemeris + ?Sized>(
    oracle: &E,
    at: Epoch,
    location: &GeoLocation,
    config: &PanchangConfig,
) -> Result<PanchangInfo, SearchError> {
    config.validate()?;
    location.validate()?;

    let tithi = tithi_for_date(oracle, at, config)?;
    let nakshatra = nakshatra_for_date(oracle, at, config)?;
    let moon_rashi = moon_rashi_for_date(oracle, at, config)?;
    let sun_rashi = sun_rashi_for_date(oracle, at, config)?;
    let masa = masa_from_sun_rashi_period(&sun_rashi);

    let vaar = optional_event("vaar", vaar_for_date(oracle, at, location))?;
    let prahara = optional_event("prahara", prahara_for_date(oracle, at, location))?;

    Ok(PanchangInfo {
        at,
        tithi,
        nakshatra,
        moon_rashi,
        sun_rashi,
        masa,
        vaar,
        prahara,
    })
}
