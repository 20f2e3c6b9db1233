//! Property tests for calendar ↔ epoch conversion.

use kala_time::{Epoch, UtcTime, calendar_to_jd, jd_to_calendar};
use proptest::prelude::*;

proptest! {
    #[test]
    fn utc_epoch_roundtrip_to_the_millisecond(
        year in 1800i32..2200,
        month in 1u32..=12,
        day in 1u32..=28,
        hour in 0u32..24,
        minute in 0u32..60,
        millis in 0u32..60_000,
    ) {
        let utc = UtcTime::new(year, month, day, hour, minute, millis as f64 / 1000.0);
        let back = UtcTime::from_epoch(utc.to_epoch());
        prop_assert_eq!(back, utc);
    }

    #[test]
    fn julian_day_agrees_with_epoch(days in -40_000.0f64..40_000.0) {
        let jd = 2_451_545.0 + days;
        let (y, m, d) = jd_to_calendar(jd);
        prop_assert!((calendar_to_jd(y, m, d) - jd).abs() < 1e-6);
        prop_assert!((Epoch::from_jd(jd).as_jd() - jd).abs() < 1e-6);
    }

    #[test]
    fn weekday_advances_by_one_per_day(days in 0i64..100_000) {
        let a = UtcTime::from_epoch(Epoch::from_unix_millis(days * 86_400_000));
        let b = UtcTime::from_epoch(Epoch::from_unix_millis((days + 1) * 86_400_000));
        prop_assert_eq!((a.weekday() + 1) % 7, b.weekday());
    }
}

#[test]
fn display_parses_back() {
    let text = "2026-10-16T05:07:09.250Z";
    let parsed: UtcTime = text.parse().unwrap();
    assert_eq!(parsed.to_string(), text);
}
