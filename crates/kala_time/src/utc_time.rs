//! UTC calendar date/time with millisecond precision.
//!
//! `UtcTime` is the human-facing form of an [`Epoch`]: it parses and prints
//! `YYYY-MM-DDThh:mm:ss[.fff]Z` and knows its weekday.

use std::str::FromStr;

use crate::Epoch;
use crate::error::TimeError;

const MS_PER_DAY: i64 = 86_400_000;

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Check that every field is in range for its calendar position.
    pub fn validate(&self) -> Result<(), TimeError> {
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::InvalidDate("month must be 1-12"));
        }
        if self.day == 0 || self.day > days_in_month(self.year, self.month) {
            return Err(TimeError::InvalidDate("day out of range for month"));
        }
        if self.hour > 23 {
            return Err(TimeError::InvalidDate("hour must be 0-23"));
        }
        if self.minute > 59 {
            return Err(TimeError::InvalidDate("minute must be 0-59"));
        }
        if !self.second.is_finite() || !(0.0..60.0).contains(&self.second) {
            return Err(TimeError::InvalidDate("second must be in [0, 60)"));
        }
        Ok(())
    }

    /// Convert to an absolute epoch.
    pub fn to_epoch(&self) -> Epoch {
        let days = days_from_civil(self.year, self.month, self.day);
        let ms_of_day = (self.hour as i64 * 3600 + self.minute as i64 * 60) * 1000;
        let unix_ms = days * MS_PER_DAY + ms_of_day;
        Epoch::from_unix_millis(unix_ms).add_days(self.second / 86_400.0)
    }

    /// Convert from an absolute epoch, rounding to the nearest millisecond.
    pub fn from_epoch(epoch: Epoch) -> Self {
        let unix_ms = epoch.as_unix_millis();
        let days = unix_ms.div_euclid(MS_PER_DAY);
        let ms_of_day = unix_ms.rem_euclid(MS_PER_DAY);
        let (year, month, day) = civil_from_days(days);
        let hour = (ms_of_day / 3_600_000) as u32;
        let minute = ((ms_of_day % 3_600_000) / 60_000) as u32;
        let second = (ms_of_day % 60_000) as f64 / 1000.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Day of week, 0 = Sunday .. 6 = Saturday.
    pub fn weekday(&self) -> u8 {
        // 1970-01-01 was a Thursday.
        (days_from_civil(self.year, self.month, self.day) + 4).rem_euclid(7) as u8
    }
}

impl FromStr for UtcTime {
    type Err = TimeError;

    /// Accepts `YYYY-MM-DD`, `YYYY-MM-DDThh:mm[:ss[.fff]]Z` (the trailing `Z`
    /// is optional; a space may replace the `T`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_suffix('Z').unwrap_or(s);
        let (date, time) = match s.split_once(['T', ' ']) {
            Some((d, t)) => (d, Some(t)),
            None => (s, None),
        };

        let mut date_parts = date.splitn(3, '-');
        let year = parse_field::<i32>(date_parts.next(), "year")?;
        let month = parse_field::<u32>(date_parts.next(), "month")?;
        let day = parse_field::<u32>(date_parts.next(), "day")?;

        let (hour, minute, second) = match time {
            None => (0, 0, 0.0),
            Some(t) => {
                let mut time_parts = t.splitn(3, ':');
                let hour = parse_field::<u32>(time_parts.next(), "hour")?;
                let minute = parse_field::<u32>(time_parts.next(), "minute")?;
                let second = match time_parts.next() {
                    Some(sec) => parse_field::<f64>(Some(sec), "second")?,
                    None => 0.0,
                };
                (hour, minute, second)
            }
        };

        let utc = UtcTime::new(year, month, day, hour, minute, second);
        utc.validate()?;
        Ok(utc)
    }
}

fn parse_field<T: FromStr>(field: Option<&str>, name: &str) -> Result<T, TimeError> {
    let raw = field.ok_or_else(|| TimeError::Parse(format!("missing {name}")))?;
    raw.parse::<T>()
        .map_err(|_| TimeError::Parse(format!("invalid {name}: {raw:?}")))
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second.floor() as u32;
        let millis = ((self.second - whole as f64) * 1000.0).round() as u32;
        if millis == 0 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
                self.year,
                self.month,
                self.day,
                self.hour,
                self.minute,
                whole,
                millis.min(999)
            )
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Days since 1970-01-01 for a proleptic Gregorian date (H. Hinnant).
fn days_from_civil(year: i32, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year as i64 - 1 } else { year as i64 };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let m = month as i64;
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`].
fn civil_from_days(days: i64) -> (i32, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = if mp < 10 { mp + 3 } else { mp - 9 } as u32;
    let year = (yoe + era * 400 + if month <= 2 { 1 } else { 0 }) as i32;
    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::J2000_JD;

    #[test]
    fn display_whole_seconds() {
        let t = UtcTime::new(2024, 1, 15, 0, 0, 0.0);
        assert_eq!(t.to_string(), "2024-01-15T00:00:00Z");
    }

    #[test]
    fn display_millis() {
        let t = UtcTime::new(2024, 1, 15, 12, 30, 45.125);
        assert_eq!(t.to_string(), "2024-01-15T12:30:45.125Z");
    }

    #[test]
    fn parse_full_timestamp() {
        let t: UtcTime = "2024-03-20T12:30:15Z".parse().unwrap();
        assert_eq!(t, UtcTime::new(2024, 3, 20, 12, 30, 15.0));
    }

    #[test]
    fn parse_date_only() {
        let t: UtcTime = "2024-03-20".parse().unwrap();
        assert_eq!(t, UtcTime::new(2024, 3, 20, 0, 0, 0.0));
    }

    #[test]
    fn parse_rejects_bad_month() {
        assert!(matches!(
            "2024-13-01".parse::<UtcTime>(),
            Err(TimeError::InvalidDate(_))
        ));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!("noon".parse::<UtcTime>(), Err(TimeError::Parse(_))));
    }

    #[test]
    fn parse_rejects_feb_30() {
        assert!("2023-02-29".parse::<UtcTime>().is_err());
        assert!("2024-02-29".parse::<UtcTime>().is_ok());
    }

    #[test]
    fn j2000_epoch() {
        let e = UtcTime::new(2000, 1, 1, 12, 0, 0.0).to_epoch();
        assert!(e.as_j2000_seconds().abs() < 1e-6);
        assert!((e.as_jd() - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn epoch_roundtrip() {
        let t = UtcTime::new(2025, 12, 31, 23, 59, 59.5);
        assert_eq!(UtcTime::from_epoch(t.to_epoch()), t);
    }

    #[test]
    fn weekday_known_dates() {
        // 2000-01-01 was a Saturday, 2024-03-20 a Wednesday.
        assert_eq!(UtcTime::new(2000, 1, 1, 0, 0, 0.0).weekday(), 6);
        assert_eq!(UtcTime::new(2024, 3, 20, 0, 0, 0.0).weekday(), 3);
    }

    #[test]
    fn civil_roundtrip_pre_epoch() {
        let d = days_from_civil(1969, 12, 31);
        assert_eq!(d, -1);
        assert_eq!(civil_from_days(d), (1969, 12, 31));
    }
}
