//! Sky-observing quality from current weather readings.
//!
//! Fetching the readings is the caller's job; this module only scores
//! them.

/// Current conditions at the observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherSample {
    /// Cloud cover, percent.
    pub cloud_cover_pct: f64,
    /// Horizontal visibility, km.
    pub visibility_km: f64,
    /// US air-quality index.
    pub aqi: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObservingConditions {
    Excellent,
    Fair,
    Poor,
}

impl ObservingConditions {
    pub fn from_sample(s: &WeatherSample) -> Self {
        if s.cloud_cover_pct <= 20.0 && s.visibility_km > 8.0 && s.aqi < 100.0 {
            Self::Excellent
        } else if s.cloud_cover_pct <= 50.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent Observing",
            Self::Fair => "Fair Observing",
            Self::Poor => "Poor Conditions",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(cloud: f64, vis: f64, aqi: f64) -> WeatherSample {
        WeatherSample {
            cloud_cover_pct: cloud,
            visibility_km: vis,
            aqi,
        }
    }

    #[test]
    fn clear_clean_sky_is_excellent() {
        assert_eq!(
            ObservingConditions::from_sample(&sample(20.0, 10.0, 50.0)),
            ObservingConditions::Excellent
        );
    }

    #[test]
    fn haze_downgrades_to_fair() {
        assert_eq!(
            ObservingConditions::from_sample(&sample(10.0, 8.0, 50.0)),
            ObservingConditions::Fair
        );
        assert_eq!(
            ObservingConditions::from_sample(&sample(10.0, 20.0, 100.0)),
            ObservingConditions::Fair
        );
    }

    #[test]
    fn overcast_is_poor() {
        assert_eq!(
            ObservingConditions::from_sample(&sample(51.0, 20.0, 10.0)),
            ObservingConditions::Poor
        );
    }
}
