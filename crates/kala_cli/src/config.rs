use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "kala.toml";

/// Top-level kala configuration.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct KalaConfig {
    /// Observer position.
    #[serde(default)]
    pub location: LocationToml,

    /// Panchang search settings.
    #[serde(default)]
    pub panchang: PanchangToml,

    /// Refresh loop settings.
    #[serde(default)]
    pub watch: WatchToml,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LocationToml {
    #[serde(default = "default_lat")]
    pub lat: f64,
    #[serde(default = "default_lon")]
    pub lon: f64,
    #[serde(default)]
    pub alt: f64,
}

impl Default for LocationToml {
    fn default() -> Self {
        Self {
            lat: default_lat(),
            lon: default_lon(),
            alt: 0.0,
        }
    }
}

// New Delhi
fn default_lat() -> f64 {
    28.6139
}
fn default_lon() -> f64 {
    77.2090
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PanchangToml {
    #[serde(default = "default_ayanamsha")]
    pub ayanamsha: String,
    #[serde(default = "default_search_window_days")]
    pub search_window_days: f64,
}

impl Default for PanchangToml {
    fn default() -> Self {
        Self {
            ayanamsha: default_ayanamsha(),
            search_window_days: default_search_window_days(),
        }
    }
}

fn default_ayanamsha() -> String {
    "linear".to_string()
}
fn default_search_window_days() -> f64 {
    0.7
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct WatchToml {
    #[serde(default = "default_interval_secs")]
    pub interval_secs: f64,
}

impl Default for WatchToml {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

fn default_interval_secs() -> f64 {
    1.0
}

/// Parse a config document.
pub fn parse(toml_str: &str) -> Result<KalaConfig> {
    toml::from_str(toml_str).context("failed to parse TOML config")
}

/// Load the config at `path`, or `./kala.toml` if it exists, or defaults.
pub fn load(path: Option<&Path>) -> Result<KalaConfig> {
    let path = match path {
        Some(p) => p,
        None => {
            let fallback = Path::new(DEFAULT_CONFIG_FILE);
            if !fallback.exists() {
                debug!("no config file, using defaults");
                return Ok(KalaConfig::default());
            }
            fallback
        }
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    debug!(path = %path.display(), "config loaded");
    parse(&toml_str)
}
