//! Optional TOML configuration.
//!
//! Every knob has a default, so embedding applications can ignore this
//! module entirely; a config file only overrides the keys it names.

use std::path::PathBuf;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CALENDAR_DAYS, DEFAULT_FEED_TTL_SECS, DEFAULT_MIN_NIGHTS, SEARCH_HORIZON_DAYS,
};
use crate::error::{EstadiaError, EstadiaResult};

fn default_feed_ttl_secs() -> u64 {
    DEFAULT_FEED_TTL_SECS
}

fn default_calendar_horizon_days() -> i64 {
    DEFAULT_CALENDAR_DAYS
}

fn default_search_horizon_days() -> i64 {
    SEARCH_HORIZON_DAYS
}

fn default_min_nights() -> i64 {
    DEFAULT_MIN_NIGHTS
}

/// Availability engine settings, loadable from
/// `<config_dir>/estadia/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstadiaConfig {
    /// How long a fetched snapshot stays fresh before the cache
    /// revalidates it.
    #[serde(default = "default_feed_ttl_secs")]
    pub feed_ttl_secs: u64,

    /// Days rendered by the booking calendar.
    #[serde(default = "default_calendar_horizon_days")]
    pub calendar_horizon_days: i64,

    /// Forward window scanned for the next open stay.
    #[serde(default = "default_search_horizon_days")]
    pub search_horizon_days: i64,

    /// Minimum consecutive free nights for a bookable stay.
    #[serde(default = "default_min_nights")]
    pub min_nights: i64,
}

impl Default for EstadiaConfig {
    fn default() -> Self {
        EstadiaConfig {
            feed_ttl_secs: DEFAULT_FEED_TTL_SECS,
            calendar_horizon_days: DEFAULT_CALENDAR_DAYS,
            search_horizon_days: SEARCH_HORIZON_DAYS,
            min_nights: DEFAULT_MIN_NIGHTS,
        }
    }
}

impl EstadiaConfig {
    pub fn config_path() -> EstadiaResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| EstadiaError::Config("Could not determine config directory".into()))?
            .join("estadia");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the config file if present, defaults otherwise.
    pub fn load() -> EstadiaResult<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            Self::parse(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn parse(content: &str) -> EstadiaResult<Self> {
        toml::from_str(content).map_err(|e| EstadiaError::Config(e.to_string()))
    }

    pub fn feed_ttl(&self) -> Duration {
        Duration::seconds(self.feed_ttl_secs as i64)
    }
}
