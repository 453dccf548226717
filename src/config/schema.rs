//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the racer.
//! All types derive Serde traits for deserialization from config files.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::race::{Target, DEFAULT_TIMEOUT};

/// Root configuration for the racer.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RacerConfig {
    /// Race defaults.
    pub race: RaceConfig,

    /// HTTP probe settings.
    pub probe: ProbeConfig,

    /// Periodic race monitor settings.
    pub watch: WatchConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Race configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RaceConfig {
    /// How long to wait for the first response, in milliseconds.
    pub timeout_ms: u64,
}

impl RaceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            timeout_ms: u64::try_from(DEFAULT_TIMEOUT.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

/// HTTP probe configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// User-Agent header sent with every probe.
    pub user_agent: String,

    /// TCP connect timeout in milliseconds.
    pub connect_timeout_ms: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("racer/", env!("CARGO_PKG_VERSION")).to_string(),
            connect_timeout_ms: 5_000,
        }
    }
}

/// Periodic race monitor configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Seconds between rounds of races.
    pub interval_secs: u64,

    /// Races to run every round.
    pub races: Vec<WatchedRace>,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            interval_secs: 30,
            races: Vec::new(),
        }
    }
}

/// A named set of targets raced against each other.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WatchedRace {
    /// Identifier for logging/metrics.
    pub name: String,

    /// Targets to race (two or more).
    pub targets: Vec<Target>,

    /// Override of `race.timeout_ms` for this race.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
