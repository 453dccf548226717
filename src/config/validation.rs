//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, interval > 0)
//! - Check watched races are raceable (named, two or more HTTP targets)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RacerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::RacerConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must be greater than zero")]
    Zero { field: String },

    #[error("watch.races[{index}] has an empty name")]
    UnnamedRace { index: usize },

    #[error("race '{race}' needs at least two targets, found {found}")]
    TooFewTargets { race: String, found: usize },

    #[error("race '{race}' target '{target}' is not an http(s) URL")]
    InvalidTarget { race: String, target: String },

    #[error("unknown log level '{0}'")]
    LogLevel(String),

    #[error("invalid metrics address '{0}'")]
    MetricsAddress(String),
}

fn zero(field: impl Into<String>) -> ValidationError {
    ValidationError::Zero { field: field.into() }
}

/// Validate a parsed configuration, collecting every problem found.
pub fn validate_config(config: &RacerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.race.timeout_ms == 0 {
        errors.push(zero("race.timeout_ms"));
    }
    if config.probe.connect_timeout_ms == 0 {
        errors.push(zero("probe.connect_timeout_ms"));
    }
    if config.watch.interval_secs == 0 {
        errors.push(zero("watch.interval_secs"));
    }

    for (index, race) in config.watch.races.iter().enumerate() {
        if race.name.trim().is_empty() {
            errors.push(ValidationError::UnnamedRace { index });
        }
        if race.targets.len() < 2 {
            errors.push(ValidationError::TooFewTargets {
                race: race.name.clone(),
                found: race.targets.len(),
            });
        }
        if race.timeout_ms == Some(0) {
            errors.push(zero(format!("watch.races[{}].timeout_ms", index)));
        }
        for target in &race.targets {
            if !is_http_url(target.as_str()) {
                errors.push(ValidationError::InvalidTarget {
                    race: race.name.clone(),
                    target: target.to_string(),
                });
            }
        }
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::LogLevel(config.observability.log_level.clone()));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_http_url(raw: &str) -> bool {
    match Url::parse(raw) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host().is_some(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::WatchedRace;
    use crate::race::Target;

    fn watched(name: &str, targets: &[&str]) -> WatchedRace {
        WatchedRace {
            name: name.to_string(),
            targets: targets.iter().map(|t| Target::new(*t).unwrap()).collect(),
            timeout_ms: None,
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&RacerConfig::default()), Ok(()));
    }

    #[test]
    fn test_zero_values_rejected() {
        let mut config = RacerConfig::default();
        config.race.timeout_ms = 0;
        config.probe.connect_timeout_ms = 0;
        config.watch.interval_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0].to_string(), "race.timeout_ms must be greater than zero");
    }

    #[test]
    fn test_watched_races_checked() {
        let mut config = RacerConfig::default();
        config.watch.races.push(watched("ok", &["http://a.example", "https://b.example"]));
        config.watch.races.push(watched("lonely", &["http://a.example"]));
        config.watch.races.push(watched("", &["http://a.example", "ftp://b.example"]));

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::TooFewTargets {
            race: "lonely".into(),
            found: 1
        }));
        assert!(errors.contains(&ValidationError::UnnamedRace { index: 2 }));
        assert!(errors.contains(&ValidationError::InvalidTarget {
            race: "".into(),
            target: "ftp://b.example".into()
        }));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_observability_checked() {
        let mut config = RacerConfig::default();
        config.observability.log_level = "loud".into();
        config.observability.metrics_enabled = true;
        config.observability.metrics_address = "nowhere".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::LogLevel("loud".into()),
                ValidationError::MetricsAddress("nowhere".into()),
            ]
        );
    }
}
