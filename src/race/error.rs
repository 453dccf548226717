//! Race outcome errors.

use std::time::Duration;

use thiserror::Error;

use crate::race::target::Target;

/// Errors a race can end with.
#[derive(Debug, Error)]
pub enum RaceError {
    /// No target completed its probe before the deadline.
    #[error("timed out after {timeout:?} waiting for {}", join_targets(.targets))]
    Timeout {
        /// Every target that took part, in the order given.
        targets: Vec<Target>,
        timeout: Duration,
    },

    /// A multi-target race was started with nothing to race.
    #[error("no targets to race")]
    NoTargets,
}

impl RaceError {
    /// Targets named by the error, empty for [`RaceError::NoTargets`].
    pub fn targets(&self) -> &[Target] {
        match self {
            RaceError::Timeout { targets, .. } => targets,
            RaceError::NoTargets => &[],
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, RaceError::Timeout { .. })
    }
}

/// Result type for race operations.
pub type RaceResult<T> = Result<T, RaceError>;

/// Errors from constructing a [`Target`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    #[error("target identifier must not be empty")]
    Empty,
}

fn join_targets(targets: &[Target]) -> String {
    match targets {
        [] => String::new(),
        [only] => only.to_string(),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(Target::as_str).collect();
            format!("{} and {}", head.join(", "), last)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets(ids: &[&str]) -> Vec<Target> {
        ids.iter().map(|id| Target::new(*id).unwrap()).collect()
    }

    #[test]
    fn test_timeout_display_names_both_targets() {
        let err = RaceError::Timeout {
            targets: targets(&["http://a", "http://b"]),
            timeout: Duration::from_millis(20),
        };
        assert_eq!(err.to_string(), "timed out after 20ms waiting for http://a and http://b");
        assert!(err.is_timeout());
        assert_eq!(err.targets().len(), 2);
    }

    #[test]
    fn test_timeout_display_many_targets() {
        let err = RaceError::Timeout {
            targets: targets(&["a", "b", "c"]),
            timeout: Duration::from_secs(1),
        };
        assert_eq!(err.to_string(), "timed out after 1s waiting for a, b and c");
    }

    #[test]
    fn test_no_targets() {
        let err = RaceError::NoTargets;
        assert!(!err.is_timeout());
        assert!(err.targets().is_empty());
        assert_eq!(err.to_string(), "no targets to race");
    }
}
