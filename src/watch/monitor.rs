//! Periodic race monitor.
//!
//! # Responsibilities
//! - Run every configured race on a fixed interval
//! - Log and record each outcome
//! - Stop when the shutdown signal fires

use std::time::Duration;

use futures_util::future::join_all;
use tokio::sync::broadcast;
use tokio::time;

use crate::config::{WatchConfig, WatchedRace};
use crate::probe::{HttpProbe, Probe};
use crate::race::{RaceResult, Racer, Target};

/// Outcome of one watched race in a round.
#[derive(Debug)]
pub struct RaceReport {
    pub name: String,
    pub outcome: RaceResult<Target>,
}

pub struct RaceMonitor<P = HttpProbe> {
    racer: Racer<P>,
    config: WatchConfig,
}

impl<P: Probe> RaceMonitor<P> {
    pub fn new(racer: Racer<P>, config: WatchConfig) -> Self {
        Self { racer, config }
    }

    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        if self.config.races.is_empty() {
            tracing::info!("No races configured, monitor exiting");
            return;
        }

        tracing::info!(
            interval = self.config.interval_secs,
            races = self.config.races.len(),
            "Race monitor starting"
        );

        let interval = Duration::from_secs(self.config.interval_secs);
        let mut ticker = time::interval(interval);

        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                _ = shutdown.recv() => break,
            }

            // A round can last as long as the race timeout.
            let stopped = tokio::select! {
                _ = self.run_round() => false,
                _ = shutdown.recv() => true,
            };
            if stopped {
                break;
            }
        }

        tracing::info!("Race monitor received shutdown signal, exiting loop");
    }

    /// Run every configured race once, concurrently.
    pub async fn run_round(&self) -> Vec<RaceReport> {
        join_all(self.config.races.iter().map(|race| self.run_one(race))).await
    }

    async fn run_one(&self, race: &WatchedRace) -> RaceReport {
        let timeout = race
            .timeout_ms
            .map(Duration::from_millis)
            .unwrap_or_else(|| self.racer.timeout());

        let outcome = match race.targets.as_slice() {
            [a, b] => self.racer.race_with_timeout(a, b, timeout).await,
            targets => self.racer.race_many(targets, timeout).await,
        };

        match &outcome {
            Ok(winner) => tracing::info!(race = %race.name, winner = %winner, "Race decided"),
            Err(e) => tracing::warn!(race = %race.name, error = %e, "Race failed"),
        }

        RaceReport {
            name: race.name.clone(),
            outcome,
        }
    }
}
