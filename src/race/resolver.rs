//! First-to-respond race between probed targets.
//!
//! # Responsibilities
//! - Probe every target concurrently, one detached task per target
//! - Report the first target whose probe completes
//! - Report a timeout naming every target when the deadline wins
//!
//! # Design Decisions
//! - Each probe owns a single-shot channel; success sends, failure drops it
//! - Losing probes are never joined or cancelled, only disregarded
//! - Completions take precedence over an expired deadline at the decision point

use std::sync::Arc;
use std::time::Duration;

use futures_util::stream::{FuturesUnordered, StreamExt};
use tokio::sync::oneshot;
use tokio::time::{self, Instant};

use crate::observability::metrics;
use crate::probe::{HttpProbe, Probe};
use crate::race::error::{RaceError, RaceResult};
use crate::race::target::Target;

/// Deadline used when none is given explicitly.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Races targets against each other using a [`Probe`].
pub struct Racer<P = HttpProbe> {
    probe: Arc<P>,
    timeout: Duration,
}

impl<P> Clone for Racer<P> {
    fn clone(&self) -> Self {
        Self {
            probe: self.probe.clone(),
            timeout: self.timeout,
        }
    }
}

impl Default for Racer<HttpProbe> {
    fn default() -> Self {
        Self::new(HttpProbe::default())
    }
}

impl<P: Probe> Racer<P> {
    /// Create a racer using [`DEFAULT_TIMEOUT`].
    pub fn new(probe: P) -> Self {
        Self {
            probe: Arc::new(probe),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Replace the timeout used by [`Racer::race`].
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Race `a` against `b` with the racer's configured timeout.
    pub async fn race(&self, a: &Target, b: &Target) -> RaceResult<Target> {
        self.race_with_timeout(a, b, self.timeout).await
    }

    /// Race `a` against `b`, giving up after `timeout`.
    ///
    /// Returns whichever target's probe completes first. A probe that fails
    /// never completes, so the race keeps waiting on the other target or the
    /// deadline. If both targets respond at effectively the same time either
    /// may be reported.
    pub async fn race_with_timeout(
        &self,
        a: &Target,
        b: &Target,
        timeout: Duration,
    ) -> RaceResult<Target> {
        let started = Instant::now();
        let mut done_a = self.spawn_probe(a);
        let mut done_b = self.spawn_probe(b);

        let outcome = tokio::select! {
            biased;

            Ok(()) = &mut done_a => Ok(a.clone()),
            Ok(()) = &mut done_b => Ok(b.clone()),
            () = time::sleep(timeout) => Err(RaceError::Timeout {
                targets: vec![a.clone(), b.clone()],
                timeout,
            }),
        };

        report(&outcome, started.elapsed());
        outcome
    }

    /// Race any number of targets, giving up after `timeout`.
    ///
    /// Fails with [`RaceError::NoTargets`] when `targets` is empty.
    pub async fn race_many(&self, targets: &[Target], timeout: Duration) -> RaceResult<Target> {
        if targets.is_empty() {
            return Err(RaceError::NoTargets);
        }

        let started = Instant::now();
        let deadline = started + timeout;

        let mut pending: FuturesUnordered<_> = targets
            .iter()
            .map(|target| {
                let done = self.spawn_probe(target);
                let target = target.clone();
                async move { done.await.ok().map(|()| target) }
            })
            .collect();

        let first = async {
            while let Some(finished) = pending.next().await {
                if let Some(winner) = finished {
                    return Some(winner);
                }
            }
            None
        };

        let outcome = match time::timeout_at(deadline, first).await {
            Ok(Some(winner)) => Ok(winner),
            Ok(None) => {
                // Every probe failed; failed targets never respond.
                time::sleep_until(deadline).await;
                Err(RaceError::Timeout {
                    targets: targets.to_vec(),
                    timeout,
                })
            }
            Err(_) => Err(RaceError::Timeout {
                targets: targets.to_vec(),
                timeout,
            }),
        };

        report(&outcome, started.elapsed());
        outcome
    }

    /// Start a detached probe of `target`.
    ///
    /// The receiver resolves with `Ok(())` only if the probe succeeded. The
    /// task holds no reference to the race, so it may finish long after the
    /// outcome was decided.
    fn spawn_probe(&self, target: &Target) -> oneshot::Receiver<()> {
        let (tx, rx) = oneshot::channel();
        let ping = self.probe.ping(target);
        let target = target.clone();

        tokio::spawn(async move {
            match ping.await {
                Ok(()) => {
                    // Receiver is gone once the race is decided.
                    let _ = tx.send(());
                }
                Err(e) => {
                    tracing::debug!(
                        probe_target = %target,
                        error = %e,
                        "Probe failed, treating target as unresponsive"
                    );
                    metrics::record_probe_failure();
                }
            }
        });

        rx
    }
}

fn report(outcome: &RaceResult<Target>, elapsed: Duration) {
    match outcome {
        Ok(winner) => {
            tracing::debug!(winner = %winner, elapsed = ?elapsed, "Race won");
            metrics::record_race_won(winner, elapsed);
        }
        Err(e) => {
            tracing::debug!(error = %e, elapsed = ?elapsed, "Race lost");
            metrics::record_race_timeout(elapsed);
        }
    }
}

/// Race two URLs over HTTP with [`DEFAULT_TIMEOUT`].
pub async fn race(a: &Target, b: &Target) -> RaceResult<Target> {
    race_with_timeout(a, b, DEFAULT_TIMEOUT).await
}

/// Race two URLs over HTTP with an explicit timeout.
pub async fn race_with_timeout(a: &Target, b: &Target, timeout: Duration) -> RaceResult<Target> {
    Racer::default().race_with_timeout(a, b, timeout).await
}
