//! Runtime ownership for the CLI.
//!
//! # Responsibilities
//! - Build the multi-threaded Tokio runtime
//! - Drive one top-level future to completion
//! - Tear the runtime down without waiting on leftover work
//!
//! Dropping a runtime waits for every `spawn_blocking` task to finish. A
//! request that lost its race may still be inside one (reqwest resolves DNS on
//! the blocking pool), so the runtime is shut down in the background instead.

use std::future::Future;
use std::io;

use tokio::runtime::Builder;

/// Run `future` on a fresh runtime and return its output without waiting
/// for detached tasks.
pub fn block_on_detached<F: Future>(future: F) -> io::Result<F::Output> {
    let runtime = Builder::new_multi_thread().enable_all().build()?;
    let output = runtime.block_on(future);
    runtime.shutdown_background();
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    use futures_util::future::BoxFuture;

    use crate::probe::{Probe, ProbeError};
    use crate::race::{Racer, Target};

    /// Answers "fast" targets at once; anything else blocks a pool thread
    /// for three seconds, the way a slow DNS lookup does.
    struct BlockingLookup;

    impl Probe for BlockingLookup {
        fn ping(&self, target: &Target) -> BoxFuture<'static, Result<(), ProbeError>> {
            let fast = target.as_str().contains("fast");
            Box::pin(async move {
                if !fast {
                    tokio::task::spawn_blocking(|| std::thread::sleep(Duration::from_secs(3)))
                        .await
                        .map_err(|e| ProbeError::Unreachable(e.to_string()))?;
                }
                Ok(())
            })
        }
    }

    #[test]
    fn test_decided_race_does_not_wait_for_blocked_loser() {
        let slow = Target::new("http://slow-dns.example").unwrap();
        let fast = Target::new("http://fast.example").unwrap();

        let started = Instant::now();
        let winner = block_on_detached(async {
            Racer::new(BlockingLookup)
                .race_with_timeout(&slow, &fast, Duration::from_millis(100))
                .await
        })
        .unwrap()
        .unwrap();

        assert_eq!(winner, fast);
        assert!(
            started.elapsed() < Duration::from_secs(2),
            "runtime teardown took {:?}",
            started.elapsed()
        );
    }

    #[test]
    fn test_returns_future_output() {
        assert_eq!(block_on_detached(async { 7 }).unwrap(), 7);
    }
}
