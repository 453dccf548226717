//! Probe subsystem.
//!
//! # Data Flow
//! ```text
//! Racer spawns one task per target:
//!     → Probe::ping(target)
//!     → Ok(())  => completion signal sent to the racer
//!     → Err(_)  => no signal, the target simply never responds
//! ```
//!
//! # Design Decisions
//! - The racer only consumes completion, never the transport
//! - Probes return `'static` futures so they can outlive the race that started them
//! - A failing probe is indistinguishable from a slow one

pub mod http;

use futures_util::future::BoxFuture;
use thiserror::Error;

use crate::race::Target;

pub use http::HttpProbe;

/// Errors a probe can fail with. The racer logs these and moves on.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The HTTP request could not be completed.
    #[error("HTTP probe failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The target could not be reached for another reason.
    #[error("probe failed: {0}")]
    Unreachable(String),
}

/// Something that can attempt to reach a [`Target`] and report completion.
pub trait Probe: Send + Sync + 'static {
    /// Attempt to reach `target` once.
    ///
    /// Resolves to `Ok(())` when the target responded. The returned future
    /// must not borrow from `self`; it runs detached from the race.
    fn ping(&self, target: &Target) -> BoxFuture<'static, Result<(), ProbeError>>;
}
