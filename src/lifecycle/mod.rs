//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Shutdown::trigger
//!
//! Shutdown (shutdown.rs):
//!     trigger → broadcast → watch monitor leaves its loop → exit
//!
//! Runtime (runtime.rs):
//!     block_on(command) → shutdown_background → exit, losers abandoned
//! ```

pub mod runtime;
pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
