//! Watch subsystem.
//!
//! # Data Flow
//! ```text
//! Periodic timer
//!     → race every configured target set
//!     → log winner / timeout
//!     → metrics
//! ```

pub mod monitor;

pub use monitor::{RaceMonitor, RaceReport};
