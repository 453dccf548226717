//! Race resolution subsystem.
//!
//! # Data Flow
//! ```text
//! race(a, b, timeout)
//!     → spawn probe(a) ─┐
//!     → spawn probe(b) ─┤
//!     → start deadline ─┤
//!                       ▼
//!     first of { a done, b done, deadline }
//!     → Ok(winner) | Err(RaceError::Timeout { a, b })
//! ```
//!
//! # Design Decisions
//! - Exactly one outcome per race, decided at a single wait point
//! - No retries; a failed probe just never completes
//! - Nothing is shared between races

pub mod error;
pub mod resolver;
pub mod target;

pub use error::{RaceError, RaceResult, TargetError};
pub use resolver::{race, race_with_timeout, Racer, DEFAULT_TIMEOUT};
pub use target::Target;
