//! First-to-respond race resolver.
//!
//! Probes targets concurrently and reports whichever responds first, or a
//! timeout naming every target when none respond in time.
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use std::time::Duration;
//! use racer::{race_with_timeout, Target};
//!
//! let a = Target::new("http://www.facebook.com")?;
//! let b = Target::new("http://www.quii.dev")?;
//! let winner = race_with_timeout(&a, &b, Duration::from_secs(5)).await?;
//! println!("{winner} answered first");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod lifecycle;
pub mod observability;
pub mod probe;
pub mod race;
pub mod watch;

pub use config::RacerConfig;
pub use lifecycle::Shutdown;
pub use probe::{HttpProbe, Probe, ProbeError};
pub use race::{race, race_with_timeout, RaceError, RaceResult, Racer, Target, DEFAULT_TIMEOUT};
