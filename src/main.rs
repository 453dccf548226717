//! `racer`: find out which of several URLs answers first.
//!
//! ```text
//! racer race https://a.example https://b.example --timeout-ms 2000
//! racer --config racer.toml watch
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tokio::time::Instant;

use racer::config::{self, RacerConfig};
use racer::lifecycle::{runtime, signals, Shutdown};
use racer::observability::{logging, metrics};
use racer::watch::RaceMonitor;
use racer::{HttpProbe, Racer, Target};

#[derive(Parser)]
#[command(name = "racer", version)]
#[command(about = "Race URLs against each other and report the first to respond", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Race two or more URLs once and print the winner
    Race {
        /// URLs to race
        #[arg(required = true, num_args = 2..)]
        targets: Vec<Target>,

        /// Give up after this many milliseconds (default: race.timeout_ms)
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
        timeout_ms: Option<u64>,

        /// Print a JSON report instead of the bare winner
        #[arg(long)]
        json: bool,
    },
    /// Run the configured races periodically until interrupted
    Watch,
}

#[derive(Serialize)]
struct Report<'a> {
    winner: Option<&'a Target>,
    error: Option<String>,
    targets: &'a [Target],
    timeout_ms: u64,
    elapsed_ms: u64,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match config::load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("racer: {}: {}", path.display(), e);
                return ExitCode::from(2);
            }
        },
        None => RacerConfig::default(),
    };

    logging::init_logging(&config.observability);
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "racer starting");

    let result = runtime::block_on_detached(run(cli.command, config)).unwrap_or_else(|e| Err(e.into()));

    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "racer failed");
            eprintln!("racer: {}", e);
            ExitCode::from(2)
        }
    }
}

async fn run(command: Commands, config: RacerConfig) -> Result<ExitCode, Box<dyn std::error::Error>> {
    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr);
    }

    let probe = HttpProbe::new(&config.probe)?;
    let racer = Racer::new(probe).with_timeout(config.race.timeout());

    match command {
        Commands::Race { targets, timeout_ms, json } => {
            let timeout = timeout_ms.map(Duration::from_millis).unwrap_or_else(|| racer.timeout());

            let started = Instant::now();
            let outcome = match targets.as_slice() {
                [a, b] => racer.race_with_timeout(a, b, timeout).await,
                _ => racer.race_many(&targets, timeout).await,
            };
            let elapsed = started.elapsed();

            if json {
                let report = Report {
                    winner: outcome.as_ref().ok(),
                    error: outcome.as_ref().err().map(ToString::to_string),
                    targets: &targets,
                    timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
                    elapsed_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                match &outcome {
                    Ok(winner) => println!("{}", winner),
                    Err(e) => eprintln!("racer: {}", e),
                }
            }

            Ok(if outcome.is_ok() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        Commands::Watch => {
            let shutdown = Shutdown::new();
            let monitor = RaceMonitor::new(racer, config.watch);
            let receiver = shutdown.subscribe();

            tokio::spawn(signals::shutdown_on_signal(shutdown));
            monitor.run(receiver).await;

            tracing::info!("Shutdown complete");
            Ok(ExitCode::SUCCESS)
        }
    }
}
