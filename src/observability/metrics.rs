//! Metrics collection and exposition.
//!
//! # Metrics
//! - `racer_races_total` (counter): races by outcome (`winner`, `timeout`)
//! - `racer_race_duration_seconds` (histogram): time to decide a race
//! - `racer_wins_total` (counter): wins by target
//! - `racer_probe_failures_total` (counter): probes that errored
//!
//! Recording is a no-op until a recorder is installed with [`init_metrics`].

use std::net::SocketAddr;
use std::time::Duration;

use metrics_exporter_prometheus::PrometheusBuilder;

use crate::race::Target;

/// Install the Prometheus exporter listening on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_race_won(winner: &Target, elapsed: Duration) {
    metrics::counter!("racer_races_total", "outcome" => "winner").increment(1);
    metrics::counter!("racer_wins_total", "target" => winner.to_string()).increment(1);
    metrics::histogram!("racer_race_duration_seconds").record(elapsed.as_secs_f64());
}

pub fn record_race_timeout(elapsed: Duration) {
    metrics::counter!("racer_races_total", "outcome" => "timeout").increment(1);
    metrics::histogram!("racer_race_duration_seconds").record(elapsed.as_secs_f64());
}

pub fn record_probe_failure() {
    metrics::counter!("racer_probe_failures_total").increment(1);
}
