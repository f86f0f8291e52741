//! Simulation metrics and the Prometheus recorder.

use metrics::{counter, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::error::{SimError, SimResult};

/// Install the Prometheus recorder for the process.
pub fn init_metrics() -> SimResult<PrometheusHandle> {
    PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| SimError::metrics_error(e.to_string()))
}

/// Metric names as constants for consistency.
pub mod names {
    pub const SIM_TICKS_TOTAL: &str = "rcam_sim_ticks_total";
    pub const SIM_SKIPPED_TICKS_TOTAL: &str = "rcam_sim_skipped_ticks_total";
    pub const SIM_VEHICLES: &str = "rcam_sim_vehicles";
}

/// Record one simulated tick.
pub fn record_tick() {
    counter!(names::SIM_TICKS_TOTAL).increment(1);
}

/// Record a tick the director skipped.
pub fn record_skipped_tick() {
    counter!(names::SIM_SKIPPED_TICKS_TOTAL).increment(1);
}

/// Record the number of vehicles on track.
pub fn set_vehicle_count(count: usize) {
    gauge!(names::SIM_VEHICLES).set(count as f64);
}
