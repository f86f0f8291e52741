//! Engine metrics.
//!
//! Recorded through the `metrics` facade; without an installed recorder these
//! calls are no-ops.

use metrics::{counter, gauge};

/// Metric names as constants for consistency.
pub mod names {
    // Shot switching
    pub const SHOT_SWITCHES_TOTAL: &str = "rcam_shot_switches_total";
    pub const SHOT_SWITCHES_REFUSED_TOTAL: &str = "rcam_shot_switches_refused_total";
    pub const TRANSITIONS_SUPERSEDED_TOTAL: &str = "rcam_transitions_superseded_total";

    // Camera shake
    pub const SHAKE_IMPULSES_TOTAL: &str = "rcam_shake_impulses_total";
    pub const SHAKE_AMPLITUDE: &str = "rcam_shake_amplitude";
}

/// Record a completed shot switch.
pub fn record_shot_switch(kind: &'static str) {
    let labels = [("kind", kind)];
    counter!(names::SHOT_SWITCHES_TOTAL, &labels).increment(1);
}

/// Record a switch that was refused before it started.
pub fn record_switch_refused(reason: &'static str) {
    let labels = [("reason", reason)];
    counter!(names::SHOT_SWITCHES_REFUSED_TOTAL, &labels).increment(1);
}

/// Record a pending transition replaced by a newer one.
pub fn record_transition_superseded() {
    counter!(names::TRANSITIONS_SUPERSEDED_TOTAL).increment(1);
}

/// Record a shake impulse that passed the magnitude threshold.
pub fn record_shake_impulse() {
    counter!(names::SHAKE_IMPULSES_TOTAL).increment(1);
}

/// Record the current aggregate shake amplitude of a camera.
pub fn record_shake_amplitude(camera: String, amplitude: f64) {
    let labels = [("camera", camera)];
    gauge!(names::SHAKE_AMPLITUDE, &labels).set(amplitude);
}
