//! Structured logging for simulation sessions.
//!
//! Every event carries the session id and seed, so a run can be replayed from
//! its logs. Per-tick events add where the broadcast stood at that tick.

use rcam_engine::EngineError;
use rcam_models::{CameraId, TriggerId};
use tracing::{error, info, warn, Span};
use uuid::Uuid;

use crate::error::SimError;

/// Where the broadcast stands at one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    pub tick: u64,
    pub sim_secs: f64,
    /// Camera on screen
    pub camera: Option<CameraId>,
    pub trigger: Option<TriggerId>,
}

/// Session logger for one simulation run.
#[derive(Debug, Clone)]
pub struct SessionLogger {
    session_id: String,
    seed: Option<u64>,
}

impl SessionLogger {
    pub fn new(session_id: &Uuid, seed: Option<u64>) -> Self {
        Self {
            session_id: session_id.to_string(),
            seed,
        }
    }

    /// Log the circuit and field the session starts with.
    pub fn log_start(&self, vehicles: usize, track_length: f64, duration_secs: f64) {
        info!(
            session_id = %self.session_id,
            seed = ?self.seed,
            vehicles,
            track_length,
            duration_secs,
            "Session started"
        );
    }

    /// The shot director failed validation; the run continues without it.
    pub fn log_director_disabled(&self, error: &EngineError) {
        warn!(
            session_id = %self.session_id,
            error = %error,
            "Session running without shot director"
        );
    }

    /// A camera reached the screen.
    pub fn log_shot_switch(&self, at: &TickContext) {
        info!(
            session_id = %self.session_id,
            tick = at.tick,
            sim_secs = at.sim_secs,
            camera = ?at.camera,
            trigger = ?at.trigger,
            "Shot on air"
        );
    }

    pub fn log_progress(&self, at: &TickContext, shot_switches: u64) {
        info!(
            session_id = %self.session_id,
            tick = at.tick,
            sim_secs = at.sim_secs,
            camera = ?at.camera,
            trigger = ?at.trigger,
            shot_switches,
            "Session progress"
        );
    }

    /// A tick failed and the run stops.
    pub fn log_tick_failure(&self, at: &TickContext, error: &SimError) {
        error!(
            session_id = %self.session_id,
            tick = at.tick,
            sim_secs = at.sim_secs,
            camera = ?at.camera,
            error = %error,
            "Session tick failed"
        );
    }

    pub fn log_completion(&self, at: &TickContext, shot_switches: u64, peak_shake_amplitude: f64, interrupted: bool) {
        info!(
            session_id = %self.session_id,
            ticks = at.tick,
            sim_secs = at.sim_secs,
            camera = ?at.camera,
            shot_switches,
            peak_shake_amplitude,
            interrupted,
            "Session completed"
        );
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Span wrapping the whole run.
    pub fn create_span(&self) -> Span {
        tracing::info_span!("sim_session", session_id = %self.session_id, seed = ?self.seed)
    }
}
