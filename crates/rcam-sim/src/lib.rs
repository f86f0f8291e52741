//! Headless race broadcast simulation.
//!
//! Drives the camera engine with simulated traffic on a demo circuit:
//! - Oval circuit with track-side, mounted and shakeable cameras
//! - Lapping cars that trip shot triggers and brush past the barrier cam
//! - Batch or real-time tick loop with graceful shutdown

pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod runner;
pub mod scenario;
pub mod telemetry;
pub mod track;

pub use config::SimConfig;
pub use error::{SimError, SimResult};
pub use logging::{SessionLogger, TickContext};
pub use runner::{RunSummary, SimRunner};
pub use scenario::{Scenario, SHAKE_CAMERA};
pub use telemetry::{SimVehicle, TrafficField};
