#![deny(unreachable_patterns)]
//! Camera selection, targeting and shot-transition engine.
//!
//! This crate provides:
//! - Closed-loop path geometry with wraparound-aware relative offsets
//! - Weighted-random selection over camera options
//! - Distance and bearing priority scoring for look-at targets
//! - Vehicle-mounted camera rigs with quadrant banks and culling
//! - Track-side shot triggers and their resolution to cameras
//! - A shot director with switch hysteresis and prewarmed transitions
//! - Collision-driven camera shake
//!
//! Everything runs on the caller's tick; nothing here spawns threads or
//! blocks.

pub mod cameras;
pub mod director;
pub mod error;
pub mod geometry;
pub mod metrics;
pub mod mounted;
pub mod sampler;
pub mod scoring;
pub mod shake;
pub mod telemetry;
pub mod triggers;

pub use cameras::{CameraRegistry, CameraState, HeadlessCamera, RenderTarget, IDLE_PRIORITY, PRESENTED_PRIORITY};
pub use director::{ActiveShotState, DirectorConfig, DirectorContext, DirectorStatus, ShotDirector, TickReport};
pub use error::{EngineError, EngineResult};
pub use geometry::{ClosedPath, PathGeometryProvider, TrackView};
pub use mounted::{MountRigConfig, MountedCameraDirector, MountedCameraRig};
pub use scoring::TargetPriorityScorer;
pub use shake::{CameraShake, PassByDetector, ShakeAggregator, ShakeConfig, ShakeSignal, Shaker};
pub use telemetry::{StaticTelemetry, VehicleTelemetry};
pub use triggers::{author_trigger, ShotResolution, ShotTriggerSequencer};
