//! Shared data models for the racecam shot director.
//!
//! This crate provides Serde-serializable types for:
//! - Camera, vehicle, trigger and stunt bank identifiers
//! - Weighted options used by weighted-random selection
//! - Track-relative positions, offsets and quadrants
//! - Camera kinds and their capability flags
//! - Shot triggers and mounted camera banks
//! - Collision events consumed by camera shake

pub mod camera;
pub mod collision;
pub mod ids;
pub mod mount;
pub mod shot;
pub mod track;
pub mod weighted;

// Re-export common types
pub use camera::{CameraKind, CameraSpec};
pub use collision::CollisionEvent;
pub use ids::{CameraId, StuntBankId, TriggerId, VehicleId};
pub use mount::MountBank;
pub use shot::{LevelShots, ShotKind, ShotTrigger};
pub use track::{PathFrame, Quadrant, RelativeOffset, TrackPosition};
pub use weighted::WeightedOption;
