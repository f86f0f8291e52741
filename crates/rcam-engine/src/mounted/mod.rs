//! Vehicle-mounted camera rigs.
//!
//! # Module Structure
//!
//! - `config`: Targeting window and presets for a rig
//! - `rig`: Look-at target culling and scoring, quadrant camera banks
//! - `director`: Follow and look-at vehicle choice in front of the rig

pub mod config;
pub mod director;
pub mod rig;

pub use config::MountRigConfig;
pub use director::MountedCameraDirector;
pub use rig::MountedCameraRig;
