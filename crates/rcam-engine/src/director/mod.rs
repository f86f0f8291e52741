//! Shot director: trigger hysteresis and prewarmed camera switches.

pub mod config;
pub mod shot_director;
pub mod transition;

pub use config::DirectorConfig;
pub use shot_director::{ActiveShotState, DirectorContext, DirectorStatus, ShotDirector, TickReport};
pub use transition::{Transition, TransitionScheduler};
