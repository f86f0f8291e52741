//! Reactive camera shake.
//!
//! # Module Structure
//!
//! - `config`: Thresholds, scalars and noise limits
//! - `tween`: Easing curves for impulse envelopes
//! - `aggregator`: Impulse envelopes summed into a camera noise signal
//! - `pass_by`: Close-pass prediction for vehicles passing a camera

pub mod aggregator;
pub mod config;
pub mod pass_by;
pub mod tween;

pub use aggregator::{CameraShake, ShakeAggregator, ShakeImpulse, ShakePhase, ShakeSignal};
pub use config::ShakeConfig;
pub use pass_by::{estimate_pass, PassByDetector, Shaker};
pub use tween::{Ease, Tween};
