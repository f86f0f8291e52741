//! Cross-component scenarios for the camera engine.

pub mod director_tests;
pub mod fixtures;
pub mod mounted_tests;
pub mod shake_tests;
