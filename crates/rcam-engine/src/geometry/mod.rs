//! Closed-loop track geometry.
//!
//! - `path`: the path provider seam and a polyline implementation
//! - `track`: wraparound-aware relative offsets, bearings and quadrants

pub mod path;
pub mod track;

pub use path::{ClosedPath, PathGeometryProvider};
pub use track::{angle_dot, quadrant, relative_offset, TrackView};
