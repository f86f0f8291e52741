//! Oval circuit geometry for the simulation.

use std::f64::consts::PI;

use glam::DVec3;
use rcam_engine::{ClosedPath, EngineResult, PathGeometryProvider};

/// Polyline segments per bend.
const BEND_SEGMENTS: usize = 24;

/// A stadium-shaped oval: two straights joined by half-circle bends.
///
/// Straights are twice the bend radius long. Travel starts at the bottom of
/// the right-hand straight heading +Z, which is where the loop seam sits.
pub fn oval_circuit(radius: f64) -> EngineResult<ClosedPath> {
    let half_straight = radius;
    let mut points = Vec::with_capacity(2 * BEND_SEGMENTS + 2);
    points.push(DVec3::new(radius, 0.0, -half_straight));

    // Top bend, right to left.
    for k in 0..=BEND_SEGMENTS {
        let theta = PI * k as f64 / BEND_SEGMENTS as f64;
        points.push(DVec3::new(radius * theta.cos(), 0.0, half_straight + radius * theta.sin()));
    }
    // Bottom bend, left to right, stopping short of the start point.
    for k in 0..BEND_SEGMENTS {
        let theta = PI + PI * k as f64 / BEND_SEGMENTS as f64;
        points.push(DVec3::new(radius * theta.cos(), 0.0, -half_straight + radius * theta.sin()));
    }

    ClosedPath::built(points)
}

/// World position and heading of a track sample.
pub fn world_pose(path: &dyn PathGeometryProvider, distance_along: f64, lateral: f64) -> EngineResult<(DVec3, DVec3)> {
    let frame = path.sample(distance_along)?;
    Ok((frame.point + frame.perpendicular * lateral, frame.tangent))
}
