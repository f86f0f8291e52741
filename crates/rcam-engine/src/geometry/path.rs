//! Closed-loop track path and point projection.

use glam::DVec3;
use rcam_models::PathFrame;

use crate::error::{EngineError, EngineResult};

/// Source of track geometry.
///
/// Built once from track data and read-only afterwards. Queries made before
/// the geometry is built fail with [`EngineError::PathNotBuilt`], which callers
/// treat as "skip this tick".
pub trait PathGeometryProvider {
    /// Whether the path has been precomputed.
    fn is_built(&self) -> bool;

    /// Length of the whole loop.
    fn total_length(&self) -> EngineResult<f64>;

    /// Project a world point onto the path.
    fn project(&self, point: DVec3) -> EngineResult<PathFrame>;

    /// Frame at a distance along the path, wrapped into the loop.
    fn sample(&self, distance_along: f64) -> EngineResult<PathFrame>;
}

/// Precomputed per-segment data.
#[derive(Debug, Clone)]
struct Segments {
    /// Distance along the path at the start of each segment
    starts: Vec<f64>,
    lengths: Vec<f64>,
    total: f64,
}

/// A closed polyline through a list of control points.
///
/// The last point connects back to the first, so the loop seam sits at the
/// first point (distance 0).
#[derive(Debug, Clone)]
pub struct ClosedPath {
    points: Vec<DVec3>,
    up: DVec3,
    segments: Option<Segments>,
}

impl ClosedPath {
    /// Create an unbuilt path with Y as the up axis.
    pub fn new(points: Vec<DVec3>) -> Self {
        Self {
            points,
            up: DVec3::Y,
            segments: None,
        }
    }

    /// Create a path and build it immediately.
    pub fn built(points: Vec<DVec3>) -> EngineResult<Self> {
        let mut path = Self::new(points);
        path.build()?;
        Ok(path)
    }

    /// Set the up axis used to derive lateral directions.
    pub fn with_up(mut self, up: DVec3) -> Self {
        self.up = up.normalize_or(DVec3::Y);
        self
    }

    /// Precompute segment lengths.
    pub fn build(&mut self) -> EngineResult<()> {
        if self.points.len() < 3 {
            return Err(EngineError::degenerate_path(format!(
                "a closed path needs at least 3 points, got {}",
                self.points.len()
            )));
        }

        let n = self.points.len();
        let mut starts = Vec::with_capacity(n);
        let mut lengths = Vec::with_capacity(n);
        let mut total = 0.0;

        for i in 0..n {
            let length = self.points[i].distance(self.points[(i + 1) % n]);
            starts.push(total);
            lengths.push(length);
            total += length;
        }

        if total <= f64::EPSILON || !total.is_finite() {
            return Err(EngineError::degenerate_path(format!("invalid total length {}", total)));
        }

        self.segments = Some(Segments { starts, lengths, total });
        Ok(())
    }

    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    fn segments(&self) -> EngineResult<&Segments> {
        self.segments.as_ref().ok_or(EngineError::PathNotBuilt)
    }

    fn segment_vector(&self, index: usize) -> (DVec3, DVec3) {
        let a = self.points[index];
        let b = self.points[(index + 1) % self.points.len()];
        (a, b - a)
    }

    fn frame_on_segment(&self, segments: &Segments, index: usize, t: f64, query: Option<DVec3>) -> PathFrame {
        let (a, d) = self.segment_vector(index);
        let point = a + d * t;
        let tangent = d.normalize_or_zero();
        let mut perpendicular = self.up.cross(tangent).normalize_or_zero();
        if perpendicular == DVec3::ZERO {
            perpendicular = DVec3::X;
        }

        let mut distance_along = segments.starts[index] + segments.lengths[index] * t;
        if distance_along >= segments.total {
            distance_along -= segments.total;
        }

        let (distance_to_path, lateral_offset) = match query {
            Some(q) => {
                let delta = q - point;
                (delta.length(), delta.dot(perpendicular))
            }
            None => (0.0, 0.0),
        };

        PathFrame {
            point,
            tangent,
            perpendicular,
            distance_along,
            total_length: segments.total,
            distance_to_path,
            lateral_offset,
        }
    }
}

impl PathGeometryProvider for ClosedPath {
    fn is_built(&self) -> bool {
        self.segments.is_some()
    }

    fn total_length(&self) -> EngineResult<f64> {
        Ok(self.segments()?.total)
    }

    fn project(&self, point: DVec3) -> EngineResult<PathFrame> {
        let segments = self.segments()?;

        let mut best = (0usize, 0.0f64);
        let mut best_distance_sq = f64::INFINITY;

        for index in 0..self.points.len() {
            let (a, d) = self.segment_vector(index);
            let length_sq = d.length_squared();
            let t = if length_sq > 0.0 {
                ((point - a).dot(d) / length_sq).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let distance_sq = point.distance_squared(a + d * t);
            if distance_sq < best_distance_sq {
                best_distance_sq = distance_sq;
                best = (index, t);
            }
        }

        Ok(self.frame_on_segment(segments, best.0, best.1, Some(point)))
    }

    fn sample(&self, distance_along: f64) -> EngineResult<PathFrame> {
        let segments = self.segments()?;
        let distance = distance_along.rem_euclid(segments.total);

        // Last segment whose start is <= distance.
        let index = segments
            .starts
            .partition_point(|start| *start <= distance)
            .saturating_sub(1);
        let length = segments.lengths[index];
        let t = if length > 0.0 {
            ((distance - segments.starts[index]) / length).clamp(0.0, 1.0)
        } else {
            0.0
        };

        Ok(self.frame_on_segment(segments, index, t, None))
    }
}
