//! Quadrant-partitioned camera banks for vehicle-mounted rigs.

use serde::{Deserialize, Serialize};

use crate::{CameraId, Quadrant, WeightedOption};

/// Mounted cameras grouped by the quadrant of the look-at target they frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MountBank {
    pub front_left: Vec<WeightedOption<CameraId>>,
    pub front_right: Vec<WeightedOption<CameraId>>,
    pub back_left: Vec<WeightedOption<CameraId>>,
    pub back_right: Vec<WeightedOption<CameraId>>,
}

impl MountBank {
    /// Weighted cameras for a quadrant.
    pub fn quadrant(&self, quadrant: Quadrant) -> &[WeightedOption<CameraId>] {
        match quadrant {
            Quadrant::FrontLeft => &self.front_left,
            Quadrant::FrontRight => &self.front_right,
            Quadrant::BackLeft => &self.back_left,
            Quadrant::BackRight => &self.back_right,
        }
    }

    /// De-duplicated union of the front quadrants, in first-seen order.
    pub fn front_facing(&self) -> Vec<CameraId> {
        unique_cameras([self.front_left.as_slice(), self.front_right.as_slice()])
    }

    /// De-duplicated union of the back quadrants, in first-seen order.
    pub fn rear_facing(&self) -> Vec<CameraId> {
        unique_cameras([self.back_left.as_slice(), self.back_right.as_slice()])
    }

    /// Every camera referenced by the bank, de-duplicated.
    pub fn all_cameras(&self) -> Vec<CameraId> {
        unique_cameras([
            self.front_left.as_slice(),
            self.front_right.as_slice(),
            self.back_left.as_slice(),
            self.back_right.as_slice(),
        ])
    }
}

fn unique_cameras<const N: usize>(banks: [&[WeightedOption<CameraId>]; N]) -> Vec<CameraId> {
    let mut cameras = Vec::new();
    for option in banks.into_iter().flatten() {
        if !cameras.contains(option.item()) {
            cameras.push(*option.item());
        }
    }
    cameras
}
