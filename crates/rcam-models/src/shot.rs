//! Shot triggers placed along the track.

use serde::{Deserialize, Serialize};

use crate::{CameraId, StuntBankId, TriggerId, WeightedOption};

/// Kind of shot a trigger can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotKind {
    /// Track-side camera linked to the trigger.
    Level,
    /// Camera mounted on a vehicle.
    Mounted,
}

/// Where a trigger's level shots come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", content = "cameras", rename_all = "snake_case")]
pub enum LevelShots {
    /// Cameras authored directly on the trigger.
    Linked(Vec<WeightedOption<CameraId>>),
    /// Cameras supplied by an external stunt bank.
    Stunt(StuntBankId),
}

impl Default for LevelShots {
    fn default() -> Self {
        LevelShots::Linked(Vec::new())
    }
}

/// A track-side shot trigger.
///
/// Created by an authoring step and read-only to the engine at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotTrigger {
    pub id: TriggerId,
    /// Distance along the track where the trigger sits
    pub distance_along_track: f64,
    /// Same position as a percentage of the loop length
    pub percentage_along_track: f64,
    level_weight: f64,
    mounted_weight: f64,
    pub level_shots: LevelShots,
}

impl ShotTrigger {
    /// Create a trigger on a loop of `track_length`.
    ///
    /// Shot weights are clamped to be non-negative.
    pub fn new(
        id: TriggerId,
        distance_along_track: f64,
        track_length: f64,
        level_weight: f64,
        mounted_weight: f64,
        level_shots: LevelShots,
    ) -> Self {
        let percentage_along_track = if track_length > 0.0 {
            distance_along_track / track_length * 100.0
        } else {
            0.0
        };

        Self {
            id,
            distance_along_track,
            percentage_along_track,
            level_weight: WeightedOption::new((), level_weight).weight(),
            mounted_weight: WeightedOption::new((), mounted_weight).weight(),
            level_shots,
        }
    }

    pub fn level_weight(&self) -> f64 {
        self.level_weight
    }

    pub fn mounted_weight(&self) -> f64 {
        self.mounted_weight
    }

    /// Shot kind weights in draw order.
    pub fn shot_weights(&self) -> [WeightedOption<ShotKind>; 2] {
        [
            WeightedOption::new(ShotKind::Level, self.level_weight),
            WeightedOption::new(ShotKind::Mounted, self.mounted_weight),
        ]
    }

    pub fn is_stunt(&self) -> bool {
        matches!(self.level_shots, LevelShots::Stunt(_))
    }

    /// Human-readable label, e.g. `"(S) Trigger (37.5%)"`.
    pub fn label(&self) -> String {
        let prefix = if self.is_stunt() { "(S) " } else { "" };
        format!("{}Trigger ({:.1}%)", prefix, self.percentage_along_track)
    }
}
