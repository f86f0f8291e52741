//! Track-side shot triggers and their resolution to cameras.

use std::collections::HashMap;

use glam::DVec3;
use rand::Rng;
use rcam_models::{CameraId, LevelShots, ShotKind, ShotTrigger, StuntBankId, TriggerId, WeightedOption};
use tracing::debug;

use crate::error::EngineResult;
use crate::geometry::PathGeometryProvider;
use crate::sampler;

/// Outcome of resolving a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResolution {
    /// A track-side camera.
    Level(CameraId),
    /// Hand over to the mounted camera director.
    Mounted,
}

/// Place a trigger at the path point nearest to `point`.
pub fn author_trigger(
    path: &dyn PathGeometryProvider,
    id: TriggerId,
    point: DVec3,
    level_weight: f64,
    mounted_weight: f64,
    level_shots: LevelShots,
) -> EngineResult<ShotTrigger> {
    let frame = path.project(point)?;
    Ok(ShotTrigger::new(
        id,
        frame.distance_along,
        frame.total_length,
        level_weight,
        mounted_weight,
        level_shots,
    ))
}

/// Ordered set of shot triggers around the loop.
#[derive(Debug, Clone, Default)]
pub struct ShotTriggerSequencer {
    /// Sorted by distance along the track, highest first
    triggers: Vec<ShotTrigger>,
    stunt_banks: HashMap<StuntBankId, Vec<WeightedOption<CameraId>>>,
}

impl ShotTriggerSequencer {
    pub fn new(mut triggers: Vec<ShotTrigger>) -> Self {
        triggers.sort_by(|a, b| b.distance_along_track.total_cmp(&a.distance_along_track));
        Self {
            triggers,
            stunt_banks: HashMap::new(),
        }
    }

    /// Supply the cameras of an external stunt bank.
    pub fn with_stunt_bank(mut self, id: StuntBankId, cameras: Vec<WeightedOption<CameraId>>) -> Self {
        self.stunt_banks.insert(id, cameras);
        self
    }

    /// Triggers in descending distance order.
    pub fn triggers(&self) -> &[ShotTrigger] {
        &self.triggers
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    pub fn get(&self, id: TriggerId) -> Option<&ShotTrigger> {
        self.triggers.iter().find(|trigger| trigger.id == id)
    }

    /// The last trigger passed at `progress`.
    ///
    /// Before the first trigger of the lap the lowest trigger is returned, as
    /// it is the last one passed on the previous lap. `None` only when no
    /// triggers are configured.
    pub fn nearest_behind(&self, progress: f64) -> Option<&ShotTrigger> {
        self.triggers
            .iter()
            .find(|trigger| trigger.distance_along_track <= progress)
            .or_else(|| self.triggers.last())
    }

    /// Level cameras of a trigger: its linked list, or its stunt bank.
    pub fn level_cameras<'a>(&'a self, trigger: &'a ShotTrigger) -> &'a [WeightedOption<CameraId>] {
        match &trigger.level_shots {
            LevelShots::Linked(cameras) => cameras,
            LevelShots::Stunt(bank) => self.stunt_banks.get(bank).map(Vec::as_slice).unwrap_or(&[]),
        }
    }

    /// Draw a shot for a trigger.
    ///
    /// The shot kind is drawn from the trigger's weights. A Level draw that
    /// finds no camera falls back to Mounted.
    pub fn resolve<R>(&self, trigger: &ShotTrigger, rng: &mut R) -> ShotResolution
    where
        R: Rng + ?Sized,
    {
        let weights = trigger.shot_weights();
        let kind = sampler::pick(&weights, rng).copied().unwrap_or(ShotKind::Level);

        let resolution = match kind {
            ShotKind::Level => match sampler::pick(self.level_cameras(trigger), rng) {
                Some(camera) => ShotResolution::Level(*camera),
                None => {
                    debug!(trigger = %trigger.label(), "No level camera available, falling back to mounted");
                    ShotResolution::Mounted
                }
            },
            ShotKind::Mounted => ShotResolution::Mounted,
        };

        debug!(trigger = %trigger.label(), ?kind, ?resolution, "Resolved trigger");
        resolution
    }

    /// Whether any trigger can resolve to a mounted shot.
    pub fn may_resolve_mounted(&self) -> bool {
        self.triggers.iter().any(|trigger| {
            trigger.mounted_weight() > 0.0 || sampler::total_weight(self.level_cameras(trigger)) <= 0.0
        })
    }

    /// Every level camera referenced by a trigger or stunt bank.
    pub fn referenced_cameras(&self) -> Vec<CameraId> {
        let mut cameras = Vec::new();
        let linked = self.triggers.iter().filter_map(|trigger| match &trigger.level_shots {
            LevelShots::Linked(list) => Some(list),
            LevelShots::Stunt(_) => None,
        });
        for option in linked.chain(self.stunt_banks.values()).flatten() {
            if !cameras.contains(option.item()) {
                cameras.push(*option.item());
            }
        }
        cameras
    }
}
