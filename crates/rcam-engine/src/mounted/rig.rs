//! A camera rig mounted on a follow vehicle.
//!
//! The rig picks which other vehicle to aim at and which of its mounted
//! cameras frames that vehicle best, based on where the target sits relative
//! to the follow vehicle.

use rand::Rng;
use rcam_models::{CameraId, MountBank, VehicleId};
use tracing::debug;

use super::config::MountRigConfig;
use crate::cameras::CameraRegistry;
use crate::error::{EngineError, EngineResult};
use crate::geometry::{angle_dot, quadrant, TrackView};
use crate::sampler;
use crate::scoring::TargetPriorityScorer;

/// Mounted camera rig with quadrant-partitioned camera banks.
#[derive(Debug, Clone)]
pub struct MountedCameraRig {
    config: MountRigConfig,
    scorer: TargetPriorityScorer,
    bank: MountBank,
    front_facing: Vec<CameraId>,
    rear_facing: Vec<CameraId>,
    /// Vehicle the rig's cameras are mounted on
    follow: Option<VehicleId>,
}

impl MountedCameraRig {
    /// Create a rig. The configuration is clamped on the way in.
    pub fn new(config: MountRigConfig, bank: MountBank) -> Self {
        let config = config.clamped();
        Self {
            scorer: TargetPriorityScorer::from_config(&config),
            front_facing: bank.front_facing(),
            rear_facing: bank.rear_facing(),
            config,
            bank,
            follow: None,
        }
    }

    pub fn config(&self) -> &MountRigConfig {
        &self.config
    }

    pub fn bank(&self) -> &MountBank {
        &self.bank
    }

    pub fn follow_anchor(&self) -> Option<VehicleId> {
        self.follow
    }

    pub fn front_facing_cameras(&self) -> &[CameraId] {
        &self.front_facing
    }

    pub fn rear_facing_cameras(&self) -> &[CameraId] {
        &self.rear_facing
    }

    /// Check that every camera in the bank is registered.
    pub fn validate(&self, cameras: &CameraRegistry) -> EngineResult<()> {
        for id in self.bank.all_cameras() {
            if !cameras.contains(id) {
                return Err(EngineError::UnknownCamera(id));
            }
        }
        Ok(())
    }

    /// Move the rig to a new follow vehicle.
    ///
    /// Every rig camera is rebound to the new vehicle before this returns, so
    /// no selection can observe a stale binding.
    pub fn set_follow_anchor(&mut self, follow: Option<VehicleId>, cameras: &mut CameraRegistry) -> EngineResult<()> {
        if self.follow != follow {
            debug!(from = ?self.follow, to = ?follow, "Re-anchoring mounted rig");
        }
        self.follow = follow;

        for id in self.front_facing.iter().chain(self.rear_facing.iter()) {
            cameras.bind_mount(*id, follow)?;
        }
        Ok(())
    }

    /// Best vehicle to aim at from the follow vehicle.
    ///
    /// Candidates outside the open distance window or outside the cull cone
    /// are dropped; of the rest, the highest priority wins and the first one
    /// seen wins ties. Returns `None` when nothing survives or the rig has no
    /// follow vehicle.
    pub fn best_look_at_target(&self, view: &TrackView<'_>, candidates: &[VehicleId]) -> Option<VehicleId> {
        let follow = self.follow?;
        let mut best: Option<(VehicleId, f64)> = None;

        for candidate in candidates {
            let Some(offset) = view.offset(*candidate, follow) else {
                debug!(candidate = %candidate, "Culled look-at candidate without telemetry");
                continue;
            };
            let dot = angle_dot(offset);

            if !self.config.in_range(offset.along) || !self.config.in_angle(dot) {
                debug!(
                    candidate = %candidate,
                    along = offset.along,
                    dot,
                    "Culled look-at candidate"
                );
                continue;
            }

            let priority = self.scorer.combined(offset.along, dot);
            if best.map_or(true, |(_, highest)| priority > highest) {
                best = Some((*candidate, priority));
            }
        }

        if let Some((vehicle, priority)) = best {
            debug!(vehicle = %vehicle, priority, "Selected look-at target");
        }
        best.map(|(vehicle, _)| vehicle)
    }

    /// Best camera to frame `look_at` from the follow vehicle.
    ///
    /// With a target, the bank for the target's quadrant is sampled by weight.
    /// Without one, a front-facing camera is picked uniformly.
    pub fn best_camera<R>(&self, view: &TrackView<'_>, look_at: Option<VehicleId>, rng: &mut R) -> Option<CameraId>
    where
        R: Rng + ?Sized,
    {
        let Some(target) = look_at else {
            return self.random_front_facing_camera(rng);
        };

        let offset = self.follow.and_then(|follow| view.offset(target, follow));
        let Some(offset) = offset else {
            debug!(target = %target, "No relative position for look-at target, using front-facing pool");
            return self.random_front_facing_camera(rng);
        };

        let quadrant = quadrant(offset);
        let camera = sampler::pick(self.bank.quadrant(quadrant), rng).copied();
        debug!(target = %target, ?quadrant, camera = ?camera, "Selected mounted camera");
        camera
    }

    pub fn random_front_facing_camera<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<CameraId> {
        sampler::pick_uniform(&self.front_facing, rng).copied()
    }

    pub fn random_rear_facing_camera<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<CameraId> {
        sampler::pick_uniform(&self.rear_facing, rng).copied()
    }

    /// Coin flip between the front- and rear-facing pools.
    pub fn random_camera<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<CameraId> {
        if rng.random_bool(0.5) {
            self.random_front_facing_camera(rng)
        } else {
            self.random_rear_facing_camera(rng)
        }
    }
}
