//! Chooses follow and look-at vehicles for the mounted rig.

use rand::Rng;
use rcam_models::{CameraId, VehicleId};
use tracing::debug;

use super::rig::MountedCameraRig;
use crate::cameras::CameraRegistry;
use crate::error::EngineResult;
use crate::geometry::TrackView;
use crate::sampler;

/// Front end to the mounted camera rig.
#[derive(Debug, Clone)]
pub struct MountedCameraDirector {
    rig: MountedCameraRig,
}

impl MountedCameraDirector {
    pub fn new(rig: MountedCameraRig) -> Self {
        Self { rig }
    }

    pub fn rig(&self) -> &MountedCameraRig {
        &self.rig
    }

    pub fn rig_mut(&mut self) -> &mut MountedCameraRig {
        &mut self.rig
    }

    /// Best mounted camera for a follow / look-at pair.
    ///
    /// A missing follow vehicle is picked at random among the vehicles on
    /// track. The rig is re-anchored on the follow vehicle first; then a
    /// missing look-at vehicle is chosen by the rig (or at random when the
    /// rig ended up without an anchor).
    pub fn best_mounted_camera<R>(
        &mut self,
        follow: Option<VehicleId>,
        look_at: Option<VehicleId>,
        view: &TrackView<'_>,
        cameras: &mut CameraRegistry,
        rng: &mut R,
    ) -> EngineResult<Option<CameraId>>
    where
        R: Rng + ?Sized,
    {
        let vehicles = view.telemetry().vehicles();

        let follow = follow.or_else(|| sampler::pick_uniform(&vehicles, rng).copied());
        self.rig.set_follow_anchor(follow, cameras)?;

        let look_at = match look_at {
            Some(vehicle) => Some(vehicle),
            None if self.rig.follow_anchor().is_none() => sampler::pick_uniform(&vehicles, rng).copied(),
            None => self.rig.best_look_at_target(view, &vehicles),
        };

        let camera = self.rig.best_camera(view, look_at, rng);
        debug!(follow = ?follow, look_at = ?look_at, camera = ?camera, "Mounted camera chosen");
        Ok(camera)
    }
}
