//! Camera handles and the registry that owns them.
//!
//! The engine only ever enables or disables cameras, changes their render
//! priority, repoints their look-at and follow bindings, writes noise and
//! snaps their pose to the current bindings. Every write goes through the
//! registry so it can mirror the resulting state.

use std::collections::HashMap;

use glam::DVec3;
use rcam_models::{CameraId, CameraSpec, VehicleId};
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{EngineError, EngineResult};

/// Priority of the camera being presented.
pub const PRESENTED_PRIORITY: i32 = 100;

/// Priority of every other camera.
pub const IDLE_PRIORITY: i32 = 0;

/// Handle to a renderable virtual camera.
pub trait RenderTarget {
    fn set_enabled(&mut self, enabled: bool);

    fn set_priority(&mut self, priority: i32);

    fn set_look_at(&mut self, target: Option<VehicleId>);

    fn set_follow(&mut self, target: Option<VehicleId>);

    fn set_noise(&mut self, amplitude: f64, frequency: f64);

    /// Snap orientation to the look-at binding (using `up`) and position to
    /// the follow binding, so damping starts from a settled pose.
    fn align_to_bindings(&mut self, up: DVec3);
}

/// Render target with no renderer behind it.
///
/// Logs every write at trace level and counts pose snaps.
#[derive(Debug, Clone, Default)]
pub struct HeadlessCamera {
    name: String,
    alignments: u32,
    last_up: Option<DVec3>,
}

impl HeadlessCamera {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn alignments(&self) -> u32 {
        self.alignments
    }

    pub fn last_up(&self) -> Option<DVec3> {
        self.last_up
    }
}

impl RenderTarget for HeadlessCamera {
    fn set_enabled(&mut self, enabled: bool) {
        trace!(camera = %self.name, enabled, "set_enabled");
    }

    fn set_priority(&mut self, priority: i32) {
        trace!(camera = %self.name, priority, "set_priority");
    }

    fn set_look_at(&mut self, target: Option<VehicleId>) {
        trace!(camera = %self.name, target = ?target, "set_look_at");
    }

    fn set_follow(&mut self, target: Option<VehicleId>) {
        trace!(camera = %self.name, target = ?target, "set_follow");
    }

    fn set_noise(&mut self, amplitude: f64, frequency: f64) {
        trace!(camera = %self.name, amplitude, frequency, "set_noise");
    }

    fn align_to_bindings(&mut self, up: DVec3) {
        self.alignments += 1;
        self.last_up = Some(up);
        trace!(camera = %self.name, ?up, "align_to_bindings");
    }
}

/// Look-at and follow targets of a camera.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CameraBindings {
    pub look_at: Option<VehicleId>,
    pub follow: Option<VehicleId>,
}

/// Mirrored state of one camera.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CameraState {
    pub enabled: bool,
    pub priority: i32,
    pub bindings: CameraBindings,
    pub noise_amplitude: f64,
    pub noise_frequency: f64,
}

struct CameraSlot {
    spec: CameraSpec,
    available: bool,
    state: CameraState,
    target: Box<dyn RenderTarget>,
}

/// Owns every camera the engine may switch to.
#[derive(Default)]
pub struct CameraRegistry {
    slots: HashMap<CameraId, CameraSlot>,
    order: Vec<CameraId>,
    presented: Option<CameraId>,
}

impl CameraRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a camera with its render target.
    pub fn register(&mut self, spec: CameraSpec, target: Box<dyn RenderTarget>) -> EngineResult<()> {
        if self.slots.contains_key(&spec.id) {
            return Err(EngineError::invalid_config(format!("camera {} registered twice", spec.id)));
        }
        self.order.push(spec.id);
        self.slots.insert(
            spec.id,
            CameraSlot {
                spec,
                available: true,
                state: CameraState::default(),
                target,
            },
        );
        Ok(())
    }

    /// Register a camera backed by a [`HeadlessCamera`].
    pub fn register_headless(&mut self, spec: CameraSpec) -> EngineResult<()> {
        let target = HeadlessCamera::new(spec.name.clone());
        self.register(spec, Box::new(target))
    }

    /// Put every camera in its idle state: disabled at idle priority.
    pub fn init(&mut self) {
        for slot in self.slots.values_mut() {
            Self::write_disable(slot);
        }
        self.presented = None;
        debug!(cameras = self.order.len(), "Camera registry initialized");
    }

    /// Registered camera ids, in registration order.
    pub fn ids(&self) -> &[CameraId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, id: CameraId) -> bool {
        self.slots.contains_key(&id)
    }

    pub fn spec(&self, id: CameraId) -> Option<&CameraSpec> {
        self.slots.get(&id).map(|slot| &slot.spec)
    }

    pub fn state(&self, id: CameraId) -> Option<&CameraState> {
        self.slots.get(&id).map(|slot| &slot.state)
    }

    /// Whether the camera exists and may be switched to.
    pub fn is_available(&self, id: CameraId) -> bool {
        self.slots.get(&id).is_some_and(|slot| slot.available)
    }

    /// Mark a camera as available or not. Unavailable cameras are refused.
    pub fn set_available(&mut self, id: CameraId, available: bool) -> EngineResult<()> {
        self.slot_mut(id)?.available = available;
        Ok(())
    }

    /// The camera currently raised to presented priority.
    pub fn presented(&self) -> Option<CameraId> {
        self.presented
    }

    /// Cameras that are currently enabled, in registration order.
    pub fn enabled(&self) -> Vec<CameraId> {
        self.order
            .iter()
            .copied()
            .filter(|id| self.slots.get(id).is_some_and(|slot| slot.state.enabled))
            .collect()
    }

    /// Point a camera's look-at binding at a vehicle.
    pub fn bind_look_at(&mut self, id: CameraId, target: Option<VehicleId>) -> EngineResult<()> {
        let slot = self.slot_mut(id)?;
        slot.state.bindings.look_at = target;
        slot.target.set_look_at(target);
        Ok(())
    }

    /// Point a camera's follow binding at a vehicle.
    pub fn bind_follow(&mut self, id: CameraId, target: Option<VehicleId>) -> EngineResult<()> {
        let slot = self.slot_mut(id)?;
        slot.state.bindings.follow = target;
        slot.target.set_follow(target);
        Ok(())
    }

    /// Mount a camera on a vehicle: it follows and looks at the same view,
    /// with its own look-at offset doing the aiming.
    pub fn bind_mount(&mut self, id: CameraId, vehicle: Option<VehicleId>) -> EngineResult<()> {
        self.bind_follow(id, vehicle)?;
        self.bind_look_at(id, vehicle)
    }

    /// Snap a camera to its bindings and enable it at idle priority.
    pub fn prewarm(&mut self, id: CameraId, world_up: DVec3) -> EngineResult<()> {
        let slot = self.slot_mut(id)?;
        let up = slot.spec.effective_up(world_up);
        slot.target.align_to_bindings(up);
        slot.state.enabled = true;
        slot.target.set_enabled(true);
        Ok(())
    }

    /// Disable a camera and drop it to idle priority.
    pub fn disable(&mut self, id: CameraId) -> EngineResult<()> {
        let slot = self.slot_mut(id)?;
        Self::write_disable(slot);
        if self.presented == Some(id) {
            self.presented = None;
        }
        Ok(())
    }

    /// Raise a camera to presented priority.
    ///
    /// Returns the camera that was presented before, if any. The previous
    /// camera is left untouched; callers disable it.
    pub fn present(&mut self, id: CameraId) -> EngineResult<Option<CameraId>> {
        let slot = self.slot_mut(id)?;
        slot.state.priority = PRESENTED_PRIORITY;
        slot.target.set_priority(PRESENTED_PRIORITY);
        Ok(self.presented.replace(id))
    }

    /// Write a noise signal to a camera.
    pub fn set_noise(&mut self, id: CameraId, amplitude: f64, frequency: f64) -> EngineResult<()> {
        let slot = self.slot_mut(id)?;
        slot.state.noise_amplitude = amplitude;
        slot.state.noise_frequency = frequency;
        slot.target.set_noise(amplitude, frequency);
        Ok(())
    }

    fn slot_mut(&mut self, id: CameraId) -> EngineResult<&mut CameraSlot> {
        self.slots.get_mut(&id).ok_or(EngineError::UnknownCamera(id))
    }

    fn write_disable(slot: &mut CameraSlot) {
        slot.state.priority = IDLE_PRIORITY;
        slot.state.enabled = false;
        slot.target.set_priority(IDLE_PRIORITY);
        slot.target.set_enabled(false);
    }
}

impl std::fmt::Debug for CameraRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraRegistry")
            .field("cameras", &self.order)
            .field("presented", &self.presented)
            .finish()
    }
}
