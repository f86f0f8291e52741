//! Camera kinds and static camera descriptions.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::CameraId;

/// Behavioural variant of a virtual camera.
///
/// Mounted cameras ride on the rig's follow vehicle and aim through a fixed
/// look-at offset, so the director must not repoint their look-at target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CameraKind {
    /// Track-side or free camera.
    Standard {
        /// Use the camera's own up vector instead of the world up.
        overrides_world_up: bool,
    },
    /// Camera mounted on the rig's follow vehicle.
    Mounted,
}

impl CameraKind {
    /// Standard camera using the world up vector.
    pub const STANDARD: CameraKind = CameraKind::Standard {
        overrides_world_up: false,
    };

    /// Whether the camera keeps its own look-at binding when activated.
    pub fn overrides_look_at(&self) -> bool {
        match self {
            CameraKind::Standard { .. } => false,
            CameraKind::Mounted => true,
        }
    }

    /// Whether the camera aligns against its own up vector.
    pub fn overrides_world_up(&self) -> bool {
        match self {
            CameraKind::Standard { overrides_world_up } => *overrides_world_up,
            CameraKind::Mounted => false,
        }
    }

    pub fn is_mounted(&self) -> bool {
        matches!(self, CameraKind::Mounted)
    }
}

/// Static description of a camera known to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraSpec {
    pub id: CameraId,
    pub name: String,
    pub kind: CameraKind,
    /// Up vector captured when the camera was placed; used only when the kind
    /// overrides world up.
    pub up: DVec3,
}

impl CameraSpec {
    /// Create a standard camera using the world up vector.
    pub fn standard(id: CameraId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: CameraKind::STANDARD,
            up: DVec3::Y,
        }
    }

    /// Create a standard camera that keeps its own up vector.
    pub fn with_custom_up(id: CameraId, name: impl Into<String>, up: DVec3) -> Self {
        Self {
            id,
            name: name.into(),
            kind: CameraKind::Standard {
                overrides_world_up: true,
            },
            up: up.normalize_or(DVec3::Y),
        }
    }

    /// Create a vehicle-mounted camera.
    pub fn mounted(id: CameraId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: CameraKind::Mounted,
            up: DVec3::Y,
        }
    }

    /// Up vector to align against, given the director's world up.
    pub fn effective_up(&self, world_up: DVec3) -> DVec3 {
        if self.kind.overrides_world_up() {
            self.up
        } else {
            world_up
        }
    }
}
