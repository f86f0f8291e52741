//! Identifier newtypes.
//!
//! The engine never holds references into the scene; everything it touches is
//! addressed by one of these ids and resolved through a registry or telemetry.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            /// Get the raw numeric value.
            pub fn get(self) -> u32 {
                self.0
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "#{}"), self.0)
            }
        }
    };
}

id_type!(
    /// Identifier of a virtual camera.
    CameraId,
    "camera"
);
id_type!(
    /// Identifier of a vehicle on the track.
    VehicleId,
    "vehicle"
);
id_type!(
    /// Identifier of a track-side shot trigger.
    TriggerId,
    "trigger"
);
id_type!(
    /// Identifier of an externally supplied stunt camera bank.
    StuntBankId,
    "stunt"
);
