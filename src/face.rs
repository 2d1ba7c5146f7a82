//! Cube face identification and enumeration.

use serde::{Deserialize, Serialize};

/// Identifies one of the six square images forming the skybox cube-map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum FaceId {
    Left = 0,
    Right = 1,
    Front = 2,
    Back = 3,
    /// The face that receives the moon at night.
    Top = 4,
    Bottom = 5,
}

impl FaceId {
    /// Returns all six cube faces in order.
    pub const fn all() -> [FaceId; 6] {
        [
            FaceId::Left,
            FaceId::Right,
            FaceId::Front,
            FaceId::Back,
            FaceId::Top,
            FaceId::Bottom,
        ]
    }

    /// Returns the face index (0-5).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the face name used as the export file stem (e.g. "left.png").
    pub const fn name(self) -> &'static str {
        match self {
            FaceId::Left => "left",
            FaceId::Right => "right",
            FaceId::Front => "front",
            FaceId::Back => "back",
            FaceId::Top => "top",
            FaceId::Bottom => "bottom",
        }
    }
}
