//! Motion poses
//!
//! A pose is the visual state a revealable element animates between:
//! horizontal offset, scale, and opacity. Hidden elements sit offset to one
//! side, slightly shrunk and fully transparent; revealed elements rest at
//! their natural position.

/// Horizontal distance a hidden element sits from its rest position
pub const SLIDE_DISTANCE: f32 = 100.0;

/// Scale applied to hidden elements
pub const HIDDEN_SCALE: f32 = 0.9;

/// The visual state of a revealable element
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionPose {
    /// Horizontal offset from rest, in logical pixels
    pub offset_x: f32,
    /// Uniform scale factor
    pub scale: f32,
    /// 0.0 transparent, 1.0 opaque
    pub opacity: f32,
}

impl MotionPose {
    /// At-rest pose: no offset, full size, fully opaque
    pub const REST: Self = Self {
        offset_x: 0.0,
        scale: 1.0,
        opacity: 1.0,
    };

    pub const fn new(offset_x: f32, scale: f32, opacity: f32) -> Self {
        Self {
            offset_x,
            scale,
            opacity,
        }
    }

    /// Off-screen pose. Elements slide in from the left by default;
    /// `reverse` flips the entry side to the right.
    pub fn hidden(reverse: bool) -> Self {
        let offset_x = if reverse {
            SLIDE_DISTANCE
        } else {
            -SLIDE_DISTANCE
        };
        Self {
            offset_x,
            scale: HIDDEN_SCALE,
            opacity: 0.0,
        }
    }

    /// On-screen rest pose
    pub fn revealed() -> Self {
        Self::REST
    }

    /// Same pose entering from the opposite side
    pub fn mirrored(self) -> Self {
        Self {
            offset_x: -self.offset_x,
            ..self
        }
    }
}

impl Default for MotionPose {
    fn default() -> Self {
        Self::REST
    }
}
