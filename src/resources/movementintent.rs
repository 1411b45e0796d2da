//! Movement intent resource.
//!
//! Holds the direction the player asked for this frame. The raw per-axis
//! signs are kept next to the normalized direction because facing is decided
//! from the raw horizontal sign, not from the normalized vector.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

/// Player movement request for the current frame.
#[derive(Resource, Debug, Clone, Copy)]
pub struct MovementIntent {
    /// Raw horizontal sign in {-1, 0, 1}.
    pub raw_x: i8,
    /// Raw vertical sign in {-1, 0, 1} (positive is down).
    pub raw_y: i8,
    /// Unit-length direction when moving, zero otherwise.
    pub direction: Vector2,
}

impl Default for MovementIntent {
    fn default() -> Self {
        Self::from_axes(0, 0)
    }
}

impl MovementIntent {
    /// Build the intent from raw axis signs, normalizing when moving.
    pub fn from_axes(raw_x: i8, raw_y: i8) -> Self {
        let (x, y) = (raw_x as f32, raw_y as f32);
        let length = x.hypot(y);
        let direction = if length > 0.0 {
            Vector2 {
                x: x / length,
                y: y / length,
            }
        } else {
            Vector2 { x: 0.0, y: 0.0 }
        };
        Self {
            raw_x,
            raw_y,
            direction,
        }
    }

    /// Build the intent from the four held directions. Opposite keys cancel.
    pub fn from_keys(up: bool, down: bool, left: bool, right: bool) -> Self {
        let raw_x = right as i8 - left as i8;
        let raw_y = down as i8 - up as i8;
        Self::from_axes(raw_x, raw_y)
    }

    /// Any axis is non-zero.
    pub fn is_moving(&self) -> bool {
        self.raw_x != 0 || self.raw_y != 0
    }
}
