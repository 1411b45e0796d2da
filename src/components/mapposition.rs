//! World-space position component.
//!
//! Positions are unbounded floating-point coordinates; the camera turns them
//! into screen pixels at draw time.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// World-space position (center pivot) of an entity.
#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl Default for MapPosition {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }

    pub fn x(&self) -> f32 {
        self.pos.x
    }

    pub fn y(&self) -> f32 {
        self.pos.y
    }
}
