//! Player-locked camera resource.
//!
//! The camera is anchored on the player's world position and pinned to the
//! middle of the screen, so the player never moves on screen and the world
//! scrolls around it. Every world position goes through
//! [`PlayerCamera::world_to_screen`] before it is drawn.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

use crate::resources::screensize::ScreenSize;

/// ECS resource holding the world/screen transform for the current frame.
///
/// Updated by [`update_camera`](crate::systems::camera::update_camera) after
/// the player has moved, read by the render system.
#[derive(Resource, Debug, Clone, Copy)]
pub struct PlayerCamera {
    /// World position mapped to the screen center (the player's position).
    pub anchor: Vector2,
    /// Screen pixel the anchor is drawn at.
    pub center: (i32, i32),
}

impl PlayerCamera {
    pub fn new(screen: ScreenSize) -> Self {
        Self {
            anchor: Vector2 { x: 0.0, y: 0.0 },
            center: screen.center(),
        }
    }

    /// Re-anchor the camera on a new world position.
    pub fn follow(&mut self, anchor: Vector2) {
        self.anchor = anchor;
    }

    /// `center + round(world - anchor)` per axis.
    pub fn world_to_screen(&self, world: Vector2) -> (i32, i32) {
        (
            self.center.0 + (world.x - self.anchor.x).round() as i32,
            self.center.1 + (world.y - self.anchor.y).round() as i32,
        )
    }

    /// Where the player is drawn. Always the screen center.
    pub fn player_screen(&self) -> (i32, i32) {
        self.center
    }
}

/// Axis-aligned pixel rectangle of a sprite drawn centered on `center`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl ScreenRect {
    /// Rectangle of size `w`×`h` whose center is `center`.
    pub fn centered(center: (i32, i32), w: i32, h: i32) -> Self {
        Self {
            x: center.0 - w / 2,
            y: center.1 - h / 2,
            w,
            h,
        }
    }

    /// Whether any pixel of the rectangle lands on the screen.
    pub fn overlaps(&self, screen: ScreenSize) -> bool {
        self.x < screen.w && self.y < screen.h && self.x + self.w > 0 && self.y + self.h > 0
    }
}
