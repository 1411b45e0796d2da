//! Screen size resource.
//!
//! Stores the framebuffer dimensions in pixels. The camera derives the screen
//! center from it, and the renderer culls against it.

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl ScreenSize {
    /// Pixel at the middle of the screen (integer division, like the blitter).
    pub fn center(&self) -> (i32, i32) {
        (self.w / 2, self.h / 2)
    }
}
