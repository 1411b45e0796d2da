//! Debug toggle resource.
//!
//! The mere presence of this resource turns on the debug overlay (FPS, entity
//! count, sprite bounds). Remove it to disable.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the renderer draws the debug overlay.
#[derive(Resource, Clone, Copy, Debug)]
pub struct DebugMode {}
