//! Draw order component.
//!
//! ECS queries do not iterate in spawn order, so scenery records its position
//! in the world-object list here and the renderer sorts by it.

use bevy_ecs::prelude::Component;

/// Insertion index of a world object. Lower values are drawn first.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct DrawOrder(pub u32);
