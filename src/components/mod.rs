//! ECS components for entities.
//!
//! Submodules overview:
//! - [`draworder`] – insertion index used to composite scenery in layout order
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`player`] – facing and walk-cycle animation state of the player
//! - [`sprite`] – shared sprite reference for static scenery

pub mod draworder;
pub mod mapposition;
pub mod player;
pub mod sprite;
