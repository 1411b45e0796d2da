//! Bear Country library.
//!
//! A top-down 2D walking demo built on raylib and bevy_ecs. This module
//! exposes the ECS components, resources, systems and events used by the
//! `bear-country` binary, plus the sprite recoloring used by `recolor`.

pub mod assets;
pub mod components;
pub mod events;
pub mod game;
pub mod recolor;
pub mod resources;
pub mod systems;
