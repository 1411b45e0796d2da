//! Frame systems.
//!
//! Run once per frame, in this order:
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`inputintent`] – turn held keys into a normalized movement intent
//! - [`movement`] – integrate the player's position from intent, speed and time
//! - [`animation`] – advance or reset the player's walk cycle
//! - [`camera`] – anchor the camera on the player
//! - [`render`] – draw scenery, player, HUD and debug overlay using Raylib
//!
//! [`time`] is called directly by the main loop before the schedule runs.

pub mod animation;
pub mod camera;
pub mod input;
pub mod inputintent;
pub mod movement;
pub mod render;
pub mod time;
