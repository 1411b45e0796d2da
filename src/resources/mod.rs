//! ECS resources made available to systems.
//!
//! Overview
//! - `camera` – player-locked world/screen transform
//! - `debugmode` – presence toggles the debug overlay
//! - `gameconfig` – settings loaded from `config.ini`
//! - `input` – per-frame keyboard state of keys relevant to the demo
//! - `loopstate` – running/terminated state of the frame loop
//! - `movementintent` – normalized direction requested this frame
//! - `screensize` – current framebuffer dimensions in pixels
//! - `texturestore` – loaded textures keyed by sprite index
//! - `worldtime` – frame delta and elapsed time
pub mod camera;
pub mod debugmode;
pub mod gameconfig;
pub mod input;
pub mod loopstate;
pub mod movementintent;
pub mod screensize;
pub mod texturestore;
pub mod worldtime;
