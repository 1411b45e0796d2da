//! Event types and observers used by the demo.
//!
//! Submodules:
//! - [`quit`] – request to stop the frame loop (window close or Escape)
//! - [`switchdebug`] – toggle the debug overlay on/off
pub mod quit;
pub mod switchdebug;
