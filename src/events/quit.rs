//! Quit request event and observer.
//!
//! A [`QuitEvent`] is triggered when the window asks to close or the player
//! presses Escape. The observer moves the [`LoopState`] to terminated; the
//! main loop notices on its next check and shuts down.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::resources::loopstate::LoopState;

/// Why the loop is being asked to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuitReason {
    /// The window manager requested the window to close.
    WindowClosed,
    /// The player pressed the back/cancel key.
    BackPressed,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct QuitEvent {
    pub reason: QuitReason,
}

/// Observer that terminates the frame loop.
pub fn quit_observer(trigger: On<QuitEvent>, mut state: ResMut<LoopState>) {
    if state.is_running() {
        info!("Quit requested ({:?}), stopping frame loop", trigger.event().reason);
        state.terminate();
    }
}
