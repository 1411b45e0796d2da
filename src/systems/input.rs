//! Input systems.
//!
//! - [`update_input_state`] reads hardware input from Raylib each frame and
//!   writes the results into [`crate::resources::input::InputState`].
//! - Escape triggers a [`QuitEvent`], F11 a [`SwitchDebugEvent`].
use bevy_ecs::prelude::*;

use crate::events::quit::{QuitEvent, QuitReason};
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::InputState;

/// Poll Raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    for state in input.bindings_mut() {
        state.active = rl.is_key_down(state.key_binding);
        state.just_pressed = rl.is_key_pressed(state.key_binding);
    }

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
    if input.action_back.just_pressed {
        commands.trigger(QuitEvent {
            reason: QuitReason::BackPressed,
        });
    }
}
