//! Input-to-intent mapper.
//!
//! Reads the shared [`InputState`](crate::resources::input::InputState) and
//! turns the held directions into this frame's
//! [`MovementIntent`](crate::resources::movementintent::MovementIntent).
//! Diagonal movement is normalized to keep a constant speed.
use bevy_ecs::prelude::*;

use crate::resources::input::InputState;
use crate::resources::movementintent::MovementIntent;

/// Rebuild the movement intent from the current key state.
pub fn update_movement_intent(input: Res<InputState>, mut intent: ResMut<MovementIntent>) {
    *intent = MovementIntent::from_keys(input.up(), input.down(), input.left(), input.right());
}
