//! Animation driver.
//!
//! Feeds the frame delta and the raw horizontal intent into every
//! [`Player`](crate::components::player::Player). Facing and the walk cycle
//! are handled by [`Player::update`].

use bevy_ecs::prelude::*;

use crate::components::player::Player;
use crate::resources::movementintent::MovementIntent;
use crate::resources::worldtime::WorldTime;

/// Advance the walk cycle while moving, restore the idle pose otherwise.
pub fn player_animation(
    mut query: Query<&mut Player>,
    intent: Res<MovementIntent>,
    time: Res<WorldTime>,
) {
    let moving = intent.is_moving();
    let elapsed_ms = time.delta_ms();
    for mut player in query.iter_mut() {
        player.update(moving, elapsed_ms, intent.raw_x);
    }
}
