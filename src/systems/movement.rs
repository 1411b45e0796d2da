//! Motion integrator.
//!
//! `position += direction * speed * delta`. There is no clamping and no
//! collision: the world is open in every direction.
use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::resources::gameconfig::GameConfig;
use crate::resources::movementintent::MovementIntent;
use crate::resources::worldtime::WorldTime;

pub fn movement(
    mut query: Query<&mut MapPosition, With<Player>>,
    intent: Res<MovementIntent>,
    config: Res<GameConfig>,
    time: Res<WorldTime>,
) {
    if !intent.is_moving() {
        return;
    }
    let step = config.player_speed * time.delta;
    for mut position in query.iter_mut() {
        position.pos.x += intent.direction.x * step;
        position.pos.y += intent.direction.y * step;
    }
}
