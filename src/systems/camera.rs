//! Camera follow system.
use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::resources::camera::PlayerCamera;
use crate::resources::screensize::ScreenSize;

/// Anchor the camera on the player and refresh the screen center.
///
/// Runs after movement so the frame is drawn around the player's new position.
pub fn update_camera(
    player: Query<&MapPosition, With<Player>>,
    screen: Res<ScreenSize>,
    mut camera: ResMut<PlayerCamera>,
) {
    camera.center = screen.center();
    if let Ok(position) = player.single() {
        camera.follow(position.pos);
    }
}
