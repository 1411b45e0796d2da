//! Demo setup: sprite loading, player and scenery spawning.
//!
//! The world layout is fixed: a row of ten trees along the x axis with
//! growing gaps, plus two landmarks off the diagonal. Textures are uploaded
//! before the ECS world is built, so spawning only needs sprite indices.

use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::*;

use crate::assets::load_sprite;
use crate::components::draworder::DrawOrder;
use crate::components::mapposition::MapPosition;
use crate::components::player::{PLAYER_FRAME_COUNT, Player};
use crate::components::sprite::Sprite;
use crate::resources::gameconfig::GameConfig;
use crate::resources::texturestore::TextureStore;

/// Walk cycle sprites, frame 0 doubles as the idle pose.
pub const PLAYER_FRAMES: [u32; PLAYER_FRAME_COUNT] = [1, 2, 3];
/// Decorative sprites loaded at startup.
pub const SCENERY_SPRITES: std::ops::RangeInclusive<u32> = 12..=16;

const TREE_SPRITE: u32 = 15;
const TREE_COUNT: u32 = 10;
const TREE_START_X: f32 = 300.0;
const ROCK_SPRITE: u32 = 14;
const BUSH_SPRITE: u32 = 16;

/// One static object of the world layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub sprite_id: u32,
    pub x: f32,
    pub y: f32,
}

/// The fixed world layout, in drawing order.
///
/// Tree `i` sits at `300 + Σ_{j<i} (150 + 100·j)` on the x axis, except the
/// second tree which is pulled in to x = 500.
pub fn world_layout() -> Vec<Placement> {
    let mut layout: Vec<Placement> = (0..TREE_COUNT)
        .map(|i| {
            let gap: u32 = (0..i).map(|j| 150 + j * 100).sum();
            let x = if i == 1 {
                500.0
            } else {
                TREE_START_X + gap as f32
            };
            Placement {
                sprite_id: TREE_SPRITE,
                x,
                y: 0.0,
            }
        })
        .collect();
    layout.push(Placement {
        sprite_id: ROCK_SPRITE,
        x: 500.0,
        y: 500.0,
    });
    layout.push(Placement {
        sprite_id: BUSH_SPRITE,
        x: -500.0,
        y: -500.0,
    });
    layout
}

/// Every sprite index the demo needs a texture for.
pub fn required_sprites() -> Vec<u32> {
    PLAYER_FRAMES
        .iter()
        .copied()
        .chain(SCENERY_SPRITES)
        .collect()
}

/// Load, scale and upload every required sprite.
///
/// Missing files become placeholders; undecodable files abort startup.
pub fn load_textures(
    rl: &mut RaylibHandle,
    th: &RaylibThread,
    config: &GameConfig,
) -> Result<TextureStore, String> {
    let mut store = TextureStore::new();
    for sprite_id in required_sprites() {
        let image = load_sprite(&config.sprites_dir, sprite_id, config.scale)?;
        let texture = rl
            .load_texture_from_image(th, &image)
            .map_err(|e| format!("Failed to upload sprite {}: {}", sprite_id, e))?;
        store.insert(sprite_id, texture);
    }
    info!("Uploaded {} sprite textures", store.len());
    Ok(store)
}

/// Spawn the player at the world origin.
pub fn spawn_player(world: &mut World, config: &GameConfig) -> Entity {
    world
        .spawn((
            Player::new(PLAYER_FRAMES, config.anim_delay_ms),
            MapPosition::new(0.0, 0.0),
        ))
        .id()
}

/// Spawn the static scenery, tagging each object with its layout index.
pub fn spawn_scenery(world: &mut World, layout: &[Placement]) -> Vec<Entity> {
    layout
        .iter()
        .enumerate()
        .map(|(index, placement)| {
            world
                .spawn((
                    Sprite::new(placement.sprite_id),
                    MapPosition::new(placement.x, placement.y),
                    DrawOrder(index as u32),
                ))
                .id()
        })
        .collect()
}
