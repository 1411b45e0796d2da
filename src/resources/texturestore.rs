//! Texture store resource.
//!
//! GPU textures for every sprite the demo draws, keyed by sprite index
//! (`sprite.<n>.png` is stored under `n`). Textures are uploaded once at
//! startup and shared read-only by all entities that reference the index.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

#[derive(Resource, Default)]
pub struct TextureStore {
    map: FxHashMap<u32, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    /// Add a texture for `sprite_id`, replacing any previous one.
    pub fn insert(&mut self, sprite_id: u32, texture: Texture2D) {
        self.map.insert(sprite_id, texture);
    }

    pub fn get(&self, sprite_id: u32) -> Option<&Texture2D> {
        self.map.get(&sprite_id)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
