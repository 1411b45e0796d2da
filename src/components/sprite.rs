use bevy_ecs::prelude::Component;

/// Static sprite identified by its sprite index in the
/// [`TextureStore`](crate::resources::texturestore::TextureStore).
///
/// Several entities may carry the same index; the texture is shared, never
/// copied. Size comes from the texture itself at draw time.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sprite {
    pub sprite_id: u32,
}

impl Sprite {
    pub fn new(sprite_id: u32) -> Self {
        Self { sprite_id }
    }
}
