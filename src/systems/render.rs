//! Render system.
//!
//! Draws one frame: background, scenery in insertion order, the player at the
//! screen center, the coordinate HUD and (when [`DebugMode`] is present) the
//! debug overlay. Ending the draw scope presents the frame and lets raylib's
//! frame limiter wait for the next tick.
//!
//! Scenery outside the viewport is culled; it would be drawn off-screen
//! anyway, so the visible output is the same.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::draworder::DrawOrder;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::sprite::Sprite;
use crate::resources::camera::{PlayerCamera, ScreenRect};
use crate::resources::debugmode::DebugMode;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;
use crate::resources::worldtime::WorldTime;

/// Background fill.
pub const BG_COLOR: Color = Color {
    r: 14,
    g: 14,
    b: 14,
    a: 255,
};
const HUD_POS: (i32, i32) = (8, 8);
const HUD_FONT_SIZE: i32 = 20;

/// HUD line with the player's world coordinates truncated toward zero.
pub fn hud_text(pos: Vector2) -> String {
    format!("X: {}, Y: {}", pos.x as i32, pos.y as i32)
}

/// Pixel rectangle `texture` covers when centered on `center`.
fn texture_rect(texture: &Texture2D, center: (i32, i32)) -> ScreenRect {
    ScreenRect::centered(center, texture.width, texture.height)
}

/// Draw `texture` over `rect`, mirrored horizontally when `flip_h` is set.
fn draw_sprite(d: &mut RaylibDrawHandle, texture: &Texture2D, rect: ScreenRect, flip_h: bool) {
    let (w, h) = (texture.width as f32, texture.height as f32);
    // A negative source width samples the texture right to left
    let src = Rectangle {
        x: 0.0,
        y: 0.0,
        width: if flip_h { -w } else { w },
        height: h,
    };
    let dest = Rectangle {
        x: rect.x as f32,
        y: rect.y as f32,
        width: w,
        height: h,
    };
    d.draw_texture_pro(
        texture,
        src,
        dest,
        Vector2 { x: 0.0, y: 0.0 },
        0.0,
        Color::WHITE,
    );
}

/// Scenery to draw this frame, in world-object order, already mapped to the
/// screen and culled against it.
///
/// `size_of` returns the pixel size of a sprite index, or `None` when no
/// texture is loaded for it (such objects are skipped).
pub fn scenery_draw_list<'a>(
    scenery: impl IntoIterator<Item = (&'a Sprite, &'a MapPosition, &'a DrawOrder)>,
    camera: &PlayerCamera,
    screen: ScreenSize,
    size_of: impl Fn(u32) -> Option<(i32, i32)>,
) -> Vec<(Sprite, ScreenRect)> {
    let mut ordered: Vec<(DrawOrder, Sprite, MapPosition)> = scenery
        .into_iter()
        .map(|(s, p, o)| (*o, *s, *p))
        .collect();
    ordered.sort_by_key(|(order, _, _)| *order);

    ordered
        .into_iter()
        .filter_map(|(_, sprite, pos)| {
            let (w, h) = size_of(sprite.sprite_id)?;
            let rect = ScreenRect::centered(camera.world_to_screen(pos.pos), w, h);
            rect.overlaps(screen).then_some((sprite, rect))
        })
        .collect()
}

pub fn render_system(
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    textures: Res<TextureStore>,
    camera: Res<PlayerCamera>,
    screen: Res<ScreenSize>,
    time: Res<WorldTime>,
    debug: Option<Res<DebugMode>>,
    scenery: Query<(&Sprite, &MapPosition, &DrawOrder)>,
    player: Query<(&Player, &MapPosition)>,
    entities: Query<Entity>,
) {
    let to_draw = scenery_draw_list(scenery.iter(), &camera, *screen, |id| {
        textures.get(id).map(|t| (t.width, t.height))
    });

    let mut d = rl.begin_drawing(&th);
    d.clear_background(BG_COLOR);

    let mut drawn: Vec<ScreenRect> = Vec::with_capacity(to_draw.len() + 1);
    for (sprite, rect) in to_draw {
        let Some(tex) = textures.get(sprite.sprite_id) else {
            continue;
        };
        draw_sprite(&mut d, tex, rect, false);
        drawn.push(rect);
    }

    let mut hud = None;
    if let Ok((player, pos)) = player.single() {
        let frame = player.current_image();
        if let Some(tex) = textures.get(frame.sprite_id) {
            let rect = texture_rect(tex, camera.player_screen());
            draw_sprite(&mut d, tex, rect, frame.flip_h);
            drawn.push(rect);
        }
        hud = Some(hud_text(pos.pos));
    }

    if let Some(text) = hud {
        d.draw_text(&text, HUD_POS.0, HUD_POS.1, HUD_FONT_SIZE, Color::WHITE);
    }

    if debug.is_some() {
        let fps = d.get_fps();
        let text = format!(
            "DEBUG (F11) | FPS: {} | Frame: {} | Time: {:.1}s | Entities: {} | Drawn: {}",
            fps,
            time.frame_count,
            time.elapsed,
            entities.iter().count(),
            drawn.len()
        );
        d.draw_text(&text, HUD_POS.0, HUD_POS.1 + HUD_FONT_SIZE + 4, 10, Color::GREEN);
        for rect in drawn.iter() {
            d.draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, Color::RED);
        }
        let (cx, cy) = camera.player_screen();
        d.draw_line(cx - 5, cy, cx + 5, cy, Color::GREEN);
        d.draw_line(cx, cy - 5, cx, cy + 5, Color::GREEN);
    }
}
