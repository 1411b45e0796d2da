//! Player component: facing and walk-cycle animation state.
//!
//! The player's position lives in its own
//! [`MapPosition`](crate::components::mapposition::MapPosition); this
//! component only tracks which way it faces and which walk frame is shown.
//!
//! # Animation
//!
//! While moving, elapsed milliseconds accumulate into a timer. Each time the
//! timer reaches the per-frame delay the frame index advances by one (wrapping)
//! and the timer keeps the remainder, so frame changes do not drift. When the
//! player stops, the idle pose (frame 0, timer 0) is restored.

use bevy_ecs::prelude::Component;

/// Number of frames in the walk cycle.
pub const PLAYER_FRAME_COUNT: usize = 3;

/// Facing of the unflipped source art. The sprites face left, so frames are
/// mirrored when the player faces right.
pub const ART_FACES_RIGHT: bool = false;

/// Frame to draw for the player this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerFrame {
    pub sprite_id: u32,
    /// Mirror horizontally when drawing.
    pub flip_h: bool,
}

#[derive(Component, Debug, Clone)]
pub struct Player {
    pub facing_right: bool,
    /// Sprite indices of the walk cycle, frame 0 is the idle pose.
    pub frames: [u32; PLAYER_FRAME_COUNT],
    /// Always `< PLAYER_FRAME_COUNT`.
    pub frame_index: usize,
    pub anim_timer_ms: f32,
    pub anim_delay_ms: f32,
}

impl Player {
    /// Idle player facing left. The delay is floored at 1 ms.
    pub fn new(frames: [u32; PLAYER_FRAME_COUNT], anim_delay_ms: f32) -> Self {
        Self {
            facing_right: false,
            frames,
            frame_index: 0,
            anim_timer_ms: 0.0,
            anim_delay_ms: anim_delay_ms.max(1.0),
        }
    }

    /// Advance facing and animation by one frame.
    ///
    /// `horizontal_intent` is the raw horizontal input sign: positive faces
    /// right, negative faces left, zero keeps the current facing.
    pub fn update(&mut self, moving: bool, elapsed_ms: f32, horizontal_intent: i8) {
        if !moving {
            self.frame_index = 0;
            self.anim_timer_ms = 0.0;
            return;
        }

        if horizontal_intent > 0 {
            self.facing_right = true;
        } else if horizontal_intent < 0 {
            self.facing_right = false;
        }

        self.anim_timer_ms += elapsed_ms;
        if self.anim_timer_ms >= self.anim_delay_ms {
            self.anim_timer_ms %= self.anim_delay_ms;
            self.frame_index = (self.frame_index + 1) % self.frames.len();
        }
    }

    /// Frame at the current index, mirrored when facing away from the art.
    pub fn current_image(&self) -> PlayerFrame {
        PlayerFrame {
            sprite_id: self.frames[self.frame_index],
            flip_h: self.facing_right != ART_FACES_RIGHT,
        }
    }
}
