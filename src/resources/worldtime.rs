//! Frame timing resource.
//!
//! [`WorldTime`] is the frame clock shared by every system: the delta of the
//! current frame, the total elapsed time and a frame counter. It is written
//! once per frame by [`update_world_time`](crate::systems::time::update_world_time);
//! the debug overlay shows the counter and elapsed time.
use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct WorldTime {
    /// Seconds since the loop started.
    pub elapsed: f32,
    /// Seconds covered by the current frame.
    pub delta: f32,
    /// Number of frames advanced so far.
    pub frame_count: u64,
}

impl WorldTime {
    /// Current frame delta in milliseconds.
    pub fn delta_ms(&self) -> f32 {
        self.delta * 1000.0
    }
}
