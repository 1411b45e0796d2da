//! Frame loop state resource.
//!
//! The main loop keeps iterating while the state is
//! [`LoopStates::Running`]. The only transition is to
//! [`LoopStates::Terminated`], applied by
//! [`quit_observer`](crate::events::quit::quit_observer).

use bevy_ecs::prelude::Resource;

/// Discrete states of the frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LoopStates {
    #[default]
    Running,
    Terminated,
}

/// Authoritative frame loop state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct LoopState {
    current: LoopStates,
}

impl LoopState {
    /// Create a new state initialized to [`LoopStates::Running`].
    pub fn new() -> Self {
        LoopState {
            current: LoopStates::Running,
        }
    }
    /// Stop the loop. Terminated is final.
    pub fn terminate(&mut self) {
        self.current = LoopStates::Terminated;
    }
    pub fn is_running(&self) -> bool {
        self.current == LoopStates::Running
    }
}
