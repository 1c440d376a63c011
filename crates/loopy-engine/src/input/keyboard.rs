//! Per-tick keyboard snapshot.
//!
//! Key events update a live "held" set as they arrive. Once per simulation
//! tick the live set is latched into a snapshot, and the previous snapshot
//! is kept so key presses can be detected as edges.

use std::collections::HashSet;

use crate::input::queue::InputEvent;

/// Browser key codes for the keys the engine binds by default.
pub mod keys {
    pub const ESCAPE: u32 = 27;
    pub const SPACE: u32 = 32;
    pub const LEFT: u32 = 37;
    pub const UP: u32 = 38;
    pub const RIGHT: u32 = 39;
    pub const DOWN: u32 = 40;
    pub const A: u32 = 65;
    pub const D: u32 = 68;
    pub const S: u32 = 83;
    pub const W: u32 = 87;
}

#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashSet<u32>,
    current: HashSet<u32>,
    previous: HashSet<u32>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event into the live key set.
    pub fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown { key_code } => {
                self.held.insert(key_code);
            }
            InputEvent::KeyUp { key_code } => {
                self.held.remove(&key_code);
            }
        }
    }

    /// Latch the live key set for this tick. Call once per tick.
    pub fn snapshot(&mut self) {
        self.previous = std::mem::replace(&mut self.current, self.held.clone());
    }

    /// Held during this tick.
    pub fn down(&self, key: u32) -> bool {
        self.current.contains(&key)
    }

    /// Went down this tick.
    pub fn pressed(&self, key: u32) -> bool {
        self.current.contains(&key) && !self.previous.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_is_an_edge() {
        let mut state = KeyState::new();
        state.apply(&InputEvent::KeyDown { key_code: keys::SPACE });
        state.snapshot();
        assert!(state.pressed(keys::SPACE));
        assert!(state.down(keys::SPACE));

        state.snapshot();
        assert!(!state.pressed(keys::SPACE));
        assert!(state.down(keys::SPACE));
    }

    #[test]
    fn release_clears_down() {
        let mut state = KeyState::new();
        state.apply(&InputEvent::KeyDown { key_code: keys::A });
        state.snapshot();
        state.apply(&InputEvent::KeyUp { key_code: keys::A });
        state.snapshot();
        assert!(!state.down(keys::A));
        assert!(!state.pressed(keys::A));
    }

    #[test]
    fn events_wait_for_snapshot() {
        let mut state = KeyState::new();
        state.apply(&InputEvent::KeyDown { key_code: keys::W });
        assert!(!state.down(keys::W));
        state.snapshot();
        assert!(state.down(keys::W));
    }
}
