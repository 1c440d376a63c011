//! Auto-motion paths.
//!
//! A path is a looping list of velocity segments. While an entity follows a
//! path, each segment's velocity is in force for exactly its tick count, then
//! the next segment takes over. The path only ever sets the desired velocity;
//! integration and collision still decide where the entity ends up.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One segment of an auto-motion path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathVector {
    /// Velocity applied while this segment is active.
    pub vel: Vec2,
    /// How many ticks the segment lasts. Zero-length segments are skipped.
    pub ticks: u32,
}

impl PathVector {
    pub fn new(vel: Vec2, ticks: u32) -> Self {
        Self { vel, ticks }
    }
}

/// Path cursor: the segment list plus where playback currently is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AutoPath {
    vectors: Vec<PathVector>,
    /// Index of the segment that fires next.
    next: usize,
    /// Ticks left in the active segment. Zero means "fire on the next tick".
    remaining: u32,
}

impl AutoPath {
    pub fn new(vectors: Vec<PathVector>) -> Self {
        if !vectors.is_empty() && vectors.iter().all(|v| v.ticks == 0) {
            log::warn!("auto path has {} segments, all zero-length; it will never fire", vectors.len());
        }
        Self {
            vectors,
            next: 0,
            remaining: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn vectors(&self) -> &[PathVector] {
        &self.vectors
    }

    /// Index of the segment that will fire next.
    pub fn next_index(&self) -> usize {
        self.next
    }

    /// Ticks left in the active segment.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Rewind to the first segment.
    pub fn restart(&mut self) {
        self.next = 0;
        self.remaining = 0;
    }

    /// Step the path by one tick.
    ///
    /// Returns the new velocity when a segment starts on this tick, `None`
    /// while the active segment is still running (or when nothing can fire).
    pub fn advance(&mut self) -> Option<Vec2> {
        if self.vectors.is_empty() {
            return None;
        }

        let mut started = None;
        if self.remaining == 0 {
            let len = self.vectors.len();
            let start = self.next % len;
            let index = (0..len)
                .map(|offset| (start + offset) % len)
                .find(|&i| self.vectors[i].ticks > 0)?;

            let segment = self.vectors[index];
            self.next = (index + 1) % len;
            self.remaining = segment.ticks;
            started = Some(segment.vel);
        }

        // The firing tick counts toward the segment's duration.
        self.remaining -= 1;
        started
    }
}
