//! Sprite-sheet animation counters.
//!
//! A sheet is a grid of equally sized frames. Playback walks the columns of
//! the current row, then moves on to the next row, wrapping back to the first
//! frame after the last one. Advancement is tick-based: the sheet steps once
//! every `delay` simulation frames.

use serde::{Deserialize, Serialize};

/// Animation state for an entity's sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteSheet {
    /// Number of frame columns in the sheet.
    pub columns: u32,
    /// Number of frame rows in the sheet.
    pub rows: u32,
    /// Current column.
    pub column: u32,
    /// Current row.
    pub row: u32,
    /// Frames between advances. Zero disables playback.
    pub delay: u32,
}

impl SpriteSheet {
    /// Create a sheet positioned on its first frame.
    pub fn new(columns: u32, rows: u32, delay: u32) -> Self {
        Self {
            columns,
            rows,
            column: 0,
            row: 0,
            delay,
        }
    }

    /// A single-frame sheet that never advances.
    pub fn still() -> Self {
        Self::new(1, 1, 0)
    }

    /// Advance for simulation frame `frame`. Returns true if the frame changed.
    ///
    /// Fires only when `frame` is a multiple of `delay`; a sheet with no
    /// columns or a zero delay never fires.
    pub fn advance(&mut self, frame: u64) -> bool {
        if self.columns == 0 || self.delay == 0 || frame % u64::from(self.delay) != 0 {
            return false;
        }

        if self.column + 1 >= self.columns {
            self.column = 0;
            self.row += 1;
            if self.row >= self.rows {
                self.row = 0;
            }
        } else {
            self.column += 1;
        }
        true
    }

    /// Current frame as (column, row).
    pub fn current_frame(&self) -> (u32, u32) {
        (self.column, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_only_on_delay_multiples() {
        let mut sheet = SpriteSheet::new(4, 1, 3);
        assert!(!sheet.advance(1));
        assert!(!sheet.advance(2));
        assert!(sheet.advance(3));
        assert_eq!(sheet.current_frame(), (1, 0));
    }

    #[test]
    fn wraps_columns_into_next_row() {
        let mut sheet = SpriteSheet::new(2, 2, 1);
        sheet.advance(1);
        assert_eq!(sheet.current_frame(), (1, 0));
        sheet.advance(2);
        assert_eq!(sheet.current_frame(), (0, 1));
        sheet.advance(3);
        assert_eq!(sheet.current_frame(), (1, 1));
        sheet.advance(4);
        assert_eq!(sheet.current_frame(), (0, 0)); // back to the start
    }

    #[test]
    fn zero_delay_never_fires() {
        let mut sheet = SpriteSheet::new(8, 1, 0);
        for frame in 0..100 {
            assert!(!sheet.advance(frame));
        }
        assert_eq!(sheet.current_frame(), (0, 0));
    }

    #[test]
    fn zero_columns_never_fires() {
        let mut sheet = SpriteSheet::new(0, 1, 1);
        assert!(!sheet.advance(1));
    }

    #[test]
    fn still_sheet_never_moves() {
        let mut sheet = SpriteSheet::still();
        assert!(!sheet.advance(1));
        assert_eq!(sheet.current_frame(), (0, 0));
    }
}
