//! Grid cursor: keyboard-driven tile selection.

use crate::types::{GameAction, GRID_COLS, GRID_ROWS};

/// Position of the selection cursor on the 4x3 grid.
///
/// Movement clamps at the edges. The cursor knows nothing about tile state;
/// it only names a slot for the session to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridCursor {
    col: u8,
    row: u8,
}

impl GridCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    /// Tile index under the cursor (row-major).
    pub fn index(&self) -> usize {
        (self.row as usize) * (GRID_COLS as usize) + (self.col as usize)
    }

    /// Apply a cursor action; returns true if the cursor moved.
    ///
    /// Non-cursor actions are ignored so callers can feed every action in.
    pub fn apply(&mut self, action: GameAction) -> bool {
        let (col, row) = (self.col, self.row);
        match action {
            GameAction::CursorLeft => self.col = self.col.saturating_sub(1),
            GameAction::CursorRight => self.col = (self.col + 1).min(GRID_COLS - 1),
            GameAction::CursorUp => self.row = self.row.saturating_sub(1),
            GameAction::CursorDown => self.row = (self.row + 1).min(GRID_ROWS - 1),
            _ => {}
        }
        (col, row) != (self.col, self.row)
    }
}
