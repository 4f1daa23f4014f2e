//! Keyboard cursor over the card grid.
//!
//! Arrow keys move one cell and wrap at the edges, so every card is reachable
//! from every other without a mouse.

use crate::map::InputCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardCursor {
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
}

impl BoardCursor {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            row: 0,
            col: 0,
            rows,
            cols,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Row-major card index under the cursor.
    pub fn index(&self) -> usize {
        self.row * self.cols + self.col
    }

    /// Jump to `index`; out-of-range indices are ignored.
    pub fn set_index(&mut self, index: usize) -> bool {
        if self.cols == 0 || index >= self.rows * self.cols {
            return false;
        }
        self.row = index / self.cols;
        self.col = index % self.cols;
        true
    }

    /// Resize for a new board and return to the top-left card.
    pub fn reset(&mut self, rows: usize, cols: usize) {
        *self = Self::new(rows, cols);
    }

    /// Apply a cursor command. Returns true if the command was a movement.
    pub fn apply(&mut self, cmd: InputCommand) -> bool {
        if self.rows == 0 || self.cols == 0 {
            return false;
        }
        match cmd {
            InputCommand::Up => self.row = (self.row + self.rows - 1) % self.rows,
            InputCommand::Down => self.row = (self.row + 1) % self.rows,
            InputCommand::Left => self.col = (self.col + self.cols - 1) % self.cols,
            InputCommand::Right => self.col = (self.col + 1) % self.cols,
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_and_wraps() {
        let mut c = BoardCursor::new(4, 4);
        assert_eq!(c.index(), 0);

        assert!(c.apply(InputCommand::Left));
        assert_eq!((c.row(), c.col()), (0, 3));
        assert!(c.apply(InputCommand::Up));
        assert_eq!((c.row(), c.col()), (3, 3));
        assert_eq!(c.index(), 15);

        assert!(c.apply(InputCommand::Down));
        assert!(c.apply(InputCommand::Right));
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_non_movement_ignored() {
        let mut c = BoardCursor::new(6, 6);
        assert!(!c.apply(InputCommand::Select));
        assert!(!c.apply(InputCommand::Click { x: 1, y: 1 }));
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_set_index() {
        let mut c = BoardCursor::new(6, 6);
        assert!(c.set_index(13));
        assert_eq!((c.row(), c.col()), (2, 1));
        assert!(!c.set_index(36));
        assert_eq!(c.index(), 13);
    }

    #[test]
    fn test_empty_grid_is_inert() {
        let mut c = BoardCursor::default();
        assert!(!c.apply(InputCommand::Down));
        assert!(!c.set_index(0));
    }
}
