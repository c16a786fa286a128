use crate::grid::{column_count, is_text_column};

/// Direction of a plain arrow-key step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

/// The current cell. Valid whenever the grid is non-empty; the session
/// holds `Option<Cursor>` and drops it when the grid empties.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step one cell in `dir`. Out-of-range targets are rejected: the
    /// cursor stays put and false is returned. No wrapping, no clamping.
    pub fn step(&mut self, dir: Dir, rows: usize) -> bool {
        let cols = column_count();
        let (row, col) = (self.row as isize, self.col as isize);
        let (r, c) = match dir {
            Dir::Up => (row - 1, col),
            Dir::Down => (row + 1, col),
            Dir::Left => (row, col - 1),
            Dir::Right => (row, col + 1),
        };
        if r < 0 || c < 0 || r as usize >= rows || c as usize >= cols {
            return false;
        }
        self.row = r as usize;
        self.col = c as usize;
        true
    }

    /// Enter semantics: same column, next row, when such a row exists.
    pub fn advance_row(&mut self, rows: usize) -> bool {
        if self.row + 1 < rows {
            self.row += 1;
            true
        } else {
            false
        }
    }

    /// Tab: next text column to the right, skipping identity and artwork
    /// columns; at the end of the row wrap to the first text column of the
    /// next row. No movement when no eligible target exists.
    pub fn tab_next(&mut self, rows: usize) -> bool {
        let cols = column_count();
        for c in self.col + 1..cols {
            if is_text_column(c) {
                self.col = c;
                return true;
            }
        }
        if self.row + 1 < rows {
            if let Some(c) = (0..cols).find(|&c| is_text_column(c)) {
                self.row += 1;
                self.col = c;
                return true;
            }
        }
        false
    }

    /// Shift+Tab: mirror of `tab_next`, scanning leftward and wrapping to
    /// the last text column of the previous row.
    pub fn tab_prev(&mut self, _rows: usize) -> bool {
        let cols = column_count();
        for c in (0..self.col).rev() {
            if is_text_column(c) {
                self.col = c;
                return true;
            }
        }
        if self.row > 0 {
            if let Some(c) = (0..cols).rev().find(|&c| is_text_column(c)) {
                self.row -= 1;
                self.col = c;
                return true;
            }
        }
        false
    }
}
