use std::collections::BTreeSet;

/// How an incoming selection combines with the current one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectMode {
    /// Discard the current rows and select only the incoming ones.
    Replace,
    /// Add the incoming rows to the current selection.
    Extend,
}

/// Enforces the "single active column, many rows" selection shape.
///
/// Any selection request names a column. If it differs from the active one
/// the old selection is discarded entirely and the new column becomes
/// active, regardless of the requested mode; rectangular multi-column
/// selections can never form. An explicit `clear` resets the active column.
#[derive(Default)]
pub struct SelectionController {
    active_column: Option<usize>,
    rows: BTreeSet<usize>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the selection and unset the active column.
    pub fn clear(&mut self) {
        self.active_column = None;
        self.rows.clear();
    }

    /// Select `(row, col)` with the given combination mode.
    pub fn select(&mut self, row: usize, col: usize, mode: SelectMode) {
        if self.switch_column(col) {
            self.rows.insert(row);
            return;
        }
        match mode {
            SelectMode::Replace => {
                self.rows.clear();
                self.rows.insert(row);
            }
            SelectMode::Extend => {
                self.rows.insert(row);
            }
        }
    }

    /// Select every row between `a` and `b` inclusive, in `col`. Used for
    /// shift-arrow range selection; same column-switch contract as `select`.
    pub fn select_row_span(&mut self, a: usize, b: usize, col: usize, mode: SelectMode) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        if self.switch_column(col) || mode == SelectMode::Replace {
            self.rows.clear();
        }
        self.rows.extend(lo..=hi);
    }

    /// Adopt `col`, discarding the old rows when it differs from the active
    /// column. Returns true when a switch happened.
    fn switch_column(&mut self, col: usize) -> bool {
        match self.active_column {
            Some(active) if active != col => {
                self.rows.clear();
                self.active_column = Some(col);
                true
            }
            Some(_) => false,
            None => {
                self.active_column = Some(col);
                false
            }
        }
    }

    /// Drop rows at or past `row_count` after the grid shrank.
    pub fn truncate_rows(&mut self, row_count: usize) {
        self.rows.retain(|&r| r < row_count);
        if self.rows.is_empty() {
            self.active_column = None;
        }
    }

    pub fn active_column(&self) -> Option<usize> {
        self.active_column
    }

    /// Selected rows in ascending (display) order.
    pub fn selected_rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows.iter().copied()
    }

    /// Selected cells as `(row, col)` pairs in row order.
    pub fn cells(&self) -> Vec<(usize, usize)> {
        match self.active_column {
            Some(col) => self.rows.iter().map(|&r| (r, col)).collect(),
            None => Vec::new(),
        }
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.active_column == Some(col) && self.rows.contains(&row)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
