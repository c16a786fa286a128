//! Application model types: `App`, `Mode` and `Prompt`.
//!
//! The `App` struct is the editing session: it owns the grid store, the
//! selection controller and the cursor, and tracks which input mode the
//! key dispatcher is in.

use std::path::PathBuf;

use crate::clipboard::{self, ClipboardPort};
use crate::config::LoaderSettings;
use crate::grid::{FieldValue, GridStore, column_count, is_text_column};
use crate::loader::{collect_audio_paths, load_into};
use crate::nav::{Cursor, Dir};
use crate::selection::{SelectMode, SelectionController};
use crate::tags::save_modified;

/// What the key dispatcher is currently doing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Grid navigation, clipboard and command keys.
    Browse,
    /// A cell text editor is open; `buffer` is the in-progress value.
    Edit { buffer: String },
    /// A one-line input or confirmation prompt is open.
    Prompt(Prompt),
}

/// The prompt kinds the event loop can open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Prompt {
    /// Path of a file or directory to load into the grid.
    AddPath { buffer: String },
    /// Path of a cover image to apply to the selected artwork cells.
    CoverPath { buffer: String },
    /// "Discard N unsaved changes and clear?" (y/n)
    ConfirmClear,
    /// "Discard N unsaved changes and quit?" (y/n)
    ConfirmQuit,
}

/// The main application model.
pub struct App {
    pub store: GridStore,
    pub selection: SelectionController,
    pub cursor: Option<Cursor>,
    pub mode: Mode,
    /// Last operation outcome shown in the status box.
    pub status: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create an empty session.
    pub fn new() -> Self {
        Self {
            store: GridStore::new(),
            selection: SelectionController::new(),
            cursor: None,
            mode: Mode::Browse,
            status: None,
        }
    }

    /// Return true if the grid contains any rows.
    pub fn has_tracks(&self) -> bool {
        !self.store.is_empty()
    }

    /// Number of records with unsaved changes; drives the destructive-op
    /// confirmation prompts.
    pub fn modified_count(&self) -> usize {
        self.store.modified_records().len()
    }

    /// Set a status line message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = Some(msg.into());
    }

    /// Re-select the cursor cell, replacing the current selection.
    fn select_cursor(&mut self) {
        if let Some(cur) = self.cursor {
            self.selection.select(cur.row, cur.col, SelectMode::Replace);
        }
    }

    /// Place the cursor on the first cell after rows appear in an empty
    /// grid, or drop it when the grid emptied.
    pub fn sync_cursor(&mut self) {
        let rows = self.store.row_count();
        match self.cursor {
            None if rows > 0 => {
                self.cursor = Some(Cursor::new(0, 0));
                self.select_cursor();
            }
            Some(_) if rows == 0 => {
                self.cursor = None;
                self.selection.clear();
            }
            Some(mut cur) if cur.row >= rows => {
                cur.row = rows - 1;
                self.cursor = Some(cur);
                self.selection.truncate_rows(rows);
            }
            _ => {}
        }
    }

    /// Arrow step: move the cursor one cell; out-of-range moves are
    /// rejected. The landed-on cell becomes the selection.
    pub fn move_cursor(&mut self, dir: Dir) {
        let Some(mut cur) = self.cursor else {
            return;
        };
        if cur.step(dir, self.store.row_count()) {
            self.cursor = Some(cur);
        }
        self.select_cursor();
    }

    /// Shift+arrow: move the cursor and extend the selection to the new
    /// cell. Crossing into another column still replaces the selection
    /// (single-active-column invariant).
    pub fn extend_cursor(&mut self, dir: Dir) {
        let Some(mut cur) = self.cursor else {
            return;
        };
        let from_row = cur.row;
        if cur.step(dir, self.store.row_count()) {
            self.cursor = Some(cur);
        }
        self.selection
            .select_row_span(from_row, cur.row, cur.col, SelectMode::Extend);
    }

    /// Enter: commit any in-progress edit, then move to the next row in
    /// the same column when one exists.
    pub fn enter_pressed(&mut self) {
        if matches!(self.mode, Mode::Edit { .. }) {
            self.commit_edit();
        }
        if let Some(mut cur) = self.cursor {
            if cur.advance_row(self.store.row_count()) {
                self.cursor = Some(cur);
            }
            self.select_cursor();
        }
    }

    /// Tab: commit any edit, then advance to the next editable column,
    /// wrapping to the next row.
    pub fn tab_pressed(&mut self) {
        if matches!(self.mode, Mode::Edit { .. }) {
            self.commit_edit();
        }
        if let Some(mut cur) = self.cursor {
            if cur.tab_next(self.store.row_count()) {
                self.cursor = Some(cur);
            }
            self.select_cursor();
        }
    }

    /// Shift+Tab: mirror of `tab_pressed`.
    pub fn backtab_pressed(&mut self) {
        if matches!(self.mode, Mode::Edit { .. }) {
            self.commit_edit();
        }
        if let Some(mut cur) = self.cursor {
            if cur.tab_prev(self.store.row_count()) {
                self.cursor = Some(cur);
            }
            self.select_cursor();
        }
    }

    /// Open the cell editor on the cursor cell. `initial` replaces the
    /// current value (typing starts a fresh edit), `None` keeps it.
    /// Only text columns are editable this way.
    pub fn begin_edit(&mut self, initial: Option<char>) {
        let Some(cur) = self.cursor else {
            return;
        };
        if !is_text_column(cur.col) {
            return;
        }
        let buffer = match initial {
            Some(c) => c.to_string(),
            None => self.store.display_text(cur.row, cur.col),
        };
        self.mode = Mode::Edit { buffer };
    }

    /// Commit the open editor through `set_field` and close it. Returns
    /// true when the cell actually changed.
    pub fn commit_edit(&mut self) -> bool {
        let Mode::Edit { buffer } = std::mem::replace(&mut self.mode, Mode::Browse) else {
            return false;
        };
        let Some(cur) = self.cursor else {
            return false;
        };
        self.store.set_field(cur.row, cur.col, FieldValue::Text(buffer))
    }

    /// Close the editor without writing.
    pub fn cancel_edit(&mut self) {
        if matches!(self.mode, Mode::Edit { .. }) {
            self.mode = Mode::Browse;
        }
    }

    /// Delete/Backspace over the whole selection.
    pub fn delete_selection(&mut self) {
        let cleared = clipboard::clear_selection(&mut self.store, &self.selection);
        if cleared > 0 {
            self.set_status(format!("Cleared {cleared} cell(s)"));
        }
    }

    /// Copy the selection to the clipboard.
    pub fn copy_selection(&mut self, clip: &mut dyn ClipboardPort) {
        if clipboard::copy_selection(&self.store, &self.selection, clip) {
            self.set_status(format!("Copied {} cell(s)", self.selection.len()));
        }
    }

    /// Paste the clipboard onto the selection (broadcast).
    pub fn paste_selection(&mut self, clip: &mut dyn ClipboardPort) {
        let applied = clipboard::paste_to_selection(&mut self.store, &self.selection, clip);
        if applied > 0 {
            self.set_status(format!("Pasted into {applied} cell(s)"));
        }
    }

    /// Apply a cover image file to the selected artwork cells.
    pub fn apply_cover(&mut self, path: &std::path::Path) {
        match clipboard::apply_cover_file(&mut self.store, &self.selection, path) {
            Ok(0) => self.set_status("No artwork cells selected or unsupported image"),
            Ok(n) => self.set_status(format!("Cover applied to {n} track(s)")),
            Err(e) => self.set_status(format!("Could not read {}: {e}", path.display())),
        }
    }

    /// Expand `inputs` and load every new supported file into the grid.
    pub fn add_inputs(&mut self, inputs: &[PathBuf], settings: &LoaderSettings) {
        let paths = collect_audio_paths(inputs, settings);
        let report = load_into(&mut self.store, &paths);
        self.sync_cursor();

        if report.failures.is_empty() {
            self.set_status(format!("Loaded {} file(s)", report.added));
        } else {
            let mut msg = format!(
                "Loaded {} file(s), {} failed:",
                report.added,
                report.failures.len()
            );
            for failure in &report.failures {
                msg.push_str(&format!(" {}: {};", failure.path.display(), failure.error));
            }
            self.set_status(msg);
        }
    }

    /// Persist all modified records and report the outcome.
    pub fn save(&mut self) {
        let report = save_modified(&mut self.store);
        if report.attempted == 0 {
            self.set_status("No changes to save");
        } else if report.all_ok() {
            self.set_status(format!("Saved {} file(s)", report.attempted));
        } else {
            let mut msg = format!(
                "Saved {} of {} file(s):",
                report.attempted - report.failures.len(),
                report.attempted
            );
            for failure in &report.failures {
                msg.push_str(&format!(" {}: {};", failure.file_name, failure.error));
            }
            self.set_status(msg);
        }
    }

    /// Drop every record, the selection and the cursor.
    pub fn clear_all(&mut self) {
        self.store.clear();
        self.selection.clear();
        self.cursor = None;
        self.set_status("Cleared");
    }

    /// Grid dimensions helper for the renderer.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.store.row_count(), column_count())
    }
}
