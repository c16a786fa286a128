use std::path::Path;

use super::columns::{ColumnKind, column_count, column_kind};
use super::record::{DEFAULT_COVER_MIME, TrackRecord};

/// Change notification emitted after each mutating store operation.
///
/// Ranges are inclusive row indices. The rendering layer drains these via
/// `take_events` and redraws accordingly; the store holds no view reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridEvent {
    Inserted { first: usize, last: usize },
    Removed { first: usize, last: usize },
    Updated { first: usize, last: usize },
}

/// A cell value as read from or written into the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Artwork { data: Option<Vec<u8>>, mime: String },
}

/// Ordered, mutable collection of `TrackRecord`s backing the editable view.
///
/// Insertion order is display order; the store never reorders. Paths are
/// unique within a store (callers suppress duplicates via `has_path`).
#[derive(Default)]
pub struct GridStore {
    tracks: Vec<TrackRecord>,
    events: Vec<GridEvent>,
}

impl GridStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row_count(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn track(&self, row: usize) -> Option<&TrackRecord> {
        self.tracks.get(row)
    }

    pub fn tracks(&self) -> &[TrackRecord] {
        &self.tracks
    }

    /// Append records in order. Empty input is a no-op (no event).
    pub fn add_tracks(&mut self, records: Vec<TrackRecord>) {
        if records.is_empty() {
            return;
        }
        let first = self.tracks.len();
        let last = first + records.len() - 1;
        self.tracks.extend(records);
        self.events.push(GridEvent::Inserted { first, last });
    }

    /// Remove all records. No-op when already empty.
    pub fn clear(&mut self) {
        if self.tracks.is_empty() {
            return;
        }
        let last = self.tracks.len() - 1;
        self.tracks.clear();
        self.events.push(GridEvent::Removed { first: 0, last });
    }

    /// True when a record with this exact path is already loaded.
    pub fn has_path(&self, path: &Path) -> bool {
        self.tracks.iter().any(|t| t.path == path)
    }

    /// The cell's display text: filename for identity columns, the field
    /// value for text columns. Artwork cells have no text representation.
    pub fn display_text(&self, row: usize, col: usize) -> String {
        let Some(track) = self.tracks.get(row) else {
            return String::new();
        };
        match column_kind(col) {
            Some(ColumnKind::Identity) => track.file_name(),
            Some(ColumnKind::Text(field)) => field.get(track).to_string(),
            Some(ColumnKind::Artwork) | None => String::new(),
        }
    }

    /// The cell value at `(row, col)`, or `None` when out of range.
    pub fn field(&self, row: usize, col: usize) -> Option<FieldValue> {
        let track = self.tracks.get(row)?;
        match column_kind(col)? {
            ColumnKind::Identity => Some(FieldValue::Text(track.file_name())),
            ColumnKind::Text(field) => Some(FieldValue::Text(field.get(track).to_string())),
            ColumnKind::Artwork => Some(FieldValue::Artwork {
                data: track.cover_data.clone(),
                mime: track.cover_mime.clone(),
            }),
        }
    }

    /// Write a cell value.
    ///
    /// Identity columns reject every write. Text columns mutate only when
    /// the value actually differs; an equal value is a no-op returning
    /// false. Artwork writes always apply (image payloads are not compared
    /// byte-for-byte). Any applied write sets the record dirty and emits an
    /// `Updated` event for the row.
    pub fn set_field(&mut self, row: usize, col: usize, value: FieldValue) -> bool {
        let Some(kind) = column_kind(col) else {
            return false;
        };
        let Some(track) = self.tracks.get_mut(row) else {
            return false;
        };

        match (kind, value) {
            (ColumnKind::Identity, _) => false,
            (ColumnKind::Text(field), FieldValue::Text(new)) => {
                if field.get(track) == new {
                    return false;
                }
                field.set(track, new);
                track.dirty = true;
                self.events.push(GridEvent::Updated { first: row, last: row });
                true
            }
            (ColumnKind::Artwork, FieldValue::Artwork { data, mime }) => {
                track.cover_data = data;
                track.cover_mime = if mime.is_empty() {
                    DEFAULT_COVER_MIME.to_string()
                } else {
                    mime
                };
                track.dirty = true;
                self.events.push(GridEvent::Updated { first: row, last: row });
                true
            }
            // Value shape does not match the column kind.
            _ => false,
        }
    }

    /// All records with unsaved changes, in store order.
    pub fn modified_records(&self) -> Vec<&TrackRecord> {
        self.tracks.iter().filter(|t| t.dirty).collect()
    }

    /// Row indices of records with unsaved changes, in store order.
    pub fn modified_rows(&self) -> Vec<usize> {
        self.tracks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.dirty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Clear the dirty flag on a single record after a successful persist.
    pub fn mark_saved(&mut self, row: usize) {
        if let Some(track) = self.tracks.get_mut(row) {
            if track.dirty {
                track.dirty = false;
                self.events.push(GridEvent::Updated { first: row, last: row });
            }
        }
    }

    /// Clear every dirty flag. Emits a whole-grid update when non-empty.
    pub fn mark_all_saved(&mut self) {
        if self.tracks.is_empty() {
            return;
        }
        for track in &mut self.tracks {
            track.dirty = false;
        }
        let last = self.tracks.len() - 1;
        self.events.push(GridEvent::Updated { first: 0, last });
    }

    /// Drain pending change notifications in emission order.
    pub fn take_events(&mut self) -> Vec<GridEvent> {
        std::mem::take(&mut self.events)
    }

    /// Grid dimensions as `(rows, columns)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.tracks.len(), column_count())
    }
}
