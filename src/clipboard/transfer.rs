use std::io;
use std::path::Path;

use crate::grid::{ColumnKind, DEFAULT_COVER_MIME, FieldValue, GridStore, column_kind};
use crate::selection::SelectionController;

use super::port::ClipboardPort;

/// Copy the selection to the clipboard.
///
/// Artwork column: the first selected cell's image bytes go to the image
/// slot; the rest of the selection is ignored (single-image copy). Any
/// other column: the selected cells' display text, in row order, joined by
/// newlines, goes to the text slot. Returns false when nothing was copied.
pub fn copy_selection(
    store: &GridStore,
    selection: &SelectionController,
    clip: &mut dyn ClipboardPort,
) -> bool {
    let Some(col) = selection.active_column() else {
        return false;
    };

    if column_kind(col) == Some(ColumnKind::Artwork) {
        let Some(row) = selection.selected_rows().next() else {
            return false;
        };
        let Some(track) = store.track(row) else {
            return false;
        };
        let Some(data) = &track.cover_data else {
            return false;
        };
        clip.set_image(data, &track.cover_mime);
        return true;
    }

    let lines: Vec<String> = selection
        .selected_rows()
        .map(|row| store.display_text(row, col))
        .collect();
    if lines.is_empty() {
        return false;
    }
    clip.set_text(&lines.join("\n"));
    true
}

/// Paste the clipboard onto the selection: one value broadcast identically
/// to every eligible selected cell, never a positional fan-out.
///
/// Returns the number of cells written.
pub fn paste_to_selection(
    store: &mut GridStore,
    selection: &SelectionController,
    clip: &mut dyn ClipboardPort,
) -> usize {
    let Some(col) = selection.active_column() else {
        return 0;
    };

    match column_kind(col) {
        Some(ColumnKind::Artwork) => {
            let Some(img) = clip.image() else {
                return 0;
            };
            let rows: Vec<usize> = selection.selected_rows().collect();
            let mut applied = 0;
            for row in rows {
                let value = FieldValue::Artwork {
                    data: Some(img.data.clone()),
                    mime: img.mime.clone(),
                };
                if store.set_field(row, col, value) {
                    applied += 1;
                }
            }
            applied
        }
        Some(ColumnKind::Text(_)) => {
            let Some(text) = clip.text() else {
                return 0;
            };
            let rows: Vec<usize> = selection.selected_rows().collect();
            let mut applied = 0;
            for row in rows {
                if store.set_field(row, col, FieldValue::Text(text.clone())) {
                    applied += 1;
                }
            }
            applied
        }
        // Identity cells are skipped; a selection can only sit in one
        // column, so the whole paste is a no-op.
        Some(ColumnKind::Identity) | None => 0,
    }
}

/// Delete/Backspace over the whole selection: text cells clear to the
/// empty string, artwork cells to (absent, default mime), identity cells
/// are skipped. Everything routes through `set_field` so dirty tracking
/// and change notifications hold.
pub fn clear_selection(store: &mut GridStore, selection: &SelectionController) -> usize {
    let mut cleared = 0;
    for (row, col) in selection.cells() {
        let value = match column_kind(col) {
            Some(ColumnKind::Text(_)) => FieldValue::Text(String::new()),
            Some(ColumnKind::Artwork) => FieldValue::Artwork {
                data: None,
                mime: DEFAULT_COVER_MIME.to_string(),
            },
            Some(ColumnKind::Identity) | None => continue,
        };
        if store.set_field(row, col, value) {
            cleared += 1;
        }
    }
    cleared
}

/// Mime tag for a cover image file, derived from its suffix. `None` for
/// anything that is not an accepted cover format.
pub fn cover_mime_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        _ => None,
    }
}

/// Apply an on-disk cover image to every selected artwork cell (the
/// drag-drop path). Rejects non-image suffixes; IO errors surface to the
/// caller. Returns the number of cells written.
pub fn apply_cover_file(
    store: &mut GridStore,
    selection: &SelectionController,
    path: &Path,
) -> io::Result<usize> {
    let Some(mime) = cover_mime_for(path) else {
        return Ok(0);
    };
    let Some(col) = selection.active_column() else {
        return Ok(0);
    };
    if column_kind(col) != Some(ColumnKind::Artwork) {
        return Ok(0);
    }

    let data = std::fs::read(path)?;
    let rows: Vec<usize> = selection.selected_rows().collect();
    let mut applied = 0;
    for row in rows {
        let value = FieldValue::Artwork {
            data: Some(data.clone()),
            mime: mime.to_string(),
        };
        if store.set_field(row, col, value) {
            applied += 1;
        }
    }
    Ok(applied)
}
