use super::*;
use crate::grid::TrackRecord;
use crate::nav::{Cursor, Dir};
use crate::selection::SelectMode;
use std::path::PathBuf;

// Column layout: 0 = Filename, 1 = Cover, 2 = Title.
const IDENTITY_COL: usize = 0;
const ARTWORK_COL: usize = 1;
const TITLE_COL: usize = 2;

fn app_with(names: &[&str]) -> App {
    let mut app = App::new();
    app.store.add_tracks(
        names
            .iter()
            .map(|n| TrackRecord::new(PathBuf::from(format!("/music/{n}"))))
            .collect(),
    );
    app.sync_cursor();
    app
}

#[test]
fn empty_session_navigation_is_a_noop() {
    let mut app = App::new();
    assert!(app.cursor.is_none());

    app.move_cursor(Dir::Down);
    app.enter_pressed();
    app.tab_pressed();
    app.backtab_pressed();
    app.delete_selection();

    assert!(app.cursor.is_none());
    assert!(app.selection.is_empty());
}

#[test]
fn loading_rows_places_the_cursor_on_the_first_cell() {
    let app = app_with(&["a.mp3"]);
    assert_eq!(app.cursor, Some(Cursor::new(0, 0)));
    assert!(app.selection.contains(0, 0));
}

#[test]
fn typing_starts_a_fresh_edit_and_commit_writes_through() {
    let mut app = app_with(&["a.mp3", "b.mp3"]);
    app.cursor = Some(Cursor::new(0, TITLE_COL));

    app.begin_edit(Some('X'));
    assert_eq!(app.mode, Mode::Edit { buffer: "X".into() });

    assert!(app.commit_edit());
    assert_eq!(app.mode, Mode::Browse);
    assert_eq!(app.store.track(0).unwrap().title, "X");
    assert!(app.store.track(0).unwrap().dirty);
}

#[test]
fn begin_edit_without_initial_keeps_the_current_value() {
    let mut app = app_with(&["a.mp3"]);
    app.cursor = Some(Cursor::new(0, TITLE_COL));
    app.begin_edit(Some('A'));
    app.commit_edit();

    app.begin_edit(None);
    assert_eq!(app.mode, Mode::Edit { buffer: "A".into() });
}

#[test]
fn begin_edit_is_rejected_off_text_columns() {
    let mut app = app_with(&["a.mp3"]);

    app.cursor = Some(Cursor::new(0, IDENTITY_COL));
    app.begin_edit(Some('x'));
    assert_eq!(app.mode, Mode::Browse);

    app.cursor = Some(Cursor::new(0, ARTWORK_COL));
    app.begin_edit(None);
    assert_eq!(app.mode, Mode::Browse);
}

#[test]
fn cancel_edit_discards_the_buffer() {
    let mut app = app_with(&["a.mp3"]);
    app.cursor = Some(Cursor::new(0, TITLE_COL));
    app.begin_edit(Some('Z'));
    app.cancel_edit();

    assert_eq!(app.mode, Mode::Browse);
    assert_eq!(app.store.track(0).unwrap().title, "");
    assert!(!app.store.track(0).unwrap().dirty);
}

#[test]
fn enter_commits_the_edit_and_moves_down_one_row() {
    let mut app = app_with(&["a.mp3", "b.mp3"]);
    app.cursor = Some(Cursor::new(0, TITLE_COL));

    app.begin_edit(Some('Q'));
    app.enter_pressed();

    assert_eq!(app.store.track(0).unwrap().title, "Q");
    assert_eq!(app.cursor, Some(Cursor::new(1, TITLE_COL)));
    assert!(app.selection.contains(1, TITLE_COL));
}

#[test]
fn enter_on_the_last_row_stays_put() {
    let mut app = app_with(&["a.mp3"]);
    app.cursor = Some(Cursor::new(0, TITLE_COL));
    app.enter_pressed();
    assert_eq!(app.cursor, Some(Cursor::new(0, TITLE_COL)));
}

#[test]
fn tab_commits_and_advances_to_the_next_text_column() {
    let mut app = app_with(&["a.mp3"]);
    app.cursor = Some(Cursor::new(0, TITLE_COL));
    app.begin_edit(Some('T'));
    app.tab_pressed();

    assert_eq!(app.store.track(0).unwrap().title, "T");
    assert_eq!(app.cursor, Some(Cursor::new(0, TITLE_COL + 1)));
}

#[test]
fn move_cursor_replaces_the_selection() {
    let mut app = app_with(&["a.mp3", "b.mp3", "c.mp3"]);
    app.cursor = Some(Cursor::new(0, TITLE_COL));
    app.extend_cursor(Dir::Down);
    app.extend_cursor(Dir::Down);
    assert_eq!(app.selection.len(), 3);

    app.move_cursor(Dir::Up);
    assert_eq!(app.selection.len(), 1);
    assert!(app.selection.contains(1, TITLE_COL));
}

#[test]
fn extending_across_columns_still_replaces() {
    let mut app = app_with(&["a.mp3", "b.mp3"]);
    app.cursor = Some(Cursor::new(0, TITLE_COL));
    app.extend_cursor(Dir::Down);
    assert_eq!(app.selection.len(), 2);

    app.extend_cursor(Dir::Right);
    assert_eq!(app.selection.cells(), vec![(1, TITLE_COL + 1)]);
}

#[test]
fn delete_clears_text_cells_but_never_filenames() {
    let mut app = app_with(&["a.mp3", "b.mp3"]);
    app.cursor = Some(Cursor::new(0, TITLE_COL));
    app.begin_edit(Some('A'));
    app.commit_edit();

    app.selection.select(0, TITLE_COL, SelectMode::Replace);
    app.delete_selection();
    assert_eq!(app.store.track(0).unwrap().title, "");

    app.selection.select(0, IDENTITY_COL, SelectMode::Replace);
    app.delete_selection();
    assert_eq!(app.store.track(0).unwrap().file_name(), "a.mp3");
}

#[test]
fn clear_all_resets_cursor_selection_and_rows() {
    let mut app = app_with(&["a.mp3", "b.mp3"]);
    app.clear_all();

    assert!(!app.has_tracks());
    assert!(app.cursor.is_none());
    assert!(app.selection.is_empty());
    assert_eq!(app.modified_count(), 0);
}

#[test]
fn sync_cursor_clamps_after_the_grid_shrinks() {
    let mut app = app_with(&["a.mp3", "b.mp3", "c.mp3"]);
    app.cursor = Some(Cursor::new(2, TITLE_COL));

    app.store.clear();
    app.store
        .add_tracks(vec![TrackRecord::new(PathBuf::from("/music/x.mp3"))]);
    app.sync_cursor();

    assert_eq!(app.cursor.unwrap().row, 0);
}

#[test]
fn save_with_no_changes_reports_nothing_to_do() {
    let mut app = app_with(&["a.mp3"]);
    app.save();
    assert_eq!(app.status.as_deref(), Some("No changes to save"));
}
