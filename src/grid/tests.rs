use super::*;
use std::path::{Path, PathBuf};

fn rec(name: &str) -> TrackRecord {
    TrackRecord::new(PathBuf::from(format!("/music/{name}")))
}

fn text_col(field: TextField) -> usize {
    COLUMNS
        .iter()
        .position(|c| c.kind == ColumnKind::Text(field))
        .unwrap()
}

const IDENTITY_COL: usize = 0;
const ARTWORK_COL: usize = 1;

#[test]
fn add_tracks_appends_in_order_and_counts_rows() {
    let mut store = GridStore::new();
    assert_eq!(store.row_count(), 0);

    store.add_tracks(vec![rec("a.mp3"), rec("b.m4a")]);
    store.add_tracks(vec![rec("c.flac")]);

    assert_eq!(store.row_count(), 3);
    assert!(store.has_path(Path::new("/music/a.mp3")));
    assert!(store.has_path(Path::new("/music/b.m4a")));
    assert!(store.has_path(Path::new("/music/c.flac")));
    assert!(!store.has_path(Path::new("/music/d.mp3")));
    assert_eq!(store.track(0).unwrap().file_name(), "a.mp3");
    assert_eq!(store.track(2).unwrap().file_name(), "c.flac");
}

#[test]
fn add_tracks_empty_input_is_a_noop() {
    let mut store = GridStore::new();
    store.add_tracks(Vec::new());
    assert_eq!(store.row_count(), 0);
    assert!(store.take_events().is_empty());
}

#[test]
fn add_and_clear_emit_structural_events() {
    let mut store = GridStore::new();
    store.add_tracks(vec![rec("a.mp3"), rec("b.mp3")]);
    store.add_tracks(vec![rec("c.mp3")]);
    assert_eq!(
        store.take_events(),
        vec![
            GridEvent::Inserted { first: 0, last: 1 },
            GridEvent::Inserted { first: 2, last: 2 },
        ]
    );

    store.clear();
    assert_eq!(store.row_count(), 0);
    assert_eq!(store.take_events(), vec![GridEvent::Removed { first: 0, last: 2 }]);

    // Clearing an empty store emits nothing.
    store.clear();
    assert!(store.take_events().is_empty());
}

#[test]
fn set_field_on_identity_column_always_rejects() {
    let mut store = GridStore::new();
    store.add_tracks(vec![rec("a.mp3")]);
    store.take_events();

    assert!(!store.set_field(0, IDENTITY_COL, FieldValue::Text("renamed".into())));
    assert_eq!(store.track(0).unwrap().file_name(), "a.mp3");
    assert!(!store.track(0).unwrap().dirty);
    assert!(store.take_events().is_empty());
}

#[test]
fn set_field_text_noop_on_equal_value() {
    let mut store = GridStore::new();
    store.add_tracks(vec![rec("a.mp3")]);
    let col = text_col(TextField::Title);

    assert!(!store.set_field(0, col, FieldValue::Text(String::new())));
    assert!(!store.track(0).unwrap().dirty);

    assert!(store.set_field(0, col, FieldValue::Text("X".into())));
    assert!(store.track(0).unwrap().dirty);
    assert_eq!(store.track(0).unwrap().title, "X");

    // Writing the same value again changes nothing.
    assert!(!store.set_field(0, col, FieldValue::Text("X".into())));
}

#[test]
fn set_field_artwork_always_applies() {
    let mut store = GridStore::new();
    store.add_tracks(vec![rec("a.mp3")]);

    let payload = FieldValue::Artwork {
        data: Some(vec![1, 2, 3]),
        mime: "image/png".into(),
    };
    assert!(store.set_field(0, ARTWORK_COL, payload.clone()));
    assert!(store.track(0).unwrap().dirty);
    assert_eq!(store.track(0).unwrap().cover_mime, "image/png");

    // No equality short-circuit for image payloads.
    assert!(store.set_field(0, ARTWORK_COL, payload));

    // Clearing back to absent keeps the default mime.
    assert!(store.set_field(
        0,
        ARTWORK_COL,
        FieldValue::Artwork { data: None, mime: DEFAULT_COVER_MIME.into() }
    ));
    assert!(!store.track(0).unwrap().has_cover());
}

#[test]
fn set_field_rejects_kind_mismatch() {
    let mut store = GridStore::new();
    store.add_tracks(vec![rec("a.mp3")]);

    assert!(!store.set_field(0, ARTWORK_COL, FieldValue::Text("nope".into())));
    assert!(!store.set_field(
        0,
        text_col(TextField::Genre),
        FieldValue::Artwork { data: None, mime: String::new() }
    ));
    assert!(!store.track(0).unwrap().dirty);
}

#[test]
fn set_field_out_of_range_is_rejected() {
    let mut store = GridStore::new();
    store.add_tracks(vec![rec("a.mp3")]);
    assert!(!store.set_field(5, text_col(TextField::Title), FieldValue::Text("X".into())));
    assert!(!store.set_field(0, 99, FieldValue::Text("X".into())));
}

#[test]
fn modified_records_and_mark_all_saved() {
    let mut store = GridStore::new();
    store.add_tracks(vec![rec("a.mp3"), rec("b.m4a"), rec("c.flac")]);
    assert_eq!(store.row_count(), 3);

    assert!(store.set_field(1, text_col(TextField::Title), FieldValue::Text("X".into())));
    let modified = store.modified_records();
    assert_eq!(modified.len(), 1);
    assert_eq!(modified[0].title, "X");

    store.mark_all_saved();
    assert!(store.modified_records().is_empty());
}

#[test]
fn mark_saved_clears_a_single_record() {
    let mut store = GridStore::new();
    store.add_tracks(vec![rec("a.mp3"), rec("b.mp3")]);
    let col = text_col(TextField::Genre);
    store.set_field(0, col, FieldValue::Text("Jazz".into()));
    store.set_field(1, col, FieldValue::Text("Rock".into()));

    store.mark_saved(0);
    assert_eq!(store.modified_rows(), vec![1]);

    // Marking a clean row again emits no event.
    store.take_events();
    store.mark_saved(0);
    assert!(store.take_events().is_empty());
}

#[test]
fn display_text_derives_identity_from_path() {
    let mut store = GridStore::new();
    let mut r = rec("a.mp3");
    r.title = "Song".into();
    store.add_tracks(vec![r]);

    assert_eq!(store.display_text(0, IDENTITY_COL), "a.mp3");
    assert_eq!(store.display_text(0, text_col(TextField::Title)), "Song");
    assert_eq!(store.display_text(0, ARTWORK_COL), "");
    assert_eq!(store.display_text(7, 0), "");
}

#[test]
fn record_equality_ignores_dirty_and_cover() {
    let mut a = rec("a.mp3");
    let mut b = rec("a.mp3");
    a.dirty = true;
    a.cover_data = Some(vec![9]);
    b.cover_mime = "image/png".into();
    assert_eq!(a, b);

    b.title = "different".into();
    assert_ne!(a, b);
}
