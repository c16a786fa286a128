use super::record::TrackRecord;

/// The text fields a grid column can map onto.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TextField {
    Title,
    Artist,
    Album,
    TrackNumber,
    Year,
    Genre,
}

impl TextField {
    pub fn get<'a>(&self, record: &'a TrackRecord) -> &'a str {
        match self {
            TextField::Title => &record.title,
            TextField::Artist => &record.artist,
            TextField::Album => &record.album,
            TextField::TrackNumber => &record.track_number,
            TextField::Year => &record.year,
            TextField::Genre => &record.genre,
        }
    }

    pub fn set(&self, record: &mut TrackRecord, value: String) {
        match self {
            TextField::Title => record.title = value,
            TextField::Artist => record.artist = value,
            TextField::Album => record.album = value,
            TextField::TrackNumber => record.track_number = value,
            TextField::Year => record.year = value,
            TextField::Genre => record.genre = value,
        }
    }
}

/// What a column holds and how it behaves under editing and clipboard
/// operations. Every grid operation branches on this tag explicitly.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    /// Read-only filename derived from the record path.
    Identity,
    /// Binary cover image plus mime tag; editable only through the
    /// clipboard/cover-file protocol, never as free text.
    Artwork,
    /// Editable string field.
    Text(TextField),
}

pub struct Column {
    pub label: &'static str,
    pub kind: ColumnKind,
}

/// The fixed column schema. Order and kinds never change for the lifetime
/// of a store; navigation and selection reference columns by index into
/// this table.
pub const COLUMNS: &[Column] = &[
    Column { label: "Filename", kind: ColumnKind::Identity },
    Column { label: "Cover", kind: ColumnKind::Artwork },
    Column { label: "Title", kind: ColumnKind::Text(TextField::Title) },
    Column { label: "Artist", kind: ColumnKind::Text(TextField::Artist) },
    Column { label: "Album", kind: ColumnKind::Text(TextField::Album) },
    Column { label: "Track", kind: ColumnKind::Text(TextField::TrackNumber) },
    Column { label: "Year", kind: ColumnKind::Text(TextField::Year) },
    Column { label: "Genre", kind: ColumnKind::Text(TextField::Genre) },
];

pub fn column_count() -> usize {
    COLUMNS.len()
}

/// Kind of the column at `col`, or `None` when out of range.
pub fn column_kind(col: usize) -> Option<ColumnKind> {
    COLUMNS.get(col).map(|c| c.kind)
}

/// True when `col` is an editable text column.
pub fn is_text_column(col: usize) -> bool {
    matches!(column_kind(col), Some(ColumnKind::Text(_)))
}
