use std::path::PathBuf;

/// Mime tag used when a record has no cover or the source is unknown.
pub const DEFAULT_COVER_MIME: &str = "image/jpeg";

/// One file's editable metadata plus its dirty flag.
///
/// `path` is the record's identity and never changes after creation. All
/// other fields are mutated only through `GridStore::set_field`, which is
/// what keeps `dirty` honest.
#[derive(Clone, Debug)]
pub struct TrackRecord {
    pub path: PathBuf,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub track_number: String,
    pub year: String,
    pub genre: String,
    pub cover_data: Option<Vec<u8>>,
    pub cover_mime: String,
    pub dirty: bool,
}

impl TrackRecord {
    /// Create an empty record for `path`.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            title: String::new(),
            artist: String::new(),
            album: String::new(),
            track_number: String::new(),
            year: String::new(),
            genre: String::new(),
            cover_data: None,
            cover_mime: DEFAULT_COVER_MIME.to_string(),
            dirty: false,
        }
    }

    /// Filename component of `path`, shown in the identity column.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string()
    }

    /// True when the record carries an embedded cover image.
    pub fn has_cover(&self) -> bool {
        self.cover_data.is_some()
    }
}

// Duplicate detection compares identity and text fields only; dirty state
// and cover bytes do not participate.
impl PartialEq for TrackRecord {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
            && self.title == other.title
            && self.artist == other.artist
            && self.album == other.album
            && self.track_number == other.track_number
            && self.year == other.year
            && self.genre == other.genre
    }
}

impl Eq for TrackRecord {}
