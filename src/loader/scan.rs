use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::LoaderSettings;
use crate::grid::{GridStore, TrackRecord};
use crate::tags::load_snapshot;

/// One file that could not be read, keyed by its path.
#[derive(Clone, Debug)]
pub struct LoadFailure {
    pub path: PathBuf,
    pub error: String,
}

/// Outcome of a batch load.
#[derive(Clone, Debug, Default)]
pub struct LoadReport {
    pub added: usize,
    pub failures: Vec<LoadFailure>,
}

/// True when the file suffix is one of the supported audio containers.
pub fn is_supported_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            matches!(ext.to_ascii_lowercase().as_str(), "mp3" | "m4a" | "flac")
        })
        .unwrap_or(false)
}

/// Expand a set of file and/or directory inputs into supported audio file
/// paths, in input order. Non-files and unsupported suffixes are silently
/// skipped; directories are walked per the loader settings.
pub fn collect_audio_paths(inputs: &[PathBuf], settings: &LoaderSettings) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = Vec::new();

    for input in inputs {
        if input.is_dir() {
            let mut walker = WalkDir::new(input).follow_links(settings.follow_links);

            // Non-recursive = only the root directory.
            let depth_cap = if settings.recursive {
                settings.max_depth
            } else {
                Some(1)
            };
            if let Some(d) = depth_cap {
                walker = walker.max_depth(d);
            }

            for entry in walker.into_iter().filter_map(Result::ok) {
                let path = entry.path();
                if path.is_file() && is_supported_file(path) {
                    paths.push(path.to_path_buf());
                }
            }
        } else if input.is_file() && is_supported_file(input) {
            paths.push(input.clone());
        }
    }

    paths
}

/// Read snapshots for `paths` and append them to the store in one batch.
///
/// Paths already present in the store are silently skipped, as are
/// duplicates within the input itself. Unreadable files are isolated per
/// file and collected into the report; they never stop the batch.
pub fn load_into(store: &mut GridStore, paths: &[PathBuf]) -> LoadReport {
    let mut report = LoadReport::default();
    let mut records: Vec<TrackRecord> = Vec::new();

    for path in paths {
        if store.has_path(path) || records.iter().any(|r| &r.path == path) {
            continue;
        }
        match load_snapshot(path) {
            Ok(record) => records.push(record),
            Err(e) => report.failures.push(LoadFailure {
                path: path.clone(),
                error: e.to_string(),
            }),
        }
    }

    report.added = records.len();
    store.add_tracks(records);
    report
}
