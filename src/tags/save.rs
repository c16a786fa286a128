use crate::grid::GridStore;

use super::adapter::persist;

/// One file that failed to save: filename plus the underlying error text.
#[derive(Clone, Debug)]
pub struct SaveFailure {
    pub file_name: String,
    pub error: String,
}

/// Outcome of a batch save: how many records were attempted and which ones
/// failed. Successes have their dirty flags cleared even when siblings in
/// the same batch fail.
#[derive(Clone, Debug, Default)]
pub struct SaveReport {
    pub attempted: usize,
    pub failures: Vec<SaveFailure>,
}

impl SaveReport {
    pub fn all_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Persist every modified record, sequentially. A failure on one file
/// never aborts the batch; failed records keep `dirty = true` so the user
/// can retry, successful ones are marked saved immediately.
pub fn save_modified(store: &mut GridStore) -> SaveReport {
    let rows = store.modified_rows();
    let mut report = SaveReport { attempted: rows.len(), ..SaveReport::default() };

    for row in rows {
        let Some(record) = store.track(row) else {
            continue;
        };
        let file_name = record.file_name();
        match persist(record) {
            Ok(()) => store.mark_saved(row),
            Err(e) => report.failures.push(SaveFailure { file_name, error: e.to_string() }),
        }
    }

    report
}
