//! Record store: the immutable command catalog, loaded once at startup.

use std::path::Path;

use tracing::{error, warn};

use crate::state::CommandRecord;

/// Read-only collection of [`CommandRecord`]s. Empty until a load succeeds;
/// never mutated afterwards.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<CommandRecord>,
}

impl RecordStore {
    pub fn from_records(records: Vec<CommandRecord>) -> Self {
        Self { records: dedup_by_id(records) }
    }

    /// One-shot load from a JSON document (array of records). Any read or
    /// parse failure leaves the store empty and logs the error; the search
    /// core keeps running against an empty catalog.
    pub fn load(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) => {
                error!("failed to read syntax data {}: {e}", path.display());
                return Self::default();
            }
        };
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Self {
        match serde_json::from_str::<Vec<CommandRecord>>(text) {
            Ok(records) => Self::from_records(records),
            Err(e) => {
                error!("failed to parse syntax data: {e}");
                Self::default()
            }
        }
    }

    pub fn records(&self) -> &[CommandRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&CommandRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Ids must be unique within the store; later duplicates are dropped.
fn dedup_by_id(records: Vec<CommandRecord>) -> Vec<CommandRecord> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::with_capacity(records.len());
    for record in records {
        if seen.insert(record.id.clone()) {
            out.push(record);
        } else {
            warn!("duplicate record id {:?} dropped", record.id);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_record_array() {
        let store = RecordStore::from_json_str(
            r#"[{"id":"1","command":"ls -la","description":"List all files",
                 "category":"bash","tags":["files","listing"]}]"#,
        );
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].command, "ls -la");
        assert_eq!(store.records()[0].tags, vec!["files", "listing"]);
    }

    #[test]
    fn malformed_document_yields_empty_store() {
        assert!(RecordStore::from_json_str("{not json").is_empty());
        assert!(RecordStore::from_json_str(r#"{"id":"not-an-array"}"#).is_empty());
    }

    #[test]
    fn missing_file_yields_empty_store() {
        assert!(RecordStore::load(Path::new("/nonexistent/syntax.json")).is_empty());
    }

    #[test]
    fn duplicate_ids_keep_first_occurrence() {
        let store = RecordStore::from_json_str(
            r#"[{"id":"1","command":"pwd","description":"a","category":"bash","tags":[]},
                {"id":"1","command":"cd","description":"b","category":"bash","tags":[]}]"#,
        );
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].command, "pwd");
    }
}
