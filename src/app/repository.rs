// ipscmon - app/repository.rs
//
// The inventory repository owns the current immutable snapshot and the
// identity of the source file. Reloading produces a fresh snapshot and
// replaces the old one wholesale; snapshots are never mutated in place.

use crate::core::loader::{self, LoaderConfig};
use crate::core::model::{InventorySummary, LoadOutcome, Snapshot};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Owns the inventory source path and the most recently loaded snapshot.
#[derive(Debug)]
pub struct InventoryRepository {
    source: PathBuf,
    config: LoaderConfig,
    snapshot: Snapshot,
}

impl InventoryRepository {
    /// Create a repository for a source file without loading it yet.
    pub fn new(source: PathBuf, config: LoaderConfig) -> Self {
        Self {
            source,
            config,
            snapshot: Snapshot::default(),
        }
    }

    /// The inventory source path.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// The current snapshot. Default (empty, `LoadOutcome::Empty`) until
    /// the first `reload`.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Point the repository at a different source file. The current
    /// snapshot is kept until the next `reload`.
    pub fn set_source(&mut self, source: PathBuf) {
        self.source = source;
    }

    /// Load the source from disk, replacing the current snapshot.
    ///
    /// Never returns an error: a failed read or parse degrades to an empty
    /// snapshot carrying `LoadOutcome::Failed` so the UI can warn without
    /// losing the rest of its state. Loading the same unmodified file twice
    /// yields field-for-field identical record sets.
    pub fn reload(&mut self) -> &Snapshot {
        let started = Instant::now();
        let source_modified = file_modified(&self.source);

        let snapshot = match std::fs::read_to_string(&self.source) {
            Ok(content) => match loader::parse_inventory(&content, &self.source, &self.config) {
                Ok(result) => {
                    let mut summary = InventorySummary::from_records(&result.records);
                    summary.rows_dropped = result.rows_dropped;
                    summary.duration = started.elapsed();
                    let outcome = if result.records.is_empty() {
                        LoadOutcome::Empty
                    } else {
                        LoadOutcome::Loaded
                    };
                    Snapshot {
                        records: result.records,
                        outcome,
                        summary,
                        loaded_at: Some(Utc::now()),
                        source_modified,
                    }
                }
                Err(e) => {
                    tracing::warn!(source = %self.source.display(), error = %e, "Inventory parse failed");
                    failed_snapshot(e.to_string(), source_modified)
                }
            },
            Err(e) => {
                tracing::warn!(source = %self.source.display(), error = %e, "Inventory read failed");
                failed_snapshot(
                    format!("Cannot read '{}': {e}", self.source.display()),
                    source_modified,
                )
            }
        };

        self.snapshot = snapshot;
        &self.snapshot
    }

    /// True when the source file's on-disk mtime differs from the one
    /// recorded at load time, meaning a reload would pick up new data.
    /// Metadata failures report not-stale; the explicit Reload action still
    /// works regardless.
    pub fn is_stale(&self) -> bool {
        match (self.snapshot.source_modified, file_modified(&self.source)) {
            (Some(loaded), Some(current)) => current != loaded,
            _ => false,
        }
    }
}

fn failed_snapshot(message: String, source_modified: Option<DateTime<Utc>>) -> Snapshot {
    Snapshot {
        records: Vec::new(),
        outcome: LoadOutcome::Failed(message),
        summary: InventorySummary::default(),
        loaded_at: Some(Utc::now()),
        source_modified,
    }
}

fn file_modified(path: &Path) -> Option<DateTime<Utc>> {
    std::fs::metadata(path)
        .and_then(|m| m.modified())
        .ok()
        .map(DateTime::<Utc>::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
Radio System Inventory,,,,
Exported,,,,
,,,,
ID,Cerro,Alias,IP Ethernet,Tipo Vinculo
150,Alpha,RPT-A,10.0.0.1,Master IPSC
160,Beta,RPT-B,10.0.0.2,Peer
";

    fn write_inventory(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_reload_replaces_snapshot() {
        let file = write_inventory(SAMPLE);
        let mut repo =
            InventoryRepository::new(file.path().to_path_buf(), LoaderConfig::default());
        assert_eq!(repo.snapshot().outcome, LoadOutcome::Empty);

        let snapshot = repo.reload();
        assert_eq!(snapshot.outcome, LoadOutcome::Loaded);
        assert_eq!(snapshot.records.len(), 2);
        assert_eq!(snapshot.summary.master_count, 1);
        assert!(snapshot.loaded_at.is_some());
    }

    #[test]
    fn test_reload_is_idempotent() {
        let file = write_inventory(SAMPLE);
        let mut repo =
            InventoryRepository::new(file.path().to_path_buf(), LoaderConfig::default());
        let first = repo.reload().records.clone();
        let second = repo.reload().records.clone();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_file_degrades_to_failed_outcome() {
        let mut repo = InventoryRepository::new(
            PathBuf::from("/nonexistent/inventory.csv"),
            LoaderConfig::default(),
        );
        let snapshot = repo.reload();
        assert!(snapshot.outcome.is_failure());
        assert!(snapshot.records.is_empty());
    }

    #[test]
    fn test_header_only_file_is_empty_not_failed() {
        let file = write_inventory("a,,,,\nb,,,,\n,,,,\nID,Cerro,Alias,IP Ethernet,Tipo Vinculo\n");
        let mut repo =
            InventoryRepository::new(file.path().to_path_buf(), LoaderConfig::default());
        let snapshot = repo.reload();
        assert_eq!(snapshot.outcome, LoadOutcome::Empty);
        assert!(!snapshot.outcome.is_failure());
    }
}
