// ipscmon - app/state.rs
//
// Application state management. Holds the repository, derived views
// (filtered indices, role matrix, health findings), filter state, and
// UI flags. Owned by the eframe::App implementation.

use crate::app::repository::InventoryRepository;
use crate::app::session::{self, PersistedFilter, SessionData, SESSION_VERSION};
use crate::core::filter::FilterState;
use crate::core::health::{self, HealthIssue};
use crate::core::loader::LoaderConfig;
use crate::core::matrix::{self, RoleMatrix};
use crate::core::model::{LoadOutcome, RepeaterRecord};
use crate::platform::config::{AppConfig, PlatformPaths};
use std::path::PathBuf;

/// Dashboard tab selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTab {
    /// Per-system cards with master location and member tables.
    #[default]
    Logical,
    /// Per-site cards with hosted systems.
    Physical,
    /// System × site role matrix.
    Matrix,
    /// Distribution bars per group and role.
    Charts,
    /// Configuration health findings.
    Health,
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Inventory repository (None until a file has been opened).
    pub repository: Option<InventoryRepository>,

    /// Current filter configuration.
    pub filter_state: FilterState,

    /// Indices of records matching the current filter (into the snapshot).
    pub filtered_indices: Vec<usize>,

    /// Role matrix derived from the current snapshot.
    pub matrix: RoleMatrix,

    /// Health findings derived from the current snapshot.
    pub health_issues: Vec<HealthIssue>,

    /// Currently selected dashboard tab.
    pub active_tab: ActiveTab,

    /// Status message for the status bar.
    pub status_message: String,

    /// Raw text of the regex filter input box (kept verbatim so the user
    /// can edit an invalid pattern; compiled form lives in filter_state).
    pub regex_input: String,

    /// Error text for an invalid regex input, shown inline.
    pub regex_error: Option<String>,

    /// Whether to show the load summary dialog.
    pub show_load_summary: bool,

    /// Effective configuration (config.toml merged with defaults).
    pub config: AppConfig,

    /// Platform paths for config and session persistence.
    pub paths: PlatformPaths,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state with the given configuration.
    pub fn new(config: AppConfig, paths: PlatformPaths, debug_mode: bool) -> Self {
        Self {
            repository: None,
            filter_state: FilterState::default(),
            filtered_indices: Vec::new(),
            matrix: RoleMatrix::new(),
            health_issues: Vec::new(),
            active_tab: ActiveTab::default(),
            status_message: "Ready. Open an inventory CSV to begin.".to_string(),
            regex_input: String::new(),
            regex_error: None,
            show_load_summary: false,
            config,
            paths,
            debug_mode,
        }
    }

    /// Records of the current snapshot (empty slice before the first load).
    pub fn records(&self) -> &[RepeaterRecord] {
        self.repository
            .as_ref()
            .map(|repo| repo.snapshot().records.as_slice())
            .unwrap_or(&[])
    }

    /// Point the application at an inventory file and load it.
    pub fn open_inventory(&mut self, path: PathBuf) {
        let loader_config = LoaderConfig {
            skip_rows: self.config.loader.skip_rows,
            max_rows: self.config.loader.max_rows,
        };
        match self.repository.as_mut() {
            Some(repo) => repo.set_source(path),
            None => self.repository = Some(InventoryRepository::new(path, loader_config)),
        }
        self.reload();
    }

    /// Reload the current source and recompute all derived views.
    pub fn reload(&mut self) {
        let Some(repo) = self.repository.as_mut() else {
            return;
        };
        let snapshot = repo.reload();

        self.status_message = match &snapshot.outcome {
            LoadOutcome::Loaded => format!(
                "Loaded {} repeaters across {} systems and {} sites in {:.2}s",
                snapshot.summary.total_records,
                snapshot.summary.system_count,
                snapshot.summary.site_count,
                snapshot.summary.duration.as_secs_f64()
            ),
            LoadOutcome::Empty => "Inventory contains no usable rows.".to_string(),
            LoadOutcome::Failed(message) => format!("Load failed: {message}"),
        };

        self.matrix = matrix::build_matrix(&snapshot.records);
        self.health_issues = health::audit(&snapshot.records);
        self.apply_filters();
        self.save_session();
    }

    /// Recompute filtered indices from the current snapshot and filters.
    pub fn apply_filters(&mut self) {
        self.filtered_indices =
            crate::core::filter::apply_filters(self.records(), &self.filter_state);
    }

    /// True when the source file changed on disk since the last load.
    pub fn source_is_stale(&self) -> bool {
        self.repository
            .as_ref()
            .map(InventoryRepository::is_stale)
            .unwrap_or(false)
    }

    /// Persist the current session (inventory path and filter).
    pub fn save_session(&self) {
        let session = SessionData {
            version: SESSION_VERSION,
            inventory_path: self
                .repository
                .as_ref()
                .map(|repo| repo.source().to_path_buf()),
            filter: PersistedFilter::from_filter(&self.filter_state),
        };
        session::save(&self.paths.data_dir, &session);
    }

    /// Restore the previous session, reloading its inventory if present.
    pub fn restore_session(&mut self) {
        let Some(session) = session::load(&self.paths.data_dir) else {
            return;
        };
        self.filter_state = session.filter.into_filter();
        self.regex_input = self
            .filter_state
            .regex_search
            .as_ref()
            .map(|r| r.as_str().to_string())
            .unwrap_or_default();
        if let Some(path) = session.inventory_path {
            tracing::info!(path = %path.display(), "Restoring previous inventory");
            self.open_inventory(path);
        }
    }

    /// Clear loaded data and derived views, keeping config and paths.
    pub fn clear(&mut self) {
        self.repository = None;
        self.filtered_indices.clear();
        self.matrix.clear();
        self.health_issues.clear();
        self.filter_state = FilterState::default();
        self.regex_input.clear();
        self.regex_error = None;
        self.show_load_summary = false;
        self.status_message = "Ready.".to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
t,,,,
t,,,,
,,,,
ID,Cerro,Alias,IP Ethernet,Tipo Vinculo
150,Alpha,RPT-A,10.0.0.1,Master IPSC
160,Beta,RPT-B,10.0.0.2,Peer
";

    fn test_state() -> (AppState, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let paths = PlatformPaths {
            config_dir: dir.path().join("config"),
            data_dir: dir.path().join("data"),
        };
        (AppState::new(AppConfig::default(), paths, false), dir)
    }

    #[test]
    fn test_open_inventory_builds_derived_views() {
        let (mut state, dir) = test_state();
        let csv_path = dir.path().join("inventory.csv");
        let mut file = std::fs::File::create(&csv_path).unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        state.open_inventory(csv_path);

        assert_eq!(state.records().len(), 2);
        assert_eq!(state.filtered_indices, vec![0, 1]);
        assert_eq!(state.matrix.len(), 2);
        assert!(state.health_issues.is_empty());
        assert!(state.status_message.starts_with("Loaded 2 repeaters"));
    }

    #[test]
    fn test_failed_load_sets_status() {
        let (mut state, dir) = test_state();
        state.open_inventory(dir.path().join("missing.csv"));
        assert!(state.records().is_empty());
        assert!(state.status_message.starts_with("Load failed"));
    }

    #[test]
    fn test_session_round_trip_restores_inventory() {
        let (mut state, dir) = test_state();
        let csv_path = dir.path().join("inventory.csv");
        std::fs::write(&csv_path, SAMPLE).unwrap();
        state.open_inventory(csv_path.clone());
        state.filter_state.text_search = "rpt-a".to_string();
        state.save_session();

        let (mut restored, _dir2) = {
            let paths = PlatformPaths {
                config_dir: dir.path().join("config"),
                data_dir: dir.path().join("data"),
            };
            (
                AppState::new(AppConfig::default(), paths, false),
                tempfile::tempdir().unwrap(),
            )
        };
        restored.restore_session();
        assert_eq!(restored.records().len(), 2);
        assert_eq!(restored.filter_state.text_search, "rpt-a");
    }

    #[test]
    fn test_clear_resets_views() {
        let (mut state, dir) = test_state();
        let csv_path = dir.path().join("inventory.csv");
        std::fs::write(&csv_path, SAMPLE).unwrap();
        state.open_inventory(csv_path);
        state.clear();
        assert!(state.records().is_empty());
        assert!(state.matrix.is_empty());
        assert!(state.filtered_indices.is_empty());
    }
}
