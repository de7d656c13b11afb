// ipscmon - app/session.rs
//
// Session persistence: save and restore the inventory path and filter
// selections between application restarts.
//
// Design principles:
// - Session is saved atomically (write→temp, rename→final) so a crash
//   during save never corrupts the previous good session.
// - Load errors are silently discarded (corrupt or incompatible sessions
//   just start the app fresh rather than surfacing errors to the user).
// - The data directory is created on first save; no user action required.
// - Records are NOT persisted — the inventory is re-read on restore so the
//   dashboard always reflects current file content.

use crate::core::filter::FilterState;
use crate::core::model::{Role, SystemGroup};
use crate::util::constants::SESSION_FILE_NAME;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Version stamp for forward-compatibility checks.
///
/// Increment this constant whenever `SessionData` gains or removes fields
/// in a breaking way. Version mismatches silently discard the session.
pub const SESSION_VERSION: u32 = 1;

/// Complete persistent session snapshot.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionData {
    /// Schema version — must equal `SESSION_VERSION` to be accepted.
    pub version: u32,

    /// Inventory file opened in the last session, reloaded at startup.
    pub inventory_path: Option<PathBuf>,

    /// Filter state: the serialisable subset of `FilterState`.
    #[serde(default)]
    pub filter: PersistedFilter,
}

/// Serialisable snapshot of `FilterState`.
///
/// The compiled regex is excluded; only the source pattern is stored and
/// re-compiled on restore (silently dropped if it no longer parses).
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PersistedFilter {
    #[serde(default)]
    pub groups: Vec<SystemGroup>,

    #[serde(default)]
    pub sites: Vec<String>,

    #[serde(default)]
    pub roles: Vec<Role>,

    #[serde(default)]
    pub text_search: String,

    #[serde(default)]
    pub regex_pattern: String,
}

impl PersistedFilter {
    /// Capture the persistable subset of a live filter.
    pub fn from_filter(filter: &FilterState) -> Self {
        Self {
            groups: filter.groups.iter().copied().collect(),
            sites: filter.sites.iter().cloned().collect(),
            roles: filter.roles.iter().copied().collect(),
            text_search: filter.text_search.clone(),
            regex_pattern: filter
                .regex_search
                .as_ref()
                .map(|r| r.as_str().to_string())
                .unwrap_or_default(),
        }
    }

    /// Rebuild a live filter. An invalid stored regex is dropped silently.
    pub fn into_filter(self) -> FilterState {
        let mut filter = FilterState {
            groups: self.groups.into_iter().collect(),
            sites: self.sites.into_iter().collect(),
            roles: self.roles.into_iter().collect(),
            text_search: self.text_search,
            regex_search: None,
        };
        if filter.set_regex(&self.regex_pattern).is_err() {
            tracing::debug!("Discarding invalid persisted regex pattern");
        }
        filter
    }
}

/// Save session data to `data_dir/session.json`, atomically.
///
/// Failures are logged and swallowed — losing a session is an
/// inconvenience, not an error the user can act on.
pub fn save(data_dir: &Path, session: &SessionData) {
    if let Err(e) = std::fs::create_dir_all(data_dir) {
        tracing::warn!(dir = %data_dir.display(), error = %e, "Cannot create data directory");
        return;
    }

    let final_path = data_dir.join(SESSION_FILE_NAME);
    let temp_path = data_dir.join(format!("{SESSION_FILE_NAME}.tmp"));

    let json = match serde_json::to_string_pretty(session) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!(error = %e, "Cannot serialise session");
            return;
        }
    };

    if let Err(e) = std::fs::write(&temp_path, json) {
        tracing::warn!(path = %temp_path.display(), error = %e, "Cannot write session");
        return;
    }
    if let Err(e) = std::fs::rename(&temp_path, &final_path) {
        tracing::warn!(path = %final_path.display(), error = %e, "Cannot finalise session");
    }
}

/// Load session data from `data_dir/session.json`.
///
/// Returns `None` when the file is missing, unreadable, unparsable, or
/// carries a different schema version.
pub fn load(data_dir: &Path) -> Option<SessionData> {
    let path = data_dir.join(SESSION_FILE_NAME);
    let content = std::fs::read_to_string(&path).ok()?;
    let session: SessionData = match serde_json::from_str(&content) {
        Ok(session) => session,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Discarding corrupt session");
            return None;
        }
    };
    if session.version != SESSION_VERSION {
        tracing::info!(
            found = session.version,
            expected = SESSION_VERSION,
            "Discarding session with mismatched version"
        );
        return None;
    }
    Some(session)
}
