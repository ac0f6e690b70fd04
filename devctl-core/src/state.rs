//! Load and save `.devctl-state.yaml`.
//!
//! The state file records the active ticket and branch so `status` knows
//! what the fleet is expected to look like. It is written wholesale after a
//! fully successful `start`, never partially and never on a failed run, and
//! it is never committed.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StateError;

/// File name of the local state record, relative to the workspace root.
pub const STATE_FILE: &str = ".devctl-state.yaml";

/// The persisted sync state: which ticket is in flight, which branch carries
/// it, and whether a base override was applied fleet-wide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncState {
    pub ticket: String,
    pub branch: String,
    /// `Some` when `start --base` overrode every repo's configured base.
    /// Serialized as a literal `null` when absent.
    pub base_override: Option<String>,
    /// Stamped at write time; absent in records written by older versions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
}

/// `<root>/.devctl-state.yaml`; pure, no I/O.
pub fn state_path_at(root: &Path) -> PathBuf {
    root.join(STATE_FILE)
}

/// Load the state record from `root`.
///
/// Returns [`StateError::NotFound`] when no successful `start` has run yet,
/// [`StateError::Parse`] (with path context) when the record is malformed or
/// missing a required field.
pub fn load_at(root: &Path) -> Result<SyncState, StateError> {
    let path = state_path_at(root);
    if !path.exists() {
        return Err(StateError::NotFound { path });
    }
    let contents = std::fs::read_to_string(&path)?;
    serde_yaml::from_str(&contents).map_err(|e| StateError::Parse { path, source: e })
}

/// Atomically write (or overwrite) the state record at `root`.
///
/// Write flow: serialize → `.tmp` sibling → `rename`, so a concurrent
/// reader never observes a half-written record.
pub fn save_at(
    root: &Path,
    ticket: &str,
    branch: &str,
    base_override: Option<&str>,
) -> Result<SyncState, StateError> {
    let state = SyncState {
        ticket: ticket.to_owned(),
        branch: branch.to_owned(),
        base_override: base_override.map(str::to_owned),
        started_at: Some(Utc::now()),
    };

    let path = state_path_at(root);
    let tmp = root.join(format!("{STATE_FILE}.tmp"));
    let yaml = serde_yaml::to_string(&state)?;
    std::fs::write(&tmp, yaml)?;
    if let Err(e) = std::fs::rename(&tmp, &path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(state)
}
