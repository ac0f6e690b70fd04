//! Load, validate, and save `devctl.yaml`.
//!
//! # File format
//!
//! ```yaml
//! repos:
//!   pipeline:
//!     path: ./pipeline
//!     base: main
//!   python-service:
//!     path: ./python-service
//!     base: develop
//! ```
//!
//! # API pattern
//!
//! Every function takes an explicit workspace root (`load_at`, `save_at`);
//! nothing in the core reads the ambient working directory. The CLI resolves
//! the root exactly once and threads it down. Tests always pass a `TempDir`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{RepoDescriptor, RepoName};

/// File name of the fleet configuration, relative to the workspace root.
pub const CONFIG_FILE: &str = "devctl.yaml";

// ---------------------------------------------------------------------------
// On-disk shape
// ---------------------------------------------------------------------------

/// A single repo entry as written in `devctl.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoEntry {
    /// Path to the working clone, usually relative to the workspace root.
    pub path: PathBuf,
    /// Branch the feature branch is created from.
    pub base: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct ConfigFile {
    repos: BTreeMap<String, RepoEntry>,
}

// ---------------------------------------------------------------------------
// Validated config
// ---------------------------------------------------------------------------

/// The validated repo fleet: every descriptor points at an existing git
/// working copy with an absolute path and a non-empty base branch.
///
/// Repos are held sorted by name so every workflow iterates (and reports)
/// in a deterministic order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    repos: Vec<RepoDescriptor>,
}

impl Config {
    /// All configured repos, sorted by name.
    pub fn repos(&self) -> &[RepoDescriptor] {
        &self.repos
    }

    /// Apply an optional repo-name subset filter.
    ///
    /// Returns descriptors in config order. Any filter name absent from the
    /// config fails the whole selection with [`ConfigError::UnknownRepos`]:
    /// a caller mistake, surfaced before any repo is touched.
    pub fn select(&self, filter: Option<&[String]>) -> Result<Vec<RepoDescriptor>, ConfigError> {
        let Some(filter) = filter else {
            return Ok(self.repos.clone());
        };

        let unknown: Vec<String> = filter
            .iter()
            .filter(|name| !self.repos.iter().any(|r| r.name.0 == **name))
            .cloned()
            .collect();
        if !unknown.is_empty() {
            return Err(ConfigError::UnknownRepos { names: unknown });
        }

        Ok(self
            .repos
            .iter()
            .filter(|r| filter.iter().any(|name| *name == r.name.0))
            .cloned()
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Path helper
// ---------------------------------------------------------------------------

/// `<root>/devctl.yaml`; pure, no I/O.
pub fn config_path_at(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

// ---------------------------------------------------------------------------
// Load
// ---------------------------------------------------------------------------

/// Load and validate `devctl.yaml` from `root`.
///
/// Validation: the `repos` section is non-empty; every entry names a `path`
/// that exists, is a directory, and contains git metadata; every `base` is
/// non-empty. Relative paths resolve against `root`.
pub fn load_at(root: &Path) -> Result<Config, ConfigError> {
    let path = config_path_at(root);
    if !path.exists() {
        return Err(ConfigError::NotFound { path });
    }

    let contents = std::fs::read_to_string(&path)?;
    let file: ConfigFile =
        serde_yaml::from_str(&contents).map_err(|e| ConfigError::Parse { path: path.clone(), source: e })?;

    if file.repos.is_empty() {
        return Err(ConfigError::NoRepos { path });
    }

    let mut repos = Vec::with_capacity(file.repos.len());
    for (name, entry) in file.repos {
        if entry.base.trim().is_empty() {
            return Err(ConfigError::EmptyBase { repo: name });
        }

        let joined = if entry.path.is_absolute() {
            entry.path.clone()
        } else {
            root.join(&entry.path)
        };
        if !joined.exists() {
            return Err(ConfigError::PathMissing { repo: name, path: joined });
        }
        let resolved = joined.canonicalize()?;
        if !resolved.is_dir() {
            return Err(ConfigError::NotADirectory { repo: name, path: resolved });
        }
        if !resolved.join(".git").exists() {
            return Err(ConfigError::NotAGitRepo { repo: name, path: resolved });
        }

        repos.push(RepoDescriptor {
            name: RepoName(name),
            path: resolved,
            base: entry.base,
        });
    }

    // BTreeMap iteration already yields name order; keep the invariant explicit.
    repos.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(Config { repos })
}

// ---------------------------------------------------------------------------
// Save (atomic)
// ---------------------------------------------------------------------------

/// Atomically write `devctl.yaml` at `root`, overwriting any existing file.
///
/// Write flow: serialize → `.tmp` sibling → `rename`. The `.tmp` lives in
/// the same directory as the target so the rename stays on one filesystem.
pub fn save_at(root: &Path, repos: &BTreeMap<String, RepoEntry>) -> Result<PathBuf, ConfigError> {
    let path = config_path_at(root);
    let tmp = root.join(format!("{CONFIG_FILE}.tmp"));

    let yaml = serde_yaml::to_string(&ConfigFile { repos: repos.clone() })?;
    std::fs::write(&tmp, yaml)?;
    if let Err(e) = std::fs::rename(&tmp, &path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(path)
}
