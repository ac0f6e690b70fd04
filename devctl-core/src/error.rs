//! Error types for devctl-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from loading or saving `devctl.yaml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Underlying I/O failure (permission denied, unreadable file, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file did not exist at the expected path.
    #[error("config file not found at {path}; run `devctl init` first")]
    NotFound { path: PathBuf },

    /// YAML parse error on load; includes file path and line context from serde_yaml.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// YAML serialization error (save path).
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The `repos` section parsed but contains no entries.
    #[error("{path} defines no repositories")]
    NoRepos { path: PathBuf },

    /// A repo entry has an empty `base` field.
    #[error("repo '{repo}' has an empty base branch")]
    EmptyBase { repo: String },

    /// A configured repo path does not exist on disk.
    #[error("repo path does not exist: {repo} -> {path}")]
    PathMissing { repo: String, path: PathBuf },

    /// A configured repo path exists but is not a directory.
    #[error("repo path is not a directory: {repo} -> {path}")]
    NotADirectory { repo: String, path: PathBuf },

    /// A configured repo path is not a git working copy.
    #[error("not a git repository: {repo} -> {path}")]
    NotAGitRepo { repo: String, path: PathBuf },

    /// A `--repos` filter named repos absent from the config.
    #[error("unknown repo(s): {}", .names.join(", "))]
    UnknownRepos { names: Vec<String> },
}

/// All errors that can arise from reading or writing `.devctl-state.yaml`.
#[derive(Debug, Error)]
pub enum StateError {
    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No state file: `devctl start` has not completed successfully yet.
    #[error("state file not found at {path}; run `devctl start <TICKET>` first")]
    NotFound { path: PathBuf },

    /// YAML parse error on load; a missing `ticket` or `branch` field lands here.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// YAML serialization error (save path).
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
