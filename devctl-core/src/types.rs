//! Domain types for the devctl repo fleet.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem paths.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed name for a repository entry in `devctl.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RepoName(pub String);

impl fmt::Display for RepoName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for RepoName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RepoName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// A repository selected for a workflow run.
///
/// Produced by the config loader, which guarantees that `path` is an
/// absolute directory containing git metadata. Immutable for the duration
/// of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoDescriptor {
    pub name: RepoName,
    /// Absolute path to the working clone on disk.
    pub path: PathBuf,
    /// Branch the feature branch is created from, unless overridden per run.
    pub base: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newtype_display() {
        assert_eq!(RepoName::from("pipeline").to_string(), "pipeline");
    }

    #[test]
    fn newtype_equality() {
        let a = RepoName::from("x");
        let b = RepoName::from(String::from("x"));
        assert_eq!(a, b);
    }

    #[test]
    fn newtype_ordering_is_lexicographic() {
        let mut names = vec![RepoName::from("beta"), RepoName::from("alpha")];
        names.sort();
        assert_eq!(names[0], RepoName::from("alpha"));
    }
}
