//! Git operations against an explicit repository path.
//!
//! All functions take the repo path as a parameter and run git with
//! `current_dir` set to it; the process-wide working directory is never
//! touched. Every call blocks until the underlying subprocess exits.

use std::path::Path;
use std::process::{Command, Output};

use crate::error::GitError;

// ---------------------------------------------------------------------------
// Command runner
// ---------------------------------------------------------------------------

/// Run git with `args` in `repo`, failing on a non-zero exit.
///
/// Returns trimmed stdout.
fn run(repo: &Path, args: &[&str]) -> Result<String, GitError> {
    let output = spawn(repo, args)?;
    if !output.status.success() {
        return Err(GitError::from_output(args, &output));
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_owned())
}

/// Run git with `args` in `repo`, treating a non-zero exit as data rather
/// than failure. Only a failure to launch git at all is an error.
fn run_unchecked(repo: &Path, args: &[&str]) -> Result<Output, GitError> {
    spawn(repo, args)
}

fn spawn(repo: &Path, args: &[&str]) -> Result<Output, GitError> {
    tracing::debug!("git {} ({})", args.join(" "), repo.display());
    Command::new("git")
        .args(args)
        .current_dir(repo)
        .output()
        .map_err(|e| GitError::new(format!("failed to run git: {e}")))
}

// ---------------------------------------------------------------------------
// Read-only queries
// ---------------------------------------------------------------------------

/// Name of the currently checked-out branch.
///
/// A detached HEAD is an error, distinguishable from a branch literally
/// named "HEAD" only because git forbids that name anyway.
pub fn current_branch(repo: &Path) -> Result<String, GitError> {
    let branch = run(repo, &["rev-parse", "--abbrev-ref", "HEAD"])?;
    if branch == "HEAD" {
        return Err(GitError::new("repository is in detached HEAD state"));
    }
    Ok(branch)
}

/// Whether `branch` exists in the local ref store.
///
/// A failed verify means "no such branch", never an error.
pub fn local_branch_exists(repo: &Path, branch: &str) -> Result<bool, GitError> {
    let refname = format!("refs/heads/{branch}");
    let output = run_unchecked(repo, &["rev-parse", "--verify", &refname])?;
    Ok(output.status.success())
}

/// Whether `branch` exists on the `origin` remote.
///
/// Uses `ls-remote`, so no prior fetch is required. ls-remote exits 0 even
/// when the branch is absent; a ref line on stdout is the signal. A
/// non-zero exit is a transport failure.
pub fn remote_branch_exists(repo: &Path, branch: &str) -> Result<bool, GitError> {
    let args = ["ls-remote", "--heads", "origin", branch];
    let output = run_unchecked(repo, &args)?;
    if !output.status.success() {
        return Err(GitError::from_output(&args, &output));
    }
    Ok(!String::from_utf8_lossy(&output.stdout).trim().is_empty())
}

/// Best-effort default branch for `repo`. Never fails.
///
/// Tries the `origin/HEAD` symbolic ref (set when you clone), falls back to
/// the currently checked-out branch, then to "main".
pub fn default_branch(repo: &Path) -> String {
    if let Ok(output) = run_unchecked(repo, &["symbolic-ref", "refs/remotes/origin/HEAD", "--short"])
    {
        if output.status.success() {
            let reference = String::from_utf8_lossy(&output.stdout).trim().to_owned();
            // "origin/main" -> "main"
            if let Some((_, name)) = reference.split_once('/') {
                return name.to_owned();
            }
            if !reference.is_empty() {
                return reference;
            }
        }
    }
    current_branch(repo).unwrap_or_else(|_| "main".to_owned())
}

/// Whether there are zero staged or unstaged changes.
///
/// Untracked files count as dirty.
pub fn working_tree_clean(repo: &Path) -> Result<bool, GitError> {
    Ok(run(repo, &["status", "--porcelain"])?.is_empty())
}

// ---------------------------------------------------------------------------
// Mutating operations
// ---------------------------------------------------------------------------

/// Fetch all refs from origin (updates remote-tracking branches).
pub fn fetch_origin(repo: &Path) -> Result<(), GitError> {
    run(repo, &["fetch", "origin"]).map(drop)
}

/// Switch to an existing local branch.
pub fn checkout(repo: &Path, branch: &str) -> Result<(), GitError> {
    run(repo, &["checkout", branch]).map(drop)
}

/// Fast-forward the current branch from its upstream.
///
/// `--ff-only` refuses merges, so divergence surfaces as an error instead
/// of a silent merge commit.
pub fn pull_fast_forward(repo: &Path) -> Result<(), GitError> {
    run(repo, &["pull", "--ff-only"]).map(drop)
}

/// Create a new branch at the current HEAD and check it out.
///
/// Fails if a branch with that name already exists.
pub fn create_branch(repo: &Path, branch: &str) -> Result<(), GitError> {
    run(repo, &["checkout", "-b", branch]).map(drop)
}

/// Push `branch` to origin and record upstream tracking. Never force-pushes.
pub fn push_with_upstream(repo: &Path, branch: &str) -> Result<(), GitError> {
    run(repo, &["push", "--set-upstream", "origin", branch]).map(drop)
}
