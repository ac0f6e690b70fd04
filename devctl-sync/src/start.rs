//! Branch synchronization workflow: create and push one feature branch
//! across every selected repo.
//!
//! Per-repo procedure, in order:
//!   1. fetch origin, so the remote-branch guard sees current remote state
//!   2. guard: branch already exists locally (reuse only under `--force`)
//!   3. advisory: branch already exists on the remote
//!   4. check out the effective base and fast-forward it
//!   5. create the feature branch and push with upstream tracking
//!
//! Failures are independent per repo: each selected repo contributes
//! exactly one report row, and a failure in one never stops the others.
//! The caller persists state only when the whole report is clean.

use devctl_core::RepoDescriptor;
use devctl_git::{self as git, GitError};

use crate::report::{BranchOutcome, StartReport, StartRow};

/// Options for one start run.
#[derive(Debug, Clone)]
pub struct StartOptions {
    /// Feature branch name: the literal ticket identifier.
    pub branch: String,
    /// Overrides every repo's configured base when set.
    pub base_override: Option<String>,
    /// Re-use a branch that already exists locally instead of failing.
    pub force: bool,
}

/// Run the start workflow over `repos`, sequentially, in input order.
pub fn run(repos: &[RepoDescriptor], opts: &StartOptions) -> StartReport {
    let mut rows = Vec::with_capacity(repos.len());
    for repo in repos {
        rows.push(sync_repo(repo, opts));
    }
    StartReport { rows }
}

fn sync_repo(repo: &RepoDescriptor, opts: &StartOptions) -> StartRow {
    let mut notices = Vec::new();
    let outcome = match sync_steps(repo, opts, &mut notices) {
        Ok(outcome) => outcome,
        Err(err) => BranchOutcome::Failed { reason: err.to_string() },
    };
    if let BranchOutcome::Failed { reason } = &outcome {
        tracing::warn!("{}: {reason}", repo.name);
    }
    StartRow { repo: repo.name.clone(), outcome, notices }
}

fn sync_steps(
    repo: &RepoDescriptor,
    opts: &StartOptions,
    notices: &mut Vec<String>,
) -> Result<BranchOutcome, GitError> {
    let path = repo.path.as_path();
    let branch = opts.branch.as_str();

    git::fetch_origin(path)?;

    let base = opts.base_override.as_deref().unwrap_or(&repo.base);

    if git::local_branch_exists(path, branch)? {
        if !opts.force {
            return Ok(BranchOutcome::Failed {
                reason: format!(
                    "branch '{branch}' already exists locally (use --force to check it out and re-push)"
                ),
            });
        }
        // --force: check out and push whatever is there. The push always
        // uses the upstream-setting form so a re-run stays idempotent.
        git::checkout(path, branch)?;
        git::push_with_upstream(path, branch)?;
        return Ok(BranchOutcome::Reused);
    }

    // The push's own fast-forward check is the real arbiter here; this is
    // only an early signal, and the push below may still be rejected.
    if git::remote_branch_exists(path, branch)? {
        let notice =
            format!("remote branch '{branch}' already exists; will create local branch and push");
        tracing::warn!("{}: {notice}", repo.name);
        notices.push(notice);
    }

    git::checkout(path, base)?;
    git::pull_fast_forward(path)?;
    // An exists-failure here is a race since the guard above: hard failure,
    // not force-worthy.
    git::create_branch(path, branch)?;
    git::push_with_upstream(path, branch)?;
    Ok(BranchOutcome::Created)
}
