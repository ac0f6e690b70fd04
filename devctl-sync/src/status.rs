//! Status reconciliation workflow: read-only checks of every repo against
//! the expected feature branch.
//!
//! Every selected repo is always attempted; a gateway failure in one repo
//! becomes an error row for that repo only. Nothing here mutates any
//! repository or the persisted state.

use std::path::Path;

use devctl_core::RepoDescriptor;
use devctl_git::{self as git, GitError};

use crate::report::{BranchCheck, StatusOutcome, StatusReport, StatusRow};

/// Run the status workflow over `repos`, sequentially, in input order.
///
/// `expected_branch` comes from the persisted state record; the caller is
/// responsible for having loaded it.
pub fn run(repos: &[RepoDescriptor], expected_branch: &str) -> StatusReport {
    let mut rows = Vec::with_capacity(repos.len());
    for repo in repos {
        let outcome = match check_steps(&repo.path, expected_branch) {
            Ok(check) => StatusOutcome::Checked(check),
            Err(err) => {
                tracing::warn!("{}: {err}", repo.name);
                StatusOutcome::Error { message: err.to_string() }
            }
        };
        rows.push(StatusRow { repo: repo.name.clone(), outcome });
    }
    StatusReport { rows }
}

fn check_steps(path: &Path, expected_branch: &str) -> Result<BranchCheck, GitError> {
    let current_branch = git::current_branch(path)?;
    let remote_present = git::remote_branch_exists(path, &current_branch)?;
    let clean = git::working_tree_clean(path)?;
    let matches_expected = current_branch == expected_branch;
    Ok(BranchCheck { current_branch, remote_present, clean, matches_expected })
}
