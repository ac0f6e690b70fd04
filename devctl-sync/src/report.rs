//! Per-run, per-repo outcome reports for both workflows.
//!
//! Reports are built fresh each invocation, in repo iteration order, and
//! discarded after presentation. Only the aggregate predicates
//! ([`StartReport::all_succeeded`], [`StatusReport::all_ok`]) feed the
//! commit/exit decisions.

use devctl_core::RepoName;

// ---------------------------------------------------------------------------
// Start report
// ---------------------------------------------------------------------------

/// Outcome of the start procedure for one repo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchOutcome {
    /// Branch newly created from the base and pushed.
    Created,
    /// Existing local branch checked out and re-pushed under `--force`.
    Reused,
    /// The repo's procedure stopped; the rest of the fleet still runs.
    Failed { reason: String },
}

impl BranchOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// One row of a start report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartRow {
    pub repo: RepoName,
    pub outcome: BranchOutcome,
    /// Non-fatal advisories, e.g. the branch already existed on the remote.
    pub notices: Vec<String>,
}

/// Ordered per-repo outcomes of one start run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StartReport {
    pub rows: Vec<StartRow>,
}

impl StartReport {
    /// The sole success predicate: zero failed rows. Only a report passing
    /// this gate may be followed by a state-record write.
    pub fn all_succeeded(&self) -> bool {
        self.rows.iter().all(|r| !r.outcome.is_failure())
    }

    pub fn failure_count(&self) -> usize {
        self.rows.iter().filter(|r| r.outcome.is_failure()).count()
    }
}

// ---------------------------------------------------------------------------
// Status report
// ---------------------------------------------------------------------------

/// Result of the read-only checks for one repo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchCheck {
    pub current_branch: String,
    /// The current branch exists on origin.
    pub remote_present: bool,
    /// No staged or unstaged changes; untracked files count as dirty.
    pub clean: bool,
    /// The current branch equals the persisted expected branch.
    pub matches_expected: bool,
}

impl BranchCheck {
    /// OK iff on the expected branch, present on the remote, and clean.
    pub fn ok(&self) -> bool {
        self.matches_expected && self.remote_present && self.clean
    }
}

/// Outcome of the status checks for one repo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusOutcome {
    Checked(BranchCheck),
    /// A gateway call failed; the repo could not be checked.
    Error { message: String },
}

/// One row of a status report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRow {
    pub repo: RepoName,
    pub outcome: StatusOutcome,
}

impl StatusRow {
    pub fn is_ok(&self) -> bool {
        matches!(&self.outcome, StatusOutcome::Checked(check) if check.ok())
    }
}

/// Ordered per-repo outcomes of one status run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusReport {
    pub rows: Vec<StatusRow>,
}

impl StatusReport {
    /// True when every repo was checked and passed all three checks.
    /// Never partial or ambiguous: any error row or failed check flips it.
    pub fn all_ok(&self) -> bool {
        self.rows.iter().all(StatusRow::is_ok)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
