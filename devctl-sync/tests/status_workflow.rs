//! End-to-end status-workflow tests against real git fleets.

mod common;

use common::{g, Fleet};
use devctl_core::RepoName;
use devctl_sync::{start, status, StartOptions, StatusOutcome};

fn start_fleet(fleet: &Fleet, branch: &str) {
    let options =
        StartOptions { branch: branch.to_string(), base_override: None, force: false };
    assert!(start::run(&fleet.repos, &options).all_succeeded(), "fixture start must succeed");
}

fn checked(outcome: &StatusOutcome) -> &devctl_sync::BranchCheck {
    match outcome {
        StatusOutcome::Checked(check) => check,
        StatusOutcome::Error { message } => panic!("expected a checked row, got error: {message}"),
    }
}

// ---------------------------------------------------------------------------
// All clean
// ---------------------------------------------------------------------------

#[test]
fn fully_synchronized_fleet_reports_all_ok() {
    require_git!();
    common::init_logging();
    let fleet = Fleet::new(&["alpha", "beta"]);
    start_fleet(&fleet, "ABC-9");

    let report = status::run(&fleet.repos, "ABC-9");

    assert_eq!(report.rows.len(), 2);
    assert!(report.all_ok());
    for row in &report.rows {
        let check = checked(&row.outcome);
        assert_eq!(check.current_branch, "ABC-9");
        assert!(check.remote_present && check.clean && check.matches_expected);
    }
}

// ---------------------------------------------------------------------------
// Individual issues
// ---------------------------------------------------------------------------

#[test]
fn branch_mismatch_is_reported_per_repo() {
    require_git!();
    let fleet = Fleet::new(&["alpha", "beta"]);
    start_fleet(&fleet, "ABC-9");
    g(&fleet.work("alpha"), &["checkout", "main"]);

    let report = status::run(&fleet.repos, "ABC-9");

    assert!(!report.all_ok());
    let alpha = checked(&report.rows[0].outcome);
    assert_eq!(alpha.current_branch, "main");
    assert!(!alpha.matches_expected);
    assert!(checked(&report.rows[1].outcome).ok(), "beta unaffected");
}

#[test]
fn dirty_working_tree_flips_the_clean_flag_only() {
    require_git!();
    let fleet = Fleet::new(&["alpha", "beta"]);
    start_fleet(&fleet, "ABC-9");
    std::fs::write(fleet.work("alpha").join("uncommitted.txt"), "wip").expect("write");

    let report = status::run(&fleet.repos, "ABC-9");

    assert!(!report.all_ok());
    let alpha = checked(&report.rows[0].outcome);
    assert!(!alpha.clean);
    assert!(alpha.matches_expected && alpha.remote_present, "only cleanliness failed");
    assert!(checked(&report.rows[1].outcome).ok(), "beta still fully checked");
}

#[test]
fn local_only_branch_reports_missing_remote() {
    require_git!();
    let fleet = Fleet::new(&["alpha"]);
    start_fleet(&fleet, "ABC-9");
    g(&fleet.work("alpha"), &["checkout", "-b", "local-only"]);

    let report = status::run(&fleet.repos, "ABC-9");

    let alpha = checked(&report.rows[0].outcome);
    assert_eq!(alpha.current_branch, "local-only");
    assert!(!alpha.remote_present);
    assert!(!alpha.matches_expected);
}

// ---------------------------------------------------------------------------
// Error isolation
// ---------------------------------------------------------------------------

#[test]
fn detached_head_becomes_an_error_row_and_the_rest_still_run() {
    require_git!();
    let fleet = Fleet::new(&["alpha", "beta"]);
    start_fleet(&fleet, "ABC-9");
    g(&fleet.work("alpha"), &["checkout", "--detach"]);

    let report = status::run(&fleet.repos, "ABC-9");

    assert_eq!(report.rows.len(), 2, "every selected repo is attempted");
    assert!(!report.all_ok());
    match &report.rows[0].outcome {
        StatusOutcome::Error { message } => {
            assert!(message.contains("detached"), "got: {message}")
        }
        other => panic!("alpha must be an error row, got {other:?}"),
    }
    assert_eq!(report.rows[1].repo, RepoName::from("beta"));
    assert!(report.rows[1].is_ok());
}

#[test]
fn transport_failure_becomes_an_error_row() {
    require_git!();
    let fleet = Fleet::new(&["alpha", "beta"]);
    start_fleet(&fleet, "ABC-9");
    fleet.break_remote("alpha");

    let report = status::run(&fleet.repos, "ABC-9");

    assert!(matches!(report.rows[0].outcome, StatusOutcome::Error { .. }));
    assert!(report.rows[1].is_ok());
}

// ---------------------------------------------------------------------------
// Read-only guarantee
// ---------------------------------------------------------------------------

#[test]
fn status_never_mutates_the_fleet() {
    require_git!();
    let fleet = Fleet::new(&["alpha"]);
    start_fleet(&fleet, "ABC-9");
    let tip_before = fleet.head("alpha");

    let _ = status::run(&fleet.repos, "ABC-9");
    let _ = status::run(&fleet.repos, "some-other-branch");

    assert_eq!(fleet.head("alpha"), tip_before);
    assert_eq!(g(&fleet.work("alpha"), &["status", "--porcelain"]), "");
}
