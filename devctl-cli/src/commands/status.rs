//! `devctl status [--repos REPO...] [--json]`

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use devctl_core::{config, state, SyncState};
use devctl_sync::{status, StatusOutcome, StatusReport};

use super::CommandOutcome;

/// Arguments for `devctl status`.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Only check these repos (default: all repos in config).
    #[arg(long, value_name = "REPO", num_args = 1..)]
    pub repos: Option<Vec<String>>,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl StatusArgs {
    pub fn run(self) -> Result<CommandOutcome> {
        let root: PathBuf = env::current_dir().context("could not determine working directory")?;
        let fleet = config::load_at(&root).context("failed to load devctl.yaml")?;
        let sync_state = state::load_at(&root).context("no active ticket")?;
        let selected = fleet.select(self.repos.as_deref())?;

        let report = status::run(&selected, &sync_state.branch);

        if self.json {
            print_json(&sync_state, &report)?;
        } else {
            print_table(&sync_state, &report);
        }

        Ok(if report.all_ok() { CommandOutcome::Clean } else { CommandOutcome::Issues })
    }
}

// ---------------------------------------------------------------------------
// JSON output
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct StatusReportJson {
    summary: StatusSummaryJson,
    repos: Vec<RepoStatusJson>,
}

#[derive(Serialize)]
struct StatusSummaryJson {
    ticket: String,
    expected_branch: String,
    repos: usize,
    issues: usize,
    all_ok: bool,
}

#[derive(Serialize)]
struct RepoStatusJson {
    repo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    remote_present: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    clean: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    matches_expected: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn print_json(sync_state: &SyncState, report: &StatusReport) -> Result<()> {
    let repos: Vec<RepoStatusJson> = report
        .rows
        .iter()
        .map(|row| match &row.outcome {
            StatusOutcome::Checked(check) => RepoStatusJson {
                repo: row.repo.to_string(),
                branch: Some(check.current_branch.clone()),
                remote_present: Some(check.remote_present),
                clean: Some(check.clean),
                matches_expected: Some(check.matches_expected),
                error: None,
            },
            StatusOutcome::Error { message } => RepoStatusJson {
                repo: row.repo.to_string(),
                branch: None,
                remote_present: None,
                clean: None,
                matches_expected: None,
                error: Some(message.clone()),
            },
        })
        .collect();

    let payload = StatusReportJson {
        summary: StatusSummaryJson {
            ticket: sync_state.ticket.clone(),
            expected_branch: sync_state.branch.clone(),
            repos: report.rows.len(),
            issues: report.rows.iter().filter(|r| !r.is_ok()).count(),
            all_ok: report.all_ok(),
        },
        repos,
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&payload).context("failed to serialize status JSON")?
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Table output
// ---------------------------------------------------------------------------

#[derive(Tabled)]
struct StatusTableRow {
    #[tabled(rename = "repo")]
    repo: String,
    #[tabled(rename = "local branch")]
    branch: String,
    #[tabled(rename = "remote")]
    remote: String,
    #[tabled(rename = "clean")]
    clean: String,
    #[tabled(rename = "detail")]
    detail: String,
}

fn print_table(sync_state: &SyncState, report: &StatusReport) {
    let mut header = format!(
        "devctl v{} | ticket {} | branch {}",
        env!("CARGO_PKG_VERSION"),
        sync_state.ticket,
        sync_state.branch,
    );
    if let Some(started_at) = sync_state.started_at {
        header.push_str(&format!(" | started {} ago", format_age(started_at)));
    }
    println!("{header}");

    if report.rows.is_empty() {
        println!("No repos selected.");
        return;
    }

    let rows: Vec<StatusTableRow> = report
        .rows
        .iter()
        .map(|row| match &row.outcome {
            StatusOutcome::Checked(check) => {
                let detail = if check.matches_expected {
                    String::new()
                } else {
                    format!("<- expected {}", sync_state.branch)
                };
                StatusTableRow {
                    repo: row.repo.to_string(),
                    branch: check.current_branch.clone(),
                    remote: flag(check.remote_present),
                    clean: flag(check.clean),
                    detail,
                }
            }
            StatusOutcome::Error { message } => StatusTableRow {
                repo: row.repo.to_string(),
                branch: "?".to_string(),
                remote: "?".to_string(),
                clean: "?".to_string(),
                detail: format!("git error: {message}"),
            },
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");

    if !report.all_ok() {
        let issues = report.rows.iter().filter(|r| !r.is_ok()).count();
        println!("{} repo(s) out of sync.", issues);
    }
}

fn flag(ok: bool) -> String {
    if ok {
        "✔".green().bold().to_string()
    } else {
        "✘".red().bold().to_string()
    }
}

/// Compact age for the header line: "42s", "13m", "3h", "2d".
fn format_age(timestamp: DateTime<Utc>) -> String {
    let seconds = Utc::now().signed_duration_since(timestamp).num_seconds().max(0) as u64;
    if seconds < 60 {
        return format!("{seconds}s");
    }
    if seconds < 60 * 60 {
        return format!("{}m", seconds / 60);
    }
    if seconds < 60 * 60 * 24 {
        return format!("{}h", seconds / (60 * 60));
    }
    format!("{}d", seconds / (60 * 60 * 24))
}
