//! `devctl start TICKET [--base BRANCH] [--force] [--repos REPO...]`

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use devctl_core::{config, state};
use devctl_sync::{start, BranchOutcome, StartOptions};

use super::CommandOutcome;

/// Arguments for `devctl start`.
#[derive(Args, Debug)]
pub struct StartArgs {
    /// Ticket identifier used to name the branch (e.g. ABC-123).
    #[arg(value_name = "TICKET")]
    pub ticket: String,

    /// Override the base branch for every repo (default: per-repo `base` in config).
    #[arg(long, value_name = "BRANCH")]
    pub base: Option<String>,

    /// Re-use a branch that already exists locally instead of erroring.
    #[arg(long)]
    pub force: bool,

    /// Only operate on these repos (default: all repos in config).
    #[arg(long, value_name = "REPO", num_args = 1..)]
    pub repos: Option<Vec<String>>,
}

impl StartArgs {
    pub fn run(self) -> Result<CommandOutcome> {
        let root: PathBuf = env::current_dir().context("could not determine working directory")?;
        let fleet = config::load_at(&root).context("failed to load devctl.yaml")?;
        let selected = fleet.select(self.repos.as_deref())?;

        // The branch name is the literal ticket identifier.
        let branch = self.ticket.clone();
        let options = StartOptions {
            branch: branch.clone(),
            base_override: self.base.clone(),
            force: self.force,
        };
        let report = start::run(&selected, &options);

        for row in &report.rows {
            for notice in &row.notices {
                println!("  {} {}: {notice}", "!".yellow().bold(), row.repo);
            }
        }
        for row in &report.rows {
            match &row.outcome {
                BranchOutcome::Created => println!(
                    "  {} {} {} {branch} created & pushed",
                    "✔".green().bold(),
                    row.repo,
                    "->".bright_black(),
                ),
                BranchOutcome::Reused => println!(
                    "  {} {} {} {branch} (existing branch re-pushed)",
                    "✔".green().bold(),
                    row.repo,
                    "->".bright_black(),
                ),
                BranchOutcome::Failed { .. } => {}
            }
        }
        for row in &report.rows {
            if let BranchOutcome::Failed { reason } = &row.outcome {
                eprintln!("  {} {}: {reason}", "✘".red().bold(), row.repo);
            }
        }

        if !report.all_succeeded() {
            eprintln!();
            eprintln!("Branch synchronization incomplete.");
            return Ok(CommandOutcome::Issues);
        }

        // All-or-nothing commit gate: state is persisted only for a fully
        // clean report, so a re-run after any failure starts from scratch.
        state::save_at(&root, &self.ticket, &branch, self.base.as_deref())
            .context("failed to write state file")?;

        println!();
        println!("Branch synchronization complete.");
        Ok(CommandOutcome::Clean)
    }
}
