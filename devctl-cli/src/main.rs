//! Devctl: synchronize feature branches across a fleet of git repositories.
//!
//! # Usage
//!
//! ```text
//! devctl init
//! devctl start TICKET [--base BRANCH] [--force] [--repos REPO...]
//! devctl status [--repos REPO...] [--json]
//! ```

mod commands;

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use commands::{init::InitArgs, start::StartArgs, status::StatusArgs, CommandOutcome};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "devctl",
    version,
    about = "Synchronize feature branches across multiple repos",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan the current directory for git repos and write devctl.yaml.
    Init(InitArgs),

    /// Create and push a feature branch across all configured repos.
    Start(StartArgs),

    /// Show branch synchronization status for all configured repos.
    Status(StatusArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

/// Exit-code policy lives here and nowhere else: command handlers report a
/// [`CommandOutcome`] or an error, and only this function terminates the
/// process.
fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Init(args) => args.run(),
        Commands::Start(args) => args.run(),
        Commands::Status(args) => args.run(),
    };

    match result {
        Ok(CommandOutcome::Clean) => ExitCode::SUCCESS,
        Ok(CommandOutcome::Issues) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
