//! `devctl init`: scan the current directory for git repos and write
//! `devctl.yaml`, overwriting any existing config.

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use devctl_core::config::{self, RepoEntry};

use super::CommandOutcome;

/// Arguments for `devctl init`.
#[derive(Args, Debug)]
pub struct InitArgs {}

impl InitArgs {
    pub fn run(self) -> Result<CommandOutcome> {
        let root: PathBuf = env::current_dir().context("could not determine working directory")?;

        let mut repos = BTreeMap::new();
        for entry in fs::read_dir(&root).context("failed to scan working directory")? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_dir() || !path.join(".git").is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            // Each repo's base defaults to whatever its remote considers the
            // default branch; editable in devctl.yaml afterwards.
            let base = devctl_git::default_branch(&path);
            repos.insert(
                name.clone(),
                RepoEntry { path: PathBuf::from(format!("./{name}")), base },
            );
        }

        if repos.is_empty() {
            bail!("no git repositories found in {}", root.display());
        }

        config::save_at(&root, &repos).context("failed to write devctl.yaml")?;
        println!("Wrote {} with {} repo(s):", config::CONFIG_FILE, repos.len());
        for name in repos.keys() {
            println!("  {name}");
        }
        Ok(CommandOutcome::Clean)
    }
}
