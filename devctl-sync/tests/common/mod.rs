//! Shared multi-repo git fixture for workflow tests.
//!
//! Builds a fleet of bare origins plus working clones under one tempdir,
//! mirroring the layout devctl manages in production:
//!
//! ```text
//! tmpdir/
//!   <name>.git/   bare remote (origin)
//!   <name>/       working clone, one commit pushed to main
//! ```

#![allow(dead_code)] // not every test binary uses every helper

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tempfile::TempDir;

use devctl_core::{RepoDescriptor, RepoName};

pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[macro_export]
macro_rules! require_git {
    () => {
        if !common::git_available() {
            eprintln!("git not available, skipping test");
            return;
        }
    };
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Run a git command with a stable identity, panicking on failure.
pub fn g(cwd: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env("GIT_TERMINAL_PROMPT", "0")
        .env("GIT_AUTHOR_NAME", "devctl-test")
        .env("GIT_AUTHOR_EMAIL", "devctl@test.local")
        .env("GIT_COMMITTER_NAME", "devctl-test")
        .env("GIT_COMMITTER_EMAIL", "devctl@test.local")
        .output()
        .expect("run git");
    assert!(
        output.status.success(),
        "git {:?} in {} failed: {}",
        args,
        cwd.display(),
        String::from_utf8_lossy(&output.stderr),
    );
    String::from_utf8_lossy(&output.stdout).trim().to_owned()
}

pub struct Fleet {
    tmp: TempDir,
    pub repos: Vec<RepoDescriptor>,
}

impl Fleet {
    /// Build a fleet of `names`, each with base "main".
    pub fn new(names: &[&str]) -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let mut repos = Vec::new();
        for name in names {
            let bare = tmp.path().join(format!("{name}.git"));
            let work = tmp.path().join(name);

            fs::create_dir(&bare).expect("mkdir bare");
            g(tmp.path(), &["init", "--bare", "-b", "main", bare.to_str().unwrap()]);
            g(tmp.path(), &["clone", bare.to_str().unwrap(), work.to_str().unwrap()]);
            g(&work, &["config", "user.email", "devctl@test.local"]);
            g(&work, &["config", "user.name", "devctl-test"]);

            fs::write(work.join("README.md"), format!("# {name}")).expect("write");
            g(&work, &["add", "."]);
            g(&work, &["commit", "-m", &format!("init {name}")]);
            g(&work, &["push", "origin", "HEAD:main"]);
            g(&work, &["branch", "--set-upstream-to=origin/main", "main"]);

            repos.push(RepoDescriptor {
                name: RepoName::from(*name),
                path: work.canonicalize().expect("canonicalize"),
                base: "main".to_string(),
            });
        }
        repos.sort_by(|a, b| a.name.cmp(&b.name));
        Self { tmp, repos }
    }

    pub fn repo(&self, name: &str) -> &RepoDescriptor {
        self.repos
            .iter()
            .find(|r| r.name.0 == name)
            .unwrap_or_else(|| panic!("no repo named {name}"))
    }

    pub fn work(&self, name: &str) -> PathBuf {
        self.repo(name).path.clone()
    }

    pub fn head(&self, name: &str) -> String {
        g(&self.work(name), &["rev-parse", "HEAD"])
    }

    pub fn head_of(&self, name: &str, branch: &str) -> String {
        g(&self.work(name), &["rev-parse", branch])
    }

    /// Create a 'develop' branch in every repo with an extra commit, so
    /// develop and main have diverged, then return to main.
    pub fn add_develop_branch(&self) {
        for repo in &self.repos {
            let work = &repo.path;
            g(work, &["checkout", "-b", "develop"]);
            fs::write(work.join("dev-file.txt"), format!("develop work in {}", repo.name))
                .expect("write");
            g(work, &["add", "."]);
            g(work, &["commit", "-m", &format!("develop commit in {}", repo.name)]);
            g(work, &["push", "origin", "develop"]);
            g(work, &["branch", "--set-upstream-to=origin/develop", "develop"]);
            g(work, &["checkout", "main"]);
        }
    }

    /// A second clone of `name`'s origin, for driving the remote from the side.
    pub fn second_clone(&self, name: &str) -> PathBuf {
        let bare = self.tmp.path().join(format!("{name}.git"));
        let other = self.tmp.path().join(format!("{name}-other"));
        g(self.tmp.path(), &["clone", bare.to_str().unwrap(), other.to_str().unwrap()]);
        g(&other, &["config", "user.email", "devctl@test.local"]);
        g(&other, &["config", "user.name", "devctl-test"]);
        other
    }

    /// Point `name`'s origin at a path that does not exist, so every
    /// transport operation fails.
    pub fn break_remote(&self, name: &str) {
        g(&self.work(name), &["remote", "set-url", "origin", "/does/not/exist.git"]);
    }
}
