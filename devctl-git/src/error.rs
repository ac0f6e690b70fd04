//! Error type for the repository command gateway.

use std::process::Output;

use thiserror::Error;

/// A git command failed.
///
/// One kind only: the gateway never distinguishes finer-grained git failure
/// categories. The message carries the command's diagnostic text, preferring
/// stderr, then stdout, then a bare exit status as the last resort.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct GitError {
    message: String,
}

impl GitError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    /// Build an error from a non-zero git exit.
    pub(crate) fn from_output(args: &[&str], output: &Output) -> Self {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        if !stderr.is_empty() {
            return Self::new(stderr);
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stdout = stdout.trim();
        if !stdout.is_empty() {
            return Self::new(stdout);
        }
        Self::new(format!(
            "git {} exited with {}",
            args.first().unwrap_or(&""),
            output.status,
        ))
    }

    /// The diagnostic text.
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use std::os::unix::process::ExitStatusExt;
    use std::process::{ExitStatus, Output};

    use super::*;

    fn output(code: i32, stdout: &str, stderr: &str) -> Output {
        Output {
            status: ExitStatus::from_raw(code << 8),
            stdout: stdout.as_bytes().to_vec(),
            stderr: stderr.as_bytes().to_vec(),
        }
    }

    #[test]
    fn prefers_stderr() {
        let err = GitError::from_output(&["push"], &output(1, "out", "fatal: rejected"));
        assert_eq!(err.message(), "fatal: rejected");
    }

    #[test]
    fn falls_back_to_stdout() {
        let err = GitError::from_output(&["push"], &output(1, "something went wrong", ""));
        assert_eq!(err.message(), "something went wrong");
    }

    #[test]
    fn falls_back_to_exit_status() {
        let err = GitError::from_output(&["push"], &output(128, " ", "\n"));
        assert!(err.message().starts_with("git push exited with"), "got: {err}");
    }
}
