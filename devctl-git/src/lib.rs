//! # devctl-git
//!
//! Repository command gateway: blocking git CLI invocations against an
//! explicit repository path.
//!
//! Every outcome is normalized into a single [`GitError`] kind carrying the
//! tool's own diagnostic text; callers reason only about success/failure
//! plus the message. The gateway shells out to the git CLI rather than
//! linking a git library so hooks, credential helpers, and transport
//! configuration behave exactly as they do for a human operator.

pub mod error;
pub mod ops;

pub use error::GitError;
pub use ops::{
    checkout, create_branch, current_branch, default_branch, fetch_origin, local_branch_exists,
    pull_fast_forward, push_with_upstream, remote_branch_exists, working_tree_clean,
};
