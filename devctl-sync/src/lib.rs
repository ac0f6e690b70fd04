//! # devctl-sync
//!
//! The two fleet workflows:
//!
//! - [`start`] creates and pushes one feature branch across every selected
//!   repo, collecting a per-repo [`StartReport`].
//! - [`status`] runs read-only checks of every repo against the expected
//!   branch, collecting a per-repo [`StatusReport`].
//!
//! Both iterate repos sequentially and record failures as report rows
//! rather than propagating them: one repo's failure never stops the rest
//! of the fleet, and the caller decides what a non-clean report means.

pub mod report;
pub mod start;
pub mod status;

pub use report::{
    BranchCheck, BranchOutcome, StartReport, StartRow, StatusOutcome, StatusReport, StatusRow,
};
pub use start::StartOptions;
