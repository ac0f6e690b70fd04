//! Devctl core library: domain types, config loading, state persistence, errors.
//!
//! Public API surface:
//! - [`types`]: newtypes and domain structs
//! - [`error`]: [`ConfigError`] and [`StateError`]
//! - [`config`]: load / validate / save `devctl.yaml`
//! - [`state`]: load / save `.devctl-state.yaml`

pub mod config;
pub mod error;
pub mod state;
pub mod types;

pub use config::Config;
pub use error::{ConfigError, StateError};
pub use state::SyncState;
pub use types::{RepoDescriptor, RepoName};
