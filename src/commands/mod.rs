//! CLI commands for git-commit-info
//!
//! - **info**: Look up one commit and publish its metadata as step outputs

pub mod info;

pub use info::run_info;
