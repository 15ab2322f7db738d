//! Core engine for git-commit-info
//!
//! - **config**: Step inputs (offset, verbosity, working directory) and validation
//! - **error**: Error types with contextual help messages and exit codes
//! - **output**: Step output sink (`$GITHUB_OUTPUT`, plain, JSON)
//! - **vcs**: Offset resolution and commit lookup through system git

pub mod config;
pub mod error;
pub mod output;
pub mod vcs;
