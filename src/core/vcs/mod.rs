pub mod commit;
pub mod system_git;

pub use commit::{resolve_reference, retrieve_commit};
pub use system_git::SystemGit;

use crate::core::error::InfoResult;
use std::path::Path;

/// Metadata for a single commit, as reported by `git log`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
  pub sha: String,
  pub short_sha: String,
  pub subject: String,
  pub body: String,
  pub author: String,
  pub author_email: String,
  pub author_date: String,
  pub commit_date: String,
}

/// Runs an external program and captures its stdout
///
/// Implementations return `GitError::CommandFailed` carrying stderr when the
/// program exits unsuccessfully.
pub trait CommandRunner {
  fn run(&self, program: &str, args: &[String], cwd: &Path) -> InfoResult<String>;
}
