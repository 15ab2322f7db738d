//! Commit lookup by offset from HEAD
//!
//! Two `git log -1` queries per lookup: one pipe-delimited line with the
//! metadata fields, then the raw message body. The query strings are consumed
//! by existing automation and must not change.

use super::{CommandRunner, CommitRecord};
use crate::core::error::{GitError, InfoError, InfoResult};
use crate::ui::log::Diagnostics;
use std::path::Path;

/// `%H|%h|%s|%an|%ae|%ai|%ci`: sha, short sha, subject, author name,
/// author email, author date, committer date
const FIELDS_FORMAT: &str = "%H|%h|%s|%an|%ae|%ai|%ci";
const BODY_FORMAT: &str = "%B";
const FIELD_DELIMITER: char = '|';
const FIELD_COUNT: usize = 7;
const SHA_LEN: usize = 40;

/// Convert an offset into a revision expression
///
/// Offsets always count backwards; `-2` and `2` both give `HEAD~2`.
pub fn resolve_reference(offset: i64) -> String {
  match offset.unsigned_abs() {
    0 => "HEAD".to_string(),
    n => format!("HEAD~{}", n),
  }
}

/// Look up the commit `offset` steps behind HEAD in the repository at `cwd`
pub fn retrieve_commit(
  offset: i64,
  cwd: &Path,
  runner: &dyn CommandRunner,
  log: &dyn Diagnostics,
) -> InfoResult<CommitRecord> {
  let reference = resolve_reference(offset);
  let cwd = std::path::absolute(cwd)?;

  log.debug(&format!("Resolved offset {} to {}", offset, reference));
  log.debug(&format!("Working directory: {}", cwd.display()));

  let output = git_log(runner, &cwd, FIELDS_FORMAT, &reference)
    .map_err(|e| classify_failure(e, offset, &reference))?;
  let output = output.trim();

  if output.is_empty() {
    return Err(InfoError::Git(GitError::ReferenceNotFound { offset, reference }));
  }

  let fields: Vec<&str> = output.split(FIELD_DELIMITER).collect();
  let [sha, short_sha, subject, author, author_email, author_date, commit_date] = fields[..] else {
    return Err(InfoError::Git(GitError::MalformedOutput {
      expected: FIELD_COUNT,
      fields: fields.len(),
      output: output.to_string(),
    }));
  };

  if sha.is_empty() || sha.len() != SHA_LEN {
    return Err(InfoError::Git(GitError::MalformedIdentifier { sha: sha.to_string() }));
  }

  let body = git_log(runner, &cwd, BODY_FORMAT, &reference)
    .map_err(|e| classify_failure(e, offset, &reference))?
    .trim()
    .to_string();

  log.debug(&format!("Message body is {} line(s)", body.lines().count()));

  Ok(CommitRecord {
    sha: sha.to_string(),
    short_sha: short_sha.to_string(),
    subject: subject.to_string(),
    body,
    author: author.to_string(),
    author_email: author_email.to_string(),
    author_date: author_date.to_string(),
    commit_date: commit_date.to_string(),
  })
}

fn git_log(runner: &dyn CommandRunner, cwd: &Path, format: &str, reference: &str) -> InfoResult<String> {
  let args = [
    "log".to_string(),
    "-1".to_string(),
    format!("--format={}", format),
    reference.to_string(),
  ];
  runner.run("git", &args, cwd)
}

/// Map a runner failure onto the lookup error taxonomy
///
/// Git reports an offset past the root commit as
/// `ambiguous argument 'HEAD~N': unknown revision or path not in the working tree`.
fn classify_failure(err: InfoError, offset: i64, reference: &str) -> InfoError {
  let reason = match err {
    InfoError::Git(GitError::CommandFailed { stderr, .. }) => stderr,
    other => other.to_string(),
  };

  if reason.contains("ambiguous argument") || reason.contains("unknown revision") {
    InfoError::Git(GitError::ReferenceNotFound {
      offset,
      reference: reference.to_string(),
    })
  } else {
    InfoError::Git(GitError::RetrievalFailed {
      offset,
      reference: reference.to_string(),
      reason,
    })
  }
}
