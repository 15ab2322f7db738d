//! Error types for git-commit-info with contextual messages and exit codes
//!
//! Every failure the step can hit is classified into a category with its own
//! exit code and, where one exists, a suggestion telling the user how to fix it.

use std::fmt;
use std::io;

/// Exit codes for git-commit-info
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (invalid inputs)
  User = 1,
  /// System error (git, I/O)
  System = 2,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for git-commit-info
#[derive(Debug)]
pub enum InfoError {
  /// Input/configuration errors
  Config(ConfigError),

  /// Git lookup errors
  Git(GitError),

  /// I/O errors, with optional context
  Io {
    source: io::Error,
    context: Option<String>,
  },

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl InfoError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    InfoError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      InfoError::Message { message, context, help } => InfoError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      InfoError::Io { source, context } => InfoError::Io {
        source,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      InfoError::Config(_) => ExitCode::User,
      InfoError::Git(_) => ExitCode::System,
      InfoError::Io { .. } => ExitCode::System,
      InfoError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      InfoError::Config(e) => e.help_message(),
      InfoError::Git(e) => e.help_message(),
      InfoError::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

impl fmt::Display for InfoError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      InfoError::Config(e) => write!(f, "{}", e),
      InfoError::Git(e) => write!(f, "{}", e),
      InfoError::Io { source, context } => {
        write!(f, "I/O error: {}", source)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
      InfoError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for InfoError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      InfoError::Io { source, .. } => Some(source),
      _ => None,
    }
  }
}

impl From<io::Error> for InfoError {
  fn from(err: io::Error) -> Self {
    InfoError::Io {
      source: err,
      context: None,
    }
  }
}

impl From<String> for InfoError {
  fn from(msg: String) -> Self {
    InfoError::message(msg)
  }
}

impl From<&str> for InfoError {
  fn from(msg: &str) -> Self {
    InfoError::message(msg)
  }
}

impl From<serde_json::Error> for InfoError {
  fn from(err: serde_json::Error) -> Self {
    InfoError::message(format!("JSON error: {}", err))
  }
}

impl From<ConfigError> for InfoError {
  fn from(err: ConfigError) -> Self {
    InfoError::Config(err)
  }
}

impl From<GitError> for InfoError {
  fn from(err: GitError) -> Self {
    InfoError::Git(err)
  }
}

/// Input-related errors, raised before any git query runs
#[derive(Debug)]
pub enum ConfigError {
  /// Offset input is not an integer
  InvalidOffset { raw: String },

  /// Verbose input is not a recognizable boolean
  InvalidFlag { name: String, raw: String },
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::InvalidOffset { .. } => {
        Some("Use a whole number such as 0 (HEAD), 1 (HEAD~1) or 5 (HEAD~5).".to_string())
      }
      ConfigError::InvalidFlag { name, .. } => Some(format!("Set '{}' to true or false.", name)),
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::InvalidOffset { raw } => {
        write!(f, "Invalid offset value: \"{}\". Offset must be an integer.", raw)
      }
      ConfigError::InvalidFlag { name, raw } => {
        write!(f, "Invalid value for '{}': \"{}\". Expected a boolean.", name, raw)
      }
    }
  }
}

/// Git lookup errors
#[derive(Debug)]
pub enum GitError {
  /// Git command exited unsuccessfully or could not be spawned
  CommandFailed { command: String, stderr: String },

  /// The offset did not resolve to a commit
  ReferenceNotFound { offset: i64, reference: String },

  /// The structured query did not split into the expected fields
  MalformedOutput {
    expected: usize,
    fields: usize,
    output: String,
  },

  /// The full commit id is missing or has the wrong length
  MalformedIdentifier { sha: String },

  /// Any other git failure during retrieval
  RetrievalFailed {
    offset: i64,
    reference: String,
    reason: String,
  },
}

impl GitError {
  fn help_message(&self) -> Option<String> {
    match self {
      GitError::ReferenceNotFound { .. } => Some(
        "Shallow clones only contain the latest commit. Fetch more history (e.g. `fetch-depth: 0` on checkout) or lower the offset."
          .to_string(),
      ),
      GitError::RetrievalFailed { reason, .. } | GitError::CommandFailed { stderr: reason, .. } => {
        if reason.contains("not a git repository") {
          Some("Run the step inside a checked-out repository or point --cwd at one.".to_string())
        } else if reason.contains("No such file") || reason.contains("not found") {
          Some("Make sure git is installed and available on PATH.".to_string())
        } else {
          None
        }
      }
      _ => None,
    }
  }
}

impl fmt::Display for GitError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      GitError::CommandFailed { command, stderr } => {
        write!(f, "Git command failed: {}\n{}", command, stderr)
      }
      GitError::ReferenceNotFound { offset, reference } => {
        write!(
          f,
          "No commit found at offset {} ({}). The offset may exceed the available history.",
          offset, reference
        )
      }
      GitError::MalformedOutput {
        expected,
        fields,
        output,
      } => {
        write!(
          f,
          "Unexpected git log output: expected {} fields, got {}\n{}",
          expected, fields, output
        )
      }
      GitError::MalformedIdentifier { sha } => {
        write!(f, "Invalid commit SHA: \"{}\" (expected 40 hex characters)", sha)
      }
      GitError::RetrievalFailed {
        offset,
        reference,
        reason,
      } => {
        write!(
          f,
          "Failed to get commit info for offset {} ({}): {}",
          offset,
          reference,
          reason.trim()
        )
      }
    }
  }
}

/// Result type alias for git-commit-info
pub type InfoResult<T> = Result<T, InfoError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> InfoResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> InfoResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<InfoError>,
{
  fn context(self, ctx: impl Into<String>) -> InfoResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> InfoResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Print an error to stderr with help text
///
/// Inside GitHub Actions the message is also emitted as an `::error::` workflow
/// command so it shows up as an annotation on the run.
pub fn print_error(error: &InfoError) {
  if std::env::var_os("GITHUB_ACTIONS").is_some() {
    println!("::error::{}", escape_workflow_data(&error.to_string()));
  }

  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}

/// Escape a message for use as workflow command data
fn escape_workflow_data(data: &str) -> String {
  data.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

impl From<anyhow::Error> for InfoError {
  fn from(err: anyhow::Error) -> Self {
    InfoError::message(err.to_string())
  }
}
