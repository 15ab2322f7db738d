//! Step inputs
//!
//! Raw values arrive as strings, either from CLI flags or from the `INPUT_*`
//! environment the Actions runner sets for `with:` keys. Everything is
//! validated here, before any git query runs.

use crate::core::error::{ConfigError, InfoResult, ResultExt};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the repository directory
pub const CWD_OVERRIDE_ENV: &str = "GIT_COMMIT_INFO_CWD";

/// How step outputs are emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
  /// `$GITHUB_OUTPUT` when set, otherwise `key=value` lines on stdout
  Auto,
  /// A single JSON object on stdout
  Json,
}

/// Validated step inputs
#[derive(Debug, Clone)]
pub struct ActionInputs {
  /// Commits back from HEAD; sign is ignored
  pub offset: i64,

  /// Echo git commands and emit debug diagnostics
  pub verbose: bool,

  /// Absolute repository directory
  pub cwd: PathBuf,

  pub format: OutputFormat,
}

impl ActionInputs {
  /// Validate raw inputs
  ///
  /// `cwd_override` beats the process working directory.
  pub fn parse(raw_offset: &str, raw_verbose: &str, cwd_override: Option<&Path>, json: bool) -> InfoResult<Self> {
    let verbose = parse_flag("verbose", raw_verbose)?;
    let offset = parse_offset(raw_offset)?;
    let cwd = resolve_working_dir(cwd_override)?;

    Ok(Self {
      offset,
      verbose,
      cwd,
      format: if json { OutputFormat::Json } else { OutputFormat::Auto },
    })
  }
}

/// Parse the offset input; blank means 0
pub fn parse_offset(raw: &str) -> InfoResult<i64> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return Ok(0);
  }

  trimmed.parse::<i64>().map_err(|_| {
    ConfigError::InvalidOffset {
      raw: raw.to_string(),
    }
    .into()
  })
}

/// Parse a boolean input the way YAML spells them; blank means false
pub fn parse_flag(name: &str, raw: &str) -> InfoResult<bool> {
  match raw.trim().to_ascii_lowercase().as_str() {
    "" | "false" | "0" | "no" | "off" => Ok(false),
    "true" | "1" | "yes" | "on" => Ok(true),
    _ => Err(
      ConfigError::InvalidFlag {
        name: name.to_string(),
        raw: raw.to_string(),
      }
      .into(),
    ),
  }
}

/// Pick the repository directory and make it absolute
pub fn resolve_working_dir(cwd_override: Option<&Path>) -> InfoResult<PathBuf> {
  let dir = match cwd_override {
    Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
    _ => std::env::current_dir().context("Failed to get current directory")?,
  };
  Ok(std::path::absolute(dir)?)
}
