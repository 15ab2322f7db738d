//! Step outputs
//!
//! Values are appended to the file named by `GITHUB_OUTPUT` using the
//! `name<<delimiter` form, which is safe for multi-line values such as the
//! raw commit message.

use crate::core::error::{InfoError, InfoResult, ResultExt};
use crate::core::vcs::CommitRecord;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Environment variable naming the runner's output file
pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// Output key/value pairs in a stable order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutputs {
  entries: Vec<(&'static str, String)>,
}

impl StepOutputs {
  pub fn from_record(record: &CommitRecord) -> Self {
    let entries = vec![
      ("sha", record.sha.clone()),
      ("shortSha", record.short_sha.clone()),
      ("message", record.subject.clone()),
      ("messageRaw", record.body.clone()),
      ("author", record.author.clone()),
      ("authorEmail", record.author_email.clone()),
      ("date", record.commit_date.clone()),
      ("dateISO", record.commit_date.clone()),
    ];
    Self { entries }
  }

  pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
    self.entries.iter().map(|(k, v)| (*k, v.as_str()))
  }

  /// Append all outputs to a runner output file
  pub fn write_to_file(&self, path: &Path) -> InfoResult<()> {
    let mut rendered = String::new();
    for (key, value) in self.iter() {
      rendered.push_str(&file_command_entry(key, value, &unique_delimiter())?);
    }

    let mut file = OpenOptions::new()
      .create(true)
      .append(true)
      .open(path)
      .with_context(|| format!("Failed to open output file {}", path.display()))?;
    file
      .write_all(rendered.as_bytes())
      .with_context(|| format!("Failed to write output file {}", path.display()))?;

    Ok(())
  }

  /// `key=value` lines for local runs; multi-line values are escaped
  pub fn to_plain(&self) -> String {
    self
      .iter()
      .map(|(key, value)| format!("{}={}\n", key, value.replace('\n', "\\n")))
      .collect()
  }

  pub fn to_json(&self) -> InfoResult<String> {
    let map: serde_json::Map<String, serde_json::Value> = self
      .iter()
      .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
      .collect();
    Ok(serde_json::to_string_pretty(&map)?)
  }
}

#[cfg(test)]
impl StepOutputs {
  pub fn get(&self, key: &str) -> Option<&str> {
    self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
  }
}

/// Render one `name<<delimiter` entry
fn file_command_entry(key: &str, value: &str, delimiter: &str) -> InfoResult<String> {
  if key.contains(delimiter) || value.contains(delimiter) {
    return Err(InfoError::message(format!(
      "Output '{}' contains the delimiter {}",
      key, delimiter
    )));
  }
  Ok(format!("{}<<{}\n{}\n{}\n", key, delimiter, value, delimiter))
}

fn unique_delimiter() -> String {
  let nanos = SystemTime::now()
    .duration_since(UNIX_EPOCH)
    .map(|d| d.as_nanos())
    .unwrap_or(0);
  format!("ghadelimiter_{}_{:x}", std::process::id(), nanos)
}
