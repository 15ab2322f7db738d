//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Variables the binary reads; cleared so the host CI can't leak into tests
const STEP_ENV: &[&str] = &[
  "GITHUB_OUTPUT",
  "GITHUB_ACTIONS",
  "INPUT_OFFSET",
  "INPUT_VERBOSE",
  "GIT_COMMIT_INFO_CWD",
  "RUNNER_DEBUG",
  "RUST_LOG",
];

/// A throwaway repository with a configured identity
pub struct TestRepo {
  _root: TempDir,
  pub path: PathBuf,
}

impl TestRepo {
  /// Create an empty repository with main as default branch
  pub fn new() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();

    git(&path, &["init", "--initial-branch=main"])?;
    git(&path, &["config", "user.name", "Test User"])?;
    git(&path, &["config", "user.email", "test@example.com"])?;
    git(&path, &["config", "commit.gpgsign", "false"])?;

    Ok(Self { _root: root, path })
  }

  /// Create a repository holding one empty commit per subject, oldest first
  pub fn with_commits(subjects: &[&str]) -> Result<(Self, Vec<String>)> {
    let repo = Self::new()?;
    let mut shas = Vec::with_capacity(subjects.len());
    for subject in subjects {
      shas.push(repo.commit(&[*subject])?);
    }
    Ok((repo, shas))
  }

  /// Commit with one `-m` per paragraph and return the new SHA
  pub fn commit(&self, paragraphs: &[&str]) -> Result<String> {
    let mut args = vec!["commit", "--allow-empty"];
    for paragraph in paragraphs {
      args.push("-m");
      args.push(*paragraph);
    }
    git(&self.path, &args)?;
    self.head()
  }

  pub fn head(&self) -> Result<String> {
    let output = git(&self.path, &["rev-parse", "HEAD"])?;
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
  }

  /// Raw message of a commit as git stores it
  pub fn raw_message(&self, sha: &str) -> Result<String> {
    let output = git(&self.path, &["log", "-1", "--format=%B", sha])?;
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
  }
}

/// Run git command in a directory
pub fn git(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = Command::new("git")
    .current_dir(cwd)
    .args(args)
    .output()
    .context("Failed to run git command")?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    anyhow::bail!("Git command failed: git {}\n{}", args.join(" "), stderr);
  }

  Ok(output)
}

/// Result of one binary invocation
pub struct StepRun {
  pub output: Output,
  /// Parsed `$GITHUB_OUTPUT` contents
  pub outputs: HashMap<String, String>,
}

impl StepRun {
  pub fn code(&self) -> Option<i32> {
    self.output.status.code()
  }

  pub fn stdout(&self) -> String {
    String::from_utf8_lossy(&self.output.stdout).into_owned()
  }

  pub fn stderr(&self) -> String {
    String::from_utf8_lossy(&self.output.stderr).into_owned()
  }

  pub fn get(&self, key: &str) -> &str {
    self.outputs.get(key).map(String::as_str).unwrap_or_default()
  }
}

/// Run git-commit-info the way the runner does, with a fresh `$GITHUB_OUTPUT`
///
/// Does not fail on a non-zero exit; callers assert on the status.
pub fn run_step(cwd: &Path, args: &[&str], envs: &[(&str, &str)]) -> Result<StepRun> {
  let out_dir = TempDir::new()?;
  let output_file = out_dir.path().join("github_output");

  let mut cmd = Command::new(env!("CARGO_BIN_EXE_git-commit-info"));
  cmd.current_dir(cwd).args(args);
  for key in STEP_ENV {
    cmd.env_remove(key);
  }
  cmd.env("GITHUB_OUTPUT", &output_file);
  for (key, value) in envs {
    cmd.env(key, value);
  }

  let output = cmd.output().context("Failed to run git-commit-info")?;
  let content = std::fs::read_to_string(&output_file).unwrap_or_default();

  Ok(StepRun {
    output,
    outputs: parse_output_file(&content),
  })
}

/// Run git-commit-info without `$GITHUB_OUTPUT`
pub fn run_local(cwd: &Path, args: &[&str]) -> Result<Output> {
  let mut cmd = Command::new(env!("CARGO_BIN_EXE_git-commit-info"));
  cmd.current_dir(cwd).args(args);
  for key in STEP_ENV {
    cmd.env_remove(key);
  }
  cmd.output().context("Failed to run git-commit-info")
}

/// Parse `name<<delimiter` entries
pub fn parse_output_file(content: &str) -> HashMap<String, String> {
  let mut outputs = HashMap::new();
  let mut lines = content.lines();

  while let Some(line) = lines.next() {
    if let Some((key, delimiter)) = line.split_once("<<") {
      let mut value = Vec::new();
      for line in lines.by_ref() {
        if line == delimiter {
          break;
        }
        value.push(line);
      }
      outputs.insert(key.to_string(), value.join("\n"));
    }
  }

  outputs
}
