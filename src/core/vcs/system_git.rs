//! System git backend
//!
//! Spawns the `git` binary found on PATH and captures stdout. The child gets an
//! isolated environment so user-level locale settings can't change the error
//! text that failure classification relies on.

use super::CommandRunner;
use crate::core::error::{GitError, InfoError, InfoResult, ResultExt};
use std::path::Path;
use std::process::Command;

/// Command runner backed by system binaries
pub struct SystemGit {
  /// Echo command lines and captured output to stderr
  verbose: bool,
}

impl SystemGit {
  pub fn new(verbose: bool) -> Self {
    Self { verbose }
  }

  /// Create a command with isolated environment
  ///
  /// - Sets working directory to `cwd`
  /// - Clears environment variables
  /// - Whitelists only PATH and HOME
  /// - Pins the locale so messages stay in English
  fn command(&self, program: &str, cwd: &Path) -> Command {
    let mut cmd = Command::new(program);
    cmd.current_dir(cwd);

    cmd.env_clear();
    if let Ok(path) = std::env::var("PATH") {
      cmd.env("PATH", path);
    }
    if let Ok(home) = std::env::var("HOME") {
      cmd.env("HOME", home);
    }
    cmd.env("LC_ALL", "C");
    cmd.env("GIT_TERMINAL_PROMPT", "0");

    cmd
  }
}

impl CommandRunner for SystemGit {
  fn run(&self, program: &str, args: &[String], cwd: &Path) -> InfoResult<String> {
    let command_line = format!("{} {}", program, args.join(" "));
    if self.verbose {
      eprintln!("[command]{}", command_line);
    }

    let output = self
      .command(program, cwd)
      .args(args)
      .output()
      .with_context(|| format!("Failed to execute {}", command_line))?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      return Err(InfoError::Git(GitError::CommandFailed {
        command: command_line,
        stderr: stderr.trim().to_string(),
      }));
    }

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    if self.verbose {
      eprint!("{}", stdout);
    }

    Ok(stdout)
  }
}
