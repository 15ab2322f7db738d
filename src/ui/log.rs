//! Logging setup and the diagnostics sink used by commit lookup
//!
//! Everything goes to stderr through `tracing-subscriber`, leaving stdout for
//! step outputs and workflow commands.

use tracing_subscriber::EnvFilter;

/// Leveled message sink; has no effect on control flow
pub trait Diagnostics {
  fn info(&self, msg: &str);
  fn debug(&self, msg: &str);
}

/// Forwards diagnostics to `tracing`
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
  fn info(&self, msg: &str) {
    tracing::info!("{}", msg);
  }

  fn debug(&self, msg: &str) {
    tracing::debug!("{}", msg);
  }
}

/// Whether the runner was started with step debug logging enabled
pub fn runner_debug() -> bool {
  std::env::var("RUNNER_DEBUG").is_ok_and(|v| v == "1")
}

/// Install the global subscriber
///
/// `RUST_LOG` wins when set. Otherwise the level is `debug` for verbose runs and
/// `info` for everything else.
pub fn init(verbose: bool) {
  let default_level = if verbose { "debug" } else { "info" };
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(format!("git_commit_info={}", default_level)));

  // try_init: a subscriber may already be set when embedded
  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .without_time()
    .try_init();
}

/// Collects messages in memory
#[cfg(test)]
#[derive(Default)]
pub struct RecordingDiagnostics {
  info: std::cell::RefCell<Vec<String>>,
  debug: std::cell::RefCell<Vec<String>>,
}

#[cfg(test)]
impl RecordingDiagnostics {
  pub fn info_lines(&self) -> Vec<String> {
    self.info.borrow().clone()
  }

  pub fn debug_lines(&self) -> Vec<String> {
    self.debug.borrow().clone()
  }
}

#[cfg(test)]
impl Diagnostics for RecordingDiagnostics {
  fn info(&self, msg: &str) {
    self.info.borrow_mut().push(msg.to_string());
  }

  fn debug(&self, msg: &str) {
    self.debug.borrow_mut().push(msg.to_string());
  }
}
