use crate::core::config::{ActionInputs, OutputFormat};
use crate::core::error::InfoResult;
use crate::core::output::{GITHUB_OUTPUT_ENV, StepOutputs};
use crate::core::vcs::{CommandRunner, SystemGit, resolve_reference, retrieve_commit};
use crate::ui::log::{Diagnostics, TracingDiagnostics};
use std::path::Path;

/// Run the lookup and publish outputs
///
/// Outputs are only written once the whole record has been retrieved.
pub fn run_info(inputs: &ActionInputs) -> InfoResult<()> {
  let runner = SystemGit::new(inputs.verbose);
  let log = TracingDiagnostics;
  let outputs = lookup(inputs, &runner, &log)?;

  match inputs.format {
    OutputFormat::Json => println!("{}", outputs.to_json()?),
    OutputFormat::Auto => match std::env::var_os(GITHUB_OUTPUT_ENV).filter(|p| !p.is_empty()) {
      Some(path) => {
        outputs.write_to_file(Path::new(&path))?;
        log.debug(&format!("Wrote outputs to {}", GITHUB_OUTPUT_ENV));
      }
      None => print!("{}", outputs.to_plain()),
    },
  }

  Ok(())
}

fn lookup(inputs: &ActionInputs, runner: &dyn CommandRunner, log: &dyn Diagnostics) -> InfoResult<StepOutputs> {
  log.info(&format!(
    "Getting commit info for offset {} ({})",
    inputs.offset,
    resolve_reference(inputs.offset)
  ));

  let record = retrieve_commit(inputs.offset, &inputs.cwd, runner, log)?;

  log.info(&format!("Commit {} ({})", record.short_sha, record.subject));
  log.info(&format!("Author: {} <{}>", record.author, record.author_email));
  log.info(&format!("Date: {}", record.commit_date));

  Ok(StepOutputs::from_record(&record))
}
