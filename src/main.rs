mod commands;
mod core;
mod ui;

use clap::Parser;
use crate::core::config::{ActionInputs, CWD_OVERRIDE_ENV};
use crate::core::error::{InfoError, print_error};
use std::path::PathBuf;

/// Read commit metadata for HEAD~N and publish it as step outputs
#[derive(Parser)]
#[command(name = "git-commit-info")]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
struct Cli {
  /// Commits back from HEAD (0 = HEAD, negative values also count back)
  #[arg(long, env = "INPUT_OFFSET", default_value = "0", allow_hyphen_values = true)]
  offset: String,

  /// Echo git commands and print debug diagnostics
  #[arg(
    long,
    env = "INPUT_VERBOSE",
    default_value = "false",
    num_args = 0..=1,
    default_missing_value = "true"
  )]
  verbose: String,

  /// Repository directory (default: current directory)
  #[arg(long, env = CWD_OVERRIDE_ENV)]
  cwd: Option<PathBuf>,

  /// Print outputs as a JSON object instead of writing $GITHUB_OUTPUT
  #[arg(long)]
  json: bool,
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = Cli::parse();

  let inputs = match ActionInputs::parse(&cli.offset, &cli.verbose, cli.cwd.as_deref(), cli.json) {
    Ok(inputs) => inputs,
    Err(e) => handle_error(e),
  };

  ui::log::init(inputs.verbose || ui::log::runner_debug());

  if let Err(err) = commands::run_info(&inputs) {
    handle_error(err);
  }
}

fn handle_error(err: InfoError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
