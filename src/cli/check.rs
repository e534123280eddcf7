//! # Check Command
//!
//! This module implements the two invocation modes: checking a list of files
//! (CI) and checking standard input (pre-commit formatter hook).

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{debug, info};

use crate::config::HeaderConfig;
use crate::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use crate::output::print_missing_files;
use crate::processor::Processor;

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
  /// Files to check. Only .js, .jsx, .ts, .tsx, .html, .css, .py, .rs, .sh
  /// and .sql files are inspected. Reads standard input when omitted.
  #[arg(required = false, value_name = "FILES")]
  pub files: Vec<PathBuf>,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Only print the names of files missing the header
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

/// Result of a check, mapped to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
  /// Every checked input carries the header.
  Clean,
  /// At least one checked input lacks the header.
  MissingHeader,
}

impl From<Status> for ExitCode {
  fn from(status: Status) -> Self {
    match status {
      Status::Clean => ExitCode::SUCCESS,
      Status::MissingHeader => ExitCode::FAILURE,
    }
  }
}

/// Run the check command with the given arguments
pub fn run_check(args: CheckArgs) -> Result<ExitCode> {
  init_tracing(args.quiet, args.verbose);

  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  let config = HeaderConfig::moonfire().context("Failed to build header configuration")?;
  let processor = Processor::new(config);

  let status = if args.files.is_empty() {
    check_stdin(&processor)?
  } else {
    check_files(&processor, &args.files)?
  };
  Ok(status.into())
}

/// File-list mode: reports every file that requires the header but lacks it.
///
/// Nothing is printed unless all files were read successfully.
pub fn check_files<P: AsRef<Path>>(processor: &Processor, filenames: &[P]) -> Result<Status> {
  info!("Checking {} file(s)", filenames.len());
  let missing = processor.missing_files(filenames)?;

  if missing.is_empty() {
    return Ok(Status::Clean);
  }

  print_missing_files(&missing).context("Failed to write report")?;
  Ok(Status::MissingHeader)
}

/// Stdin mode: silent, the verdict is only reported through the exit code.
pub fn check_stdin(processor: &Processor) -> Result<Status> {
  debug!("Reading standard input");
  if processor.stdin_has_license()? {
    Ok(Status::Clean)
  } else {
    debug!("Standard input is missing the header");
    Ok(Status::MissingHeader)
  }
}
