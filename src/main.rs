//! # has-license
//!
//! Checks that source files carry the expected copyright/license header.

use std::process::ExitCode;

use anyhow::Result;
use has_license::cli::{Cli, run_check};

fn main() -> Result<ExitCode> {
  let cli = Cli::parse_args();

  run_check(cli.check_args)
}
