//! # Output Module
//!
//! This module centralizes the user-facing report on stdout. The layout is a
//! fixed banner followed by one missing file per line, which CI logs and
//! scripts rely on.

use std::io::{self, Write};
use std::path::PathBuf;

use owo_colors::{OwoColorize, Stream};

use crate::logging::is_quiet;

/// Banner printed before the list of files missing the header.
pub const MISSING_BANNER: &str = "The following files are missing expected copyright/license headers:";

/// Print the list of files missing the header to stdout.
///
/// In quiet mode the banner is omitted and only the file names are printed.
/// Names are written as the bytes they were given in, not re-encoded.
pub fn print_missing_files(files: &[PathBuf]) -> io::Result<()> {
  let stdout = io::stdout();
  let mut out = stdout.lock();
  if !is_quiet() {
    writeln!(out, "{}", MISSING_BANNER.if_supports_color(Stream::Stdout, |s| s.red()))?;
  }
  write_file_list(&mut out, files)?;
  out.flush()
}

fn write_file_list<W: Write>(out: &mut W, files: &[PathBuf]) -> io::Result<()> {
  for file in files {
    out.write_all(file.as_os_str().as_encoded_bytes())?;
    out.write_all(b"\n")?;
  }
  Ok(())
}
