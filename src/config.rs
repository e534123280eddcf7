//! # Configuration Module
//!
//! This module holds the immutable configuration value that drives header
//! detection: the expected header line patterns, the filename matcher that
//! decides which files need a header, and the size of the scan window.
//!
//! The binary only ever uses [`HeaderConfig::moonfire`]. Nothing is read from
//! disk or from the environment.

use regex::Regex;

use crate::file_filter::FilenameMatcher;

/// Number of leading lines inspected for the header.
pub const MAX_LINE_COUNT: usize = 10;

/// Patterns that must each match some line within the scan window.
pub const EXPECTED_LINES: [&str; 3] = [
  r"This file is part of Moonfire NVR, a security camera network video recorder\.",
  r"Copyright \(C\) 20\d{2} The Moonfire NVR Authors; see AUTHORS and LICENSE\.txt\.",
  r"SPDX-License-Identifier: GPL-v3\.0-or-later WITH GPL-3\.0-linking-exception\.?",
];

/// Filenames matching this pattern are expected to carry the header.
///
/// Matched against the raw bytes of the name, so `.` also accepts bytes that
/// are not valid UTF-8.
pub const FILENAME_PATTERN: &str = r"(?-u)^.*\.([jt]sx?|html|css|py|rs|sh|sql)$";

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// A pattern failed to compile.
  #[error("Invalid pattern '{pattern}': {source}")]
  InvalidPattern {
    pattern: String,
    #[source]
    source: regex::Error,
  },
}

/// Immutable header detection configuration.
#[derive(Debug, Clone)]
pub struct HeaderConfig {
  expected_lines: Vec<Regex>,
  filename_matcher: FilenameMatcher,
  max_line_count: usize,
}

impl HeaderConfig {
  /// Compiles a configuration from raw patterns.
  ///
  /// # Parameters
  ///
  /// * `expected_lines` - Patterns that must each match some line in the window,
  ///   in the order they are tried against a line
  /// * `filename_pattern` - Whole-string pattern selecting files that need a
  ///   header, matched against the bytes of the file name
  /// * `max_line_count` - Number of leading lines to inspect
  ///
  /// # Returns
  ///
  /// The compiled configuration, or the first pattern that failed to compile.
  pub fn new<S: AsRef<str>>(
    expected_lines: &[S],
    filename_pattern: &str,
    max_line_count: usize,
  ) -> Result<Self, ConfigError> {
    let expected_lines = expected_lines
      .iter()
      .map(|p| Regex::new(p.as_ref()).map_err(|source| invalid_pattern(p.as_ref(), source)))
      .collect::<Result<Vec<_>, _>>()?;
    let filename_matcher = regex::bytes::Regex::new(filename_pattern)
      .map(FilenameMatcher::new)
      .map_err(|source| invalid_pattern(filename_pattern, source))?;

    Ok(Self {
      expected_lines,
      filename_matcher,
      max_line_count,
    })
  }

  /// The Moonfire NVR header: project line, copyright line and SPDX line,
  /// checked within the first [`MAX_LINE_COUNT`] lines of web, Python, Rust,
  /// shell and SQL sources.
  pub fn moonfire() -> Result<Self, ConfigError> {
    Self::new(&EXPECTED_LINES, FILENAME_PATTERN, MAX_LINE_COUNT)
  }

  pub fn expected_lines(&self) -> &[Regex] {
    &self.expected_lines
  }

  pub const fn filename_matcher(&self) -> &FilenameMatcher {
    &self.filename_matcher
  }

  pub const fn max_line_count(&self) -> usize {
    self.max_line_count
  }
}

fn invalid_pattern(pattern: &str, source: regex::Error) -> ConfigError {
  ConfigError::InvalidPattern {
    pattern: pattern.to_string(),
    source,
  }
}
