//! # File Filter Module
//!
//! Decides which files are expected to carry the header. Files that do not
//! match are exempt and never reported, whatever their content.

use std::ffi::OsStr;

use regex::bytes::Regex;
use tracing::trace;

/// Whole-string filename matcher.
#[derive(Debug, Clone)]
pub struct FilenameMatcher {
  pattern: Regex,
}

impl FilenameMatcher {
  /// Creates a matcher from a compiled pattern.
  ///
  /// The pattern should be anchored at both ends (`^...$`); the filename is
  /// matched as given on the command line, directories included. Names that
  /// are not valid UTF-8 are matched on their platform bytes.
  pub const fn new(pattern: Regex) -> Self {
    Self { pattern }
  }

  /// Returns whether `filename` must carry the header.
  pub fn requires_header<P: AsRef<OsStr> + ?Sized>(&self, filename: &P) -> bool {
    let filename = filename.as_ref();
    let required = self.pattern.is_match(filename.as_encoded_bytes());
    if !required {
      trace!("Exempt by filename: {}", filename.to_string_lossy());
    }
    required
  }
}
