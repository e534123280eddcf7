//! # License Detection Module
//!
//! This module contains the header detection algorithm. It is a pure function
//! of the leading lines of a file: no I/O happens here, so callers decide
//! where lines come from and how read errors are handled.

use regex::Regex;
use tracing::trace;

use crate::config::HeaderConfig;

/// Detects whether every expected header line appears within the scan window.
///
/// Each expected line may appear anywhere in the window and in any order. A
/// single input line satisfies at most one expected line: the outstanding
/// patterns are tried in configured order and the first match is consumed.
#[derive(Debug, Clone, Copy)]
pub struct HeaderDetector<'a> {
  config: &'a HeaderConfig,
}

impl<'a> HeaderDetector<'a> {
  pub const fn new(config: &'a HeaderConfig) -> Self {
    Self { config }
  }

  /// Checks if the given lines carry the header.
  ///
  /// # Parameters
  ///
  /// * `lines` - The content, one item per line, in original order
  ///
  /// # Returns
  ///
  /// `true` as soon as all expected lines were seen, `false` if the window
  /// closes or the input ends first.
  pub fn has_license<I, S>(&self, lines: I) -> bool
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let Ok(found) = self.try_has_license(lines.into_iter().map(Ok::<S, std::convert::Infallible>));
    found
  }

  /// Fallible variant of [`has_license`](Self::has_license) for lazily read
  /// input.
  ///
  /// At most `max_line_count` items are pulled from `lines`; the first error
  /// among them is returned unchanged.
  pub fn try_has_license<I, S, E>(&self, lines: I) -> Result<bool, E>
  where
    I: IntoIterator<Item = Result<S, E>>,
    S: AsRef<str>,
  {
    let mut outstanding: Vec<&Regex> = self.config.expected_lines().iter().collect();

    for (index, line) in lines.into_iter().take(self.config.max_line_count()).enumerate() {
      let line = line?;
      if let Some(pos) = outstanding.iter().position(|rule| rule.is_match(line.as_ref())) {
        let rule = outstanding.remove(pos);
        trace!("Line {} matches '{}'", index + 1, rule.as_str());
      }
      if outstanding.is_empty() {
        return Ok(true);
      }
    }

    trace!("{} expected line(s) not found", outstanding.len());
    Ok(false)
  }
}
