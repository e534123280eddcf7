//! # Processor Module
//!
//! Runs the header detector over files and streams. Files are opened one at a
//! time and closed before the next is read; only the lines inside the scan
//! window are ever read.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::HeaderConfig;
use crate::file_io::universal_lines;
use crate::license_detection::HeaderDetector;
use crate::verbose_log;

/// Error type for header checks.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
  /// The file could not be opened.
  #[error("Failed to open file '{}': {source}", path.display())]
  Open {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// The file could not be read or was not valid UTF-8.
  #[error("Failed to read file '{}': {source}", path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// Standard input could not be read or was not valid UTF-8.
  #[error("Failed to read standard input: {0}")]
  Stdin(#[source] io::Error),
}

/// Checks files and streams against a [`HeaderConfig`].
pub struct Processor {
  config: HeaderConfig,
}

impl Processor {
  pub const fn new(config: HeaderConfig) -> Self {
    Self { config }
  }

  /// Returns the files that require a header but lack one, in input order.
  ///
  /// Files exempt by name are skipped without being opened. The first file
  /// that cannot be read aborts the whole check.
  pub fn missing_files<P: AsRef<Path>>(&self, filenames: &[P]) -> Result<Vec<PathBuf>, CheckError> {
    let mut missing = Vec::new();

    for path in filenames.iter().map(AsRef::as_ref) {
      if !self.config.filename_matcher().requires_header(path.as_os_str()) {
        continue;
      }
      if self.file_has_license(path)? {
        verbose_log!("ok: {}", path.display());
      } else {
        verbose_log!("missing: {}", path.display());
        missing.push(path.to_path_buf());
      }
    }

    debug!("{} of {} file(s) missing the header", missing.len(), filenames.len());
    Ok(missing)
  }

  /// Checks a single file, regardless of its name.
  ///
  /// Lines end at `\n`, `\r\n` or a bare `\r`.
  pub fn file_has_license(&self, path: &Path) -> Result<bool, CheckError> {
    let file = File::open(path).map_err(|source| CheckError::Open {
      path: path.to_path_buf(),
      source,
    })?;

    self
      .file_reader_has_license(BufReader::new(file))
      .map_err(|source| CheckError::Read {
        path: path.to_path_buf(),
        source,
      })
  }

  /// Checks standard input.
  pub fn stdin_has_license(&self) -> Result<bool, CheckError> {
    self.reader_has_license(io::stdin().lock()).map_err(CheckError::Stdin)
  }

  /// Checks content split the way files are, on any line ending.
  pub fn file_reader_has_license<R: BufRead>(&self, reader: R) -> io::Result<bool> {
    HeaderDetector::new(&self.config).try_has_license(universal_lines(reader))
  }

  /// Checks content split the way standard input is, on `\n` only.
  ///
  /// Reads no further than the scan window.
  pub fn reader_has_license<R: BufRead>(&self, reader: R) -> io::Result<bool> {
    HeaderDetector::new(&self.config).try_has_license(reader.lines())
  }
}

#[cfg(test)]
mod tests {
  use std::fs;
  use std::io::Cursor;

  use tempfile::tempdir;

  use super::*;

  const HEADER: &str = "\
# This file is part of Moonfire NVR, a security camera network video recorder.
# Copyright (C) 2021 The Moonfire NVR Authors; see AUTHORS and LICENSE.txt.
# SPDX-License-Identifier: GPL-v3.0-or-later WITH GPL-3.0-linking-exception
";

  fn processor() -> Processor {
    Processor::new(HeaderConfig::moonfire().unwrap())
  }

  #[test]
  fn test_reader_has_license() {
    let processor = processor();
    assert!(processor.reader_has_license(Cursor::new(HEADER)).unwrap());
    assert!(!processor.reader_has_license(Cursor::new("print('hi')\n")).unwrap());
    assert!(!processor.reader_has_license(Cursor::new("")).unwrap());
  }

  #[test]
  fn test_crlf_line_endings() {
    let processor = processor();
    let content = HEADER.replace('\n', "\r\n");
    assert!(processor.reader_has_license(Cursor::new(content)).unwrap());
  }

  #[test]
  fn test_cr_only_line_endings() {
    let processor = processor();
    let content = HEADER.replace('\n', "\r");
    assert!(processor.file_reader_has_license(Cursor::new(content.as_str())).unwrap());
    // Standard input only splits on "\n", so this is a single line there.
    assert!(!processor.reader_has_license(Cursor::new(content.as_str())).unwrap());
  }

  #[test]
  fn test_cr_shifts_window_for_files() {
    let processor = processor();
    // Eight CR-terminated lines push the header past the window of a file,
    // while standard input sees them as one line.
    let content = format!("{}\n{HEADER}", "x\r".repeat(8));
    assert!(!processor.file_reader_has_license(Cursor::new(content.as_str())).unwrap());
    assert!(processor.reader_has_license(Cursor::new(content.as_str())).unwrap());
  }

  #[test]
  fn test_cr_only_file_has_license() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("old_mac.py");
    fs::write(&path, HEADER.replace('\n', "\r")).unwrap();

    assert!(processor().file_has_license(&path).unwrap());
    assert!(processor().missing_files(&[&path]).unwrap().is_empty());
  }

  #[test]
  fn test_invalid_utf8_in_window_is_an_error() {
    let processor = processor();
    let content: &[u8] = b"\xff\xfe\n";
    let err = processor.reader_has_license(content).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
  }

  #[test]
  fn test_invalid_utf8_after_window_is_not_read() {
    let processor = processor();
    let mut content = HEADER.as_bytes().to_vec();
    content.extend_from_slice(b"\xff\xfe\n");
    assert!(processor.reader_has_license(content.as_slice()).unwrap());
  }

  #[test]
  fn test_missing_files_preserves_order() {
    let dir = tempdir().unwrap();
    let with = dir.path().join("with.rs");
    let without_b = dir.path().join("b.sh");
    let without_a = dir.path().join("a.py");
    let exempt = dir.path().join("notes.md");
    fs::write(&with, HEADER).unwrap();
    fs::write(&without_b, "echo hi\n").unwrap();
    fs::write(&without_a, "print('hi')\n").unwrap();
    fs::write(&exempt, "no header here\n").unwrap();

    let names = [&without_b, &with, &exempt, &without_a];

    let missing = processor().missing_files(&names).unwrap();
    assert_eq!(missing, vec![without_b.clone(), without_a.clone()]);
  }

  #[test]
  fn test_exempt_file_is_not_opened() {
    let missing = processor().missing_files(&["does/not/exist.md"]).unwrap();
    assert!(missing.is_empty());
  }

  #[test]
  fn test_unreadable_file_is_fatal() {
    let dir = tempdir().unwrap();
    let present = dir.path().join("present.rs");
    fs::write(&present, "fn main() {}\n").unwrap();
    let absent = dir.path().join("absent.rs");

    let names = [&present, &absent];
    let err = processor().missing_files(&names).unwrap_err();

    match err {
      CheckError::Open { path, source } => {
        assert_eq!(path, absent);
        assert_eq!(source.kind(), io::ErrorKind::NotFound);
      }
      other => panic!("unexpected error: {other}"),
    }
  }

  #[test]
  fn test_directory_is_fatal() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("module.rs");
    fs::create_dir(&sub).unwrap();

    let result = processor().missing_files(&[&sub]);
    assert!(result.is_err());
  }
}
