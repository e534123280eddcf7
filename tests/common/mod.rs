#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub const PROJECT_LINE: &str = "This file is part of Moonfire NVR, a security camera network video recorder.";
pub const COPYRIGHT_LINE: &str = "Copyright (C) 2021 The Moonfire NVR Authors; see AUTHORS and LICENSE.txt.";
pub const SPDX_LINE: &str = "SPDX-License-Identifier: GPL-v3.0-or-later WITH GPL-3.0-linking-exception";

pub const BANNER: &str = "The following files are missing expected copyright/license headers:";

/// The three header lines behind the given comment prefix, newline-terminated.
pub fn header(prefix: &str) -> String {
  [PROJECT_LINE, COPYRIGHT_LINE, SPDX_LINE]
    .iter()
    .map(|line| format!("{prefix}{line}\n"))
    .collect()
}

/// Writes `content` to `name` inside `dir`, returning the full path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
  let path = dir.join(name);
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent)?;
  }
  fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
  Ok(path)
}
