//! # has-license
//!
//! Verifies that source files carry the Moonfire NVR copyright/license header
//! near the top of the file.
//!
//! A file passes when each of three expected lines (the project line, the
//! copyright line and the SPDX identifier) appears somewhere within its first
//! ten lines. Only web, Python, Rust, shell and SQL sources are checked; other
//! files are exempt.
//!
//! ## Usage as a Library
//!
//! ```rust
//! use has_license::config::HeaderConfig;
//! use has_license::license_detection::HeaderDetector;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = HeaderConfig::moonfire()?;
//!     let detector = HeaderDetector::new(&config);
//!
//!     let content = "\
//! // This file is part of Moonfire NVR, a security camera network video recorder.
//! // Copyright (C) 2024 The Moonfire NVR Authors; see AUTHORS and LICENSE.txt.
//! // SPDX-License-Identifier: GPL-v3.0-or-later WITH GPL-3.0-linking-exception.
//! ";
//!     assert!(detector.has_license(content.lines()));
//!     assert!(config.filename_matcher().requires_header("src/main.rs"));
//!     assert!(!config.filename_matcher().requires_header("README.md"));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`license_detection`] - The header detection algorithm
//! * [`processor`] - Runs detection over files and standard input
//! * [`file_io`] - Line splitting for files on disk
//! * [`config`] - Expected header lines, filename matcher and scan window
//! * [`cli`] - Command-line entry points
//!
//! [`license_detection`]: crate::license_detection
//! [`processor`]: crate::processor
//! [`file_io`]: crate::file_io
//! [`config`]: crate::config
//! [`cli`]: crate::cli

pub mod cli;
pub mod config;
pub mod file_filter;
pub mod file_io;
pub mod license_detection;
pub mod logging;
pub mod output;
pub mod processor;
