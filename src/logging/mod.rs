//! # Logging Module
//!
//! This module provides logging utilities for the has-license tool, including:
//! - A global output mode (normal, quiet or verbose)
//! - Per-file verdicts printed to stderr in verbose mode
//! - Color mode selection for the report printed on stdout
//! - A `tracing` subscriber for diagnostics on stderr
//!
//! Stdout is reserved for the missing-header report so that the tool stays
//! usable in pipelines and as a formatter hook.
//!
//! ## Example
//!
//! ```rust
//! use has_license::logging::{ColorMode, set_verbose};
//! use has_license::verbose_log;
//!
//! // Enable verbose logging
//! set_verbose();
//!
//! // Never emit ANSI escapes
//! ColorMode::Never.apply();
//!
//! // Log a verbose message (goes to stderr)
//! verbose_log!("missing: {}", "src/main.rs");
//! ```

mod modes;

pub use modes::{ColorMode, init_tracing, is_quiet, is_verbose, set_quiet, set_verbose};

/// Logs a message to stderr if verbose mode is enabled.
///
/// This macro is used for detailed logging that is only shown when verbose mode
/// is enabled via [`set_verbose`]. It uses the same format string syntax as
/// the standard [`eprintln!`] macro.
#[macro_export]
macro_rules! verbose_log {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}
