//! # CLI Module
//!
//! This module contains the command-line interface implementation.
//! It uses clap for argument parsing.

mod check;

pub use check::{CheckArgs, Status, check_files, check_stdin, run_check};
use clap::Parser;
use clap::builder::styling::{AnsiColor, Color, Style, Styles};

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about,
  styles = CUSTOM_STYLES,
  after_help = "Examples:
  # CI: check that every web, Python, Rust, shell and SQL file has the header
  has-license $(git ls-files)

  # Pre-commit: check staged content on stdin, reporting only by exit code
  git-format-staged --no-write --formatter 'has-license' '*.rs'

  # Print only the offending file names
  has-license --quiet src/*.rs
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  #[command(flatten)]
  pub check_args: CheckArgs,
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use clap::CommandFactory;

  use super::*;
  use crate::logging::ColorMode;

  #[test]
  fn test_cli_definition() {
    Cli::command().debug_assert();
  }

  #[test]
  fn test_no_files_selects_stdin() {
    let cli = Cli::try_parse_from(["has-license"]).unwrap();
    assert!(cli.check_args.files.is_empty());
    assert_eq!(cli.check_args.colors, ColorMode::Auto);
  }

  #[test]
  fn test_files_and_flags() {
    let cli = Cli::try_parse_from(["has-license", "-vv", "--colors=never", "a.rs", "b.md"]).unwrap();
    assert_eq!(cli.check_args.files, vec![PathBuf::from("a.rs"), PathBuf::from("b.md")]);
    assert_eq!(cli.check_args.verbose, 2);
    assert_eq!(cli.check_args.colors, ColorMode::Never);
  }

  #[test]
  fn test_option_like_file_after_separator() {
    let cli = Cli::try_parse_from(["has-license", "--", "-q.rs"]).unwrap();
    assert_eq!(cli.check_args.files, vec![PathBuf::from("-q.rs")]);
    assert!(!cli.check_args.quiet);
  }

  #[cfg(unix)]
  #[test]
  fn test_non_utf8_file_argument() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let name = OsStr::from_bytes(b"caf\xe9.rs");
    let cli = Cli::try_parse_from([OsStr::new("has-license"), name]).unwrap();
    assert_eq!(cli.check_args.files, vec![PathBuf::from(name)]);
  }

  #[test]
  fn test_quiet_conflicts_with_verbose() {
    assert!(Cli::try_parse_from(["has-license", "-q", "-v", "a.rs"]).is_err());
  }
}
