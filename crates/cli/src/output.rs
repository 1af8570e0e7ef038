//! CLI output formatting utilities.
//!
//! Provides consistent formatting for terminal output: error lines, the
//! dashed rules around report blocks, and aligned label/value pairs.

use owo_colors::{OwoColorize, Stream};

const RULE_WIDTH: usize = 43;

pub fn rule() -> String {
  "-".repeat(RULE_WIDTH)
}

/// Pads `label` so values in a block line up on the colon.
pub fn pad_label(label: &str, width: usize) -> String {
  format!("{label:<width$}")
}

/// Prints `Error: <message>` to stderr.
pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    "Error:".if_supports_color(Stream::Stderr, |s| s.red()),
    message.if_supports_color(Stream::Stderr, |s| s.red())
  );
}

pub fn print_stat(label: &str, width: usize, value: &str) {
  println!(
    "  {} : {}",
    pad_label(label, width).if_supports_color(Stream::Stdout, |s| s.dimmed()),
    value
  );
}

pub fn print_heading(title: &str) {
  println!("{}", title.if_supports_color(Stream::Stdout, |s| s.bold()));
}
