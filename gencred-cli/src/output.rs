//! # Output Formatting
//!
//! Coloured, emoji-prefixed lines for user-facing messages.

use owo_colors::{OwoColorize, Stream, Style};

/// Enum representing different color modes for output
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
  /// Enable colored output
  Always,
  /// Automatically detect if colors should be used based on terminal
  /// capabilities
  Auto,
  /// Disable colored output
  Never,
}

impl ColorMode {
  /// Set the global color override for this process
  pub fn apply(self) {
    match self {
      ColorMode::Always => owo_colors::set_override(true),
      ColorMode::Never => owo_colors::set_override(false),
      ColorMode::Auto => {
        // Leave owo_colors to detect the terminal itself
      }
    }
  }
}

/// Helper function to safely get an emoji or fallback to a default character
fn get_emoji_or_default(name: &str, default: &str) -> String {
  match emojis::get_by_shortcode(name) {
    Some(emoji) => emoji.to_string(),
    None => default.to_string(),
  }
}

/// Paint `symbol` with `style` when `stream` supports colors
fn paint(symbol: &str, style: Style, stream: Stream) -> String {
  symbol
    .if_supports_color(stream, |text| text.style(style))
    .to_string()
}

pub fn success_line(message: &str) -> String {
  let check = get_emoji_or_default("check_mark", "✓");
  format!("{} {}", paint(&check, Style::new().green().bold(), Stream::Stdout), message)
}

pub fn error_line(message: &str) -> String {
  let cross = get_emoji_or_default("cross_mark", "✗");
  format!("{} {}", paint(&cross, Style::new().red().bold(), Stream::Stderr), message)
}

pub fn warning_line(message: &str) -> String {
  let warning = get_emoji_or_default("warning", "⚠");
  format!("{} {}", paint(&warning, Style::new().yellow().bold(), Stream::Stderr), message)
}

pub fn info_line(message: &str) -> String {
  let info = get_emoji_or_default("information", "ℹ");
  format!("{} {}", paint(&info, Style::new().blue().bold(), Stream::Stderr), message)
}

/// Print a success message
pub fn print_success(message: &str) {
  println!("{}", success_line(message));
}

/// Print an error message
pub fn print_error(message: &str) {
  eprintln!("{}", error_line(message));
}

/// Format a field label
pub fn format_label(label: &str) -> String {
  paint(label, Style::new().bright_cyan().bold(), Stream::Stdout)
}
