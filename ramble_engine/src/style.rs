//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides a set of convenience methods for applying
//! ANSI styling via the `colored` crate. Implementations for `&str` and
//! `String` are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn title_style(&self) -> ColoredString;
    fn description_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn title_style(&self) -> ColoredString {
        self.truecolor(223, 77, 10).bold().underline()
    }
    fn description_style(&self) -> ColoredString {
        self.truecolor(102, 208, 250)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
    fn prompt_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40).bold()
    }
}

impl GameStyle for String {
    fn title_style(&self) -> ColoredString {
        self.as_str().title_style()
    }
    fn description_style(&self) -> ColoredString {
        self.as_str().description_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_emit_ansi_codes() {
        colored::control::set_override(true);
        assert!("oops".error_style().to_string().contains('\u{1b}'));
        assert!(String::from("> ").prompt_style().to_string().contains('\u{1b}'));
    }
}
