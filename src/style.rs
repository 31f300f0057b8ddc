//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides convenience methods for applying ANSI
//! styling via the `colored` crate. Implementations for `&str` and `String`
//! are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn room_style(&self) -> ColoredString;
    fn description_style(&self) -> ColoredString;
    fn item_style(&self) -> ColoredString;
    fn exit_style(&self) -> ColoredString;
    fn locked_style(&self) -> ColoredString;
    fn success_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
    fn banner_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn room_style(&self) -> ColoredString {
        self.truecolor(223, 77, 10).underline()
    }
    fn description_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn item_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn exit_style(&self) -> ColoredString {
        self.italic().truecolor(110, 220, 110)
    }
    fn locked_style(&self) -> ColoredString {
        self.italic().truecolor(200, 50, 50)
    }
    fn success_style(&self) -> ColoredString {
        self.truecolor(110, 220, 110)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
    fn prompt_style(&self) -> ColoredString {
        self.bold()
    }
    fn banner_style(&self) -> ColoredString {
        self.bright_yellow().underline()
    }
}

impl GameStyle for String {
    fn room_style(&self) -> ColoredString {
        self.as_str().room_style()
    }
    fn description_style(&self) -> ColoredString {
        self.as_str().description_style()
    }
    fn item_style(&self) -> ColoredString {
        self.as_str().item_style()
    }
    fn exit_style(&self) -> ColoredString {
        self.as_str().exit_style()
    }
    fn locked_style(&self) -> ColoredString {
        self.as_str().locked_style()
    }
    fn success_style(&self) -> ColoredString {
        self.as_str().success_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
    fn banner_style(&self) -> ColoredString {
        self.as_str().banner_style()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_emit_ansi_when_forced() {
        colored::control::set_override(true);
        assert!("sala".room_style().to_string().contains('\u{1b}'));
        assert!("chave".item_style().to_string().contains('\u{1b}'));
        colored::control::unset_override();
    }
}
