//! ANSI color helpers and CLI text formatting
//!
//! Themed text wrappers and the `[OK]`/`[ERR]`/`[WARN]`/`[INFO]` status tags
//! every command prints.

use crate::color::Color;

use super::Theme;

pub use crate::color::ANSI_RESET;

/// Leading tag of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTag {
    Ok,
    Err,
    Warn,
    Info,
}

impl StatusTag {
    pub fn label(self) -> &'static str {
        match self {
            StatusTag::Ok => "[OK]",
            StatusTag::Err => "[ERR]",
            StatusTag::Warn => "[WARN]",
            StatusTag::Info => "[INFO]",
        }
    }
}

impl Theme {
    /// Wrap `text` in a 24-bit foreground color, or return it as is when the
    /// theme is disabled.
    pub fn paint(&self, color: Color, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", color.ansi_fg(), text, ANSI_RESET)
        } else {
            text.to_string()
        }
    }

    /// Format text with the accent color (for CLI output).
    pub fn accent_text(&self, text: &str) -> String {
        self.paint(self.accent, text)
    }

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        self.paint(self.text_primary, text)
    }

    /// Format text with the secondary color (for CLI output).
    pub fn secondary_text(&self, text: &str) -> String {
        self.paint(self.text_secondary, text)
    }

    pub fn highlight_text(&self, text: &str) -> String {
        self.paint(self.highlight, text)
    }

    /// Format text with the error color (for CLI output).
    pub fn error_text(&self, text: &str) -> String {
        self.paint(self.error, text)
    }

    /// Format text with the success color (for CLI output).
    pub fn success_text(&self, text: &str) -> String {
        self.paint(self.success, text)
    }

    /// Colored status tag followed by `message`.
    pub fn status(&self, tag: StatusTag, message: &str) -> String {
        let color = match tag {
            StatusTag::Ok => self.success,
            StatusTag::Err => self.error,
            StatusTag::Warn => self.highlight,
            StatusTag::Info => self.accent,
        };
        format!("{} {}", self.paint(color, tag.label()), message)
    }

    pub fn ok(&self, message: &str) -> String {
        self.status(StatusTag::Ok, message)
    }

    pub fn err(&self, message: &str) -> String {
        self.status(StatusTag::Err, message)
    }

    pub fn warn(&self, message: &str) -> String {
        self.status(StatusTag::Warn, message)
    }

    pub fn info(&self, message: &str) -> String {
        self.status(StatusTag::Info, message)
    }
}
