//! Theme configuration for CLI output
//!
//! Centralizes the colors used for status tags, headers, prompts and the
//! banner. Colors are 24-bit [`crate::color::Color`] values; setting
//! `NO_COLOR` turns every themed helper into plain text.

use crate::color::Color;

pub mod cli;
pub mod logo;

// Re-exports from cli.rs
pub use cli::{StatusTag, ANSI_RESET};

// Re-exports from logo.rs
pub use logo::{
    banner, box_bottom, box_line, box_rule, box_top, truncate_str, BOX_WIDTH, LOGO_FULL,
};

/// Theme configuration for the CLI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (used for most content)
    pub text_primary: Color,
    /// Secondary/dimmed text color
    pub text_secondary: Color,
    /// Frames, headers and info tags
    pub accent: Color,
    /// Numbers, file names and other highlighted values
    pub highlight: Color,
    /// Prompt marker
    pub prompt: Color,
    /// Error color
    pub error: Color,
    /// Success color
    pub success: Color,
    /// When false every helper returns its input unchanged
    pub enabled: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::slidecraft()
    }
}

impl Theme {
    /// Cyan frames, yellow highlights, green/red status.
    pub fn slidecraft() -> Self {
        Self {
            text_primary: Color::WHITE,
            text_secondary: Color::from_name("gray"),
            accent: Color::CYAN,
            highlight: Color::YELLOW,
            prompt: Color::from_name("magenta"),
            error: Color::RED,
            success: Color::GREEN,
            enabled: true,
        }
    }

    /// Same palette with escapes disabled.
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::slidecraft()
        }
    }
}

/// True when the `NO_COLOR` convention asks for uncolored output.
pub fn no_color() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}

/// Theme for this process: colored unless `NO_COLOR` is set.
pub fn current_theme() -> Theme {
    if no_color() {
        Theme::plain()
    } else {
        Theme::default()
    }
}
