//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::history::DEFAULT_MAX_DEPTH;
use crate::slide::{DEFAULT_BACKGROUND, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Largest accepted canvas width or height in pixels.
pub const MAX_CANVAS_SIDE: usize = 8192;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Reject values that would make slides or history unusable.
    pub fn validate(&self) -> Result<(), String> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(format!(
                "canvas size must be positive, got {}x{}",
                self.canvas.width, self.canvas.height
            ));
        }
        if self.canvas.width > MAX_CANVAS_SIDE || self.canvas.height > MAX_CANVAS_SIDE {
            return Err(format!(
                "canvas size must be at most {}x{}, got {}x{}",
                MAX_CANVAS_SIDE, MAX_CANVAS_SIDE, self.canvas.width, self.canvas.height
            ));
        }
        if self.history.max_depth == 0 {
            return Err("history.max_depth must be at least 1".to_string());
        }
        if self.export.prefix.trim().is_empty() {
            return Err("export.prefix must not be empty".to_string());
        }
        Ok(())
    }
}

/// Size and background of new slides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default = "default_height")]
    pub height: usize,
    #[serde(default = "default_background")]
    pub background: Color,
}

pub fn default_width() -> usize {
    DEFAULT_WIDTH
}

pub fn default_height() -> usize {
    DEFAULT_HEIGHT
}

pub fn default_background() -> Color {
    DEFAULT_BACKGROUND
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: default_background(),
        }
    }
}

/// How the current slide is shown in the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Shape summary list
    #[default]
    Text,
    /// Character-art rendering followed by the summary
    Visual,
}

/// Editor display configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub mode: DisplayMode,
    /// Print the logo when the editor starts
    #[serde(default = "default_banner")]
    pub banner: bool,
}

pub fn default_banner() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            mode: DisplayMode::default(),
            banner: default_banner(),
        }
    }
}

/// Undo history configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryConfig {
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

pub fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

/// Export configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// File prefix used by `exportall` when none is given
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

pub fn default_prefix() -> String {
    "slide".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
        }
    }
}
