//! RGB color model and the named color catalog.
//!
//! Colors are plain `Copy` values. Name lookup never fails: unknown names
//! resolve to white so callers parsing user input always get something
//! drawable.

use std::fmt;

use serde::{Deserialize, Serialize};

/// ANSI reset sequence
pub const ANSI_RESET: &str = "\x1b[0m";

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Named colors in display order. The lowercase key is used for lookup.
const CATALOG: &[(&str, Color)] = &[
    ("red", Color::new(255, 60, 60)),
    ("green", Color::new(60, 255, 60)),
    ("blue", Color::new(60, 120, 255)),
    ("yellow", Color::new(255, 255, 60)),
    ("cyan", Color::new(60, 255, 255)),
    ("magenta", Color::new(255, 60, 255)),
    ("orange", Color::new(255, 165, 0)),
    ("purple", Color::new(160, 60, 255)),
    ("pink", Color::new(255, 150, 200)),
    ("white", Color::new(255, 255, 255)),
    ("black", Color::new(0, 0, 0)),
    ("gray", Color::new(128, 128, 128)),
    ("grey", Color::new(128, 128, 128)),
    ("brown", Color::new(139, 90, 43)),
    ("gold", Color::new(255, 215, 0)),
    ("silver", Color::new(192, 192, 192)),
    ("navy", Color::new(30, 60, 150)),
    ("teal", Color::new(60, 180, 180)),
    ("lime", Color::new(180, 255, 60)),
    ("coral", Color::new(255, 127, 80)),
    ("violet", Color::new(200, 130, 255)),
];

impl Color {
    pub const RED: Color = Color::new(255, 60, 60);
    pub const GREEN: Color = Color::new(60, 255, 60);
    pub const BLUE: Color = Color::new(60, 120, 255);
    pub const YELLOW: Color = Color::new(255, 255, 60);
    pub const CYAN: Color = Color::new(60, 255, 255);
    pub const PURPLE: Color = Color::new(160, 60, 255);
    pub const PINK: Color = Color::new(255, 150, 200);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const GOLD: Color = Color::new(255, 215, 0);
    pub const TEAL: Color = Color::new(60, 180, 180);
    pub const CORAL: Color = Color::new(255, 127, 80);
    pub const VIOLET: Color = Color::new(200, 130, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Look up a catalog color by name, case-insensitively.
    ///
    /// Unknown names resolve to white.
    pub fn from_name(name: &str) -> Self {
        Self::lookup(name).unwrap_or(Self::WHITE)
    }

    /// Look up a catalog color by name, returning `None` when the name is unknown.
    pub fn lookup(name: &str) -> Option<Self> {
        let key = name.trim().to_lowercase();
        CATALOG
            .iter()
            .find(|(catalog_name, _)| *catalog_name == key)
            .map(|(_, color)| *color)
    }

    /// Parse a color from user or config input.
    ///
    /// Accepts catalog names, `RGB(r,g,b)`, `r,g,b` and `#rrggbb`.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if let Some(color) = Self::lookup(input) {
            return Some(color);
        }
        if let Some(hex) = input.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return None;
            }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            return Some(Self::new(channel(0)?, channel(2)?, channel(4)?));
        }
        let lower = input.to_lowercase();
        let triple = lower
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(&lower);
        let parts: Vec<&str> = triple.split(',').map(str::trim).collect();
        match parts.as_slice() {
            [r, g, b] => Some(Self::new(r.parse().ok()?, g.parse().ok()?, b.parse().ok()?)),
            _ => None,
        }
    }

    /// 24-bit foreground escape sequence.
    pub fn ansi_fg(&self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }

    /// 24-bit background escape sequence.
    pub fn ansi_bg(&self) -> String {
        format!("\x1b[48;2;{};{};{}m", self.r, self.g, self.b)
    }

    /// Display name of the color.
    ///
    /// Exact catalog matches give the capitalized name; when two names share a
    /// value the alphabetically first wins ("Gray" over "Grey"). Anything else
    /// renders as `RGB(r,g,b)`.
    pub fn name(&self) -> String {
        let mut matches: Vec<&str> = CATALOG
            .iter()
            .filter(|(_, color)| color == self)
            .map(|(name, _)| *name)
            .collect();
        matches.sort_unstable();
        match matches.first() {
            Some(name) => capitalize(name),
            None => format!("RGB({},{},{})", self.r, self.g, self.b),
        }
    }

    /// `#rrggbb` form, used where a color has no catalog name.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// `rgb(r,g,b)` form used in SVG attributes.
    pub fn to_svg(&self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }

    /// Display names of the catalog, aliases excluded.
    pub fn available() -> Vec<String> {
        CATALOG
            .iter()
            .filter(|(name, _)| *name != "grey")
            .map(|(name, _)| capitalize(name))
            .collect()
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
