//! Shapes that can be placed on a slide.
//!
//! Every shape shares the same attribute set (position, size, colors, border,
//! rotation, fill flag); kind-specific data lives in [`ShapeKind`]. Shapes are
//! plain values, so cloning a shape or a slide is always a deep copy.
//!
//! Rotation is stored and serialized but never applied when rasterizing.

pub mod factory;
mod markup;
mod render;

use std::fmt;

use crate::color::{Color, ANSI_RESET};

pub use markup::{escape_xml, ColorRecord, ShapeRecord};

/// Kind tag plus kind-specific data.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    /// Rectangle geometry with width and height kept equal.
    Square,
    Triangle,
    Diamond,
    Star,
    Hexagon,
    Pentagon,
    Oval,
    Trapezoid,
    Rhombus,
    /// Segment from the shape's `(x, y)` to `(x2, y2)`.
    Line { x2: i32, y2: i32 },
    /// Block-rendered text; `font_size` doubles as the shape height.
    Text { content: String, font_size: i32 },
}

impl ShapeKind {
    /// Display name, also used as the type tag in files and JSON.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Square => "Square",
            ShapeKind::Triangle => "Triangle",
            ShapeKind::Diamond => "Diamond",
            ShapeKind::Star => "Star",
            ShapeKind::Hexagon => "Hexagon",
            ShapeKind::Pentagon => "Pentagon",
            ShapeKind::Oval => "Oval",
            ShapeKind::Trapezoid => "Trapezoid",
            ShapeKind::Rhombus => "Rhombus",
            ShapeKind::Line { .. } => "Line",
            ShapeKind::Text { .. } => "Text",
        }
    }

    /// Payload-free kind for a case-insensitive name. `Line` and `Text`
    /// come back with empty payloads.
    pub fn from_name(name: &str) -> Option<Self> {
        let kind = match name.trim().to_lowercase().as_str() {
            "circle" => ShapeKind::Circle,
            "rectangle" => ShapeKind::Rectangle,
            "square" => ShapeKind::Square,
            "triangle" => ShapeKind::Triangle,
            "diamond" => ShapeKind::Diamond,
            "star" => ShapeKind::Star,
            "hexagon" => ShapeKind::Hexagon,
            "pentagon" => ShapeKind::Pentagon,
            "oval" => ShapeKind::Oval,
            "trapezoid" => ShapeKind::Trapezoid,
            "rhombus" => ShapeKind::Rhombus,
            "line" => ShapeKind::Line { x2: 0, y2: 0 },
            "text" => ShapeKind::Text {
                content: String::new(),
                font_size: DEFAULT_FONT_SIZE,
            },
            _ => return None,
        };
        Some(kind)
    }

    /// Side length for kinds whose box is always square, `None` for kinds
    /// with independent width and height.
    pub(crate) fn uniform_side(&self, width: i32) -> Option<i32> {
        match self {
            ShapeKind::Circle => Some((width / 2).saturating_mul(2)),
            ShapeKind::Square | ShapeKind::Star | ShapeKind::Hexagon | ShapeKind::Pentagon => {
                Some(width)
            }
            _ => None,
        }
    }

    /// Single-glyph icon used in listings.
    pub fn icon(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "●",
            ShapeKind::Rectangle => "▬",
            ShapeKind::Square => "■",
            ShapeKind::Triangle => "▲",
            ShapeKind::Diamond => "◆",
            ShapeKind::Star => "★",
            ShapeKind::Hexagon => "⬡",
            ShapeKind::Pentagon => "⬠",
            ShapeKind::Oval => "⬭",
            ShapeKind::Trapezoid => "⏢",
            ShapeKind::Rhombus => "◇",
            ShapeKind::Line { .. } => "─",
            ShapeKind::Text { .. } => "T",
        }
    }
}

/// A drawable shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    kind: ShapeKind,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    fill: Color,
    border: Color,
    border_width: i32,
    rotation: f64,
    filled: bool,
}

/// Border width every closed shape starts with.
pub const DEFAULT_BORDER_WIDTH: i32 = 2;

/// Horizontal advance of one text character in pixels.
pub const TEXT_ADVANCE: i32 = 8;

/// Font size used when none is given.
pub const DEFAULT_FONT_SIZE: i32 = 16;

impl Shape {
    fn closed(kind: ShapeKind, x: i32, y: i32, width: i32, height: i32, fill: Color) -> Self {
        Self {
            kind,
            x,
            y,
            width,
            height,
            fill,
            border: Color::WHITE,
            border_width: DEFAULT_BORDER_WIDTH,
            rotation: 0.0,
            filled: true,
        }
    }

    /// Circle whose bounding box starts at `(x, y)`.
    pub fn circle(x: i32, y: i32, radius: i32, fill: Color) -> Self {
        let diameter = radius.saturating_mul(2);
        Self::closed(ShapeKind::Circle, x, y, diameter, diameter, fill)
    }

    pub fn rectangle(x: i32, y: i32, width: i32, height: i32, fill: Color) -> Self {
        Self::closed(ShapeKind::Rectangle, x, y, width, height, fill)
    }

    pub fn square(x: i32, y: i32, size: i32, fill: Color) -> Self {
        Self::closed(ShapeKind::Square, x, y, size, size, fill)
    }

    /// Isosceles triangle with its apex at the top center of the box.
    pub fn triangle(x: i32, y: i32, base: i32, height: i32, fill: Color) -> Self {
        Self::closed(ShapeKind::Triangle, x, y, base, height, fill)
    }

    pub fn diamond(x: i32, y: i32, width: i32, height: i32, fill: Color) -> Self {
        Self::closed(ShapeKind::Diamond, x, y, width, height, fill)
    }

    /// Five-pointed star. Its border defaults to orange.
    pub fn star(x: i32, y: i32, size: i32, fill: Color) -> Self {
        let mut star = Self::closed(ShapeKind::Star, x, y, size, size, fill);
        star.border = Color::from_name("orange");
        star
    }

    pub fn hexagon(x: i32, y: i32, size: i32, fill: Color) -> Self {
        Self::closed(ShapeKind::Hexagon, x, y, size, size, fill)
    }

    pub fn pentagon(x: i32, y: i32, size: i32, fill: Color) -> Self {
        Self::closed(ShapeKind::Pentagon, x, y, size, size, fill)
    }

    pub fn oval(x: i32, y: i32, width: i32, height: i32, fill: Color) -> Self {
        Self::closed(ShapeKind::Oval, x, y, width, height, fill)
    }

    pub fn trapezoid(x: i32, y: i32, width: i32, height: i32, fill: Color) -> Self {
        Self::closed(ShapeKind::Trapezoid, x, y, width, height, fill)
    }

    pub fn rhombus(x: i32, y: i32, width: i32, height: i32, fill: Color) -> Self {
        Self::closed(ShapeKind::Rhombus, x, y, width, height, fill)
    }

    /// Line segment. The stroke color is used for both fill and border.
    pub fn line(x1: i32, y1: i32, x2: i32, y2: i32, color: Color, line_width: i32) -> Self {
        Self {
            kind: ShapeKind::Line { x2, y2 },
            x: x1,
            y: y1,
            width: span(x1, x2),
            height: span(y1, y2),
            fill: color,
            border: color,
            border_width: line_width,
            rotation: 0.0,
            filled: false,
        }
    }

    /// Text drawn as one block per non-space character.
    pub fn text(x: i32, y: i32, content: impl Into<String>, color: Color, font_size: i32) -> Self {
        let content = content.into();
        Self {
            width: text_width(&content),
            height: font_size,
            kind: ShapeKind::Text { content, font_size },
            x,
            y,
            fill: color,
            border: color,
            border_width: 0,
            rotation: 0.0,
            filled: true,
        }
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn icon(&self) -> &'static str {
        self.kind.icon()
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn border(&self) -> Color {
        self.border
    }

    pub fn border_width(&self) -> i32 {
        self.border_width
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn is_filled(&self) -> bool {
        self.filled
    }

    /// Move the shape. Lines carry their second endpoint along.
    pub fn set_position(&mut self, x: i32, y: i32) {
        if let ShapeKind::Line { x2, y2 } = &mut self.kind {
            *x2 = x2.saturating_add(x.saturating_sub(self.x));
            *y2 = y2.saturating_add(y.saturating_sub(self.y));
        }
        self.x = x;
        self.y = y;
    }

    /// Resize the shape.
    ///
    /// Kinds drawn from a single size (circle, square, star, hexagon,
    /// pentagon) take the width for both sides; circles round it down to an
    /// even diameter. Lines move their second
    /// endpoint to keep their direction. Text keeps its content-derived width
    /// and uses the height as the new font size.
    pub fn set_size(&mut self, width: i32, height: i32) {
        if let Some(side) = self.kind.uniform_side(width) {
            self.width = side;
            self.height = side;
            return;
        }
        match &mut self.kind {
            ShapeKind::Line { x2, y2 } => {
                let dir_x = if *x2 < self.x { -1 } else { 1 };
                let dir_y = if *y2 < self.y { -1 } else { 1 };
                *x2 = self.x.saturating_add(width.saturating_abs().saturating_mul(dir_x));
                *y2 = self.y.saturating_add(height.saturating_abs().saturating_mul(dir_y));
                self.width = span(self.x, *x2);
                self.height = span(self.y, *y2);
            }
            ShapeKind::Text { font_size, .. } => {
                *font_size = height;
                self.height = height;
            }
            _ => {
                self.width = width;
                self.height = height;
            }
        }
    }

    /// Change the fill color. Lines and text also take it as stroke color.
    pub fn set_fill(&mut self, color: Color) {
        self.fill = color;
        if matches!(self.kind, ShapeKind::Line { .. } | ShapeKind::Text { .. }) {
            self.border = color;
        }
    }

    pub fn set_border(&mut self, color: Color) {
        self.border = color;
    }

    pub fn set_border_width(&mut self, width: i32) {
        self.border_width = width;
    }

    pub fn set_rotation(&mut self, degrees: f64) {
        self.rotation = degrees;
    }

    /// Lines are never filled.
    pub fn set_filled(&mut self, filled: bool) {
        self.filled = filled && !matches!(self.kind, ShapeKind::Line { .. });
    }

    /// One-line summary: `Name at (x, y) [wxh] Color: Name`.
    pub fn describe(&self) -> String {
        format!(
            "{} at ({}, {}) [{}x{}] Color: {}",
            self.name(),
            self.x,
            self.y,
            self.width,
            self.height,
            self.fill.name()
        )
    }

    /// Summary with the icon and a color swatch in the fill color.
    pub fn describe_colored(&self) -> String {
        let fg = self.fill.ansi_fg();
        format!(
            "{fg}{icon}{ANSI_RESET} {name} at ({x}, {y}) [{w}x{h}] {fg}■{ANSI_RESET} {color}",
            icon = self.icon(),
            name = self.name(),
            x = self.x,
            y = self.y,
            w = self.width,
            h = self.height,
            color = self.fill.name(),
        )
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

fn span(a: i32, b: i32) -> i32 {
    i32::try_from((i64::from(b) - i64::from(a)).abs()).unwrap_or(i32::MAX)
}

fn text_width(content: &str) -> i32 {
    i32::try_from(content.chars().count())
        .unwrap_or(i32::MAX)
        .saturating_mul(TEXT_ADVANCE)
}
