//! Building shapes from a kind name and loose parameters.
//!
//! Used by the deck parser and the interactive `add` command. Unknown kind
//! names give `None` and never touch a slide.

use super::{Shape, DEFAULT_BORDER_WIDTH, DEFAULT_FONT_SIZE};
use crate::color::Color;

/// Kind names in catalog order.
pub const AVAILABLE: [&str; 13] = [
    "Circle",
    "Rectangle",
    "Square",
    "Triangle",
    "Diamond",
    "Star",
    "Hexagon",
    "Pentagon",
    "Oval",
    "Trapezoid",
    "Rhombus",
    "Line",
    "Text",
];

/// Kind names in catalog order.
pub fn available() -> &'static [&'static str] {
    &AVAILABLE
}

/// Loose construction parameters. Each kind reads the fields it needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeParams {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub fill: Color,
    pub border: Color,
    pub border_width: i32,
    pub filled: bool,
    /// Text content
    pub text: String,
    pub font_size: i32,
    /// Second line endpoint
    pub x2: i32,
    pub y2: i32,
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            width: 40,
            height: 30,
            fill: Color::BLUE,
            border: Color::WHITE,
            border_width: DEFAULT_BORDER_WIDTH,
            filled: true,
            text: String::new(),
            font_size: DEFAULT_FONT_SIZE,
            x2: 0,
            y2: 0,
        }
    }
}

/// Build a shape by case-insensitive kind name.
///
/// Circles use `width / 2` as radius; squares, stars, hexagons and pentagons
/// use `width` as their size. Lines run from `(x, y)` to `(x2, y2)` stroked
/// with `fill`. Text uses `text` and `font_size`.
pub fn create(name: &str, params: &ShapeParams) -> Option<Shape> {
    let p = params;
    let mut shape = match name.trim().to_lowercase().as_str() {
        "circle" => Shape::circle(p.x, p.y, p.width / 2, p.fill),
        "rectangle" => Shape::rectangle(p.x, p.y, p.width, p.height, p.fill),
        "square" => Shape::square(p.x, p.y, p.width, p.fill),
        "triangle" => Shape::triangle(p.x, p.y, p.width, p.height, p.fill),
        "diamond" => Shape::diamond(p.x, p.y, p.width, p.height, p.fill),
        "star" => Shape::star(p.x, p.y, p.width, p.fill),
        "hexagon" => Shape::hexagon(p.x, p.y, p.width, p.fill),
        "pentagon" => Shape::pentagon(p.x, p.y, p.width, p.fill),
        "oval" => Shape::oval(p.x, p.y, p.width, p.height, p.fill),
        "trapezoid" => Shape::trapezoid(p.x, p.y, p.width, p.height, p.fill),
        "rhombus" => Shape::rhombus(p.x, p.y, p.width, p.height, p.fill),
        "line" => return Some(Shape::line(p.x, p.y, p.x2, p.y2, p.fill, p.border_width)),
        "text" => return Some(Shape::text(p.x, p.y, p.text.clone(), p.fill, p.font_size)),
        _ => return None,
    };
    shape.set_border(p.border);
    shape.set_border_width(p.border_width);
    shape.set_filled(p.filled);
    Some(shape)
}

/// Build a shape at `(x, y)` with default size and the kind's default color.
pub fn create_simple(name: &str, x: i32, y: i32) -> Option<Shape> {
    let params = ShapeParams {
        x,
        y,
        fill: default_color(name),
        ..ShapeParams::default()
    };
    create(name, &params)
}

/// Whether `name` is a known kind, case-insensitively.
pub fn is_valid(name: &str) -> bool {
    canonical_name(name).is_some()
}

/// Catalog spelling of a kind name, e.g. `"STAR"` gives `"Star"`.
pub fn canonical_name(name: &str) -> Option<&'static str> {
    let name = name.trim();
    AVAILABLE
        .iter()
        .copied()
        .find(|known| known.eq_ignore_ascii_case(name))
}

/// Default fill color of a kind. Unknown kinds get white.
pub fn default_color(name: &str) -> Color {
    match name.trim().to_lowercase().as_str() {
        "circle" => Color::RED,
        "rectangle" => Color::BLUE,
        "square" => Color::GREEN,
        "triangle" => Color::YELLOW,
        "diamond" => Color::CYAN,
        "star" => Color::GOLD,
        "hexagon" => Color::PURPLE,
        "pentagon" => Color::TEAL,
        "oval" => Color::PINK,
        "trapezoid" => Color::CORAL,
        "rhombus" => Color::VIOLET,
        _ => Color::WHITE,
    }
}
