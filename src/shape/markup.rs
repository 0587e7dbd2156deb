//! SVG and JSON forms of a shape.

use serde::{Deserialize, Serialize};

use super::{Shape, ShapeKind};
use crate::canvas::Point;
use crate::color::Color;

/// Color as it appears in shape JSON: display name plus channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRecord {
    pub name: String,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl From<Color> for ColorRecord {
    fn from(color: Color) -> Self {
        Self {
            name: color.name(),
            r: color.r,
            g: color.g,
            b: color.b,
        }
    }
}

impl From<&ColorRecord> for Color {
    fn from(record: &ColorRecord) -> Self {
        Color::new(record.r, record.g, record.b)
    }
}

/// Serialized shape.
///
/// Lines add their second endpoint and text its content and font size; the
/// remaining kinds carry only the common attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub fill_color: ColorRecord,
    pub border_color: ColorRecord,
    pub border_width: i32,
    pub rotation: f64,
    pub filled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x2: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y2: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<i32>,
}

impl From<&Shape> for ShapeRecord {
    fn from(shape: &Shape) -> Self {
        let (x2, y2, content, font_size) = match &shape.kind {
            ShapeKind::Line { x2, y2 } => (Some(*x2), Some(*y2), None, None),
            ShapeKind::Text { content, font_size } => {
                (None, None, Some(content.clone()), Some(*font_size))
            }
            _ => (None, None, None, None),
        };
        Self {
            kind: shape.name().to_string(),
            x: shape.x,
            y: shape.y,
            width: shape.width,
            height: shape.height,
            fill_color: shape.fill.into(),
            border_color: shape.border.into(),
            border_width: shape.border_width,
            rotation: shape.rotation,
            filled: shape.filled,
            x2,
            y2,
            content,
            font_size,
        }
    }
}

impl Shape {
    /// JSON-ready record of this shape.
    pub fn to_record(&self) -> ShapeRecord {
        ShapeRecord::from(self)
    }

    /// Rebuild a shape from its record. Unknown type tags give `None`.
    pub fn from_record(record: &ShapeRecord) -> Option<Self> {
        let kind = match ShapeKind::from_name(&record.kind)? {
            ShapeKind::Line { .. } => ShapeKind::Line {
                x2: record.x2.unwrap_or(record.x.saturating_add(record.width)),
                y2: record.y2.unwrap_or(record.y.saturating_add(record.height)),
            },
            ShapeKind::Text { .. } => ShapeKind::Text {
                content: record.content.clone().unwrap_or_default(),
                font_size: record.font_size.unwrap_or(record.height),
            },
            kind => kind,
        };
        let (width, height) = match kind.uniform_side(record.width) {
            Some(side) => (side, side),
            None => (record.width, record.height),
        };
        let mut shape = Self {
            kind,
            x: record.x,
            y: record.y,
            width,
            height,
            fill: Color::from(&record.fill_color),
            border: Color::from(&record.border_color),
            border_width: record.border_width,
            rotation: record.rotation,
            filled: false,
        };
        shape.set_filled(record.filled);
        Some(shape)
    }

    /// Single SVG element for this shape.
    pub fn to_svg(&self) -> String {
        let paint = format!(
            "fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"",
            self.fill.to_svg(),
            self.border.to_svg(),
            self.border_width
        );
        let (x, y, w, h) = (
            i64::from(self.x),
            i64::from(self.y),
            i64::from(self.width),
            i64::from(self.height),
        );
        match &self.kind {
            ShapeKind::Circle => {
                let r = w / 2;
                format!(
                    "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" {}/>",
                    x + r,
                    y + r,
                    r,
                    paint
                )
            }
            ShapeKind::Rectangle | ShapeKind::Square => format!(
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" {}/>",
                x, y, w, h, paint
            ),
            ShapeKind::Oval => {
                let (rx, ry) = (w / 2, h / 2);
                format!(
                    "<ellipse cx=\"{}\" cy=\"{}\" rx=\"{}\" ry=\"{}\" {}/>",
                    x + rx,
                    y + ry,
                    rx,
                    ry,
                    paint
                )
            }
            ShapeKind::Line { x2, y2 } => format!(
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
                x,
                y,
                x2,
                y2,
                self.fill.to_svg(),
                self.border_width
            ),
            ShapeKind::Text { content, font_size } => format!(
                "<text x=\"{}\" y=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>",
                x,
                y + i64::from(*font_size),
                font_size,
                self.fill.to_svg(),
                escape_xml(content)
            ),
            _ => format!(
                "<polygon points=\"{}\" {}/>",
                svg_points(&self.polygon_points()),
                paint
            ),
        }
    }
}

fn svg_points(points: &[Point]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{},{}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Escape the five XML special characters.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
