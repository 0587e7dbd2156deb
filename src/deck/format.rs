//! Deck text format.
//!
//! One shape per line, comma-separated, slides separated by `---`:
//!
//! ```text
//! # title slide
//! Circle, 40, 30, 50, 50, Red
//! Rectangle, 120, 40, 80, 40, Blue, White, 2, true
//! Line, 10, 150, 300, 150, Gold, Gold, 3
//! Text, 20, 10, Hello, 16, White
//! ---
//! Star, 100, 60, 60
//! ```
//!
//! Closed shapes read `name, x, y[, width[, height[, fill[, border[,
//! border_width[, filled]]]]]]`. Lines read `Line, x1, y1, x2, y2[, color[,
//! border[, width]]]`, where the border column is ignored. Text reads `Text,
//! x, y, content[, font_size[, color]]`. Empty optional columns take their
//! defaults. Blank lines and `#` comments are skipped.

use std::fmt;
use std::io::BufRead;

use super::DeckError;
use crate::color::Color;
use crate::shape::factory::{self, ShapeParams};
use crate::shape::{Shape, ShapeKind};
use crate::slide::Slide;

/// Slide separator line.
pub const SEPARATOR: &str = "---";

/// Something the loader skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// A shape line that could not be used.
    Skipped {
        line: usize,
        text: String,
        reason: String,
    },
    /// The file held no shapes at all.
    NoSlides,
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadWarning::Skipped { line, text, reason } => {
                write!(f, "line {}: {}: {}", line, reason, text)
            }
            LoadWarning::NoSlides => write!(f, "no slides found"),
        }
    }
}

/// Parse deck text into slides. New slides start as copies of `blank`.
pub(super) fn parse_reader<R: BufRead>(
    reader: R,
    blank: &Slide,
) -> Result<(Vec<Slide>, Vec<LoadWarning>), DeckError> {
    let mut slides = Vec::new();
    let mut warnings = Vec::new();
    let mut slide = blank.clone();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|source| DeckError::Read {
            line: line_no,
            source,
        })?;
        let trimmed = line.trim();

        if trimmed == SEPARATOR {
            slides.push(std::mem::replace(&mut slide, blank.clone()));
            continue;
        }
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match parse_line(trimmed) {
            Ok(shape) => slide.add(shape),
            Err(reason) => warnings.push(LoadWarning::Skipped {
                line: line_no,
                text: trimmed.to_string(),
                reason,
            }),
        }
    }

    if !slide.is_empty() {
        slides.push(slide);
    }
    if slides.is_empty() {
        warnings.push(LoadWarning::NoSlides);
    }
    Ok((slides, warnings))
}

/// Parse one shape line. The error is a short human-readable reason.
pub fn parse_line(line: &str) -> Result<Shape, String> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < 3 {
        return Err(format!("expected at least 3 fields, found {}", fields.len()));
    }
    let name = factory::canonical_name(fields[0])
        .ok_or_else(|| format!("unknown shape '{}'", fields[0]))?;
    let optional = |i: usize| fields.get(i).copied().filter(|f| !f.is_empty());

    let mut params = ShapeParams {
        x: number(fields[1])?,
        y: number(fields[2])?,
        fill: factory::default_color(name),
        ..ShapeParams::default()
    };

    match name {
        "Line" => {
            if let Some(x2) = optional(3) {
                params.x2 = number(x2)?;
            }
            if let Some(y2) = optional(4) {
                params.y2 = number(y2)?;
            }
            if let Some(color) = optional(5) {
                params.fill = color_field(color);
            }
            if let Some(width) = optional(7) {
                params.border_width = number(width)?;
            }
        }
        "Text" => {
            params.text = fields.get(3).copied().unwrap_or_default().to_string();
            if let Some(size) = optional(4) {
                params.font_size = number(size)?;
            }
            if let Some(color) = optional(5) {
                params.fill = color_field(color);
            }
        }
        _ => {
            if let Some(width) = optional(3) {
                params.width = number(width)?;
            }
            if let Some(height) = optional(4) {
                params.height = number(height)?;
            }
            if let Some(color) = optional(5) {
                params.fill = color_field(color);
            }
            if let Some(color) = optional(6) {
                params.border = color_field(color);
            }
            if let Some(width) = optional(7) {
                params.border_width = number(width)?;
            }
            if let Some(filled) = optional(8) {
                params.filled = matches!(filled.to_lowercase().as_str(), "true" | "1" | "yes");
            }
        }
    }

    factory::create(name, &params).ok_or_else(|| format!("unknown shape '{}'", name))
}

/// Render slides in the text format, `---` between slides.
pub(super) fn write_slides(slides: &[Slide]) -> String {
    let mut out = String::new();
    for (index, slide) in slides.iter().enumerate() {
        if index > 0 {
            out.push_str(SEPARATOR);
            out.push('\n');
        }
        for shape in slide.shapes() {
            out.push_str(&write_shape(shape));
            out.push('\n');
        }
    }
    out
}

fn write_shape(shape: &Shape) -> String {
    match shape.kind() {
        ShapeKind::Line { x2, y2 } => format!(
            "Line, {}, {}, {}, {}, {}, {}, {}",
            shape.x(),
            shape.y(),
            x2,
            y2,
            color_name(shape.fill()),
            color_name(shape.border()),
            shape.border_width()
        ),
        ShapeKind::Text { content, font_size } => {
            if content.contains(',') {
                tracing::warn!("text '{}' loses its commas when saved", content);
            }
            if content.trim() != content {
                tracing::warn!("text '{}' loses its surrounding spaces when saved", content);
            }
            format!(
                "Text, {}, {}, {}, {}, {}",
                shape.x(),
                shape.y(),
                content.replace(',', " ").trim(),
                font_size,
                color_name(shape.fill())
            )
        }
        _ => format!(
            "{}, {}, {}, {}, {}, {}, {}, {}, {}",
            shape.name(),
            shape.x(),
            shape.y(),
            shape.width(),
            shape.height(),
            color_name(shape.fill()),
            color_name(shape.border()),
            shape.border_width(),
            shape.is_filled()
        ),
    }
}

fn number(field: &str) -> Result<i32, String> {
    field
        .parse()
        .map_err(|_| format!("invalid number '{}'", field))
}

/// Colors in deck files are names or `#rrggbb`; anything else is white.
fn color_field(field: &str) -> Color {
    Color::parse(field).unwrap_or_else(|| Color::from_name(field))
}

/// Catalog name when it maps back to the same color, hex otherwise.
fn color_name(color: Color) -> String {
    let name = color.name();
    if Color::lookup(&name) == Some(color) {
        name
    } else {
        color.to_hex()
    }
}
