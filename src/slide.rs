//! A slide: an ordered stack of shapes on a colored background.
//!
//! Shapes are drawn in insertion order, so later shapes paint over earlier
//! ones. A slide owns its shapes by value and `Clone` gives a fully
//! independent copy, which is what undo snapshots rely on.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::canvas::{Canvas, ExportError};
use crate::color::{Color, ANSI_RESET};
use crate::shape::{escape_xml, Shape, ShapeRecord};

/// Default slide background.
pub const DEFAULT_BACKGROUND: Color = Canvas::DEFAULT_BACKGROUND;

/// Default canvas width in pixels.
pub const DEFAULT_WIDTH: usize = 320;

/// Default canvas height in pixels.
pub const DEFAULT_HEIGHT: usize = 180;

const LISTING_GRAY: Color = Color::new(128, 128, 128);

#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    shapes: Vec<Shape>,
    background: Color,
    title: String,
    width: usize,
    height: usize,
}

/// Serialized slide, as found under the `"slide"` key of slide JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideRecord {
    pub title: String,
    pub canvas_width: usize,
    pub canvas_height: usize,
    pub background_color: Color,
    pub shapes: Vec<ShapeRecord>,
}

#[derive(Serialize)]
struct SlideDocument {
    slide: SlideRecord,
}

impl Default for Slide {
    fn default() -> Self {
        Self::new()
    }
}

impl Slide {
    /// Empty 320x180 slide on the default background.
    pub fn new() -> Self {
        Self::with_size(DEFAULT_WIDTH, DEFAULT_HEIGHT, DEFAULT_BACKGROUND)
    }

    pub fn with_size(width: usize, height: usize, background: Color) -> Self {
        Self {
            shapes: Vec::new(),
            background,
            title: String::new(),
            width,
            height,
        }
    }

    /// Append a shape on top of the stack.
    pub fn add(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Remove the shape at a zero-based index. Returns false when out of range.
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.shapes.len() {
            return false;
        }
        self.shapes.remove(index);
        true
    }

    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Shape> {
        self.shapes.get_mut(index)
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    /// Title, empty when the slide has none.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Rasterize every shape, in order, onto a fresh canvas.
    pub fn render(&self) -> Canvas {
        let mut canvas = Canvas::new(self.width, self.height, self.background);
        for shape in &self.shapes {
            shape.render(&mut canvas);
        }
        canvas
    }

    /// Colored character-art preview of the rendered slide.
    pub fn to_text_art(&self) -> String {
        self.render().to_text_art()
    }

    /// Standalone SVG document.
    pub fn to_svg(&self) -> String {
        let mut svg = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">\n",
            self.width, self.height
        ));
        svg.push_str(&format!(
            "  <rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
            self.background.to_svg()
        ));
        if !self.title.is_empty() {
            svg.push_str(&format!(
                "  <text x=\"10\" y=\"25\" font-size=\"18\" fill=\"white\" font-weight=\"bold\">{}</text>\n",
                escape_xml(&self.title)
            ));
        }
        for shape in &self.shapes {
            svg.push_str("  ");
            svg.push_str(&shape.to_svg());
            svg.push('\n');
        }
        svg.push_str("</svg>");
        svg
    }

    pub fn to_record(&self) -> SlideRecord {
        SlideRecord {
            title: self.title.clone(),
            canvas_width: self.width,
            canvas_height: self.height,
            background_color: self.background,
            shapes: self.shapes.iter().map(Shape::to_record).collect(),
        }
    }

    /// Rebuild a slide from its record, dropping shapes with unknown types.
    pub fn from_record(record: &SlideRecord) -> Self {
        let mut slide = Self::with_size(
            record.canvas_width,
            record.canvas_height,
            record.background_color,
        );
        slide.title = record.title.clone();
        slide.shapes = record.shapes.iter().filter_map(Shape::from_record).collect();
        slide
    }

    /// Pretty JSON document wrapped in a `"slide"` object.
    pub fn to_json(&self) -> Result<String, ExportError> {
        let document = SlideDocument {
            slide: self.to_record(),
        };
        serde_json::to_string_pretty(&document).map_err(|source| ExportError::Serialize {
            what: "slide",
            source,
        })
    }

    pub fn export_bmp<P: AsRef<Path>>(&self, path: P) -> Result<(), ExportError> {
        self.render().export_bmp(path)
    }

    pub fn export_svg<P: AsRef<Path>>(&self, path: P) -> Result<(), ExportError> {
        let path = path.as_ref();
        fs::write(path, self.to_svg()).map_err(|e| ExportError::io(path, e))?;
        tracing::debug!(path = %path.display(), "wrote svg");
        Ok(())
    }

    pub fn export_json<P: AsRef<Path>>(&self, path: P) -> Result<(), ExportError> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?).map_err(|e| ExportError::io(path, e))?;
        tracing::debug!(path = %path.display(), "wrote json");
        Ok(())
    }

    /// One line per shape, or a placeholder for an empty slide.
    pub fn summary_lines(&self, colored: bool) -> Vec<String> {
        if self.shapes.is_empty() {
            return vec![paint("  [Empty slide]", LISTING_GRAY, colored)];
        }
        self.shapes
            .iter()
            .map(|shape| {
                if colored {
                    format!("  {}", shape.describe_colored())
                } else {
                    format!("  {}", shape.describe())
                }
            })
            .collect()
    }

    /// Numbered shape table framed by a header and footer rule.
    pub fn listing_lines(&self, colored: bool) -> Vec<String> {
        if self.shapes.is_empty() {
            return vec![paint("  No shapes on this slide.", LISTING_GRAY, colored)];
        }
        let mut lines = vec![
            String::new(),
            paint("  === Shape List ===", Color::CYAN, colored),
        ];
        for (index, shape) in self.shapes.iter().enumerate() {
            let number = paint(&format!("{:>2}", index + 1), Color::YELLOW, colored);
            let icon = paint(shape.icon(), shape.fill(), colored);
            let swatch = paint(&format!("■ {}", shape.fill().name()), shape.fill(), colored);
            lines.push(format!(
                "  {}. {} {:<12} at ({:>3}, {:>3}) [{}x{}] {}",
                number,
                icon,
                shape.name(),
                shape.x(),
                shape.y(),
                shape.width(),
                shape.height(),
                swatch
            ));
        }
        lines.push(paint("  ==================", Color::CYAN, colored));
        lines
    }
}

fn paint(text: &str, color: Color, colored: bool) -> String {
    if colored {
        format!("{}{}{}", color.ansi_fg(), text, ANSI_RESET)
    } else {
        text.to_string()
    }
}
