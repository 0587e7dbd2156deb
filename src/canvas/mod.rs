//! Software rasterizer.
//!
//! A [`Canvas`] holds two views of the same picture:
//! - a pixel grid of `width x height` colors, the source of truth for BMP export
//! - a character grid of `width/2 x height/4` cells, one per 2x4 pixel block,
//!   used for terminal preview
//!
//! Every pixel write goes through [`Canvas::set_pixel`], which keeps both grids
//! in lockstep. Drawing primitives live in `raster`, exporters in `bmp` and
//! `text_art`.

mod bmp;
mod raster;
mod text_art;

use std::path::PathBuf;

use crate::color::Color;

pub use bmp::BMP_HEADER_SIZE;
pub use raster::{point_in_polygon, Point};
pub use text_art::FRAME_COLOR;

/// Glyph stored in a character cell once any pixel in its block is drawn.
pub const DRAWN_GLYPH: char = '#';

/// Pixel width covered by one character cell.
pub const CELL_WIDTH: usize = 2;

/// Pixel height covered by one character cell.
pub const CELL_HEIGHT: usize = 4;

/// Errors raised while writing a canvas or slide to disk.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize {what}: {source}")]
    Serialize {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ExportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// One cell of the character grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub fg: Color,
}

impl Cell {
    fn blank(background: Color) -> Self {
        Self {
            glyph: ' ',
            fg: background,
        }
    }

    /// True once any pixel in the cell's block has been written.
    pub fn is_drawn(&self) -> bool {
        self.glyph != ' '
    }
}

/// Pixel canvas with a downsampled character grid.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    background: Color,
    pixels: Vec<Color>,
    cells: Vec<Cell>,
}

impl Canvas {
    /// Background used when no color is given, shared with new slides.
    pub const DEFAULT_BACKGROUND: Color = Color::new(30, 30, 45);

    /// Create a canvas filled with `background`.
    pub fn new(width: usize, height: usize, background: Color) -> Self {
        let cols = width / CELL_WIDTH;
        let rows = height / CELL_HEIGHT;
        Self {
            width,
            height,
            background,
            pixels: vec![background; width * height],
            cells: vec![Cell::blank(background); cols * rows],
        }
    }

    /// Create a canvas with the default background.
    pub fn with_size(width: usize, height: usize) -> Self {
        Self::new(width, height, Self::DEFAULT_BACKGROUND)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Number of character-grid columns.
    pub fn cell_columns(&self) -> usize {
        self.width / CELL_WIDTH
    }

    /// Number of character-grid rows.
    pub fn cell_rows(&self) -> usize {
        self.height / CELL_HEIGHT
    }

    /// Reset both grids to the background.
    pub fn clear(&mut self) {
        self.pixels.fill(self.background);
        self.cells.fill(Cell::blank(self.background));
    }

    /// Write one pixel. Out-of-range coordinates are ignored.
    ///
    /// The covering character cell, when one exists, takes the drawn glyph and
    /// the written color. Pixels in a trailing odd column or partial row band
    /// have no cell and only touch the pixel grid.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.plot(i64::from(x), i64::from(y), color);
    }

    /// Wide-coordinate pixel write used by the primitives.
    pub(crate) fn plot(&mut self, x: i64, y: i64, color: Color) {
        let Some(index) = self.pixel_index(x, y) else {
            return;
        };
        self.pixels[index] = color;
        let (x, y) = (index % self.width, index / self.width);
        if let Some(cell) = self.cell_at_pixel_mut(x, y) {
            cell.glyph = DRAWN_GLYPH;
            cell.fg = color;
        }
    }

    /// Read one pixel, `None` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.pixel_index(i64::from(x), i64::from(y))
            .map(|index| self.pixels[index])
    }

    /// Character cell at grid position `(col, row)`.
    pub fn cell(&self, col: usize, row: usize) -> Option<&Cell> {
        if col >= self.cell_columns() || row >= self.cell_rows() {
            return None;
        }
        self.cells.get(row * self.cell_columns() + col)
    }

    /// Iterate character rows top to bottom.
    pub fn cell_rows_iter(&self) -> impl Iterator<Item = &[Cell]> {
        let cols = self.cell_columns().max(1);
        self.cells.chunks(cols)
    }

    fn pixel_index(&self, x: i64, y: i64) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    fn cell_at_pixel_mut(&mut self, x: usize, y: usize) -> Option<&mut Cell> {
        let cols = self.cell_columns();
        let (col, row) = (x / CELL_WIDTH, y / CELL_HEIGHT);
        if col >= cols || row >= self.cell_rows() {
            return None;
        }
        self.cells.get_mut(row * cols + col)
    }
}
