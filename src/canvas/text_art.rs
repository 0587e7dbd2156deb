//! Terminal preview of the character grid.

use std::fmt;

use super::Canvas;
use crate::color::{Color, ANSI_RESET};

/// Color of the frame drawn around the preview.
pub const FRAME_COLOR: Color = Color::new(100, 100, 120);

/// Glyph used for drawn cells in the preview.
pub const BLOCK_GLYPH: &str = "\u{2588}";

impl Canvas {
    /// Render the character grid as ANSI-colored text framed with `+`, `-`
    /// and `|`.
    ///
    /// Drawn cells become full blocks in their cell color, blank cells a
    /// background-colored space. The output ends with a reset and newline.
    pub fn to_text_art(&self) -> String {
        let frame = FRAME_COLOR.ansi_fg();
        let background = self.background().ansi_fg();
        let border = "-".repeat(self.cell_columns());

        let mut out = String::new();
        out.push_str(&frame);
        out.push_str(&format!("+{}+\n", border));
        for row in self.cell_rows_iter().take(self.cell_rows()) {
            out.push_str(&frame);
            out.push('|');
            for cell in row {
                if cell.is_drawn() {
                    out.push_str(&cell.fg.ansi_fg());
                    out.push_str(BLOCK_GLYPH);
                } else {
                    out.push_str(&background);
                    out.push(' ');
                }
            }
            out.push_str(&frame);
            out.push_str("|\n");
        }
        out.push_str(&frame);
        out.push_str(&format!("+{}+", border));
        out.push_str(ANSI_RESET);
        out.push('\n');
        out
    }

    /// Character grid as plain text, one line per row, without escapes.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for row in self.cell_rows_iter().take(self.cell_rows()) {
            out.extend(row.iter().map(|cell| cell.glyph));
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text_art())
    }
}
