//! Render command handler

use anyhow::Result;
use std::io::{self, Write};
use std::path::Path;

use slidecraft::theme::{current_theme, Theme};
use slidecraft::{Config, Deck};

/// Print one slide of a deck as character art or as a shape list.
#[cfg(not(tarpaulin_include))]
pub fn handle(file: &Path, slide: usize, list: bool) -> Result<()> {
    let config = Config::load()?;
    let deck = super::load_deck(file, &config)?;
    let stdout = io::stdout();
    render_slide(&deck, slide, list, &current_theme(), &mut stdout.lock())
}

/// Write slide `number` of `deck` to `out`.
///
/// The art is the colored glyph grid when the theme is enabled and the bare
/// glyphs otherwise.
pub(crate) fn render_slide<W: Write>(
    deck: &Deck,
    number: usize,
    list: bool,
    theme: &Theme,
    out: &mut W,
) -> Result<()> {
    let slide = deck.require_slide(number)?;
    writeln!(
        out,
        "{}",
        theme.accent_text(&format!("Slide {}/{}", number, deck.len()))
    )?;
    if !slide.title().is_empty() {
        writeln!(out, "{}", theme.highlight_text(slide.title()))?;
    }
    if list {
        for line in slide.listing_lines(theme.enabled) {
            writeln!(out, "{}", line)?;
        }
    } else if theme.enabled {
        write!(out, "{}", slide.to_text_art())?;
    } else {
        write!(out, "{}", slide.render().to_plain_text())?;
    }
    Ok(())
}
