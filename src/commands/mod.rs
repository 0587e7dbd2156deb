//! Command handlers for the slidecraft CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod catalog;
pub mod completions;
pub mod config;
pub mod export;
pub mod open;
pub mod render;

use anyhow::{Context, Result};
use std::path::Path;

use slidecraft::{Config, Deck};

/// Load a deck for a one-shot command, using the configured blank slide.
///
/// Skipped lines are logged by the loader; a deck without slides is an error
/// here because there is nothing to render or export.
pub fn load_deck(path: &Path, config: &Config) -> Result<Deck> {
    let (deck, warnings) = Deck::load(path, config.blank_slide())
        .with_context(|| format!("Failed to load deck: {:?}", path))?;
    if !warnings.is_empty() {
        tracing::warn!(
            deck = %path.display(),
            skipped = warnings.len(),
            "some lines could not be read (run with -vv for details)"
        );
    }
    if deck.is_empty() {
        anyhow::bail!("No slides found in {:?}", path);
    }
    Ok(deck)
}
