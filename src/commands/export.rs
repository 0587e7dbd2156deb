//! Export command handler

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use slidecraft::cli::ExportFormat;
use slidecraft::theme::current_theme;
use slidecraft::{Config, Deck};

/// Export one slide, or every slide, of a deck file.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    file: &Path,
    output: &Path,
    slide: usize,
    all: bool,
    format: Option<ExportFormat>,
) -> Result<()> {
    let config = Config::load()?;
    let deck = super::load_deck(file, &config)?;
    let theme = current_theme();

    let written = export_deck(&deck, output, slide, all, format)?;
    for path in &written {
        println!("{}", theme.ok(&format!("Exported: {}", path.display())));
    }
    Ok(())
}

/// Write the requested export and return the files written.
///
/// The format is `format`, else the output extension, else BMP. With `all`,
/// JSON is a single whole-deck file; BMP and SVG treat `output` as a prefix
/// and write both formats per slide. Bulk exports stop at the first failure.
pub(crate) fn export_deck(
    deck: &Deck,
    output: &Path,
    slide: usize,
    all: bool,
    format: Option<ExportFormat>,
) -> Result<Vec<PathBuf>> {
    let format = format
        .or_else(|| ExportFormat::from_path(output))
        .unwrap_or(ExportFormat::Bmp);

    if all {
        if format == ExportFormat::Json {
            deck.export_json(output)
                .with_context(|| format!("Failed to export deck to {:?}", output))?;
            return Ok(vec![output.to_path_buf()]);
        }
        let prefix = output.with_extension("");
        let mut written = Vec::new();
        for outcome in deck.export_all(&prefix.display().to_string()) {
            outcome
                .result
                .with_context(|| format!("Failed to export {:?}", outcome.path))?;
            written.push(outcome.path);
        }
        return Ok(written);
    }

    let target = deck.require_slide(slide)?;
    let result = match format {
        ExportFormat::Bmp => target.export_bmp(output),
        ExportFormat::Svg => target.export_svg(output),
        ExportFormat::Json => target.export_json(output),
    };
    result.with_context(|| format!("Failed to export slide {} to {:?}", slide, output))?;
    tracing::info!(slide, output = %output.display(), ?format, "exported slide");
    Ok(vec![output.to_path_buf()])
}
