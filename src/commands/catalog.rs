//! Shapes and colors catalog handlers

use anyhow::Result;

use slidecraft::session::view;
use slidecraft::theme::current_theme;

/// List shape kinds with icon and default color.
pub fn handle_shapes() -> Result<()> {
    for line in view::shape_catalog(&current_theme()) {
        println!("{}", line);
    }
    Ok(())
}

/// List named colors with a swatch.
pub fn handle_colors() -> Result<()> {
    for line in view::color_catalog(&current_theme()) {
        println!("{}", line);
    }
    Ok(())
}
