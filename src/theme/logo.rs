//! Banner and box-drawing helpers for slidecraft
//!
//! The logo is embedded at compile time from the assets directory. Boxes are
//! built as strings so the REPL can write them to any output.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::Theme;

/// Full ASCII logo shown when the editor starts
pub const LOGO_FULL: &str = include_str!("../../assets/logo.txt");

/// Box width (inner content width, excluding borders)
pub const BOX_WIDTH: usize = 63;

/// Banner: logo plus tagline, in theme colors.
pub fn banner(theme: &Theme) -> String {
    let mut out = String::new();
    for line in LOGO_FULL.lines() {
        out.push_str(&theme.accent_text(line));
        out.push('\n');
    }
    out.push_str(&theme.highlight_text("  Terminal vector slides"));
    out.push_str("  ");
    out.push_str(&theme.secondary_text(&format!("v{}", env!("CARGO_PKG_VERSION"))));
    out.push('\n');
    out
}

/// Top border of a box.
pub fn box_top(theme: &Theme) -> String {
    theme.accent_text(&format!("╔{}╗", "═".repeat(BOX_WIDTH)))
}

/// Horizontal divider inside a box.
pub fn box_rule(theme: &Theme) -> String {
    theme.accent_text(&format!("╠{}╣", "═".repeat(BOX_WIDTH)))
}

/// Bottom border of a box.
pub fn box_bottom(theme: &Theme) -> String {
    theme.accent_text(&format!("╚{}╝", "═".repeat(BOX_WIDTH)))
}

/// A line inside the box, padded by display width so the right border
/// lines up. `styled` is what gets printed, `plain` is what gets measured.
pub fn box_line(theme: &Theme, plain: &str, styled: &str) -> String {
    let fitted = truncate_str(plain, BOX_WIDTH);
    let body = if fitted == plain { styled.to_string() } else { fitted.clone() };
    let pad = BOX_WIDTH.saturating_sub(fitted.width());
    format!(
        "{}{}{}{}",
        theme.accent_text("║"),
        body,
        " ".repeat(pad),
        theme.accent_text("║")
    )
}

/// Truncate a string to fit within max_width display columns, adding ellipsis if needed.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    let display_width = s.width();
    if display_width <= max_width {
        return s.to_string();
    }

    const ELLIPSIS: &str = "…";
    const ELLIPSIS_WIDTH: usize = 1;

    let target_width = max_width.saturating_sub(ELLIPSIS_WIDTH);
    let mut truncated = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > target_width {
            break;
        }
        truncated.push(c);
        current_width += char_width;
    }

    format!("{}{}", truncated, ELLIPSIS)
}
