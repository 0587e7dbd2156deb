//! Text the editor prints: slide views, prompt, help and catalogs.
//!
//! Everything here returns lines instead of writing them so the CLI
//! subcommands can reuse the catalogs outside the REPL.

use crate::color::Color;
use crate::deck::Deck;
use crate::history::History;
use crate::shape::{factory, ShapeKind};
use crate::slide::Slide;
use crate::theme::{box_bottom, box_line, box_top, Theme};

/// Boxed header plus shape summary of the current slide.
pub fn slide_text(theme: &Theme, deck: &Deck) -> Vec<String> {
    let Some(slide) = deck.current() else {
        return vec![theme.warn("No slides to display.")];
    };
    let heading = format!("Slide {}/{}", deck.current_number(), deck.len());
    let (plain, styled) = if slide.title().is_empty() {
        (format!("  {}", heading), format!("  {}", theme.primary_text(&heading)))
    } else {
        let title = format!(" - {}", slide.title());
        (
            format!("  {}{}", heading, title),
            format!(
                "  {}{}",
                theme.primary_text(&heading),
                theme.highlight_text(&title)
            ),
        )
    };
    let mut lines = vec![
        String::new(),
        box_top(theme),
        box_line(theme, &plain, &styled),
        box_bottom(theme),
        String::new(),
    ];
    lines.extend(slide.summary_lines(theme.enabled));
    lines.push(String::new());
    lines
}

/// Character-art rendering framed by a rule, followed by the summary.
pub fn slide_visual(theme: &Theme, deck: &Deck) -> Vec<String> {
    let Some(slide) = deck.current() else {
        return vec![theme.warn("No slides to display.")];
    };
    let rule = "═".repeat(14);
    let mut lines = vec![
        String::new(),
        theme.accent_text(&format!(
            "{} Slide {}/{} {}",
            rule,
            deck.current_number(),
            deck.len(),
            rule
        )),
    ];
    if !slide.title().is_empty() {
        lines.push(theme.highlight_text(&format!("  {}", slide.title())));
    }
    lines.push(String::new());
    lines.extend(art_lines(theme, slide));
    lines.push(String::new());
    lines.extend(slide.summary_lines(theme.enabled));
    lines.push(String::new());
    lines
}

fn art_lines(theme: &Theme, slide: &Slide) -> Vec<String> {
    let art = if theme.enabled {
        slide.to_text_art()
    } else {
        slide.render().to_plain_text()
    };
    art.lines().map(str::to_string).collect()
}

/// `[deck.txt, Slide 2/5] ▶ `, or a gray placeholder with nothing open.
pub fn prompt(theme: &Theme, deck: Option<&Deck>) -> String {
    let marker = theme.paint(theme.prompt, "▶");
    match deck {
        Some(deck) if !deck.is_empty() => format!(
            "{} {} ",
            theme.accent_text(&format!(
                "[{}, Slide {}/{}]",
                deck.filename().display(),
                deck.current_number(),
                deck.len()
            )),
            marker
        ),
        Some(deck) => format!(
            "{} {} ",
            theme.accent_text(&format!("[{}, no slides]", deck.filename().display())),
            marker
        ),
        None => format!(
            "{} {} ",
            theme.secondary_text("[No presentation]"),
            marker
        ),
    }
}

const HELP: &[(&str, &[(&str, &str)])] = &[
    (
        "NAVIGATION",
        &[
            ("next, n", "Next slide"),
            ("prev, p", "Previous slide"),
            ("goto <n>, g <n>", "Jump to slide n"),
            ("goto <file> <n>", "Jump to slide n of another deck"),
            ("nextfile, nf", "Next open deck"),
            ("prevfile, pf", "Previous open deck"),
            ("show, s", "Show the current slide"),
        ],
    ),
    (
        "SHAPE MANIPULATION",
        &[
            ("add, a", "Add a shape step by step"),
            ("add <kind> <x> <y> [w [h]] [c]", "Add a shape in one line"),
            ("add text <x> <y> [size] <text>", "Add a text label"),
            ("edit <n>, e <n>", "Change position, size or color"),
            ("delete <n>, del <n>", "Delete shape n"),
            ("list, ls", "List shapes on this slide"),
            ("clear", "Remove every shape from this slide"),
        ],
    ),
    (
        "SLIDE MANIPULATION",
        &[
            ("newslide, ns", "Append a blank slide"),
            ("delslide <n>, ds <n>", "Delete slide n"),
            ("title [text]", "Set or clear the slide title"),
            ("background <color>, bg", "Set the slide background"),
        ],
    ),
    (
        "VIEW MODES",
        &[
            ("visual, v", "Show slides as character art"),
            ("text, t", "Show slides as shape summaries"),
        ],
    ),
    (
        "EXPORT",
        &[
            ("export <file>", "Current slide as BMP or SVG"),
            ("exportall [prefix]", "Every slide as BMP and SVG"),
            ("exportjson <file> [all]", "Slide or whole deck as JSON"),
        ],
    ),
    (
        "FILE OPERATIONS",
        &[
            ("new [file]", "Create a deck with one blank slide"),
            ("save", "Save the current deck"),
            ("saveas <file>", "Save under a new name"),
        ],
    ),
    (
        "UNDO/REDO",
        &[
            ("undo, u, z", "Undo the last change"),
            ("redo, r, y", "Redo the last undone change"),
            ("history", "Show undo and redo depth"),
        ],
    ),
    (
        "UTILITIES",
        &[
            ("shapes", "List shape kinds"),
            ("colors", "List named colors"),
            ("help, h", "Show this help"),
            ("exit, quit, q", "Leave the editor"),
        ],
    ),
];

/// Boxed command reference, one section per command group.
pub fn help(theme: &Theme) -> Vec<String> {
    let mut lines = vec![String::new(), box_top(theme)];
    let heading = "  SLIDECRAFT COMMANDS";
    lines.push(box_line(theme, heading, &theme.highlight_text(heading)));
    for (section, commands) in HELP {
        lines.push(box_line(theme, "", ""));
        let plain = format!("  {}", section);
        lines.push(box_line(theme, &plain, &theme.accent_text(&plain)));
        for (usage, description) in *commands {
            let plain = format!("    {:<24} {}", usage, description);
            let styled = format!(
                "    {} {}",
                theme.primary_text(&format!("{:<24}", usage)),
                theme.secondary_text(description)
            );
            lines.push(box_line(theme, &plain, &styled));
        }
    }
    lines.push(box_bottom(theme));
    lines.push(String::new());
    lines
}

/// Numbered shape kinds with icon and default color swatch.
pub fn shape_catalog(theme: &Theme) -> Vec<String> {
    let mut lines = vec![theme.accent_text("═══ Available Shapes ═══")];
    for (index, name) in factory::available().iter().enumerate() {
        let icon = ShapeKind::from_name(name).map(|k| k.icon()).unwrap_or("?");
        let color = factory::default_color(name);
        lines.push(format!(
            "{}. {} {:<12} {}",
            theme.highlight_text(&format!("{:>2}", index + 1)),
            theme.paint(color, icon),
            name,
            theme.paint(color, "■")
        ));
    }
    lines
}

/// Numbered named colors with a swatch.
pub fn color_catalog(theme: &Theme) -> Vec<String> {
    let mut lines = vec![theme.accent_text("═══ Available Colors ═══")];
    for (index, name) in Color::available().iter().enumerate() {
        let color = Color::from_name(name);
        lines.push(format!(
            "{}. {} {}",
            theme.highlight_text(&format!("{:>2}", index + 1)),
            theme.paint(color, "████"),
            name
        ));
    }
    lines
}

/// Undo and redo depth with the next description of each.
pub fn history(theme: &Theme, history: &History) -> Vec<String> {
    let mut lines = vec![theme.accent_text("═══ History ═══")];
    lines.push(format!("  Undo stack: {} action(s)", history.undo_len()));
    if let Some(description) = history.undo_description() {
        lines.push(format!("    Next undo: {}", theme.highlight_text(description)));
    }
    lines.push(format!("  Redo stack: {} action(s)", history.redo_len()));
    if let Some(description) = history.redo_description() {
        lines.push(format!("    Next redo: {}", theme.highlight_text(description)));
    }
    lines
}
