//! CLI definitions for slidecraft
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages, markdown).

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell as CompletionShell;

/// Build clap styles using our theme colors.
///
/// - Cyan: headers, usage, command names (accent color)
/// - White: descriptions, placeholders
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "slidecraft")]
#[command(about = "[ Slidecraft ] - build vector slides in the terminal, export to BMP, SVG and JSON")]
#[command(
    long_about = "Slidecraft - a terminal editor for vector-graphics slides.

Decks are plain text files with one shape per line and '---' between
slides. The editor shows slides as colored character art, keeps an undo
history per deck, and exports slides to BMP, SVG and JSON.

QUICK START:
    slidecraft open talk.txt           Edit a deck interactively
    slidecraft render talk.txt         Print the first slide as text art
    slidecraft export talk.txt s.svg   Export slide 1 as SVG
    slidecraft shapes                  List the shape kinds

DECK FORMAT:
    Circle, 40, 30, 50, 50, Red
    Text, 10, 150, Hello, 16, White
    ---
    Star, 150, 60, 60, 60, Gold"
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Increase diagnostic output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for `export`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Bmp,
    Svg,
    Json,
}

impl ExportFormat {
    /// Format implied by a file extension, if any.
    pub fn from_path(path: &std::path::Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_lowercase();
        match extension.as_str() {
            "bmp" => Some(ExportFormat::Bmp),
            "svg" => Some(ExportFormat::Svg),
            "json" => Some(ExportFormat::Json),
            _ => None,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open decks in the interactive editor
    #[command(long_about = "Load one or more decks and start the interactive editor.

Files that cannot be read are reported and skipped. When nothing loads,
an empty deck named untitled.txt is created. Type 'help' inside the
editor for the command list.

EXAMPLES:
    slidecraft open                    Start with an untitled deck
    slidecraft open talk.txt           Edit one deck
    slidecraft open a.txt b.txt        Edit two decks, switch with nf/pf")]
    Open {
        /// Deck files to load
        #[arg(help = "Deck files to load")]
        files: Vec<PathBuf>,
    },

    /// Print a slide as character art
    #[command(long_about = "Render one slide of a deck to the terminal.

Each character cell covers 2x4 pixels and is drawn in the color of its
shape. Set NO_COLOR to print the bare glyph grid.

EXAMPLES:
    slidecraft render talk.txt              First slide
    slidecraft render talk.txt --slide 3    Third slide
    slidecraft render talk.txt --list       Shape table instead of art")]
    Render {
        /// Deck file
        #[arg(help = "Deck file to render")]
        file: PathBuf,
        /// Slide number (1-based)
        #[arg(long, short, default_value_t = 1, help = "Slide number, starting at 1")]
        slide: usize,
        /// Print the numbered shape list instead of the art
        #[arg(long, help = "Print the shape list instead of the art")]
        list: bool,
    },

    /// Export slides to BMP, SVG or JSON
    #[command(long_about = "Export a slide, or a whole deck, without opening the editor.

The format comes from --format, or else from the output extension
(.bmp, .svg, .json). Without either, BMP is written.

With --all, JSON output holds the whole deck in one file; BMP and SVG
output use OUTPUT as a prefix and write OUTPUT_N.bmp and OUTPUT_N.svg
for every slide.

EXAMPLES:
    slidecraft export talk.txt intro.svg             Slide 1 as SVG
    slidecraft export talk.txt s2.bmp --slide 2      Slide 2 as BMP
    slidecraft export talk.txt deck.json --all       Whole deck as JSON
    slidecraft export talk.txt out/talk --all        Every slide as BMP and SVG")]
    Export {
        /// Deck file
        #[arg(help = "Deck file to export")]
        file: PathBuf,
        /// Output file, or prefix with --all
        #[arg(help = "Output file (prefix when --all writes BMP/SVG)")]
        output: PathBuf,
        /// Slide number (1-based)
        #[arg(long, short, default_value_t = 1, help = "Slide number, starting at 1")]
        slide: usize,
        /// Export every slide
        #[arg(long, conflicts_with = "slide", help = "Export every slide")]
        all: bool,
        /// Output format (defaults to the output extension)
        #[arg(long, short, value_enum, help = "Output format")]
        format: Option<ExportFormat>,
    },

    /// List shape kinds
    #[command(long_about = "List every shape kind with its icon and default color.

EXAMPLE:
    slidecraft shapes")]
    Shapes,

    /// List named colors
    #[command(long_about = "List every named color with a swatch.

Colors can also be written as #rrggbb, r,g,b or RGB(r,g,b).

EXAMPLE:
    slidecraft colors")]
    Colors,

    /// Configuration management
    #[command(
        subcommand,
        long_about = "View and edit the slidecraft configuration file.

Configuration is stored in ~/.config/slidecraft/config.toml and holds
the canvas size and background, display mode, undo depth and export
prefix.

EXAMPLES:
    slidecraft config show          Display current configuration
    slidecraft config edit          Open config in $EDITOR"
    )]
    Config(ConfigCommands),

    /// Generate shell completions
    #[command(long_about = "Print a shell completion script to stdout.

EXAMPLES:
    slidecraft completions bash > ~/.local/share/bash-completion/completions/slidecraft
    slidecraft completions zsh > ~/.zfunc/_slidecraft")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    #[command(long_about = "Display the current configuration in TOML format.

EXAMPLE:
    slidecraft config show")]
    Show,
    /// Open configuration file in your default editor
    #[command(long_about = "Open the configuration file in your default editor.

Uses the $EDITOR environment variable (defaults to 'vi').
Config file location: ~/.config/slidecraft/config.toml

EXAMPLE:
    slidecraft config edit
    EDITOR=nano slidecraft config edit")]
    Edit,
}
