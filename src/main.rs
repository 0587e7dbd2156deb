//! Slidecraft - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use slidecraft::cli::{Cli, Commands, ConfigCommands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    slidecraft::logging::init(cli.verbose);

    match cli.command {
        Commands::Open { files } => commands::open::handle(&files),
        Commands::Render { file, slide, list } => commands::render::handle(&file, slide, list),
        Commands::Export {
            file,
            output,
            slide,
            all,
            format,
        } => commands::export::handle(&file, &output, slide, all, format),
        Commands::Shapes => commands::catalog::handle_shapes(),
        Commands::Colors => commands::catalog::handle_colors(),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Edit => commands::config::handle_edit(),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
