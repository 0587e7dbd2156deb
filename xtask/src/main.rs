//! xtask - Build tasks for slidecraft
//!
//! Run with: cargo xtask <command>
//!
//! Commands:
//! - gen-docs: Generate man pages and COMMANDS.md from the CLI definitions

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Arg, CommandFactory, Parser, Subcommand};

use slidecraft::cli::Cli;

const BIN: &str = "slidecraft";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build tasks for slidecraft")]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Subcommand)]
enum XtaskCommand {
    /// Generate documentation from CLI definitions
    #[command(name = "gen-docs")]
    GenDocs {
        /// Output directory
        #[arg(long, short, default_value = "docs")]
        output: PathBuf,

        /// Only generate man pages
        #[arg(long, conflicts_with = "markdown")]
        man: bool,

        /// Only generate COMMANDS.md
        #[arg(long)]
        markdown: bool,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().command {
        XtaskCommand::GenDocs {
            output,
            man,
            markdown,
        } => {
            if !markdown {
                generate_man_pages(&output)?;
            }
            if !man {
                generate_markdown(&output)?;
            }
        }
    }
    Ok(())
}

/// One man page for the binary and one per visible (nested) subcommand.
fn generate_man_pages(output: &Path) -> Result<()> {
    let man_dir = output.join("man");
    fs::create_dir_all(&man_dir).context("Failed to create man directory")?;

    let cmd = Cli::command();
    write_man_page(&man_dir, BIN, &cmd)?;
    for sub in visible(&cmd) {
        let page = format!("{}-{}", BIN, sub.get_name());
        write_man_page(&man_dir, &page, sub)?;
        for nested in visible(sub) {
            write_man_page(&man_dir, &format!("{}-{}", page, nested.get_name()), nested)?;
        }
    }
    println!("Man pages generated in {}", man_dir.display());
    Ok(())
}

fn write_man_page(dir: &Path, page: &str, cmd: &clap::Command) -> Result<()> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd.clone()).render(&mut buffer)?;
    let path = dir.join(format!("{}.1", page));
    fs::write(&path, buffer).with_context(|| format!("Failed to write {:?}", path))?;
    println!("Generated: {}", path.display());
    Ok(())
}

/// COMMANDS.md: table of contents, then one section per subcommand.
fn generate_markdown(output: &Path) -> Result<()> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    let cmd = Cli::command();
    let mut md = String::from("# Slidecraft Command Reference\n\n");
    md.push_str("This document is auto-generated from the CLI definitions.\n\n");
    md.push_str("## Table of Contents\n\n");
    for sub in visible(&cmd) {
        md.push_str(&format!("- [{0}](#{1}-{0})\n", sub.get_name(), BIN));
    }
    md.push_str("\n---\n\n");

    md.push_str(&format!("## {}\n\n", BIN));
    push_about(&mut md, &cmd);

    for sub in visible(&cmd) {
        let name = sub.get_name();
        md.push_str(&format!("## {} {}\n\n", BIN, name));
        if let Some(about) = sub.get_about() {
            md.push_str(&format!("{}\n\n", about));
        }
        push_arguments(&mut md, sub);
        if let Some(long_about) = sub.get_long_about() {
            md.push_str(&format!("### Description\n\n```\n{}\n```\n\n", long_about));
        }

        let nested: Vec<_> = visible(sub).collect();
        if !nested.is_empty() {
            md.push_str("### Subcommands\n\n");
            for nested_cmd in nested {
                md.push_str(&format!("#### {} {} {}\n\n", BIN, name, nested_cmd.get_name()));
                push_about(&mut md, nested_cmd);
            }
        }
        md.push_str("---\n\n");
    }
    md.push_str("\n*Generated by `cargo xtask gen-docs`*\n");

    let path = output.join("COMMANDS.md");
    fs::write(&path, md).with_context(|| format!("Failed to write {:?}", path))?;
    println!("Generated: {}", path.display());
    Ok(())
}

fn visible(cmd: &clap::Command) -> impl Iterator<Item = &clap::Command> {
    cmd.get_subcommands().filter(|sub| !sub.is_hide_set())
}

fn push_about(md: &mut String, cmd: &clap::Command) {
    if let Some(about) = cmd.get_about() {
        md.push_str(&format!("{}\n\n", about));
    }
    if let Some(long_about) = cmd.get_long_about() {
        md.push_str(&format!("```\n{}\n```\n\n", long_about));
    }
}

/// Positional arguments, then flags, skipping clap's own help/version.
fn push_arguments(md: &mut String, cmd: &clap::Command) {
    let args: Vec<&Arg> = cmd
        .get_arguments()
        .filter(|a| !matches!(a.get_id().as_str(), "help" | "version"))
        .collect();

    let positional: Vec<_> = args.iter().filter(|a| a.is_positional()).collect();
    if !positional.is_empty() {
        md.push_str("### Arguments\n\n");
        for arg in positional {
            md.push_str(&format!(
                "- `<{}>`: {}\n",
                arg.get_id().as_str().to_uppercase(),
                help_of(arg)
            ));
        }
        md.push('\n');
    }

    let options: Vec<_> = args
        .iter()
        .filter(|a| !a.is_positional())
        .filter_map(|a| flag_label(a).map(|flag| (flag, help_of(a))))
        .collect();
    if !options.is_empty() {
        md.push_str("### Options\n\n");
        for (flag, help) in options {
            md.push_str(&format!("- `{}`: {}\n", flag, help));
        }
        md.push('\n');
    }
}

fn flag_label(arg: &Arg) -> Option<String> {
    match (arg.get_short(), arg.get_long()) {
        (Some(s), Some(l)) => Some(format!("-{}, --{}", s, l)),
        (None, Some(l)) => Some(format!("--{}", l)),
        (Some(s), None) => Some(format!("-{}", s)),
        (None, None) => None,
    }
}

fn help_of(arg: &Arg) -> String {
    arg.get_help().map(|h| h.to_string()).unwrap_or_default()
}
