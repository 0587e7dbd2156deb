//! Config subcommands handler

use anyhow::{Context, Result};

use slidecraft::theme::current_theme;
use slidecraft::Config;

/// Show current configuration as TOML, headed by the file it lives in.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let theme = current_theme();
    let path = Config::config_path()?;
    let origin = if path.exists() {
        format!("# {}", path.display())
    } else {
        format!("# {} (not created yet, showing defaults)", path.display())
    };
    println!("{}", theme.secondary_text(&origin));
    println!("{}", theme.primary_text(&render_config(&config)?));
    Ok(())
}

/// Configuration as pretty TOML.
pub(crate) fn render_config(config: &Config) -> Result<String> {
    toml::to_string_pretty(config).context("Failed to serialize config")
}

/// Open configuration file in the default editor.
///
/// Uses $EDITOR environment variable (defaults to 'vi').
#[cfg(not(tarpaulin_include))]
pub fn handle_edit() -> Result<()> {
    let config_path = Config::config_path()?;
    let theme = current_theme();

    // Ensure config exists
    if !config_path.exists() {
        let config = Config::default();
        config.save()?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    println!(
        "{}",
        theme.primary_text(&format!(
            "Opening {} with {}",
            config_path.display(),
            editor
        ))
    );

    std::process::Command::new(&editor)
        .arg(&config_path)
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to open editor: {}", e))?;

    Ok(())
}
