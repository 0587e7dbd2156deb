//! Open command handler: the interactive editor

use anyhow::Result;
use std::io::{self, Write};
use std::path::PathBuf;

use slidecraft::theme::{banner, current_theme};
use slidecraft::{Config, Session};

/// Load `files` and run the editor on stdin/stdout until exit.
#[cfg(not(tarpaulin_include))]
pub fn handle(files: &[PathBuf]) -> Result<()> {
    let config = Config::load()?;
    let theme = current_theme();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = stdout.lock();

    if config.display.banner {
        write!(out, "{}", banner(&theme))?;
    }
    let mut session = Session::new(config, theme);
    session.open_files(files, &mut out)?;
    session.run(&mut input, &mut out)?;
    Ok(())
}
