//! Helpers for running the slidecraft binary

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Fake home directory with a small canvas configured, so rendered art
/// stays a few characters wide.
pub fn small_canvas_home() -> TempDir {
    let home = TempDir::new().expect("Failed to create temp home");
    let dir = home.path().join(".config").join("slidecraft");
    fs::create_dir_all(&dir).expect("Failed to create config dir");
    fs::write(
        dir.join("config.toml"),
        "[canvas]\nwidth = 16\nheight = 8\n\n[display]\nbanner = false\n",
    )
    .expect("Failed to write config");
    home
}

/// Write a deck file into `dir`
pub fn write_deck(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write deck");
    path
}

/// Run slidecraft with `home` as `$HOME` and colors off.
pub fn run_slidecraft(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_slidecraft"))
        .args(args)
        .env("HOME", home)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute slidecraft");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}
