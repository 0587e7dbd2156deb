//! End-to-end tests of the slidecraft subcommands

use assert_cmd::Command;
use predicates::prelude::*;

use super::helpers::{small_canvas_home, write_deck};

fn slidecraft(home: &std::path::Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_slidecraft"));
    cmd.env("HOME", home).env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_lists_subcommands() {
    let home = small_canvas_home();
    slidecraft(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn render_missing_deck_fails_with_context() {
    let home = small_canvas_home();
    slidecraft(home.path())
        .args(["render", "/nonexistent/deck.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load deck"));
}

#[test]
fn render_out_of_range_slide_fails() {
    let home = small_canvas_home();
    let deck = write_deck(home.path(), "deck.txt", "Circle, 1, 1, 4, 4\n");
    slidecraft(home.path())
        .arg("render")
        .arg(&deck)
        .args(["--slide", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Slide 3 does not exist (deck has 1)"));
}

#[test]
fn export_svg_by_extension() {
    let home = small_canvas_home();
    let deck = write_deck(home.path(), "deck.txt", "Circle, 1, 1, 4, 4, Red\n");
    let output = home.path().join("slide.svg");
    slidecraft(home.path())
        .arg("export")
        .arg(&deck)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("[OK] Exported:"));
    let svg = std::fs::read_to_string(&output).unwrap();
    assert!(svg.contains("<circle"));
}

#[test]
fn export_all_json_writes_one_deck_file() {
    let home = small_canvas_home();
    let deck = write_deck(home.path(), "deck.txt", "Circle, 1, 1\n---\nStar, 2, 2\n");
    let output = home.path().join("deck.json");
    slidecraft(home.path())
        .arg("export")
        .arg(&deck)
        .arg(&output)
        .arg("--all")
        .assert()
        .success();
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(value["slideshow"]["slides"].as_array().unwrap().len(), 2);
}

#[test]
fn export_all_bmp_uses_output_as_prefix() {
    let home = small_canvas_home();
    let deck = write_deck(home.path(), "deck.txt", "Circle, 1, 1\n---\nStar, 2, 2\n");
    let prefix = home.path().join("talk");
    slidecraft(home.path())
        .arg("export")
        .arg(&deck)
        .arg(&prefix)
        .arg("--all")
        .assert()
        .success();
    for name in ["talk_1.bmp", "talk_1.svg", "talk_2.bmp", "talk_2.svg"] {
        assert!(home.path().join(name).exists(), "missing {}", name);
    }
}

#[test]
fn open_reads_commands_from_stdin() {
    let home = small_canvas_home();
    let deck = write_deck(home.path(), "deck.txt", "Circle, 1, 1\n");
    slidecraft(home.path())
        .arg("open")
        .arg(&deck)
        .write_stdin("add square 2 2 4\nsave\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[OK] Added Square at (2, 2)"))
        .stdout(predicate::str::contains("[OK] Saved to:"));
    let saved = std::fs::read_to_string(&deck).unwrap();
    assert!(saved.contains("Square, 2, 2, 4, 4, Green"));
}

#[test]
fn completions_mention_binary_name() {
    let home = small_canvas_home();
    slidecraft(home.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("slidecraft"));
}

#[test]
fn config_show_prints_configured_canvas() {
    let home = small_canvas_home();
    slidecraft(home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[canvas]"))
        .stdout(predicate::str::contains("width = 16"));
}
