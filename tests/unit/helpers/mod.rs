//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use slidecraft::{Color, Config, Session, Shape, Slide};

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Load a fixture file's contents
pub fn load_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// Create a temporary directory with a copy of a fixture
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let fixture_content = load_fixture(name);
    let temp_path = temp_dir.path().join(name);
    fs::write(&temp_path, fixture_content).expect("Failed to write temp fixture");
    (temp_dir, temp_path)
}

/// Write a deck file into `dir`
pub fn write_deck(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write deck");
    path
}

/// Small slide with one shape of each broad family
pub fn sample_slide() -> Slide {
    let mut slide = Slide::with_size(64, 32, Color::BLACK);
    slide.add(Shape::rectangle(2, 2, 20, 12, Color::BLUE));
    slide.add(Shape::circle(30, 4, 8, Color::RED));
    slide.add(Shape::line(0, 31, 63, 31, Color::WHITE, 1));
    slide
}

/// Run `script` through a fresh session with the plain theme, after loading
/// `files`. Returns everything the session printed.
pub fn run_session(files: &[PathBuf], script: &str) -> String {
    let mut session = Session::new(Config::default(), slidecraft::theme::Theme::plain());
    let mut input = script.as_bytes();
    let mut out = Vec::new();
    session.open_files(files, &mut out).expect("open_files failed");
    session.run(&mut input, &mut out).expect("run failed");
    String::from_utf8(out).expect("output is not UTF-8")
}
