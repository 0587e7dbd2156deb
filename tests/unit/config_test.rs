//! Unit tests for configuration

use slidecraft::config::{DisplayMode, MAX_CANVAS_SIDE};
use slidecraft::{Color, Config};
use tempfile::TempDir;

#[test]
fn default_config_is_valid() {
    let config = Config::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.canvas.width, 320);
    assert_eq!(config.canvas.height, 180);
    assert_eq!(config.display.mode, DisplayMode::Text);
    assert!(config.display.banner);
    assert_eq!(config.history.max_depth, 50);
    assert_eq!(config.export.prefix, "slide");
}

#[test]
fn partial_file_fills_in_defaults() {
    let config: Config = toml::from_str(
        r#"
[display]
mode = "visual"

[canvas]
width = 640
"#,
    )
    .unwrap();
    assert_eq!(config.display.mode, DisplayMode::Visual);
    assert_eq!(config.canvas.width, 640);
    assert_eq!(config.canvas.height, 180);
    assert!(config.display.banner);
}

#[test]
fn save_and_load_round_trip() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("config.toml");
    let mut config = Config::default();
    config.canvas.background = Color::from_name("navy");
    config.history.max_depth = 5;
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn invalid_values_are_rejected_on_load() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "[history]\nmax_depth = 0\n").unwrap();
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("max_depth"));

    std::fs::write(&path, "[canvas]\nwidth = 0\n").unwrap();
    assert!(Config::load_from(&path).is_err());
}

#[test]
fn oversized_canvas_is_rejected_instead_of_allocated() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "[canvas]\nwidth = 1000000\nheight = 1000000\n").unwrap();
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("at most 8192x8192"));

    let mut config = Config::default();
    config.canvas.width = MAX_CANVAS_SIDE;
    config.canvas.height = MAX_CANVAS_SIDE;
    assert!(config.validate().is_ok());
}

#[test]
fn unparsable_file_names_the_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "not [valid toml").unwrap();
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn blank_slide_follows_canvas_settings() {
    let mut config = Config::default();
    config.canvas.width = 100;
    config.canvas.height = 60;
    config.canvas.background = Color::BLACK;
    let slide = config.blank_slide();
    assert_eq!((slide.width(), slide.height()), (100, 60));
    assert_eq!(slide.background(), Color::BLACK);
}
