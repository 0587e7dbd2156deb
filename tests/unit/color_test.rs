//! Unit tests for colors

use slidecraft::Color;

#[test]
fn parse_accepts_every_input_form() {
    assert_eq!(Color::parse("red"), Some(Color::RED));
    assert_eq!(Color::parse("#ff8000"), Some(Color::new(255, 128, 0)));
    assert_eq!(Color::parse("10, 20, 30"), Some(Color::new(10, 20, 30)));
    assert_eq!(Color::parse("RGB(1,2,3)"), Some(Color::new(1, 2, 3)));
}

#[test]
fn parse_rejects_garbage() {
    assert_eq!(Color::parse("#12345"), None);
    assert_eq!(Color::parse("300,0,0"), None);
    assert_eq!(Color::parse("chartreuse"), None);
}

#[test]
fn name_round_trips_through_lookup() {
    for name in Color::available() {
        let color = Color::lookup(&name).unwrap();
        assert_eq!(Color::from_name(&color.name()), color);
    }
}

#[test]
fn unnamed_color_prints_rgb_form() {
    let color = Color::new(1, 2, 3);
    assert_eq!(color.name(), "RGB(1,2,3)");
    assert_eq!(Color::parse(&color.name()), Some(color));
    assert_eq!(color.to_hex(), "#010203");
    assert_eq!(color.to_svg(), "rgb(1,2,3)");
}

#[test]
fn catalog_lists_twenty_colors_without_alias() {
    let names = Color::available();
    assert_eq!(names.len(), 20);
    assert!(names.contains(&"Gray".to_string()));
    assert!(!names.contains(&"Grey".to_string()));
}

#[test]
fn ansi_sequences_use_truecolor() {
    assert_eq!(Color::new(1, 2, 3).ansi_fg(), "\x1b[38;2;1;2;3m");
    assert_eq!(Color::new(1, 2, 3).ansi_bg(), "\x1b[48;2;1;2;3m");
}
