//! Unit tests for decks and the deck file format

use slidecraft::deck::{parse_line, LoadWarning};
use slidecraft::shape::factory;
use slidecraft::{Color, Deck, DeckError, Shape, ShapeKind, Slide};

use super::helpers::{fixtures_dir, temp_fixture, write_deck};

fn load(name: &str) -> (Deck, Vec<LoadWarning>) {
    Deck::load(fixtures_dir().join(name), Slide::new()).unwrap()
}

#[test]
fn sample_deck_loads_two_slides() {
    let (deck, warnings) = load("sample_deck.txt");
    assert!(warnings.is_empty());
    assert_eq!(deck.len(), 2);
    assert_eq!(deck.current_number(), 1);
    assert_eq!(deck.slide(1).unwrap().len(), 3);
    assert_eq!(deck.slide(2).unwrap().len(), 2);
    assert!(!deck.is_modified());
}

#[test]
fn malformed_lines_are_skipped_with_warnings() {
    let (deck, warnings) = load("malformed_deck.txt");
    assert_eq!(deck.len(), 1);
    assert_eq!(deck.slide(1).unwrap().len(), 2);
    assert_eq!(warnings.len(), 3);
    let lines: Vec<usize> = warnings
        .iter()
        .filter_map(|w| match w {
            LoadWarning::Skipped { line, .. } => Some(*line),
            LoadWarning::NoSlides => None,
        })
        .collect();
    assert_eq!(lines, vec![2, 3, 4]);
}

#[test]
fn missing_file_is_an_open_error() {
    let err = Deck::load("/nonexistent/deck.txt", Slide::new()).unwrap_err();
    assert!(matches!(err, DeckError::Open { .. }));
}

#[test]
fn empty_file_warns_no_slides() {
    let (deck, warnings) = Deck::parse_str("empty.txt", "# nothing\n\n", Slide::new()).unwrap();
    assert!(deck.is_empty());
    assert_eq!(warnings, vec![LoadWarning::NoSlides]);
}

#[test]
fn parse_line_reads_line_and_text_rows() {
    let line = parse_line("Line, 1, 2, 30, 40, Red, Red, 3").unwrap();
    assert_eq!(line.kind(), &ShapeKind::Line { x2: 30, y2: 40 });
    assert_eq!(line.border_width(), 3);
    assert_eq!(line.fill(), Color::RED);

    let text = parse_line("Text, 5, 6, Hello world, 20, Gold").unwrap();
    assert_eq!(
        text.kind(),
        &ShapeKind::Text {
            content: "Hello world".into(),
            font_size: 20
        }
    );
    assert_eq!(text.fill(), Color::GOLD);
}

#[test]
fn parse_line_keeps_defaults_for_empty_columns() {
    let shape = parse_line("Rectangle, 1, 2, , 50, , , , false").unwrap();
    assert_eq!((shape.width(), shape.height()), (40, 50));
    assert_eq!(shape.fill(), Color::BLUE);
    assert!(!shape.is_filled());
}

#[test]
fn parse_line_reports_reason() {
    assert!(parse_line("Blob, 1, 2").unwrap_err().contains("unknown shape"));
    assert!(parse_line("Circle, x, 2").unwrap_err().contains("invalid number"));
    assert!(parse_line("Circle, 1").unwrap_err().contains("at least 3 fields"));
}

#[test]
fn save_then_load_preserves_slides() {
    let (temp, path) = temp_fixture("sample_deck.txt");
    let (mut deck, _) = Deck::load(&path, Slide::new()).unwrap();
    let copy = temp.path().join("copy.txt");
    deck.save(Some(&copy)).unwrap();
    assert_eq!(deck.filename(), copy.as_path());

    let (reloaded, warnings) = Deck::load(&copy, Slide::new()).unwrap();
    assert!(warnings.is_empty());
    assert_eq!(reloaded.slides(), deck.slides());
}

#[test]
fn text_commas_become_spaces_on_save() {
    let mut deck = Deck::new("t.txt");
    let mut slide = Slide::new();
    slide.add(Shape::text(0, 0, "a,b", Color::WHITE, 16));
    deck.add_slide(slide);
    assert_eq!(deck.to_file_format(), "Text, 0, 0, a b, 16, White\n");
}

#[test]
fn navigation_is_clamped() {
    let (mut deck, _) = load("sample_deck.txt");
    assert!(!deck.prev());
    assert!(deck.next());
    assert!(!deck.next());
    assert_eq!(deck.current_number(), 2);
    assert!(!deck.goto(0));
    assert!(!deck.goto(3));
    assert!(deck.goto(1));
}

#[test]
fn removing_last_slide_moves_cursor_back() {
    let (mut deck, _) = load("sample_deck.txt");
    deck.goto(2);
    assert!(deck.remove_slide(2));
    assert_eq!(deck.current_number(), 1);
    assert!(deck.is_modified());
    assert!(!deck.remove_slide(5));
}

#[test]
fn new_slides_copy_the_blank_template() {
    let mut deck = Deck::with_blank("t.txt", Slide::with_size(100, 50, Color::BLACK));
    let number = deck.add_new_slide();
    assert_eq!(number, 1);
    assert_eq!(deck.slide(1).unwrap().width(), 100);
}

#[test]
fn require_slide_names_the_range() {
    let (deck, _) = load("sample_deck.txt");
    let err = deck.require_slide(7).unwrap_err();
    assert_eq!(err.to_string(), "Slide 7 does not exist (deck has 2)");
    assert!(matches!(
        Deck::new("e.txt").require_slide(1),
        Err(DeckError::NoSlides)
    ));
}

#[test]
fn export_all_writes_bmp_and_svg_per_slide() {
    let temp = tempfile::TempDir::new().unwrap();
    let deck_path = write_deck(temp.path(), "d.txt", "Circle, 1, 1\n---\nSquare, 2, 2\n");
    let (deck, _) = Deck::load(&deck_path, Slide::with_size(32, 16, Color::BLACK)).unwrap();
    let prefix = temp.path().join("out");
    let outcomes = deck.export_all(&prefix.display().to_string());
    assert_eq!(outcomes.len(), 4);
    assert!(outcomes.iter().all(|o| o.result.is_ok()));
    assert!(temp.path().join("out_1.bmp").exists());
    assert!(temp.path().join("out_2.svg").exists());
}

#[test]
fn deck_json_wraps_slides_in_slideshow() {
    let (deck, _) = load("sample_deck.txt");
    let value: serde_json::Value = serde_json::from_str(&deck.to_json().unwrap()).unwrap();
    assert_eq!(value["slideshow"]["slides"].as_array().unwrap().len(), 2);
    assert!(value["slideshow"]["filename"]
        .as_str()
        .unwrap()
        .ends_with("sample_deck.txt"));
}

#[test]
fn resized_shapes_render_the_same_after_reload() {
    let blank = Slide::with_size(96, 64, Color::BLACK);
    for name in factory::available() {
        let mut shape = factory::create_simple(name, 10, 10).unwrap();
        shape.set_size(41, 23);
        let mut slide = blank.clone();
        slide.add(shape);
        let mut deck = Deck::with_blank("r.txt", blank.clone());
        deck.add_slide(slide);

        let saved = deck.to_file_format();
        let (reloaded, warnings) = Deck::parse_str("r.txt", &saved, blank.clone()).unwrap();
        assert!(warnings.is_empty(), "{name}: {warnings:?}");

        let before = deck.slide(1).unwrap();
        let after = reloaded.slide(1).unwrap();
        assert_eq!(
            after.shapes()[0].describe(),
            before.shapes()[0].describe(),
            "{name}"
        );
        assert_eq!(
            after.render().to_bmp_bytes(),
            before.render().to_bmp_bytes(),
            "{name} renders differently after reload"
        );
    }
}

#[test]
fn text_padding_is_dropped_on_save() {
    let mut slide = Slide::with_size(32, 16, Color::BLACK);
    slide.add(Shape::text(0, 0, "  padded  ", Color::WHITE, 16));
    let mut deck = Deck::new("t.txt");
    deck.add_slide(slide);
    assert_eq!(deck.to_file_format(), "Text, 0, 0, padded, 16, White\n");
}
