//! Unit tests for slides

use slidecraft::slide::{SlideRecord, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use slidecraft::{Color, Shape, Slide};

use super::helpers::sample_slide;

#[test]
fn new_slide_uses_default_canvas() {
    let slide = Slide::new();
    assert_eq!((slide.width(), slide.height()), (DEFAULT_WIDTH, DEFAULT_HEIGHT));
    assert!(slide.is_empty());
    assert_eq!(slide.title(), "");
}

#[test]
fn remove_out_of_range_changes_nothing() {
    let mut slide = sample_slide();
    assert!(!slide.remove(3));
    assert_eq!(slide.len(), 3);
    assert!(slide.remove(0));
    assert_eq!(slide.get(0).unwrap().name(), "Circle");
}

#[test]
fn later_shapes_paint_over_earlier() {
    let mut slide = Slide::with_size(20, 20, Color::BLACK);
    let mut under = Shape::rectangle(0, 0, 10, 10, Color::RED);
    under.set_border_width(0);
    let mut over = Shape::rectangle(5, 5, 10, 10, Color::BLUE);
    over.set_border_width(0);
    slide.add(under);
    slide.add(over);
    let canvas = slide.render();
    assert_eq!(canvas.pixel(2, 2), Some(Color::RED));
    assert_eq!(canvas.pixel(7, 7), Some(Color::BLUE));
}

#[test]
fn clone_is_independent() {
    let original = sample_slide();
    let mut copy = original.clone();
    copy.get_mut(0).unwrap().set_position(50, 50);
    copy.set_title("changed");
    assert_eq!(original.get(0).unwrap().x(), 2);
    assert_eq!(original.title(), "");
}

#[test]
fn svg_document_has_background_title_and_shapes() {
    let mut slide = sample_slide();
    slide.set_title("Q&A");
    let svg = slide.to_svg();
    assert!(svg.starts_with("<?xml"));
    assert!(svg.contains("width=\"64\" height=\"32\""));
    assert!(svg.contains("fill=\"rgb(0,0,0)\""));
    assert!(svg.contains("Q&amp;A"));
    assert!(svg.contains("<rect x=\"2\""));
    assert!(svg.contains("<circle"));
    assert!(svg.contains("<line"));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn json_record_round_trips() {
    let mut slide = sample_slide();
    slide.set_title("Intro");
    slide.add(Shape::text(1, 1, "Hi", Color::WHITE, 12));
    let json = slide.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["slide"]["title"], "Intro");
    assert_eq!(value["slide"]["canvasWidth"], 64);
    assert_eq!(value["slide"]["shapes"][3]["type"], "Text");

    let record: SlideRecord = serde_json::from_value(value["slide"].clone()).unwrap();
    assert_eq!(Slide::from_record(&record), slide);
}

#[test]
fn exports_write_files() {
    let temp = tempfile::TempDir::new().unwrap();
    let slide = sample_slide();
    let bmp = temp.path().join("s.bmp");
    let svg = temp.path().join("s.svg");
    let json = temp.path().join("s.json");
    slide.export_bmp(&bmp).unwrap();
    slide.export_svg(&svg).unwrap();
    slide.export_json(&json).unwrap();
    assert_eq!(&std::fs::read(&bmp).unwrap()[..2], b"BM");
    assert!(std::fs::read_to_string(&svg).unwrap().contains("<svg"));
    assert!(std::fs::read_to_string(&json).unwrap().contains("\"slide\""));
}

#[test]
fn summary_of_empty_slide_is_placeholder() {
    assert_eq!(Slide::new().summary_lines(false), vec!["  [Empty slide]"]);
}

#[test]
fn listing_numbers_each_shape() {
    let lines = sample_slide().listing_lines(false);
    assert_eq!(lines[1], "  === Shape List ===");
    assert!(lines[2].starts_with("   1. ▬ Rectangle    at (  2,   2) [20x12]"));
    assert!(lines[3].contains("Circle"));
    assert_eq!(lines.len(), 6);
}
