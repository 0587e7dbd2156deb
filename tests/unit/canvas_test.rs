//! Unit tests for the canvas rasterizer

use slidecraft::canvas::{BMP_HEADER_SIZE, CELL_HEIGHT, CELL_WIDTH};
use slidecraft::{Canvas, Color};

fn count(canvas: &Canvas, color: Color) -> usize {
    let mut n = 0;
    for y in 0..canvas.height() as i32 {
        for x in 0..canvas.width() as i32 {
            if canvas.pixel(x, y) == Some(color) {
                n += 1;
            }
        }
    }
    n
}

#[test]
fn new_canvas_is_background_everywhere() {
    let canvas = Canvas::new(8, 8, Color::BLACK);
    assert_eq!(count(&canvas, Color::BLACK), 64);
    assert_eq!(canvas.cell_columns(), 8 / CELL_WIDTH);
    assert_eq!(canvas.cell_rows(), 8 / CELL_HEIGHT);
}

#[test]
fn fill_rect_covers_exact_area() {
    let mut canvas = Canvas::new(20, 20, Color::BLACK);
    canvas.fill_rect(2, 3, 5, 4, Color::RED);
    assert_eq!(count(&canvas, Color::RED), 20);
    assert_eq!(canvas.pixel(2, 3), Some(Color::RED));
    assert_eq!(canvas.pixel(6, 6), Some(Color::RED));
    assert_eq!(canvas.pixel(7, 6), Some(Color::BLACK));
}

#[test]
fn fill_rect_is_clipped_to_canvas() {
    let mut canvas = Canvas::new(10, 10, Color::BLACK);
    canvas.fill_rect(-5, -5, 8, 8, Color::GREEN);
    assert_eq!(count(&canvas, Color::GREEN), 9);
    canvas.fill_rect(i32::MAX - 1, 0, i32::MAX, 4, Color::RED);
    assert_eq!(count(&canvas, Color::RED), 0);
}

#[test]
fn writing_a_pixel_marks_its_cell() {
    let mut canvas = Canvas::new(8, 8, Color::BLACK);
    canvas.set_pixel(3, 5, Color::CYAN);
    let cell = canvas.cell(1, 1).unwrap();
    assert!(cell.is_drawn());
    assert_eq!(cell.fg, Color::CYAN);
    assert!(!canvas.cell(0, 0).unwrap().is_drawn());
}

#[test]
fn clear_restores_background_and_blank_cells() {
    let mut canvas = Canvas::new(8, 8, Color::BLACK);
    canvas.fill_rect(0, 0, 8, 8, Color::RED);
    canvas.clear();
    assert_eq!(count(&canvas, Color::BLACK), 64);
    assert!(!canvas.cell(0, 0).unwrap().is_drawn());
}

#[test]
fn diagonal_line_touches_both_endpoints() {
    let mut canvas = Canvas::new(16, 16, Color::BLACK);
    canvas.draw_line(1, 1, 14, 10, Color::WHITE, 1);
    assert_eq!(canvas.pixel(1, 1), Some(Color::WHITE));
    assert_eq!(canvas.pixel(14, 10), Some(Color::WHITE));
}

#[test]
fn filled_circle_is_symmetric() {
    let mut canvas = Canvas::new(21, 21, Color::BLACK);
    canvas.fill_circle(10, 10, 6, Color::RED);
    for (dx, dy) in [(3, 1), (5, 2), (0, 6), (4, 4)] {
        let a = canvas.pixel(10 + dx, 10 + dy);
        assert_eq!(a, canvas.pixel(10 - dx, 10 + dy));
        assert_eq!(a, canvas.pixel(10 + dx, 10 - dy));
        assert_eq!(a, canvas.pixel(10 - dx, 10 - dy));
    }
    assert_eq!(canvas.pixel(10, 10), Some(Color::RED));
    assert_eq!(canvas.pixel(0, 0), Some(Color::BLACK));
}

#[test]
fn bmp_bytes_have_header_and_padded_rows() {
    let canvas = Canvas::new(3, 2, Color::new(1, 2, 3));
    let bytes = canvas.to_bmp_bytes();
    assert_eq!(&bytes[..2], b"BM");
    // 3 pixels * 3 bytes = 9, padded to 12 per row
    assert_eq!(canvas.bmp_row_size(), 12);
    assert_eq!(bytes.len(), BMP_HEADER_SIZE as usize + 24);
    assert_eq!(bytes.len(), canvas.bmp_file_size());
    // First stored pixel is blue, green, red
    let data = BMP_HEADER_SIZE as usize;
    assert_eq!(&bytes[data..data + 3], &[3, 2, 1]);
}

#[test]
fn export_bmp_writes_file() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("out.bmp");
    let canvas = Canvas::new(4, 4, Color::WHITE);
    canvas.export_bmp(&path).unwrap();
    assert_eq!(std::fs::read(&path).unwrap().len(), canvas.bmp_file_size());
}

#[test]
fn export_bmp_to_missing_directory_fails() {
    let canvas = Canvas::new(4, 4, Color::WHITE);
    let err = canvas
        .export_bmp("/nonexistent-dir/slidecraft/out.bmp")
        .unwrap_err();
    assert!(err.to_string().contains("Failed to write"));
}

#[test]
fn plain_text_has_one_line_per_cell_row() {
    let mut canvas = Canvas::new(8, 8, Color::BLACK);
    canvas.set_pixel(0, 0, Color::RED);
    let text = canvas.to_plain_text();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].chars().count(), 4);
    assert_ne!(lines[0].chars().next(), Some(' '));
    assert_eq!(lines[1], "    ");
}
