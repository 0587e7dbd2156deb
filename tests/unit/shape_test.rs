//! Unit tests for shapes and the shape factory

use slidecraft::shape::factory;
use slidecraft::{Canvas, Color, Shape, ShapeKind};

#[test]
fn factory_knows_every_catalog_kind() {
    assert_eq!(factory::available().len(), 13);
    for name in factory::available() {
        let shape = factory::create_simple(name, 5, 5).unwrap();
        assert_eq!(shape.name(), *name);
        assert_eq!(shape.fill(), factory::default_color(name));
    }
}

#[test]
fn factory_rejects_unknown_kind() {
    assert!(factory::create_simple("blob", 0, 0).is_none());
    assert!(!factory::is_valid("blob"));
    assert_eq!(factory::canonical_name("hEXagon"), Some("Hexagon"));
}

#[test]
fn circle_box_is_twice_the_radius() {
    let circle = Shape::circle(10, 20, 15, Color::RED);
    assert_eq!((circle.width(), circle.height()), (30, 30));
}

#[test]
fn square_keeps_equal_sides_on_resize() {
    let mut square = Shape::square(0, 0, 10, Color::GREEN);
    square.set_size(30, 5);
    assert_eq!((square.width(), square.height()), (30, 30));
}

#[test]
fn moving_a_line_moves_both_endpoints() {
    let mut line = Shape::line(0, 0, 10, 5, Color::WHITE, 1);
    line.set_position(20, 20);
    assert_eq!(line.kind(), &ShapeKind::Line { x2: 30, y2: 25 });
    assert_eq!((line.width(), line.height()), (10, 5));
}

#[test]
fn lines_are_never_filled() {
    let mut line = Shape::line(0, 0, 10, 0, Color::WHITE, 1);
    line.set_filled(true);
    assert!(!line.is_filled());
}

#[test]
fn text_height_tracks_font_size() {
    let mut text = Shape::text(0, 0, "Hi", Color::WHITE, 16);
    assert_eq!(text.height(), 16);
    text.set_size(99, 24);
    assert_eq!(
        text.kind(),
        &ShapeKind::Text {
            content: "Hi".into(),
            font_size: 24
        }
    );
}

#[test]
fn describe_is_plain_summary() {
    let rect = Shape::rectangle(1, 2, 30, 40, Color::BLUE);
    assert_eq!(rect.describe(), "Rectangle at (1, 2) [30x40] Color: Blue");
}

#[test]
fn rendering_a_filled_rectangle_covers_its_box() {
    let mut canvas = Canvas::new(40, 40, Color::BLACK);
    let mut rect = Shape::rectangle(4, 4, 10, 10, Color::RED);
    rect.set_border_width(0);
    rect.render(&mut canvas);
    assert_eq!(canvas.pixel(4, 4), Some(Color::RED));
    assert_eq!(canvas.pixel(13, 13), Some(Color::RED));
    assert_eq!(canvas.pixel(14, 14), Some(Color::BLACK));
}

#[test]
fn every_kind_renders_something_on_canvas() {
    for name in factory::available() {
        let mut canvas = Canvas::new(100, 100, Color::BLACK);
        let mut params = factory::ShapeParams {
            x: 20,
            y: 20,
            x2: 60,
            y2: 60,
            text: "AB".into(),
            ..Default::default()
        };
        params.fill = Color::RED;
        factory::create(name, &params).unwrap().render(&mut canvas);
        let drawn = (0..canvas.cell_rows())
            .flat_map(|r| (0..canvas.cell_columns()).map(move |c| (c, r)))
            .any(|(c, r)| canvas.cell(c, r).unwrap().is_drawn());
        assert!(drawn, "{} drew nothing", name);
    }
}

#[test]
fn off_canvas_shape_is_harmless() {
    let mut canvas = Canvas::new(10, 10, Color::BLACK);
    Shape::star(5000, -5000, 100, Color::GOLD).render(&mut canvas);
    Shape::circle(-1000, -1000, 10, Color::RED).render(&mut canvas);
    assert_eq!(canvas.pixel(0, 0), Some(Color::BLACK));
}

#[test]
fn svg_elements_follow_kind() {
    assert!(Shape::circle(0, 0, 5, Color::RED)
        .to_svg()
        .starts_with("<circle cx=\"5\" cy=\"5\" r=\"5\""));
    assert!(Shape::line(0, 0, 3, 4, Color::RED, 2)
        .to_svg()
        .starts_with("<line x1=\"0\""));
    assert!(Shape::text(0, 0, "a<b", Color::RED, 16)
        .to_svg()
        .contains("a&lt;b"));
    assert!(Shape::hexagon(0, 0, 10, Color::RED)
        .to_svg()
        .starts_with("<polygon points="));
}
