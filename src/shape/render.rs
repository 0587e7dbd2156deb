//! Rasterizing shapes onto a canvas.
//!
//! Shapes only talk to the canvas through its public primitives. Derived
//! geometry is computed in `i64` and saturated back to `i32`, and every
//! float-to-int conversion truncates toward zero.

use std::f64::consts::PI;

use super::{Shape, ShapeKind, TEXT_ADVANCE};
use crate::canvas::{Canvas, Point};

impl Shape {
    /// Draw the shape: fill first when `filled`, then the border when
    /// `border_width > 0`.
    pub fn render(&self, canvas: &mut Canvas) {
        let (x, y, w, h) = (self.x, self.y, self.width, self.height);
        let bw = self.border_width;
        match &self.kind {
            ShapeKind::Circle => {
                let r = w / 2;
                let (cx, cy) = (offset(x, r), offset(y, r));
                if self.filled {
                    canvas.fill_circle(cx, cy, r, self.fill);
                }
                if bw > 0 {
                    canvas.draw_circle(cx, cy, r, self.border, bw);
                }
            }
            ShapeKind::Rectangle | ShapeKind::Square => {
                if self.filled {
                    canvas.fill_rect(x, y, w, h, self.fill);
                }
                if bw > 0 {
                    canvas.draw_rect(x, y, w, h, self.border, bw);
                }
            }
            ShapeKind::Triangle => {
                let [apex, left, right] = self.triangle_points();
                if self.filled {
                    canvas.fill_triangle(apex, left, right, self.fill);
                }
                if bw > 0 {
                    canvas.draw_line(apex.0, apex.1, left.0, left.1, self.border, bw);
                    canvas.draw_line(left.0, left.1, right.0, right.1, self.border, bw);
                    canvas.draw_line(right.0, right.1, apex.0, apex.1, self.border, bw);
                }
            }
            ShapeKind::Oval => {
                let (rx, ry) = (w / 2, h / 2);
                let (cx, cy) = (offset(x, rx), offset(y, ry));
                if self.filled {
                    canvas.fill_ellipse(cx, cy, rx, ry, self.fill);
                }
                if bw > 0 {
                    canvas.draw_ellipse(cx, cy, rx, ry, self.border, bw);
                }
            }
            ShapeKind::Line { x2, y2 } => {
                canvas.draw_line(x, y, *x2, *y2, self.fill, bw);
            }
            ShapeKind::Text { content, font_size } => {
                for (i, ch) in content.chars().enumerate() {
                    if ch == ' ' {
                        continue;
                    }
                    let advance = i64::try_from(i).unwrap_or(i64::MAX) * i64::from(TEXT_ADVANCE);
                    let left = saturate(i64::from(x) + advance);
                    canvas.fill_rect(left, y, TEXT_ADVANCE - 1, *font_size, self.fill);
                }
            }
            ShapeKind::Diamond
            | ShapeKind::Rhombus
            | ShapeKind::Star
            | ShapeKind::Hexagon
            | ShapeKind::Pentagon
            | ShapeKind::Trapezoid => {
                let points = self.polygon_points();
                if self.filled {
                    canvas.fill_polygon(&points, self.fill);
                }
                if bw > 0 {
                    canvas.draw_polygon(&points, self.border, bw);
                }
            }
        }
    }

    /// Apex, bottom-left and bottom-right corners of a triangle's box.
    pub(crate) fn triangle_points(&self) -> [Point; 3] {
        let bottom = offset(self.y, self.height);
        [
            (offset(self.x, self.width / 2), self.y),
            (self.x, bottom),
            (offset(self.x, self.width), bottom),
        ]
    }

    /// Outline vertices for the polygon kinds, in drawing order.
    ///
    /// Triangles give their three corners; circles, ovals, rectangles, lines
    /// and text give an empty list.
    pub(crate) fn polygon_points(&self) -> Vec<Point> {
        let (x, y, w, h) = (self.x, self.y, self.width, self.height);
        let (cx, cy) = (offset(x, w / 2), offset(y, h / 2));
        match self.kind {
            ShapeKind::Diamond | ShapeKind::Rhombus => vec![
                (offset(x, w / 2), y),
                (offset(x, w), offset(y, h / 2)),
                (offset(x, w / 2), offset(y, h)),
                (x, offset(y, h / 2)),
            ],
            ShapeKind::Trapezoid => {
                let inset = w / 4;
                vec![
                    (offset(x, inset), y),
                    (offset(x, w.saturating_sub(inset)), y),
                    (offset(x, w), offset(y, h)),
                    (x, offset(y, h)),
                ]
            }
            ShapeKind::Star => {
                let outer = w / 2;
                let inner = outer.saturating_mul(2) / 5;
                (0..10)
                    .map(|i| {
                        let angle = PI / 2.0 + f64::from(i) * PI / 5.0;
                        let r = if i % 2 == 0 { outer } else { inner };
                        polar(cx, cy, r, angle, true)
                    })
                    .collect()
            }
            ShapeKind::Hexagon => (0..6)
                .map(|i| polar(cx, cy, w / 2, f64::from(i) * PI / 3.0, false))
                .collect(),
            ShapeKind::Pentagon => (0..5)
                .map(|i| {
                    let angle = PI / 2.0 + f64::from(i) * 2.0 * PI / 5.0;
                    polar(cx, cy, w / 2, angle, true)
                })
                .collect(),
            ShapeKind::Triangle => self.triangle_points().to_vec(),
            _ => Vec::new(),
        }
    }
}

/// Point at `radius` and `angle` from the center. With `y_up` the y axis
/// points up, so angles grow clockwise on screen.
fn polar(cx: i32, cy: i32, radius: i32, angle: f64, y_up: bool) -> Point {
    let r = f64::from(radius);
    let dx = (r * angle.cos()) as i32;
    let dy = (r * angle.sin()) as i32;
    let y = if y_up {
        saturate(i64::from(cy) - i64::from(dy))
    } else {
        offset(cy, dy)
    };
    (offset(cx, dx), y)
}

fn offset(base: i32, delta: i32) -> i32 {
    saturate(i64::from(base) + i64::from(delta))
}

fn saturate(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}
