//! Drawing primitives.
//!
//! All primitives are total: any `i32` geometry is accepted, arithmetic is
//! widened to `i64` and loops are clipped to the canvas, so off-canvas parts
//! of a shape cost nothing and never wrap around.

use std::ops::{Range, RangeInclusive};

use super::Canvas;
use crate::color::Color;

/// Integer pixel coordinate.
pub type Point = (i32, i32);

impl Canvas {
    /// Fill every pixel in `[x, x+w) x [y, y+h)`.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        let (x, y) = (i64::from(x), i64::from(y));
        self.fill_span(x, x + i64::from(w), y, y + i64::from(h), color);
    }

    /// Outline a rectangle with `thickness` pixels per edge.
    ///
    /// Horizontal edges cover rows `y..y+t` and `y+h-t..y+h` across the full
    /// width; vertical edges cover columns `x..x+t` and `x+w-t..x+w` across the
    /// full height.
    pub fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color, thickness: i32) {
        if thickness <= 0 {
            return;
        }
        let (x, y, w, h, t) = (
            i64::from(x),
            i64::from(y),
            i64::from(w),
            i64::from(h),
            i64::from(thickness),
        );
        if w > 0 {
            self.fill_span(x, x + w, y, y + t, color);
            self.fill_span(x, x + w, y + h - t, y + h, color);
        }
        self.fill_span(x, x + t, y, y + h, color);
        self.fill_span(x + w - t, x + w, y, y + h, color);
    }

    /// Filled disk: `(cx+dx, cy+dy)` for every offset with `dx² + dy² <= r²`.
    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        let (cx, cy, r) = (i64::from(cx), i64::from(cy), i64::from(radius));
        let r_sq = r * r;
        for dy in self.clip_rows(cy, -r, r) {
            for dx in self.clip_columns(cx, -r, r) {
                if dx * dx + dy * dy <= r_sq {
                    self.plot(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// Circle outline: pixels with `(r - thickness)² <= d² <= r²`.
    ///
    /// A thickness at or above the radius degenerates to a filled disk.
    pub fn draw_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color, thickness: i32) {
        let (cx, cy, r) = (i64::from(cx), i64::from(cy), i64::from(radius));
        let inner = (r - i64::from(thickness)).max(0);
        let (outer_sq, inner_sq) = (r * r, inner * inner);
        for dy in self.clip_rows(cy, -r, r) {
            for dx in self.clip_columns(cx, -r, r) {
                let dist_sq = dx * dx + dy * dy;
                if dist_sq <= outer_sq && dist_sq >= inner_sq {
                    self.plot(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// Filled axis-aligned ellipse: `dx²/rx² + dy²/ry² <= 1`.
    ///
    /// A zero radius makes the test undefined, so nothing is drawn.
    pub fn fill_ellipse(&mut self, cx: i32, cy: i32, rx: i32, ry: i32, color: Color) {
        let (cx, cy, rx, ry) = (i64::from(cx), i64::from(cy), i64::from(rx), i64::from(ry));
        for dy in self.clip_rows(cy, -ry, ry) {
            for dx in self.clip_columns(cx, -rx, rx) {
                if ellipse_term(dx, dy, rx, ry) <= 1.0 {
                    self.plot(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// Ellipse ring: inside the `(rx, ry)` ellipse and strictly outside the
    /// `(rx - thickness, ry - thickness)` one.
    pub fn draw_ellipse(
        &mut self,
        cx: i32,
        cy: i32,
        rx: i32,
        ry: i32,
        color: Color,
        thickness: i32,
    ) {
        let (cx, cy, rx, ry) = (i64::from(cx), i64::from(cy), i64::from(rx), i64::from(ry));
        let t = i64::from(thickness);
        for dy in self.clip_rows(cy, -ry, ry) {
            for dx in self.clip_columns(cx, -rx, rx) {
                let outer = ellipse_term(dx, dy, rx, ry);
                let inner = ellipse_term(dx, dy, rx - t, ry - t);
                if outer <= 1.0 && inner > 1.0 {
                    self.plot(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// Bresenham line from `(x1, y1)` to `(x2, y2)`.
    ///
    /// Each visited point is stamped with a square block spanning
    /// `-thickness/2..=thickness/2` on both axes, so thickness 0 and 1 give a
    /// single pixel and the line widens uniformly regardless of direction.
    /// Only the steps whose block can reach the canvas are walked.
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color, thickness: i32) {
        let steps = LineSteps::new(widen((x1, y1)), widen((x2, y2)));
        let half = i64::from(thickness / 2);

        let all = 0..steps.last_step() + 1;
        let visible = steps.clip(all, Axis::X, -half, self.width_i64() - 1 + half);
        let visible = steps.clip(visible, Axis::Y, -half, self.height_i64() - 1 + half);

        for k in visible {
            let (x, y) = steps.point(k);
            self.fill_span(x - half, x + half + 1, y - half, y + half + 1, color);
        }
    }

    /// Scan-line triangle fill.
    ///
    /// Vertices are sorted by y and the triangle is split at the middle
    /// vertex; each row fills between the two active edges inclusively, with
    /// edge x positions interpolated in integer arithmetic.
    pub fn fill_triangle(&mut self, p1: Point, p2: Point, p3: Point, color: Color) {
        let mut v = [widen(p1), widen(p2), widen(p3)];
        v.sort_by_key(|&(_, y)| y);
        let [(x1, y1), (x2, y2), (x3, y3)] = v;

        for y in clip(y1, y3, 0, self.height_i64()) {
            let (mut xa, mut xb) = if y < y2 {
                (interpolate(y, y1, y2, x1, x2), interpolate(y, y1, y3, x1, x3))
            } else {
                (interpolate(y, y2, y3, x2, x3), interpolate(y, y1, y3, x1, x3))
            };
            if xa > xb {
                std::mem::swap(&mut xa, &mut xb);
            }
            self.fill_span(xa, xb + 1, y, y + 1, color);
        }
    }

    /// Fill the polygon's interior by testing every pixel in its bounding box.
    pub fn fill_polygon(&mut self, points: &[Point], color: Color) {
        let Some(&(first_x, first_y)) = points.first() else {
            return;
        };
        let (mut min_x, mut max_x, mut min_y, mut max_y) = (first_x, first_x, first_y, first_y);
        for &(px, py) in points {
            min_x = min_x.min(px);
            max_x = max_x.max(px);
            min_y = min_y.min(py);
            max_y = max_y.max(py);
        }

        let wide: Vec<(i64, i64)> = points.iter().copied().map(widen).collect();
        let rows = clip(i64::from(min_y), i64::from(max_y), 0, self.height_i64());
        let cols = clip(i64::from(min_x), i64::from(max_x), 0, self.width_i64());
        for y in rows {
            for x in cols.clone() {
                if point_in_polygon(x, y, &wide) {
                    self.plot(x, y, color);
                }
            }
        }
    }

    /// Stroke each edge of a closed polygon with [`Canvas::draw_line`].
    pub fn draw_polygon(&mut self, points: &[Point], color: Color, thickness: i32) {
        let n = points.len();
        for i in 0..n {
            let (x1, y1) = points[i];
            let (x2, y2) = points[(i + 1) % n];
            self.draw_line(x1, y1, x2, y2, color, thickness);
        }
    }

    /// Fill `[x0, x1) x [y0, y1)` clipped to the canvas.
    fn fill_span(&mut self, x0: i64, x1: i64, y0: i64, y1: i64, color: Color) {
        let (w, h) = (self.width_i64(), self.height_i64());
        for y in y0.max(0)..y1.min(h) {
            for x in x0.max(0)..x1.min(w) {
                self.plot(x, y, color);
            }
        }
    }

    /// Offsets in `lo..=hi` whose row `origin + offset` is on the canvas.
    fn clip_rows(&self, origin: i64, lo: i64, hi: i64) -> RangeInclusive<i64> {
        clip(lo, hi, -origin, self.height_i64() - origin)
    }

    /// Offsets in `lo..=hi` whose column `origin + offset` is on the canvas.
    fn clip_columns(&self, origin: i64, lo: i64, hi: i64) -> RangeInclusive<i64> {
        clip(lo, hi, -origin, self.width_i64() - origin)
    }

    fn width_i64(&self) -> i64 {
        i64::try_from(self.width()).unwrap_or(i64::MAX)
    }

    fn height_i64(&self) -> i64 {
        i64::try_from(self.height()).unwrap_or(i64::MAX)
    }
}

/// Ray-casting point-in-polygon test.
///
/// A horizontal ray from `(px, py)` toggles `inside` for every edge that
/// straddles `py` (`(yi > py) != (yj > py)`) and crosses to the right of `px`.
/// The crossing x is computed with truncating integer division.
pub fn point_in_polygon(px: i64, py: i64, points: &[(i64, i64)]) -> bool {
    let n = points.len();
    if n == 0 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = points[i];
        let (xj, yj) = points[j];
        if (yi > py) != (yj > py) {
            let crossing = i128::from(xj - xi) * i128::from(py - yi) / i128::from(yj - yi)
                + i128::from(xi);
            if i128::from(px) < crossing {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

#[derive(Clone, Copy)]
enum Axis {
    X,
    Y,
}

/// The points an error-accumulating Bresenham walk visits, addressable by
/// step index.
///
/// The walk advances the major axis every step and visits
/// `max(|dx|, |dy|) + 1` points. After `k` steps the minor axis has moved
/// `(2*k*minor + major - 1) / (2*major)` times, which is exactly where the
/// accumulator `err = dx - dy` with its `2*err > -dy` / `2*err < dx` tests
/// puts it.
struct LineSteps {
    start: (i64, i64),
    sign: (i64, i64),
    major: i64,
    minor: i64,
    x_major: bool,
}

impl LineSteps {
    fn new((x1, y1): (i64, i64), (x2, y2): (i64, i64)) -> Self {
        let (dx, dy) = ((x2 - x1).abs(), (y2 - y1).abs());
        let sign = (
            if x1 < x2 { 1 } else { -1 },
            if y1 < y2 { 1 } else { -1 },
        );
        Self {
            start: (x1, y1),
            sign,
            major: dx.max(dy),
            minor: dx.min(dy),
            x_major: dx >= dy,
        }
    }

    /// Index of the last point.
    fn last_step(&self) -> i64 {
        self.major
    }

    fn point(&self, k: i64) -> (i64, i64) {
        let moved = if self.major == 0 {
            0
        } else {
            let major = i128::from(self.major);
            let n = (2 * i128::from(k) * i128::from(self.minor) + major - 1) / (2 * major);
            i64::try_from(n).unwrap_or(self.minor)
        };
        let (dx, dy) = if self.x_major { (k, moved) } else { (moved, k) };
        (
            self.start.0 + self.sign.0 * dx,
            self.start.1 + self.sign.1 * dy,
        )
    }

    /// Steps in `range` whose coordinate on `axis` lies in `lo..=hi`.
    ///
    /// Both coordinates are monotone in the step index, so the matching steps
    /// form one run found by two binary searches.
    fn clip(&self, range: Range<i64>, axis: Axis, lo: i64, hi: i64) -> Range<i64> {
        let sign = match axis {
            Axis::X => self.sign.0,
            Axis::Y => self.sign.1,
        };
        // Flip to a non-decreasing key.
        let (key_lo, key_hi) = if sign > 0 { (lo, hi) } else { (-hi, -lo) };
        let key = |k: i64| {
            let (x, y) = self.point(k);
            sign * match axis {
                Axis::X => x,
                Axis::Y => y,
            }
        };
        let first = partition_point(range.clone(), |k| key(k) >= key_lo);
        let last = partition_point(range, |k| key(k) > key_hi);
        first..last.max(first)
    }
}

/// First index in `range` where the monotone `pred` turns true, or
/// `range.end` when it never does.
fn partition_point(range: Range<i64>, pred: impl Fn(i64) -> bool) -> i64 {
    let (mut lo, mut hi) = (range.start, range.end);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if pred(mid) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}

/// `lo..=hi` intersected with `[min, max_exclusive)`.
fn clip(lo: i64, hi: i64, min: i64, max_exclusive: i64) -> RangeInclusive<i64> {
    lo.max(min)..=hi.min(max_exclusive - 1)
}

fn widen((x, y): Point) -> (i64, i64) {
    (i64::from(x), i64::from(y))
}

fn interpolate(y: i64, y1: i64, y2: i64, x1: i64, x2: i64) -> i64 {
    if y2 == y1 {
        return x1;
    }
    let offset = i128::from(x2 - x1) * i128::from(y - y1) / i128::from(y2 - y1);
    x1 + i64::try_from(offset).unwrap_or(0)
}

fn ellipse_term(dx: i64, dy: i64, rx: i64, ry: i64) -> f64 {
    (dx * dx) as f64 / (rx * rx) as f64 + (dy * dy) as f64 / (ry * ry) as f64
}
