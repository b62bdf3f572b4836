// src/canvas/raster.rs

//! Line and triangle outlines.

use log::trace;

use super::Canvas;

/// A point in sub-pixel space. Fractional coordinates are rounded to the
/// nearest dot when plotted.
pub type Point = (f32, f32);

impl Canvas {
    /// Draws a straight line from (`x1`, `y1`) to (`x2`, `y2`), both ends
    /// included.
    ///
    /// This is a parametric DDA: the longer axis decides the step count and
    /// each step advances one dot along it while the other axis is
    /// interpolated and rounded. A zero-length line plots a single dot.
    ///
    /// Coordinates beyond the `i32` range are clamped to it. If any
    /// coordinate is NaN or infinite, only the two rounded endpoints are
    /// plotted.
    pub fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: u8) {
        if ![x1, y1, x2, y2].iter().all(|v| v.is_finite()) {
            trace!(
                "draw_line with non-finite endpoint ({}, {}) -> ({}, {})",
                x1, y1, x2, y2
            );
            self.plot(x1 as f64, y1 as f64, color);
            self.plot(x2 as f64, y2 as f64, color);
            return;
        }
        let (x1, y1, x2, y2) = (clamp(x1), clamp(y1), clamp(x2), clamp(y2));
        let dx = x2 - x1;
        let dy = y2 - y1;
        let steps = dx.abs().max(dy.abs()).round() as i64;
        trace!(
            "draw_line ({}, {}) -> ({}, {}) in {} steps",
            x1, y1, x2, y2, steps
        );

        if steps <= 0 {
            // Shorter than half a dot: the two ends round to at most two
            // neighbouring dots.
            self.plot(x1, y1, color);
            self.plot(x2, y2, color);
            return;
        }

        let steps_f = steps as f64;
        for i in 0..=steps {
            let t = i as f64 / steps_f;
            // An axis with no movement stays exactly on its start value.
            let x = if dx == 0.0 { x1 } else { x1 + dx * t };
            let y = if dy == 0.0 { y1 } else { y1 + dy * t };
            self.plot(x, y, color);
        }
    }

    /// Draws the closed outline `p1 -> p2 -> p3 -> p1`. The interior is not
    /// filled; coincident vertices collapse to a line or a single dot.
    pub fn draw_triangle(&mut self, p1: Point, p2: Point, p3: Point, color: u8) {
        self.draw_line(p1.0, p1.1, p2.0, p2.1, color);
        self.draw_line(p2.0, p2.1, p3.0, p3.1, color);
        self.draw_line(p3.0, p3.1, p1.0, p1.1, color);
    }

    fn plot(&mut self, x: f64, y: f64, color: u8) {
        self.set_dot(x.round() as i32, y.round() as i32, color);
    }
}

fn clamp(v: f32) -> f64 {
    (v as f64).clamp(i32::MIN as f64, i32::MAX as f64)
}
