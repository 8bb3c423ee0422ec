//! Dominant-axis line stepping.
//!
//! The line rasterizer advances one full cell per iteration along the axis
//! of greater extent and a fractional amount along the other, rounding only
//! when plotting. The stepped position itself stays in floating point so
//! rounding error cannot accumulate across a long line.

use crate::canvas::Canvas;

/// Plots a one-cell-wide line from `(x1, y1)` toward `(x2, y2)`.
///
/// Runs for `ceil(max(|dx|, |dy|))` iterations, one cell of progress along
/// the dominant axis each. The ceiling guarantees the far endpoint's cell is
/// reached for fractional lengths; for whole-cell lengths the far endpoint
/// itself is left to the next connected segment, so closed shapes do not
/// double-plot their corners. A zero-length line plots nothing.
///
/// Coordinates are not clamped here; the canvas ignores out-of-range plots.
pub fn draw_line<C: Canvas>(canvas: &mut C, x1: f32, y1: f32, x2: f32, y2: f32, value: u8) {
    let dx = x2 - x1;
    let dy = y2 - y1;

    if dx == 0.0 && dy == 0.0 {
        return;
    }

    // Unit step along the dominant axis, fractional step along the other.
    let (length, step_x, step_y) = if dx.abs() > dy.abs() {
        (dx.abs(), dx.signum(), dy / dx.abs())
    } else {
        (dy.abs(), dx / dy.abs(), dy.signum())
    };

    let steps = length.ceil() as i32;
    let mut x = x1;
    let mut y = y1;

    for _ in 0..steps {
        canvas.plot(x.round() as i32, y.round() as i32, value);
        x += step_x;
        y += step_y;
    }
}
