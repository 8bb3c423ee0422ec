//! Scanline triangle rasterization.
//!
//! Triangles are drawn one horizontal row at a time. After the vertices
//! are ordered by y, the edge from the topmost to the bottommost vertex
//! spans the triangle's full height; the other two edges each cover one
//! half. Each half walks its scanlines tracking an x position per edge,
//! advanced by the edge's inverse slope per row:
//!
//! ```text
//!        v1
//!        /\
//!  long /  \ short          top half: v1.y ..= v2.y
//!      /____\ v2            ----------------------
//!      \    /               bottom half: v3.y down to v2.y
//!       \  / short2
//!        \/
//!        v3
//! ```
//!
//! The top half accumulates downward from `v1`, the bottom half upward
//! from `v3`, so each short edge starts at the vertex it shares with the
//! long edge and both halves meet at `v2`'s row. Accumulated x positions
//! are clamped into the triangle's horizontal extent each row so slope
//! rounding error cannot push a span outside the triangle.
//!
//! Spans are plotted with [`draw_line`], so each row inherits the line
//! stepper's far-endpoint handling and a zero-width row plots nothing.

use std::mem;

use super::line::draw_line;
use crate::canvas::Canvas;
use crate::math::vec2::Vec2;

/// Draws the three edges of a triangle: `a` to `b`, `b` to `c`, `c` to `a`.
pub fn draw_outline<C: Canvas>(canvas: &mut C, a: Vec2, b: Vec2, c: Vec2, value: u8) {
    draw_line(canvas, a.x, a.y, b.x, b.y, value);
    draw_line(canvas, b.x, b.y, c.x, c.y, value);
    draw_line(canvas, c.x, c.y, a.x, a.y, value);
}

/// Fills a triangle with `value` using a two-half scanline sweep.
///
/// Vertex order does not matter; the vertices are reordered by y (ties
/// by x) before rasterization. A zero-height triangle plots nothing.
pub fn fill_triangle<C: Canvas>(canvas: &mut C, a: Vec2, b: Vec2, c: Vec2, value: u8) {
    let mut v1 = a;
    let mut v2 = b;
    let mut v3 = c;
    sort_by_y(&mut v1, &mut v2, &mut v3);

    // Zero height, nothing to fill.
    if v1.y == v3.y {
        return;
    }

    // Horizontal extent of the triangle; accumulated edge positions are
    // clamped into it after every step.
    let min_x = v1.x.min(v2.x).min(v3.x);
    let max_x = v1.x.max(v2.x).max(v3.x);

    let slope_long = edge_slope(v1, v3);

    if v1.y != v2.y {
        let slope_short = edge_slope(v1, v2);
        let mut xa = v1.x;
        let mut xb = v1.x;
        for y in v1.y.round() as i32..=v2.y.round() as i32 {
            draw_line(canvas, xa, y as f32, xb, y as f32, value);
            xa = (xa + slope_long).clamp(min_x, max_x);
            xb = (xb + slope_short).clamp(min_x, max_x);
        }
    }

    if v2.y != v3.y {
        let slope_short = edge_slope(v2, v3);
        let mut xa = v3.x;
        let mut xb = v3.x;
        for y in (v2.y.round() as i32..=v3.y.round() as i32).rev() {
            draw_line(canvas, xa, y as f32, xb, y as f32, value);
            xa = (xa - slope_long).clamp(min_x, max_x);
            xb = (xb - slope_short).clamp(min_x, max_x);
        }
    }
}

/// Orders the vertices ascending by y with three conditional swaps,
/// breaking y ties by x.
///
/// The tie-break makes the ordering canonical: every permutation of the
/// same three vertices sorts to the same triple, so a shared-y pair
/// cannot swap the edge trackers and flip the direction a span is drawn
/// in.
fn sort_by_y(v1: &mut Vec2, v2: &mut Vec2, v3: &mut Vec2) {
    if (v2.y, v2.x) < (v1.y, v1.x) {
        mem::swap(v1, v2);
    }
    if (v3.y, v3.x) < (v1.y, v1.x) {
        mem::swap(v1, v3);
    }
    if (v3.y, v3.x) < (v2.y, v2.x) {
        mem::swap(v2, v3);
    }
}

/// Inverse slope (dx per unit y) of the edge `from` to `to`.
///
/// A zero height difference yields a slope of 0 rather than a division
/// fault. Every edge in the fill goes through this one guard.
fn edge_slope(from: Vec2, to: Vec2) -> f32 {
    let dy = to.y - from.y;
    if dy == 0.0 {
        0.0
    } else {
        (to.x - from.x) / dy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Mode, RecordingCanvas};
    use std::collections::HashSet;

    fn fill_cells(a: Vec2, b: Vec2, c: Vec2) -> HashSet<(i32, i32)> {
        let mut canvas = RecordingCanvas::new(64, 64, Mode::Palette8);
        fill_triangle(&mut canvas, a, b, c, 1);
        canvas.plots.iter().map(|&(x, y, _)| (x, y)).collect()
    }

    #[test]
    fn fill_is_invariant_under_vertex_permutation() {
        let a = Vec2::new(10.0, 5.0);
        let b = Vec2::new(30.0, 12.0);
        let c = Vec2::new(18.0, 25.0);

        let expected = fill_cells(a, b, c);
        assert!(!expected.is_empty());

        for (p, q, r) in [
            (a, c, b),
            (b, a, c),
            (b, c, a),
            (c, a, b),
            (c, b, a),
        ] {
            assert_eq!(fill_cells(p, q, r), expected);
        }
    }

    #[test]
    fn fill_with_a_shared_y_pair_is_invariant_under_vertex_permutation() {
        // Flat-top and flat-bottom triangles exercise the x tie-break in
        // the vertex ordering.
        for (a, b, c) in [
            (
                Vec2::new(0.0, 5.0),
                Vec2::new(10.0, 5.0),
                Vec2::new(5.0, 20.0),
            ),
            (
                Vec2::new(5.0, 5.0),
                Vec2::new(0.0, 20.0),
                Vec2::new(10.0, 20.0),
            ),
        ] {
            let expected = fill_cells(a, b, c);
            assert!(!expected.is_empty());

            for (p, q, r) in [
                (a, c, b),
                (b, a, c),
                (b, c, a),
                (c, a, b),
                (c, b, a),
            ] {
                assert_eq!(fill_cells(p, q, r), expected);
            }
        }
    }

    #[test]
    fn zero_height_triangle_fills_nothing() {
        let cells = fill_cells(
            Vec2::new(0.0, 5.0),
            Vec2::new(10.0, 5.0),
            Vec2::new(20.0, 5.0),
        );
        assert!(cells.is_empty());
    }

    #[test]
    fn collinear_vertical_triangle_fills_nothing() {
        let cells = fill_cells(
            Vec2::new(5.0, 0.0),
            Vec2::new(5.0, 5.0),
            Vec2::new(5.0, 10.0),
        );
        assert!(cells.is_empty());
    }

    #[test]
    fn fill_covers_an_interior_cell() {
        let cells = fill_cells(
            Vec2::new(10.0, 5.0),
            Vec2::new(30.0, 12.0),
            Vec2::new(18.0, 25.0),
        );
        assert!(cells.contains(&(20, 12)));
    }

    #[test]
    fn fill_stays_inside_the_vertex_extent() {
        let cells = fill_cells(
            Vec2::new(4.0, 2.0),
            Vec2::new(28.0, 9.0),
            Vec2::new(11.0, 30.0),
        );
        assert!(!cells.is_empty());
        for &(x, y) in &cells {
            assert!((4..=28).contains(&x), "x {} outside extent", x);
            assert!((2..=30).contains(&y), "y {} outside extent", y);
        }
    }

    #[test]
    fn flat_top_triangle_skips_only_the_top_half() {
        let cells = fill_cells(
            Vec2::new(5.0, 4.0),
            Vec2::new(25.0, 4.0),
            Vec2::new(15.0, 20.0),
        );
        assert!(cells.contains(&(15, 10)));
    }

    #[test]
    fn flat_bottom_triangle_skips_only_the_bottom_half() {
        let cells = fill_cells(
            Vec2::new(15.0, 4.0),
            Vec2::new(5.0, 20.0),
            Vec2::new(25.0, 20.0),
        );
        assert!(cells.contains(&(15, 14)));
    }

    #[test]
    fn outline_draws_the_three_edges_in_order() {
        let a = Vec2::new(2.0, 2.0);
        let b = Vec2::new(12.0, 2.0);
        let c = Vec2::new(2.0, 12.0);

        let mut outlined = RecordingCanvas::new(32, 32, Mode::Palette8);
        draw_outline(&mut outlined, a, b, c, 3);

        let mut lines = RecordingCanvas::new(32, 32, Mode::Palette8);
        draw_line(&mut lines, a.x, a.y, b.x, b.y, 3);
        draw_line(&mut lines, b.x, b.y, c.x, c.y, 3);
        draw_line(&mut lines, c.x, c.y, a.x, a.y, 3);

        assert_eq!(outlined.plots, lines.plots);
        assert!(!outlined.plots.is_empty());
    }

    #[test]
    fn fill_uses_the_requested_value() {
        let mut canvas = RecordingCanvas::new(64, 64, Mode::Palette8);
        fill_triangle(
            &mut canvas,
            Vec2::new(2.0, 2.0),
            Vec2::new(20.0, 6.0),
            Vec2::new(8.0, 18.0),
            5,
        );
        assert!(!canvas.plots.is_empty());
        assert!(canvas.plots.iter().all(|&(_, _, v)| v == 5));
    }
}
