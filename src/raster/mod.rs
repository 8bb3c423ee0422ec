//! Drawing primitives: lines, triangle outlines, and filled triangles.
//!
//! Everything here works in screen space on an abstract [`crate::canvas::Canvas`]
//! and knows nothing about depth or projection; the 3D pipeline in
//! [`crate::engine`] hands this module flat 2D coordinates.

pub mod line;
pub mod scanline;

pub use line::draw_line;
pub use scanline::{draw_outline, fill_triangle};
