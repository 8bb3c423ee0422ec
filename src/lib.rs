//! A minimal CPU software rasterizer with a painter's-algorithm 3D pipeline.
//!
//! Lines and triangles are rasterized onto an abstract grid of palette
//! cells; solids are rotated, near-plane clipped, perspective projected,
//! and drawn back to front, with SDL2 used only to put the cell grid on
//! screen.
//!
//! # Quick Start
//!
//! ```ignore
//! use rasterm::prelude::*;
//!
//! let mut canvas = WindowCanvas::new("demo", 400, 300, Mode::Palette8)?;
//! let mut engine = Engine::new();
//! let mut cube = Mesh::cube(Vec3::new(10.0, 10.0, 10.0));
//! cube.translation = Vec3::new(0.0, 0.0, 40.0);
//! engine.frame(&mut canvas, |scene| cube.build_into(scene))?;
//! ```

pub mod canvas;
pub mod clip;
pub mod engine;
pub mod math;
pub mod mesh;
pub mod projection;
pub mod raster;
pub mod scene;
pub mod util;
pub mod window;

// Re-export the types almost every consumer touches.
pub use canvas::{BufferCanvas, Canvas, Mode};
pub use engine::Engine;
pub use mesh::Mesh;
pub use scene::SceneBuffer;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use rasterm::prelude::*;
/// ```
pub mod prelude {
    // Canvas
    pub use crate::canvas::{BufferCanvas, Canvas, Mode};

    // Pipeline
    pub use crate::clip::{Classification, NearPlane};
    pub use crate::engine::Engine;
    pub use crate::projection::Projector;
    pub use crate::scene::{SceneBuffer, Triangle};

    // Geometry
    pub use crate::mesh::{Face, Mesh};

    // Math
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;

    // Drawing primitives
    pub use crate::raster::{draw_line, draw_outline, fill_triangle};

    // Window & pacing
    pub use crate::window::{FramePacer, WindowCanvas};
}
