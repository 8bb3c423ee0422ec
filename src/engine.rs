//! The per-frame render pipeline.
//!
//! [`Engine`] owns the scene buffer and the projection and clipping
//! parameters, and runs the fixed sequence every frame: sort the scene
//! back to front, classify each triangle against the near plane, clip
//! the straddlers, project the survivors, and fill them on the canvas.
//! Draw order is the whole occlusion story; there is no depth buffer,
//! so correctness rests on the painter's sort and on canvas writes
//! staying serialized in sorted order.

use crate::canvas::Canvas;
use crate::clip::{Classification, NearPlane};
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::projection::Projector;
use crate::raster::fill_triangle;
use crate::scene::{SceneBuffer, Triangle};

const DEFAULT_FOV_FACTOR: f32 = 640.0;
const DEFAULT_NEAR_DEPTH: f32 = 1.0;

pub struct Engine {
    projector: Projector,
    near_plane: NearPlane,
    scene: SceneBuffer,
}

impl Engine {
    pub fn new() -> Self {
        Self::with_projection(DEFAULT_FOV_FACTOR, DEFAULT_NEAR_DEPTH)
    }

    /// Creates an engine with an explicit field-of-view factor and near
    /// plane depth. The depth must be positive.
    pub fn with_projection(fov_factor: f32, near_depth: f32) -> Self {
        Self {
            projector: Projector::new(fov_factor),
            near_plane: NearPlane::new(near_depth),
            scene: SceneBuffer::new(),
        }
    }

    pub fn scene(&self) -> &SceneBuffer {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut SceneBuffer {
        &mut self.scene
    }

    /// Draws the scene onto the canvas and drains it.
    ///
    /// Triangles are drawn farthest first. Each surviving triangle takes
    /// the next palette index in draw order, wrapping at the palette
    /// length; clip fragments share their source triangle's index, and
    /// dropped triangles consume none. The scene buffer is empty when
    /// this returns.
    pub fn render<C: Canvas>(&mut self, canvas: &mut C) {
        self.scene.sort_back_to_front();

        let palette_len = canvas.palette().len();
        let mut index: usize = 0;

        for triangle in self.scene.triangles() {
            let value = (index % palette_len) as u8;
            match self.near_plane.classify(triangle) {
                Classification::Behind => continue,
                Classification::InFront => self.draw_triangle(canvas, triangle, value),
                Classification::Straddling => {
                    for piece in self.near_plane.clip(triangle) {
                        self.draw_triangle(canvas, &piece, value);
                    }
                }
            }
            index += 1;
        }

        self.scene.clear();
    }

    /// Runs one whole frame: build geometry into the scene, render it,
    /// flush the canvas, and reset the canvas for the next frame.
    pub fn frame<C: Canvas>(
        &mut self,
        canvas: &mut C,
        build: impl FnOnce(&mut SceneBuffer),
    ) -> Result<(), String> {
        build(&mut self.scene);
        self.render(canvas);
        canvas.update()?;
        canvas.clear();
        Ok(())
    }

    fn draw_triangle<C: Canvas>(&self, canvas: &mut C, triangle: &Triangle, value: u8) {
        let half_width = canvas.width() as f32 / 2.0;
        let half_height = canvas.height() as f32 / 2.0;

        let [v0, v1, v2] = *triangle.vertices();
        let a = self.to_screen(v0, half_width, half_height);
        let b = self.to_screen(v1, half_width, half_height);
        let c = self.to_screen(v2, half_width, half_height);

        fill_triangle(canvas, a, b, c, value);
    }

    /// Projects a camera-space vertex and recenters it on the canvas.
    fn to_screen(&self, vertex: Vec3, half_width: f32, half_height: f32) -> Vec2 {
        let projected = self.projector.project(vertex);
        Vec2::new(projected.x + half_width, projected.y + half_height)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
