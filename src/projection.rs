//! Perspective projection of camera-space points onto the canvas plane.

use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;

/// Perspective projector with a fixed field-of-view scale factor.
///
/// Projection divides x and y by the point's depth and scales the result,
/// so geometry shrinks with distance. The screen-space origin stays at the
/// camera axis; the render pipeline adds the half-canvas centering offset
/// after projection.
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    fov_factor: f32,
}

impl Projector {
    /// Creates a projector with the given field-of-view scale factor.
    pub fn new(fov_factor: f32) -> Self {
        Self { fov_factor }
    }

    /// Returns the field-of-view scale factor.
    pub fn fov_factor(&self) -> f32 {
        self.fov_factor
    }

    /// Projects a camera-space point to 2D.
    ///
    /// The division is undefined at `z = 0`; callers must run points
    /// through near-plane clipping first so no depth at or below zero
    /// ever reaches this function.
    pub fn project(&self, point: Vec3) -> Vec2 {
        Vec2::new(
            point.x / point.z * self.fov_factor,
            point.y / point.z * self.fov_factor,
        )
    }
}
