//! Near-plane classification and clipping.
//!
//! One axis-aligned plane at `z = depth` separates drawable geometry from
//! geometry at or behind the camera. Most triangles land entirely on one
//! side and are kept or dropped wholesale; straddling triangles are split
//! at the plane with a single-plane Sutherland-Hodgman pass so that no
//! vertex with `z <= 0` ever reaches the projector.
//!
//! Classification leans on the vertex ordering [`Triangle`] maintains:
//! slot 0 holds the largest z and slot 2 the smallest, so two comparisons
//! decide which side a triangle is on.

use crate::math::vec3::Vec3;
use crate::scene::Triangle;

/// Which side of the near plane a triangle occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Every vertex at or beyond the plane; draw as-is.
    InFront,
    /// Every vertex nearer than the plane; drop without drawing.
    Behind,
    /// Vertices on both sides; split at the plane before drawing.
    Straddling,
}

/// The near clipping plane at `z = depth`.
#[derive(Debug, Clone, Copy)]
pub struct NearPlane {
    depth: f32,
}

impl NearPlane {
    /// Creates a near plane at the given depth. The depth must be
    /// positive, since clipping exists to keep `z <= 0` away from the
    /// perspective divide.
    pub fn new(depth: f32) -> Self {
        Self { depth }
    }

    pub fn depth(&self) -> f32 {
        self.depth
    }

    /// Positive on the drawable side, negative behind the plane.
    fn signed_distance(&self, point: Vec3) -> f32 {
        point.z - self.depth
    }

    /// Classifies a triangle using its deepest and shallowest vertices.
    pub fn classify(&self, triangle: &Triangle) -> Classification {
        if triangle.max_z() < self.depth {
            Classification::Behind
        } else if triangle.min_z() >= self.depth {
            Classification::InFront
        } else {
            Classification::Straddling
        }
    }

    /// Clips a triangle against the plane.
    ///
    /// Walks the triangle's edges keeping inside vertices and inserting
    /// the plane intersection wherever an edge crosses, then fans the
    /// resulting polygon back into triangles. A straddling input yields
    /// one or two fragments, all with every vertex at `z >= depth`.
    pub fn clip(&self, triangle: &Triangle) -> Vec<Triangle> {
        let input = triangle.vertices();
        let mut polygon: Vec<Vec3> = Vec::with_capacity(4);

        for i in 0..input.len() {
            let current = input[i];
            let next = input[(i + 1) % input.len()];

            let d1 = self.signed_distance(current);
            let d2 = self.signed_distance(next);

            if d1 >= 0.0 {
                polygon.push(current);
                if d2 < 0.0 {
                    // Leaving the drawable side, keep the crossing point.
                    polygon.push(lerp(current, next, d1 / (d1 - d2)));
                }
            } else if d2 >= 0.0 {
                // Entering the drawable side.
                polygon.push(lerp(current, next, d1 / (d1 - d2)));
            }
        }

        // Fan triangulation; the polygon is convex with at most 4 vertices.
        (1..polygon.len().saturating_sub(1))
            .map(|i| Triangle::new(polygon[0], polygon[i], polygon[i + 1]))
            .collect()
    }
}

fn lerp(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn triangle(z0: f32, z1: f32, z2: f32) -> Triangle {
        Triangle::new(
            Vec3::new(0.0, 0.0, z0),
            Vec3::new(10.0, 0.0, z1),
            Vec3::new(5.0, 10.0, z2),
        )
    }

    #[test]
    fn classifies_each_side_of_the_plane() {
        let plane = NearPlane::new(10.0);
        assert_eq!(
            plane.classify(&triangle(30.0, 40.0, 50.0)),
            Classification::InFront
        );
        assert_eq!(
            plane.classify(&triangle(2.0, 5.0, 9.0)),
            Classification::Behind
        );
        assert_eq!(
            plane.classify(&triangle(5.0, 15.0, 25.0)),
            Classification::Straddling
        );
    }

    #[test]
    fn vertex_exactly_on_the_plane_counts_as_in_front() {
        let plane = NearPlane::new(10.0);
        assert_eq!(
            plane.classify(&triangle(10.0, 20.0, 30.0)),
            Classification::InFront
        );
    }

    #[test]
    fn clipping_an_in_front_triangle_returns_it_whole() {
        let plane = NearPlane::new(10.0);
        let fragments = plane.clip(&triangle(20.0, 30.0, 40.0));
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].max_z(), 40.0);
        assert_eq!(fragments[0].min_z(), 20.0);
    }

    #[test]
    fn clipping_a_behind_triangle_returns_nothing() {
        let plane = NearPlane::new(10.0);
        assert!(plane.clip(&triangle(1.0, 3.0, 5.0)).is_empty());
    }

    #[test]
    fn one_inside_vertex_yields_one_fragment() {
        let plane = NearPlane::new(10.0);
        let fragments = plane.clip(&triangle(2.0, 4.0, 30.0));
        assert_eq!(fragments.len(), 1);
    }

    #[test]
    fn two_inside_vertices_yield_two_fragments() {
        let plane = NearPlane::new(10.0);
        let fragments = plane.clip(&triangle(2.0, 20.0, 30.0));
        assert_eq!(fragments.len(), 2);
    }

    #[test]
    fn fragments_never_reach_behind_the_plane() {
        let plane = NearPlane::new(10.0);
        for input in [
            triangle(2.0, 4.0, 30.0),
            triangle(2.0, 20.0, 30.0),
            triangle(9.0, 11.0, 13.0),
        ] {
            for fragment in plane.clip(&input) {
                assert!(fragment.min_z() >= plane.depth() - 1e-4);
            }
        }
    }

    #[test]
    fn crossing_points_land_on_the_plane() {
        let plane = NearPlane::new(10.0);
        let fragments = plane.clip(&triangle(2.0, 4.0, 30.0));
        assert_eq!(fragments.len(), 1);

        // The surviving vertex keeps its depth; both crossings sit on
        // the plane.
        let [v0, v1, v2] = *fragments[0].vertices();
        assert_relative_eq!(v0.z, 30.0, epsilon = 1e-4);
        assert_relative_eq!(v1.z, 10.0, epsilon = 1e-4);
        assert_relative_eq!(v2.z, 10.0, epsilon = 1e-4);
    }

    #[test]
    fn fragments_keep_the_depth_slot_ordering() {
        let plane = NearPlane::new(10.0);
        for fragment in plane.clip(&triangle(2.0, 20.0, 30.0)) {
            let [v0, v1, v2] = *fragment.vertices();
            assert!(v0.z >= v1.z && v1.z >= v2.z);
        }
    }
}
