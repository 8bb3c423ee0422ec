//! Primitive solids and per-frame triangle construction.
//!
//! A [`Mesh`] owns object-space geometry plus the rotation and translation
//! to apply this frame. [`Mesh::build_into`] runs every face through the
//! transform chain and appends the resulting camera-space triangles to the
//! scene buffer; the mesh itself is never consumed, so the same solid can
//! be rebuilt every frame with updated animation parameters.

use crate::math::vec3::Vec3;
use crate::scene::{SceneBuffer, Triangle};

/// Indices of one triangular face into a mesh's vertex list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

const CUBE_VERTICES: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
    Vec3::new(-1.0, -1.0, 1.0),
];

const CUBE_FACES: [Face; 12] = [
    // Front
    Face { a: 0, b: 1, c: 2 },
    Face { a: 0, b: 2, c: 3 },
    // Right
    Face { a: 3, b: 2, c: 4 },
    Face { a: 3, b: 4, c: 5 },
    // Back
    Face { a: 5, b: 4, c: 6 },
    Face { a: 5, b: 6, c: 7 },
    // Left
    Face { a: 7, b: 6, c: 1 },
    Face { a: 7, b: 1, c: 0 },
    // Top
    Face { a: 1, b: 6, c: 4 },
    Face { a: 1, b: 4, c: 2 },
    // Bottom
    Face { a: 5, b: 7, c: 0 },
    Face { a: 5, b: 0, c: 3 },
];

const PLANE_VERTICES: [Vec3; 4] = [
    Vec3::new(-1.0, -1.0, 0.0),
    Vec3::new(1.0, -1.0, 0.0),
    Vec3::new(1.0, 1.0, 0.0),
    Vec3::new(-1.0, 1.0, 0.0),
];

const PLANE_FACES: [Face; 2] = [
    Face { a: 0, b: 1, c: 2 },
    Face { a: 0, b: 2, c: 3 },
];

/// A primitive solid in object space with its current frame transform.
#[derive(Debug, Clone)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    faces: Vec<Face>,
    /// Per-axis rotation angles in radians, applied X then Y then Z.
    pub rotation: Vec3,
    /// Offset added after rotation, moving the solid into camera space.
    pub translation: Vec3,
}

impl Mesh {
    /// An axis-aligned cube centered on the origin, 12 triangles.
    pub fn cube(half_extents: Vec3) -> Self {
        let vertices = CUBE_VERTICES
            .iter()
            .map(|v| Vec3::new(v.x * half_extents.x, v.y * half_extents.y, v.z * half_extents.z))
            .collect();
        Self {
            vertices,
            faces: CUBE_FACES.to_vec(),
            rotation: Vec3::ZERO,
            translation: Vec3::ZERO,
        }
    }

    /// A flat rectangle in the z = 0 plane, 2 triangles.
    pub fn plane(half_width: f32, half_height: f32) -> Self {
        let vertices = PLANE_VERTICES
            .iter()
            .map(|v| Vec3::new(v.x * half_width, v.y * half_height, 0.0))
            .collect();
        Self {
            vertices,
            faces: PLANE_FACES.to_vec(),
            rotation: Vec3::ZERO,
            translation: Vec3::ZERO,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Transforms every face and appends it to the scene buffer.
    ///
    /// Each vertex is rotated about all three axes, then translated.
    /// [`Triangle::new`] orders the vertices by depth as they are
    /// inserted, so everything in the buffer satisfies the slot
    /// convention the clipper relies on.
    pub fn build_into(&self, scene: &mut SceneBuffer) {
        for face in &self.faces {
            let a = self.transform_vertex(self.vertices[face.a]);
            let b = self.transform_vertex(self.vertices[face.b]);
            let c = self.transform_vertex(self.vertices[face.c]);
            scene.push(Triangle::new(a, b, c));
        }
    }

    fn transform_vertex(&self, vertex: Vec3) -> Vec3 {
        vertex.rotate_xyz(self.rotation.x, self.rotation.y, self.rotation.z) + self.translation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn cube_has_eight_corners_and_twelve_faces() {
        let cube = Mesh::cube(Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(cube.vertex_count(), 8);
        assert_eq!(cube.face_count(), 12);
    }

    #[test]
    fn plane_has_four_corners_and_two_faces() {
        let plane = Mesh::plane(5.0, 3.0);
        assert_eq!(plane.vertex_count(), 4);
        assert_eq!(plane.face_count(), 2);
    }

    #[test]
    fn build_pushes_one_triangle_per_face() {
        let mut scene = SceneBuffer::new();
        Mesh::cube(Vec3::new(1.0, 1.0, 1.0)).build_into(&mut scene);
        assert_eq!(scene.len(), 12);

        Mesh::plane(2.0, 2.0).build_into(&mut scene);
        assert_eq!(scene.len(), 14);
    }

    #[test]
    fn translation_moves_every_vertex() {
        let mut plane = Mesh::plane(6.0, 4.5);
        plane.translation = Vec3::new(0.0, 0.0, 40.0);

        let mut scene = SceneBuffer::new();
        plane.build_into(&mut scene);

        for triangle in scene.triangles() {
            for vertex in triangle.vertices() {
                assert_relative_eq!(vertex.z, 40.0);
                assert!(vertex.x.abs() <= 6.0 && vertex.y.abs() <= 4.5);
            }
        }
    }

    #[test]
    fn scaled_cube_keeps_vertices_inside_the_depth_band() {
        let mut cube = Mesh::cube(Vec3::new(10.0, 10.0, 10.0));
        cube.translation = Vec3::new(0.0, 0.0, 40.0);

        let mut scene = SceneBuffer::new();
        cube.build_into(&mut scene);

        for triangle in scene.triangles() {
            for vertex in triangle.vertices() {
                assert!((30.0..=50.0).contains(&vertex.z));
            }
        }
    }

    #[test]
    fn built_vertices_match_the_manual_transform_chain() {
        let mut cube = Mesh::cube(Vec3::new(2.0, 3.0, 4.0));
        cube.rotation = Vec3::new(0.3, 0.7, 1.1);
        cube.translation = Vec3::new(5.0, -2.0, 30.0);

        let expected: Vec<Vec3> = CUBE_VERTICES
            .iter()
            .map(|v| {
                Vec3::new(v.x * 2.0, v.y * 3.0, v.z * 4.0)
                    .rotate_xyz(0.3, 0.7, 1.1)
                    + Vec3::new(5.0, -2.0, 30.0)
            })
            .collect();

        let mut scene = SceneBuffer::new();
        cube.build_into(&mut scene);

        for triangle in scene.triangles() {
            for vertex in triangle.vertices() {
                let matched = expected.iter().any(|e| {
                    (vertex.x - e.x).abs() < 1e-4
                        && (vertex.y - e.y).abs() < 1e-4
                        && (vertex.z - e.z).abs() < 1e-4
                });
                assert!(matched, "vertex {:?} not produced by the transform chain", vertex);
            }
        }
    }

    #[test]
    fn built_triangles_keep_the_depth_slot_ordering() {
        let mut cube = Mesh::cube(Vec3::new(1.0, 1.0, 1.0));
        cube.rotation = Vec3::new(0.5, 1.0, 1.5);
        cube.translation = Vec3::new(0.0, 0.0, 10.0);

        let mut scene = SceneBuffer::new();
        cube.build_into(&mut scene);

        for triangle in scene.triangles() {
            let [v0, v1, v2] = *triangle.vertices();
            assert!(v0.z >= v1.z && v1.z >= v2.z);
        }
    }
}
