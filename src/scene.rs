//! The per-frame triangle buffer and its depth bookkeeping.
//!
//! Depth convention for the whole pipeline: the camera sits at the origin
//! looking along +z, so a larger z means farther away. Mean depth is
//! computed once at construction and reused by the painter's sort, never
//! recomputed per comparison.

use crate::math::vec3::Vec3;

/// A transformed triangle ready for sorting, clipping, and projection.
///
/// Construction orders the vertices by descending z, so slot 0 always
/// holds the deepest vertex and slot 2 the shallowest. Classification
/// against the near plane then needs only those two slots.
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    vertices: [Vec3; 3],
    mean_depth: f32,
}

impl Triangle {
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        let mut vertices = [a, b, c];
        // Three conditional swaps order the vertices by descending z.
        if vertices[1].z > vertices[0].z {
            vertices.swap(0, 1);
        }
        if vertices[2].z > vertices[0].z {
            vertices.swap(0, 2);
        }
        if vertices[2].z > vertices[1].z {
            vertices.swap(1, 2);
        }
        let mean_depth = (vertices[0].z + vertices[1].z + vertices[2].z) / 3.0;
        Self {
            vertices,
            mean_depth,
        }
    }

    pub fn vertices(&self) -> &[Vec3; 3] {
        &self.vertices
    }

    /// Average z of the three vertices, the painter's sort key.
    pub fn mean_depth(&self) -> f32 {
        self.mean_depth
    }

    /// Largest vertex z (slot 0).
    pub fn max_z(&self) -> f32 {
        self.vertices[0].z
    }

    /// Smallest vertex z (slot 2).
    pub fn min_z(&self) -> f32 {
        self.vertices[2].z
    }
}

/// Transient collection of the triangles built for one frame.
///
/// Append-only while geometry is constructed, sorted once before drawing,
/// and drained at the end of the frame. Nothing survives into the next
/// frame.
#[derive(Debug, Default)]
pub struct SceneBuffer {
    triangles: Vec<Triangle>,
}

impl SceneBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Stable sort by descending mean depth. Farthest triangles come
    /// first so the painter's draw order lets near geometry overpaint
    /// far geometry; ties keep insertion order.
    pub fn sort_back_to_front(&mut self) {
        self.triangles
            .sort_by(|a, b| b.mean_depth.total_cmp(&a.mean_depth));
    }

    pub fn clear(&mut self) {
        self.triangles.clear();
    }
}
