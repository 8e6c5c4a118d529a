mod triangulate_segment;

pub use triangulate_segment::{triangulate_segments, TriangulateSegment, TRIANGLES_PER_BOX};

use crate::math::{face_normal, Point3, Vector3};

/// A single mesh triangle, wound so its right-hand normal points outward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Point3; 3],
}

impl Triangle {
    /// Creates a triangle from three vertices in winding order.
    #[must_use]
    pub fn new(a: Point3, b: Point3, c: Point3) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Unit normal of `(b - a) x (c - a)`, or zero for a degenerate triangle.
    #[must_use]
    pub fn normal(&self) -> Vector3 {
        let [a, b, c] = &self.vertices;
        face_normal(a, b, c)
    }

    /// Centroid of the three vertices.
    #[must_use]
    pub fn centroid(&self) -> Point3 {
        let [a, b, c] = self.vertices;
        Point3::from((a.coords + b.coords + c.coords) / 3.0)
    }

    /// Returns the triangle with `f` applied to every vertex.
    #[must_use]
    pub fn map(&self, f: impl Fn(&Point3) -> Point3) -> Self {
        Self {
            vertices: self.vertices.each_ref().map(f),
        }
    }
}
