use crate::lattice::Segment;
use crate::math::Point3;

use super::Triangle;

/// Number of triangles emitted for one box.
pub const TRIANGLES_PER_BOX: usize = 12;

/// Corner indices of each triangle. Corners 0-3 form the bottom ring and 4-7
/// the top ring, both counter-clockwise seen from above starting at
/// `(-l, -w)`. Two triangles per face in the order bottom, top, front (-Y),
/// right (+X), back (+Y), left (-X).
const FACES: [[usize; 3]; TRIANGLES_PER_BOX] = [
    [0, 2, 1],
    [0, 3, 2],
    [4, 5, 6],
    [4, 6, 7],
    [0, 1, 5],
    [0, 5, 4],
    [1, 2, 6],
    [1, 6, 5],
    [2, 3, 7],
    [2, 7, 6],
    [3, 0, 4],
    [3, 4, 7],
];

/// Triangulates a segment as a rotated box standing on `z = 0`.
///
/// The box spans the segment length along its direction, `width` across it
/// and `height` upward.
#[derive(Debug)]
pub struct TriangulateSegment<'a> {
    segment: &'a Segment,
    width: f64,
    height: f64,
}

impl<'a> TriangulateSegment<'a> {
    /// Creates a new box triangulation.
    #[must_use]
    pub fn new(segment: &'a Segment, width: f64, height: f64) -> Self {
        Self {
            segment,
            width,
            height,
        }
    }

    /// Executes the triangulation, returning exactly [`TRIANGLES_PER_BOX`] triangles.
    #[must_use]
    pub fn execute(&self) -> [Triangle; TRIANGLES_PER_BOX] {
        let corners = self.corners();
        FACES.map(|[i, j, k]| Triangle::new(corners[i], corners[j], corners[k]))
    }

    fn corners(&self) -> [Point3; 8] {
        let hl = 0.5 * self.segment.length;
        let hw = 0.5 * self.width;
        let hh = 0.5 * self.height;
        let (sin_a, cos_a) = self.segment.angle_deg.to_radians().sin_cos();
        let center = self.segment.center;

        let local = [
            (-hl, -hw, -hh),
            (hl, -hw, -hh),
            (hl, hw, -hh),
            (-hl, hw, -hh),
            (-hl, -hw, hh),
            (hl, -hw, hh),
            (hl, hw, hh),
            (-hl, hw, hh),
        ];
        local.map(|(x, y, z)| {
            Point3::new(
                x * cos_a - y * sin_a + center.x,
                x * sin_a + y * cos_a + center.y,
                z + hh,
            )
        })
    }
}

/// Triangulates every segment with a shared box `width` and `height`.
#[must_use]
pub fn triangulate_segments<'a>(
    segments: impl IntoIterator<Item = &'a Segment>,
    width: f64,
    height: f64,
) -> Vec<Triangle> {
    segments
        .into_iter()
        .flat_map(|segment| TriangulateSegment::new(segment, width, height).execute())
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::lattice::SegmentKind;
    use crate::math::{Point2, Vector3};

    fn segment(angle_deg: f64) -> Segment {
        Segment {
            center: Point2::new(4.0, -3.0),
            length: 10.0,
            angle_deg,
            kind: SegmentKind::EdgeDash,
        }
    }

    #[test]
    fn axis_aligned_box_covers_all_six_faces() {
        let seg = segment(0.0);
        let triangles = TriangulateSegment::new(&seg, 0.75, 1.6).execute();
        assert_eq!(triangles.len(), TRIANGLES_PER_BOX);

        let axes = [
            Vector3::x(),
            -Vector3::x(),
            Vector3::y(),
            -Vector3::y(),
            Vector3::z(),
            -Vector3::z(),
        ];
        for axis in axes {
            let count = triangles
                .iter()
                .filter(|t| (t.normal() - axis).norm() < 1e-9)
                .count();
            assert_eq!(count, 2, "axis {axis:?}");
        }
    }

    #[test]
    fn normals_point_away_from_center_at_any_angle() {
        for angle in [-150.0, -30.0, 0.0, 30.0, 90.0, 137.5] {
            let seg = segment(angle);
            let center = Point3::new(seg.center.x, seg.center.y, 0.8);
            for t in TriangulateSegment::new(&seg, 0.75, 1.6).execute() {
                let outward = t.centroid() - center;
                assert!(t.normal().dot(&outward) > 0.0, "angle {angle}");
            }
        }
    }

    #[test]
    fn box_sits_on_the_plane() {
        let seg = segment(45.0);
        let triangles = TriangulateSegment::new(&seg, 0.75, 1.6).execute();
        let zs: Vec<f64> = triangles
            .iter()
            .flat_map(|t| t.vertices.iter().map(|v| v.z))
            .collect();
        let min_z = zs.iter().copied().fold(f64::INFINITY, f64::min);
        let max_z = zs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert_relative_eq!(min_z, 0.0);
        assert_relative_eq!(max_z, 1.6);
    }

    #[test]
    fn rotation_moves_length_onto_direction() {
        let seg = segment(90.0);
        let triangles = TriangulateSegment::new(&seg, 0.5, 1.0).execute();
        let ys = triangles.iter().flat_map(|t| t.vertices.iter().map(|v| v.y));
        let max_y = ys.fold(f64::NEG_INFINITY, f64::max);
        assert_relative_eq!(max_y, -3.0 + 5.0, epsilon = 1e-12);
    }

    #[test]
    fn many_segments_yield_twelve_triangles_each() {
        let segs = [segment(0.0), segment(60.0), segment(120.0)];
        assert_eq!(triangulate_segments(&segs, 0.75, 1.6).len(), 36);
    }
}
