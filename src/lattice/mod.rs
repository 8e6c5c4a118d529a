mod adjacency;
mod canonical;
mod derive;
mod hex;

pub use adjacency::VertexAdjacency;
pub use canonical::{CanonicalEdge, RoundedPoint};
pub use derive::{collect_edges, DeriveLattice, MIN_DASH_LENGTH};
pub use hex::{hex_centers, hex_corners};

use crate::math::Point2;

/// An axis-aligned rectangle in the XY plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Minimum corner.
    pub min: Point2,
    /// Maximum corner.
    pub max: Point2,
}

impl Rect {
    /// Creates a rectangle from its two extreme corners.
    #[must_use]
    pub fn new(min: Point2, max: Point2) -> Self {
        Self { min, max }
    }

    /// A `width` by `height` rectangle centred on the origin, shrunk by
    /// `margin` on every side.
    #[must_use]
    pub fn centered(width: f64, height: f64, margin: f64) -> Self {
        Self {
            min: Point2::new(-width / 2.0 + margin, -height / 2.0 + margin),
            max: Point2::new(width / 2.0 - margin, height / 2.0 - margin),
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Whether `p` lies inside the rectangle or on its boundary.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        (self.min.x..=self.max.x).contains(&p.x) && (self.min.y..=self.max.y).contains(&p.y)
    }
}

/// What part of the lattice a segment marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// A dash centred on an edge midpoint, stopping short of both vertices.
    EdgeDash,
    /// A stub leaving a vertex toward one of its neighbours.
    VertexArm,
}

/// A short linear feature, realised downstream as a thin oriented box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Centre of the feature.
    pub center: Point2,
    /// Extent along the feature direction.
    pub length: f64,
    /// Direction of the feature, counter-clockwise from +X, in degrees.
    pub angle_deg: f64,
    pub kind: SegmentKind,
}

/// The derived template geometry for one configuration.
#[derive(Debug, Clone)]
pub struct LatticeGeometry {
    /// Side length of every hexagon.
    pub side: f64,
    /// Plate area minus the border; only features inside it are kept.
    pub working_area: Rect,
    /// Number of deduplicated lattice edges, before clipping.
    pub edge_count: usize,
    /// Vertex neighbourhoods of the whole generated lattice.
    pub adjacency: VertexAdjacency,
    /// One dash per edge whose midpoint lies in the working area.
    pub edge_segments: Vec<Segment>,
    /// One arm per (vertex, neighbour) pair for vertices in the working area.
    pub vertex_segments: Vec<Segment>,
}

impl LatticeGeometry {
    /// Edge dashes followed by vertex arms.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.edge_segments.iter().chain(&self.vertex_segments)
    }

    /// Total number of segments of both kinds.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.edge_segments.len() + self.vertex_segments.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_shrinks_by_margin() {
        let r = Rect::centered(170.0, 100.0, 6.0);
        assert!((r.width() - 158.0).abs() < 1e-12);
        assert!((r.height() - 88.0).abs() < 1e-12);
        assert!((r.min.x + 79.0).abs() < 1e-12);
    }

    #[test]
    fn contains_is_inclusive() {
        let r = Rect::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));
        assert!(r.contains(&Point2::new(1.0, 0.0)));
        assert!(r.contains(&Point2::new(0.5, 0.5)));
        assert!(!r.contains(&Point2::new(1.0 + 1e-9, 0.5)));
    }
}
