use std::collections::BTreeSet;

use tracing::debug;

use crate::config::StencilConfig;
use crate::error::Result;
use crate::math::Point2;

use super::{
    hex_centers, hex_corners, CanonicalEdge, LatticeGeometry, Rect, Segment, SegmentKind,
    VertexAdjacency,
};

/// Shortest dash ever emitted, used when the vertex gaps eat the whole side.
pub const MIN_DASH_LENGTH: f64 = 0.2;

/// Collects the deduplicated boundary edges of hexes centred at `centers`.
#[must_use]
pub fn collect_edges(centers: &[Point2], side: f64, precision: u32) -> BTreeSet<CanonicalEdge> {
    let mut edges = BTreeSet::new();
    for &center in centers {
        let corners = hex_corners(center, side);
        for i in 0..6 {
            edges.insert(CanonicalEdge::new(corners[i], corners[(i + 1) % 6], precision));
        }
    }
    edges
}

/// Derives edge dashes and vertex arms from a template configuration.
pub struct DeriveLattice<'a> {
    config: &'a StencilConfig,
}

impl<'a> DeriveLattice<'a> {
    /// Creates a new `DeriveLattice` operation.
    #[must_use]
    pub fn new(config: &'a StencilConfig) -> Self {
        Self { config }
    }

    /// Executes the derivation.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not validate.
    pub fn execute(&self) -> Result<LatticeGeometry> {
        let config = self.config;
        config.validate()?;

        let side = config.hex_side();
        let working_area = Rect::centered(config.width, config.height, config.border);

        let centers = hex_centers(&working_area, config.hex_flat_to_flat);
        let edges = collect_edges(&centers, side, config.precision);
        let adjacency = VertexAdjacency::from_edges(&edges);

        let edge_segments = edge_dashes(&edges, &working_area, dash_length(side, config));
        let vertex_segments =
            vertex_arms(&adjacency, &working_area, config.vertex_arm_length);

        debug!(
            centers = centers.len(),
            edges = edges.len(),
            vertices = adjacency.vertex_count(),
            dashes = edge_segments.len(),
            arms = vertex_segments.len(),
            "derived hex lattice"
        );

        Ok(LatticeGeometry {
            side,
            working_area,
            edge_count: edges.len(),
            adjacency,
            edge_segments,
            vertex_segments,
        })
    }
}

fn dash_length(side: f64, config: &StencilConfig) -> f64 {
    (side - 2.0 * config.edge_gap_from_vertex).max(MIN_DASH_LENGTH)
}

fn edge_dashes(edges: &BTreeSet<CanonicalEdge>, area: &Rect, length: f64) -> Vec<Segment> {
    edges
        .iter()
        .filter_map(|edge| {
            let a = edge.start().to_point();
            let b = edge.end().to_point();
            let mid = nalgebra::center(&a, &b);
            if !area.contains(&mid) {
                return None;
            }
            Some(Segment {
                center: mid,
                length,
                angle_deg: (b.y - a.y).atan2(b.x - a.x).to_degrees(),
                kind: SegmentKind::EdgeDash,
            })
        })
        .collect()
}

fn vertex_arms(adjacency: &VertexAdjacency, area: &Rect, arm_length: f64) -> Vec<Segment> {
    let mut arms = Vec::new();
    for (vertex, neighbors) in adjacency.iter() {
        let v = vertex.to_point();
        if !area.contains(&v) {
            continue;
        }
        // One stub per incident edge; stubs overlap at the vertex.
        for neighbor in neighbors {
            let n = neighbor.to_point();
            let angle = (n.y - v.y).atan2(n.x - v.x);
            let half = 0.5 * arm_length;
            arms.push(Segment {
                center: Point2::new(v.x + half * angle.cos(), v.y + half * angle.sin()),
                length: arm_length,
                angle_deg: angle.to_degrees(),
                kind: SegmentKind::VertexArm,
            });
        }
    }
    arms
}
