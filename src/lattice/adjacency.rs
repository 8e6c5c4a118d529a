use std::collections::{BTreeMap, BTreeSet};

use super::canonical::{CanonicalEdge, RoundedPoint};

/// Lattice vertices and the vertices each one shares an edge with.
#[derive(Debug, Clone, Default)]
pub struct VertexAdjacency {
    neighbors: BTreeMap<RoundedPoint, BTreeSet<RoundedPoint>>,
}

impl VertexAdjacency {
    /// Folds every edge into the neighbour sets of both endpoints.
    #[must_use]
    pub fn from_edges<'a>(edges: impl IntoIterator<Item = &'a CanonicalEdge>) -> Self {
        let mut neighbors: BTreeMap<RoundedPoint, BTreeSet<RoundedPoint>> = BTreeMap::new();
        for edge in edges {
            neighbors.entry(edge.start()).or_default().insert(edge.end());
            neighbors.entry(edge.end()).or_default().insert(edge.start());
        }
        Self { neighbors }
    }

    /// Number of distinct vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Number of edges incident to `vertex`, zero if it is not in the lattice.
    #[must_use]
    pub fn degree(&self, vertex: &RoundedPoint) -> usize {
        self.neighbors.get(vertex).map_or(0, BTreeSet::len)
    }

    /// Iterates vertices in order together with their neighbours.
    pub fn iter(&self) -> impl Iterator<Item = (&RoundedPoint, &BTreeSet<RoundedPoint>)> {
        self.neighbors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point2;

    #[test]
    fn triangle_vertices_have_degree_two() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.0, 1.0);
        let edges = [
            CanonicalEdge::new(a, b, 3),
            CanonicalEdge::new(b, c, 3),
            CanonicalEdge::new(c, a, 3),
        ];
        let adjacency = VertexAdjacency::from_edges(&edges);
        assert_eq!(adjacency.vertex_count(), 3);
        for (vertex, _) in adjacency.iter() {
            assert_eq!(adjacency.degree(vertex), 2);
        }
    }

    #[test]
    fn unknown_vertex_has_degree_zero() {
        let adjacency = VertexAdjacency::default();
        assert_eq!(adjacency.degree(&RoundedPoint::new(Point2::origin(), 3)), 0);
    }
}
