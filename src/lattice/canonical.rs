use crate::math::Point2;

/// A 2D point snapped to a fixed decimal precision.
///
/// Coordinates are stored as integer multiples of `10^-precision`, which gives
/// the point a total order and a hash. Two corners computed independently by
/// neighbouring hexes compare equal once rounded. Ordering is lexicographic on
/// `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoundedPoint {
    x: i64,
    y: i64,
    precision: u32,
}

impl RoundedPoint {
    /// Rounds `point` to `precision` decimal places, ties to even.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(point: Point2, precision: u32) -> Self {
        let scale = scale(precision);
        Self {
            x: (point.x * scale).round_ties_even() as i64,
            y: (point.y * scale).round_ties_even() as i64,
            precision,
        }
    }

    /// Returns the rounded coordinates as a point.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_point(self) -> Point2 {
        let scale = scale(self.precision);
        Point2::new(self.x as f64 / scale, self.y as f64 / scale)
    }
}

#[allow(clippy::cast_possible_wrap)]
fn scale(precision: u32) -> f64 {
    10.0_f64.powi(precision as i32)
}

/// An undirected edge between two rounded points, smaller endpoint first.
///
/// The same physical edge produced by two neighbouring hexes collapses to a
/// single value regardless of traversal direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalEdge {
    a: RoundedPoint,
    b: RoundedPoint,
}

impl CanonicalEdge {
    /// Rounds both endpoints and orders them.
    #[must_use]
    pub fn new(p1: Point2, p2: Point2, precision: u32) -> Self {
        let a = RoundedPoint::new(p1, precision);
        let b = RoundedPoint::new(p2, precision);
        if a <= b {
            Self { a, b }
        } else {
            Self { a: b, b: a }
        }
    }

    /// The lexicographically smaller endpoint.
    #[must_use]
    pub fn start(&self) -> RoundedPoint {
        self.a
    }

    /// The lexicographically larger endpoint.
    #[must_use]
    pub fn end(&self) -> RoundedPoint {
        self.b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearby_points_round_together() {
        let p = RoundedPoint::new(Point2::new(1.000_000_1, -2.499_999_9), 3);
        let q = RoundedPoint::new(Point2::new(0.999_999_9, -2.500_000_1), 3);
        assert_eq!(p, q);
    }

    #[test]
    fn distinct_points_stay_distinct() {
        let p = RoundedPoint::new(Point2::new(1.0, 1.0), 3);
        let q = RoundedPoint::new(Point2::new(1.002, 1.0), 3);
        assert_ne!(p, q);
    }

    #[test]
    fn to_point_returns_rounded_coordinates() {
        let p = RoundedPoint::new(Point2::new(12.345_67, -0.000_4), 3).to_point();
        assert!((p.x - 12.346).abs() < 1e-12);
        assert!(p.y.abs() < 1e-12);
    }

    #[test]
    fn exact_halves_round_to_even() {
        let p = RoundedPoint::new(Point2::new(0.0625, -1.0625), 3).to_point();
        assert!((p.x - 0.062).abs() < 1e-12);
        assert!((p.y + 1.062).abs() < 1e-12);
        let q = RoundedPoint::new(Point2::new(0.0875, 2.5), 0);
        assert_eq!(q, RoundedPoint::new(Point2::new(0.0, 2.0), 0));
    }

    #[test]
    fn ordering_is_lexicographic() {
        let a = RoundedPoint::new(Point2::new(0.0, 5.0), 3);
        let b = RoundedPoint::new(Point2::new(1.0, -5.0), 3);
        let c = RoundedPoint::new(Point2::new(1.0, 0.0), 3);
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn edge_is_direction_independent() {
        let p = Point2::new(3.0, 4.0);
        let q = Point2::new(-1.0, 2.0);
        assert_eq!(CanonicalEdge::new(p, q, 3), CanonicalEdge::new(q, p, 3));
        let e = CanonicalEdge::new(p, q, 3);
        assert!(e.start() <= e.end());
        assert!((e.start().to_point().x + 1.0).abs() < 1e-12);
    }
}
