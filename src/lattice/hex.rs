use crate::math::Point2;

use super::Rect;

/// Corners of a pointy-top hexagon, counter-clockwise from 30°.
#[must_use]
pub fn hex_corners(center: Point2, side: f64) -> [Point2; 6] {
    std::array::from_fn(|i| {
        #[allow(clippy::cast_precision_loss)]
        let angle = (30.0 + 60.0 * i as f64).to_radians();
        Point2::new(
            center.x + side * angle.cos(),
            center.y + side * angle.sin(),
        )
    })
}

/// Centres of a pointy-top hex tiling covering `area` with one spare hex on
/// every side.
///
/// Centres are `flat_to_flat` apart along a row and `1.5 * side` apart between
/// rows; odd rows shift right by half a column so neighbouring hexes share
/// whole sides.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn hex_centers(area: &Rect, flat_to_flat: f64) -> Vec<Point2> {
    let side = flat_to_flat / 3.0_f64.sqrt();
    let dx = flat_to_flat;
    let dy = 1.5 * side;

    let cols = (area.width() / dx).ceil() as usize + 3;
    let rows = (area.height() / dy).ceil() as usize + 3;

    let start_x = area.min.x - dx;
    let start_y = area.min.y - dy;

    let mut centers = Vec::with_capacity(cols * rows);
    for row in 0..rows {
        let x_offset = if row % 2 == 1 { 0.5 * dx } else { 0.0 };
        let cy = start_y + row as f64 * dy;
        for col in 0..cols {
            centers.push(Point2::new(start_x + col as f64 * dx + x_offset, cy));
        }
    }
    centers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn corners_are_side_away_from_center() {
        let center = Point2::new(3.0, -2.0);
        for corner in hex_corners(center, 5.0) {
            assert!(((corner - center).norm() - 5.0).abs() < TOLERANCE);
        }
    }

    #[test]
    fn pointy_top_has_vertex_straight_up() {
        let corners = hex_corners(Point2::origin(), 2.0);
        assert!(corners[1].x.abs() < TOLERANCE);
        assert!((corners[1].y - 2.0).abs() < TOLERANCE);
        assert!((corners[4].y + 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn centers_overflow_area_on_every_side() {
        let area = Rect::new(Point2::new(-50.0, -40.0), Point2::new(50.0, 40.0));
        let centers = hex_centers(&area, 10.0);
        let min_x = centers.iter().map(|c| c.x).fold(f64::INFINITY, f64::min);
        let max_x = centers.iter().map(|c| c.x).fold(f64::NEG_INFINITY, f64::max);
        let min_y = centers.iter().map(|c| c.y).fold(f64::INFINITY, f64::min);
        let max_y = centers.iter().map(|c| c.y).fold(f64::NEG_INFINITY, f64::max);
        assert!(min_x < area.min.x && max_x > area.max.x);
        assert!(min_y < area.min.y && max_y > area.max.y);
    }

    #[test]
    fn row_neighbours_are_flat_to_flat_apart() {
        let area = Rect::new(Point2::new(0.0, 0.0), Point2::new(10.0, 10.0));
        let centers = hex_centers(&area, 4.0);
        assert!(((centers[1] - centers[0]).norm() - 4.0).abs() < TOLERANCE);
    }
}
