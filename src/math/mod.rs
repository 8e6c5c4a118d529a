/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 3D rotation type.
pub type Rotation3 = nalgebra::Rotation3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Unit normal of the triangle `(a, b, c)` following the right-hand rule.
///
/// Returns the zero vector for degenerate triangles.
#[must_use]
pub fn face_normal(a: &Point3, b: &Point3, c: &Point3) -> Vector3 {
    let n = (b - a).cross(&(c - a));
    let len = n.norm();
    if len < TOLERANCE {
        return Vector3::zeros();
    }
    n / len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_of_ccw_xy_triangle_is_up() {
        let n = face_normal(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(1.0, 0.0, 0.0),
            &Point3::new(0.0, 1.0, 0.0),
        );
        assert!((n.z - 1.0).abs() < TOLERANCE);
        assert!(n.x.abs() < TOLERANCE && n.y.abs() < TOLERANCE);
    }

    #[test]
    fn degenerate_triangle_has_zero_normal() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let n = face_normal(&p, &p, &Point3::new(2.0, 4.0, 6.0));
        assert_eq!(n, Vector3::zeros());
    }
}
