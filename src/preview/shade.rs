use std::fmt;

use crate::math::Vector3;
use crate::tessellation::Triangle;

/// Direction toward the light, before normalization.
const LIGHT: [f64; 3] = [0.25, -0.35, 0.9];

/// Grey level of a face turned away from the light.
pub const BASE_LEVEL: u8 = 150;

/// Grey levels added for a face looking straight at the light.
pub const LEVEL_RANGE: f64 = 85.0;

/// An 8-bit RGB fill colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// The slightly blue-tinted grey used for a given grey level.
    #[must_use]
    pub fn plastic(level: u8) -> Self {
        Self {
            r: level,
            g: level.saturating_add(8),
            b: level.saturating_add(16),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Lambert intensity of a triangle in `[0, 1]`; faces turned away get 0.
#[must_use]
pub fn intensity(triangle: &Triangle) -> f64 {
    let light = Vector3::from(LIGHT).normalize();
    triangle.normal().dot(&light).max(0.0)
}

/// Flat-shaded fill of a triangle in the light-grey band.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn shade(triangle: &Triangle) -> Rgb {
    let level = (f64::from(BASE_LEVEL) + intensity(triangle) * LEVEL_RANGE).floor();
    Rgb::plastic(level as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point3;

    fn facing(normal_z: f64) -> Triangle {
        let c = Point3::new(0.0, 1.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        if normal_z > 0.0 {
            Triangle::new(Point3::origin(), b, c)
        } else {
            Triangle::new(Point3::origin(), c, b)
        }
    }

    #[test]
    fn upward_face_is_lit() {
        let light_z = 0.9 / (0.25_f64 * 0.25 + 0.35 * 0.35 + 0.9 * 0.9).sqrt();
        assert!((intensity(&facing(1.0)) - light_z).abs() < 1e-12);
        assert_eq!(shade(&facing(1.0)), Rgb::plastic(226));
    }

    #[test]
    fn back_face_gets_base_level() {
        assert!(intensity(&facing(-1.0)).abs() < f64::EPSILON);
        assert_eq!(shade(&facing(-1.0)), Rgb::plastic(BASE_LEVEL));
    }

    #[test]
    fn degenerate_face_is_unlit() {
        let p = Point3::new(1.0, 1.0, 1.0);
        assert_eq!(shade(&Triangle::new(p, p, p)), Rgb::plastic(BASE_LEVEL));
    }

    #[test]
    fn display_is_css_rgb() {
        assert_eq!(Rgb::plastic(200).to_string(), "rgb(200,208,216)");
    }
}
