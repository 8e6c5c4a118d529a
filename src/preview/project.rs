use crate::math::{Point2, Point3, Rotation3, Vector3, TOLERANCE};
use crate::tessellation::Triangle;

/// Share of the canvas the model spans on its tighter axis.
pub const FILL_RATIO: f64 = 0.86;

/// Yaw about Z followed by pitch about the rotated X axis.
#[must_use]
pub fn view_rotation(yaw_deg: f64, pitch_deg: f64) -> Rotation3 {
    let yaw = Rotation3::from_axis_angle(&Vector3::z_axis(), yaw_deg.to_radians());
    let pitch = Rotation3::from_axis_angle(&Vector3::x_axis(), pitch_deg.to_radians());
    pitch * yaw
}

/// Orthographic mapping from rotated model XY to canvas pixels.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    center: Point2,
    scale: f64,
    width: f64,
    height: f64,
}

impl Projection {
    /// Fits the XY bounding box of `triangles` into a `width` by `height`
    /// canvas. Returns `None` when there are no triangles.
    #[must_use]
    pub fn fit(triangles: &[Triangle], width: f64, height: f64) -> Option<Self> {
        let mut points = triangles.iter().flat_map(|t| t.vertices.iter());
        let first = points.next()?;
        let (mut min, mut max) = (first.xy(), first.xy());
        for p in points {
            min = Point2::new(min.x.min(p.x), min.y.min(p.y));
            max = Point2::new(max.x.max(p.x), max.y.max(p.y));
        }

        let span_x = clamp_span(max.x - min.x);
        let span_y = clamp_span(max.y - min.y);
        let scale = (width * FILL_RATIO / span_x).min(height * FILL_RATIO / span_y);

        Some(Self {
            center: nalgebra::center(&min, &max),
            scale,
            width,
            height,
        })
    }

    /// Canvas position of a rotated point; canvas Y grows downward.
    #[must_use]
    pub fn apply(&self, p: &Point3) -> Point2 {
        Point2::new(
            (p.x - self.center.x) * self.scale + self.width / 2.0,
            self.height / 2.0 - (p.y - self.center.y) * self.scale,
        )
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

fn clamp_span(span: f64) -> f64 {
    if span < TOLERANCE {
        1.0
    } else {
        span
    }
}
