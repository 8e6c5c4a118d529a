use crate::error::Result;
use crate::lattice::Segment;
use crate::math::Point2;
use crate::tessellation::Triangle;

/// The uncut template plate, centred on the origin with its mid-plane at `z = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plate {
    pub width: f64,
    pub height: f64,
    pub thickness: f64,
}

/// An oriented box to subtract from the plate, centred at `z = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxCut {
    pub center: Point2,
    /// Extent along the cut direction.
    pub length: f64,
    /// Extent across the cut direction.
    pub width: f64,
    /// Extent along Z.
    pub depth: f64,
    /// Rotation about Z, in degrees.
    pub angle_deg: f64,
}

impl BoxCut {
    /// A through-cut of `width` and `depth` along `segment`.
    #[must_use]
    pub fn from_segment(segment: &Segment, width: f64, depth: f64) -> Self {
        Self {
            center: segment.center,
            length: segment.length,
            width,
            depth,
            angle_deg: segment.angle_deg,
        }
    }
}

/// A solid-modelling backend able to subtract boxes from a plate.
///
/// Implementations own their boolean algorithm; the template pipeline only
/// needs the resulting boundary as triangles.
pub trait SolidKernel {
    /// Short name used in log output.
    fn name(&self) -> &str;

    /// Returns the boundary of `plate` minus every box in `cuts`.
    ///
    /// # Errors
    ///
    /// Implementations report failures as `BackendError::Kernel`.
    fn subtract_boxes(&self, plate: &Plate, cuts: &[BoxCut]) -> Result<Vec<Triangle>>;
}
