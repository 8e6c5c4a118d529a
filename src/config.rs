use crate::error::{ConfigError, Result};

/// Millimetres per inch.
pub const INCH: f64 = 25.4;

/// Largest supported rounding precision, in decimal places.
pub const MAX_PRECISION: u32 = 9;

/// Immutable parameters of a hex-lattice line template.
///
/// All lengths are in millimetres. The plate is centred on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StencilConfig {
    /// Plate width along X.
    pub width: f64,
    /// Plate height along Y.
    pub height: f64,
    /// Plate thickness along Z.
    pub thickness: f64,
    /// Distance between two parallel sides of one hexagon.
    pub hex_flat_to_flat: f64,
    /// Frame margin where no slots are placed.
    pub border: f64,
    /// Width of every slot.
    pub slot_width: f64,
    /// Gap kept between an edge dash and the two vertices it connects.
    pub edge_gap_from_vertex: f64,
    /// Length of each arm radiating from a vertex.
    pub vertex_arm_length: f64,
    /// Decimal places used when hashing lattice points.
    pub precision: u32,
}

impl Default for StencilConfig {
    fn default() -> Self {
        Self {
            width: 170.0,
            height: 170.0,
            thickness: 1.6,
            hex_flat_to_flat: INCH,
            border: 6.0,
            slot_width: 0.75,
            edge_gap_from_vertex: 2.2,
            vertex_arm_length: 2.4,
            precision: 3,
        }
    }
}

impl StencilConfig {
    /// Checks that every parameter describes a buildable template.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidParameter` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        positive("width", self.width)?;
        positive("height", self.height)?;
        positive("thickness", self.thickness)?;
        positive("hex_flat_to_flat", self.hex_flat_to_flat)?;
        positive("slot_width", self.slot_width)?;
        positive("vertex_arm_length", self.vertex_arm_length)?;
        non_negative("border", self.border)?;
        non_negative("edge_gap_from_vertex", self.edge_gap_from_vertex)?;

        if 2.0 * self.border >= self.width.min(self.height) {
            return Err(invalid(
                "border",
                self.border,
                "border leaves no working area",
            ));
        }
        if self.precision > MAX_PRECISION {
            return Err(invalid(
                "precision",
                f64::from(self.precision),
                "at most 9 decimal places are supported",
            ));
        }
        Ok(())
    }

    /// Side length of one hexagon.
    #[must_use]
    pub fn hex_side(&self) -> f64 {
        self.hex_flat_to_flat / 3.0_f64.sqrt()
    }

    /// Depth of a through-cut: the plate thickness plus clearance on both faces.
    #[must_use]
    pub fn cut_depth(&self) -> f64 {
        self.thickness + 0.8
    }
}

fn invalid(name: &'static str, value: f64, reason: &'static str) -> crate::error::StencilError {
    ConfigError::InvalidParameter {
        name,
        value,
        reason,
    }
    .into()
}

fn positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(name, value, "must be finite and positive"))
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(name, value, "must be finite and non-negative"))
    }
}
