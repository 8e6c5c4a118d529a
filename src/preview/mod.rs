//! SVG previews of triangle meshes.
//!
//! The mesh is rotated into a fixed oblique view, flat shaded, projected
//! orthographically and painted back to front. There is no depth buffer, so
//! interpenetrating faces may overlap incorrectly; for thin extruded parts
//! this is not visible at preview resolution.

mod project;
mod shade;

pub use project::{view_rotation, Projection, FILL_RATIO};
pub use shade::{intensity, shade, Rgb, BASE_LEVEL, LEVEL_RANGE};

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::{RenderError, Result, StencilError};
use crate::math::Point2;
use crate::tessellation::Triangle;

/// Canvas size and view angles of a preview.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewOptions {
    pub width: u32,
    pub height: u32,
    /// Rotation about Z, in degrees.
    pub yaw_deg: f64,
    /// Rotation about the rotated X axis, in degrees.
    pub pitch_deg: f64,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            width: 1400,
            height: 900,
            yaw_deg: -36.0,
            pitch_deg: -58.0,
        }
    }
}

/// A triangle ready to paint.
#[derive(Debug, Clone, Copy)]
pub struct ShadedTriangle {
    /// The triangle after the view rotation.
    pub rotated: Triangle,
    /// Mean rotated Z of the three vertices.
    pub depth: f64,
    pub fill: Rgb,
    /// Canvas positions of the three vertices.
    pub points: [Point2; 3],
}

/// A depth-sorted, shaded and projected mesh.
#[derive(Debug, Clone)]
pub struct PreviewScene {
    width: u32,
    height: u32,
    triangles: Vec<ShadedTriangle>,
}

impl PreviewScene {
    /// Rotates, shades, projects and depth-sorts `triangles`.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::EmptyMesh` if `triangles` is empty.
    pub fn build(triangles: &[Triangle], options: &PreviewOptions) -> Result<Self> {
        let rotation = view_rotation(options.yaw_deg, options.pitch_deg);
        let rotated: Vec<Triangle> = triangles.iter().map(|t| t.map(|p| rotation * p)).collect();

        let projection = Projection::fit(
            &rotated,
            f64::from(options.width),
            f64::from(options.height),
        )
        .ok_or(RenderError::EmptyMesh)?;

        let mut shaded: Vec<ShadedTriangle> = rotated
            .into_iter()
            .map(|t| ShadedTriangle {
                depth: t.vertices.iter().map(|v| v.z).sum::<f64>() / 3.0,
                fill: shade(&t),
                points: t.vertices.each_ref().map(|v| projection.apply(v)),
                rotated: t,
            })
            .collect();
        shaded.sort_by(|a, b| a.depth.total_cmp(&b.depth));

        Ok(Self {
            width: options.width,
            height: options.height,
            triangles: shaded,
        })
    }

    /// Triangles in paint order, farthest first.
    #[must_use]
    pub fn triangles(&self) -> &[ShadedTriangle] {
        &self.triangles
    }

    /// Renders the scene as an SVG document.
    #[must_use]
    pub fn to_svg(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PreviewScene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (width, height) = (self.width, self.height);
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        )?;
        writeln!(f, r#"  <rect width="100%" height="100%" fill="white"/>"#)?;
        for triangle in &self.triangles {
            let [p0, p1, p2] = triangle.points;
            writeln!(
                f,
                r#"  <polygon points="{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}" fill="{}" stroke="rgba(75,85,99,0.30)" stroke-width="0.45"/>"#,
                p0.x, p0.y, p1.x, p1.y, p2.x, p2.y, triangle.fill
            )?;
        }
        writeln!(f, "</svg>")
    }
}

/// Renders `triangles` to an SVG file at `path`, creating parent directories.
///
/// # Errors
///
/// Returns `RenderError::EmptyMesh` for an empty mesh, or `StencilError::Io`
/// if the file cannot be written.
pub fn render<P: AsRef<Path>>(
    triangles: &[Triangle],
    path: P,
    options: &PreviewOptions,
) -> Result<()> {
    let path = path.as_ref();
    let scene = PreviewScene::build(triangles, options)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| StencilError::io(parent, e))?;
    }
    let file = File::create(path).map_err(|e| StencilError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    let written = write!(writer, "{scene}");
    written
        .and_then(|()| writer.flush())
        .map_err(|e| StencilError::io(path, e))?;

    info!(
        path = %path.display(),
        triangles = scene.triangles.len(),
        "wrote preview"
    );
    Ok(())
}
