use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::{Result, StencilError};
use crate::math::{Point3, Vector3};
use crate::tessellation::Triangle;

use super::HEADER_SIZE;

/// Solid name written into ASCII output.
pub const SOLID_NAME: &str = "hex_grid_template";

/// STL encoding to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StlFormat {
    #[default]
    Ascii,
    Binary,
}

/// Writes `triangles` to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns `StencilError::Io` if the file cannot be created or written.
pub fn save<P: AsRef<Path>>(
    path: P,
    name: &str,
    triangles: &[Triangle],
    format: StlFormat,
) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| StencilError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    let written = match format {
        StlFormat::Ascii => write_ascii(&mut writer, name, triangles),
        StlFormat::Binary => write_binary(&mut writer, triangles),
    };
    written
        .and_then(|()| writer.flush())
        .map_err(|e| StencilError::io(path, e))?;

    info!(
        path = %path.display(),
        triangles = triangles.len(),
        ?format,
        "wrote STL"
    );
    Ok(())
}

/// Writes an ASCII STL document.
///
/// # Errors
///
/// Propagates any error from `writer`.
pub fn write_ascii<W: Write>(
    mut writer: W,
    name: &str,
    triangles: &[Triangle],
) -> std::io::Result<()> {
    writeln!(writer, "solid {name}")?;
    for triangle in triangles {
        let n = triangle.normal();
        writeln!(writer, "  facet normal {} {} {}", sci(n.x), sci(n.y), sci(n.z))?;
        writeln!(writer, "    outer loop")?;
        for v in &triangle.vertices {
            writeln!(writer, "      vertex {} {} {}", sci(v.x), sci(v.y), sci(v.z))?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }
    writeln!(writer, "endsolid {name}")?;
    Ok(())
}

/// Writes a binary STL document.
///
/// # Errors
///
/// Propagates any error from `writer`.
pub fn write_binary<W: Write>(mut writer: W, triangles: &[Triangle]) -> std::io::Result<()> {
    let mut header = [b' '; HEADER_SIZE];
    let text = b"binary STL written by hexstencil";
    header[..text.len()].copy_from_slice(text);
    writer.write_all(&header)?;

    let count = u32::try_from(triangles.len()).map_err(|_| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "binary STL holds at most u32::MAX triangles",
        )
    })?;
    writer.write_all(&count.to_le_bytes())?;

    for triangle in triangles {
        write_vector(&mut writer, &triangle.normal())?;
        for v in &triangle.vertices {
            write_point(&mut writer, v)?;
        }
        writer.write_all(&0u16.to_le_bytes())?;
    }
    Ok(())
}

#[allow(clippy::cast_possible_truncation)]
fn write_vector<W: Write>(writer: &mut W, v: &Vector3) -> std::io::Result<()> {
    for c in [v.x, v.y, v.z] {
        writer.write_all(&(c as f32).to_le_bytes())?;
    }
    Ok(())
}

fn write_point<W: Write>(writer: &mut W, p: &Point3) -> std::io::Result<()> {
    write_vector(writer, &p.coords)
}

/// Formats `value` as `d.dddddddde±XX`.
fn sci(value: f64) -> String {
    let raw = format!("{value:.8e}");
    match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exponent.abs())
        }
        None => raw,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn unit_triangle() -> Triangle {
        Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn sci_matches_stl_convention() {
        assert_eq!(sci(1.0), "1.00000000e+00");
        assert_eq!(sci(0.0), "0.00000000e+00");
        assert_eq!(sci(-170.5), "-1.70500000e+02");
        assert_eq!(sci(0.00125), "1.25000000e-03");
    }

    #[test]
    fn ascii_layout() {
        let mut out = Vec::new();
        write_ascii(&mut out, "demo", &[unit_triangle()]).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "solid demo",
                "  facet normal 0.00000000e+00 0.00000000e+00 1.00000000e+00",
                "    outer loop",
                "      vertex 0.00000000e+00 0.00000000e+00 0.00000000e+00",
                "      vertex 1.00000000e+00 0.00000000e+00 0.00000000e+00",
                "      vertex 0.00000000e+00 1.00000000e+00 0.00000000e+00",
                "    endloop",
                "  endfacet",
                "endsolid demo",
            ]
        );
    }

    #[test]
    fn degenerate_triangle_gets_zero_normal() {
        let p = Point3::new(2.0, 2.0, 2.0);
        let mut out = Vec::new();
        write_ascii(&mut out, "flat", &[Triangle::new(p, p, p)]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("facet normal 0.00000000e+00 0.00000000e+00 0.00000000e+00"));
    }

    #[test]
    fn binary_length_is_preamble_plus_records() {
        let mut out = Vec::new();
        write_binary(&mut out, &[unit_triangle(), unit_triangle()]).unwrap();
        assert_eq!(out.len(), 84 + 2 * 50);
        assert_eq!(&out[80..84], &2u32.to_le_bytes());
    }
}
