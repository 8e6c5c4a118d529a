use std::path::Path;

use tracing::debug;

use crate::error::{Result, StencilError, StlError};
use crate::math::Point3;
use crate::tessellation::Triangle;

use super::{HEADER_SIZE, PREAMBLE_SIZE, RECORD_SIZE};

/// Reads an STL file from disk.
///
/// # Errors
///
/// Returns `StencilError::Io` if the file cannot be read, or an [`StlError`]
/// if its content is malformed.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Triangle>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| StencilError::io(path, e))?;
    read(&bytes)
}

/// Decodes ASCII or binary STL bytes into triangles.
///
/// Input starting with `solid` is tried as ASCII first. Binary files whose
/// header happens to start with `solid` either fail UTF-8 decoding or yield no
/// `vertex` lines, and fall through to the binary decoder.
///
/// # Errors
///
/// Returns an [`StlError`] if an ASCII vertex line is malformed or the binary
/// layout is truncated.
pub fn read(bytes: &[u8]) -> Result<Vec<Triangle>> {
    if bytes.len() >= 5 && bytes[..5].eq_ignore_ascii_case(b"solid") {
        if let Ok(text) = std::str::from_utf8(bytes) {
            let triangles = parse_ascii(text)?;
            if !triangles.is_empty() {
                debug!(triangles = triangles.len(), "decoded ASCII STL");
                return Ok(triangles);
            }
        }
    }
    let triangles = parse_binary(bytes)?;
    debug!(triangles = triangles.len(), "decoded binary STL");
    Ok(triangles)
}

fn parse_ascii(text: &str) -> Result<Vec<Triangle>> {
    let mut triangles = Vec::new();
    let mut pending: Vec<Point3> = Vec::with_capacity(3);

    // `lines` leaves bare carriage returns in place; old Mac files use them alone.
    for (index, line) in text.lines().flat_map(|l| l.split('\r')).enumerate() {
        let mut tokens = line.split_whitespace();
        if !tokens
            .next()
            .is_some_and(|t| t.eq_ignore_ascii_case("vertex"))
        {
            continue;
        }
        pending.push(parse_vertex(tokens, index + 1)?);
        if pending.len() == 3 {
            triangles.push(Triangle::new(pending[0], pending[1], pending[2]));
            pending.clear();
        }
    }
    Ok(triangles)
}

fn parse_vertex<'a>(mut tokens: impl Iterator<Item = &'a str>, line: usize) -> Result<Point3> {
    let mut coords = [0.0; 3];
    for coord in &mut coords {
        let token = tokens.next().ok_or_else(|| StlError::InvalidVertex {
            line,
            reason: "expected three coordinates".to_owned(),
        })?;
        *coord = token.parse::<f64>().map_err(|e| StlError::InvalidVertex {
            line,
            reason: format!("{token:?}: {e}"),
        })?;
    }
    Ok(Point3::from(coords))
}

fn parse_binary(bytes: &[u8]) -> Result<Vec<Triangle>> {
    if bytes.len() < PREAMBLE_SIZE {
        return Err(StlError::TooShort(bytes.len()).into());
    }

    let count = u32::from_le_bytes([
        bytes[HEADER_SIZE],
        bytes[HEADER_SIZE + 1],
        bytes[HEADER_SIZE + 2],
        bytes[HEADER_SIZE + 3],
    ]);
    let expected = usize::try_from(count)
        .ok()
        .and_then(|n| n.checked_mul(RECORD_SIZE))
        .and_then(|n| n.checked_add(PREAMBLE_SIZE))
        .unwrap_or(usize::MAX);
    if bytes.len() < expected {
        return Err(StlError::Truncated {
            expected,
            actual: bytes.len(),
        }
        .into());
    }

    Ok(bytes[PREAMBLE_SIZE..expected]
        .chunks_exact(RECORD_SIZE)
        .map(|record| {
            // Skip the 12-byte normal and the trailing attribute word.
            Triangle::new(
                read_point(&record[12..24]),
                read_point(&record[24..36]),
                read_point(&record[36..48]),
            )
        })
        .collect())
}

fn read_point(buf: &[u8]) -> Point3 {
    let f = |i: usize| {
        f64::from(f32::from_le_bytes([buf[i], buf[i + 1], buf[i + 2], buf[i + 3]]))
    };
    Point3::new(f(0), f(4), f(8))
}
