//! STL serialization.
//!
//! Output is ASCII by default; binary output and both input encodings are
//! supported so any slicer export can be previewed.

mod read;
mod write;

pub use read::{load, read};
pub use write::{save, write_ascii, write_binary, StlFormat, SOLID_NAME};

/// Size of the binary STL header in bytes.
pub const HEADER_SIZE: usize = 80;

/// Size of the binary header plus the triangle count.
pub const PREAMBLE_SIZE: usize = HEADER_SIZE + 4;

/// Size of one binary triangle record (normal, 3 vertices, attribute).
pub const RECORD_SIZE: usize = 50;
