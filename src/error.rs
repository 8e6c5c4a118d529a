use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for hexstencil.
#[derive(Debug, Error)]
pub enum StencilError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Stl(#[from] StlError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StencilError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors related to template configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("parameter {name} = {value} is invalid: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// Errors related to choosing or running a geometry backend.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("solid CSG backend requested but no solid kernel is available")]
    MissingBackend,

    #[error("solid kernel failed: {0}")]
    Kernel(String),
}

/// Errors related to STL decoding.
#[derive(Debug, Error)]
pub enum StlError {
    #[error("binary STL needs at least 84 bytes, got {0}")]
    TooShort(usize),

    #[error("binary STL truncated: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("invalid vertex on line {line}: {reason}")]
    InvalidVertex { line: usize, reason: String },
}

/// Errors related to preview rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("no triangles to render")]
    EmptyMesh,
}

/// Convenience type alias for results using [`StencilError`].
pub type Result<T> = std::result::Result<T, StencilError>;
