pub mod config;
pub mod error;
pub mod lattice;
pub mod math;
pub mod operations;
pub mod preview;
pub mod stl;
pub mod tessellation;

pub use config::StencilConfig;
pub use error::{Result, StencilError};
