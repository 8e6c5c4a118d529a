mod build_template;
mod kernel;

pub use build_template::{BuildTemplate, KernelPolicy, MeshBackend, TemplateMesh};
pub use kernel::{BoxCut, Plate, SolidKernel};
