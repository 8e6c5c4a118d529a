use tracing::{info, warn};

use crate::config::StencilConfig;
use crate::error::{BackendError, Result};
use crate::lattice::{DeriveLattice, LatticeGeometry};
use crate::tessellation::{triangulate_segments, Triangle};

use super::kernel::{BoxCut, Plate, SolidKernel};

/// How lattice segments become mesh geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MeshBackend {
    /// Subtract every segment as a slot from a solid plate.
    SolidCsg,
    /// Emit every segment directly as a standalone box.
    #[default]
    DirectTriangulation,
}

/// What to do when [`MeshBackend::SolidCsg`] is requested without a kernel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KernelPolicy {
    /// Fail with `BackendError::MissingBackend`.
    #[default]
    Require,
    /// Fall back to [`MeshBackend::DirectTriangulation`].
    FallbackToMesh,
}

/// The generated template.
#[derive(Debug, Clone)]
pub struct TemplateMesh {
    pub triangles: Vec<Triangle>,
    /// The backend that actually produced `triangles`.
    pub backend: MeshBackend,
    pub geometry: LatticeGeometry,
}

/// Builds the template mesh for a configuration.
pub struct BuildTemplate<'a> {
    config: &'a StencilConfig,
    backend: MeshBackend,
    policy: KernelPolicy,
    kernel: Option<&'a dyn SolidKernel>,
}

impl<'a> BuildTemplate<'a> {
    /// Creates a new `BuildTemplate` operation using direct triangulation.
    #[must_use]
    pub fn new(config: &'a StencilConfig) -> Self {
        Self {
            config,
            backend: MeshBackend::default(),
            policy: KernelPolicy::default(),
            kernel: None,
        }
    }

    #[must_use]
    pub fn with_backend(mut self, backend: MeshBackend) -> Self {
        self.backend = backend;
        self
    }

    #[must_use]
    pub fn with_policy(mut self, policy: KernelPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Registers the solid kernel used by [`MeshBackend::SolidCsg`].
    #[must_use]
    pub fn with_kernel(mut self, kernel: &'a dyn SolidKernel) -> Self {
        self.kernel = Some(kernel);
        self
    }

    /// Executes the build.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, if a solid kernel is
    /// required but missing, or if the kernel fails.
    pub fn execute(&self) -> Result<TemplateMesh> {
        let geometry = DeriveLattice::new(self.config).execute()?;

        let (triangles, backend) = match (self.backend, self.kernel) {
            (MeshBackend::SolidCsg, Some(kernel)) => {
                (self.subtract(kernel, &geometry)?, MeshBackend::SolidCsg)
            }
            (MeshBackend::SolidCsg, None) => match self.policy {
                KernelPolicy::Require => return Err(BackendError::MissingBackend.into()),
                KernelPolicy::FallbackToMesh => {
                    warn!("no solid kernel available, falling back to direct triangulation");
                    (self.triangulate(&geometry), MeshBackend::DirectTriangulation)
                }
            },
            (MeshBackend::DirectTriangulation, _) => {
                (self.triangulate(&geometry), MeshBackend::DirectTriangulation)
            }
        };

        info!(
            ?backend,
            segments = geometry.segment_count(),
            triangles = triangles.len(),
            "built template mesh"
        );
        Ok(TemplateMesh {
            triangles,
            backend,
            geometry,
        })
    }

    fn triangulate(&self, geometry: &LatticeGeometry) -> Vec<Triangle> {
        triangulate_segments(
            geometry.segments(),
            self.config.slot_width,
            self.config.thickness,
        )
    }

    fn subtract(
        &self,
        kernel: &dyn SolidKernel,
        geometry: &LatticeGeometry,
    ) -> Result<Vec<Triangle>> {
        let config = self.config;
        let plate = Plate {
            width: config.width,
            height: config.height,
            thickness: config.thickness,
        };
        let cuts: Vec<BoxCut> = geometry
            .segments()
            .map(|s| BoxCut::from_segment(s, config.slot_width, config.cut_depth()))
            .collect();
        info!(kernel = kernel.name(), cuts = cuts.len(), "subtracting slots");
        kernel.subtract_boxes(&plate, &cuts)
    }
}
