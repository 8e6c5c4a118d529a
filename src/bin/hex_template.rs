//! Generates a hex-lattice line template as an STL file.
//!
//! ```text
//! hex-template                                  # defaults, ASCII STL
//! hex-template out.stl --hex-spacing 20 --border 8
//! hex-template --backend solid --fallback       # solid if available, else mesh
//! ```
//!
//! Logging defaults to WARN, INFO for hexstencil; override with `RUST_LOG`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use hexstencil::operations::{BuildTemplate, KernelPolicy, MeshBackend};
use hexstencil::stl::{self, StlFormat, SOLID_NAME};
use hexstencil::StencilConfig;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Backend {
    /// Slots subtracted from a solid plate (needs a solid kernel).
    Solid,
    /// One box per slot, no boolean operations.
    Mesh,
}

/// Generate a hex-grid drawing template.
#[derive(Debug, Parser)]
#[command(name = "hex-template", version)]
struct Cli {
    /// Output STL path.
    #[arg(default_value = "hex_grid_template_1in_a1mini.stl")]
    output: PathBuf,

    /// Plate width in mm.
    #[arg(long)]
    width: Option<f64>,

    /// Plate height in mm.
    #[arg(long)]
    height: Option<f64>,

    /// Plate thickness in mm.
    #[arg(long)]
    thickness: Option<f64>,

    /// Hex flat-to-flat spacing in mm.
    #[arg(long)]
    hex_spacing: Option<f64>,

    /// Frame margin without slots, in mm.
    #[arg(long)]
    border: Option<f64>,

    /// Slot width in mm.
    #[arg(long)]
    slot_width: Option<f64>,

    /// Gap between an edge dash and its vertices, in mm.
    #[arg(long)]
    edge_gap: Option<f64>,

    /// Length of each vertex arm, in mm.
    #[arg(long)]
    arm_length: Option<f64>,

    /// Decimal places used to merge lattice points.
    #[arg(long)]
    precision: Option<u32>,

    /// Geometry backend.
    #[arg(long, value_enum, default_value_t = Backend::Mesh)]
    backend: Backend,

    /// Fall back to the mesh backend when no solid kernel is available.
    #[arg(long)]
    fallback: bool,

    /// Write binary instead of ASCII STL.
    #[arg(long)]
    binary: bool,
}

impl Cli {
    fn config(&self) -> StencilConfig {
        let defaults = StencilConfig::default();
        StencilConfig {
            width: self.width.unwrap_or(defaults.width),
            height: self.height.unwrap_or(defaults.height),
            thickness: self.thickness.unwrap_or(defaults.thickness),
            hex_flat_to_flat: self.hex_spacing.unwrap_or(defaults.hex_flat_to_flat),
            border: self.border.unwrap_or(defaults.border),
            slot_width: self.slot_width.unwrap_or(defaults.slot_width),
            edge_gap_from_vertex: self.edge_gap.unwrap_or(defaults.edge_gap_from_vertex),
            vertex_arm_length: self.arm_length.unwrap_or(defaults.vertex_arm_length),
            precision: self.precision.unwrap_or(defaults.precision),
        }
    }
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("hexstencil=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = cli.config();

    let backend = match cli.backend {
        Backend::Solid => MeshBackend::SolidCsg,
        Backend::Mesh => MeshBackend::DirectTriangulation,
    };
    let policy = if cli.fallback {
        KernelPolicy::FallbackToMesh
    } else {
        KernelPolicy::Require
    };

    let mesh = BuildTemplate::new(&config)
        .with_backend(backend)
        .with_policy(policy)
        .execute()
        .context("failed to build template")?;

    let format = if cli.binary {
        StlFormat::Binary
    } else {
        StlFormat::Ascii
    };
    stl::save(&cli.output, SOLID_NAME, &mesh.triangles, format)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    println!(
        "Wrote {} using backend={:?}",
        cli.output.display(),
        mesh.backend
    );
    Ok(())
}
