//! Renders an STL file to a README-friendly SVG preview.
//!
//! ```text
//! stl-preview                                   # default template -> assets/
//! stl-preview part.stl docs/part.svg --yaw -20 --pitch -45
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use hexstencil::preview::{self, PreviewOptions};
use hexstencil::stl;

/// Render an STL file to an SVG preview.
#[derive(Debug, Parser)]
#[command(name = "stl-preview", version)]
struct Cli {
    /// Input STL file, ASCII or binary.
    #[arg(default_value = "hex_grid_template_1in_a1mini.stl")]
    stl: PathBuf,

    /// Output SVG path.
    #[arg(default_value = "assets/hex_grid_template_preview.svg")]
    output: PathBuf,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = PreviewOptions::default().width)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = PreviewOptions::default().height)]
    height: u32,

    /// Rotation about Z in degrees.
    #[arg(long, allow_negative_numbers = true, default_value_t = PreviewOptions::default().yaw_deg)]
    yaw: f64,

    /// Rotation about the rotated X axis in degrees.
    #[arg(long, allow_negative_numbers = true, default_value_t = PreviewOptions::default().pitch_deg)]
    pitch: f64,
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

    let triangles =
        stl::load(&cli.stl).with_context(|| format!("failed to read {}", cli.stl.display()))?;

    let options = PreviewOptions {
        width: cli.width,
        height: cli.height,
        yaw_deg: cli.yaw,
        pitch_deg: cli.pitch,
    };
    preview::render(&triangles, &cli.output, &options)
        .with_context(|| format!("failed to render {}", cli.output.display()))?;

    println!("Wrote preview image: {}", cli.output.display());
    Ok(())
}
