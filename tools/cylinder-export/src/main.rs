//! cylinder-export - tapered cylinder mesh export tool
//!
//! Tessellates cylinders and writes them as OBJ or packed `.cylmesh` files.

use anyhow::Result;
use clap::{Parser, Subcommand};
use cylinder_model::{CYLINDER_MESH_EXT, CylinderModel};
use std::path::PathBuf;

use cylinder_export::{OutputFormat, build_all, load_manifest, validate};

#[derive(Parser)]
#[command(name = "cylinder-export")]
#[command(about = "Tapered cylinder mesh export tool")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build every cylinder listed in a manifest
    Build {
        /// Path to cylinders.toml manifest
        #[arg(default_value = "cylinders.toml")]
        manifest: PathBuf,

        /// Output directory (overrides manifest)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate manifest without building
    Check {
        /// Path to cylinders.toml manifest
        #[arg(default_value = "cylinders.toml")]
        manifest: PathBuf,
    },

    /// Export a single cylinder as a packed .cylmesh file
    Mesh {
        /// Top radius as a ratio of the unit bottom radius
        #[arg(allow_negative_numbers = true)]
        top_ratio: f32,

        /// Output .cylmesh file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export a single cylinder as a Wavefront OBJ file
    Obj {
        /// Top radius as a ratio of the unit bottom radius
        #[arg(allow_negative_numbers = true)]
        top_ratio: f32,

        /// Output .obj file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print buffer sizes and bounds of a cylinder
    Info {
        /// Top radius as a ratio of the unit bottom radius
        #[arg(allow_negative_numbers = true)]
        top_ratio: f32,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build { manifest, output } => {
            tracing::info!("Building cylinders from {:?}", manifest);
            let config = load_manifest(&manifest)?;
            let written = build_all(&config, output.as_deref())?;
            tracing::info!("Build complete! {} file(s) written", written.len());
        }

        Commands::Check { manifest } => {
            let config = load_manifest(&manifest)?;
            validate(&config)?;
            tracing::info!(
                "Manifest is valid: {} cylinder(s)",
                config.cylinders.len()
            );
        }

        Commands::Mesh { top_ratio, output } => {
            let output =
                output.unwrap_or_else(|| PathBuf::from(format!("cylinder.{}", CYLINDER_MESH_EXT)));
            OutputFormat::Mesh.write(top_ratio, &output)?;
        }

        Commands::Obj { top_ratio, output } => {
            let output = output.unwrap_or_else(|| PathBuf::from("cylinder.obj"));
            OutputFormat::Obj.write(top_ratio, &output)?;
        }

        Commands::Info { top_ratio } => {
            let model: CylinderModel = CylinderModel::new(top_ratio);
            let (min, max) = model.bounding_box();
            tracing::info!("Sides: {}", model.sides());
            tracing::info!("Top ratio: {}", model.top_ratio());
            tracing::info!("Vertices: {}", model.vertex_count());
            tracing::info!(
                "Indices: {} ({} triangles)",
                model.index_count(),
                model.triangle_count()
            );
            tracing::info!("Bounds: min={:?}, max={:?}", min, max);
        }
    }

    Ok(())
}
