//! Manifest parsing and build orchestration
//!
//! Parses cylinders.toml and writes one file per entry.
//!
//! ```toml
//! [output]
//! dir = "assets/"
//!
//! [cylinders]
//! can = 1.0
//! cone = { top_ratio = 0.0, format = "obj" }
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::convert::OutputFormat;

/// Root manifest structure
#[derive(Debug, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub cylinders: BTreeMap<String, CylinderEntry>,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("assets/")
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CylinderEntry {
    Simple(f32),
    Detailed(DetailedEntry),
}

/// Table form of a cylinder entry
///
/// Unknown keys are rejected so a misspelled `format` does not silently
/// fall back to the default output.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DetailedEntry {
    pub top_ratio: f32,
    #[serde(default)]
    pub format: OutputFormat,
}

impl CylinderEntry {
    pub fn top_ratio(&self) -> f32 {
        match self {
            CylinderEntry::Simple(r) => *r,
            CylinderEntry::Detailed(entry) => entry.top_ratio,
        }
    }

    pub fn format(&self) -> OutputFormat {
        match self {
            CylinderEntry::Simple(_) => OutputFormat::default(),
            CylinderEntry::Detailed(entry) => entry.format,
        }
    }
}

/// Load and parse a manifest file
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest: {:?}", path))?;
    let manifest: Manifest = toml::from_str(&content)
        .with_context(|| format!("Failed to parse manifest: {:?}", path))?;
    Ok(manifest)
}

/// Validate a manifest without building
///
/// Non-finite ratios are rejected. Ratios at or below zero still build
/// (a cone or a mirrored top) but are reported.
pub fn validate(manifest: &Manifest) -> Result<()> {
    for (name, entry) in &manifest.cylinders {
        let ratio = entry.top_ratio();
        if !ratio.is_finite() {
            anyhow::bail!("Cylinder '{}' has a non-finite top ratio: {}", name, ratio);
        }
        if ratio <= 0.0 {
            tracing::warn!(
                "Cylinder '{}' has top ratio {}, the top rim will be degenerate or inverted",
                name,
                ratio
            );
        }
    }
    Ok(())
}

/// Build all cylinders from a manifest, returning the written paths
pub fn build_all(manifest: &Manifest, output_override: Option<&Path>) -> Result<Vec<PathBuf>> {
    validate(manifest)?;

    let output_dir = output_override.unwrap_or(&manifest.output.dir);
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output dir: {:?}", output_dir))?;

    let mut written = Vec::with_capacity(manifest.cylinders.len());
    for (name, entry) in &manifest.cylinders {
        let format = entry.format();
        let output = output_dir.join(format!("{}.{}", name, format.extension()));
        tracing::info!("Building cylinder: {} -> {:?}", name, output);

        format
            .write(entry.top_ratio(), &output)
            .with_context(|| format!("Failed to build cylinder '{}'", name))?;
        written.push(output);
    }

    Ok(written)
}
