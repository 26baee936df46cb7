//! Single cylinder conversion (top ratio -> file)

use anyhow::{Context, Result};
use cylinder_model::{CYLINDER_MESH_EXT, CylinderModel, write_cylinder_mesh, write_obj};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Output file kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Packed binary `.cylmesh`
    #[default]
    Mesh,
    /// Wavefront OBJ
    Obj,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Mesh => CYLINDER_MESH_EXT,
            OutputFormat::Obj => "obj",
        }
    }

    /// Write a cylinder with `top_ratio` to `output` in this format
    pub fn write(self, top_ratio: f32, output: &Path) -> Result<()> {
        match self {
            OutputFormat::Mesh => write_mesh_file(top_ratio, output),
            OutputFormat::Obj => write_obj_file(top_ratio, output),
        }
    }
}

fn create_output(output: &Path) -> Result<BufWriter<File>> {
    let file =
        File::create(output).with_context(|| format!("Failed to create output: {:?}", output))?;
    Ok(BufWriter::new(file))
}

/// Write a cylinder as a packed `.cylmesh` file
pub fn write_mesh_file(top_ratio: f32, output: &Path) -> Result<()> {
    let model: CylinderModel = CylinderModel::new(top_ratio);

    let mut writer = create_output(output)?;
    write_cylinder_mesh(&mut writer, &model)
        .with_context(|| format!("Failed to write mesh: {:?}", output))?;
    writer.flush()?;

    tracing::info!(
        "Wrote cylinder mesh: top_ratio={}, {} vertices, {} indices -> {:?}",
        top_ratio,
        model.vertex_count(),
        model.index_count(),
        output
    );

    Ok(())
}

/// Write a cylinder as a Wavefront OBJ file
///
/// The OBJ object is named after the output file stem.
pub fn write_obj_file(top_ratio: f32, output: &Path) -> Result<()> {
    let model: CylinderModel = CylinderModel::new(top_ratio);
    let name = output
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("cylinder");

    let mut writer = create_output(output)?;
    write_obj(&mut writer, &model, name)
        .with_context(|| format!("Failed to write OBJ: {:?}", output))?;
    writer.flush()?;

    tracing::info!(
        "Wrote cylinder OBJ: top_ratio={}, {} vertices, {} triangles -> {:?}",
        top_ratio,
        model.vertex_count(),
        model.triangle_count(),
        output
    );

    Ok(())
}
