//! Wavefront OBJ export

use std::io::{self, Write};

use crate::model::CylinderModel;

/// Write `model` as a Wavefront OBJ object named `name`
///
/// Positions, UVs and normals share one index per vertex, so every face
/// corner is written as `v/v/v`. OBJ texture space grows upward, so V is
/// flipped on the way out.
pub fn write_obj<W: Write, const SIDES: usize>(
    w: &mut W,
    model: &CylinderModel<SIDES>,
    name: &str,
) -> io::Result<()> {
    writeln!(w, "# Tapered cylinder")?;
    writeln!(
        w,
        "# sides: {}, top ratio: {}, vertices: {}, triangles: {}",
        model.sides(),
        model.top_ratio(),
        model.vertex_count(),
        model.triangle_count()
    )?;
    writeln!(w, "o {}", name)?;

    for [x, y, z] in model.positions() {
        writeln!(w, "v {} {} {}", x, y, z)?;
    }
    for [u, v] in model.tex_coords() {
        writeln!(w, "vt {} {}", u, 1.0 - v)?;
    }
    for [x, y, z] in model.normals() {
        writeln!(w, "vn {} {} {}", x, y, z)?;
    }

    for [a, b, c] in model.triangles() {
        let (a, b, c) = (a as u32 + 1, b as u32 + 1, c as u32 + 1);
        writeln!(w, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
    }

    Ok(())
}
