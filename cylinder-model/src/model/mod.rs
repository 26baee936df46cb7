//! Tapered cylinder tessellation
//!
//! A [`CylinderModel`] is built once from its top radius ratio and exposes its
//! buffers read-only for the rest of its lifetime.
//!
//! # Vertex layout
//! ```text
//! [0, SIDES)          bottom rim, angle 0 first, counter-clockwise
//! [SIDES, 2*SIDES)    top rim, same angular order
//! 2*SIDES             bottom cap center
//! 2*SIDES + 1         top cap center
//! ```
//!
//! Each side emits 12 indices: two lateral triangles, one bottom fan slice and
//! one top fan slice. The last side wraps back to side 0.

use std::f64::consts::PI;

use bytemuck::cast_slice;
use glam::Vec3;
use tracing::debug;

use crate::builder::MeshBuilderUV;
use crate::constants::{
    DEFAULT_SIDES, MAX_SIDES, bottom_center, index_count, top_center, vertex_count,
};
use crate::packing::CylinderVertex;

/// Closed cylinder with a unit bottom radius at z=0 and a top radius of
/// `top_ratio` at z=1
///
/// `SIDES` is the tessellation density. It is fixed at compile time and must
/// keep every vertex index within u16.
///
/// The top ratio is not validated: zero collapses the top rim into a cone
/// apex, negative values mirror the top rim through the axis, and NaN or
/// infinity flow straight into the top rim buffers.
///
/// Side counts outside `1..=MAX_SIDES` are rejected when `new` is
/// instantiated:
///
/// ```compile_fail
/// use cylinder_model::CylinderModel;
///
/// let _ = CylinderModel::<0>::new(1.0);
/// ```
///
/// ```compile_fail
/// use cylinder_model::CylinderModel;
///
/// let _ = CylinderModel::<32768>::new(1.0);
/// ```
///
/// The largest side count still fits u16 indices:
///
/// ```
/// use cylinder_model::CylinderModel;
/// use cylinder_model::constants::MAX_SIDES;
///
/// let model = CylinderModel::<MAX_SIDES>::new(1.0);
/// assert_eq!(model.indices().iter().copied().max(), Some(u16::MAX));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CylinderModel<const SIDES: usize = DEFAULT_SIDES> {
    top_ratio: f32,
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    tex_coords: Vec<[f32; 2]>,
    indices: Vec<u16>,
}

impl<const SIDES: usize> CylinderModel<SIDES> {
    /// Tessellate a cylinder whose top radius is `top_ratio` times the bottom radius
    pub fn new(top_ratio: f32) -> Self {
        const {
            assert!(
                SIDES >= 1 && SIDES <= MAX_SIDES,
                "cylinder side count must be in 1..=MAX_SIDES"
            )
        };

        let vertex_count = vertex_count(SIDES);
        let bottom_center = bottom_center(SIDES);
        let top_center = top_center(SIDES);
        let delta_tex = 1.0 / SIDES as f64;

        let mut positions = vec![[0.0f32; 3]; vertex_count];
        let mut normals = vec![[0.0f32; 3]; vertex_count];
        let mut tex_coords = vec![[0.0f32; 2]; vertex_count];
        let mut indices = Vec::with_capacity(index_count(SIDES));

        for i in 0..SIDES {
            let angle = 2.0 * PI * i as f64 / SIDES as f64;
            let x = angle.cos() as f32;
            let y = angle.sin() as f32;
            let top = i + SIDES;

            positions[i] = [x, y, 0.0];
            positions[top] = [top_ratio * x, top_ratio * y, 1.0];

            // Tangent rotated a quarter turn, not the true slant normal
            normals[i] = [y, -x, 0.0];
            normals[top] = [top_ratio * y, -(top_ratio * x), 0.0];

            let u = (i as f64 * delta_tex) as f32;
            tex_coords[i] = [u, 1.0];
            tex_coords[top] = [u, 0.0];

            let i1 = (i + 1) % SIDES;
            let side = [
                // Lateral quad: b0 b1 t1, t1 t0 b0
                i,
                i1,
                i1 + SIDES,
                i1 + SIDES,
                top,
                i,
                // Bottom cap fan slice
                i1,
                i,
                bottom_center,
                // Top cap fan slice
                top,
                i1 + SIDES,
                top_center,
            ];
            indices.extend(side.iter().map(|&index| index as u16));
        }

        positions[bottom_center] = [0.0, 0.0, 0.0];
        normals[bottom_center] = [0.0, 0.0, -1.0];
        tex_coords[bottom_center] = [0.5, 0.5];

        positions[top_center] = [0.0, 0.0, 1.0];
        normals[top_center] = [0.0, 0.0, 1.0];
        tex_coords[top_center] = [0.5, 0.5];

        debug!(
            "Tessellated cylinder: sides={}, top_ratio={}, {} vertices, {} indices",
            SIDES,
            top_ratio,
            positions.len(),
            indices.len()
        );

        Self {
            top_ratio,
            positions,
            normals,
            tex_coords,
            indices,
        }
    }

    /// Number of sides around the circumference
    #[inline]
    pub const fn sides(&self) -> usize {
        SIDES
    }

    /// Top radius relative to the unit bottom radius
    #[inline]
    pub fn top_ratio(&self) -> f32 {
        self.top_ratio
    }

    /// Get vertex count
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get index count
    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Get triangle count
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Vertex positions as [x, y, z]
    #[inline]
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    /// Vertex normals as [x, y, z]
    #[inline]
    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    /// Texture coordinates as [u, v]
    #[inline]
    pub fn tex_coords(&self) -> &[[f32; 2]] {
        &self.tex_coords
    }

    /// Triangle list indices, 3 per triangle
    #[inline]
    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    /// Positions as a flat x,y,z,x,y,z... slice
    #[inline]
    pub fn positions_flat(&self) -> &[f32] {
        cast_slice(&self.positions)
    }

    /// Normals as a flat x,y,z,x,y,z... slice
    #[inline]
    pub fn normals_flat(&self) -> &[f32] {
        cast_slice(&self.normals)
    }

    /// Texture coordinates as a flat u,v,u,v... slice
    #[inline]
    pub fn tex_coords_flat(&self) -> &[f32] {
        cast_slice(&self.tex_coords)
    }

    /// Raw position bytes for buffer upload (12 bytes per vertex)
    #[inline]
    pub fn position_bytes(&self) -> &[u8] {
        cast_slice(&self.positions)
    }

    /// Raw normal bytes for buffer upload (12 bytes per vertex)
    #[inline]
    pub fn normal_bytes(&self) -> &[u8] {
        cast_slice(&self.normals)
    }

    /// Raw texture coordinate bytes for buffer upload (8 bytes per vertex)
    #[inline]
    pub fn tex_coord_bytes(&self) -> &[u8] {
        cast_slice(&self.tex_coords)
    }

    /// Raw index bytes for buffer upload (2 bytes per index)
    #[inline]
    pub fn index_bytes(&self) -> &[u8] {
        cast_slice(&self.indices)
    }

    /// Returns the three vertex indices of triangle `t`
    #[inline]
    pub fn triangle(&self, t: usize) -> [u16; 3] {
        let base = t * 3;
        [
            self.indices[base],
            self.indices[base + 1],
            self.indices[base + 2],
        ]
    }

    /// Iterate over all triangles in index order
    pub fn triangles(&self) -> impl Iterator<Item = [u16; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// Returns the position of vertex `i` as a Vec3
    #[inline]
    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::from_array(self.positions[i])
    }

    /// Returns the normal of vertex `i` as a Vec3
    #[inline]
    pub fn normal(&self, i: usize) -> Vec3 {
        Vec3::from_array(self.normals[i])
    }

    /// Axis-aligned bounding box as (min, max)
    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        self.positions.iter().map(|&p| Vec3::from_array(p)).fold(
            (Vec3::splat(f32::INFINITY), Vec3::splat(f32::NEG_INFINITY)),
            |(min, max), p| (min.min(p), max.max(p)),
        )
    }

    /// Interleaved position/normal/uv vertices in vertex order
    pub fn interleaved(&self) -> Vec<CylinderVertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.tex_coords)
            .map(|((&position, &normal), &uv)| CylinderVertex {
                position,
                normal,
                uv,
            })
            .collect()
    }

    /// Replay the cylinder into any UV mesh sink
    ///
    /// Vertices are added in vertex order, so the sink's indices line up with
    /// this model's index buffer.
    pub fn build<M: MeshBuilderUV>(&self) -> M {
        let mut mesh = M::default();

        for ((&position, &normal), &uv) in self
            .positions
            .iter()
            .zip(&self.normals)
            .zip(&self.tex_coords)
        {
            mesh.add_vertex_uv(
                Vec3::from_array(position),
                (uv[0], uv[1]),
                Vec3::from_array(normal),
            );
        }

        for [i0, i1, i2] in self.triangles() {
            mesh.add_triangle(i0, i1, i2);
        }

        mesh
    }
}
