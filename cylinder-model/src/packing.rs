//! Vertex data packing
//!
//! Two vertex layouts are produced from a [`CylinderModel`]:
//! - Unpacked: [`CylinderVertex`], Float32x3 position + Float32x3 normal +
//!   Float32x2 UV (32 bytes)
//! - Packed: [`PackedVertex`], Float16x4 position + Unorm16x2 UV +
//!   octahedral u32 normal (16 bytes), in that order
//!
//! The packed layout normalizes normals during octahedral encoding, so the
//! top-ratio scaling of top rim normals does not survive packing.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};
use half::f16;

use crate::model::CylinderModel;

// ============================================================================
// Vertex Format Constants
// ============================================================================

/// Vertex format flag: Has UV coordinates
pub const FORMAT_UV: u8 = 1;
/// Vertex format flag: Has normals
pub const FORMAT_NORMAL: u8 = 4;
/// Cylinder meshes always carry positions, UVs and normals
pub const FORMAT_POS_UV_NORMAL: u8 = FORMAT_UV | FORMAT_NORMAL;

/// Calculate vertex stride in bytes for unpacked f32 format
#[inline]
pub const fn vertex_stride(format: u8) -> u32 {
    let mut stride = 12; // Position: Float32x3

    if format & FORMAT_UV != 0 {
        stride += 8; // UV: Float32x2
    }
    if format & FORMAT_NORMAL != 0 {
        stride += 12; // Normal: Float32x3
    }

    stride
}

/// Calculate vertex stride in bytes for packed GPU format
#[inline]
pub const fn vertex_stride_packed(format: u8) -> u32 {
    let mut stride = 8; // Position: Float16x4

    if format & FORMAT_UV != 0 {
        stride += 4; // Unorm16x2
    }
    if format & FORMAT_NORMAL != 0 {
        stride += 4; // Octahedral u32
    }

    stride
}

/// Interleaved f32 vertex, laid out for direct upload
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct CylinderVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

// ============================================================================
// Packed Vertex
// ============================================================================

/// A vertex in the 16-byte POS_UV_NORMAL layout
///
/// Quantized values round to the nearest step, so the cap centers' UV of
/// 0.5 lands half a step from the exact value at most.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PackedVertex {
    /// x, y, z and w = 1.0
    pub position: [f16; 4],
    /// u, v as unorm16
    pub uv: [u16; 2],
    /// Octahedral normal, u in the low half, v in the high half (snorm16 each)
    pub normal: u32,
}

impl PackedVertex {
    /// Size in bytes of one packed vertex
    pub const SIZE: usize = vertex_stride_packed(FORMAT_POS_UV_NORMAL) as usize;

    /// Quantize an interleaved f32 vertex
    pub fn pack(vertex: &CylinderVertex) -> Self {
        let [x, y, z] = vertex.position;
        Self {
            position: [x, y, z, 1.0].map(f16::from_f32),
            uv: vertex.uv.map(unorm16),
            normal: pack_octahedral_u32(Vec3::from_array(vertex.normal)),
        }
    }

    /// Little-endian bytes as stored in `.cylmesh` files
    pub fn to_le_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        for (chunk, half) in bytes[..8].chunks_exact_mut(2).zip(self.position) {
            chunk.copy_from_slice(&half.to_le_bytes());
        }
        for (chunk, uv) in bytes[8..12].chunks_exact_mut(2).zip(self.uv) {
            chunk.copy_from_slice(&uv.to_le_bytes());
        }
        bytes[12..].copy_from_slice(&self.normal.to_le_bytes());
        bytes
    }

    /// Read a vertex back from its little-endian bytes
    pub fn from_le_bytes(bytes: &[u8; Self::SIZE]) -> Self {
        let word = |i: usize| [bytes[i], bytes[i + 1]];
        Self {
            position: [0, 2, 4, 6].map(|i| f16::from_le_bytes(word(i))),
            uv: [8, 10].map(|i| u16::from_le_bytes(word(i))),
            normal: u32::from_le_bytes([bytes[12], bytes[13], bytes[14], bytes[15]]),
        }
    }

    /// Position without the w component
    pub fn position_f32(&self) -> Vec3 {
        Vec3::new(
            self.position[0].to_f32(),
            self.position[1].to_f32(),
            self.position[2].to_f32(),
        )
    }

    /// UV in [0, 1]
    pub fn uv_f32(&self) -> Vec2 {
        Vec2::new(self.uv[0] as f32, self.uv[1] as f32) / u16::MAX as f32
    }

    /// Decoded unit normal
    pub fn normal_f32(&self) -> Vec3 {
        unpack_octahedral_u32(self.normal)
    }
}

fn unorm16(value: f32) -> u16 {
    (value.clamp(0.0, 1.0) * u16::MAX as f32).round() as u16
}

fn snorm16(value: f32) -> i16 {
    (value.clamp(-1.0, 1.0) * i16::MAX as f32).round() as i16
}

// ============================================================================
// Octahedral Normals
// ============================================================================

/// ±1 per lane, with zero counted as positive
fn sign_not_zero(v: Vec2) -> Vec2 {
    Vec2::select(v.cmpge(Vec2::ZERO), Vec2::ONE, Vec2::NEG_ONE)
}

/// Project a direction onto the octahedron and unfold it into [-1, 1]²
///
/// Zero-length directions (cone top rim) map to the origin.
fn octahedral_encode(dir: Vec3) -> Vec2 {
    let l1 = dir.abs().element_sum();
    if l1 == 0.0 || !l1.is_finite() {
        return Vec2::ZERO;
    }

    let p = Vec2::new(dir.x, dir.y) / l1;
    if dir.z >= 0.0 {
        p
    } else {
        (Vec2::ONE - Vec2::new(p.y, p.x).abs()) * sign_not_zero(p)
    }
}

fn octahedral_decode(p: Vec2) -> Vec3 {
    let z = 1.0 - p.x.abs() - p.y.abs();
    let xy = if z >= 0.0 {
        p
    } else {
        (Vec2::ONE - Vec2::new(p.y, p.x).abs()) * sign_not_zero(p)
    };
    xy.extend(z).normalize_or_zero()
}

/// Encode a direction as two snorm16 octahedral coordinates in one u32
pub fn pack_octahedral_u32(dir: Vec3) -> u32 {
    let p = octahedral_encode(dir);
    let u = snorm16(p.x) as u16 as u32;
    let v = snorm16(p.y) as u16 as u32;
    u | (v << 16)
}

/// Decode a u32 written by [`pack_octahedral_u32`] back to a unit direction
pub fn unpack_octahedral_u32(packed: u32) -> Vec3 {
    let u = (packed & 0xFFFF) as u16 as i16;
    let v = (packed >> 16) as u16 as i16;
    let p = Vec2::new(u as f32, v as f32) / i16::MAX as f32;
    octahedral_decode(p.clamp(Vec2::NEG_ONE, Vec2::ONE))
}

// ============================================================================
// Full Vertex Packing
// ============================================================================

/// Pack every vertex of `model` to the 16-byte POS_UV_NORMAL layout
pub fn pack_vertices<const SIDES: usize>(model: &CylinderModel<SIDES>) -> Vec<u8> {
    model
        .interleaved()
        .iter()
        .map(PackedVertex::pack)
        .flat_map(|vertex| vertex.to_le_bytes())
        .collect()
}
