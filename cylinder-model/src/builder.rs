//! Mesh sink traits
//!
//! [`CylinderModel::build`](crate::CylinderModel::build) replays the cylinder
//! through these traits so callers can collect it into their own vertex
//! containers instead of copying the model's buffers by hand.

use glam::Vec3;

/// Trait for mesh construction - enables generic geometry collection
pub trait MeshBuilder: Default {
    /// Add a vertex with position and normal, returning its index
    fn add_vertex(&mut self, position: Vec3, normal: Vec3) -> u16;

    /// Add a triangle using three vertex indices
    fn add_triangle(&mut self, i0: u16, i1: u16, i2: u16);
}

/// Trait extension for UV-mapped meshes
pub trait MeshBuilderUV: MeshBuilder {
    /// Add a vertex with position, UV coordinates, and normal, returning its index
    fn add_vertex_uv(&mut self, position: Vec3, uv: (f32, f32), normal: Vec3) -> u16;
}

/// Unpacked mesh data (f32 format)
///
/// Full-precision copy of a mesh, suitable for OBJ export or further
/// processing by code that owns its buffers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UnpackedMesh {
    /// Vertex positions as [x, y, z]
    pub positions: Vec<[f32; 3]>,
    /// Vertex normals as [x, y, z]
    pub normals: Vec<[f32; 3]>,
    /// UV coordinates as [u, v] (empty if no UVs)
    pub uvs: Vec<[f32; 2]>,
    /// Triangle indices (u16 for GPU compatibility)
    pub indices: Vec<u16>,
}

impl UnpackedMesh {
    /// Create empty unpacked mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get triangle count
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

impl MeshBuilder for UnpackedMesh {
    fn add_vertex(&mut self, position: Vec3, normal: Vec3) -> u16 {
        let index = self.positions.len() as u16;
        self.positions.push(position.to_array());
        self.normals.push(normal.to_array());
        index
    }

    fn add_triangle(&mut self, i0: u16, i1: u16, i2: u16) {
        self.indices.extend_from_slice(&[i0, i1, i2]);
    }
}

impl MeshBuilderUV for UnpackedMesh {
    fn add_vertex_uv(&mut self, position: Vec3, uv: (f32, f32), normal: Vec3) -> u16 {
        let index = self.add_vertex(position, normal);
        self.uvs.push([uv.0, uv.1]);
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_vertex_returns_sequential_indices() {
        let mut mesh = UnpackedMesh::new();
        assert_eq!(mesh.add_vertex(Vec3::ZERO, Vec3::Z), 0);
        assert_eq!(mesh.add_vertex_uv(Vec3::X, (1.0, 0.0), Vec3::Z), 1);
        assert_eq!(mesh.vertex_count(), 2);
        assert!(mesh.uvs.len() == 1, "plain vertices carry no UV");
    }

    #[test]
    fn test_add_triangle() {
        let mut mesh = UnpackedMesh::new();
        mesh.add_vertex_uv(Vec3::ZERO, (0.0, 0.0), Vec3::Z);
        mesh.add_vertex_uv(Vec3::X, (1.0, 0.0), Vec3::Z);
        mesh.add_vertex_uv(Vec3::Y, (0.0, 1.0), Vec3::Z);
        mesh.add_triangle(0, 1, 2);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.indices, vec![0, 1, 2]);
        assert_eq!(mesh.uvs[2], [0.0, 1.0]);
    }
}
