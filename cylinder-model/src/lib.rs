//! Procedural tapered cylinder mesh
//!
//! Builds the complete vertex, normal, UV and index buffers of a closed
//! cylinder (bottom cap, top cap and a tapered lateral surface) from a single
//! shape parameter: the ratio of the top radius to the unit bottom radius.
//!
//! # Modules
//!
//! - [`model`] - The cylinder tessellation and its read-only buffers
//! - [`builder`] - Vertex sink traits for replaying the cylinder into other mesh types
//! - [`packing`] - Interleaved f32 vertices and the packed GPU vertex format
//! - [`formats`] - Binary `.cylmesh` file format
//! - [`export`] - Wavefront OBJ export
//!
//! # Example
//!
//! ```
//! use cylinder_model::CylinderModel;
//!
//! let can: CylinderModel = CylinderModel::new(1.0);
//! assert_eq!(can.vertex_count(), 130);
//! assert_eq!(can.index_count(), 768);
//! ```

pub mod builder;
pub mod constants;
pub mod export;
pub mod formats;
pub mod model;
pub mod packing;

pub use builder::{MeshBuilder, MeshBuilderUV, UnpackedMesh};
pub use constants::{DEFAULT_SIDES, INDICES_PER_SIDE, index_count, vertex_count};
pub use export::write_obj;
pub use formats::{
    CYLINDER_MESH_EXT, CylinderMeshHeader, FormatError, MeshFile, read_cylinder_mesh,
    write_cylinder_mesh,
};
pub use model::CylinderModel;
pub use packing::{
    CylinderVertex, FORMAT_NORMAL, FORMAT_POS_UV_NORMAL, FORMAT_UV, PackedVertex,
    pack_octahedral_u32, pack_vertices, unpack_octahedral_u32, vertex_stride,
    vertex_stride_packed,
};
