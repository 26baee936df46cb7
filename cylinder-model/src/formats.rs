//! Cylinder mesh binary format (.cylmesh)
//!
//! GPU-ready mesh with packed vertices. POD format - no magic bytes.
//!
//! # Layout
//! ```text
//! 0x00: vertex_count u32
//! 0x04: index_count u32
//! 0x08: format u8 (vertex format flags)
//! 0x09: padding (3 bytes)
//! 0x0C: vertex_data (vertex_count * stride)
//! var:  index_data (index_count * 2 bytes)
//! ```
//!
//! All integers are little-endian. For the vertex layout see [`crate::packing`].

use std::io::{self, Write};

use crate::model::CylinderModel;
use crate::packing::{FORMAT_POS_UV_NORMAL, PackedVertex, pack_vertices, vertex_stride_packed};

/// File extension for cylinder mesh files
pub const CYLINDER_MESH_EXT: &str = "cylmesh";

/// Errors raised while writing or parsing a cylinder mesh file
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// Underlying writer failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Fewer bytes than a header
    #[error("truncated header: {0} bytes (need {size})", size = CylinderMeshHeader::SIZE)]
    TruncatedHeader(usize),

    /// Format flags other than POS_UV_NORMAL
    #[error("unsupported vertex format {0:#04x}")]
    UnsupportedFormat(u8),

    /// Body shorter than the header announces
    #[error("truncated mesh data: expected {expected} bytes, found {actual}")]
    TruncatedData { expected: usize, actual: usize },

    /// Bytes past the end announced by the header
    #[error("trailing data: expected {expected} bytes, found {actual}")]
    TrailingData { expected: usize, actual: usize },

    /// An index refers past the last vertex
    #[error("index {index} at position {position} is out of range (vertex count: {vertex_count})")]
    IndexOutOfRange {
        index: u16,
        position: usize,
        vertex_count: u32,
    },
}

/// Cylinder mesh header (12 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct CylinderMeshHeader {
    pub vertex_count: u32,
    pub index_count: u32,
    pub format: u8,
    pub _padding: [u8; 3],
}

impl CylinderMeshHeader {
    pub const SIZE: usize = 12;

    pub fn new(vertex_count: u32, index_count: u32, format: u8) -> Self {
        Self {
            vertex_count,
            index_count,
            format,
            _padding: [0; 3],
        }
    }

    /// Write header to bytes
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..4].copy_from_slice(&self.vertex_count.to_le_bytes());
        bytes[4..8].copy_from_slice(&self.index_count.to_le_bytes());
        bytes[8] = self.format;
        // padding bytes stay 0
        bytes
    }

    /// Read header from bytes
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        Some(Self {
            vertex_count: u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            index_count: u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
            format: bytes[8],
            _padding: [0; 3],
        })
    }

    /// Size in bytes of the packed vertex section
    pub fn vertex_data_len(&self) -> usize {
        self.vertex_count as usize * vertex_stride_packed(self.format) as usize
    }

    /// Total file size announced by this header
    pub fn file_len(&self) -> usize {
        Self::SIZE + self.vertex_data_len() + self.index_count as usize * 2
    }
}

/// A parsed cylinder mesh file
#[derive(Debug, Clone, PartialEq)]
pub struct MeshFile {
    pub header: CylinderMeshHeader,
    /// Packed vertex data, `vertex_count * 16` bytes
    pub vertex_data: Vec<u8>,
    pub indices: Vec<u16>,
}

impl MeshFile {
    /// Iterate the packed vertices in vertex order
    pub fn vertices(&self) -> impl Iterator<Item = PackedVertex> + '_ {
        self.vertex_data
            .chunks_exact(PackedVertex::SIZE)
            .filter_map(|chunk| <&[u8; PackedVertex::SIZE]>::try_from(chunk).ok())
            .map(PackedVertex::from_le_bytes)
    }
}

/// Write `model` as a complete cylinder mesh file
pub fn write_cylinder_mesh<W: Write, const SIDES: usize>(
    w: &mut W,
    model: &CylinderModel<SIDES>,
) -> Result<(), FormatError> {
    let header = CylinderMeshHeader::new(
        model.vertex_count() as u32,
        model.index_count() as u32,
        FORMAT_POS_UV_NORMAL,
    );
    w.write_all(&header.to_bytes())?;
    w.write_all(&pack_vertices(model))?;

    for i in model.indices() {
        w.write_all(&i.to_le_bytes())?;
    }

    Ok(())
}

/// Parse and validate a cylinder mesh file
pub fn read_cylinder_mesh(bytes: &[u8]) -> Result<MeshFile, FormatError> {
    let header =
        CylinderMeshHeader::from_bytes(bytes).ok_or(FormatError::TruncatedHeader(bytes.len()))?;

    if header.format != FORMAT_POS_UV_NORMAL {
        return Err(FormatError::UnsupportedFormat(header.format));
    }

    let expected = header.file_len();
    if bytes.len() < expected {
        return Err(FormatError::TruncatedData {
            expected,
            actual: bytes.len(),
        });
    }

    if bytes.len() > expected {
        return Err(FormatError::TrailingData {
            expected,
            actual: bytes.len(),
        });
    }

    let vertex_end = CylinderMeshHeader::SIZE + header.vertex_data_len();
    let vertex_data = bytes[CylinderMeshHeader::SIZE..vertex_end].to_vec();

    let indices: Vec<u16> = bytes[vertex_end..expected]
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();

    if let Some((position, &index)) = indices
        .iter()
        .enumerate()
        .find(|&(_, &index)| index as u32 >= header.vertex_count)
    {
        return Err(FormatError::IndexOutOfRange {
            index,
            position,
            vertex_count: header.vertex_count,
        });
    }

    Ok(MeshFile {
        header,
        vertex_data,
        indices,
    })
}
