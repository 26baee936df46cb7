//! Tessellation constants and derived buffer sizes

/// Number of sides used to build the cylinder when no side count is given
pub const DEFAULT_SIDES: usize = 64;

/// 4 triangles per side: 2 lateral, 1 bottom fan slice, 1 top fan slice
pub const INDICES_PER_SIDE: usize = 12;

/// Largest side count whose vertex indices still fit in u16
pub const MAX_SIDES: usize = (u16::MAX as usize - 1) / 2;

/// Vertex count for a cylinder with `sides` sides
///
/// Two rims of `sides` vertices plus one center vertex per cap.
#[inline]
pub const fn vertex_count(sides: usize) -> usize {
    sides * 2 + 2
}

/// Index count for a cylinder with `sides` sides
#[inline]
pub const fn index_count(sides: usize) -> usize {
    sides * INDICES_PER_SIDE
}

/// Index of the bottom cap center vertex
#[inline]
pub const fn bottom_center(sides: usize) -> usize {
    sides * 2
}

/// Index of the top cap center vertex
#[inline]
pub const fn top_center(sides: usize) -> usize {
    sides * 2 + 1
}
