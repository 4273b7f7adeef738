//! Centralized constants for the lanesort networks
//!
//! Everything here is fixed at build time. There is no runtime
//! configuration beyond the lane width.

// ============================================================================
// REGISTER GEOMETRY
// ============================================================================

/// Number of `i32` lanes held by one vector register (W)
pub const LANES: usize = 4;

/// Width of one vector register in bytes
pub const VECTOR_BYTES: usize = LANES * std::mem::size_of::<i32>();

/// Integers covered by one register-sort tile (W x W)
pub const TILE: usize = LANES * LANES;

// ============================================================================
// BUFFERS
// ============================================================================

/// Alignment of scratch buffers allocated by the convenience wrappers
pub const ALIGN: usize = 64;

/// Value used to pad partial tiles and partial vectors
///
/// Padding sorts to the tail, so the first `len` outputs are exactly
/// the sorted input.
pub const PAD_VALUE: i32 = i32::MAX;
