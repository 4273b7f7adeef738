//! In-register matrix transpose

use crate::simd::SimdVector;

/// Transpose the W x W matrix held in `rows` (vector index = row).
///
/// Pure data movement: row `i` afterwards holds what column `i` held
/// before. `rows` must hold exactly W vectors.
#[inline]
pub fn transpose<V: SimdVector>(rows: &mut [V]) {
    V::transpose(rows);
}
