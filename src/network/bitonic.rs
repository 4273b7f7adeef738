//! Bitonic merge of two vectors
//!
//! Reversing one of two ascending vectors makes their concatenation a
//! bitonic sequence; three half-cleaner levels then sort all 2W
//! elements. This pair network is the core every wider merge reuses.

use crate::network::lanes::reverse;
use crate::simd::SimdVector;

/// Sort the bitonic sequence `a ++ b` so that `a ++ b` is ascending.
///
/// The caller arranges the bitonic shape (e.g. a descending `a` and an
/// ascending `b`).
#[inline]
pub fn bitonic_merge<V: SimdVector>(a: &mut V, b: &mut V) {
    V::bitonic_merge(a, b);
}

/// Merge two ascending vectors: `a` gets the lowest W, `b` the highest W
#[inline]
pub fn bitonic_sort_pair<V: SimdVector>(a: &mut V, b: &mut V) {
    reverse(a);
    V::bitonic_merge(a, b);
}

/// Same as `bitonic_sort_pair(a, b)` and `bitonic_sort_pair(c, d)`, with
/// the two independent networks interleaved
#[inline]
pub fn bitonic_sort_pair_2x<V: SimdVector>(a: &mut V, b: &mut V, c: &mut V, d: &mut V) {
    reverse(a);
    reverse(c);
    V::bitonic_merge_2x(a, b, c, d);
}
