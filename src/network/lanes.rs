//! Lane primitives every network is built from

use crate::simd::SimdVector;

/// Lane-wise min into `a` and max into `b`.
///
/// Afterwards `a[j] <= b[j]` for every lane, and each lane pair keeps
/// its two values.
#[inline(always)]
pub fn compare_exchange<V: SimdVector>(a: &mut V, b: &mut V) {
    V::compare_exchange(a, b);
}

/// Reverse the lanes of `v`, turning an ascending run into a descending one
#[inline(always)]
pub fn reverse<V: SimdVector>(v: &mut V) {
    *v = v.reverse_lanes();
}

/// Exchange two whole vectors
#[inline(always)]
pub fn swap<V: SimdVector>(a: &mut V, b: &mut V) {
    std::mem::swap(a, b);
}
