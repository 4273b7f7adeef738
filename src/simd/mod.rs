//! Four-lane `i32` vector registers.
//!
//! Every sorting network in [`crate::network`] is generic over
//! [`SimdVector`]. A backend only supplies the handful of register
//! operations below; the exchange levels, the in-register bitonic merge
//! and the 4x4 transpose are built once, as provided methods, on top of
//! them.
//!
//! # Backends
//!
//! | Architecture | Type | Register |
//! |--------------|------|----------|
//! | x86_64 | [`sse2::Sse2x4`] | `__m128i` |
//! | aarch64 | [`neon::Neonx4`] | `int32x4_t` |
//! | Any | [`portable::I32x4`] | `[i32; 4]` |
//!
//! [`Native`] names the best one compiled for the target. All backends
//! produce bit-identical results.
//!
//! # Lane shuffles
//!
//! With `a = [a0 a1 a2 a3]` and `b = [b0 b1 b2 b3]`:
//!
//! ```text
//! interleave_lo(a, b) = [a0 b0 a1 b1]      concat_lo(a, b) = [a0 a1 b0 b1]
//! interleave_hi(a, b) = [a2 b2 a3 b3]      concat_hi(a, b) = [a2 a3 b2 b3]
//! ```

use std::fmt::Debug;

use crate::constants::LANES;

pub mod portable;
#[cfg(target_arch = "x86_64")]
pub mod sse2;
#[cfg(target_arch = "aarch64")]
pub mod neon;

pub use portable::I32x4;
#[cfg(target_arch = "x86_64")]
pub use sse2::Sse2x4;
#[cfg(target_arch = "aarch64")]
pub use neon::Neonx4;

/// Best backend available for the compilation target
#[cfg(target_arch = "x86_64")]
pub type Native = Sse2x4;

/// Best backend available for the compilation target
#[cfg(target_arch = "aarch64")]
pub type Native = Neonx4;

/// Best backend available for the compilation target
#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
pub type Native = I32x4;

/// A register of [`LANES`] signed 32-bit lanes
pub trait SimdVector: Copy + Debug {
    /// Comparator pairs of the minimal sorting network over `LANES` rows,
    /// applied column-wise by [`crate::network::column_sort`]
    const COLUMN_SCHEDULE: &'static [(usize, usize)] = &[(0, 2), (1, 3), (0, 1), (2, 3), (1, 2)];

    /// Load the first `LANES` integers of `src`
    fn load(src: &[i32]) -> Self;

    /// Store all lanes into the first `LANES` slots of `dst`
    fn store(self, dst: &mut [i32]);

    /// Broadcast one value to every lane
    fn splat(value: i32) -> Self;

    /// Lane 0; the minimum of an ascending vector
    fn first(self) -> i32;

    /// Lane-wise min into `a`, lane-wise max into `b`
    fn compare_exchange(a: &mut Self, b: &mut Self);

    /// Lanes in reverse order
    fn reverse_lanes(self) -> Self;

    /// `[a0 b0 a1 b1]`
    fn interleave_lo(self, other: Self) -> Self;

    /// `[a2 b2 a3 b3]`
    fn interleave_hi(self, other: Self) -> Self;

    /// `[a0 a1 b0 b1]`
    fn concat_lo(self, other: Self) -> Self;

    /// `[a2 a3 b2 b3]`
    fn concat_hi(self, other: Self) -> Self;

    /// Butterfly at distance `LANES / 2`: low halves into `a`, high halves into `b`
    #[inline(always)]
    fn exchange_l1(a: &mut Self, b: &mut Self) {
        let lo = a.concat_lo(*b);
        let hi = a.concat_hi(*b);
        *a = lo;
        *b = hi;
    }

    /// Butterfly at distance `LANES / 4`: `a = [a0 b0 a2 b2]`, `b = [a1 b1 a3 b3]`
    #[inline(always)]
    fn exchange_l2(a: &mut Self, b: &mut Self) {
        let hi = a.interleave_hi(*b);
        let lo = a.interleave_lo(*b);
        *a = lo.concat_lo(hi);
        *b = lo.concat_hi(hi);
    }

    /// Interleave adjacent lanes back into element order
    #[inline(always)]
    fn exchange_l3(a: &mut Self, b: &mut Self) {
        let lo = a.interleave_lo(*b);
        let hi = a.interleave_hi(*b);
        *a = lo;
        *b = hi;
    }

    /// Sort the bitonic sequence `a ++ b` into ascending order.
    ///
    /// Three exchange levels, each preceded by a compare-exchange: the
    /// classic half-cleaner cascade at distances 4, 2 and 1.
    #[inline]
    fn bitonic_merge(a: &mut Self, b: &mut Self) {
        Self::compare_exchange(a, b);
        Self::exchange_l1(a, b);
        Self::compare_exchange(a, b);
        Self::exchange_l2(a, b);
        Self::compare_exchange(a, b);
        Self::exchange_l3(a, b);
    }

    /// Two independent [`bitonic_merge`](Self::bitonic_merge)s, `(a, b)` and
    /// `(c, d)`, scheduled level by level so neither chain stalls on the other
    #[inline]
    fn bitonic_merge_2x(a: &mut Self, b: &mut Self, c: &mut Self, d: &mut Self) {
        Self::compare_exchange(a, b);
        Self::compare_exchange(c, d);

        Self::exchange_l1(a, b);
        Self::exchange_l1(c, d);

        Self::compare_exchange(a, b);
        Self::compare_exchange(c, d);

        Self::exchange_l2(a, b);
        Self::exchange_l2(c, d);

        Self::compare_exchange(a, b);
        Self::compare_exchange(c, d);

        Self::exchange_l3(a, b);
        Self::exchange_l3(c, d);
    }

    /// Transpose `LANES` rows in place: row `i` becomes old column `i`.
    ///
    /// Two rounds of 32-bit interleaves, then 64-bit recombination.
    #[inline]
    fn transpose(rows: &mut [Self]) {
        debug_assert_eq!(rows.len(), LANES);
        let (r0, r1, r2, r3) = (rows[0], rows[1], rows[2], rows[3]);

        let t0 = r0.interleave_lo(r1); // r00 r10 r01 r11
        let t1 = r2.interleave_lo(r3); // r20 r30 r21 r31
        let t2 = r0.interleave_hi(r1); // r02 r12 r03 r13
        let t3 = r2.interleave_hi(r3); // r22 r32 r23 r33

        rows[0] = t0.concat_lo(t1);
        rows[1] = t0.concat_hi(t1);
        rows[2] = t2.concat_lo(t3);
        rows[3] = t2.concat_hi(t3);
    }
}

/// Load a flat array (length a multiple of [`LANES`]) into vectors
pub fn load_vectors<V: SimdVector>(src: &[i32]) -> Vec<V> {
    debug_assert_eq!(src.len() % LANES, 0);
    src.chunks_exact(LANES).map(V::load).collect()
}

/// Store vectors back into a flat array, vector order then lane order
pub fn store_vectors<V: SimdVector>(vectors: &[V], dst: &mut [i32]) {
    debug_assert!(dst.len() >= vectors.len() * LANES);
    for (v, out) in vectors.iter().zip(dst.chunks_exact_mut(LANES)) {
        v.store(out);
    }
}

/// Flatten vectors into a new `Vec<i32>`
pub fn to_vec<V: SimdVector>(vectors: &[V]) -> Vec<i32> {
    let mut out = vec![0; vectors.len() * LANES];
    store_vectors(vectors, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(lanes: [i32; 4]) -> I32x4 {
        I32x4::from_array(lanes)
    }

    #[test]
    fn test_exchange_levels() {
        let (mut a, mut b) = (v([0, 1, 2, 3]), v([4, 5, 6, 7]));
        I32x4::exchange_l1(&mut a, &mut b);
        assert_eq!((a.to_array(), b.to_array()), ([0, 1, 4, 5], [2, 3, 6, 7]));

        let (mut a, mut b) = (v([0, 1, 2, 3]), v([4, 5, 6, 7]));
        I32x4::exchange_l2(&mut a, &mut b);
        assert_eq!((a.to_array(), b.to_array()), ([0, 4, 2, 6], [1, 5, 3, 7]));

        let (mut a, mut b) = (v([0, 1, 2, 3]), v([4, 5, 6, 7]));
        I32x4::exchange_l3(&mut a, &mut b);
        assert_eq!((a.to_array(), b.to_array()), ([0, 4, 1, 5], [2, 6, 3, 7]));
    }

    #[test]
    fn test_transpose() {
        let mut rows: Vec<I32x4> = load_vectors(&(0..16).collect::<Vec<i32>>());
        I32x4::transpose(&mut rows);
        assert_eq!(
            to_vec(&rows),
            vec![0, 4, 8, 12, 1, 5, 9, 13, 2, 6, 10, 14, 3, 7, 11, 15]
        );
    }

    #[test]
    fn test_bitonic_merge_descending_then_ascending() {
        let mut a = v([9, 7, 3, 1]);
        let mut b = v([2, 4, 6, 8]);
        I32x4::bitonic_merge(&mut a, &mut b);
        assert_eq!(a.to_array(), [1, 2, 3, 4]);
        assert_eq!(b.to_array(), [6, 7, 8, 9]);
    }

    #[test]
    fn test_load_store_roundtrip_through_native() {
        let data: Vec<i32> = vec![5, -1, 7, 3, 2, 2, 0, i32::MIN];
        let vectors: Vec<Native> = load_vectors(&data);
        assert_eq!(vectors.len(), 2);
        assert_eq!(vectors[1].first(), 2);
        assert_eq!(to_vec(&vectors), data);
    }
}
