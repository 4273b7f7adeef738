//! SSE2 backend (x86_64)
//!
//! SSE2 is part of the x86_64 baseline, so no runtime detection is
//! needed. SSE2 lacks `pminsd`/`pmaxsd` for 32-bit lanes, so the
//! compare-exchange goes through a `pcmpgtd` mask and an XOR swap.

#![cfg(target_arch = "x86_64")]

use std::arch::x86_64::*;

use super::SimdVector;
use crate::constants::LANES;

/// Four `i32` lanes in an SSE register
#[derive(Debug, Clone, Copy)]
#[repr(transparent)]
pub struct Sse2x4(__m128i);

impl Sse2x4 {
    pub fn from_array(lanes: [i32; LANES]) -> Self {
        Self::load(&lanes)
    }

    pub fn to_array(self) -> [i32; LANES] {
        let mut lanes = [0; LANES];
        self.store(&mut lanes);
        lanes
    }
}

impl SimdVector for Sse2x4 {
    #[inline(always)]
    fn load(src: &[i32]) -> Self {
        let src = &src[..LANES];
        // SAFETY: `src` holds exactly 16 readable bytes; loadu has no alignment requirement
        Sse2x4(unsafe { _mm_loadu_si128(src.as_ptr().cast()) })
    }

    #[inline(always)]
    fn store(self, dst: &mut [i32]) {
        let dst = &mut dst[..LANES];
        // SAFETY: `dst` holds exactly 16 writable bytes; storeu has no alignment requirement
        unsafe { _mm_storeu_si128(dst.as_mut_ptr().cast(), self.0) }
    }

    #[inline(always)]
    fn splat(value: i32) -> Self {
        Sse2x4(unsafe { _mm_set1_epi32(value) })
    }

    #[inline(always)]
    fn first(self) -> i32 {
        unsafe { _mm_cvtsi128_si32(self.0) }
    }

    #[inline(always)]
    fn compare_exchange(a: &mut Self, b: &mut Self) {
        unsafe {
            let mask = _mm_cmpgt_epi32(a.0, b.0);
            let t = _mm_and_si128(_mm_xor_si128(a.0, b.0), mask);
            a.0 = _mm_xor_si128(a.0, t);
            b.0 = _mm_xor_si128(b.0, t);
        }
    }

    #[inline(always)]
    fn reverse_lanes(self) -> Self {
        Sse2x4(unsafe { _mm_shuffle_epi32::<0x1B>(self.0) })
    }

    #[inline(always)]
    fn interleave_lo(self, other: Self) -> Self {
        Sse2x4(unsafe { _mm_unpacklo_epi32(self.0, other.0) })
    }

    #[inline(always)]
    fn interleave_hi(self, other: Self) -> Self {
        Sse2x4(unsafe { _mm_unpackhi_epi32(self.0, other.0) })
    }

    #[inline(always)]
    fn concat_lo(self, other: Self) -> Self {
        Sse2x4(unsafe { _mm_unpacklo_epi64(self.0, other.0) })
    }

    #[inline(always)]
    fn concat_hi(self, other: Self) -> Self {
        Sse2x4(unsafe { _mm_unpackhi_epi64(self.0, other.0) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_exchange_signed() {
        let mut a = Sse2x4::from_array([5, 1, -3, 7]);
        let mut b = Sse2x4::from_array([2, 1, 4, i32::MIN]);
        Sse2x4::compare_exchange(&mut a, &mut b);
        assert_eq!(a.to_array(), [2, 1, -3, i32::MIN]);
        assert_eq!(b.to_array(), [5, 1, 4, 7]);
    }

    #[test]
    fn test_shuffles() {
        let a = Sse2x4::from_array([0, 1, 2, 3]);
        let b = Sse2x4::from_array([4, 5, 6, 7]);
        assert_eq!(a.reverse_lanes().to_array(), [3, 2, 1, 0]);
        assert_eq!(a.interleave_lo(b).to_array(), [0, 4, 1, 5]);
        assert_eq!(a.interleave_hi(b).to_array(), [2, 6, 3, 7]);
        assert_eq!(a.concat_lo(b).to_array(), [0, 1, 4, 5]);
        assert_eq!(a.concat_hi(b).to_array(), [2, 3, 6, 7]);
        assert_eq!(b.first(), 4);
        assert_eq!(Sse2x4::splat(-9).to_array(), [-9; 4]);
    }
}
