//! ARM NEON backend (aarch64)
//!
//! NEON has native 32-bit min/max, so compare-exchange is two
//! instructions. Lane reversal is `rev64` followed by a half swap.

#![cfg(target_arch = "aarch64")]

use std::arch::aarch64::*;

use super::SimdVector;
use crate::constants::LANES;

/// Four `i32` lanes in a NEON register
#[derive(Debug, Clone, Copy)]
#[repr(transparent)]
pub struct Neonx4(int32x4_t);

impl Neonx4 {
    pub fn from_array(lanes: [i32; LANES]) -> Self {
        Self::load(&lanes)
    }

    pub fn to_array(self) -> [i32; LANES] {
        let mut lanes = [0; LANES];
        self.store(&mut lanes);
        lanes
    }
}

impl SimdVector for Neonx4 {
    #[inline(always)]
    fn load(src: &[i32]) -> Self {
        let src = &src[..LANES];
        // SAFETY: `src` holds exactly four readable lanes
        Neonx4(unsafe { vld1q_s32(src.as_ptr()) })
    }

    #[inline(always)]
    fn store(self, dst: &mut [i32]) {
        let dst = &mut dst[..LANES];
        // SAFETY: `dst` holds exactly four writable lanes
        unsafe { vst1q_s32(dst.as_mut_ptr(), self.0) }
    }

    #[inline(always)]
    fn splat(value: i32) -> Self {
        Neonx4(unsafe { vdupq_n_s32(value) })
    }

    #[inline(always)]
    fn first(self) -> i32 {
        unsafe { vgetq_lane_s32::<0>(self.0) }
    }

    #[inline(always)]
    fn compare_exchange(a: &mut Self, b: &mut Self) {
        unsafe {
            let lo = vminq_s32(a.0, b.0);
            let hi = vmaxq_s32(a.0, b.0);
            a.0 = lo;
            b.0 = hi;
        }
    }

    #[inline(always)]
    fn reverse_lanes(self) -> Self {
        unsafe {
            let swapped = vrev64q_s32(self.0); // l1 l0 l3 l2
            Neonx4(vextq_s32::<2>(swapped, swapped))
        }
    }

    #[inline(always)]
    fn interleave_lo(self, other: Self) -> Self {
        Neonx4(unsafe { vzip1q_s32(self.0, other.0) })
    }

    #[inline(always)]
    fn interleave_hi(self, other: Self) -> Self {
        Neonx4(unsafe { vzip2q_s32(self.0, other.0) })
    }

    #[inline(always)]
    fn concat_lo(self, other: Self) -> Self {
        Neonx4(unsafe { vcombine_s32(vget_low_s32(self.0), vget_low_s32(other.0)) })
    }

    #[inline(always)]
    fn concat_hi(self, other: Self) -> Self {
        Neonx4(unsafe { vcombine_s32(vget_high_s32(self.0), vget_high_s32(other.0)) })
    }
}
