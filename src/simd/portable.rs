//! Portable four-lane backend on plain arrays
//!
//! Mirrors the register backends operation for operation, including
//! the branchless mask/XOR compare-exchange, so it can serve as the
//! reference they are tested against.

use super::SimdVector;
use crate::constants::LANES;

/// Four `i32` lanes in a 16-byte aligned array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C, align(16))]
pub struct I32x4([i32; LANES]);

impl I32x4 {
    pub const fn from_array(lanes: [i32; LANES]) -> Self {
        I32x4(lanes)
    }

    pub const fn to_array(self) -> [i32; LANES] {
        self.0
    }
}

impl From<[i32; LANES]> for I32x4 {
    fn from(lanes: [i32; LANES]) -> Self {
        I32x4(lanes)
    }
}

impl SimdVector for I32x4 {
    #[inline]
    fn load(src: &[i32]) -> Self {
        let mut lanes = [0; LANES];
        lanes.copy_from_slice(&src[..LANES]);
        I32x4(lanes)
    }

    #[inline]
    fn store(self, dst: &mut [i32]) {
        dst[..LANES].copy_from_slice(&self.0);
    }

    #[inline]
    fn splat(value: i32) -> Self {
        I32x4([value; LANES])
    }

    #[inline]
    fn first(self) -> i32 {
        self.0[0]
    }

    #[inline]
    fn compare_exchange(a: &mut Self, b: &mut Self) {
        for (x, y) in a.0.iter_mut().zip(b.0.iter_mut()) {
            // all ones where x > y
            let mask = -((*x > *y) as i32);
            let t = (*x ^ *y) & mask;
            *x ^= t;
            *y ^= t;
        }
    }

    #[inline]
    fn reverse_lanes(self) -> Self {
        let [l0, l1, l2, l3] = self.0;
        I32x4([l3, l2, l1, l0])
    }

    #[inline]
    fn interleave_lo(self, other: Self) -> Self {
        let ([a0, a1, _, _], [b0, b1, _, _]) = (self.0, other.0);
        I32x4([a0, b0, a1, b1])
    }

    #[inline]
    fn interleave_hi(self, other: Self) -> Self {
        let ([_, _, a2, a3], [_, _, b2, b3]) = (self.0, other.0);
        I32x4([a2, b2, a3, b3])
    }

    #[inline]
    fn concat_lo(self, other: Self) -> Self {
        let ([a0, a1, _, _], [b0, b1, _, _]) = (self.0, other.0);
        I32x4([a0, a1, b0, b1])
    }

    #[inline]
    fn concat_hi(self, other: Self) -> Self {
        let ([_, _, a2, a3], [_, _, b2, b3]) = (self.0, other.0);
        I32x4([a2, a3, b2, b3])
    }
}
