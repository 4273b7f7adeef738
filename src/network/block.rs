//! Block merge networks
//!
//! Every network here is composed from the pair network in
//! [`super::bitonic`] and lane compare-exchanges; none re-derives its
//! own comparisons. The general rule, for any power-of-two block of
//! `k` vectors holding two ascending halves:
//!
//! ```text
//! reverse the upper half (vector order and lanes)   -> bitonic block
//! compare_exchange(v[i], v[i + k/2]) for i < k/2    -> both halves bitonic,
//!                                                      lower <= upper
//! recurse on each half down to the pair network
//! ```
//!
//! Blocks above 16 vectors use the same recursion; only the fixed-arity
//! wrappers stop at 16.

use crate::constants::LANES;
use crate::network::bitonic::{bitonic_sort_pair, bitonic_sort_pair_2x};
use crate::network::lanes::{compare_exchange, reverse, swap};
use crate::network::register::register_seq_sort;
use crate::simd::SimdVector;

/// Sort a block whose concatenation is bitonic.
///
/// `v.len()` must be a power of two; blocks of 0 or 1 vectors are left
/// as they are.
pub fn bitonic_merge_block<V: SimdVector>(v: &mut [V]) {
    debug_assert!(v.len() <= 1 || v.len().is_power_of_two());
    match v {
        [] | [_] => {}
        [a, b] => V::bitonic_merge(a, b),
        [a, b, c, d] => {
            compare_exchange(a, c);
            compare_exchange(b, d);
            V::bitonic_merge_2x(a, b, c, d);
        }
        _ => {
            let half = v.len() / 2;
            let (lo, hi) = v.split_at_mut(half);
            for (a, b) in lo.iter_mut().zip(hi.iter_mut()) {
                compare_exchange(a, b);
            }
            bitonic_merge_block(lo);
            bitonic_merge_block(hi);
        }
    }
}

/// Merge the two ascending halves of `v` into one ascending run.
///
/// `v.len()` must be a power of two >= 2.
pub fn merge_runs<V: SimdVector>(v: &mut [V]) {
    debug_assert!(v.len() >= 2 && v.len().is_power_of_two());
    let half = v.len() / 2;
    let upper = &mut v[half..];
    upper.reverse();
    for x in upper.iter_mut() {
        reverse(x);
    }
    bitonic_merge_block(v);
}

/// Fixed-arity form of [`merge_runs`]: two ascending runs of `K/2`
/// vectors into one run of `K * W` elements
#[inline]
pub fn merge_block<V: SimdVector, const K: usize>(block: &mut [V; K]) {
    merge_runs(block);
}

/// Two ascending vectors into a run of 2W
#[inline]
pub fn merge_block2<V: SimdVector>(block: &mut [V; 2]) {
    merge_block(block);
}

/// Two ascending runs of 2 vectors into a run of 4W
#[inline]
pub fn merge_block4<V: SimdVector>(block: &mut [V; 4]) {
    merge_block(block);
}

/// Two ascending runs of 4 vectors into a run of 8W
#[inline]
pub fn merge_block8<V: SimdVector>(block: &mut [V; 8]) {
    merge_block(block);
}

/// Two ascending runs of 8 vectors into a run of 16W
#[inline]
pub fn merge_block16<V: SimdVector>(block: &mut [V; 16]) {
    merge_block(block);
}

/// Merge `[a b]` with `[c d]` (each ascending) using head comparison.
///
/// After the two heads are merged, only the smaller of the two second
/// blocks can hold the next W elements, so it is moved into place
/// wholesale and the rest is two carry merges. Same result as
/// [`merge_block4`].
pub fn merge_pair_blocks_fast<V: SimdVector>(block: &mut [V; 4]) {
    let [a, b, c, d] = block;

    // a: lowest W overall, c: carry
    bitonic_sort_pair(a, c);

    if d.first() < b.first() {
        swap(b, d);
    }

    bitonic_sort_pair(b, c);
    bitonic_sort_pair(c, d);
}

/// Two independent [`merge_block4`]s, on `v[0..4]` and `v[4..8]`,
/// scheduled in lockstep.
///
/// ```text
///    v0   v1   v2   v3      v4   v5   v6   v7
///   aaaa aaaa bbbb bbbb || cccc cccc dddd dddd    (input)
///   xxxx xxxx xxxx xxxx || yyyy yyyy yyyy yyyy    (result)
/// ```
pub fn merge_runs_parallel_2x<V: SimdVector>(v: &mut [V; 8]) {
    let [a, b, c, d, e, f, g, h] = v;

    swap(c, d);
    swap(g, h);
    reverse(c);
    reverse(d);
    reverse(g);
    reverse(h);

    compare_exchange(a, c);
    compare_exchange(e, g);
    compare_exchange(b, d);
    compare_exchange(f, h);

    V::bitonic_merge_2x(a, b, e, f);
    V::bitonic_merge_2x(c, d, g, h);
}

/// Fully sort a block of unsorted vectors in registers.
///
/// Register sort, then merges of doubling width up to the whole block.
/// `v.len()` must be a power of two >= W.
pub fn sort_block<V: SimdVector>(v: &mut [V]) {
    debug_assert!(v.len() >= LANES && v.len().is_power_of_two());
    register_seq_sort(v);

    for group in v.chunks_exact_mut(4) {
        if let [a, b, c, d] = group {
            bitonic_sort_pair_2x(a, b, c, d);
        }
    }

    let mut width = 4;
    while width <= v.len() {
        for run in v.chunks_exact_mut(width) {
            merge_runs(run);
        }
        width *= 2;
    }
}
