//! Sorting and merging networks over [`SimdVector`](crate::simd::SimdVector) registers
//!
//! Data flows strictly bottom-up:
//!
//! 1. **Lane primitives** ([`lanes`]): compare-exchange, lane reversal, swap
//! 2. **Transpose** ([`transpose`]): W interleaved columns into W rows
//! 3. **Register sort** ([`register`]): W unsorted vectors into W ascending vectors
//! 4. **Bitonic merge** ([`bitonic`]): two ascending vectors into one run of 2W
//! 5. **Block merges** ([`block`]): two ascending runs of k/2 vectors into one of k
//! 6. **Sequence merge** ([`sequence`]): two ascending sequences of any length
//!
//! Nothing here allocates, logs or checks shapes beyond `debug_assert!`.
//! Violated preconditions give unsorted output, never undefined
//! behavior. See [`crate::checked`] for validating front ends.

pub mod bitonic;
pub mod block;
pub mod lanes;
pub mod register;
pub mod sequence;
pub mod transpose;

pub use bitonic::{bitonic_merge, bitonic_sort_pair, bitonic_sort_pair_2x};
pub use block::{
    bitonic_merge_block, merge_block, merge_block16, merge_block2, merge_block4, merge_block8,
    merge_pair_blocks_fast, merge_runs, merge_runs_parallel_2x, sort_block,
};
pub use lanes::{compare_exchange, reverse, swap};
pub use register::{column_sort, register_seq_sort, register_sort};
pub use sequence::{merge_sequences, merge_streams};
pub use transpose::transpose;
