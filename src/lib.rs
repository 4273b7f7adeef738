//! # lanesort: SIMD sorting networks for 32-bit integers
//!
//! lanesort sorts `i32` data with fixed-width sorting networks built on
//! four-lane vector registers (W = 4).
//!
//! ## Overview
//!
//! The networks compose strictly bottom-up:
//!
//! 1. **Lane primitives**: compare-exchange (lane-wise min/max), lane
//!    reversal and vector swap.
//!
//! 2. **Register sort**: W unsorted vectors are column-sorted and
//!    transposed into W ascending vectors.
//!
//! 3. **Bitonic merge**: two ascending vectors become one ascending run
//!    of 2W through three exchange levels.
//!
//! 4. **Block merges**: two ascending runs of k/2 vectors become one of k,
//!    for any power-of-two k, by one level of cross compare-exchanges and
//!    recursion.
//!
//! 5. **Sequence merge**: two ascending sequences of any length are merged
//!    as a stream with a single carry vector.
//!
//! The networks are generic over [`SimdVector`]; [`simd::Native`] picks
//! SSE2 on x86_64, NEON on aarch64 and a portable array backend
//! elsewhere.
//!
//! ## Usage
//!
//! Sorting a whole array:
//!
//! ```
//! let mut data = vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5, 8, 9, 7, 9, 3];
//! lanesort::sort_i32(&mut data);
//! assert_eq!(data, [1, 1, 2, 3, 3, 3, 4, 5, 5, 5, 6, 7, 8, 9, 9, 9]);
//! ```
//!
//! Driving the networks directly:
//!
//! ```
//! use lanesort::simd::{Native, SimdVector};
//! use lanesort::network::bitonic_sort_pair;
//!
//! let mut a = Native::load(&[1, 5, 9, 13]);
//! let mut b = Native::load(&[2, 6, 10, 14]);
//! bitonic_sort_pair(&mut a, &mut b);
//!
//! let mut out = [0; 8];
//! a.store(&mut out[..4]);
//! b.store(&mut out[4..]);
//! assert_eq!(out, [1, 2, 5, 6, 9, 10, 13, 14]);
//! ```

pub mod checked;
pub mod config;
pub mod constants;
pub mod error;
pub mod network;
pub mod simd;
pub mod sort;
pub mod types;

// Re-export primary components
pub use config::{detect_backend, Backend};
pub use error::{Result, SortError};
pub use network::{
    bitonic_merge, bitonic_sort_pair, merge_block, merge_runs, merge_sequences, register_sort,
};
pub use simd::SimdVector;
pub use sort::{merge_sorted_i32, sort_i32, sort_i32_with_aux};

/// Version information for the lanesort library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
