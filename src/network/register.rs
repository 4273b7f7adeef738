//! In-register sort of W vectors
//!
//! Column sort puts every lane position in ascending order across the
//! W vectors; the transpose then turns those columns into rows, so each
//! output vector is an ascending run of W elements. The runs are not
//! ordered relative to each other; that is left to the merge networks.

use crate::constants::LANES;
use crate::network::lanes::compare_exchange;
use crate::simd::SimdVector;

/// Sort each lane position across the W vectors of `v`.
///
/// Afterwards `v[i][j] <= v[i + 1][j]` for every `i` and lane `j`.
#[inline]
pub fn column_sort<V: SimdVector>(v: &mut [V]) {
    debug_assert_eq!(v.len(), LANES);
    for &(i, j) in V::COLUMN_SCHEDULE {
        let (lo, hi) = v.split_at_mut(j);
        compare_exchange(&mut lo[i], &mut hi[0]);
    }
}

/// Sort W unsorted vectors into W independently ascending vectors
#[inline]
pub fn register_sort<V: SimdVector>(v: &mut [V]) {
    column_sort(v);
    V::transpose(v);
}

/// Register-sort every consecutive group of W vectors in `v`.
///
/// `v.len()` must be a multiple of W; a trailing partial group is left
/// untouched.
pub fn register_seq_sort<V: SimdVector>(v: &mut [V]) {
    debug_assert_eq!(v.len() % LANES, 0);
    for group in v.chunks_exact_mut(LANES) {
        register_sort(group);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::{load_vectors, to_vec, I32x4};

    fn assert_rows_ascending(values: &[i32]) {
        for row in values.chunks(LANES) {
            assert!(row.windows(2).all(|w| w[0] <= w[1]), "row not ascending: {:?}", row);
        }
    }

    #[test]
    fn test_column_sort() {
        let data = [9, 0, 5, 1, 3, 8, 5, 0, 7, 2, 5, -1, 1, 4, 5, 2];
        let mut v: Vec<I32x4> = load_vectors(&data);
        column_sort(&mut v);
        let out = to_vec(&v);
        for i in 0..LANES - 1 {
            for j in 0..LANES {
                assert!(out[i * LANES + j] <= out[(i + 1) * LANES + j]);
            }
        }
    }

    #[test]
    fn test_register_sort_rows() {
        let data = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5, 8, 9, 7, 9, 3];
        let mut v: Vec<I32x4> = load_vectors(&data);
        register_sort(&mut v);
        let out = to_vec(&v);
        assert_rows_ascending(&out);

        let mut expected = data.to_vec();
        let mut got = out.clone();
        expected.sort_unstable();
        got.sort_unstable();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_register_sort_equal_elements() {
        let mut v: Vec<I32x4> = load_vectors(&[7; 16]);
        register_sort(&mut v);
        assert_eq!(to_vec(&v), vec![7; 16]);
    }

    #[test]
    fn test_register_seq_sort() {
        let data: Vec<i32> = (0..64).map(|i| (i * 37 + 11) % 23 - 10).collect();
        let mut v: Vec<I32x4> = load_vectors(&data);
        register_seq_sort(&mut v);
        assert_rows_ascending(&to_vec(&v));
    }
}
