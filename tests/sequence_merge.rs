//! Integration tests for the streaming sequence merge

use lanesort::network::merge_sequences;
use lanesort::simd::{load_vectors, to_vec, Native, SimdVector};
use lanesort::{merge_sorted_i32, checked};
use proptest::prelude::*;

fn merge(a: &[i32], b: &[i32]) -> Vec<i32> {
    let src1: Vec<Native> = load_vectors(a);
    let src2: Vec<Native> = load_vectors(b);
    let mut dst = vec![Native::splat(0); src1.len() + src2.len()];
    merge_sequences(&mut dst, &src1, &src2);
    to_vec(&dst)
}

fn sorted_lanes(max_vectors: usize) -> impl Strategy<Value = Vec<i32>> {
    (0..=max_vectors)
        .prop_flat_map(|n| prop::collection::vec(any::<i32>(), n * 4))
        .prop_map(|mut v| {
            v.sort_unstable();
            v
        })
}

#[test]
fn test_merge_single_blocks() {
    assert_eq!(
        merge(&[1, 5, 9, 13], &[2, 6, 10, 14]),
        vec![1, 2, 5, 6, 9, 10, 13, 14]
    );
}

#[test]
fn test_merge_exhausts_one_side_early() {
    assert_eq!(
        merge(&[1, 2, 3, 4], &[10, 11, 12, 13]),
        vec![1, 2, 3, 4, 10, 11, 12, 13]
    );

    let low = [1, 2, 3, 4, 5, 6, 7, 8];
    let high = [10, 11, 12, 13, 14, 15, 16, 17];
    let mut expected = low.to_vec();
    expected.extend(high);

    assert_eq!(merge(&low, &high), expected);
    assert_eq!(merge(&high, &low), expected);
}

#[test]
fn test_merge_with_empty_side_returns_block_unchanged() {
    assert_eq!(merge(&[-4, 0, 0, 12], &[]), vec![-4, 0, 0, 12]);
    assert_eq!(merge(&[], &[-4, 0, 0, 12]), vec![-4, 0, 0, 12]);
}

#[test]
fn test_merge_equal_length_sequences() {
    let a: Vec<i32> = (0..16).map(|x| x * 2).collect();
    let b: Vec<i32> = (0..16).map(|x| x * 2 + 1).collect();
    assert_eq!(merge(&a, &b), (0..32).collect::<Vec<i32>>());
}

#[test]
fn test_flat_and_checked_front_ends_agree() {
    let a = [1, 4, 4, 8, 20, 21, 22, 23];
    let b = [0, 4, 9, 30];
    let mut flat = [0; 12];
    let mut validated = [0; 12];
    merge_sorted_i32(&mut flat, &a, &b);
    checked::merge_sequences(&mut validated, &a, &b).unwrap();
    assert_eq!(flat, validated);
    assert_eq!(flat.to_vec(), merge(&a, &b));
}

proptest! {
    #[test]
    fn test_merge_preserves_multiset_and_order(
        a in sorted_lanes(12),
        b in sorted_lanes(12)
    ) {
        let out = merge(&a, &b);
        let mut expected = a.clone();
        expected.extend(&b);
        expected.sort_unstable();
        prop_assert_eq!(out, expected);
    }

    #[test]
    fn test_merge_is_deterministic(a in sorted_lanes(6), b in sorted_lanes(6)) {
        prop_assert_eq!(merge(&a, &b), merge(&a, &b));
    }
}
