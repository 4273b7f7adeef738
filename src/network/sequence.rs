//! Streaming merge of two ascending sequences of vectors
//!
//! Each input block (one vector) is internally ascending, so its lane 0
//! is its minimum. The merge keeps one pending "carry" vector: every
//! step takes the source block with the smaller head, merges it with
//! the carry through [`bitonic_sort_pair`], emits the low half and keeps
//! the high half as the new carry. Extra state is O(1) vectors.

use std::iter::Peekable;

use crate::network::bitonic::bitonic_sort_pair;
use crate::simd::SimdVector;

/// Merge two ascending streams of vectors, handing each output vector to `emit`.
///
/// Emits exactly as many vectors as the two sources hold together, in
/// ascending order. An empty side passes the other through unchanged.
pub fn merge_streams<V, I1, I2, F>(src1: I1, src2: I2, mut emit: F)
where
    V: SimdVector,
    I1: IntoIterator<Item = V>,
    I2: IntoIterator<Item = V>,
    F: FnMut(V),
{
    let mut src1 = src1.into_iter().peekable();
    let mut src2 = src2.into_iter().peekable();

    let (mut low, mut carry) = match (src1.next(), src2.next()) {
        (Some(a), Some(b)) => (a, b),
        (Some(a), None) => {
            emit(a);
            src1.for_each(emit);
            return;
        }
        (None, Some(b)) => {
            emit(b);
            src2.for_each(emit);
            return;
        }
        (None, None) => return,
    };

    bitonic_sort_pair(&mut low, &mut carry);
    emit(low);

    while let Some(mut next) = next_block(&mut src1, &mut src2) {
        bitonic_sort_pair(&mut next, &mut carry);
        emit(next);
    }

    emit(carry);
}

/// Pull the block with the smaller head; drain whichever side remains
/// once the other is exhausted
#[inline]
fn next_block<V, I1, I2>(src1: &mut Peekable<I1>, src2: &mut Peekable<I2>) -> Option<V>
where
    V: SimdVector,
    I1: Iterator<Item = V>,
    I2: Iterator<Item = V>,
{
    let take_first = match (src1.peek(), src2.peek()) {
        (Some(x), Some(y)) => x.first() <= y.first(),
        (Some(_), None) => true,
        (None, Some(_)) => false,
        (None, None) => return None,
    };
    if take_first {
        src1.next()
    } else {
        src2.next()
    }
}

/// Merge two ascending vector sequences into `dst`.
///
/// `dst.len()` must equal `src1.len() + src2.len()`; the common case is
/// two sources of `len` vectors and a destination of `2 * len`.
pub fn merge_sequences<V: SimdVector>(dst: &mut [V], src1: &[V], src2: &[V]) {
    debug_assert_eq!(dst.len(), src1.len() + src2.len());
    let mut out = dst.iter_mut();
    merge_streams(src1.iter().copied(), src2.iter().copied(), |v| {
        if let Some(slot) = out.next() {
            *slot = v;
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::LANES;
    use crate::simd::{load_vectors, to_vec, I32x4, Native};

    fn merge(a: &[i32], b: &[i32]) -> Vec<i32> {
        let src1: Vec<Native> = load_vectors(a);
        let src2: Vec<Native> = load_vectors(b);
        let mut dst = vec![Native::splat(0); src1.len() + src2.len()];
        merge_sequences(&mut dst, &src1, &src2);
        to_vec(&dst)
    }

    #[test]
    fn test_single_block_each() {
        assert_eq!(merge(&[1, 5, 9, 13], &[2, 6, 10, 14]), vec![1, 2, 5, 6, 9, 10, 13, 14]);
    }

    #[test]
    fn test_disjoint_sequences_drain() {
        let out = merge(&[1, 2, 3, 4, 5, 6, 7, 8], &[10, 11, 12, 13, 14, 15, 16, 17]);
        let mut expected: Vec<i32> = (1..=8).collect();
        expected.extend(10..=17);
        assert_eq!(out, expected);

        let out = merge(&[10, 11, 12, 13, 14, 15, 16, 17], &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(out, expected);
    }

    #[test]
    fn test_empty_side_passes_through() {
        assert_eq!(merge(&[3, 4, 4, 9], &[]), vec![3, 4, 4, 9]);
        assert_eq!(merge(&[], &[3, 4, 4, 9]), vec![3, 4, 4, 9]);
        assert_eq!(merge(&[], &[]), Vec::<i32>::new());
    }

    #[test]
    fn test_unequal_lengths() {
        let a: Vec<i32> = (0..40).map(|x| x * 3).collect();
        let b: Vec<i32> = (0..12).map(|x| x * 5 + 1).collect();
        let mut expected = a.clone();
        expected.extend(&b);
        expected.sort_unstable();
        assert_eq!(merge(&a, &b), expected);
    }

    #[test]
    fn test_merge_streams_emits_every_block() {
        let a: Vec<I32x4> = load_vectors(&[0, 0, 1, 1, 2, 2, 3, 3]);
        let b: Vec<I32x4> = load_vectors(&[0, 1, 2, 3]);
        let mut emitted = Vec::new();
        merge_streams(a, b, |v: I32x4| emitted.push(v));
        assert_eq!(emitted.len(), 3);
        assert_eq!(to_vec(&emitted), vec![0, 0, 0, 1, 1, 1, 2, 2, 2, 3, 3, 3]);
        assert_eq!(emitted.len() * LANES, 12);
    }
}
