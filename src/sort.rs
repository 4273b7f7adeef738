//! Whole-array sorting built on the networks
//!
//! The pipeline is bottom-up merge sort with register-level leaves:
//!
//! 1. Every 16-integer tile is loaded into W registers and fully sorted
//!    with [`sort_block`]. A short last tile is padded in registers with
//!    [`PAD_VALUE`].
//! 2. Runs of doubling width are merged with the streaming sequence merge,
//!    ping-ponging between the data buffer and a caller-owned auxiliary
//!    buffer. An odd trailing run is copied through.
//!
//! [`sort_i32_with_aux`] never allocates. [`sort_i32`] is a convenience
//! that pads arbitrary lengths and owns its scratch buffers.

use aligned_vec::AVec;
use log::trace;

use crate::constants::{ALIGN, LANES, PAD_VALUE, TILE};
use crate::network::{merge_streams, sort_block};
use crate::simd::{Native, SimdVector};
use crate::types::merge_pass_count;

/// Sort `data` in place using `aux` as scratch, with the native backend.
///
/// `data.len()` must be a multiple of W and `aux` at least as long as
/// `data`. Otherwise the output is unspecified (but memory safe).
pub fn sort_i32_with_aux(data: &mut [i32], aux: &mut [i32]) {
    sort_with_backend::<Native>(data, aux);
}

/// [`sort_i32_with_aux`] pinned to backend `V`
pub fn sort_with_backend<V: SimdVector>(data: &mut [i32], aux: &mut [i32]) {
    debug_assert_eq!(data.len() % LANES, 0);
    debug_assert!(aux.len() >= data.len());

    let len = data.len();
    let aux = &mut aux[..len];

    sort_tiles::<V>(data);

    let passes = merge_pass_count(TILE, len);
    let mut width = TILE;
    let mut in_aux = false;
    while width < len {
        if in_aux {
            merge_pass::<V>(aux, data, width);
        } else {
            merge_pass::<V>(data, aux, width);
        }
        in_aux = !in_aux;
        width *= 2;
    }

    if in_aux {
        data.copy_from_slice(aux);
    }

    trace!(
        "sorted {} integers: {} merge passes, copied back from aux: {}",
        len,
        passes,
        in_aux
    );
}

/// Sort any slice of `i32`, allocating aligned scratch buffers.
///
/// Lengths that are not a multiple of W are padded with [`PAD_VALUE`].
pub fn sort_i32(data: &mut [i32]) {
    if data.len() < 2 {
        return;
    }

    let padded = (data.len() + LANES - 1) / LANES * LANES;
    let mut buf: AVec<i32> = AVec::from_iter(
        ALIGN,
        data.iter()
            .copied()
            .chain(std::iter::repeat(PAD_VALUE))
            .take(padded),
    );
    let mut aux: AVec<i32> = AVec::from_iter(ALIGN, std::iter::repeat(0).take(padded));

    trace!("padding {} integers to {}", data.len(), padded);
    sort_i32_with_aux(&mut buf, &mut aux);

    let len = data.len();
    data.copy_from_slice(&buf[..len]);
}

/// Merge two ascending flat arrays (lengths multiples of W) into `dst`.
///
/// `dst.len()` must equal `src1.len() + src2.len()`.
pub fn merge_sorted_i32(dst: &mut [i32], src1: &[i32], src2: &[i32]) {
    merge_flat::<Native>(dst, src1, src2);
}

/// Register-sort each tile of `data` into one ascending run of up to
/// [`TILE`] integers.
fn sort_tiles<V: SimdVector>(data: &mut [i32]) {
    for chunk in data.chunks_mut(TILE) {
        let mut tile = [V::splat(PAD_VALUE); LANES];
        for (v, src) in tile.iter_mut().zip(chunk.chunks_exact(LANES)) {
            *v = V::load(src);
        }
        sort_block(&mut tile);
        for (v, dst) in tile.iter().zip(chunk.chunks_exact_mut(LANES)) {
            v.store(dst);
        }
    }
}

/// One merge pass: adjacent runs of `width` integers in `src` become
/// runs of `2 * width` in `dst`
fn merge_pass<V: SimdVector>(src: &[i32], dst: &mut [i32], width: usize) {
    for (pair, out) in src.chunks(2 * width).zip(dst.chunks_mut(2 * width)) {
        if pair.len() <= width {
            out.copy_from_slice(pair);
            continue;
        }
        let (left, right) = pair.split_at(width);
        merge_flat::<V>(out, left, right);
    }
}

fn merge_flat<V: SimdVector>(dst: &mut [i32], src1: &[i32], src2: &[i32]) {
    debug_assert_eq!(dst.len(), src1.len() + src2.len());
    let mut out = dst.chunks_exact_mut(LANES);
    merge_streams(
        src1.chunks_exact(LANES).map(V::load),
        src2.chunks_exact(LANES).map(V::load),
        |v: V| {
            if let Some(slot) = out.next() {
                v.store(slot);
            }
        },
    );
}
