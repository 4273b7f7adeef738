//! Validating front ends for the networks.
//!
//! The networks in [`crate::network`] trust their callers. The functions
//! here check shapes and ascending preconditions first and report a
//! [`SortError`] instead of producing unsorted output. They work on flat
//! `i32` arrays and may allocate.

use log::debug;

use crate::constants::{LANES, TILE};
use crate::error::{Result, SortError};
use crate::network;
use crate::simd::{load_vectors, store_vectors, Native};
use crate::sort::{merge_sorted_i32, sort_i32_with_aux};
use crate::types::PowerOfTwo;

/// Index `i` of the first descent `data[i] > data[i + 1]`, if any
pub fn first_descent(data: &[i32]) -> Option<usize> {
    data.windows(2).position(|w| w[0] > w[1])
}

fn check_lane_multiple(len: usize) -> Result<()> {
    if len % LANES != 0 {
        debug!("rejecting length {}: not a multiple of {}", len, LANES);
        return Err(SortError::NotLaneMultiple { len, lanes: LANES });
    }
    Ok(())
}

fn check_length(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        debug!("rejecting length {}: expected {}", actual, expected);
        return Err(SortError::LengthMismatch { expected, actual });
    }
    Ok(())
}

/// `offset` is added to the reported index so errors point into the caller's buffer
fn check_ascending(data: &[i32], offset: usize) -> Result<()> {
    match first_descent(data) {
        Some(i) => {
            debug!("rejecting input: descent at index {}", offset + i);
            Err(SortError::NotAscending { index: offset + i })
        }
        None => Ok(()),
    }
}

/// Register-sort one 16-integer tile: each group of W becomes ascending
pub fn register_sort(data: &mut [i32]) -> Result<()> {
    check_length(TILE, data.len())?;
    let mut v: Vec<Native> = load_vectors(data);
    network::register_sort(&mut v);
    store_vectors(&v, data);
    Ok(())
}

/// Merge the two ascending halves of `data` in place.
///
/// `data` must hold a power-of-two number (>= 2) of vectors.
pub fn merge_runs(data: &mut [i32]) -> Result<()> {
    check_lane_multiple(data.len())?;
    let count = data.len() / LANES;
    if count < 2 || PowerOfTwo::new(count).is_none() {
        debug!("rejecting block of {} vectors", count);
        return Err(SortError::NotPowerOfTwo { count });
    }
    let half = data.len() / 2;
    check_ascending(&data[..half], 0)?;
    check_ascending(&data[half..], half)?;

    let mut v: Vec<Native> = load_vectors(data);
    network::merge_runs(&mut v);
    store_vectors(&v, data);
    Ok(())
}

/// Merge two ascending arrays into `dst`
pub fn merge_sequences(dst: &mut [i32], src1: &[i32], src2: &[i32]) -> Result<()> {
    check_lane_multiple(src1.len())?;
    check_lane_multiple(src2.len())?;
    check_length(src1.len() + src2.len(), dst.len())?;
    check_ascending(src1, 0)?;
    check_ascending(src2, 0)?;

    merge_sorted_i32(dst, src1, src2);
    Ok(())
}

/// Sort `data` using `aux` as scratch
pub fn sort_with_aux(data: &mut [i32], aux: &mut [i32]) -> Result<()> {
    check_lane_multiple(data.len())?;
    if aux.len() < data.len() {
        debug!("rejecting aux of {} for data of {}", aux.len(), data.len());
        return Err(SortError::LengthMismatch {
            expected: data.len(),
            actual: aux.len(),
        });
    }
    sort_i32_with_aux(data, aux);
    Ok(())
}
