use std::cmp;
use std::iter;

use super::{alloc_scratch, merge};
use crate::error::SortError;

sort_impl!("merge_bottom_up");

/// Iterative merge sort, merging runs of width 1, 2, 4, ... in ascending passes.
///
/// Panics if the scratch buffer can't be allocated, see [`try_sort`] for the fallible version.
pub fn sort<T: Ord>(v: &mut [T]) {
    if let Err(err) = try_sort(v) {
        panic!("merge_bottom_up: {err}");
    }
}

pub fn try_sort<T: Ord>(v: &mut [T]) -> Result<(), SortError> {
    let len = v.len();

    if len < 2 {
        // These inputs are always sorted.
        return Ok(());
    }

    let mut buf = alloc_scratch::<T>(len)?;
    let scratch = buf.spare_capacity_mut();

    for (lo, mid, hi) in merge_ranges(len) {
        merge(v, scratch, lo, mid, hi);
    }

    Ok(())
}

/// The `(lo, mid, hi)` merges performed for a slice of length `len`, in order.
///
/// A trailing block that has no right half in the current pass yields nothing, it is already
/// sorted from the previous pass.
pub fn merge_ranges(len: usize) -> impl Iterator<Item = (usize, usize, usize)> {
    iter::successors(Some(1usize), |width| width.checked_mul(2))
        .take_while(move |&width| width < len)
        .flat_map(move |width| {
            (0..(len - width)).step_by(2 * width).map(move |lo| {
                let hi = cmp::min(lo + 2 * width - 1, len - 1);
                (lo, lo + width - 1, hi)
            })
        })
}
