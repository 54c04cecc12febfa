use std::mem::MaybeUninit;

use super::{alloc_scratch, merge};
use crate::error::SortError;

sort_impl!("merge_top_down");

/// Recursive merge sort.
///
/// Panics if the scratch buffer can't be allocated, see [`try_sort`] for the fallible version.
pub fn sort<T: Ord>(v: &mut [T]) {
    if let Err(err) = try_sort(v) {
        panic!("merge_top_down: {err}");
    }
}

pub fn try_sort<T: Ord>(v: &mut [T]) -> Result<(), SortError> {
    let len = v.len();

    if len < 2 {
        // These inputs are always sorted.
        return Ok(());
    }

    let mut buf = alloc_scratch::<T>(len)?;
    sort_range(v, buf.spare_capacity_mut(), 0, len - 1);

    Ok(())
}

fn sort_range<T: Ord>(v: &mut [T], scratch: &mut [MaybeUninit<T>], lo: usize, hi: usize) {
    if hi <= lo {
        return;
    }

    let mid = lo + (hi - lo) / 2;
    sort_range(v, scratch, lo, mid);
    sort_range(v, scratch, mid + 1, hi);
    merge(v, scratch, lo, mid, hi);
}
