//! Merge sort family. Both drivers allocate a single scratch buffer per call and build sorted runs
//! with the shared [`merge`] routine.

use std::mem::MaybeUninit;
use std::ptr;

use log::debug;

use crate::error::SortError;
use crate::less;

pub mod bottom_up;
pub mod top_down;

/// Allocates an empty buffer with room for `len` elements.
///
/// The buffer never owns elements, callers hand out its spare capacity to [`merge`].
pub(crate) fn alloc_scratch<T>(len: usize) -> Result<Vec<T>, SortError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|source| SortError::ScratchAlloc { len, source })?;

    debug!(
        "allocated merge scratch buffer: {len} elements of {} bytes",
        std::mem::size_of::<T>()
    );

    Ok(buf)
}

/// Merges the sorted runs `v[lo..=mid]` and `v[mid + 1..=hi]` into one sorted run `v[lo..=hi]`.
///
/// `v[lo..=hi]` is first copied into `scratch` at the same offsets, then written back by taking
/// the smaller head of the two runs. On ties the left run wins, which keeps the merge stable.
///
/// Panics if the bounds are malformed or `scratch` is shorter than `hi + 1`.
pub fn merge<T: Ord>(
    v: &mut [T],
    scratch: &mut [MaybeUninit<T>],
    lo: usize,
    mid: usize,
    hi: usize,
) {
    assert!(
        lo <= mid && mid < hi && hi < v.len(),
        "invalid merge bounds lo: {lo} mid: {mid} hi: {hi} for len: {}",
        v.len()
    );
    assert!(
        scratch.len() > hi,
        "scratch buffer of len {} too small to merge up to index {hi}",
        scratch.len()
    );

    let v_ptr = v.as_mut_ptr();
    // MaybeUninit<T> is guaranteed to have the same layout as T.
    let buf_ptr = scratch.as_mut_ptr() as *mut T;

    // SAFETY: `lo..=hi` is in bounds for both `v` and `scratch` as asserted above, and the two
    // allocations are distinct because `scratch` is borrowed mutably next to `v`. After the copy
    // every value of `v[lo..=hi]` is owned by `scratch`, and `hole` moves each of them back
    // exactly once, either in the loop or when it is dropped.
    unsafe {
        ptr::copy_nonoverlapping(v_ptr.add(lo), buf_ptr.add(lo), hi - lo + 1);

        let mut hole = MergeHole {
            buf: buf_ptr,
            left: lo,
            left_end: mid + 1,
            right: mid + 1,
            right_end: hi + 1,
            dest: v_ptr.add(lo),
        };

        while hole.left < hole.left_end && hole.right < hole.right_end {
            let right = buf_ptr.add(hole.right);
            let left = buf_ptr.add(hole.left);

            // If equal, prefer the left run to maintain stability.
            let to_copy = if less(&*right, &*left) {
                hole.right += 1;
                right
            } else {
                hole.left += 1;
                left
            };

            ptr::copy_nonoverlapping(to_copy, hole.dest, 1);
            hole.dest = hole.dest.add(1);
        }
        // Finally `hole` gets dropped and drains whichever run still has elements.
    }
}

// When dropped, copies the unconsumed parts of both runs, left first, into `dest..`.
struct MergeHole<T> {
    buf: *mut T,
    left: usize,
    left_end: usize,
    right: usize,
    right_end: usize,
    dest: *mut T,
}

impl<T> Drop for MergeHole<T> {
    fn drop(&mut self) {
        // SAFETY: The ranges are in bounds of the scratch buffer and hold exactly as many values
        // as there are vacated slots starting at `dest`.
        unsafe {
            let left_len = self.left_end - self.left;
            let right_len = self.right_end - self.right;
            ptr::copy_nonoverlapping(self.buf.add(self.left), self.dest, left_len);
            ptr::copy_nonoverlapping(
                self.buf.add(self.right),
                self.dest.add(left_len),
                right_len,
            );
        }
    }
}
