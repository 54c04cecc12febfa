//! Insertion sort with two refinements over the textbook version:
//!
//! 1. A first right-to-left pass carries the minimum to the front. It doubles as a sortedness
//!    check: if the pass exchanged nothing the input is already sorted and we are done.
//! 2. The remaining insertions shift elements instead of exchanging them, so the inserted value
//!    is written exactly once.

use std::mem;
use std::ptr;

use log::debug;

use crate::{exchange, less};

sort_impl!("insertion_improved");

pub fn sort<T: Ord>(v: &mut [T]) {
    let len = v.len();

    if move_min_to_front(v) == 0 {
        debug!("insertion_improved: first pass did no exchanges, {len} elements already sorted");
        return;
    }

    // v[0] is the minimum now and v[..2] is sorted.
    for i in 2..len {
        // SAFETY: i >= 2, so the sub-slice has at least 2 elements.
        unsafe {
            insert_tail(&mut v[..=i]);
        }
    }
}

/// Single descending pass of adjacent exchanges, leaving the minimum at `v[0]`.
///
/// Returns the number of exchanges done, which is zero iff `v` was sorted.
pub fn move_min_to_front<T: Ord>(v: &mut [T]) -> usize {
    let mut exchanges = 0;

    for i in (1..v.len()).rev() {
        if less(&v[i], &v[i - 1]) {
            exchange(v, i, i - 1);
            exchanges += 1;
        }
    }

    exchanges
}

// When dropped, copies from `src` into `dest`.
struct InsertionHole<T> {
    src: *const T,
    dest: *mut T,
}

impl<T> Drop for InsertionHole<T> {
    fn drop(&mut self) {
        // SAFETY: `src` is the held value and `dest` the single vacated slot of the slice.
        unsafe {
            ptr::copy_nonoverlapping(self.src, self.dest, 1);
        }
    }
}

/// Inserts `v[v.len() - 1]` into pre-sorted sequence `v[..v.len() - 1]` so that whole `v[..]`
/// becomes sorted.
///
/// # Safety
///
/// `v.len()` must be at least 2.
unsafe fn insert_tail<T: Ord>(v: &mut [T]) {
    debug_assert!(v.len() >= 2);

    let arr_ptr = v.as_mut_ptr();
    let i = v.len() - 1;

    unsafe {
        let i_ptr = arr_ptr.add(i);

        if !less(&*i_ptr, &*i_ptr.sub(1)) {
            return;
        }

        // From here on `tmp` is the value that gets compared and later written back, the copy left
        // in `v` is overwritten before anyone could observe it.
        let tmp = mem::ManuallyDrop::new(ptr::read(i_ptr));

        // If `less` panics, `hole` gets dropped and fills the vacated slot with `tmp`, so `v` still
        // holds every element exactly once.
        let mut hole = InsertionHole {
            src: &*tmp,
            dest: i_ptr.sub(1),
        };
        ptr::copy_nonoverlapping(hole.dest, i_ptr, 1);

        // The range keeps the left bound explicit, the minimum at v[0] would stop the scan anyway.
        for j in (0..(i - 1)).rev() {
            let j_ptr = arr_ptr.add(j);
            if !less(&*tmp, &*j_ptr) {
                break;
            }

            ptr::copy_nonoverlapping(j_ptr, hole.dest, 1);
            hole.dest = j_ptr;
        }
        // `hole` gets dropped and thus copies `tmp` into the remaining hole in `v`.
    }
}
