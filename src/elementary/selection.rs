use crate::{exchange, less};

sort_impl!("selection");

/// Selection sort. Always O(n^2) comparisons, at most `len` exchanges.
pub fn sort<T: Ord>(v: &mut [T]) {
    let len = v.len();

    for i in 0..len {
        let mut min = i;
        for j in (i + 1)..len {
            if less(&v[j], &v[min]) {
                min = j;
            }
        }
        exchange(v, i, min);
    }
}
