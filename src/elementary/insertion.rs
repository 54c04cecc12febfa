use crate::{exchange, less};

sort_impl!("insertion");

/// Insertion sort using adjacent exchanges. Stable, linear on already sorted input.
pub fn sort<T: Ord>(v: &mut [T]) {
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && less(&v[j], &v[j - 1]) {
            exchange(v, j, j - 1);
            j -= 1;
        }
    }
}
