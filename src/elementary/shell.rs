use crate::{exchange, less};

sort_impl!("shell");

/// Shell sort with the 3h+1 gap sequence.
pub fn sort<T: Ord>(v: &mut [T]) {
    let len = v.len();

    for h in gaps(len) {
        // h-sort the slice, each of the h interleaved subsequences ends up sorted.
        for i in h..len {
            let mut j = i;
            while j >= h && less(&v[j], &v[j - h]) {
                exchange(v, j, j - h);
                j -= h;
            }
        }
    }
}

/// Gaps used for a slice of length `len`, largest first.
///
/// The largest gap is the first member of 1, 4, 13, 40, ... that is not below `len / 3`. Every
/// following gap is the previous one divided by 3, so the sequence ends with 1 unless `len` is 0.
pub fn gaps(len: usize) -> impl Iterator<Item = usize> {
    let mut h = 1;
    while h < len / 3 {
        h = 3 * h + 1;
    }

    let start = if len == 0 { 0 } else { h };
    std::iter::successors(Some(start), |&h| Some(h / 3)).take_while(|&h| h >= 1)
}
