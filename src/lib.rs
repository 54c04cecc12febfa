macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl $crate::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }
        }
    };
}

pub mod elementary;
pub mod error;
pub mod merge;
pub mod patterns;

mod algorithm;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use elementary::{insertion, insertion_improved, selection, shell};
pub use error::SortError;
pub use merge::{bottom_up, top_down};

/// Common contract of every algorithm in the catalog.
///
/// Each algorithm module exposes a zero-sized `SortImpl` implementing this, next to a free `sort`
/// function with the same behavior.
pub trait Sort {
    fn name() -> String;

    /// Reorders `arr` in place into non-decreasing order.
    fn sort<T>(arr: &mut [T])
    where
        T: Ord;
}

/// Returns `true` if `a` orders strictly before `b`.
#[inline]
pub fn less<T: Ord>(a: &T, b: &T) -> bool {
    a < b
}

/// Swaps the elements at `i` and `j`.
///
/// Panics if either index is out of bounds.
#[inline]
pub fn exchange<T>(v: &mut [T], i: usize, j: usize) {
    v.swap(i, j);
}

/// Returns `true` if no element orders strictly before its left neighbor.
pub fn is_sorted<T: Ord>(v: &[T]) -> bool {
    v.windows(2).all(|w| !less(&w[1], &w[0]))
}

/// Renders `v` as space-separated elements.
pub fn show<T: std::fmt::Display>(v: &[T]) -> String {
    let mut out = String::new();
    for (i, val) in v.iter().enumerate() {
        if i != 0 {
            out.push(' ');
        }
        out.push_str(&val.to_string());
    }

    out
}
