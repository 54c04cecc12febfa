use std::fmt;
use std::str::FromStr;

use log::trace;

use crate::error::SortError;
use crate::{bottom_up, insertion, insertion_improved, selection, shell, top_down, Sort};

/// Run-time choice of one algorithm from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Selection,
    Insertion,
    ImprovedInsertion,
    Shell,
    TopDownMerge,
    BottomUpMerge,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::ImprovedInsertion,
        Algorithm::Shell,
        Algorithm::TopDownMerge,
        Algorithm::BottomUpMerge,
    ];

    /// Same as `Sort::name` of the matching `SortImpl`.
    pub fn name(self) -> String {
        match self {
            Algorithm::Selection => selection::SortImpl::name(),
            Algorithm::Insertion => insertion::SortImpl::name(),
            Algorithm::ImprovedInsertion => insertion_improved::SortImpl::name(),
            Algorithm::Shell => shell::SortImpl::name(),
            Algorithm::TopDownMerge => top_down::SortImpl::name(),
            Algorithm::BottomUpMerge => bottom_up::SortImpl::name(),
        }
    }

    /// Whether equal elements keep their input order.
    pub fn is_stable(self) -> bool {
        matches!(
            self,
            Algorithm::Insertion
                | Algorithm::ImprovedInsertion
                | Algorithm::TopDownMerge
                | Algorithm::BottomUpMerge
        )
    }

    pub fn sort<T: Ord>(self, v: &mut [T]) {
        trace!("{}: sorting {} elements", self, v.len());

        match self {
            Algorithm::Selection => selection::sort(v),
            Algorithm::Insertion => insertion::sort(v),
            Algorithm::ImprovedInsertion => insertion_improved::sort(v),
            Algorithm::Shell => shell::sort(v),
            Algorithm::TopDownMerge => top_down::sort(v),
            Algorithm::BottomUpMerge => bottom_up::sort(v),
        }
    }

    /// Like [`Algorithm::sort`], but reports scratch allocation failure instead of panicking.
    pub fn try_sort<T: Ord>(self, v: &mut [T]) -> Result<(), SortError> {
        trace!("{}: sorting {} elements", self, v.len());

        match self {
            Algorithm::TopDownMerge => top_down::try_sort(v),
            Algorithm::BottomUpMerge => bottom_up::try_sort(v),
            Algorithm::Selection => {
                selection::sort(v);
                Ok(())
            }
            Algorithm::Insertion => {
                insertion::sort(v);
                Ok(())
            }
            Algorithm::ImprovedInsertion => {
                insertion_improved::sort(v);
                Ok(())
            }
            Algorithm::Shell => {
                shell::sort(v);
                Ok(())
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = Algorithm::ALL.map(Algorithm::name).join(", ");
        write!(f, "unknown algorithm '{}', expected one of: {names}", self.0)
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Algorithm::ALL
            .into_iter()
            .find(|alg| alg.name() == s)
            .ok_or_else(|| UnknownAlgorithm(s.to_owned()))
    }
}
