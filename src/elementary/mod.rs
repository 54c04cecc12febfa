//! Quadratic and sub-quadratic in-place sorts that need no scratch memory.

pub mod insertion;
pub mod insertion_improved;
pub mod selection;
pub mod shell;
