use std::collections::TryReserveError;
use std::error::Error;
use std::fmt;

/// Failure modes that are runtime conditions rather than programming errors.
#[derive(Debug)]
pub enum SortError {
    /// The merge scratch buffer for `len` elements could not be allocated.
    ScratchAlloc { len: usize, source: TryReserveError },
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortError::ScratchAlloc { len, .. } => {
                write!(f, "failed to allocate merge scratch buffer for {len} elements")
            }
        }
    }
}

impl Error for SortError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SortError::ScratchAlloc { source, .. } => Some(source),
        }
    }
}
