//! crates/sstr/src/error.rs
//!
//! Error types for byte string storage.

use thiserror::Error;

/// Result type for operations that may need to allocate.
pub type Result<T> = std::result::Result<T, AllocationError>;

/// Heap storage could not be obtained for a promotion or growth.
///
/// The string that triggered the allocation keeps its previous content and
/// length when this error is returned.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
#[error("failed to allocate storage for {requested} bytes")]
pub struct AllocationError {
    requested: usize,
}

impl AllocationError {
    /// Creates an error for a request of `requested` bytes.
    #[must_use]
    pub const fn new(requested: usize) -> Self {
        Self { requested }
    }

    /// Error reported when the requested length does not fit in `usize`.
    #[must_use]
    pub const fn overflow() -> Self {
        Self::new(usize::MAX)
    }

    /// Number of bytes that were requested from the allocator.
    #[must_use]
    pub const fn requested(&self) -> usize {
        self.requested
    }
}
