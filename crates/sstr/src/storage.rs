//! crates/sstr/src/storage.rs
//!
//! Inline and heap storage backing [`SStr`](crate::SStr).

use crate::error::{AllocationError, Result};
use crate::trace::{trace_allocation_failure, trace_grow, trace_promote};

/// Largest content length, in bytes, kept inline without a heap allocation.
pub const INLINE_CAPACITY: usize = 17;

/// Storage for the content and its terminator.
///
/// `Heap` vectors always have `len() == content length + 1`; the trailing
/// element is the terminator. `Inline` arrays hold the terminator at the
/// content length and unspecified bytes after it.
#[derive(Clone)]
pub(crate) enum Storage {
    Inline([u8; INLINE_CAPACITY + 1]),
    Heap(Vec<u8>),
}

impl Storage {
    pub(crate) const fn empty() -> Self {
        Self::Inline([0; INLINE_CAPACITY + 1])
    }

    /// Copies `content` into fresh storage followed by a terminator.
    pub(crate) fn with_content(content: &[u8]) -> Result<Self> {
        if content.len() <= INLINE_CAPACITY {
            let mut inline = [0; INLINE_CAPACITY + 1];
            inline[..content.len()].copy_from_slice(content);
            return Ok(Self::Inline(inline));
        }

        let required = content.len().checked_add(1).ok_or_else(AllocationError::overflow)?;
        let mut heap = Vec::new();
        reserve_exact(&mut heap, required)?;
        heap.extend_from_slice(content);
        heap.push(0);
        Ok(Self::Heap(heap))
    }

    pub(crate) const fn is_inline(&self) -> bool {
        matches!(self, Self::Inline(_))
    }

    /// Content capacity, excluding the terminator slot.
    pub(crate) fn capacity(&self) -> usize {
        match self {
            Self::Inline(_) => INLINE_CAPACITY,
            Self::Heap(heap) => heap.capacity().saturating_sub(1),
        }
    }

    pub(crate) fn bytes(&self) -> &[u8] {
        match self {
            Self::Inline(inline) => inline.as_slice(),
            Self::Heap(heap) => heap.as_slice(),
        }
    }

    pub(crate) fn bytes_mut(&mut self) -> &mut [u8] {
        match self {
            Self::Inline(inline) => inline.as_mut_slice(),
            Self::Heap(heap) => heap.as_mut_slice(),
        }
    }

    /// Extends content of length `length` to `new_length` zero bytes,
    /// promoting or growing as needed and rewriting the terminator.
    ///
    /// Nothing is modified when the allocation fails.
    pub(crate) fn extend_zeroed(&mut self, length: usize, new_length: usize) -> Result<()> {
        debug_assert!(new_length >= length);

        let promoted = match self {
            Self::Inline(inline) if new_length <= INLINE_CAPACITY => {
                inline[length..=new_length].fill(0);
                None
            }
            Self::Inline(inline) => {
                let required = new_length
                    .checked_add(1)
                    .ok_or_else(AllocationError::overflow)?;
                let mut heap = Vec::new();
                reserve_exact(&mut heap, required)?;
                trace_promote(length, required);
                heap.extend_from_slice(&inline[..length]);
                heap.resize(required, 0);
                Some(heap)
            }
            Self::Heap(heap) => {
                let required = new_length
                    .checked_add(1)
                    .ok_or_else(AllocationError::overflow)?;
                if required > heap.capacity() {
                    trace_grow(heap.capacity(), required);
                }
                reserve_exact(heap, required)?;
                heap.truncate(length);
                heap.resize(required, 0);
                None
            }
        };

        if let Some(heap) = promoted {
            *self = Self::Heap(heap);
        }
        Ok(())
    }

    /// Drops all content while keeping the allocation and mode.
    pub(crate) fn clear(&mut self) {
        match self {
            Self::Inline(inline) => inline[0] = 0,
            Self::Heap(heap) => {
                heap.clear();
                heap.push(0);
            }
        }
    }
}

/// Ensures `heap` can hold `required` elements in total without over-allocating.
fn reserve_exact(heap: &mut Vec<u8>, required: usize) -> Result<()> {
    let additional = required.saturating_sub(heap.len());
    heap.try_reserve_exact(additional).map_err(|_| {
        trace_allocation_failure(required);
        AllocationError::new(required)
    })
}
