//! Storage tracing: promotion, growth and allocation failures.

use tracing::{debug, trace};

/// Trace the one-way move from inline to heap storage.
#[inline]
pub(crate) fn trace_promote(length: usize, required: usize) {
    debug!(
        target: "sstr::buffer",
        operation = "promote",
        length = length,
        required = required,
        "promoting inline storage to heap ({} -> {} bytes)",
        length,
        required
    );
}

/// Trace a heap reallocation.
#[inline]
pub(crate) fn trace_grow(capacity: usize, required: usize) {
    trace!(
        target: "sstr::buffer",
        operation = "grow",
        capacity = capacity,
        required = required,
        "growing heap storage from {} to {} bytes",
        capacity,
        required
    );
}

/// Trace an allocation the allocator refused.
#[inline]
pub(crate) fn trace_allocation_failure(requested: usize) {
    debug!(
        target: "sstr::buffer",
        operation = "allocate",
        requested = requested,
        "allocation of {} bytes failed",
        requested
    );
}
