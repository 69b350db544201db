//! Rendering tracing: directive failures and bounded truncation.

use tracing::{debug, trace};

use crate::error::FormatError;

/// Trace a render that stopped on an error.
#[inline]
pub(crate) fn trace_render_failure(format_len: usize, error: &FormatError) {
    debug!(
        target: "sstr::format",
        operation = "render",
        format_len = format_len,
        offset = error.offset(),
        "render failed: {}",
        error
    );
}

/// Trace output dropped by a full fixed buffer.
#[inline]
pub(crate) fn trace_truncated(capacity: usize, written: usize) {
    trace!(
        target: "sstr::format",
        operation = "render_bounded",
        capacity = capacity,
        written = written,
        "bounded output truncated after {} bytes",
        written
    );
}
