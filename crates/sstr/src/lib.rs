#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `sstr` provides [`SStr`], an owned byte string that carries its length
//! explicitly while keeping a zero byte after the content at all times. The
//! terminator lets the content be handed to APIs expecting a conventional
//! null-terminated string (see [`SStr::as_c_str`] and [`SStr::as_ptr`])
//! without copying, while the explicit length allows embedded zero bytes and
//! O(1) length queries.
//!
//! # Design
//!
//! Short strings live inline inside the value. Once the content grows past
//! [`INLINE_CAPACITY`] bytes the string is promoted to a heap allocation sized
//! exactly to the requirement. Promotion is one-way: clearing or shrinking
//! never moves a heap-backed string back inline, so capacity obtained once is
//! kept until the value is dropped.
//!
//! # Invariants
//!
//! - The storage always holds at least `len() + 1` bytes and the byte at
//!   offset `len()` is zero.
//! - The storage mode is an explicit discriminant, never inferred from the
//!   length.
//! - Every [`SStr`] exclusively owns its bytes; duplication copies.
//!
//! # Errors
//!
//! Operations that may allocate return [`AllocationError`] instead of
//! aborting. On failure the receiver keeps its previous content.
//!
//! # Examples
//!
//! ```
//! use sstr::SStr;
//!
//! let mut greeting = SStr::from_bytes(b"hello").unwrap();
//! greeting.append_bytes(b" world").unwrap();
//!
//! assert_eq!(greeting.len(), 11);
//! assert_eq!(greeting.as_c_str().to_bytes(), b"hello world");
//! assert_eq!(greeting.as_bytes_with_nul().last(), Some(&0));
//! ```

mod buffer;
mod compare;
mod error;
mod storage;
mod trace;
mod write;

pub use crate::buffer::SStr;
pub use crate::error::{AllocationError, Result};
pub use crate::storage::INLINE_CAPACITY;

/// Returns the prefix of `bytes` that precedes the first zero byte.
///
/// When `bytes` contains no zero byte the whole slice is returned, so callers
/// holding a slice that was cut before its terminator still see all of it.
#[must_use]
pub fn nul_terminated_prefix(bytes: &[u8]) -> &[u8] {
    match memchr::memchr(0, bytes) {
        Some(end) => &bytes[..end],
        None => bytes,
    }
}
