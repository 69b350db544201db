//! crates/sstr/src/buffer.rs
//!
//! The [`SStr`] byte string: construction, views, appends and derivation.

use std::ffi::{CStr, c_char};
use std::fmt;
use std::ops::Deref;

use crate::error::{AllocationError, Result};
use crate::nul_terminated_prefix;
use crate::storage::Storage;

/// Owned, growable byte string with an explicit length and a maintained
/// terminator.
///
/// Content up to [`INLINE_CAPACITY`](crate::INLINE_CAPACITY) bytes is stored
/// inline; longer content moves to an exactly sized heap allocation that is
/// kept for the lifetime of the value. Dropping the value releases it.
#[derive(Clone)]
pub struct SStr {
    len: usize,
    storage: Storage,
}

impl SStr {
    /// Creates an empty string using inline storage.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            len: 0,
            storage: Storage::empty(),
        }
    }

    /// Creates a string holding a copy of `bytes`.
    ///
    /// The caller keeps ownership of `bytes`; the content is always copied.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self {
            len: bytes.len(),
            storage: Storage::with_content(bytes)?,
        })
    }

    /// Creates a string from the bytes of `text`, excluding its terminator.
    pub fn from_c_str(text: &CStr) -> Result<Self> {
        Self::from_bytes(text.to_bytes())
    }

    /// Creates a string from the bytes of `bytes` preceding its first zero
    /// byte, or from the whole slice when it has none.
    pub fn from_nul_terminated(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(nul_terminated_prefix(bytes))
    }

    /// Number of content bytes, excluding the terminator.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Reports whether the string holds no content.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of content bytes the current storage can hold without
    /// reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Reports whether the content is stored inline.
    ///
    /// A string that was ever promoted to the heap stays there, even after
    /// [`clear`](Self::clear).
    #[must_use]
    pub const fn is_inline(&self) -> bool {
        self.storage.is_inline()
    }

    /// Content bytes, excluding the terminator.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage.bytes()[..self.len]
    }

    /// Content bytes followed by the terminator.
    #[must_use]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.storage.bytes()[..=self.len]
    }

    /// Views the content as a C string.
    ///
    /// Consumers of a C string stop at the first zero byte, so content with
    /// embedded zero bytes appears truncated through this view.
    #[must_use]
    pub fn as_c_str(&self) -> &CStr {
        CStr::from_bytes_until_nul(self.as_bytes_with_nul()).unwrap_or_default()
    }

    /// Pointer to the terminated content for interop with C string APIs.
    ///
    /// The pointer is valid while `self` is borrowed and unmodified.
    #[must_use]
    pub fn as_ptr(&self) -> *const c_char {
        self.as_bytes_with_nul().as_ptr().cast()
    }

    /// Extends the string by `count` zero bytes.
    pub fn append_zeros(&mut self, count: usize) -> Result<()> {
        if count == 0 {
            return Ok(());
        }

        let new_len = self
            .len
            .checked_add(count)
            .ok_or_else(AllocationError::overflow)?;
        self.storage.extend_zeroed(self.len, new_len)?;
        self.len = new_len;
        Ok(())
    }

    /// Appends a copy of `bytes`.
    pub fn append_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let start = self.len;
        self.append_zeros(bytes.len())?;
        self.storage.bytes_mut()[start..self.len].copy_from_slice(bytes);
        Ok(())
    }

    /// Appends the content of `other`.
    pub fn append(&mut self, other: &Self) -> Result<()> {
        self.append_bytes(other.as_bytes())
    }

    /// Appends the current content to itself.
    pub fn append_self(&mut self) -> Result<()> {
        let len = self.len;
        self.append_zeros(len)?;
        self.storage.bytes_mut().copy_within(..len, len);
        Ok(())
    }

    /// Appends the bytes of `text`, excluding its terminator.
    pub fn append_c_str(&mut self, text: &CStr) -> Result<()> {
        self.append_bytes(text.to_bytes())
    }

    /// Appends the bytes of `bytes` preceding its first zero byte.
    pub fn append_nul_terminated(&mut self, bytes: &[u8]) -> Result<()> {
        self.append_bytes(nul_terminated_prefix(bytes))
    }

    /// Returns an independent copy of the string.
    pub fn duplicate(&self) -> Result<Self> {
        Self::from_bytes(self.as_bytes())
    }

    /// Returns up to `max_len` bytes starting at byte offset `index`.
    ///
    /// An `index` at or past the end yields an empty string.
    pub fn substring(&self, index: usize, max_len: usize) -> Result<Self> {
        let start = index.min(self.len);
        let take = max_len.min(self.len - start);
        Self::from_bytes(&self.as_bytes()[start..start + take])
    }

    /// Removes all content, keeping the current storage and capacity.
    pub fn clear(&mut self) {
        self.len = 0;
        self.storage.clear();
    }

    /// Consumes the string and returns its content without the terminator.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        match self.storage {
            Storage::Inline(inline) => inline[..self.len].to_vec(),
            Storage::Heap(mut heap) => {
                heap.truncate(self.len);
                heap
            }
        }
    }
}

impl Default for SStr {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for SStr {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for SStr {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl TryFrom<&[u8]> for SStr {
    type Error = AllocationError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

impl TryFrom<&str> for SStr {
    type Error = AllocationError;

    fn try_from(text: &str) -> Result<Self> {
        Self::from_bytes(text.as_bytes())
    }
}

impl TryFrom<&CStr> for SStr {
    type Error = AllocationError;

    fn try_from(text: &CStr) -> Result<Self> {
        Self::from_c_str(text)
    }
}

impl fmt::Debug for SStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.as_bytes().escape_ascii())
    }
}

impl fmt::Display for SStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&String::from_utf8_lossy(self.as_bytes()), f)
    }
}
