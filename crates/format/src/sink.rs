//! crates/format/src/sink.rs
//!
//! Output destinations for rendered bytes.

use sstr::SStr;

use crate::error::FormatResult;

const FILL_CHUNK: usize = 64;

/// Destination for rendered output.
pub trait Sink {
    /// Writes `bytes` after the previous output.
    fn put(&mut self, bytes: &[u8]) -> FormatResult<()>;

    /// Writes `byte` `count` times.
    fn put_repeated(&mut self, byte: u8, count: usize) -> FormatResult<()> {
        put_chunked(self, byte, count)
    }
}

fn put_chunked<S: Sink + ?Sized>(sink: &mut S, byte: u8, mut count: usize) -> FormatResult<()> {
    let chunk = [byte; FILL_CHUNK];
    while count > 0 {
        let step = count.min(FILL_CHUNK);
        sink.put(&chunk[..step])?;
        count -= step;
    }
    Ok(())
}

impl Sink for SStr {
    fn put(&mut self, bytes: &[u8]) -> FormatResult<()> {
        self.append_bytes(bytes)?;
        Ok(())
    }

    fn put_repeated(&mut self, byte: u8, count: usize) -> FormatResult<()> {
        if byte == 0 {
            self.append_zeros(count)?;
            return Ok(());
        }
        put_chunked(self, byte, count)
    }
}

/// Result of rendering into a fixed buffer.
///
/// A truncated render is not an error: [`written`](Self::written) reports how
/// much of the output fit.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BoundedOutput {
    written: usize,
    truncated: bool,
}

impl BoundedOutput {
    /// Number of content bytes written, excluding the terminator.
    #[must_use]
    pub const fn written(&self) -> usize {
        self.written
    }

    /// Reports whether output was dropped because the buffer was full.
    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        self.truncated
    }
}

/// Sink over a caller-supplied slice that never allocates.
///
/// The last byte of a non-empty buffer is reserved for a terminator written
/// by [`finish`](Self::finish); output beyond the remaining room is dropped.
#[derive(Debug)]
pub struct BoundedSink<'a> {
    buf: &'a mut [u8],
    limit: usize,
    written: usize,
    truncated: bool,
}

impl<'a> BoundedSink<'a> {
    /// Wraps `buf` for bounded rendering.
    pub fn new(buf: &'a mut [u8]) -> Self {
        let limit = buf.len().saturating_sub(1);
        Self {
            buf,
            limit,
            written: 0,
            truncated: false,
        }
    }

    /// Bytes written so far.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.written]
    }

    /// Terminates the output and reports what was written.
    pub fn finish(self) -> BoundedOutput {
        if let Some(terminator) = self.buf.get_mut(self.written) {
            *terminator = 0;
        }
        BoundedOutput {
            written: self.written,
            truncated: self.truncated,
        }
    }
}

impl Sink for BoundedSink<'_> {
    fn put(&mut self, bytes: &[u8]) -> FormatResult<()> {
        let room = self.limit - self.written;
        let take = bytes.len().min(room);
        self.buf[self.written..self.written + take].copy_from_slice(&bytes[..take]);
        self.written += take;
        if take < bytes.len() {
            self.truncated = true;
        }
        Ok(())
    }

    fn put_repeated(&mut self, byte: u8, count: usize) -> FormatResult<()> {
        let room = self.limit - self.written;
        let take = count.min(room);
        self.buf[self.written..self.written + take].fill(byte);
        self.written += take;
        if take < count {
            self.truncated = true;
        }
        Ok(())
    }
}
