#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `sstr_format` is a `printf`-style engine that renders into
//! [`sstr::SStr`] values or into caller-supplied fixed buffers. It does its
//! own integer and fixed-point conversion and never delegates to
//! [`core::fmt`].
//!
//! # Directives
//!
//! A directive is `%` followed by optional flags in fixed order and a type
//! code:
//!
//! ```text
//! % [0] [width] [u] [x|X] [.precision] code
//! ```
//!
//! | Code | Argument | Output |
//! |------|----------|--------|
//! | `d` `l` `z` `D` `L` | integer of C `int`, C `long`, pointer, 32 or 64 bit width | decimal, or hex with `x`/`X` |
//! | `T` | [`Arg::Time`] or `i64` | decimal seconds |
//! | `f` | `f64` | fixed point, default precision 6 |
//! | `p` | [`Arg::Pointer`] | `0x` and lowercase hex |
//! | `S` | [`sstr::SStr`] | full content, embedded zeros included |
//! | `s` | byte string | content up to the first zero byte |
//! | `*s` | length, then string | exactly `length` bytes |
//! | `c` | `u8` | one byte |
//! | `Z` `N` `%` | none | a zero byte, a newline, a percent sign |
//!
//! Arguments are tagged [`Arg`] values. A directive that meets an argument
//! of the wrong kind fails with [`FormatError::ArgumentMismatch`]; the
//! engine never reinterprets one type as another.
//!
//! # Errors
//!
//! Rendering is all-or-nothing: any [`FormatError`] discards the output of
//! [`render`]. Truncation by [`render_bounded`] is reported through
//! [`BoundedOutput`] rather than as an error.
//!
//! # Examples
//!
//! ```
//! use sstr::SStr;
//! use sstr_format::sprintf;
//!
//! let name = SStr::from_bytes(b"world").unwrap();
//! let out = sprintf!("hello %S, %05D", &name, 42i32).unwrap();
//! assert_eq!(out, "hello world, 00042");
//! ```
//!
//! Bounded rendering never allocates:
//!
//! ```
//! use sstr_format::snprintf;
//!
//! let mut buf = [0u8; 8];
//! let output = snprintf!(&mut buf, "count=%d", 1234).unwrap();
//! assert!(output.is_truncated());
//! assert_eq!(&buf[..output.written()], b"count=1");
//! ```

mod argument;
mod config;
mod directive;
mod error;
mod numeric;
mod render;
mod sink;
mod trace;

pub use crate::argument::Arg;
pub use crate::config::{DEFAULT_MAX_WIDTH, DEFAULT_PRECISION, FormatConfig};
pub use crate::error::{FormatError, FormatResult};
pub use crate::numeric::MAX_PRECISION;
pub use crate::render::Formatter;
pub use crate::sink::{BoundedOutput, BoundedSink, Sink};

use sstr::SStr;

/// Renders `format` into a new [`SStr`] using the default configuration.
///
/// # Errors
///
/// See [`Formatter::render`].
pub fn render(format: impl AsRef<[u8]>, args: &[Arg<'_>]) -> FormatResult<SStr> {
    Formatter::default().render(format.as_ref(), args)
}

/// Renders `format` into `buf` using the default configuration.
///
/// # Errors
///
/// See [`Formatter::render_bounded`].
pub fn render_bounded(
    buf: &mut [u8],
    format: impl AsRef<[u8]>,
    args: &[Arg<'_>],
) -> FormatResult<BoundedOutput> {
    Formatter::default().render_bounded(buf, format.as_ref(), args)
}

/// Renders a format string and arguments into a new [`sstr::SStr`].
///
/// Each argument is converted with [`Arg::from`].
#[macro_export]
macro_rules! sprintf {
    ($format:expr $(, $arg:expr)* $(,)?) => {
        $crate::render($format, &[$($crate::Arg::from($arg)),*])
    };
}

/// Renders a format string and arguments into a fixed byte buffer.
///
/// Each argument is converted with [`Arg::from`].
#[macro_export]
macro_rules! snprintf {
    ($buf:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $crate::render_bounded($buf, $format, &[$($crate::Arg::from($arg)),*])
    };
}
