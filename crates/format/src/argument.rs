//! crates/format/src/argument.rs
//!
//! Tagged arguments consumed by format directives.

use std::ffi::{CStr, c_int, c_long};
use std::time::{SystemTime, UNIX_EPOCH};

use sstr::SStr;

/// One positional argument for a format string.
///
/// Each argument carries its own type tag. Directives check the tag of the
/// argument they consume and report
/// [`FormatError::ArgumentMismatch`](crate::FormatError::ArgumentMismatch)
/// instead of reinterpreting memory.
#[derive(Clone, Copy, Debug)]
pub enum Arg<'a> {
    /// Signed 32-bit integer.
    I32(i32),
    /// Unsigned 32-bit integer.
    U32(u32),
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// Pointer-sized signed integer.
    Isize(isize),
    /// Pointer-sized unsigned integer.
    Usize(usize),
    /// Time value in seconds since the Unix epoch, for `%T`.
    Time(i64),
    /// Floating-point value, for `%f`.
    Double(f64),
    /// Address, for `%p`.
    Pointer(usize),
    /// Single byte, for `%c`.
    Char(u8),
    /// Byte string embedded by length, for `%S` and `%*s`.
    SStr(&'a SStr),
    /// Byte string read up to its first zero byte by `%s`, or by length
    /// through `%*s`.
    Str(&'a [u8]),
}

/// Integer argument widened for conversion.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Integer {
    pub(crate) value: i128,
    pub(crate) bits: u32,
}

/// Bit width of C `int`, used by `%d`.
pub(crate) const INT_BITS: u32 = c_int::BITS;

/// Bit width of C `long`, used by `%l`.
pub(crate) const LONG_BITS: u32 = c_long::BITS;

impl Arg<'_> {
    /// Short name of the argument's type, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::I32(_) => "i32",
            Self::U32(_) => "u32",
            Self::I64(_) => "i64",
            Self::U64(_) => "u64",
            Self::Isize(_) => "isize",
            Self::Usize(_) => "usize",
            Self::Time(_) => "time",
            Self::Double(_) => "double",
            Self::Pointer(_) => "pointer",
            Self::Char(_) => "char",
            Self::SStr(_) => "sstr",
            Self::Str(_) => "string",
        }
    }

    /// Widens plain integer arguments; `None` for every other tag.
    pub(crate) fn integer(&self) -> Option<Integer> {
        let (value, bits) = match *self {
            Self::I32(value) => (i128::from(value), i32::BITS),
            Self::U32(value) => (i128::from(value), u32::BITS),
            Self::I64(value) => (i128::from(value), i64::BITS),
            Self::U64(value) => (i128::from(value), u64::BITS),
            Self::Isize(value) => (value as i128, isize::BITS),
            Self::Usize(value) => (value as i128, usize::BITS),
            _ => return None,
        };
        Some(Integer { value, bits })
    }

    /// Borrowed bytes of string-like arguments.
    pub(crate) fn bytes(&self) -> Option<&[u8]> {
        match self {
            Self::SStr(value) => Some(value.as_bytes()),
            Self::Str(bytes) => Some(bytes),
            _ => None,
        }
    }
}

impl From<i32> for Arg<'_> {
    fn from(value: i32) -> Self {
        Self::I32(value)
    }
}

impl From<u32> for Arg<'_> {
    fn from(value: u32) -> Self {
        Self::U32(value)
    }
}

impl From<i64> for Arg<'_> {
    fn from(value: i64) -> Self {
        Self::I64(value)
    }
}

impl From<u64> for Arg<'_> {
    fn from(value: u64) -> Self {
        Self::U64(value)
    }
}

impl From<isize> for Arg<'_> {
    fn from(value: isize) -> Self {
        Self::Isize(value)
    }
}

impl From<usize> for Arg<'_> {
    fn from(value: usize) -> Self {
        Self::Usize(value)
    }
}

impl From<f64> for Arg<'_> {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<f32> for Arg<'_> {
    fn from(value: f32) -> Self {
        Self::Double(f64::from(value))
    }
}

impl From<u8> for Arg<'_> {
    fn from(value: u8) -> Self {
        Self::Char(value)
    }
}

impl<'a> From<&'a SStr> for Arg<'a> {
    fn from(value: &'a SStr) -> Self {
        Self::SStr(value)
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(value: &'a str) -> Self {
        Self::Str(value.as_bytes())
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(value: &'a String) -> Self {
        Self::Str(value.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for Arg<'a> {
    fn from(value: &'a [u8]) -> Self {
        Self::Str(value)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Arg<'a> {
    fn from(value: &'a [u8; N]) -> Self {
        Self::Str(value)
    }
}

impl<'a> From<&'a CStr> for Arg<'a> {
    fn from(value: &'a CStr) -> Self {
        Self::Str(value.to_bytes())
    }
}

impl<T: ?Sized> From<*const T> for Arg<'_> {
    fn from(value: *const T) -> Self {
        Self::Pointer(value.addr())
    }
}

impl<T: ?Sized> From<*mut T> for Arg<'_> {
    fn from(value: *mut T) -> Self {
        Self::Pointer(value.addr())
    }
}

impl From<SystemTime> for Arg<'_> {
    fn from(value: SystemTime) -> Self {
        let seconds = match value.duration_since(UNIX_EPOCH) {
            Ok(elapsed) => i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX),
            Err(before) => i64::try_from(before.duration().as_secs())
                .map_or(i64::MIN, |seconds| -seconds),
        };
        Self::Time(seconds)
    }
}
