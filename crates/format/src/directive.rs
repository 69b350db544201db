//! Parser for `%`-introduced directives.
//!
//! Grammar, with flags in fixed order:
//!
//! ```text
//! % [0] [width] [u] [x|X] [.precision] [*] code
//! ```
//!
//! When a `u`, `x` or `X` modifier is not followed by an integer code the
//! code defaults to `d` and the following byte is left in the input, so
//! `%ux` renders like `%uxd`.

use crate::config::FormatConfig;
use crate::error::{FormatError, FormatResult};

/// How an integer directive renders its value.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum IntegerStyle {
    /// Signed decimal.
    #[default]
    Signed,
    /// Unsigned decimal (`u`).
    Unsigned,
    /// Unsigned lowercase hexadecimal (`x`).
    LowerHex,
    /// Unsigned uppercase hexadecimal (`X`).
    UpperHex,
}

/// Type codes supported by the formatter.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum TypeCode {
    /// `T`: time value in decimal seconds.
    Time,
    /// `z`: pointer-sized integer.
    Size,
    /// `d`: C `int`.
    Int,
    /// `l`: C `long`.
    Long,
    /// `D`: 32-bit integer.
    Int32,
    /// `L`: 64-bit integer.
    Int64,
    /// `f`: fixed-point double.
    Double,
    /// `p`: address.
    Pointer,
    /// `S`: another `SStr`.
    SStr,
    /// `s`: zero-terminated string.
    Str,
    /// `*s`: explicit length, then string.
    CountedStr,
    /// `Z`: one zero byte.
    Zero,
    /// `N`: one newline.
    Newline,
    /// `c`: one byte.
    Char,
    /// `%`: literal percent sign.
    Percent,
}

impl TypeCode {
    fn from_byte(byte: u8) -> Option<Self> {
        let code = match byte {
            b'T' => Self::Time,
            b'z' => Self::Size,
            b'd' => Self::Int,
            b'l' => Self::Long,
            b'D' => Self::Int32,
            b'L' => Self::Int64,
            b'f' => Self::Double,
            b'p' => Self::Pointer,
            b'S' => Self::SStr,
            b's' => Self::Str,
            b'Z' => Self::Zero,
            b'N' => Self::Newline,
            b'c' => Self::Char,
            b'%' => Self::Percent,
            _ => return None,
        };
        Some(code)
    }

    /// Codes that accept `u`, `x` and `X`.
    pub(crate) const fn takes_modifiers(self) -> bool {
        matches!(
            self,
            Self::Size | Self::Int | Self::Long | Self::Int32 | Self::Int64
        )
    }

    /// Codes that insert a fixed byte and ignore width.
    pub(crate) const fn is_literal(self) -> bool {
        matches!(self, Self::Zero | Self::Newline | Self::Percent)
    }
}

/// One parsed directive.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Directive {
    /// Byte offset of the introducing `%`.
    pub(crate) offset: usize,
    pub(crate) zero_pad: bool,
    pub(crate) width: usize,
    pub(crate) style: IntegerStyle,
    pub(crate) precision: Option<usize>,
    pub(crate) code: TypeCode,
}

/// Parses the directive whose `%` sits at `offset`.
///
/// Returns the directive and the offset of the first byte after it.
pub(crate) fn parse_directive(
    format: &[u8],
    offset: usize,
    config: &FormatConfig,
) -> FormatResult<(Directive, usize)> {
    debug_assert_eq!(format.get(offset), Some(&b'%'));

    let mut pos = offset + 1;
    let peek = |pos: usize| format.get(pos).copied();

    let zero_pad = peek(pos) == Some(b'0');
    if zero_pad {
        pos += 1;
    }

    let (width, next) = parse_number(format, pos);
    pos = next;
    let width = width.unwrap_or(0);
    if width > config.max_width() {
        return Err(FormatError::WidthTooLarge {
            offset,
            width,
            max: config.max_width(),
        });
    }

    let mut style = IntegerStyle::Signed;
    let mut modified = false;
    if peek(pos) == Some(b'u') {
        style = IntegerStyle::Unsigned;
        modified = true;
        pos += 1;
    }
    match peek(pos) {
        Some(b'x') => {
            style = IntegerStyle::LowerHex;
            modified = true;
            pos += 1;
        }
        Some(b'X') => {
            style = IntegerStyle::UpperHex;
            modified = true;
            pos += 1;
        }
        _ => {}
    }

    let mut precision = None;
    if peek(pos) == Some(b'.') {
        let (digits, next) = parse_number(format, pos + 1);
        precision = Some(digits.unwrap_or(0));
        pos = next;
    }

    let code = if peek(pos) == Some(b'*') {
        match peek(pos + 1) {
            Some(b's') => {
                pos += 2;
                TypeCode::CountedStr
            }
            Some(other) => {
                return Err(FormatError::UnknownCode {
                    offset,
                    code: other,
                });
            }
            None => return Err(FormatError::Incomplete { offset }),
        }
    } else {
        match peek(pos) {
            Some(byte) => match (TypeCode::from_byte(byte), modified) {
                (Some(code), false) => {
                    pos += 1;
                    code
                }
                (Some(code), true) if code.takes_modifiers() => {
                    pos += 1;
                    code
                }
                (_, true) => TypeCode::Int,
                (None, false) => {
                    return Err(FormatError::UnknownCode { offset, code: byte });
                }
            },
            None if modified => TypeCode::Int,
            None => return Err(FormatError::Incomplete { offset }),
        }
    };

    if precision.is_some() && code != TypeCode::Double {
        return Err(FormatError::PrecisionNotAllowed { offset });
    }

    Ok((
        Directive {
            offset,
            zero_pad,
            width,
            style,
            precision,
            code,
        },
        pos,
    ))
}

/// Reads a run of decimal digits, saturating at `usize::MAX`.
fn parse_number(format: &[u8], start: usize) -> (Option<usize>, usize) {
    let mut pos = start;
    let mut value: Option<usize> = None;
    while let Some(&byte) = format.get(pos) {
        if !byte.is_ascii_digit() {
            break;
        }
        let digit = usize::from(byte - b'0');
        value = Some(
            value
                .unwrap_or(0)
                .saturating_mul(10)
                .saturating_add(digit),
        );
        pos += 1;
    }
    (value, pos)
}
