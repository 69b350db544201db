//! crates/format/src/error.rs
//!
//! Error types for format string rendering.

use sstr::AllocationError;
use thiserror::Error;

/// Result type for rendering operations.
pub type FormatResult<T> = Result<T, FormatError>;

/// Errors that abort rendering a format string.
///
/// Offsets are byte positions of the `%` that introduced the failing
/// directive.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum FormatError {
    /// The format string ended inside a directive.
    #[error("format string ends inside the directive at byte {offset}")]
    Incomplete {
        /// Offset of the directive.
        offset: usize,
    },
    /// The directive named a type code outside the supported set.
    #[error("unknown type code '{}' in the directive at byte {offset}", .code.escape_ascii())]
    UnknownCode {
        /// Offset of the directive.
        offset: usize,
        /// The unrecognised byte.
        code: u8,
    },
    /// The argument list ran out before the directive could be rendered.
    #[error("directive at byte {offset} has no matching argument")]
    MissingArgument {
        /// Offset of the directive.
        offset: usize,
    },
    /// The next argument does not carry the type the directive requires.
    #[error("directive at byte {offset} expects {expected}, found {found}")]
    ArgumentMismatch {
        /// Offset of the directive.
        offset: usize,
        /// Argument kind required by the directive.
        expected: &'static str,
        /// Argument kind that was supplied.
        found: &'static str,
    },
    /// A precision was given to a code other than `f`.
    #[error("precision is only valid for %f (directive at byte {offset})")]
    PrecisionNotAllowed {
        /// Offset of the directive.
        offset: usize,
    },
    /// The field width exceeds the configured maximum.
    #[error("width {width} in the directive at byte {offset} exceeds the maximum of {max}")]
    WidthTooLarge {
        /// Offset of the directive.
        offset: usize,
        /// Requested width, saturated at `usize::MAX`.
        width: usize,
        /// Configured maximum width.
        max: usize,
    },
    /// `%*s` received a negative length.
    #[error("negative length {length} for %*s at byte {offset}")]
    NegativeLength {
        /// Offset of the directive.
        offset: usize,
        /// The supplied length.
        length: i128,
    },
    /// `%*s` requested more bytes than its string argument holds.
    #[error("%*s at byte {offset} requests {requested} bytes but the argument holds {available}")]
    StringTooShort {
        /// Offset of the directive.
        offset: usize,
        /// Length argument.
        requested: usize,
        /// Bytes available in the string argument.
        available: usize,
    },
    /// The integer part of a `%f` value does not fit in 64 bits.
    #[error("value for %f at byte {offset} is outside the fixed-point range")]
    FloatOutOfRange {
        /// Offset of the directive.
        offset: usize,
    },
    /// Arguments remained after the whole format string was consumed.
    #[error("{unused} argument(s) left unused after the format string")]
    UnusedArguments {
        /// Number of arguments that were not consumed.
        unused: usize,
    },
    /// Output storage could not be grown.
    #[error(transparent)]
    Allocation(#[from] AllocationError),
}

impl FormatError {
    /// Byte offset of the failing directive, when the error has one.
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        match self {
            Self::Incomplete { offset }
            | Self::UnknownCode { offset, .. }
            | Self::MissingArgument { offset }
            | Self::ArgumentMismatch { offset, .. }
            | Self::PrecisionNotAllowed { offset }
            | Self::WidthTooLarge { offset, .. }
            | Self::NegativeLength { offset, .. }
            | Self::StringTooShort { offset, .. }
            | Self::FloatOutOfRange { offset } => Some(*offset),
            Self::UnusedArguments { .. } | Self::Allocation(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_code_display_escapes_byte() {
        let err = FormatError::UnknownCode {
            offset: 3,
            code: b'q',
        };
        assert_eq!(
            err.to_string(),
            "unknown type code 'q' in the directive at byte 3"
        );

        let control = FormatError::UnknownCode {
            offset: 0,
            code: 0x01,
        };
        assert!(control.to_string().contains("\\x01"));
    }

    #[test]
    fn mismatch_names_both_kinds() {
        let err = FormatError::ArgumentMismatch {
            offset: 7,
            expected: "double",
            found: "string",
        };

        assert!(err.to_string().contains("expects double, found string"));
        assert_eq!(err.offset(), Some(7));
    }

    #[test]
    fn allocation_error_converts() {
        let err: FormatError = AllocationError::new(99).into();

        assert!(matches!(err, FormatError::Allocation(_)));
        assert_eq!(err.offset(), None);
        assert!(err.to_string().contains("99 bytes"));
    }
}
