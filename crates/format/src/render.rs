//! crates/format/src/render.rs
//!
//! Walks a format string, copying literal runs and expanding directives into
//! a [`Sink`].

use memchr::memchr;
use sstr::{SStr, nul_terminated_prefix};

use crate::argument::{Arg, INT_BITS, Integer, LONG_BITS};
use crate::config::FormatConfig;
use crate::directive::{Directive, IntegerStyle, TypeCode, parse_directive};
use crate::error::{FormatError, FormatResult};
use crate::numeric::{Base, as_unsigned, fixed_point, integer_text, sign_and_magnitude};
use crate::sink::{BoundedOutput, BoundedSink, Sink};
use crate::trace::{trace_render_failure, trace_truncated};

/// Renders format strings under a fixed [`FormatConfig`].
///
/// # Examples
///
/// ```
/// use sstr_format::{Arg, FormatConfig, Formatter};
///
/// let formatter = Formatter::new(FormatConfig::new().with_default_precision(2));
/// let out = formatter.render(b"pi=%f", &[Arg::from(3.14159)]).unwrap();
/// assert_eq!(out, "pi=3.14");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Formatter {
    config: FormatConfig,
}

impl Formatter {
    /// Creates a formatter with the given limits.
    #[must_use]
    pub const fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    /// Limits applied by this formatter.
    #[must_use]
    pub const fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Renders into a new [`SStr`].
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] for malformed directives, argument mismatches,
    /// leftover arguments or allocation failure. No partial output is
    /// returned.
    pub fn render(&self, format: &[u8], args: &[Arg<'_>]) -> FormatResult<SStr> {
        let mut out = SStr::new();
        self.render_into(&mut out, format, args)?;
        Ok(out)
    }

    /// Renders into `buf` without allocating.
    ///
    /// Output that does not fit is dropped and reported through
    /// [`BoundedOutput::is_truncated`]. A non-empty `buf` is always
    /// terminated with a zero byte, even when rendering fails part way.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] for the same malformed input as
    /// [`render`](Self::render); truncation alone is not an error.
    pub fn render_bounded(
        &self,
        buf: &mut [u8],
        format: &[u8],
        args: &[Arg<'_>],
    ) -> FormatResult<BoundedOutput> {
        let capacity = buf.len();
        let mut sink = BoundedSink::new(buf);
        let result = self.render_into(&mut sink, format, args);
        let output = sink.finish();
        result?;
        if output.is_truncated() {
            trace_truncated(capacity, output.written());
        }
        Ok(output)
    }

    /// Renders into any [`Sink`], appending after its current content.
    ///
    /// # Errors
    ///
    /// See [`render`](Self::render). Output produced before the failing
    /// directive stays in `sink`.
    pub fn render_into<S: Sink + ?Sized>(
        &self,
        sink: &mut S,
        format: &[u8],
        args: &[Arg<'_>],
    ) -> FormatResult<()> {
        self.render_inner(sink, format, args)
            .inspect_err(|error| trace_render_failure(format.len(), error))
    }

    fn render_inner<S: Sink + ?Sized>(
        &self,
        sink: &mut S,
        format: &[u8],
        args: &[Arg<'_>],
    ) -> FormatResult<()> {
        let mut args = Arguments::new(args);
        let mut pos = 0;

        while pos < format.len() {
            let rest = &format[pos..];
            let Some(found) = memchr(b'%', rest) else {
                sink.put(rest)?;
                break;
            };
            if found > 0 {
                sink.put(&rest[..found])?;
            }
            let (directive, next) = parse_directive(format, pos + found, &self.config)?;
            self.emit(sink, &directive, &mut args)?;
            pos = next;
        }

        args.finish()
    }

    fn emit<S: Sink + ?Sized>(
        &self,
        sink: &mut S,
        directive: &Directive,
        args: &mut Arguments<'_, '_>,
    ) -> FormatResult<()> {
        let offset = directive.offset;
        match directive.code {
            TypeCode::Zero => sink.put(&[0]),
            TypeCode::Newline => sink.put(b"\n"),
            TypeCode::Percent => sink.put(b"%"),
            TypeCode::Char => match args.next(offset)? {
                Arg::Char(byte) => pad_text(sink, directive, &[byte]),
                other => Err(mismatch(offset, "char", &other)),
            },
            TypeCode::Str => match args.next(offset)? {
                Arg::Str(bytes) => pad_text(sink, directive, nul_terminated_prefix(bytes)),
                other => Err(mismatch(offset, "string", &other)),
            },
            TypeCode::SStr => match args.next(offset)? {
                Arg::SStr(value) => pad_text(sink, directive, value.as_bytes()),
                other => Err(mismatch(offset, "sstr", &other)),
            },
            TypeCode::CountedStr => {
                let length = args.next(offset)?;
                let Some(Integer { value, .. }) = length.integer() else {
                    return Err(mismatch(offset, "integer length", &length));
                };
                if value < 0 {
                    return Err(FormatError::NegativeLength {
                        offset,
                        length: value,
                    });
                }
                let source = args.next(offset)?;
                let Some(bytes) = source.bytes() else {
                    return Err(mismatch(offset, "string", &source));
                };
                let requested = usize::try_from(value).unwrap_or(usize::MAX);
                if requested > bytes.len() {
                    return Err(FormatError::StringTooShort {
                        offset,
                        requested,
                        available: bytes.len(),
                    });
                }
                pad_text(sink, directive, &bytes[..requested])
            }
            TypeCode::Pointer => match args.next(offset)? {
                Arg::Pointer(address) => {
                    let digits = integer_text(address as u64, Base::LowerHex);
                    pad_number(sink, directive, false, b"0x", digits.as_bytes(), true)
                }
                other => Err(mismatch(offset, "pointer", &other)),
            },
            TypeCode::Time => match args.next(offset)? {
                Arg::Time(seconds) | Arg::I64(seconds) => {
                    let (negative, magnitude) = sign_and_magnitude(i128::from(seconds));
                    let digits = integer_text(magnitude, Base::Decimal);
                    pad_number(sink, directive, negative, b"", digits.as_bytes(), true)
                }
                other => Err(mismatch(offset, "time", &other)),
            },
            TypeCode::Double => match args.next(offset)? {
                Arg::Double(value) => {
                    let precision = self.config.effective_precision(directive.precision);
                    let text = fixed_point(value, precision)
                        .ok_or(FormatError::FloatOutOfRange { offset })?;
                    pad_number(
                        sink,
                        directive,
                        text.is_negative(),
                        b"",
                        text.as_bytes(),
                        text.is_finite(),
                    )
                }
                other => Err(mismatch(offset, "double", &other)),
            },
            TypeCode::Size | TypeCode::Int | TypeCode::Long | TypeCode::Int32 | TypeCode::Int64 => {
                emit_integer(sink, directive, args)
            }
        }
    }
}

/// Bit width and argument description for each integer code.
fn integer_width(code: TypeCode) -> (u32, &'static str) {
    match code {
        TypeCode::Size => (usize::BITS, "pointer-sized integer"),
        TypeCode::Long => (LONG_BITS, "long"),
        TypeCode::Int32 => (32, "32-bit integer"),
        TypeCode::Int64 => (64, "64-bit integer"),
        _ => (INT_BITS, "int"),
    }
}

fn emit_integer<S: Sink + ?Sized>(
    sink: &mut S,
    directive: &Directive,
    args: &mut Arguments<'_, '_>,
) -> FormatResult<()> {
    let offset = directive.offset;
    let (bits, expected) = integer_width(directive.code);
    let arg = args.next(offset)?;
    let Some(Integer { value, .. }) = arg.integer().filter(|integer| integer.bits == bits) else {
        return Err(mismatch(offset, expected, &arg));
    };

    let (negative, magnitude, base) = match directive.style {
        IntegerStyle::Signed => {
            let (negative, magnitude) = sign_and_magnitude(value);
            (negative, magnitude, Base::Decimal)
        }
        IntegerStyle::Unsigned => (false, as_unsigned(value, bits), Base::Decimal),
        IntegerStyle::LowerHex => (false, as_unsigned(value, bits), Base::LowerHex),
        IntegerStyle::UpperHex => (false, as_unsigned(value, bits), Base::UpperHex),
    };
    let digits = integer_text(magnitude, base);
    pad_number(sink, directive, negative, b"", digits.as_bytes(), true)
}

/// Writes a right-justified number. Zero fill goes between the sign and
/// prefix and the digits; space fill goes before everything.
fn pad_number<S: Sink + ?Sized>(
    sink: &mut S,
    directive: &Directive,
    negative: bool,
    prefix: &[u8],
    digits: &[u8],
    zero_allowed: bool,
) -> FormatResult<()> {
    let body = usize::from(negative) + prefix.len() + digits.len();
    let fill = directive.width.saturating_sub(body);

    if directive.zero_pad && zero_allowed {
        if negative {
            sink.put(b"-")?;
        }
        sink.put(prefix)?;
        sink.put_repeated(b'0', fill)?;
    } else {
        sink.put_repeated(b' ', fill)?;
        if negative {
            sink.put(b"-")?;
        }
        sink.put(prefix)?;
    }
    sink.put(digits)
}

fn pad_text<S: Sink + ?Sized>(sink: &mut S, directive: &Directive, text: &[u8]) -> FormatResult<()> {
    sink.put_repeated(b' ', directive.width.saturating_sub(text.len()))?;
    sink.put(text)
}

fn mismatch(offset: usize, expected: &'static str, found: &Arg<'_>) -> FormatError {
    FormatError::ArgumentMismatch {
        offset,
        expected,
        found: found.kind(),
    }
}

/// Cursor over the positional arguments.
struct Arguments<'s, 'a> {
    args: &'s [Arg<'a>],
    next: usize,
}

impl<'s, 'a> Arguments<'s, 'a> {
    const fn new(args: &'s [Arg<'a>]) -> Self {
        Self { args, next: 0 }
    }

    fn next(&mut self, offset: usize) -> FormatResult<Arg<'a>> {
        let arg = self
            .args
            .get(self.next)
            .copied()
            .ok_or(FormatError::MissingArgument { offset })?;
        self.next += 1;
        Ok(arg)
    }

    fn finish(&self) -> FormatResult<()> {
        match self.args.len() - self.next {
            0 => Ok(()),
            unused => Err(FormatError::UnusedArguments { unused }),
        }
    }
}
