//! crates/format/src/numeric.rs
//!
//! Stack-only integer and fixed-point conversion.
//!
//! Every conversion writes into a fixed array owned by the returned value, so
//! bounded rendering never touches the heap.

const LOWER_DIGITS: &[u8; 16] = b"0123456789abcdef";
const UPPER_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Decimal digits needed for `u64::MAX`.
const INTEGER_DIGITS: usize = 20;

/// Largest number of fraction digits produced for `%f`.
pub const MAX_PRECISION: usize = 18;

const FIXED_CAPACITY: usize = INTEGER_DIGITS + 1 + MAX_PRECISION;

/// 2^64 as an `f64`; integer parts at or above it do not fit in `u64`.
const INTEGER_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// Digit alphabet and radix for integer conversion.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum Base {
    #[default]
    Decimal,
    LowerHex,
    UpperHex,
}

impl Base {
    const fn radix(self) -> u64 {
        match self {
            Self::Decimal => 10,
            Self::LowerHex | Self::UpperHex => 16,
        }
    }

    const fn digits(self) -> &'static [u8; 16] {
        match self {
            Self::UpperHex => UPPER_DIGITS,
            Self::Decimal | Self::LowerHex => LOWER_DIGITS,
        }
    }
}

/// Digits of an unsigned integer, most significant first.
pub(crate) struct IntegerText {
    buf: [u8; INTEGER_DIGITS],
    start: usize,
}

impl IntegerText {
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.buf[self.start..]
    }
}

/// Converts `value` by repeated division, filling the buffer from the end.
pub(crate) fn integer_text(mut value: u64, base: Base) -> IntegerText {
    let radix = base.radix();
    let digits = base.digits();
    let mut buf = [0u8; INTEGER_DIGITS];
    let mut start = INTEGER_DIGITS;

    loop {
        start -= 1;
        buf[start] = digits[(value % radix) as usize];
        value /= radix;
        if value == 0 {
            break;
        }
    }

    IntegerText { buf, start }
}

/// Splits a signed value into sign and magnitude without overflowing on the
/// minimum representable value.
pub(crate) fn sign_and_magnitude(value: i128) -> (bool, u64) {
    (value < 0, value.unsigned_abs() as u64)
}

/// Reinterprets `value` as an unsigned integer of `bits` width.
pub(crate) fn as_unsigned(value: i128, bits: u32) -> u64 {
    let mask = if bits >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    };
    (value as u128 as u64) & mask
}

/// Fixed-point rendering of an `f64`, without its sign.
pub(crate) struct FloatText {
    negative: bool,
    finite: bool,
    buf: [u8; FIXED_CAPACITY],
    len: usize,
}

impl FloatText {
    fn special(negative: bool, text: &[u8]) -> Self {
        let mut buf = [0u8; FIXED_CAPACITY];
        buf[..text.len()].copy_from_slice(text);
        Self {
            negative,
            finite: false,
            buf,
            len: text.len(),
        }
    }

    pub(crate) const fn is_negative(&self) -> bool {
        self.negative
    }

    /// `false` for `nan` and `inf`, which are never zero padded.
    pub(crate) const fn is_finite(&self) -> bool {
        self.finite
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

/// Fractions needing a larger binary shift are below 2^-67 and cannot reach
/// the last printed digit or its rounding step.
const MAX_FRACTION_SHIFT: u32 = 120;

/// Splits a finite, non-negative `f64` below 2^64 into its integer part and
/// an exact binary fraction `numerator / 2^shift`.
fn decompose(magnitude: f64) -> (u64, u128, u32) {
    let bits = magnitude.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let stored = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased == 0 {
        (stored, -1074)
    } else {
        (stored | (1u64 << 52), biased - 1075)
    };

    if exponent >= 0 {
        return (mantissa << exponent, 0, 0);
    }
    let shift = exponent.unsigned_abs();
    let integer = if shift >= u64::BITS { 0 } else { mantissa >> shift };
    if shift > MAX_FRACTION_SHIFT {
        return (integer, 0, 0);
    }
    let numerator = u128::from(mantissa) & ((1u128 << shift) - 1);
    (integer, numerator, shift)
}

/// Renders `value` with `precision` fraction digits and no exponent.
///
/// The binary fraction is expanded exactly in integer arithmetic; the
/// remainder left after the last digit rounds half away from zero.
/// Precision is clipped to [`MAX_PRECISION`]. Returns `None` when the integer
/// part is 2^64 or larger.
pub(crate) fn fixed_point(value: f64, precision: usize) -> Option<FloatText> {
    let precision = precision.min(MAX_PRECISION);
    let negative = value.is_sign_negative();

    if value.is_nan() {
        return Some(FloatText::special(false, b"nan"));
    }
    if value.is_infinite() {
        return Some(FloatText::special(negative, b"inf"));
    }

    let magnitude = value.abs();
    if magnitude >= INTEGER_LIMIT {
        return None;
    }

    let (mut integer, mut rest, shift) = decompose(magnitude);
    let mut digits = [0u8; MAX_PRECISION];
    let mut round_up = false;
    if shift > 0 {
        let mask = (1u128 << shift) - 1;
        for digit in &mut digits[..precision] {
            rest *= 10;
            *digit = (rest >> shift) as u8;
            rest &= mask;
        }
        round_up = rest >= 1u128 << (shift - 1);
    }

    if round_up {
        let mut carry = true;
        for digit in digits[..precision].iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            integer = integer.checked_add(1)?;
        }
    }

    let mut buf = [0u8; FIXED_CAPACITY];
    let integer_digits = integer_text(integer, Base::Decimal);
    let integer_digits = integer_digits.as_bytes();
    let mut len = integer_digits.len();
    buf[..len].copy_from_slice(integer_digits);
    if precision > 0 {
        buf[len] = b'.';
        len += 1;
        for digit in &digits[..precision] {
            buf[len] = b'0' + digit;
            len += 1;
        }
    }

    Some(FloatText {
        negative,
        finite: true,
        buf,
        len,
    })
}
