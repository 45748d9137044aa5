//! Conversion of raw environment values into scalar field types
//!
//! Integers use base auto-detection: `0x` hexadecimal, `0o` or a bare leading
//! `0` octal, `0b` binary, decimal otherwise. A single `_` may separate
//! digits, or follow the base prefix. The result is range-checked against
//! the target type, so `"300"` is rejected for `u8`.
//!
//! Every function returns `None` on failure; the caller turns that into a
//! [`FieldError::Parse`](crate::FieldError::Parse) carrying the raw value.

use std::str::FromStr;

/// Parse a signed integer, honoring an optional `+`/`-` sign and base prefix.
pub(crate) fn parse_signed<T: TryFrom<i128>>(value: &str) -> Option<T> {
    let (negative, unsigned) = match value.as_bytes().first()? {
        b'-' => (true, &value[1..]),
        b'+' => (false, &value[1..]),
        _ => (false, value),
    };
    let magnitude = i128::from(parse_magnitude(unsigned)?);
    let signed = if negative { -magnitude } else { magnitude };
    T::try_from(signed).ok()
}

/// Parse an unsigned integer. No sign is accepted, not even `+`.
pub(crate) fn parse_unsigned<T: TryFrom<u64>>(value: &str) -> Option<T> {
    T::try_from(parse_magnitude(value)?).ok()
}

fn parse_magnitude(value: &str) -> Option<u64> {
    let bytes = value.as_bytes();
    let (radix, digits, prefixed) = if bytes.len() >= 2 && bytes[0] == b'0' {
        match bytes[1] {
            b'x' | b'X' => (16, &value[2..], true),
            b'o' | b'O' => (8, &value[2..], true),
            b'b' | b'B' => (2, &value[2..], true),
            _ => (8, &value[1..], true),
        }
    } else {
        (10, value, false)
    };

    if !underscores_ok(digits, prefixed) {
        return None;
    }
    let cleaned: String = digits.chars().filter(|c| *c != '_').collect();
    if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    u64::from_str_radix(&cleaned, radix).ok()
}

/// Each `_` must follow a digit (or the base prefix) and precede a digit.
fn underscores_ok(digits: &str, prefixed: bool) -> bool {
    let mut after_digit = prefixed;
    let mut trailing = false;
    for c in digits.chars() {
        if c == '_' {
            if !after_digit {
                return false;
            }
            after_digit = false;
            trailing = true;
        } else {
            after_digit = true;
            trailing = false;
        }
    }
    !trailing
}

/// Parse a boolean from `1 t T TRUE true True` or `0 f F FALSE false False`.
pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

pub(crate) trait Float: FromStr {
    fn is_infinite(&self) -> bool;
}

macro_rules! impl_float {
    ($($ty:ty),*) => {
        $(
            impl Float for $ty {
                fn is_infinite(&self) -> bool {
                    <$ty>::is_infinite(*self)
                }
            }
        )*
    };
}

impl_float!(f32, f64);

/// Parse a float of the target width.
///
/// A finite literal too large for the width is rejected instead of
/// saturating to infinity; spelled-out infinities are accepted.
pub(crate) fn parse_float<T: Float>(value: &str) -> Option<T> {
    let parsed = value.parse::<T>().ok()?;
    if parsed.is_infinite() && !is_infinity_literal(value) {
        return None;
    }
    Some(parsed)
}

fn is_infinity_literal(value: &str) -> bool {
    let unsigned = value
        .strip_prefix('+')
        .or_else(|| value.strip_prefix('-'))
        .unwrap_or(value);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}
