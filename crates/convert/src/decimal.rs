//! Conversions from decimal integers.

use crate::radix::{to_binary, to_hex};
use crate::{ConversionError, ConversionResult, MaybeSeq};

/// Parses decimal input.
///
/// Several whitespace-separated tokens make a sequence, a single token a
/// scalar. Each token may carry a leading sign.
///
/// # Errors
///
/// - [`ConversionError::EmptyInput`] if there are no tokens.
/// - [`ConversionError::InvalidDecimal`] naming the first non-numeric token.
/// - [`ConversionError::Overflow`] if a value does not fit in an `i64`.
pub fn parse_decimal(input: &str) -> ConversionResult<MaybeSeq<i64>> {
    let values = input
        .split_whitespace()
        .map(parse_token)
        .collect::<ConversionResult<Vec<_>>>()?;
    MaybeSeq::from_vec(values).ok_or(ConversionError::EmptyInput)
}

fn parse_token(token: &str) -> ConversionResult<i64> {
    use std::num::IntErrorKind;

    token.parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ConversionError::Overflow,
        _ => ConversionError::InvalidDecimal(token.to_string()),
    })
}

fn to_char(value: i64) -> ConversionResult<char> {
    u32::try_from(value)
        .ok()
        .and_then(char::from_u32)
        .ok_or(ConversionError::CodePointOutOfRange(value))
}

/// Maps integers to the characters at those code points.
///
/// A single value that is not a Unicode scalar value fails the whole call.
///
/// # Example
///
/// ```
/// use para_convert::decimal_to_ascii;
///
/// assert_eq!(decimal_to_ascii("72 105").as_deref(), Ok("Hi"));
/// assert!(decimal_to_ascii("72 -1").is_err());
/// ```
///
/// # Errors
///
/// Parse errors from [`parse_decimal`], or
/// [`ConversionError::CodePointOutOfRange`] for the first unmappable value.
pub fn decimal_to_ascii(input: &str) -> ConversionResult<String> {
    parse_decimal(input)?.iter().map(|&n| to_char(n)).collect()
}

/// Lowercase hex of each value, concatenated without separators.
///
/// # Errors
///
/// Parse errors from [`parse_decimal`].
pub fn decimal_to_hex(input: &str) -> ConversionResult<String> {
    Ok(parse_decimal(input)?.iter().map(|&n| to_hex(n)).collect())
}

/// Each value as binary padded to eight digits, concatenated.
///
/// # Errors
///
/// Parse errors from [`parse_decimal`].
pub fn decimal_to_binary(input: &str) -> ConversionResult<String> {
    Ok(parse_decimal(input)?.iter().map(|&n| to_binary(n)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scalar_and_sequence() {
        assert_eq!(parse_decimal("42"), Ok(MaybeSeq::Scalar(42)));
        assert_eq!(parse_decimal("  42\n"), Ok(MaybeSeq::Scalar(42)));
        assert_eq!(parse_decimal("+7"), Ok(MaybeSeq::Scalar(7)));
        assert_eq!(parse_decimal("1 -2\t3"), Ok(MaybeSeq::Sequence(vec![1, -2, 3])));
    }

    #[test]
    fn test_parse_failures() {
        assert_eq!(parse_decimal(""), Err(ConversionError::EmptyInput));
        assert_eq!(parse_decimal("   "), Err(ConversionError::EmptyInput));
        assert_eq!(
            parse_decimal("12 x3"),
            Err(ConversionError::InvalidDecimal("x3".to_string()))
        );
        assert_eq!(
            parse_decimal("1.5"),
            Err(ConversionError::InvalidDecimal("1.5".to_string()))
        );
        assert_eq!(
            parse_decimal("99999999999999999999"),
            Err(ConversionError::Overflow)
        );
    }

    #[test]
    fn test_decimal_to_ascii() {
        assert_eq!(decimal_to_ascii("65"), Ok("A".to_string()));
        assert_eq!(decimal_to_ascii("72 105 33"), Ok("Hi!".to_string()));
        assert_eq!(decimal_to_ascii("8364"), Ok("€".to_string()));
        assert_eq!(decimal_to_ascii("1114111"), Ok("\u{10ffff}".to_string()));
    }

    #[test]
    fn test_decimal_to_ascii_out_of_range() {
        assert_eq!(
            decimal_to_ascii("-1"),
            Err(ConversionError::CodePointOutOfRange(-1))
        );
        assert_eq!(
            decimal_to_ascii("1114112"),
            Err(ConversionError::CodePointOutOfRange(0x110000))
        );
        assert_eq!(
            decimal_to_ascii("55296"),
            Err(ConversionError::CodePointOutOfRange(0xd800))
        );
        // One bad element fails the whole sequence.
        assert_eq!(
            decimal_to_ascii("65 66 1114112"),
            Err(ConversionError::CodePointOutOfRange(0x110000))
        );
        assert_eq!(
            decimal_to_ascii("abc"),
            Err(ConversionError::InvalidDecimal("abc".to_string()))
        );
    }

    #[test]
    fn test_decimal_to_hex() {
        assert_eq!(decimal_to_hex("255"), Ok("ff".to_string()));
        assert_eq!(decimal_to_hex("0"), Ok("0".to_string()));
        assert_eq!(decimal_to_hex("65 66 10"), Ok("4142a".to_string()));
        assert_eq!(decimal_to_hex("-16"), Ok("-10".to_string()));
    }

    #[test]
    fn test_decimal_to_binary() {
        assert_eq!(decimal_to_binary("5"), Ok("00000101".to_string()));
        assert_eq!(decimal_to_binary("300"), Ok("100101100".to_string()));
        assert_eq!(decimal_to_binary("1 2"), Ok("0000000100000010".to_string()));
        assert_eq!(decimal_to_binary("1 300"), Ok("00000001100101100".to_string()));
        assert_eq!(decimal_to_binary("five"), Err(ConversionError::InvalidDecimal("five".to_string())));
    }
}
