//! Conversions from binary bit-strings.
//!
//! Unlike hex input, binary input is validated as one string: whitespace is
//! not a separator and rejects the input like any other non-binary character.

use crate::radix::{parse_digits, to_hex, BYTE_WIDTH};
use crate::{ConversionError, ConversionResult};

/// Checks that `input` is a non-empty run of `0`/`1` characters.
///
/// # Errors
///
/// - [`ConversionError::EmptyInput`] for the empty string.
/// - [`ConversionError::InvalidBinaryDigit`] for the first other character.
pub fn validate_binary(input: &str) -> ConversionResult<&str> {
    if input.is_empty() {
        return Err(ConversionError::EmptyInput);
    }
    match input.chars().find(|c| !matches!(c, '0' | '1')) {
        Some(bad) => Err(ConversionError::InvalidBinaryDigit(bad)),
        None => Ok(input),
    }
}

/// Printable characters: ASCII graphic characters, space, and `\t \n \r \x0b \x0c`.
pub fn is_printable(c: char) -> bool {
    c.is_ascii_graphic() || matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

/// Decodes consecutive 8-bit groups to characters.
///
/// The input is left-padded with `0` to a multiple of eight digits first. The
/// result is all-or-nothing: one non-printable character rejects it.
///
/// # Example
///
/// ```
/// use para_convert::binary_to_ascii;
///
/// assert_eq!(binary_to_ascii("0100000101000010").as_deref(), Ok("AB"));
/// assert_eq!(binary_to_ascii("1000001").as_deref(), Ok("A"));
/// ```
///
/// # Errors
///
/// Validation errors from [`validate_binary`], or
/// [`ConversionError::NonPrintable`] for the first non-printable character.
pub fn binary_to_ascii(input: &str) -> ConversionResult<String> {
    let digits = validate_binary(input)?.as_bytes();

    let padding = (BYTE_WIDTH - digits.len() % BYTE_WIDTH) % BYTE_WIDTH;
    let padded: Vec<u8> = std::iter::repeat(b'0')
        .take(padding)
        .chain(digits.iter().copied())
        .collect();

    let text: String = padded
        .chunks_exact(BYTE_WIDTH)
        .map(|byte| char::from(byte.iter().fold(0u8, |acc, &bit| (acc << 1) | (bit - b'0'))))
        .collect();

    match text.chars().find(|&c| !is_printable(c)) {
        Some(c) => Err(ConversionError::NonPrintable(c)),
        None => Ok(text),
    }
}

/// The whole input as one base-2 integer.
///
/// # Errors
///
/// Validation errors from [`validate_binary`], or
/// [`ConversionError::Overflow`] beyond 63 significant bits.
pub fn binary_to_decimal(input: &str) -> ConversionResult<i64> {
    parse_digits(validate_binary(input)?, 2)
}

/// The whole input as lowercase hex, without prefix.
///
/// # Errors
///
/// Same as [`binary_to_decimal`].
pub fn binary_to_hex(input: &str) -> ConversionResult<String> {
    binary_to_decimal(input).map(to_hex)
}
