//! Integer formatting and parsing shared by the converters.

use crate::{ConversionError, ConversionResult};

/// Minimum number of binary digits emitted per value.
pub const BYTE_WIDTH: usize = 8;

/// Lowercase hex, no prefix, no padding. Negative values keep a leading `-`.
pub(crate) fn to_hex(value: i64) -> String {
    if value < 0 {
        format!("-{:x}", value.unsigned_abs())
    } else {
        format!("{value:x}")
    }
}

/// Binary digits zero-padded to at least [`BYTE_WIDTH`]; wider values are
/// never truncated.
///
/// Negative values are a `-` followed by the padded magnitude, so the sign
/// does not count toward the width: `-5` is `-00000101`, not `-0000101`.
pub(crate) fn to_binary(value: i64) -> String {
    if value < 0 {
        format!("-{:0width$b}", value.unsigned_abs(), width = BYTE_WIDTH)
    } else {
        format!("{value:0width$b}", width = BYTE_WIDTH)
    }
}

/// Parses digits that were already validated for `radix`.
pub(crate) fn parse_digits(digits: &str, radix: u32) -> ConversionResult<i64> {
    if digits.is_empty() {
        return Err(ConversionError::EmptyInput);
    }
    i64::from_str_radix(digits, radix).map_err(|_| ConversionError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(0), "0");
        assert_eq!(to_hex(10), "a");
        assert_eq!(to_hex(255), "ff");
        assert_eq!(to_hex(-255), "-ff");
        assert_eq!(to_hex(i64::MIN), "-8000000000000000");
    }

    #[test]
    fn test_to_binary_pads_to_a_byte() {
        assert_eq!(to_binary(0), "00000000");
        assert_eq!(to_binary(5), "00000101");
        assert_eq!(to_binary(255), "11111111");
        assert_eq!(to_binary(300), "100101100");
        assert_eq!(to_binary(-5), "-00000101");
    }

    #[test]
    fn test_parse_digits() {
        assert_eq!(parse_digits("ff", 16), Ok(255));
        assert_eq!(parse_digits("101", 2), Ok(5));
        assert_eq!(parse_digits("", 2), Err(ConversionError::EmptyInput));
        assert_eq!(
            parse_digits("10000000000000000", 16),
            Err(ConversionError::Overflow)
        );
    }
}
