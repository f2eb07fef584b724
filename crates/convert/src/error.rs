use para_base64::Base64Error;
use thiserror::Error;

use crate::Representation;

/// Why a conversion produced no value.
///
/// Every converter returns this instead of panicking; the `Err` arm of a
/// [`ConversionResult`] is the "conversion failed" sentinel.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("nothing to convert")]
    EmptyInput,
    #[error("not a decimal integer: {0:?}")]
    InvalidDecimal(String),
    #[error("invalid hex digit {0:?}")]
    InvalidHexDigit(char),
    #[error("invalid binary digit {0:?}")]
    InvalidBinaryDigit(char),
    #[error("invalid base64: {0}")]
    InvalidBase64(#[from] Base64Error),
    #[error("decoded bytes are not valid UTF-8")]
    InvalidUtf8,
    #[error("{0} is not a valid code point")]
    CodePointOutOfRange(i64),
    #[error("value does not fit in a 64-bit integer")]
    Overflow,
    #[error("non-printable character {0:?} in decoded text")]
    NonPrintable(char),
    #[error("no conversion from {from} to {to}")]
    Unsupported {
        from: Representation,
        to: Representation,
    },
}

/// Result of a single conversion.
pub type ConversionResult<T> = Result<T, ConversionError>;
