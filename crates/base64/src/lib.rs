//! Base64 encoding and decoding utilities.
//!
//! This crate provides the standard RFC 4648 alphabet only:
//! - Encoding always emits `=` padding
//! - Decoding is strict and reports *why* an input was rejected, so callers
//!   can repair missing padding and retry
//!
//! # Example
//!
//! ```
//! use para_base64::{to_base64, from_base64};
//!
//! let data = b"hello world";
//! let encoded = to_base64(data);
//! let decoded = from_base64(&encoded).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

mod constants;
mod from_base64;
mod to_base64;

pub use constants::{ALPHABET, ALPHABET_BYTES, PAD};
pub use from_base64::from_base64;
pub use to_base64::to_base64;

/// Error type for base64 operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base64Error {
    /// The input string contains characters outside the base64 alphabet.
    InvalidBase64String,
    /// Padding characters appear before the tail, or more than two of them.
    InvalidPadding,
    /// The base64 string length must be a multiple of 4.
    InvalidLength,
}

impl Base64Error {
    /// Whether appending padding could possibly repair the input.
    pub fn is_padding_error(self) -> bool {
        matches!(self, Base64Error::InvalidLength | Base64Error::InvalidPadding)
    }
}

impl std::fmt::Display for Base64Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Base64Error::InvalidBase64String => write!(f, "INVALID_BASE64_STRING"),
            Base64Error::InvalidPadding => write!(f, "INVALID_BASE64_PADDING"),
            Base64Error::InvalidLength => write!(f, "Base64 string length must be a multiple of 4"),
        }
    }
}

impl std::error::Error for Base64Error {}
