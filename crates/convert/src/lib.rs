//! Convert values between five representations: text, decimal integers,
//! hexadecimal strings, binary bit-strings, and base64.
//!
//! Every converter is a pure function that returns either the converted
//! value or a [`ConversionError`] saying why there is none. Converters are
//! grouped by source representation; [`convert`] dispatches on a
//! (source, target) pair through the [`Conversion`] table.
//!
//! # Example
//!
//! ```
//! use para_convert::{convert, decimal_to_binary, Representation};
//!
//! assert_eq!(decimal_to_binary("5").as_deref(), Ok("00000101"));
//!
//! let text = convert(Representation::Binary, Representation::Ascii, "0100000101000010").unwrap();
//! assert_eq!(text.to_string(), "AB");
//!
//! assert!(convert(Representation::Hex, Representation::Decimal, "zz").is_err());
//! ```

pub mod ascii;
pub mod binary;
pub mod conversion;
pub mod decimal;
mod error;
pub mod hex;
mod radix;
pub mod representation;
pub mod value;

pub use ascii::{
    ascii_to_binary, ascii_to_decimal, ascii_to_hex, decode_base64, encode_base64,
    MAX_DECODE_ATTEMPTS,
};
pub use binary::{binary_to_ascii, binary_to_decimal, binary_to_hex, is_printable, validate_binary};
pub use conversion::{conversions_from, convert, Conversion, ConversionRequest};
pub use decimal::{decimal_to_ascii, decimal_to_binary, decimal_to_hex, parse_decimal};
pub use error::{ConversionError, ConversionResult};
pub use hex::{hex_to_ascii, hex_to_binary, hex_to_decimal, HexTokens};
pub use radix::BYTE_WIDTH;
pub use representation::{Representation, UnknownRepresentation};
pub use value::{ConvertibleValue, MaybeSeq};
