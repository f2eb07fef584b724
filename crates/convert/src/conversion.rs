//! The conversion table: every supported (source, target) pair.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    ascii, binary, decimal, hex, ConversionError, ConversionResult, ConvertibleValue, MaybeSeq,
    Representation,
};

/// One supported conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Conversion {
    AsciiToDecimal,
    AsciiToHex,
    AsciiToBinary,
    EncodeBase64,
    DecodeBase64,
    DecimalToAscii,
    DecimalToHex,
    DecimalToBinary,
    HexToAscii,
    HexToDecimal,
    HexToBinary,
    BinaryToAscii,
    BinaryToDecimal,
    BinaryToHex,
}

impl Conversion {
    /// Every conversion, grouped by source representation.
    pub const ALL: [Conversion; 14] = [
        Conversion::AsciiToDecimal,
        Conversion::AsciiToHex,
        Conversion::AsciiToBinary,
        Conversion::EncodeBase64,
        Conversion::DecodeBase64,
        Conversion::DecimalToAscii,
        Conversion::DecimalToHex,
        Conversion::DecimalToBinary,
        Conversion::HexToAscii,
        Conversion::HexToDecimal,
        Conversion::HexToBinary,
        Conversion::BinaryToAscii,
        Conversion::BinaryToDecimal,
        Conversion::BinaryToHex,
    ];

    pub fn source(self) -> Representation {
        self.pair().0
    }

    pub fn target(self) -> Representation {
        self.pair().1
    }

    fn pair(self) -> (Representation, Representation) {
        use Representation::*;

        match self {
            Conversion::AsciiToDecimal => (Ascii, Decimal),
            Conversion::AsciiToHex => (Ascii, Hex),
            Conversion::AsciiToBinary => (Ascii, Binary),
            Conversion::EncodeBase64 => (Ascii, Base64),
            Conversion::DecodeBase64 => (Base64, Ascii),
            Conversion::DecimalToAscii => (Decimal, Ascii),
            Conversion::DecimalToHex => (Decimal, Hex),
            Conversion::DecimalToBinary => (Decimal, Binary),
            Conversion::HexToAscii => (Hex, Ascii),
            Conversion::HexToDecimal => (Hex, Decimal),
            Conversion::HexToBinary => (Hex, Binary),
            Conversion::BinaryToAscii => (Binary, Ascii),
            Conversion::BinaryToDecimal => (Binary, Decimal),
            Conversion::BinaryToHex => (Binary, Hex),
        }
    }

    /// Menu title.
    pub fn title(self) -> &'static str {
        match self {
            Conversion::AsciiToDecimal => "Ascii to decimal",
            Conversion::AsciiToHex => "Ascii to hex",
            Conversion::AsciiToBinary => "Ascii to binary",
            Conversion::EncodeBase64 => "Encode base64",
            Conversion::DecodeBase64 => "Decode base64",
            Conversion::DecimalToAscii => "Decimal to ascii",
            Conversion::DecimalToHex => "Decimal to hex",
            Conversion::DecimalToBinary => "Decimal to binary",
            Conversion::HexToAscii => "Hex to ascii",
            Conversion::HexToDecimal => "Hex to decimal",
            Conversion::HexToBinary => "Hex to binary",
            Conversion::BinaryToAscii => "Binary to ascii",
            Conversion::BinaryToDecimal => "Binary to decimal",
            Conversion::BinaryToHex => "Binary to hex",
        }
    }

    /// Finds the conversion for a pair, if the pair is supported.
    ///
    /// # Example
    ///
    /// ```
    /// use para_convert::{Conversion, Representation};
    ///
    /// assert_eq!(
    ///     Conversion::lookup(Representation::Hex, Representation::Binary),
    ///     Some(Conversion::HexToBinary)
    /// );
    /// assert_eq!(Conversion::lookup(Representation::Base64, Representation::Hex), None);
    /// ```
    pub fn lookup(source: Representation, target: Representation) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.source() == source && c.target() == target)
    }

    /// Runs the conversion on raw input.
    ///
    /// # Errors
    ///
    /// The converter's [`ConversionError`]; see the individual functions.
    pub fn apply(self, input: &str) -> ConversionResult<ConvertibleValue> {
        use ConvertibleValue::*;

        match self {
            Conversion::AsciiToDecimal => ascii::ascii_to_decimal(input).map(Integer),
            Conversion::AsciiToHex => ascii::ascii_to_hex(input).map(Hex),
            Conversion::AsciiToBinary => ascii::ascii_to_binary(input).map(Binary),
            Conversion::EncodeBase64 => Ok(Base64(ascii::encode_base64(input))),
            Conversion::DecodeBase64 => ascii::decode_base64(input).map(Text),
            Conversion::DecimalToAscii => decimal::decimal_to_ascii(input).map(Text),
            Conversion::DecimalToHex => decimal::decimal_to_hex(input).map(Hex),
            Conversion::DecimalToBinary => decimal::decimal_to_binary(input).map(Binary),
            Conversion::HexToAscii => hex::hex_to_ascii(input).map(Text),
            Conversion::HexToDecimal => hex::hex_to_decimal(input).map(Integer),
            Conversion::HexToBinary => hex::hex_to_binary(input).map(Binary),
            Conversion::BinaryToAscii => binary::binary_to_ascii(input).map(Text),
            Conversion::BinaryToDecimal => binary::binary_to_decimal(input)
                .map(|n| Integer(MaybeSeq::Scalar(n))),
            Conversion::BinaryToHex => binary::binary_to_hex(input).map(Hex),
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Conversions whose source is `source`, in catalogue order.
pub fn conversions_from(source: Representation) -> impl Iterator<Item = Conversion> {
    Conversion::ALL
        .into_iter()
        .filter(move |c| c.source() == source)
}

/// A single conversion call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionRequest<'a> {
    pub source: Representation,
    pub target: Representation,
    pub input: &'a str,
}

impl<'a> ConversionRequest<'a> {
    pub fn new(source: Representation, target: Representation, input: &'a str) -> Self {
        Self {
            source,
            target,
            input,
        }
    }

    /// Looks up the conversion and applies it.
    ///
    /// # Errors
    ///
    /// [`ConversionError::Unsupported`] for a pair outside the table, otherwise
    /// the converter's own error.
    pub fn run(&self) -> ConversionResult<ConvertibleValue> {
        let conversion = Conversion::lookup(self.source, self.target).ok_or(
            ConversionError::Unsupported {
                from: self.source,
                to: self.target,
            },
        );

        let result = conversion.and_then(|conversion| {
            tracing::trace!(conversion = conversion.title(), len = self.input.len(), "converting");
            conversion.apply(self.input)
        });

        if let Err(err) = &result {
            tracing::debug!(
                source = %self.source,
                target = %self.target,
                error = %err,
                "conversion failed"
            );
        }
        result
    }
}

/// Converts `input` from `source` to `target`.
///
/// # Example
///
/// ```
/// use para_convert::{convert, ConvertibleValue, MaybeSeq, Representation};
///
/// let value = convert(Representation::Hex, Representation::Decimal, "41 42").unwrap();
/// assert_eq!(value, ConvertibleValue::Integer(MaybeSeq::Sequence(vec![65, 66])));
/// assert_eq!(value.to_string(), "65 66");
/// ```
///
/// # Errors
///
/// See [`ConversionRequest::run`].
pub fn convert(
    source: Representation,
    target: Representation,
    input: &str,
) -> ConversionResult<ConvertibleValue> {
    ConversionRequest::new(source, target, input).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_are_unique() {
        for (i, a) in Conversion::ALL.iter().enumerate() {
            for b in &Conversion::ALL[i + 1..] {
                assert_ne!(a.pair(), b.pair(), "{a} and {b} share a pair");
            }
        }
    }

    #[test]
    fn test_lookup_finds_every_conversion() {
        for conversion in Conversion::ALL {
            assert_eq!(
                Conversion::lookup(conversion.source(), conversion.target()),
                Some(conversion)
            );
        }
    }

    #[test]
    fn test_base64_only_connects_to_ascii() {
        for repr in Representation::ALL {
            let to = Conversion::lookup(repr, Representation::Base64);
            let from = Conversion::lookup(Representation::Base64, repr);
            if repr == Representation::Ascii {
                assert_eq!(to, Some(Conversion::EncodeBase64));
                assert_eq!(from, Some(Conversion::DecodeBase64));
            } else {
                assert_eq!(to, None);
                assert_eq!(from, None);
            }
        }
    }

    #[test]
    fn test_identity_pairs_are_unsupported() {
        for repr in Representation::ALL {
            assert_eq!(
                convert(repr, repr, "1"),
                Err(ConversionError::Unsupported { from: repr, to: repr })
            );
        }
    }

    #[test]
    fn test_conversions_from_groups_by_source() {
        let titles: Vec<_> = conversions_from(Representation::Ascii)
            .map(Conversion::title)
            .collect();
        assert_eq!(
            titles,
            [
                "Ascii to decimal",
                "Ascii to hex",
                "Ascii to binary",
                "Encode base64",
            ]
        );
        assert_eq!(
            conversions_from(Representation::Base64).collect::<Vec<_>>(),
            [Conversion::DecodeBase64]
        );
    }

    #[test]
    fn test_apply_wraps_in_target_representation() {
        for conversion in Conversion::ALL {
            if let Ok(value) = conversion.apply("1") {
                assert_eq!(value.representation(), conversion.target(), "{conversion}");
            }
        }
    }
}
