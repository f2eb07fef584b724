//! Conversions from hexadecimal strings.

use crate::radix::{parse_digits, to_binary, BYTE_WIDTH};
use crate::{ConversionError, ConversionResult, MaybeSeq};

/// Whitespace-separated hex tokens, every character checked to be a hex digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexTokens(Vec<String>);

impl HexTokens {
    /// Splits `input` on whitespace and validates every token.
    ///
    /// # Errors
    ///
    /// - [`ConversionError::EmptyInput`] if there are no tokens.
    /// - [`ConversionError::InvalidHexDigit`] for the first non-hex character.
    pub fn parse(input: &str) -> ConversionResult<Self> {
        Self::from_tokens(input.split_whitespace())
    }

    /// Validates tokens that were split by the caller.
    ///
    /// # Errors
    ///
    /// Same as [`HexTokens::parse`].
    pub fn from_tokens<I, S>(tokens: I) -> ConversionResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        if tokens.is_empty() {
            return Err(ConversionError::EmptyInput);
        }
        if let Some(bad) = tokens
            .iter()
            .flat_map(|token| token.chars())
            .find(|c| !c.is_ascii_hexdigit())
        {
            return Err(ConversionError::InvalidHexDigit(bad));
        }
        Ok(Self(tokens))
    }

    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    /// Each token as an integer.
    ///
    /// # Errors
    ///
    /// [`ConversionError::Overflow`] if a token does not fit in an `i64`.
    pub fn values(&self) -> ConversionResult<Vec<i64>> {
        self.0.iter().map(|token| parse_digits(token, 16)).collect()
    }

    /// The bytes spelled by each token, tokens of odd length being
    /// left-padded with one `0`.
    pub fn bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for token in &self.0 {
            let digits = token.as_bytes();
            let (head, rest) = if digits.len() % 2 == 1 {
                (Some(nibble(digits[0])), &digits[1..])
            } else {
                (None, digits)
            };
            out.extend(head);
            out.extend(rest.chunks_exact(2).map(|pair| (nibble(pair[0]) << 4) | nibble(pair[1])));
        }
        out
    }
}

/// Value of an already validated hex digit.
fn nibble(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}

/// Decodes every byte pair to the character with that code point.
///
/// # Example
///
/// ```
/// use para_convert::hex_to_ascii;
///
/// assert_eq!(hex_to_ascii("4869").as_deref(), Ok("Hi"));
/// assert_eq!(hex_to_ascii("48 69").as_deref(), Ok("Hi"));
/// assert_eq!(hex_to_ascii("a").as_deref(), Ok("\n"));
/// ```
///
/// # Errors
///
/// Validation errors from [`HexTokens::parse`].
pub fn hex_to_ascii(input: &str) -> ConversionResult<String> {
    Ok(HexTokens::parse(input)?.bytes().into_iter().map(char::from).collect())
}

/// Each token as an integer: a scalar for one token, a sequence otherwise.
///
/// # Errors
///
/// Validation errors from [`HexTokens::parse`], or
/// [`ConversionError::Overflow`].
pub fn hex_to_decimal(input: &str) -> ConversionResult<MaybeSeq<i64>> {
    let values = HexTokens::parse(input)?.values()?;
    MaybeSeq::from_vec(values).ok_or(ConversionError::EmptyInput)
}

/// Each token as binary padded to eight digits, tokens joined by one space.
///
/// # Errors
///
/// Validation errors from [`HexTokens::parse`], or
/// [`ConversionError::Overflow`].
pub fn hex_to_binary(input: &str) -> ConversionResult<String> {
    let values = HexTokens::parse(input)?.values()?;
    let mut out = String::with_capacity(values.len() * (BYTE_WIDTH + 1));
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&to_binary(value));
    }
    Ok(out)
}
