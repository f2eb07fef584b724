//! Conversions from text.

use para_base64::{from_base64, to_base64, PAD};

use crate::radix::{to_binary, to_hex};
use crate::{ConversionError, ConversionResult, MaybeSeq};

/// Number of decode attempts made by [`decode_base64`], including the first.
pub const MAX_DECODE_ATTEMPTS: usize = 3;

fn code_points(text: &str) -> ConversionResult<impl Iterator<Item = i64> + '_> {
    if text.is_empty() {
        return Err(ConversionError::EmptyInput);
    }
    Ok(text.chars().map(|c| i64::from(u32::from(c))))
}

/// Code point of each character: a scalar for one character, a sequence otherwise.
///
/// # Example
///
/// ```
/// use para_convert::{ascii_to_decimal, MaybeSeq};
///
/// assert_eq!(ascii_to_decimal("A"), Ok(MaybeSeq::Scalar(65)));
/// assert_eq!(ascii_to_decimal("AB"), Ok(MaybeSeq::Sequence(vec![65, 66])));
/// ```
///
/// # Errors
///
/// [`ConversionError::EmptyInput`] for the empty string.
pub fn ascii_to_decimal(text: &str) -> ConversionResult<MaybeSeq<i64>> {
    let values: Vec<i64> = code_points(text)?.collect();
    MaybeSeq::from_vec(values).ok_or(ConversionError::EmptyInput)
}

/// Unpadded lowercase hex of each code point, concatenated.
///
/// # Errors
///
/// [`ConversionError::EmptyInput`] for the empty string.
pub fn ascii_to_hex(text: &str) -> ConversionResult<String> {
    Ok(code_points(text)?.map(to_hex).collect())
}

/// Each code point as at least eight binary digits, concatenated.
///
/// # Errors
///
/// [`ConversionError::EmptyInput`] for the empty string.
pub fn ascii_to_binary(text: &str) -> ConversionResult<String> {
    Ok(code_points(text)?.map(to_binary).collect())
}

/// Base64 of the UTF-8 bytes of `text`, with padding.
pub fn encode_base64(text: &str) -> String {
    to_base64(text.as_bytes())
}

/// Trims surplus trailing `=` down to what the length needs, or appends one.
fn repair_padding(candidate: &mut String) {
    let body_len = candidate.trim_end_matches(PAD).len();
    let present = candidate.len() - body_len;
    let needed = (4 - body_len % 4) % 4;
    if present > needed && needed <= 2 {
        candidate.truncate(body_len + needed);
    } else {
        candidate.push(PAD);
    }
}

/// Decodes base64 to UTF-8 text, repairing missing padding.
///
/// When the decoder rejects the padding, the padding is repaired and decoding
/// is retried, for at most [`MAX_DECODE_ATTEMPTS`] attempts. Surplus trailing
/// `=` are trimmed to the count the length needs; otherwise one `=` is
/// appended.
///
/// # Example
///
/// ```
/// use para_convert::decode_base64;
///
/// assert_eq!(decode_base64("aGk=").as_deref(), Ok("hi"));
/// assert_eq!(decode_base64("aGk").as_deref(), Ok("hi"));
/// assert_eq!(decode_base64("aGk==").as_deref(), Ok("hi"));
/// ```
///
/// # Errors
///
/// - [`ConversionError::EmptyInput`] for the empty string.
/// - [`ConversionError::InvalidBase64`] for bad characters, or padding that
///   is still wrong after the last attempt.
/// - [`ConversionError::InvalidUtf8`] if the bytes are not UTF-8.
pub fn decode_base64(encoded: &str) -> ConversionResult<String> {
    if encoded.is_empty() {
        return Err(ConversionError::EmptyInput);
    }

    let mut candidate = encoded.to_string();
    let mut attempt = 1;
    let bytes = loop {
        match from_base64(&candidate) {
            Ok(bytes) => break bytes,
            Err(err) if err.is_padding_error() && attempt < MAX_DECODE_ATTEMPTS => {
                tracing::trace!(attempt, error = %err, "repairing base64 padding");
                repair_padding(&mut candidate);
                attempt += 1;
            }
            Err(err) => return Err(err.into()),
        }
    };

    String::from_utf8(bytes).map_err(|_| ConversionError::InvalidUtf8)
}
