//! Strict standard base64 decoding.

use crate::constants::{PAD_BYTE, SEXTETS};
use crate::Base64Error;

/// Decodes a standard, padded base64 string to bytes.
///
/// The decoder is strict: every character must belong to the standard
/// alphabet, the length must be a multiple of four, and `=` may only appear as
/// the last one or two characters. The empty string decodes to no bytes.
///
/// # Errors
///
/// - [`Base64Error::InvalidBase64String`] if a character is outside the alphabet.
/// - [`Base64Error::InvalidLength`] if the length is not a multiple of four
///   (typically missing padding).
/// - [`Base64Error::InvalidPadding`] if `=` appears anywhere but the tail, or
///   more than twice.
///
/// # Example
///
/// ```
/// use para_base64::{from_base64, Base64Error};
///
/// assert_eq!(from_base64("aGk=").unwrap(), b"hi");
/// assert_eq!(from_base64("aGk"), Err(Base64Error::InvalidLength));
/// ```
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, Base64Error> {
    let bytes = encoded.as_bytes();
    if bytes.is_empty() {
        return Ok(Vec::new());
    }

    if bytes
        .iter()
        .any(|&b| b != PAD_BYTE && SEXTETS[b as usize] < 0)
    {
        return Err(Base64Error::InvalidBase64String);
    }

    if bytes.len() % 4 != 0 {
        return Err(Base64Error::InvalidLength);
    }

    let padding = bytes.iter().rev().take_while(|&&b| b == PAD_BYTE).count();
    if padding > 2 || bytes[..bytes.len() - padding].contains(&PAD_BYTE) {
        return Err(Base64Error::InvalidPadding);
    }

    let mut out = Vec::with_capacity(bytes.len() / 4 * 3);
    for quad in bytes.chunks_exact(4) {
        // Padding bytes contribute zero bits; they are truncated below.
        let triple = quad.iter().fold(0u32, |acc, &b| {
            let sextet = if b == PAD_BYTE { 0 } else { SEXTETS[b as usize] as u32 };
            (acc << 6) | sextet
        });
        out.push((triple >> 16) as u8);
        out.push((triple >> 8) as u8);
        out.push(triple as u8);
    }
    out.truncate(out.len() - padding);

    Ok(out)
}
