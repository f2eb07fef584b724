//! Standard base64 encoding function.

use crate::constants::{ALPHABET_BYTES, PAD};

#[inline]
fn push_sextet(out: &mut String, triple: u32, shift: u32) {
    out.push(ALPHABET_BYTES[((triple >> shift) & 0x3f) as usize] as char);
}

/// Encodes a byte slice to a standard base64 string.
///
/// Output always carries `=` padding up to a multiple of four characters.
///
/// # Example
///
/// ```
/// use para_base64::to_base64;
///
/// assert_eq!(to_base64(b"hi"), "aGk=");
/// assert_eq!(to_base64(b"hello world"), "aGVsbG8gd29ybGQ=");
/// ```
pub fn to_base64(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len().div_ceil(3) * 4);

    let mut chunks = bytes.chunks_exact(3);
    for chunk in &mut chunks {
        let triple = (u32::from(chunk[0]) << 16) | (u32::from(chunk[1]) << 8) | u32::from(chunk[2]);
        push_sextet(&mut out, triple, 18);
        push_sextet(&mut out, triple, 12);
        push_sextet(&mut out, triple, 6);
        push_sextet(&mut out, triple, 0);
    }

    match *chunks.remainder() {
        [o1] => {
            let triple = u32::from(o1) << 16;
            push_sextet(&mut out, triple, 18);
            push_sextet(&mut out, triple, 12);
            out.push(PAD);
            out.push(PAD);
        }
        [o1, o2] => {
            let triple = (u32::from(o1) << 16) | (u32::from(o2) << 8);
            push_sextet(&mut out, triple, 18);
            push_sextet(&mut out, triple, 12);
            push_sextet(&mut out, triple, 6);
            out.push(PAD);
        }
        _ => {}
    }

    out
}
