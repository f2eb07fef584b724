//! Tests for base64 decoding (from_base64).

use para_base64::{from_base64, to_base64, Base64Error};
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(0..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn works() {
    for _ in 0..100 {
        let blob = generate_blob();
        let encoded = to_base64(&blob);
        assert_eq!(from_base64(&encoded).unwrap(), blob);
    }
}

#[test]
fn handles_invalid_values() {
    for _ in 0..100 {
        let blob = generate_blob();
        let encoded = to_base64(&blob);
        let invalid = format!("{}!!!!", encoded);
        let result = from_base64(&invalid);
        assert!(matches!(result, Err(Base64Error::InvalidBase64String)));
    }
}

#[test]
fn stripped_padding_is_reported_as_padding_error() {
    for _ in 0..100 {
        let blob = generate_blob();
        let encoded = to_base64(&blob);
        let stripped = encoded.trim_end_matches('=');
        if stripped.len() == encoded.len() {
            continue;
        }
        let err = from_base64(stripped).unwrap_err();
        assert!(err.is_padding_error(), "unexpected error {err:?} for {stripped:?}");
    }
}

#[test]
fn hello_world() {
    assert_eq!(from_base64("aGVsbG8gd29ybGQ=").unwrap(), b"hello world");
}

#[test]
fn error_display() {
    assert_eq!(Base64Error::InvalidBase64String.to_string(), "INVALID_BASE64_STRING");
    assert!(!Base64Error::InvalidBase64String.is_padding_error());
}
