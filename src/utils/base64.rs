//! Base64 helpers for transaction wire bytes.
//!
//! Actions clients expect the standard alphabet with padding.

use base64::{engine::general_purpose::STANDARD, Engine};

pub fn base64_encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub fn base64_decode(encoded: &str) -> Result<Vec<u8>, base64::DecodeError> {
    STANDARD.decode(encoded)
}
