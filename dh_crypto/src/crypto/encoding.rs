//! Fixed-width integer encoding and base64 helpers for exchanged values.
//!
//! Every value that crosses the wire is a big-endian unsigned integer padded
//! on the left to the byte length of the modulus. Base64 and line wrapping
//! exist only for human-readable transport.

use base64::{engine::general_purpose, Engine as _};
use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::{Error, Result};

/// Encodes `n` as exactly `width` big-endian bytes, zero-padded on the left.
pub fn int_to_fixed_bytes(n: &BigUint, width: usize) -> Result<Vec<u8>> {
    if n.is_zero() {
        return Ok(vec![0u8; width]);
    }

    let bytes = n.to_bytes_be();
    if bytes.len() > width {
        return Err(Error::Encoding(format!(
            "integer needs {} bytes, does not fit in {}",
            bytes.len(),
            width
        )));
    }

    let mut out = vec![0u8; width - bytes.len()];
    out.extend_from_slice(&bytes);
    Ok(out)
}

/// Big-endian bytes to integer. Leading zero bytes are ignored.
pub fn fixed_bytes_to_int(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Standard alphabet, padded.
pub fn encode_base64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// Decodes standard padded base64. ASCII whitespace (including the line
/// breaks inserted by [`chunkify`]) is stripped before decoding.
pub fn decode_base64(text: &str) -> Result<Vec<u8>> {
    let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    Ok(general_purpose::STANDARD.decode(compact)?)
}

/// Splits `text` into lines of at most `width` characters joined by `\n`.
pub fn chunkify(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn to_wrapped_base64(bytes: &[u8], width: usize) -> String {
    chunkify(&encode_base64(bytes), width)
}
