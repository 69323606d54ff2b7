//! Conversion between raw bytes and hexadecimal text.
//!
//! Keys are compared against test vectors and handed to external tooling as lowercase hex.

use crate::errors::HexError;

/// Encodes `bytes` as lowercase hex, two characters per byte with no separators.
pub fn to_hex_string(bytes: impl AsRef<[u8]>) -> String {
    ::hex::encode(bytes)
}

/// Decodes a hex string, accepting upper and lower case digits.
///
/// Odd-length input and non-hex characters are rejected rather than truncated.
pub fn from_hex_string(s: &str) -> Result<Vec<u8>, HexError> {
    if s.len() % 2 != 0 {
        return Err(HexError::OddLength(s.len()));
    }

    ::hex::decode(s).map_err(|err| match err {
        ::hex::FromHexError::InvalidHexCharacter { c, index } => HexError::InvalidCharacter {
            character: c,
            index,
        },
        _ => HexError::OddLength(s.len()),
    })
}
