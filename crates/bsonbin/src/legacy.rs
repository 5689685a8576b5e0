//! Single-byte-per-character text encoding.
//!
//! Every character maps to exactly one byte equal to its code point modulo
//! 256, and every byte decodes back to the character with that code. This is
//! not UTF-8: characters above U+00FF lose information on the way in.

/// Encodes `text` one byte per character.
pub fn encode(text: &str) -> Vec<u8> {
    text.chars().map(encode_char).collect()
}

/// The byte a single character is stored as.
#[inline]
pub fn encode_char(c: char) -> u8 {
    (u32::from(c) % 256) as u8
}

/// Decodes each byte as the character with the same code.
pub fn decode(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

/// Number of bytes `text` occupies once encoded.
#[inline]
pub fn encoded_len(text: &str) -> usize {
    text.chars().count()
}
