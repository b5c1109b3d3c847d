// src/core/cipher.rs
//! Fixed-shift letter substitution used to obscure the stored credential
//!
//! This is obfuscation only. It offers no confidentiality: anyone holding the
//! encoded text recovers the plain text by shifting back. Confidentiality at rest
//! comes from the SQLCipher secure store, not from this module.

use crate::consts::CIPHER_SHIFT;

const ALPHABET_LEN: i16 = 26;

/// Rotate ASCII letters within their own case range; everything else is returned unchanged
fn shift_char(c: char, shift: i16) -> char {
    let base = match c {
        'a'..='z' => b'a',
        'A'..='Z' => b'A',
        _ => return c,
    };
    let offset = (c as u8 - base) as i16;
    let rotated = (offset + shift).rem_euclid(ALPHABET_LEN) as u8;
    (base + rotated) as char
}

fn shift_str(text: &str, shift: i16) -> String {
    text.chars().map(|c| shift_char(c, shift)).collect()
}

/// Obscure `text` by shifting every Latin letter forward
#[inline]
pub fn encode(text: &str) -> String {
    shift_str(text, CIPHER_SHIFT as i16)
}

/// Inverse of [`encode`]
#[inline]
pub fn decode(text: &str) -> String {
    shift_str(text, -(CIPHER_SHIFT as i16))
}
