//! Hexadecimal transform: one byte ↔ two symbols, high nibble first.
//!
//! Encoding always emits `0-9A-F`. Decoding runs under a [`HexMode`]:
//!
//! - [`HexMode::Strict`] rejects odd-length input and anything outside
//!   `0-9a-fA-F`.
//! - [`HexMode::Compat`] reproduces the legacy decoder: a trailing unpaired
//!   symbol is dropped, and lowercase `g..z` slip through as out-of-range
//!   nibbles that get folded into the byte.

use std::str::FromStr;

use crate::alphabet::{hex_digit, hex_digit_compat, Alphabet, HEX_ALPHABET};
use crate::error::CodecError;
use crate::scratch::Scratch;

/// Hex decoding policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HexMode {
    #[default]
    Strict,
    Compat,
}

impl HexMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Compat => "compat",
        }
    }
}

impl FromStr for HexMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "compat" => Ok(Self::Compat),
            other => Err(format!("unknown hex mode: {}", other)),
        }
    }
}

/// Output length of [`encode`].
#[inline]
pub fn encoded_len(bin_len: usize) -> usize {
    bin_len * 2
}

/// Output length of [`decode_with`], or None when `mode` rejects the length.
#[inline]
pub fn decoded_len(text_len: usize, mode: HexMode) -> Option<usize> {
    match mode {
        HexMode::Strict if text_len % 2 != 0 => None,
        _ => Some(text_len / 2),
    }
}

/// Encode bytes as uppercase hex.
pub fn encode(bin: &[u8]) -> String {
    let mut scratch = Scratch::with_len(encoded_len(bin.len()));
    for (&byte, pair) in bin.iter().zip(scratch.as_mut_slice().chunks_exact_mut(2)) {
        pair[0] = HEX_ALPHABET[(byte >> 4) as usize];
        pair[1] = HEX_ALPHABET[(byte & 0x0F) as usize];
    }
    scratch.into_string()
}

/// Decode hex under [`HexMode::Strict`].
pub fn decode(text: impl AsRef<[u8]>) -> Result<Vec<u8>, CodecError> {
    decode_with(text, HexMode::Strict)
}

/// Decode hex under the given policy.
pub fn decode_with(text: impl AsRef<[u8]>, mode: HexMode) -> Result<Vec<u8>, CodecError> {
    let text = text.as_ref();
    let out_len = decoded_len(text.len(), mode).ok_or(CodecError::LengthPrecondition {
        len: text.len(),
        group: 2,
    })?;

    let classify: fn(u8) -> Option<u8> = match mode {
        HexMode::Strict => hex_digit,
        HexMode::Compat => hex_digit_compat,
    };
    let nibble = |offset: usize| {
        let byte = text[offset];
        classify(byte).ok_or(CodecError::InvalidCharacter {
            alphabet: Alphabet::Hex,
            byte,
            offset,
        })
    };

    let mut scratch = Scratch::with_len(out_len);
    for (i, out) in scratch.as_mut_slice().iter_mut().enumerate() {
        let hi = nibble(i * 2)?;
        let lo = nibble(i * 2 + 1)?;
        // compat nibbles can exceed 15; the high bits fall off the byte
        *out = (hi << 4) | lo;
    }
    Ok(scratch.into_vec())
}

// ============================================================================
// TESTS
// ============================================================================
