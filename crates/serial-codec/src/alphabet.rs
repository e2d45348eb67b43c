//! Symbol tables and their inverse classifiers.
//!
//! The forward direction is a constant table indexed by symbol value. The
//! inverse is a `match` on byte ranges rather than a 256-entry table.

use std::fmt;

/// Hex alphabet, uppercase.
pub const HEX_ALPHABET: &[u8; 16] = b"0123456789ABCDEF";

/// Base32 alphabet (RFC 4648, no padding symbol)
pub const BASE32_ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Which alphabet a symbol was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alphabet {
    Hex,
    Base32,
}

impl Alphabet {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Base32 => "base32",
        }
    }

    /// Number of symbols in the alphabet.
    pub fn radix(&self) -> usize {
        match self {
            Self::Hex => HEX_ALPHABET.len(),
            Self::Base32 => BASE32_ALPHABET.len(),
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert a hex character to its nibble (0-15), or None if invalid
#[inline]
pub fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'A'..=b'F' => Some(c - b'A' + 10),
        b'a'..=b'f' => Some(c - b'a' + 10),
        _ => None,
    }
}

/// Legacy hex classifier.
///
/// Accepts the whole lowercase range `a..=z`, so `'g'` maps to 16 and `'z'`
/// to 35. Uppercase stops at `'F'`. Used by [`HexMode::Compat`] only.
///
/// [`HexMode::Compat`]: crate::hex::HexMode::Compat
#[inline]
pub fn hex_digit_compat(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'A'..=b'F' => Some(c - b'A' + 10),
        b'a'..=b'z' => Some(c - b'a' + 10),
        _ => None,
    }
}

/// Convert a base32 character to its value (0-31), or None if invalid
#[inline]
pub fn base32_digit(c: u8) -> Option<u8> {
    match c {
        b'A'..=b'Z' => Some(c - b'A'),
        b'a'..=b'z' => Some(c - b'a'),
        b'2'..=b'7' => Some(c - b'2' + 26),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_table_inverts() {
        for (value, &symbol) in HEX_ALPHABET.iter().enumerate() {
            assert_eq!(hex_digit(symbol), Some(value as u8));
            assert_eq!(hex_digit(symbol.to_ascii_lowercase()), Some(value as u8));
        }
    }

    #[test]
    fn test_base32_table_inverts() {
        for (value, &symbol) in BASE32_ALPHABET.iter().enumerate() {
            assert_eq!(base32_digit(symbol), Some(value as u8));
            assert_eq!(base32_digit(symbol.to_ascii_lowercase()), Some(value as u8));
        }
    }

    #[test]
    fn test_hex_rejects_out_of_range_letters() {
        for c in [b'g', b'z', b'G', b'Z', b' ', b'-', 0x00, 0xFF] {
            assert_eq!(hex_digit(c), None, "byte {:#04x}", c);
        }
    }

    #[test]
    fn test_hex_compat_quirks() {
        assert_eq!(hex_digit_compat(b'f'), Some(15));
        assert_eq!(hex_digit_compat(b'g'), Some(16));
        assert_eq!(hex_digit_compat(b'z'), Some(35));
        // uppercase past F was never accepted
        assert_eq!(hex_digit_compat(b'G'), None);
        assert_eq!(hex_digit_compat(b'Z'), None);
    }

    #[test]
    fn test_base32_rejects_zero_one_eight_nine() {
        for c in [b'0', b'1', b'8', b'9', b'=', b' '] {
            assert_eq!(base32_digit(c), None, "byte {:#04x}", c);
        }
    }

    #[test]
    fn test_radix() {
        assert_eq!(Alphabet::Hex.radix(), 16);
        assert_eq!(Alphabet::Base32.radix(), 32);
        assert_eq!(Alphabet::Base32.to_string(), "base32");
    }
}
