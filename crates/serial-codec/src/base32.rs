//! Unpadded RFC 4648 base32.
//!
//! Every 5 input bytes (40 bits) become 8 symbols of 5 bits each, most
//! significant bits first:
//!
//! ```text
//! bytes    aaaaaaaa bbbbbbbb cccccccc dddddddd eeeeeeee
//! symbols  aaaaa aaabb bbbbb bcccc ccccd ddddd ddeee eeeee
//!            0     1     2     3     4     5     6     7
//! ```
//!
//! No `=` padding is produced or accepted, so input lengths must be whole
//! groups: a multiple of 5 to encode, a multiple of 8 to decode.

use crate::alphabet::{base32_digit, Alphabet, BASE32_ALPHABET};
use crate::error::CodecError;
use crate::scratch::Scratch;

/// Bytes per group.
pub const BYTES_PER_GROUP: usize = 5;

/// Symbols per group.
pub const SYMBOLS_PER_GROUP: usize = 8;

/// Output length of [`encode`], or None if `bin_len` is not whole groups.
#[inline]
pub fn encoded_len(bin_len: usize) -> Option<usize> {
    (bin_len % BYTES_PER_GROUP == 0).then(|| bin_len / BYTES_PER_GROUP * SYMBOLS_PER_GROUP)
}

/// Output length of [`decode`], or None if `text_len` is not whole groups.
#[inline]
pub fn decoded_len(text_len: usize) -> Option<usize> {
    (text_len % SYMBOLS_PER_GROUP == 0).then(|| text_len / SYMBOLS_PER_GROUP * BYTES_PER_GROUP)
}

/// Split one 5-byte group into eight 5-bit values.
#[inline]
fn split_group(g: &[u8]) -> [u8; SYMBOLS_PER_GROUP] {
    let (a, b, c, d, e) = (g[0], g[1], g[2], g[3], g[4]);
    [
        a >> 3,                      // 5 bits of a
        (a << 2 | b >> 6) & 0x1F,    // 3 of a, 2 of b
        (b >> 1) & 0x1F,             // 5 of b
        (b << 4 | c >> 4) & 0x1F,    // 1 of b, 4 of c
        (c << 1 | d >> 7) & 0x1F,    // 4 of c, 1 of d
        (d >> 2) & 0x1F,             // 5 of d
        (d << 3 | e >> 5) & 0x1F,    // 2 of d, 3 of e
        e & 0x1F,                    // 5 of e
    ]
}

/// Join eight 5-bit values back into a 5-byte group.
#[inline]
fn join_group(v: &[u8; SYMBOLS_PER_GROUP], out: &mut [u8]) {
    let [a, b, c, d, e, f, g, h] = *v;
    out[0] = a << 3 | b >> 2;
    out[1] = b << 6 | c << 1 | d >> 4;
    out[2] = d << 4 | e >> 1;
    out[3] = e << 7 | f << 2 | g >> 3;
    out[4] = g << 5 | h;
}

/// Encode bytes as base32. Fails unless the length is a multiple of 5.
pub fn encode(bin: &[u8]) -> Result<String, CodecError> {
    CodecError::check_group(bin.len(), BYTES_PER_GROUP)?;

    let mut scratch = Scratch::with_len(bin.len() / BYTES_PER_GROUP * SYMBOLS_PER_GROUP);
    let groups = bin.chunks_exact(BYTES_PER_GROUP);
    let outs = scratch.as_mut_slice().chunks_exact_mut(SYMBOLS_PER_GROUP);
    for (group, out) in groups.zip(outs) {
        for (slot, value) in out.iter_mut().zip(split_group(group)) {
            *slot = BASE32_ALPHABET[value as usize];
        }
    }
    Ok(scratch.into_string())
}

/// Decode base32 (either case). Fails unless the length is a multiple of 8
/// and every symbol is in the alphabet.
pub fn decode(text: impl AsRef<[u8]>) -> Result<Vec<u8>, CodecError> {
    let text = text.as_ref();
    CodecError::check_group(text.len(), SYMBOLS_PER_GROUP)?;

    let mut scratch = Scratch::with_len(text.len() / SYMBOLS_PER_GROUP * BYTES_PER_GROUP);
    let groups = text.chunks_exact(SYMBOLS_PER_GROUP);
    let outs = scratch.as_mut_slice().chunks_exact_mut(BYTES_PER_GROUP);
    for (index, (group, out)) in groups.zip(outs).enumerate() {
        let mut values = [0u8; SYMBOLS_PER_GROUP];
        for (i, (&byte, value)) in group.iter().zip(values.iter_mut()).enumerate() {
            *value = base32_digit(byte).ok_or(CodecError::InvalidCharacter {
                alphabet: Alphabet::Base32,
                byte,
                offset: index * SYMBOLS_PER_GROUP + i,
            })?;
        }
        join_group(&values, out);
    }
    Ok(scratch.into_vec())
}

// ============================================================================
// TESTS
// ============================================================================
