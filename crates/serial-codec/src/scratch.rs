//! Call-scoped output buffer.
//!
//! Outputs up to [`INLINE_CAPACITY`] bytes live inline on the stack; larger
//! ones get a single heap allocation of exactly the requested length. Both
//! paths expose the same slice, so the threshold only affects speed.

use smallvec::SmallVec;

/// Largest output kept off the heap.
pub const INLINE_CAPACITY: usize = 256;

#[derive(Debug, Clone)]
pub struct Scratch {
    buf: SmallVec<[u8; INLINE_CAPACITY]>,
}

impl Scratch {
    /// Zeroed buffer of exactly `len` bytes.
    pub fn with_len(len: usize) -> Self {
        Self {
            buf: SmallVec::from_elem(0, len),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// True when the buffer never left the stack.
    pub fn is_inline(&self) -> bool {
        !self.buf.spilled()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        self.buf.as_mut_slice()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        self.buf.as_slice()
    }

    /// Hand the bytes to the caller. A spilled buffer is moved, not copied.
    pub fn into_vec(self) -> Vec<u8> {
        self.buf.into_vec()
    }

    /// Hand the symbols to the caller as text.
    ///
    /// Only meaningful for encoder output, where every byte is an ASCII
    /// alphabet symbol.
    pub fn into_string(self) -> String {
        self.buf.iter().map(|&b| char::from(b)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_stays_inline() {
        let scratch = Scratch::with_len(INLINE_CAPACITY);
        assert!(scratch.is_inline());
        assert_eq!(scratch.len(), INLINE_CAPACITY);
        assert!(scratch.as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_large_spills_exactly() {
        let scratch = Scratch::with_len(INLINE_CAPACITY + 1);
        assert!(!scratch.is_inline());
        assert_eq!(scratch.len(), INLINE_CAPACITY + 1);
        assert_eq!(scratch.into_vec().len(), INLINE_CAPACITY + 1);
    }

    #[test]
    fn test_empty() {
        let scratch = Scratch::with_len(0);
        assert!(scratch.is_empty());
        assert!(scratch.is_inline());
        assert_eq!(scratch.into_string(), "");
    }

    #[test]
    fn test_writes_survive_into_vec() {
        for len in [4, 1000] {
            let mut scratch = Scratch::with_len(len);
            scratch.as_mut_slice()[len - 1] = 0xAB;
            let out = scratch.into_vec();
            assert_eq!(out.len(), len);
            assert_eq!(out[len - 1], 0xAB);
        }
    }

    #[test]
    fn test_into_string_ascii() {
        let mut scratch = Scratch::with_len(3);
        scratch.as_mut_slice().copy_from_slice(b"A2Z");
        assert_eq!(scratch.into_string(), "A2Z");
    }
}
