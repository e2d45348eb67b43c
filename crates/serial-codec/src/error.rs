//! Error taxonomy shared by every transform.

use thiserror::Error;

use crate::alphabet::Alphabet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Input length is not a whole number of groups. Raised before any
    /// output buffer exists.
    #[error("string length must be a multiple of {group} (got {len})")]
    LengthPrecondition { len: usize, group: usize },

    /// A symbol outside the alphabet. The partial output is dropped.
    #[error("invalid {alphabet} character {byte:#04x} at offset {offset}")]
    InvalidCharacter {
        alphabet: Alphabet,
        byte: u8,
        offset: usize,
    },
}

/// Fieldless view of [`CodecError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    LengthPrecondition,
    InvalidCharacter,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LengthPrecondition => "length_precondition",
            Self::InvalidCharacter => "invalid_character",
        }
    }
}

impl CodecError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::LengthPrecondition { .. } => ErrorKind::LengthPrecondition,
            Self::InvalidCharacter { .. } => ErrorKind::InvalidCharacter,
        }
    }

    /// Fail unless `len` is a multiple of `group`.
    pub(crate) fn check_group(len: usize, group: usize) -> Result<(), Self> {
        if len % group != 0 {
            return Err(Self::LengthPrecondition { len, group });
        }
        Ok(())
    }
}
