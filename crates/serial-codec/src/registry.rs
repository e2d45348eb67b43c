//! Name → operation table.
//!
//! Hosts address the transforms by their legacy names (`bin2hex`,
//! `hex2bin`, `bin2base32`, `base322bin`). [`Operation`] is that table in
//! enum form: parse a name, then [`Operation::apply`] it to a buffer.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::error::CodecError;
use crate::hex::HexMode;
use crate::{base32, hex};

/// Shape of an operation's input or output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Payload {
    /// Arbitrary bytes
    Binary,
    /// ASCII alphabet symbols
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Bin2Hex,
    Hex2Bin,
    Bin2Base32,
    Base322Bin,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operation: {0}")]
pub struct UnknownOperation(pub String);

impl Operation {
    /// Registration order of the legacy module.
    pub const ALL: [Operation; 4] = [
        Self::Bin2Hex,
        Self::Hex2Bin,
        Self::Bin2Base32,
        Self::Base322Bin,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Bin2Hex => "bin2hex",
            Self::Hex2Bin => "hex2bin",
            Self::Bin2Base32 => "bin2base32",
            Self::Base322Bin => "base322bin",
        }
    }

    pub fn input_kind(&self) -> Payload {
        match self {
            Self::Bin2Hex | Self::Bin2Base32 => Payload::Binary,
            Self::Hex2Bin | Self::Base322Bin => Payload::Text,
        }
    }

    pub fn output_kind(&self) -> Payload {
        match self.input_kind() {
            Payload::Binary => Payload::Text,
            Payload::Text => Payload::Binary,
        }
    }

    /// Run the operation with strict hex decoding.
    pub fn apply(&self, input: &[u8]) -> Result<Vec<u8>, CodecError> {
        self.apply_with(input, HexMode::Strict)
    }

    /// Run the operation. `hex_mode` only affects [`Operation::Hex2Bin`].
    pub fn apply_with(&self, input: &[u8], hex_mode: HexMode) -> Result<Vec<u8>, CodecError> {
        match self {
            Self::Bin2Hex => Ok(hex::encode(input).into_bytes()),
            Self::Hex2Bin => hex::decode_with(input, hex_mode),
            Self::Bin2Base32 => base32::encode(input).map(String::into_bytes),
            Self::Base322Bin => base32::decode(input),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| UnknownOperation(s.to_string()))
    }
}
