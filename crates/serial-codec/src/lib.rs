//! # serial-codec
//!
//! Binary-to-text transforms over complete in-memory buffers:
//!
//! | Operation    | Input                    | Output                  |
//! |--------------|--------------------------|-------------------------|
//! | `bin2hex`    | bytes, any length        | `2 × n` hex symbols     |
//! | `hex2bin`    | hex text                 | `n / 2` bytes           |
//! | `bin2base32` | bytes, `n % 5 == 0`      | `n × 8 / 5` symbols     |
//! | `base322bin` | base32 text, `n % 8 == 0`| `n × 5 / 8` bytes       |
//!
//! Encoders emit uppercase only. Decoders accept either case. Base32 uses
//! the RFC 4648 alphabet without `=` padding.
//!
//! Every call validates its length precondition before touching a buffer,
//! then writes into a [`Scratch`] sized exactly to the output. Small outputs
//! (up to [`INLINE_CAPACITY`] bytes) never hit the heap.
//!
//! ```
//! use serial_codec::{bin2base32, base322bin, bin2hex, hex2bin};
//!
//! assert_eq!(bin2hex(b"AB"), "4142");
//! assert_eq!(hex2bin("4142").unwrap(), b"AB");
//! assert_eq!(bin2base32(b"Hello").unwrap(), "JBSWY3DP");
//! assert_eq!(base322bin("JBSWY3DP").unwrap(), b"Hello");
//! ```

#![forbid(unsafe_code)]

pub mod alphabet;
pub mod base32;
pub mod error;
pub mod hex;
pub mod registry;
pub mod scratch;

pub use alphabet::{Alphabet, BASE32_ALPHABET, HEX_ALPHABET};
pub use error::{CodecError, ErrorKind};
pub use hex::HexMode;
pub use registry::{Operation, Payload, UnknownOperation};
pub use scratch::{Scratch, INLINE_CAPACITY};

/// Encode bytes as uppercase hex. Never fails.
pub fn bin2hex(bin: impl AsRef<[u8]>) -> String {
    hex::encode(bin.as_ref())
}

/// Decode hex text (either case) using [`HexMode::Strict`].
pub fn hex2bin(text: impl AsRef<[u8]>) -> Result<Vec<u8>, CodecError> {
    hex::decode(text)
}

/// Encode bytes as unpadded base32. Length must be a multiple of 5.
pub fn bin2base32(bin: impl AsRef<[u8]>) -> Result<String, CodecError> {
    base32::encode(bin.as_ref())
}

/// Decode unpadded base32 text (either case). Length must be a multiple of 8.
pub fn base322bin(text: impl AsRef<[u8]>) -> Result<Vec<u8>, CodecError> {
    base32::decode(text)
}
