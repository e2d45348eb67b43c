//! Input parsing for the codec worker.
//!
//! Parses the JSON request from stdin. Binary payloads can travel as
//! base64 so arbitrary bytes survive the JSON string.

use serde::Deserialize;
use serial_codec::{Operation, Payload};

/// How the `input` string maps to bytes.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum InputEncoding {
    /// The string's own UTF-8 bytes
    #[default]
    Utf8,
    /// Standard base64, binary-input operations only
    Base64,
}

/// Parsed request: which transform, and the bytes to feed it.
#[derive(Debug)]
pub struct CodecRequest {
    pub operation: Operation,
    pub payload: Vec<u8>,
}

/// Raw request as it arrives on stdin.
#[derive(Debug, Deserialize)]
struct RawInput {
    operation: String,
    input: String,
    #[serde(default)]
    input_encoding: InputEncoding,
}

/// Parse input JSON from stdin into a CodecRequest.
pub fn parse_request(input_str: &str) -> Result<CodecRequest, String> {
    let raw: RawInput =
        serde_json::from_str(input_str).map_err(|e| format!("Invalid input JSON: {}", e))?;

    let operation: Operation = raw.operation.parse().map_err(|e| format!("{}", e))?;

    let payload = match raw.input_encoding {
        InputEncoding::Utf8 => raw.input.into_bytes(),
        InputEncoding::Base64 => {
            if operation.input_kind() != Payload::Binary {
                return Err(format!(
                    "input_encoding base64 is not allowed for {}",
                    operation
                ));
            }
            decode_base64(&raw.input)?
        }
    };

    Ok(CodecRequest { operation, payload })
}

/// Decode a base64 input payload.
fn decode_base64(input: &str) -> Result<Vec<u8>, String> {
    use base64::Engine;
    base64::engine::general_purpose::STANDARD
        .decode(input)
        .map_err(|e| format!("Invalid base64 input: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_request_utf8_default() {
        let json = r#"{"operation": "bin2hex", "input": "AB"}"#;

        let request = parse_request(json).unwrap();
        assert_eq!(request.operation, Operation::Bin2Hex);
        assert_eq!(request.payload, b"AB");
    }

    #[test]
    fn test_parse_request_base64_binary() {
        let json = r#"{
            "operation": "bin2base32",
            "input": "AP8QIDA=",
            "input_encoding": "base64"
        }"#;

        let request = parse_request(json).unwrap();
        assert_eq!(request.operation, Operation::Bin2Base32);
        assert_eq!(request.payload, vec![0x00, 0xFF, 0x10, 0x20, 0x30]);
    }

    #[test]
    fn test_parse_request_text_input() {
        let json = r#"{"operation": "base322bin", "input": "JBSWY3DP"}"#;

        let request = parse_request(json).unwrap();
        assert_eq!(request.operation, Operation::Base322Bin);
        assert_eq!(request.payload, b"JBSWY3DP");
    }

    #[test]
    fn test_base64_rejected_for_text_input() {
        let json = r#"{"operation": "hex2bin", "input": "NDE0Mg==", "input_encoding": "base64"}"#;

        let err = parse_request(json).unwrap_err();
        assert!(err.contains("hex2bin"), "{}", err);
    }

    #[test]
    fn test_unknown_operation() {
        let json = r#"{"operation": "bin2base64", "input": ""}"#;

        let err = parse_request(json).unwrap_err();
        assert_eq!(err, "unknown operation: bin2base64");
    }

    #[test]
    fn test_bad_json_and_bad_base64() {
        assert!(parse_request("not json").is_err());
        assert!(parse_request(r#"{"operation": "bin2hex"}"#).is_err());

        let json = r#"{"operation": "bin2hex", "input": "@@@", "input_encoding": "base64"}"#;
        let err = parse_request(json).unwrap_err();
        assert!(err.starts_with("Invalid base64 input"), "{}", err);
    }
}
