//! Output formatting for the codec worker.
//!
//! One JSON object per run on stdout. Binary results are base64 so the
//! response stays valid UTF-8.

use serde::Serialize;
use serial_codec::{Operation, Payload};

/// Success response.
#[derive(Serialize)]
pub struct SuccessResponse {
    pub success: bool,
    pub operation: String,
    pub output: String,
    pub output_encoding: String,
}

/// Error response.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub operation: Option<String>,
    pub error: String,
    pub kind: String,
}

/// Format a success response as JSON.
pub fn success_response(operation: Operation, output: &[u8]) -> String {
    let (output, output_encoding) = match operation.output_kind() {
        Payload::Text => (String::from_utf8_lossy(output).into_owned(), "utf8"),
        Payload::Binary => {
            use base64::Engine;
            (base64::engine::general_purpose::STANDARD.encode(output), "base64")
        }
    };

    let response = SuccessResponse {
        success: true,
        operation: operation.name().to_string(),
        output,
        output_encoding: output_encoding.to_string(),
    };

    // Alphabet symbols and base64 never need escaping
    serde_json::to_string(&response).unwrap_or_else(|_| {
        format!(
            r#"{{"success":true,"operation":"{}","output":"{}","output_encoding":"{}"}}"#,
            response.operation, response.output, response.output_encoding
        )
    })
}

/// Format an error response as JSON.
pub fn error_response(operation: Option<Operation>, kind: &str, error: &str) -> String {
    let response = ErrorResponse {
        success: false,
        operation: operation.map(|op| op.name().to_string()),
        error: error.to_string(),
        kind: kind.to_string(),
    };

    serde_json::to_string(&response).unwrap_or_else(|_| {
        format!(
            r#"{{"success":false,"error":"{}","kind":"{}"}}"#,
            error.replace('"', "'"),
            kind
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response_text() {
        let json = success_response(Operation::Bin2Hex, b"4142");
        assert_eq!(
            json,
            r#"{"success":true,"operation":"bin2hex","output":"4142","output_encoding":"utf8"}"#
        );
    }

    #[test]
    fn test_success_response_binary() {
        let json = success_response(Operation::Base322Bin, b"Hello");
        assert!(json.contains("\"output\":\"SGVsbG8=\""));
        assert!(json.contains("\"output_encoding\":\"base64\""));
    }

    #[test]
    fn test_error_response() {
        let json = error_response(
            Some(Operation::Bin2Base32),
            "length_precondition",
            "string length must be a multiple of 5 (got 3)",
        );
        assert!(json.contains("\"success\":false"));
        assert!(json.contains("\"operation\":\"bin2base32\""));
        assert!(json.contains("\"kind\":\"length_precondition\""));
    }

    #[test]
    fn test_error_response_without_operation() {
        let json = error_response(None, "bad_request", "Invalid input JSON");
        assert!(json.contains("\"operation\":null"));
        assert!(json.contains("\"error\":\"Invalid input JSON\""));
    }
}
