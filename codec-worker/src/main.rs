//! Codec worker: the host-facing side of serial-codec.
//!
//! - Reads one JSON request from stdin (operation + input)
//! - Applies the named transform
//! - Writes one JSON response to stdout, logs go to stderr
//!
//! Operations: bin2hex, hex2bin, bin2base32, base322bin

mod config;
mod input;
mod output;

use serial_codec::{CodecError, Operation};
use std::io::{self, Read, Write};
use std::process::ExitCode;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Why a run produced no result.
#[derive(Debug)]
struct Failure {
    operation: Option<Operation>,
    kind: &'static str,
    message: String,
}

impl Failure {
    fn bad_request(message: String) -> Self {
        Self {
            operation: None,
            kind: "bad_request",
            message,
        }
    }

    fn codec(operation: Operation, err: CodecError) -> Self {
        Self {
            operation: Some(operation),
            kind: err.kind().as_str(),
            message: err.to_string(),
        }
    }
}

fn main() -> ExitCode {
    init_tracing();

    let (output, code) = match run() {
        Ok(response) => (response, ExitCode::SUCCESS),
        Err(failure) => {
            warn!(kind = failure.kind, error = %failure.message, "request failed");
            (
                output::error_response(failure.operation, failure.kind, &failure.message),
                ExitCode::FAILURE,
            )
        }
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let _ = handle.write_all(output.as_bytes());
    let _ = handle.flush();
    code
}

/// stdout carries the response, so the subscriber writes to stderr.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run() -> Result<String, Failure> {
    // 1. Load configuration
    let config = config::WorkerConfig::from_env().map_err(Failure::bad_request)?;

    // 2. Read input from stdin
    let mut input_str = String::new();
    io::stdin()
        .read_to_string(&mut input_str)
        .map_err(|e| Failure::bad_request(format!("Failed to read stdin: {}", e)))?;

    // 3. Parse request
    let request = input::parse_request(&input_str).map_err(Failure::bad_request)?;
    debug!(
        operation = %request.operation,
        input_len = request.payload.len(),
        hex_mode = config.hex_mode.as_str(),
        "applying transform"
    );

    // 4. Transform
    let result = request
        .operation
        .apply_with(&request.payload, config.hex_mode)
        .map_err(|e| Failure::codec(request.operation, e))?;
    debug!(output_len = result.len(), "transform complete");

    Ok(output::success_response(request.operation, &result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_failure_carries_kind() {
        let err = serial_codec::bin2base32(b"abc").unwrap_err();
        let failure = Failure::codec(Operation::Bin2Base32, err);
        assert_eq!(failure.kind, "length_precondition");
        assert_eq!(failure.operation, Some(Operation::Bin2Base32));
        assert_eq!(failure.message, "string length must be a multiple of 5 (got 3)");
    }

    #[test]
    fn test_bad_request_has_no_operation() {
        let failure = Failure::bad_request("Invalid input JSON".to_string());
        assert_eq!(failure.kind, "bad_request");
        assert!(failure.operation.is_none());
    }
}
