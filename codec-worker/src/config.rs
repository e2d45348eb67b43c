//! Worker configuration from environment variables.
//!
//! - `CODEC_HEX_MODE`: `strict` (default) or `compat`
//! - `RUST_LOG`: tracing filter, read by the subscriber in `main`

use serial_codec::HexMode;

pub const HEX_MODE_VAR: &str = "CODEC_HEX_MODE";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorkerConfig {
    pub hex_mode: HexMode,
}

impl WorkerConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary key lookup. Unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(HEX_MODE_VAR) {
            config.hex_mode = value
                .parse()
                .map_err(|e| format!("Invalid {}: {}", HEX_MODE_VAR, e))?;
        }

        Ok(config)
    }
}
