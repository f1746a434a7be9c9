//! Error types for fleetgate-core.
//!
//! Uses `thiserror` so callers get structured, composable errors; the
//! binary wraps them with `anyhow` context at the top level.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors surfaced while building the gateway configuration at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `PORT` was set to something that is not a TCP port number.
    #[error("invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: ParseIntError,
    },
}

/// Result type alias for fleetgate-core operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_port_names_the_offending_value() {
        let source = "garbage".parse::<u16>().unwrap_err();
        let err = ConfigError::InvalidPort {
            value: "garbage".to_string(),
            source,
        };
        assert!(err.to_string().contains("\"garbage\""));
        assert!(err.to_string().starts_with("invalid PORT value"));
    }
}
