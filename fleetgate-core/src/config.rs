//! Gateway configuration, fixed at startup.
//!
//! The listening port, the origin allow-list, and the JSON body limit all
//! live in one [`GatewayConfig`], built once at startup and handed to the
//! router builder and process entry. Nothing reads the environment after
//! that.

use std::env;

use crate::error::{ConfigError, Result};
use crate::origin::AllowList;

/// TCP port used when `PORT` is unset or empty.
pub const DEFAULT_PORT: u16 = 5000;

/// Bind address used when no override is given.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Largest JSON body accepted before dispatch (100 KiB).
pub const DEFAULT_JSON_BODY_LIMIT: usize = 100 * 1024;

/// Immutable gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Address to bind the listener to.
    pub host: String,
    /// TCP port to listen on.
    pub port: u16,
    /// Origins granted credentialed cross-origin access.
    pub allowed_origins: AllowList,
    /// Upper bound on JSON request bodies, in bytes.
    pub json_body_limit: usize,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            allowed_origins: AllowList::default(),
            json_body_limit: DEFAULT_JSON_BODY_LIMIT,
        }
    }
}

impl GatewayConfig {
    /// Build the configuration from the process environment.
    ///
    /// `PORT` selects the listening port; unset or empty falls back to
    /// [`DEFAULT_PORT`]. A set-but-unparseable value is a startup error,
    /// never a silent fallback.
    pub fn from_env() -> Result<Self> {
        let port = parse_port(env::var("PORT").ok().as_deref())?;
        Ok(Self {
            port,
            ..Self::default()
        })
    }
}

/// Interpret the raw value of the `PORT` environment variable.
pub fn parse_port(raw: Option<&str>) -> Result<u16> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) if value.trim().is_empty() => Ok(DEFAULT_PORT),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidPort {
                value: value.to_string(),
                source,
            }),
    }
}
