//! fleetgate-core: admission and dispatch policy for the fleetgate gateway.
//!
//! Everything in this crate is synchronous and free of network machinery so
//! the gateway's decisions stay unit-testable on their own:
//! - [`origin`] decides, per request, whether a declared origin may proceed
//! - [`dispatch`] maps path prefixes to the four domain handler groups
//! - [`config`] holds the immutable process configuration built at startup

pub mod config;
pub mod dispatch;
pub mod error;
pub mod origin;

pub use config::GatewayConfig;
pub use dispatch::{DispatchTable, HandlerGroup, Mount};
pub use error::{ConfigError, Result};
pub use origin::{AllowList, Decision};
