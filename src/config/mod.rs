//! Configuration for the actions server.
//!
//! Everything is read once at startup from the environment (optionally
//! populated from a `.env` file) and then injected into the services that
//! need it. Handlers never read the environment themselves.

mod actions_config;
pub use actions_config::*;

mod server_config;
pub use server_config::*;

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {reason}")]
    InvalidValue { name: String, reason: String },
    #[error("Invalid RPC URL: {0}")]
    InvalidRpcUrl(String),
}
