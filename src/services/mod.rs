//! # Services Module
//!
//! Implements external service integrations: the Solana RPC provider that
//! supplies the network state needed to build transactions.

mod provider;
pub use provider::*;
