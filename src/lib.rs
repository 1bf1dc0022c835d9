//! Solana Actions server.
//!
//! Serves discoverable "action" endpoints that return unsigned Solana
//! transactions for a wallet to sign: a SOL tip and an on-chain memo.
//! The server never holds keys, never signs and never submits anything.

pub mod api;
pub mod config;
pub mod constants;
pub mod domain;
pub mod logging;
pub mod models;
pub mod services;
pub mod utils;
