//! Providers for the ledger networks the actions talk to.

mod solana;
pub use solana::*;
