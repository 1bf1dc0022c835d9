//! Solana network constants.

/// Decimals of the native SOL amount.
pub const SOLANA_DECIMALS: u8 = 9;

/// Public devnet RPC endpoint, used when `SOLANA_RPC` is unset.
pub const DEFAULT_SOLANA_RPC_URL: &str = "https://api.devnet.solana.com";

/// Default RPC request timeout in seconds.
pub const DEFAULT_RPC_TIMEOUT_SECONDS: u64 = 30;

/// Data size of a plain system account holding only SOL.
pub const SYSTEM_ACCOUNT_DATA_SIZE: usize = 0;

/// CAIP-2 chain ids advertised in `X-Blockchain-Ids`.
pub const SOLANA_MAINNET_CHAIN_ID: &str = "solana:5eykt4UsFv8P8NJdTREpY1vzqKqZKvdp";
pub const SOLANA_DEVNET_CHAIN_ID: &str = "solana:EtWTRABZaYq6iMfeYKouRu166VU2xqa1";
pub const SOLANA_TESTNET_CHAIN_ID: &str = "solana:4uhcVJyU9pJkvQyS88uRDiswHXSCkY3z";

/// SPL Memo program (v2).
pub const MEMO_PROGRAM_ID: solana_sdk::pubkey::Pubkey =
    solana_sdk::pubkey!("MemoSq4gqABAXKb96qnH8TysNcWxMyWCqXgDLGmfcHr");
