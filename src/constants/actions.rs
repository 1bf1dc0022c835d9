//! Constants describing the actions this server offers.

/// Recipient of tips when the caller does not pass `to`.
pub const DEFAULT_TIP_RECIPIENT: &str = "ji1E9W3P4Yesmwcv6m5rgBs6dGnshaTcfaFoRW6qcjL";

/// Number of coffees bought when the caller does not pass `amount`.
pub const DEFAULT_TIP_AMOUNT: f64 = 1.0;

/// Price of a single coffee in lamports (0.05 SOL).
pub const UNIT_TIP_PRICE_LAMPORTS: u64 = 50_000_000;

/// Fixed-amount links offered by the tip discovery metadata.
pub const TIP_PRESET_AMOUNTS: [&str; 3] = ["1", "3", "5"];

/// Text committed on-chain by the memo action.
pub const MEMO_PAYLOAD: &str = "Hello, Solana! 🚀";

/// Compute unit price attached to the memo transaction, in micro-lamports.
pub const MEMO_PRIORITY_FEE_MICRO_LAMPORTS: u64 = 1_000;

/// API path of the tip action.
pub const TIP_ACTION_PATH: &str = "/api/actions/tip";

/// API path of the memo action.
pub const MEMO_ACTION_PATH: &str = "/api/actions/memo";
