//! Headers every Solana Actions response must carry.
//!
//! Wallets and blink clients fetch actions cross-origin, so every response,
//! error responses included, has to expose the same header set.

pub const ACTIONS_ALLOW_ORIGIN: &str = "*";

pub const ACTIONS_ALLOW_METHODS: &str = "GET,POST,PUT,OPTIONS";

pub const ACTIONS_ALLOW_HEADERS: &str =
    "Content-Type, Authorization, Content-Encoding, Accept-Encoding, X-Action-Version, X-Blockchain-Ids";

pub const ACTIONS_EXPOSE_HEADERS: &str = "X-Action-Version, X-Blockchain-Ids";

/// Actions protocol version advertised in `X-Action-Version`.
pub const ACTIONS_PROTOCOL_VERSION: &str = "2.4";

pub const HEADER_ACTION_VERSION: &str = "X-Action-Version";

pub const HEADER_BLOCKCHAIN_IDS: &str = "X-Blockchain-Ids";
