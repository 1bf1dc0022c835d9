use std::str::FromStr;

use solana_sdk::pubkey::Pubkey;

use super::{ConfigError, ServerConfig};
use crate::constants::{
    DEFAULT_TIP_AMOUNT, MEMO_PAYLOAD, MEMO_PRIORITY_FEE_MICRO_LAMPORTS, UNIT_TIP_PRICE_LAMPORTS,
};

/// Parameters of the offered actions, resolved once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionsConfig {
    /// Tip recipient used when the request has no `to` parameter.
    pub default_recipient: Pubkey,
    /// Number of units tipped when the request has no `amount` parameter.
    pub default_amount: f64,
    /// Price of one tip unit in lamports.
    pub unit_price_lamports: u64,
    pub memo_payload: String,
    pub memo_priority_fee_micro_lamports: u64,
}

impl ActionsConfig {
    pub fn new(default_recipient: Pubkey) -> Self {
        Self {
            default_recipient,
            default_amount: DEFAULT_TIP_AMOUNT,
            unit_price_lamports: UNIT_TIP_PRICE_LAMPORTS,
            memo_payload: MEMO_PAYLOAD.to_string(),
            memo_priority_fee_micro_lamports: MEMO_PRIORITY_FEE_MICRO_LAMPORTS,
        }
    }

    pub fn from_server_config(config: &ServerConfig) -> Result<Self, ConfigError> {
        let recipient =
            Pubkey::from_str(&config.tip_recipient).map_err(|e| ConfigError::InvalidValue {
                name: "TIP_RECIPIENT".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self::new(recipient))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SolanaCluster;
    use crate::constants::DEFAULT_TIP_RECIPIENT;

    fn server_config(tip_recipient: &str) -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            rpc_url: "http://localhost:8899".to_string(),
            rpc_timeout_seconds: 10,
            cluster: SolanaCluster::Devnet,
            tip_recipient: tip_recipient.to_string(),
        }
    }

    #[test]
    fn test_from_server_config_uses_action_constants() {
        let config = ActionsConfig::from_server_config(&server_config(DEFAULT_TIP_RECIPIENT))
            .expect("default recipient must be a valid address");

        assert_eq!(config.default_recipient.to_string(), DEFAULT_TIP_RECIPIENT);
        assert_eq!(config.default_amount, 1.0);
        assert_eq!(config.unit_price_lamports, 50_000_000);
        assert_eq!(config.memo_payload, "Hello, Solana! 🚀");
        assert_eq!(config.memo_priority_fee_micro_lamports, 1_000);
    }

    #[test]
    fn test_from_server_config_rejects_invalid_recipient() {
        let result = ActionsConfig::from_server_config(&server_config("0xdeadbeef"));

        match result {
            Err(ConfigError::InvalidValue { name, .. }) => assert_eq!(name, "TIP_RECIPIENT"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
