use std::{env, str::FromStr};

use strum::{Display, EnumString};

use super::{ActionsConfig, ConfigError};
use crate::constants::{
    DEFAULT_HOST, DEFAULT_PORT, DEFAULT_RPC_TIMEOUT_SECONDS, DEFAULT_SOLANA_RPC_URL,
    DEFAULT_TIP_RECIPIENT, SOLANA_DEVNET_CHAIN_ID, SOLANA_MAINNET_CHAIN_ID,
    SOLANA_TESTNET_CHAIN_ID,
};

/// Solana cluster the configured RPC endpoint belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum SolanaCluster {
    MainnetBeta,
    Testnet,
    Devnet,
}

impl SolanaCluster {
    /// CAIP-2 identifier used in the `X-Blockchain-Ids` header.
    pub fn chain_id(&self) -> &'static str {
        match self {
            SolanaCluster::MainnetBeta => SOLANA_MAINNET_CHAIN_ID,
            SolanaCluster::Testnet => SOLANA_TESTNET_CHAIN_ID,
            SolanaCluster::Devnet => SOLANA_DEVNET_CHAIN_ID,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// JSON-RPC endpoint of the Solana cluster.
    pub rpc_url: String,
    pub rpc_timeout_seconds: u64,
    pub cluster: SolanaCluster,
    /// Base58 address that receives tips when the caller omits `to`.
    pub tip_recipient: String,
}

impl ServerConfig {
    /// Reads the configuration from the environment.
    ///
    /// Unset or unparseable values fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            rpc_url: env::var("SOLANA_RPC")
                .ok()
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SOLANA_RPC_URL.to_string()),
            rpc_timeout_seconds: env::var("RPC_TIMEOUT_SECONDS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(DEFAULT_RPC_TIMEOUT_SECONDS),
            cluster: env::var("SOLANA_CLUSTER")
                .ok()
                .and_then(|c| SolanaCluster::from_str(&c).ok())
                .unwrap_or(SolanaCluster::Devnet),
            tip_recipient: env::var("TIP_RECIPIENT")
                .unwrap_or_else(|_| DEFAULT_TIP_RECIPIENT.to_string()),
        }
    }

    /// Checks the values that would otherwise only fail on the first request.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = reqwest::Url::parse(&self.rpc_url)
            .map_err(|e| ConfigError::InvalidRpcUrl(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidRpcUrl(format!(
                "unsupported scheme '{}'",
                url.scheme()
            )));
        }

        if self.rpc_timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                name: "RPC_TIMEOUT_SECONDS".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        ActionsConfig::from_server_config(self)?;
        Ok(())
    }
}
