//! Solana Provider Module
//!
//! This module provides an abstraction layer over the Solana RPC client,
//! offering the read-only operations the actions need to build a
//! transaction: fetching the latest blockhash and querying the minimum
//! balance for rent exemption.
//!
//! The provider uses the non-blocking `RpcClient` for asynchronous operations
//! and integrates detailed error handling through the `SolanaProviderError` type.
//! Calls are never retried here; a failure is reported to the caller as is.
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde::Serialize;
use solana_client::{
    client_error::{ClientError, ClientErrorKind},
    nonblocking::rpc_client::RpcClient,
};
use solana_sdk::{commitment_config::CommitmentConfig, hash::Hash};
use std::{sync::Arc, time::Duration};
use thiserror::Error;

/// Utility function to match error patterns by normalizing both strings.
/// Removes spaces and converts to lowercase for flexible matching.
fn matches_error_pattern(error_msg: &str, pattern: &str) -> bool {
    let normalized_msg = error_msg.to_lowercase().replace(' ', "");
    let normalized_pattern = pattern.to_lowercase().replace(' ', "");
    normalized_msg.contains(&normalized_pattern)
}

/// Errors that can occur when interacting with the Solana provider.
#[derive(Error, Debug, Serialize, PartialEq)]
pub enum SolanaProviderError {
    /// Network/IO error (connection issues, timeouts)
    #[error("Network error: {0}")]
    NetworkError(String),

    /// RPC protocol error (node lag, sync pending, unknown codes)
    #[error("RPC error: {0}")]
    RpcError(String),

    /// HTTP request error with status code
    #[error("Request error (HTTP {status_code}): {error}")]
    RequestError { error: String, status_code: u16 },

    /// Network configuration error (bad endpoint, unsupported operations)
    #[error("Network configuration error: {0}")]
    NetworkConfiguration(String),

    /// Blockhash not found or expired
    #[error("Blockhash not found or expired: {0}")]
    BlockhashNotFound(String),
}

impl SolanaProviderError {
    /// Whether the same call could succeed later. Only informational: the
    /// actions never retry, but the value is logged with the failure.
    pub fn is_transient(&self) -> bool {
        match self {
            SolanaProviderError::NetworkError(_) => true,
            SolanaProviderError::RpcError(_) => true,
            SolanaProviderError::BlockhashNotFound(_) => true,
            SolanaProviderError::RequestError { status_code, .. } => {
                matches!(*status_code, 408 | 425 | 429 | 500 | 502..=504)
            }
            SolanaProviderError::NetworkConfiguration(_) => false,
        }
    }

    /// Classifies a Solana RPC client error into the appropriate error variant.
    pub fn from_rpc_error(error: ClientError) -> Self {
        match error.kind() {
            ClientErrorKind::Io(_) => SolanaProviderError::NetworkError(error.to_string()),

            ClientErrorKind::Reqwest(reqwest_err) => {
                if let Some(status) = reqwest_err.status() {
                    SolanaProviderError::RequestError {
                        error: error.to_string(),
                        status_code: status.as_u16(),
                    }
                } else {
                    // No status code available (e.g., connection error, timeout)
                    SolanaProviderError::NetworkError(error.to_string())
                }
            }

            ClientErrorKind::RpcError(rpc_err) => {
                let rpc_err_str = format!("{rpc_err}");
                Self::from_rpc_response_error(&rpc_err_str, &error)
            }

            ClientErrorKind::Custom(msg) => Self::from_rpc_response_error(msg, &error),

            _ => SolanaProviderError::RpcError(error.to_string()),
        }
    }

    /// Classifies RPC response errors using error codes and messages.
    ///
    /// - `-32008`: Blockhash not found
    /// - `-32007`, `-32010`: data unavailable on this node
    /// - everything else is reported as a generic RPC error
    fn from_rpc_response_error(rpc_err: &str, full_error: &ClientError) -> Self {
        if rpc_err.contains("-32008") || matches_error_pattern(rpc_err, "blockhash not found") {
            SolanaProviderError::BlockhashNotFound(full_error.to_string())
        } else if rpc_err.contains("-32007") || rpc_err.contains("-32010") {
            SolanaProviderError::NetworkConfiguration(full_error.to_string())
        } else {
            SolanaProviderError::RpcError(full_error.to_string())
        }
    }
}

/// The ledger state reads an action needs before it can build a transaction.
#[async_trait]
#[cfg_attr(test, automock)]
pub trait SolanaProviderTrait: Send + Sync {
    /// Retrieves the latest blockhash and the last block height at which it
    /// is still valid.
    async fn get_latest_blockhash_with_commitment(
        &self,
        commitment: CommitmentConfig,
    ) -> Result<(Hash, u64), SolanaProviderError>;

    /// Retrieves the minimum balance required for rent exemption for the specified data size.
    async fn get_minimum_balance_for_rent_exemption(
        &self,
        data_size: usize,
    ) -> Result<u64, SolanaProviderError>;
}

pub struct SolanaProvider {
    client: Arc<RpcClient>,
    commitment: CommitmentConfig,
}

impl std::fmt::Debug for SolanaProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolanaProvider")
            .field("url", &crate::utils::mask_url(&self.client.url()))
            .field("commitment", &self.commitment)
            .finish()
    }
}

impl SolanaProvider {
    pub fn new(rpc_url: &str, timeout_seconds: u64) -> Result<Self, SolanaProviderError> {
        Self::new_with_commitment(rpc_url, timeout_seconds, CommitmentConfig::confirmed())
    }

    /// Creates a new SolanaProvider for a single RPC endpoint.
    ///
    /// # Arguments
    ///
    /// * `rpc_url` - JSON-RPC endpoint of the cluster
    /// * `timeout_seconds` - Timeout applied to every request
    /// * `commitment` - Commitment level used for state reads
    pub fn new_with_commitment(
        rpc_url: &str,
        timeout_seconds: u64,
        commitment: CommitmentConfig,
    ) -> Result<Self, SolanaProviderError> {
        let url: reqwest::Url = rpc_url.parse().map_err(|e| {
            SolanaProviderError::NetworkConfiguration(format!("Invalid URL format: {e}"))
        })?;

        let client = RpcClient::new_with_timeout_and_commitment(
            url.to_string(),
            Duration::from_secs(timeout_seconds),
            commitment,
        );

        Ok(Self {
            client: Arc::new(client),
            commitment,
        })
    }

    /// Commitment level the provider was configured with.
    pub fn commitment(&self) -> CommitmentConfig {
        self.commitment
    }
}

#[async_trait]
impl SolanaProviderTrait for SolanaProvider {
    async fn get_latest_blockhash_with_commitment(
        &self,
        commitment: CommitmentConfig,
    ) -> Result<(Hash, u64), SolanaProviderError> {
        log::debug!("Fetching latest blockhash ({:?})", commitment.commitment);
        self.client
            .get_latest_blockhash_with_commitment(commitment)
            .await
            .map_err(SolanaProviderError::from_rpc_error)
    }

    /// Retrieves the minimum balance for rent exemption for the given data size.
    async fn get_minimum_balance_for_rent_exemption(
        &self,
        data_size: usize,
    ) -> Result<u64, SolanaProviderError> {
        log::debug!("Fetching minimum rent-exempt balance for {} bytes", data_size);
        self.client
            .get_minimum_balance_for_rent_exemption(data_size)
            .await
            .map_err(SolanaProviderError::from_rpc_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_valid_url() {
        let provider = SolanaProvider::new("https://api.devnet.solana.com", 10);

        assert!(provider.is_ok());
        assert_eq!(
            provider.unwrap().commitment(),
            CommitmentConfig::confirmed()
        );
    }

    #[test]
    fn test_new_with_commitment_keeps_commitment() {
        let provider = SolanaProvider::new_with_commitment(
            "http://localhost:8899",
            5,
            CommitmentConfig::finalized(),
        )
        .unwrap();

        assert_eq!(provider.commitment(), CommitmentConfig::finalized());
    }

    #[test]
    fn test_new_with_invalid_url() {
        let result = SolanaProvider::new("not a url", 10);

        assert!(matches!(
            result,
            Err(SolanaProviderError::NetworkConfiguration(_))
        ));
    }

    #[test]
    fn test_debug_masks_url_path() {
        let provider = SolanaProvider::new("https://rpc.example.com/secret-key", 10).unwrap();

        let debug = format!("{provider:?}");
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("rpc.example.com"));
    }

    #[test]
    fn test_from_rpc_error_io_is_network_error() {
        let error = ClientError::from(ClientErrorKind::Io(std::io::Error::new(
            std::io::ErrorKind::TimedOut,
            "timed out",
        )));

        let classified = SolanaProviderError::from_rpc_error(error);
        assert!(matches!(classified, SolanaProviderError::NetworkError(_)));
        assert!(classified.is_transient());
    }

    #[test]
    fn test_from_rpc_error_custom_blockhash_not_found() {
        let error = ClientError::from(ClientErrorKind::Custom(
            "Blockhash not found".to_string(),
        ));

        assert!(matches!(
            SolanaProviderError::from_rpc_error(error),
            SolanaProviderError::BlockhashNotFound(_)
        ));
    }

    #[test]
    fn test_from_rpc_error_custom_unavailable_data() {
        let error = ClientError::from(ClientErrorKind::Custom(
            "RPC response error -32010: key excluded".to_string(),
        ));

        let classified = SolanaProviderError::from_rpc_error(error);
        assert!(matches!(
            classified,
            SolanaProviderError::NetworkConfiguration(_)
        ));
        assert!(!classified.is_transient());
    }

    #[test]
    fn test_from_rpc_error_unknown_custom_is_rpc_error() {
        let error = ClientError::from(ClientErrorKind::Custom("node is behind".to_string()));

        assert!(matches!(
            SolanaProviderError::from_rpc_error(error),
            SolanaProviderError::RpcError(_)
        ));
    }

    #[test]
    fn test_request_error_transience_by_status() {
        let transient = SolanaProviderError::RequestError {
            error: "rate limited".to_string(),
            status_code: 429,
        };
        let permanent = SolanaProviderError::RequestError {
            error: "forbidden".to_string(),
            status_code: 403,
        };

        assert!(transient.is_transient());
        assert!(!permanent.is_transient());
    }

    #[test]
    fn test_matches_error_pattern_ignores_case_and_spaces() {
        assert!(matches_error_pattern(
            "Transaction simulation failed: BlockhashNotFound",
            "blockhash not found"
        ));
        assert!(!matches_error_pattern("insufficient funds", "blockhash"));
    }
}
