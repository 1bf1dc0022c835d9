//! Fetches the ledger state a transaction has to be built against.

use futures::try_join;
use log::error;
use solana_sdk::{commitment_config::CommitmentConfig, hash::Hash};

use crate::{
    models::ActionError,
    services::{SolanaProviderError, SolanaProviderTrait},
};

/// Snapshot of the network taken for a single request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetworkState {
    /// Lamports a new account needs to be rent exempt. Only fetched when the
    /// composer asked for it.
    pub minimum_rent_exempt_balance: Option<u64>,
    pub recent_blockhash: Hash,
    /// Last block height at which `recent_blockhash` is accepted.
    pub last_valid_block_height: u64,
}

fn log_fetch_failure(operation: &str, error: &SolanaProviderError) {
    error!(
        "Failed to fetch {}: {} (transient: {})",
        operation,
        error,
        error.is_transient()
    );
}

/// Fetches the latest blockhash and, when `rent_exempt_data_size` is set,
/// the minimum rent-exempt balance for an account of that size.
///
/// Both reads are issued concurrently. Failures are not retried.
pub async fn fetch_network_state<P>(
    provider: &P,
    commitment: CommitmentConfig,
    rent_exempt_data_size: Option<usize>,
) -> Result<NetworkState, ActionError>
where
    P: SolanaProviderTrait + ?Sized,
{
    let blockhash = async {
        provider
            .get_latest_blockhash_with_commitment(commitment)
            .await
            .inspect_err(|e| log_fetch_failure("latest blockhash", e))
    };

    let (minimum_rent_exempt_balance, (recent_blockhash, last_valid_block_height)) =
        match rent_exempt_data_size {
            Some(data_size) => {
                let minimum_balance = async {
                    provider
                        .get_minimum_balance_for_rent_exemption(data_size)
                        .await
                        .inspect_err(|e| log_fetch_failure("minimum rent-exempt balance", e))
                };
                let (minimum, blockhash) = try_join!(minimum_balance, blockhash)?;
                (Some(minimum), blockhash)
            }
            None => (None, blockhash.await?),
        };

    Ok(NetworkState {
        minimum_rent_exempt_balance,
        recent_blockhash,
        last_valid_block_height,
    })
}
