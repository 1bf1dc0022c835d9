//! Action pipeline.
//!
//! A POST to an action runs: validation (done by the caller) → network state
//! fetch → composition → response building. Discovery is served separately
//! and never touches the network.

mod composer;
pub use composer::*;

mod discovery;
pub use discovery::*;

mod network_state;
pub use network_state::*;

mod response;
pub use response::*;

mod transaction;
pub use transaction::*;

mod validation;
pub use validation::*;

use log::info;
use solana_sdk::commitment_config::CommitmentConfig;

use crate::{
    models::{ActionError, ActionPostResponse},
    services::SolanaProviderTrait,
};

/// Commitment used for every state read made while building a transaction.
pub fn action_commitment() -> CommitmentConfig {
    CommitmentConfig::confirmed()
}

/// Fetches what `composer` needs from the network, composes the transaction
/// for `intent` and serializes it.
pub async fn execute_action<C, P>(
    composer: &C,
    intent: &C::Intent,
    provider: &P,
) -> Result<ActionPostResponse, ActionError>
where
    C: ComposeTransaction,
    P: SolanaProviderTrait + ?Sized,
{
    let state =
        fetch_network_state(provider, action_commitment(), composer.rent_exempt_data_size()).await?;
    let composed = composer.compose(intent, &state)?;
    let response = build_post_response(&composed)?;

    info!(
        "Built unsigned transaction with {} instruction(s), valid until block height {}",
        composed.transaction.instructions().len(),
        state.last_valid_block_height
    );
    Ok(response)
}
