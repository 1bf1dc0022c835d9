use log::debug;
use solana_system_interface::instruction as system_instruction;

use super::{ComposeTransaction, ComposedTransaction};
use crate::{
    constants::SYSTEM_ACCOUNT_DATA_SIZE,
    domain::actions::{NetworkState, TransferIntent, UnsignedTransaction},
    models::ActionError,
    utils::{lamports_to_sol_string, units_to_lamports},
};

/// Builds a single SOL transfer from the payer to the recipient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferComposer {
    unit_price_lamports: u64,
}

impl TransferComposer {
    pub fn new(unit_price_lamports: u64) -> Self {
        Self {
            unit_price_lamports,
        }
    }

    /// Lamports moved for `units` units, rounded half up. Amounts that round
    /// to zero lamports are rejected.
    pub fn total_lamports(&self, units: f64) -> Result<u64, ActionError> {
        units_to_lamports(units, self.unit_price_lamports)
            .filter(|lamports| *lamports > 0)
            .ok_or(ActionError::InvalidAmount)
    }
}

impl ComposeTransaction for TransferComposer {
    type Intent = TransferIntent;

    fn rent_exempt_data_size(&self) -> Option<usize> {
        Some(SYSTEM_ACCOUNT_DATA_SIZE)
    }

    fn compose(
        &self,
        intent: &TransferIntent,
        state: &NetworkState,
    ) -> Result<ComposedTransaction, ActionError> {
        let lamports = self.total_lamports(intent.amount)?;
        let minimum_balance = state
            .minimum_rent_exempt_balance
            .ok_or(ActionError::IncompleteNetworkState("minimum rent-exempt balance"))?;

        // The recipient may not exist yet and must end up rent exempt.
        if lamports < minimum_balance {
            debug!(
                "Transfer of {} lamports is below rent-exempt minimum {}",
                lamports, minimum_balance
            );
            return Err(ActionError::BelowRentExemptionThreshold(
                intent.recipient.to_string(),
            ));
        }

        let instruction = system_instruction::transfer(&intent.payer, &intent.recipient, lamports);
        let transaction = UnsignedTransaction::new()
            .with_fee_payer(intent.payer)
            .with_recent_blockhash(state.recent_blockhash, state.last_valid_block_height)
            .add_instruction(instruction);

        Ok(ComposedTransaction {
            transaction,
            message: format!(
                "Send {} SOL to {}",
                lamports_to_sol_string(lamports),
                intent.recipient
            ),
        })
    }
}
