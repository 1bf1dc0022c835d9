use solana_sdk::{compute_budget::ComputeBudgetInstruction, instruction::Instruction};

use super::{ComposeTransaction, ComposedTransaction};
use crate::{
    constants::MEMO_PROGRAM_ID,
    domain::actions::{MemoIntent, NetworkState, UnsignedTransaction},
    models::ActionError,
};

/// Builds a transaction that writes a fixed memo on-chain.
///
/// Wallets reject transactions made of a memo alone, so a compute unit price
/// instruction always comes first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoComposer {
    payload: String,
    priority_fee_micro_lamports: u64,
}

impl MemoComposer {
    pub fn new(payload: impl Into<String>, priority_fee_micro_lamports: u64) -> Self {
        Self {
            payload: payload.into(),
            priority_fee_micro_lamports,
        }
    }
}

/// Memo instruction with no signer accounts.
pub fn memo(payload: &str) -> Instruction {
    Instruction::new_with_bytes(MEMO_PROGRAM_ID, payload.as_bytes(), vec![])
}

impl ComposeTransaction for MemoComposer {
    type Intent = MemoIntent;

    fn rent_exempt_data_size(&self) -> Option<usize> {
        None
    }

    fn compose(
        &self,
        intent: &MemoIntent,
        state: &NetworkState,
    ) -> Result<ComposedTransaction, ActionError> {
        let transaction = UnsignedTransaction::new()
            .add_instruction(ComputeBudgetInstruction::set_compute_unit_price(
                self.priority_fee_micro_lamports,
            ))
            .add_instruction(memo(&self.payload))
            .with_fee_payer(intent.payer)
            .with_recent_blockhash(state.recent_blockhash, state.last_valid_block_height);

        Ok(ComposedTransaction {
            transaction,
            message: format!("Post memo: {}", self.payload),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::{compute_budget, hash::Hash, pubkey::Pubkey};

    #[test]
    fn test_compose_memo_orders_budget_before_memo() {
        let composer = MemoComposer::new("Hello, Solana! 🚀", 1_000);
        let intent = MemoIntent {
            payer: Pubkey::new_unique(),
        };
        let state = NetworkState {
            minimum_rent_exempt_balance: None,
            recent_blockhash: Hash::new_unique(),
            last_valid_block_height: 9,
        };

        let composed = composer.compose(&intent, &state).unwrap();
        let instructions = composed.transaction.instructions();

        assert_eq!(instructions.len(), 2);
        assert_eq!(instructions[0].program_id, compute_budget::id());
        assert_eq!(
            instructions[0],
            ComputeBudgetInstruction::set_compute_unit_price(1_000)
        );
        assert!(instructions[0].accounts.is_empty());
        assert_eq!(instructions[0].data, vec![3, 0xe8, 0x03, 0, 0, 0, 0, 0, 0]);
        assert_eq!(instructions[1].program_id, MEMO_PROGRAM_ID);
        assert_eq!(instructions[1].data, "Hello, Solana! 🚀".as_bytes());
        assert!(instructions[1].accounts.is_empty());
        assert_eq!(composed.transaction.fee_payer(), Some(&intent.payer));
        assert_eq!(
            composed.transaction.recent_blockhash(),
            Some(&state.recent_blockhash)
        );
        assert_eq!(composed.message, "Post memo: Hello, Solana! 🚀");
    }

    #[test]
    fn test_memo_does_not_need_rent_exemption() {
        assert_eq!(MemoComposer::new("x", 1).rent_exempt_data_size(), None);
    }
}
