use solana_sdk::{
    hash::Hash, instruction::Instruction, message::Message, pubkey::Pubkey,
    transaction::Transaction,
};

use crate::models::ActionError;

/// A transaction under construction.
///
/// Instructions keep the order in which they were added. The transaction can
/// only be turned into a wire transaction once it has a fee payer, a recent
/// blockhash and at least one instruction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnsignedTransaction {
    fee_payer: Option<Pubkey>,
    recent_blockhash: Option<Hash>,
    last_valid_block_height: Option<u64>,
    instructions: Vec<Instruction>,
}

impl UnsignedTransaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fee_payer(mut self, fee_payer: Pubkey) -> Self {
        self.fee_payer = Some(fee_payer);
        self
    }

    pub fn with_recent_blockhash(mut self, blockhash: Hash, last_valid_block_height: u64) -> Self {
        self.recent_blockhash = Some(blockhash);
        self.last_valid_block_height = Some(last_valid_block_height);
        self
    }

    pub fn add_instruction(mut self, instruction: Instruction) -> Self {
        self.instructions.push(instruction);
        self
    }

    pub fn fee_payer(&self) -> Option<&Pubkey> {
        self.fee_payer.as_ref()
    }

    pub fn recent_blockhash(&self) -> Option<&Hash> {
        self.recent_blockhash.as_ref()
    }

    pub fn last_valid_block_height(&self) -> Option<u64> {
        self.last_valid_block_height
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Compiles into a legacy transaction with empty signature slots for
    /// every required signer.
    pub fn to_transaction(&self) -> Result<Transaction, ActionError> {
        let fee_payer = self
            .fee_payer
            .ok_or_else(|| ActionError::Serialization("transaction has no fee payer".into()))?;
        let blockhash = self.recent_blockhash.ok_or_else(|| {
            ActionError::Serialization("transaction has no recent blockhash".into())
        })?;
        if self.instructions.is_empty() {
            return Err(ActionError::Serialization(
                "transaction has no instructions".into(),
            ));
        }

        let message = Message::new_with_blockhash(&self.instructions, Some(&fee_payer), &blockhash);
        Ok(Transaction::new_unsigned(message))
    }
}
