use crate::{
    models::{ActionError, ActionPostResponse, PostResponseType},
    utils::base64_encode,
};

use super::ComposedTransaction;

/// Serializes a composed transaction into the POST response envelope.
///
/// The transaction is encoded in the legacy wire format (bincode) with
/// zeroed signatures, then base64.
pub fn build_post_response(
    composed: &ComposedTransaction,
) -> Result<ActionPostResponse, ActionError> {
    let transaction = composed.transaction.to_transaction()?;
    let bytes =
        bincode::serialize(&transaction).map_err(|e| ActionError::Serialization(e.to_string()))?;

    Ok(ActionPostResponse {
        response_type: PostResponseType::Transaction,
        transaction: base64_encode(&bytes),
        message: Some(composed.message.clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::actions::UnsignedTransaction, utils::base64_decode};
    use solana_sdk::{hash::Hash, pubkey::Pubkey, transaction::Transaction};
    use solana_system_interface::instruction as system_instruction;

    #[test]
    fn test_build_post_response_round_trips_transaction() {
        let payer = Pubkey::new_unique();
        let recipient = Pubkey::new_unique();
        let blockhash = Hash::new_unique();
        let composed = ComposedTransaction {
            transaction: UnsignedTransaction::new()
                .with_fee_payer(payer)
                .with_recent_blockhash(blockhash, 10)
                .add_instruction(system_instruction::transfer(&payer, &recipient, 5)),
            message: "Send 0.000000005 SOL".to_string(),
        };

        let response = build_post_response(&composed).unwrap();

        assert_eq!(response.response_type, PostResponseType::Transaction);
        assert_eq!(response.message.as_deref(), Some("Send 0.000000005 SOL"));

        let bytes = base64_decode(&response.transaction).unwrap();
        let decoded: Transaction = bincode::deserialize(&bytes).unwrap();
        assert_eq!(decoded, composed.transaction.to_transaction().unwrap());
        assert_eq!(decoded.message.account_keys[0], payer);
        assert_eq!(decoded.message.recent_blockhash, blockhash);
    }

    #[test]
    fn test_build_post_response_does_not_mutate_input() {
        let payer = Pubkey::new_unique();
        let composed = ComposedTransaction {
            transaction: UnsignedTransaction::new()
                .with_fee_payer(payer)
                .with_recent_blockhash(Hash::new_unique(), 10)
                .add_instruction(system_instruction::transfer(&payer, &payer, 5)),
            message: "m".to_string(),
        };
        let before = composed.clone();

        build_post_response(&composed).unwrap();

        assert_eq!(composed, before);
    }

    #[test]
    fn test_build_post_response_rejects_incomplete_transaction() {
        let composed = ComposedTransaction {
            transaction: UnsignedTransaction::new().with_fee_payer(Pubkey::new_unique()),
            message: "m".to_string(),
        };

        assert!(matches!(
            build_post_response(&composed),
            Err(ActionError::Serialization(_))
        ));
    }
}
