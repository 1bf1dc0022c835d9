use thiserror::Error;

use crate::services::SolanaProviderError;

/// Caller-supplied field that failed address decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamField {
    /// `to` query parameter.
    To,
    /// `account` field of the POST body.
    Account,
}

impl ParamField {
    fn invalid_message(&self) -> &'static str {
        match self {
            ParamField::To => "Invalid input query parameter: to",
            ParamField::Account => "Invalid \"account\" provided",
        }
    }
}

/// Everything that can go wrong while turning an action request into an
/// unsigned transaction.
#[derive(Error, Debug, PartialEq)]
pub enum ActionError {
    #[error("{}", .0.invalid_message())]
    InvalidAddress(ParamField),

    #[error("Invalid input query parameter: amount")]
    InvalidAmount,

    #[error("Account may not be rent exempt: {0}")]
    BelowRentExemptionThreshold(String),

    #[error("Network state is missing {0}")]
    IncompleteNetworkState(&'static str),

    #[error("Failed to serialize transaction: {0}")]
    Serialization(String),

    #[error("Failed to fetch network state: {0}")]
    NetworkFetch(#[from] SolanaProviderError),

    #[error("Invalid request body: {0}")]
    MalformedRequestBody(String),
}

impl ActionError {
    /// Message safe to show to the caller.
    ///
    /// Provider failures may carry endpoint details, so they are reported
    /// generically; everything else is already caller-facing text.
    pub fn user_message(&self) -> String {
        match self {
            ActionError::NetworkFetch(_) => "Unable to reach the Solana network".to_string(),
            other => other.to_string(),
        }
    }

    /// Whether the request itself was at fault, as opposed to the server or
    /// the network.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ActionError::InvalidAddress(_)
                | ActionError::InvalidAmount
                | ActionError::BelowRentExemptionThreshold(_)
                | ActionError::MalformedRequestBody(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_address_messages_are_field_specific() {
        assert_eq!(
            ActionError::InvalidAddress(ParamField::To).to_string(),
            "Invalid input query parameter: to"
        );
        assert_eq!(
            ActionError::InvalidAddress(ParamField::Account).to_string(),
            "Invalid \"account\" provided"
        );
    }

    #[test]
    fn test_rent_exemption_message_names_recipient() {
        let error = ActionError::BelowRentExemptionThreshold("Recipient111".to_string());
        assert_eq!(
            error.to_string(),
            "Account may not be rent exempt: Recipient111"
        );
    }

    #[test]
    fn test_network_fetch_user_message_hides_details() {
        let error = ActionError::from(SolanaProviderError::NetworkError(
            "https://rpc.example.com/secret timed out".to_string(),
        ));

        assert!(error.to_string().contains("secret"));
        assert_eq!(error.user_message(), "Unable to reach the Solana network");
        assert!(!error.is_client_error());
    }

    #[test]
    fn test_client_errors() {
        assert!(ActionError::InvalidAmount.is_client_error());
        assert!(ActionError::MalformedRequestBody("x".to_string()).is_client_error());
        assert!(!ActionError::Serialization("x".to_string()).is_client_error());
    }
}
