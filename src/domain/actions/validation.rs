//! Parsing of caller-supplied action parameters.
//!
//! All functions here are pure: they only turn raw strings into typed values
//! or a typed [`ActionError`], and never touch the network.

use std::str::FromStr;

use serde::Deserialize;
use solana_sdk::pubkey::Pubkey;

use crate::{
    config::ActionsConfig,
    models::{ActionError, ActionPostRequest, ParamField},
};

/// Raw query parameters of the tip action.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct TipQuery {
    pub to: Option<String>,
    pub amount: Option<String>,
}

/// Tip parameters resolved from the query string and configured defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TipParams {
    pub recipient: Pubkey,
    /// Number of units to tip; always finite and strictly positive.
    pub amount: f64,
}

/// A validated tip: who pays, who receives and how many units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferIntent {
    pub recipient: Pubkey,
    pub amount: f64,
    pub payer: Pubkey,
}

impl TransferIntent {
    pub fn new(params: TipParams, payer: Pubkey) -> Self {
        Self {
            recipient: params.recipient,
            amount: params.amount,
            payer,
        }
    }
}

/// A validated memo request. The payload is fixed, only the payer varies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemoIntent {
    pub payer: Pubkey,
}

/// Decodes a base58 public key, attributing failures to `field`.
pub fn parse_address(raw: &str, field: ParamField) -> Result<Pubkey, ActionError> {
    Pubkey::from_str(raw.trim()).map_err(|_| ActionError::InvalidAddress(field))
}

/// Parses a unit amount. Anything that is not a finite number greater than
/// zero is rejected, including the empty string.
pub fn parse_amount(raw: &str) -> Result<f64, ActionError> {
    let amount = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ActionError::InvalidAmount)?;

    if !amount.is_finite() || amount <= 0.0 {
        return Err(ActionError::InvalidAmount);
    }
    Ok(amount)
}

/// Resolves only the recipient; discovery does not care about the amount.
///
/// An empty `to` counts as absent and falls back to the default recipient.
pub fn resolve_recipient(query: &TipQuery, config: &ActionsConfig) -> Result<Pubkey, ActionError> {
    match query.to.as_deref().filter(|to| !to.trim().is_empty()) {
        Some(to) => parse_address(to, ParamField::To),
        None => Ok(config.default_recipient),
    }
}

/// Validates the tip query, falling back to configured defaults for absent
/// parameters.
pub fn validate_tip_query(
    query: &TipQuery,
    config: &ActionsConfig,
) -> Result<TipParams, ActionError> {
    let recipient = resolve_recipient(query, config)?;
    let amount = match query.amount.as_deref() {
        Some(amount) => parse_amount(amount)?,
        None => config.default_amount,
    };

    Ok(TipParams { recipient, amount })
}

/// Extracts the payer from a POST body of the form `{ "account": "<base58>" }`.
pub fn parse_post_request(body: &[u8]) -> Result<Pubkey, ActionError> {
    let request: ActionPostRequest = serde_json::from_slice(body)
        .map_err(|e| ActionError::MalformedRequestBody(e.to_string()))?;

    parse_address(&request.account, ParamField::Account)
}
