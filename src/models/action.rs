//! Wire types of the Solana Actions protocol.
//!
//! Field names follow the protocol's JSON (camelCase where it differs).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Action,
}

/// Metadata returned by `GET`/`OPTIONS` on an action URL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionGetResponse {
    #[serde(rename = "type")]
    pub action_type: ActionType,
    pub title: String,
    pub icon: String,
    pub description: String,
    /// Button text. Ignored by clients when `links.actions` is present.
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<ActionLinks>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionLinks {
    pub actions: Vec<LinkedAction>,
}

/// A button offered by an action; `href` may contain `{name}` placeholders
/// that the client fills from `parameters`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinkedAction {
    pub label: String,
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<ActionParameter>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionParameter {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

/// Body of a `POST` to an action URL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionPostRequest {
    /// Base58 address of the wallet that will sign and pay.
    pub account: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PostResponseType {
    Transaction,
}

/// Successful `POST` response: an unsigned, base64-encoded transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionPostResponse {
    #[serde(rename = "type")]
    pub response_type: PostResponseType,
    pub transaction: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Error body understood by Actions clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionErrorBody {
    pub message: String,
}

/// `actions.json`, mapping website paths onto action API paths.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionsJson {
    pub rules: Vec<ActionRuleObject>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActionRuleObject {
    pub path_pattern: String,
    pub api_path: String,
}
