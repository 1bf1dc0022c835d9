//! Discovery metadata for the offered actions.
//!
//! Everything here is a pure function of the request origin and the
//! resolved parameters, so repeated requests get identical responses.

use solana_sdk::pubkey::Pubkey;

use crate::{
    constants::{MEMO_ACTION_PATH, TIP_ACTION_PATH, TIP_PRESET_AMOUNTS},
    models::{
        ActionGetResponse, ActionLinks, ActionParameter, ActionRuleObject, ActionType,
        ActionsJson, LinkedAction,
    },
    utils::join_origin,
};

/// Metadata of the tip action: three fixed amounts plus a custom amount.
pub fn tip_metadata(origin: &str, recipient: &Pubkey) -> ActionGetResponse {
    let base_href = format!(
        "{}?to={}",
        join_origin(origin, TIP_ACTION_PATH),
        recipient
    );

    let mut actions: Vec<LinkedAction> = TIP_PRESET_AMOUNTS
        .iter()
        .map(|amount| LinkedAction {
            label: format!("Buy me {amount} coffee"),
            href: format!("{base_href}&amount={amount}"),
            parameters: None,
        })
        .collect();

    // `{amount}` is filled in by the client from the parameter below.
    actions.push(LinkedAction {
        label: "Custom".to_string(),
        href: format!("{base_href}&amount={{amount}}"),
        parameters: Some(vec![ActionParameter {
            name: "amount".to_string(),
            label: Some("Enter the number".to_string()),
            required: Some(true),
        }]),
    });

    ActionGetResponse {
        action_type: ActionType::Action,
        title: "Buy me x coffee with Native SOL".to_string(),
        icon: join_origin(origin, "/solana-coffee.jpeg"),
        description: "0.05 SOL per cup".to_string(),
        label: "Tip with SOL".to_string(),
        links: Some(ActionLinks { actions }),
    }
}

/// Metadata of the memo action: a single button posting to the action URL.
pub fn memo_metadata(origin: &str) -> ActionGetResponse {
    ActionGetResponse {
        action_type: ActionType::Action,
        title: "Memo demo".to_string(),
        icon: join_origin(origin, "/solana_devs.jpg"),
        description: "Solana action demo".to_string(),
        label: "Send Memo".to_string(),
        links: None,
    }
}

/// `actions.json` rules letting blink clients resolve website paths.
pub fn actions_rules() -> ActionsJson {
    let rule = |path_pattern: &str, api_path: &str| ActionRuleObject {
        path_pattern: path_pattern.to_string(),
        api_path: api_path.to_string(),
    };

    ActionsJson {
        rules: vec![
            rule("/tip", TIP_ACTION_PATH),
            rule("/memo", MEMO_ACTION_PATH),
            rule("/api/actions/**", "/api/actions/**"),
        ],
    }
}
