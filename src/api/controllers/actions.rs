//! # Actions Controller
//!
//! Handles the action endpoints:
//! - discovery metadata (`GET`/`OPTIONS`), served without network calls
//! - unsigned transaction creation (`POST`)
//! - the `actions.json` rules file
//!
//! Request parameters are validated before the body is read and before any
//! network call is made.

use actix_web::{HttpRequest, HttpResponse};
use log::{info, log, warn, Level};

use crate::{
    domain::actions::{
        actions_rules, execute_action, memo_metadata, parse_post_request, resolve_recipient,
        tip_metadata, validate_tip_query, MemoComposer, MemoIntent, TipQuery, TransferComposer,
        TransferIntent,
    },
    models::{ActionError, ThinDataAppState},
    services::SolanaProviderTrait,
};

/// Caller mistakes are warnings; serialization and network failures are errors.
fn rejection_level(error: &ActionError) -> Level {
    if error.is_client_error() {
        Level::Warn
    } else {
        Level::Error
    }
}

fn log_rejection(action: &str, error: &ActionError) {
    match rejection_level(error) {
        Level::Warn => warn!("Rejected {} request: {}", action, error),
        level => log!(level, "Failed {} request: {}", action, error),
    }
}

/// Scheme and host the request was made to, e.g. `https://actions.example.com`.
pub fn request_origin(req: &HttpRequest) -> String {
    let connection = req.connection_info();
    format!("{}://{}", connection.scheme(), connection.host())
}

/// Returns the tip action metadata. Only the `to` parameter is validated.
pub async fn get_tip_metadata<P>(
    origin: &str,
    query: TipQuery,
    state: ThinDataAppState<P>,
) -> Result<HttpResponse, ActionError>
where
    P: SolanaProviderTrait + 'static,
{
    let recipient = resolve_recipient(&query, &state.actions)
        .inspect_err(|e| log_rejection("tip metadata", e))?;

    Ok(HttpResponse::Ok().json(tip_metadata(origin, &recipient)))
}

/// Builds an unsigned SOL transfer for the tip action.
pub async fn create_tip_transaction<P>(
    query: TipQuery,
    body: &[u8],
    state: ThinDataAppState<P>,
) -> Result<HttpResponse, ActionError>
where
    P: SolanaProviderTrait + 'static,
{
    let result = async {
        let params = validate_tip_query(&query, &state.actions)?;
        let payer = parse_post_request(body)?;
        let intent = TransferIntent::new(params, payer);

        info!(
            "Creating tip transaction: {} unit(s) from {} to {}",
            intent.amount, intent.payer, intent.recipient
        );

        let composer = TransferComposer::new(state.actions.unit_price_lamports);
        execute_action(&composer, &intent, state.provider.as_ref()).await
    }
    .await
    .inspect_err(|e| log_rejection("tip", e))?;

    Ok(HttpResponse::Ok().json(result))
}

/// Returns the memo action metadata.
pub async fn get_memo_metadata(origin: &str) -> Result<HttpResponse, ActionError> {
    Ok(HttpResponse::Ok().json(memo_metadata(origin)))
}

/// Builds an unsigned memo transaction paid by the requesting account.
pub async fn create_memo_transaction<P>(
    body: &[u8],
    state: ThinDataAppState<P>,
) -> Result<HttpResponse, ActionError>
where
    P: SolanaProviderTrait + 'static,
{
    let result = async {
        let payer = parse_post_request(body)?;
        info!("Creating memo transaction for {}", payer);

        let composer = MemoComposer::new(
            state.actions.memo_payload.clone(),
            state.actions.memo_priority_fee_micro_lamports,
        );
        execute_action(&composer, &MemoIntent { payer }, state.provider.as_ref()).await
    }
    .await
    .inspect_err(|e| log_rejection("memo", e))?;

    Ok(HttpResponse::Ok().json(result))
}

/// Returns the `actions.json` rules.
pub async fn get_actions_rules() -> Result<HttpResponse, ActionError> {
    Ok(HttpResponse::Ok().json(actions_rules()))
}
