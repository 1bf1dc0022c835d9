//! This module defines the HTTP routes for the Solana actions.
//!
//! Each action is a single resource answering `GET` and `OPTIONS` with its
//! discovery metadata and `POST` with an unsigned transaction. The handlers
//! are generic over the provider so the full HTTP flow can run against a mock.
use actix_web::{http::Method, web, HttpRequest, Responder};

use crate::{
    api::controllers::actions,
    constants::{MEMO_ACTION_PATH, TIP_ACTION_PATH},
    domain::actions::TipQuery,
    models::ThinDataAppState,
    services::SolanaProviderTrait,
};

/// Discovery metadata of the tip action.
async fn tip_metadata<P>(
    req: HttpRequest,
    query: web::Query<TipQuery>,
    data: ThinDataAppState<P>,
) -> impl Responder
where
    P: SolanaProviderTrait + 'static,
{
    let origin = actions::request_origin(&req);
    actions::get_tip_metadata(&origin, query.into_inner(), data).await
}

/// Unsigned tip transaction for the account in the body.
async fn tip_transaction<P>(
    query: web::Query<TipQuery>,
    body: web::Bytes,
    data: ThinDataAppState<P>,
) -> impl Responder
where
    P: SolanaProviderTrait + 'static,
{
    actions::create_tip_transaction(query.into_inner(), &body, data).await
}

/// Discovery metadata of the memo action.
async fn memo_metadata(req: HttpRequest) -> impl Responder {
    let origin = actions::request_origin(&req);
    actions::get_memo_metadata(&origin).await
}

/// Unsigned memo transaction for the account in the body.
async fn memo_transaction<P>(body: web::Bytes, data: ThinDataAppState<P>) -> impl Responder
where
    P: SolanaProviderTrait + 'static,
{
    actions::create_memo_transaction(&body, data).await
}

/// `actions.json` rules mapping site paths to action endpoints.
async fn actions_rules() -> impl Responder {
    actions::get_actions_rules().await
}

/// Initializes the routes for the actions module.
pub fn init<P>(cfg: &mut web::ServiceConfig)
where
    P: SolanaProviderTrait + 'static,
{
    cfg.service(
        web::resource(TIP_ACTION_PATH)
            .route(web::get().to(tip_metadata::<P>))
            .route(web::method(Method::OPTIONS).to(tip_metadata::<P>))
            .route(web::post().to(tip_transaction::<P>)),
    )
    .service(
        web::resource(MEMO_ACTION_PATH)
            .route(web::get().to(memo_metadata))
            .route(web::method(Method::OPTIONS).to(memo_metadata))
            .route(web::post().to(memo_transaction::<P>)),
    )
    .service(
        web::resource("/actions.json")
            .route(web::get().to(actions_rules))
            .route(web::method(Method::OPTIONS).to(actions_rules)),
    );
}
