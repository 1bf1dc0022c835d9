//! Actions CORS headers.
//!
//! Applied with `DefaultHeaders` so that every response, including errors
//! and unmatched routes, carries them.

use actix_web::{http::header, middleware::DefaultHeaders};

use crate::constants::{
    ACTIONS_ALLOW_HEADERS, ACTIONS_ALLOW_METHODS, ACTIONS_ALLOW_ORIGIN, ACTIONS_EXPOSE_HEADERS,
    ACTIONS_PROTOCOL_VERSION, HEADER_ACTION_VERSION, HEADER_BLOCKCHAIN_IDS,
};

/// Builds the header middleware for the cluster identified by `chain_id`
/// (CAIP-2, e.g. `solana:EtWTRABZaYq6iMfeYKouRu166VU2xqa1`).
pub fn actions_headers(chain_id: &str) -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, ACTIONS_ALLOW_ORIGIN))
        .add((header::ACCESS_CONTROL_ALLOW_METHODS, ACTIONS_ALLOW_METHODS))
        .add((header::ACCESS_CONTROL_ALLOW_HEADERS, ACTIONS_ALLOW_HEADERS))
        .add((header::ACCESS_CONTROL_EXPOSE_HEADERS, ACTIONS_EXPOSE_HEADERS))
        .add((HEADER_ACTION_VERSION, ACTIONS_PROTOCOL_VERSION))
        .add((HEADER_BLOCKCHAIN_IDS, chain_id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SOLANA_DEVNET_CHAIN_ID;
    use actix_web::{test, web, App, HttpResponse};

    #[actix_web::test]
    async fn test_headers_are_added_to_every_response() {
        let app = test::init_service(
            App::new()
                .wrap(actions_headers(SOLANA_DEVNET_CHAIN_ID))
                .route("/ok", web::get().to(HttpResponse::Ok)),
        )
        .await;

        for uri in ["/ok", "/missing"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            let headers = resp.headers();

            assert_eq!(headers.get("access-control-allow-origin").unwrap(), "*");
            assert_eq!(
                headers.get("access-control-allow-methods").unwrap(),
                "GET,POST,PUT,OPTIONS"
            );
            assert_eq!(
                headers.get("access-control-expose-headers").unwrap(),
                "X-Action-Version, X-Blockchain-Ids"
            );
            assert_eq!(headers.get("x-action-version").unwrap(), "2.4");
            assert_eq!(
                headers.get("x-blockchain-ids").unwrap(),
                SOLANA_DEVNET_CHAIN_ID
            );
        }
    }
}
