use std::time::Duration;

use actix_web::{
    middleware::{self, Logger},
    web, App, HttpServer,
};
use color_eyre::Result;
use dotenvy::dotenv;
use log::info;

use solana_actions_server::{
    api::{middleware::actions_headers, routes::configure_routes},
    config::{ActionsConfig, ServerConfig},
    constants::{DEFAULT_CLIENT_DISCONNECT_TIMEOUT_SECONDS, DEFAULT_SHUTDOWN_TIMEOUT_SECONDS},
    logging::setup_logging,
    models::DefaultAppState,
    services::SolanaProvider,
    utils::mask_url,
};

fn initialize_app_state(config: &ServerConfig) -> Result<DefaultAppState> {
    let actions = ActionsConfig::from_server_config(config)?;
    let provider = SolanaProvider::new(&config.rpc_url, config.rpc_timeout_seconds)?;

    info!(
        "Using Solana RPC {} on {} with {:?} commitment (default tip recipient {})",
        mask_url(&config.rpc_url),
        config.cluster,
        provider.commitment().commitment,
        actions.default_recipient
    );

    Ok(DefaultAppState::new(provider, actions))
}

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    // Load environment variables from .env file
    dotenv().ok();
    setup_logging()?;

    let config = ServerConfig::from_env();
    config.validate()?;

    let app_state = initialize_app_state(&config)?;
    let chain_id = config.cluster.chain_id();

    info!("Starting server on {}:{}", config.host, config.port);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::NormalizePath::trim())
            .wrap(actions_headers(chain_id))
            .wrap(Logger::default())
            .app_data(web::ThinData(app_state.clone()))
            .configure(configure_routes::<SolanaProvider>)
    })
    .bind((config.host.as_str(), config.port))?
    .shutdown_timeout(DEFAULT_SHUTDOWN_TIMEOUT_SECONDS)
    .client_disconnect_timeout(Duration::from_secs(DEFAULT_CLIENT_DISCONNECT_TIMEOUT_SECONDS));

    info!("Server running at http://{}:{}", config.host, config.port);

    server.run().await?;
    Ok(())
}
