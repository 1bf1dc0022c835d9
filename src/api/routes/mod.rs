//! # API Routes Module
//!
//! Configures HTTP routes for the actions server.
//!
//! ## Routes
//!
//! * `/health` - Health check endpoint
//! * `/api/actions/tip` - Tip action
//! * `/api/actions/memo` - Memo action
//! * `/actions.json` - Action rules

pub mod actions;
pub mod health;

use actix_web::web;

use crate::services::SolanaProviderTrait;

pub fn configure_routes<P>(cfg: &mut web::ServiceConfig)
where
    P: SolanaProviderTrait + 'static,
{
    cfg.configure(health::init).configure(actions::init::<P>);
}
