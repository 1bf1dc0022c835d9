use std::sync::Arc;

use actix_web::web::ThinData;

use crate::{
    config::ActionsConfig,
    services::{SolanaProvider, SolanaProviderTrait},
};

/// State shared by every request. Immutable after startup.
#[derive(Debug)]
pub struct AppState<P: SolanaProviderTrait> {
    pub provider: Arc<P>,
    pub actions: Arc<ActionsConfig>,
}

impl<P: SolanaProviderTrait> AppState<P> {
    pub fn new(provider: P, actions: ActionsConfig) -> Self {
        Self {
            provider: Arc::new(provider),
            actions: Arc::new(actions),
        }
    }
}

impl<P: SolanaProviderTrait> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            actions: Arc::clone(&self.actions),
        }
    }
}

pub type DefaultAppState = AppState<SolanaProvider>;

pub type ThinDataAppState<P> = ThinData<AppState<P>>;
