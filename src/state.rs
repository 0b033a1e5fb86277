use crate::config::models::RelayConfig;
use crate::providers::{MistralProvider, Provider};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub provider: Arc<dyn Provider>,
}

impl AppState {
    pub fn new(config: RelayConfig) -> Self {
        let provider = Arc::new(MistralProvider::new(&config.upstream));

        Self {
            config: Arc::new(config),
            provider,
        }
    }
}
