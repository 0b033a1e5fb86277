use serde::{Deserialize, Serialize};
use std::env;

pub const DEFAULT_ENDPOINT: &str = "https://api.mistral.ai/v1/chat/completions";

/// Environment variable holding the upstream credential when no
/// configuration file is present.
pub const API_KEY_ENV_VAR: &str = "MISTRAL_API_KEY";

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn no_api_key() -> String {
    "".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RelayConfig {
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct UpstreamConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "no_api_key")]
    pub api_key: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: no_api_key(),
        }
    }
}

impl RelayConfig {
    /// Configuration assembled purely from the environment, used when no
    /// configuration file exists. An unset credential stays empty and is
    /// rejected by the upstream, not here.
    pub fn from_env() -> Self {
        Self {
            upstream: UpstreamConfig {
                endpoint: default_endpoint(),
                api_key: env::var(API_KEY_ENV_VAR).unwrap_or_default(),
            },
        }
    }
}
