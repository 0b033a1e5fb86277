use std::env;

use tracing::warn;

use super::models::RelayConfig;

pub fn load_config(path: &str) -> Result<RelayConfig, Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(path)?;
    let mut config: RelayConfig = serde_yaml::from_str(&contents)?;

    config.upstream.endpoint = resolve_env_reference(&config.upstream.endpoint);
    config.upstream.api_key = resolve_env_reference(&config.upstream.api_key);

    Ok(config)
}

/// Replaces a whole-value `${VAR}` reference with the variable's value.
/// An unset variable resolves to the empty string.
fn resolve_env_reference(raw: &str) -> String {
    let Some(name) = raw.strip_prefix("${").and_then(|s| s.strip_suffix('}')) else {
        return raw.to_string();
    };

    match env::var(name) {
        Ok(value) => value,
        Err(_) => {
            warn!("Environment variable '{}' not found", name);
            String::new()
        }
    }
}
