use super::models::RelayConfig;

/// Validates the logical consistency of a RelayConfig.
/// Returns Ok(()) if valid, or Err(Vec<String>) with a list of error messages if invalid.
///
/// The api key is not checked: an empty credential is forwarded and the
/// upstream rejects it with its own error.
pub fn validate_relay_config(config: &RelayConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.upstream.endpoint.is_empty() {
        errors.push("Upstream endpoint must not be empty.".to_string());
    } else if reqwest::Url::parse(&config.upstream.endpoint).is_err() {
        errors.push(format!(
            "Upstream endpoint '{}' is not a valid URL.",
            config.upstream.endpoint
        ));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
