use crate::{errors::RelayError, models::chat::ChatCompletionRequest, state::AppState};
use axum::{
    body::Bytes,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::debug;

/// Relays one chat-completion request: parse the two forwarded keys,
/// call the upstream, and answer with its body verbatim. Error mapping
/// lives entirely in `RelayError`.
pub async fn completions(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, RelayError> {
    debug!("Received request with body: {}", String::from_utf8_lossy(&body));

    let payload: ChatCompletionRequest =
        serde_json::from_slice(&body).map_err(RelayError::InvalidJson)?;
    debug!(
        "Parsed body: model={:?}, messages={:?}",
        payload.model, payload.messages
    );

    let upstream_body = state.provider.chat_completions(payload).await?;

    // Upstream success always answers 200, whatever the exact 2xx was.
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        upstream_body,
    )
        .into_response())
}
