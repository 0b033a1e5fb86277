use async_trait::async_trait;
use axum::body::Bytes;

use crate::errors::RelayError;
use crate::models::chat::ChatCompletionRequest;

#[async_trait]
pub trait Provider: Send + Sync {
    fn name(&self) -> String;

    /// Forwards the payload upstream and returns the success body
    /// untouched. Non-success statuses and transport failures come back
    /// as the matching `RelayError` variant.
    async fn chat_completions(&self, payload: ChatCompletionRequest) -> Result<Bytes, RelayError>;
}
