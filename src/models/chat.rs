use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The forwarded slice of an inbound chat-completion request.
///
/// Only `model` and `messages` travel upstream. Neither field is
/// validated beyond JSON parsing: a missing or malformed value is
/// forwarded as-is and left for the upstream API to reject. Any other
/// inbound field is dropped.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ChatCompletionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<Value>,
}
