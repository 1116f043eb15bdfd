use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::ErrorEnvelope;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response body is empty or null")]
    EmptyBody,
}

pub fn encode_json_body<B: Serialize + ?Sized>(body: &B) -> Result<String, serde_json::Error> {
    serde_json::to_string(body)
}

/// Decode a 2xx body. An empty body or a literal `null` never counts as success.
pub fn decode_json_response<T: DeserializeOwned>(json: &str) -> Result<T, TransportError> {
    let trimmed = json.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Err(TransportError::EmptyBody);
    }
    Ok(serde_json::from_str(trimmed)?)
}

/// Decode a non-2xx body. `None` when it does not have the error envelope shape.
pub fn decode_error_envelope(json: &str) -> Option<ErrorEnvelope> {
    serde_json::from_str(json).ok()
}
