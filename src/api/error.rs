//! Error taxonomy for the listings backend client

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The call never completed (connection refused, timeout, protocol)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered but rejected the request; one message per
    /// reported field, in the order the payload enumerates them
    #[error("request rejected by the server")]
    Rejected { messages: Vec<String> },

    /// The backend answered with an unexpected status and no usable body
    #[error("unexpected status {0}")]
    Status(u16),

    /// An attachment could not be read before upload
    #[error("failed to read attachment {path}: {source}")]
    Attachment {
        path: String,
        source: std::io::Error,
    },
}

impl ApiError {
    /// Human-readable messages for the form boundary. Anything that is
    /// not a field-level rejection collapses into `generic`.
    pub fn messages(&self, generic: &str) -> Vec<String> {
        match self {
            ApiError::Rejected { messages } if !messages.is_empty() => messages.clone(),
            _ => vec![generic.to_string()],
        }
    }

    /// Classify a non-success response. A keyed JSON object yields one
    /// message per field in payload order, a bare JSON string yields
    /// that single message, anything else falls back to the status.
    pub fn from_error_body(status: u16, body: &str) -> Self {
        match serde_json::from_str::<serde_json::Value>(body) {
            Ok(serde_json::Value::Object(map)) if !map.is_empty() => ApiError::Rejected {
                messages: map
                    .values()
                    .map(|value| match value {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect(),
            },
            Ok(serde_json::Value::String(message)) => ApiError::Rejected {
                messages: vec![message],
            },
            _ => ApiError::Status(status),
        }
    }
}
