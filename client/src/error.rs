use reqwest::StatusCode;
use thiserror::Error;

/// The single error type of the Beacon client.
///
/// Every failure of a call (network, non-success status, body codec) ends up
/// here unmodified, so callers can decide whether it was the expected outcome.
#[derive(Error, Debug)]
pub enum TransportError {
    /// An error occurred while making a request.
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },
    /// An error occurred while serializing or deserializing data.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    /// The base url the client was built with is unusable.
    #[error("invalid base url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl TransportError {
    /// Status code of the response that caused the error, when there was one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            TransportError::Request(e) => e.status(),
            _ => None,
        }
    }

    /// Whether the server refused the request with a 4xx status.
    pub fn is_rejection(&self) -> bool {
        self.status().is_some_and(|status| status.is_client_error())
    }
}
