use serde::Deserialize;

/// Main client error type
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Not authenticated: {0}")]
    Unauthenticated(String),

    #[error("Request failed with status {status}: {message}")]
    Request { status: u16, message: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Session storage error: {0}")]
    Storage(String),
}

/// Error body the backend attaches to non-2xx responses. Endpoints disagree
/// on the field name, so all of them are optional.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub message: Option<String>,
    pub error: Option<String>,
    pub detail: Option<String>,
}

impl ErrorResponse {
    pub fn into_message(self) -> Option<String> {
        self.message.or(self.error).or(self.detail)
    }
}

/// Custom result type for the client
pub type ClientResult<T> = Result<T, ClientError>;
