use thiserror::Error;

/// Errors raised while talking to the booking backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Transport-level failure: connection refused, timeout, TLS.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend rejected the bearer token or none was sent.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The backend refused the operation for this role.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-success status, with the backend's message when it sent one.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A success response lacked the record the operation returns.
    #[error("Response is missing `{0}`")]
    MissingField(&'static str),
}

impl BackendError {
    /// Maps a failure status and message to the matching variant.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 => BackendError::Unauthorized(message),
            403 => BackendError::Forbidden(message),
            404 => BackendError::NotFound(message),
            _ => BackendError::Api { status, message },
        }
    }

    /// Message suitable for showing to the visitor.
    pub fn user_message(&self) -> String {
        match self {
            BackendError::Unauthorized(message)
            | BackendError::Forbidden(message)
            | BackendError::NotFound(message)
            | BackendError::Api { message, .. }
                if !message.is_empty() =>
            {
                message.clone()
            }
            BackendError::Http(_) => "The booking service is unavailable.".to_string(),
            _ => "Unexpected response from the booking service.".to_string(),
        }
    }
}

pub type BackendResult<T> = Result<T, BackendError>;
