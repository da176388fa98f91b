use thiserror::Error;

use crate::backend::BackendError;

/// Errors surfaced by the service layer to the routes.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The visitor lacks the role the operation requires.
    #[error("Unauthorized")]
    Unauthorized,

    /// The backend no longer accepts the session's token.
    #[error("Session expired")]
    SessionExpired,

    #[error("Not found")]
    NotFound,

    /// Invalid input; the message is shown to the visitor.
    #[error("{0}")]
    Form(String),

    #[error("Type constraint: {0}")]
    TypeConstraint(String),

    #[error("Backend error: {0}")]
    Backend(BackendError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<BackendError> for ServiceError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Unauthorized(_) => ServiceError::SessionExpired,
            BackendError::Forbidden(_) => ServiceError::Unauthorized,
            BackendError::NotFound(_) => ServiceError::NotFound,
            other => ServiceError::Backend(other),
        }
    }
}

impl ServiceError {
    /// Message suitable for a flash alert.
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::Unauthorized => "You do not have access to this page.".to_string(),
            ServiceError::SessionExpired => {
                "Your session has expired. Please log in again.".to_string()
            }
            ServiceError::NotFound => "The requested record was not found.".to_string(),
            ServiceError::Form(message) => message.clone(),
            ServiceError::TypeConstraint(_) => "Invalid identifier.".to_string(),
            ServiceError::Backend(err) => err.user_message(),
        }
    }
}
