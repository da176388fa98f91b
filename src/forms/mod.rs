//! Form definitions backing the booking routes.
//!
//! Each form deserializes raw browser input and converts into a typed payload
//! through `TryFrom`, so validation happens once at the edge.

use thiserror::Error;
use validator::ValidationErrors;

pub mod auth;
pub mod flights;
pub mod profile;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
///
/// Display strings are shown to the visitor verbatim.
pub enum FormError {
    #[error("Please check the highlighted fields.")]
    Validation(#[from] ValidationErrors),

    #[error("Please fill in all fields.")]
    MissingCredentials,

    #[error("All fields are required.")]
    MissingFields,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Password must be at least 6 characters long.")]
    PasswordTooShort,

    #[error("Passwords do not match.")]
    PasswordMismatch,

    #[error("No changes detected to update.")]
    NoChanges,

    #[error("Please fill in all required fields")]
    MissingSearchCriteria,

    #[error("Departure and destination cannot be the same")]
    SameEndpoints,

    #[error("Please enter a valid date and time.")]
    InvalidDateTime,

    #[error("Price must be a non-negative number.")]
    InvalidPrice,

    #[error("At least one passenger is required.")]
    InvalidPassengers,

    #[error("Unknown seat class.")]
    InvalidSeatClass,
}

/// Minimum password length accepted by the registration and profile forms.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Trims the value and maps blank input to `None`.
pub(crate) fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
