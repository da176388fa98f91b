//! Request-level workflows between routes and the booking backend.
//!
//! Services are generic over the backend traits they call, so each one can be
//! exercised against [`crate::backend::mock::MockBackend`] without a network.

pub mod auth;
pub mod bookings;
pub mod errors;
pub mod flights;
pub mod profile;
pub mod users;

pub use errors::{ServiceError, ServiceResult};

use crate::domain::auth::AuthenticatedUser;
use crate::domain::user::Role;

/// Fails with [`ServiceError::Unauthorized`] unless the user holds `role`.
pub fn ensure_role(user: &AuthenticatedUser, role: Role) -> ServiceResult<()> {
    if user.has_role(role) {
        Ok(())
    } else {
        Err(ServiceError::Unauthorized)
    }
}

/// Lower-cased, trimmed search term; blank input means no filter.
pub(crate) fn normalize_search(raw: Option<&str>) -> Option<String> {
    raw.map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
}
