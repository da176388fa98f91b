use serde::{Deserialize, Serialize};

use crate::domain::user::Role;

/// The signed-in account for the lifetime of a browser session.
///
/// Built once from the login response and stored in the session cookie; every
/// backend call made on behalf of the visitor reads the bearer token from here.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub email: String,
    pub role: Role,
    pub token: String,
}

impl AuthenticatedUser {
    pub fn new(email: impl Into<String>, role: Role, token: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_lowercase(),
            role,
            token: token.into(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }
}
