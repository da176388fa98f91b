//! Session lifecycle of [`AuthenticatedUser`].
//!
//! The user is stored as the JSON identity id of `actix-identity`, which in
//! turn lives in the encrypted session cookie.

use std::future::{Ready, ready};

use actix_identity::{Identity, IdentityExt};
use actix_web::dev::Payload;
use actix_web::error::{ErrorInternalServerError, ErrorUnauthorized};
use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::domain::auth::AuthenticatedUser;

fn user_from_request(req: &HttpRequest) -> Result<AuthenticatedUser, actix_web::Error> {
    let identity = req.get_identity().map_err(ErrorUnauthorized)?;
    let id = identity.id().map_err(ErrorUnauthorized)?;
    serde_json::from_str(&id).map_err(ErrorUnauthorized)
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(user_from_request(req))
    }
}

/// Stores `user` in the session. Also used to refresh it after the email
/// changed.
pub fn establish(req: &HttpRequest, user: &AuthenticatedUser) -> Result<(), actix_web::Error> {
    let id = serde_json::to_string(user).map_err(ErrorInternalServerError)?;
    Identity::login(&req.extensions(), id).map_err(ErrorInternalServerError)?;
    Ok(())
}

/// Removes the session user if there is one.
pub fn teardown(req: &HttpRequest) {
    if let Ok(identity) = req.get_identity() {
        identity.logout();
    }
}
