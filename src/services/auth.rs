//! Sign-in and sign-up workflows.

use crate::backend::AuthApi;
use crate::domain::auth::AuthenticatedUser;
use crate::domain::user::{Credentials, NewRegistration};
use crate::forms::auth::{LoginForm, RegisterForm};
use crate::services::{ServiceError, ServiceResult};

/// Validates the credentials and exchanges them for a session user.
pub async fn login<A>(api: &A, form: LoginForm) -> ServiceResult<AuthenticatedUser>
where
    A: AuthApi + ?Sized,
{
    let credentials = Credentials::try_from(form)?;

    let grant = api.login(&credentials).await.map_err(|err| {
        log::warn!("Login rejected for {}: {err}", credentials.email);
        ServiceError::Form(err.user_message())
    })?;

    log::info!("User {} signed in as {}", credentials.email, grant.role);

    Ok(AuthenticatedUser::new(
        credentials.email,
        grant.role,
        grant.token,
    ))
}

/// Validates the registration form and creates the account.
///
/// Returns the backend's confirmation message when it sent one.
pub async fn register<A>(api: &A, form: RegisterForm) -> ServiceResult<Option<String>>
where
    A: AuthApi + ?Sized,
{
    let registration = NewRegistration::try_from(form)?;

    api.register(&registration).await.map_err(|err| {
        log::error!("Failed to register {}: {err}", registration.email);
        ServiceError::Form(err.user_message())
    })
}
