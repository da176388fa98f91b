//! Login and registration forms.

use serde::Deserialize;
use validator::ValidateEmail;

use crate::domain::user::{Credentials, NewRegistration};
use crate::forms::{FormError, MIN_PASSWORD_LEN, non_blank};

#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl TryFrom<LoginForm> for Credentials {
    type Error = FormError;

    fn try_from(form: LoginForm) -> Result<Self, Self::Error> {
        let email = form.email.trim();
        if email.is_empty() || form.password.trim().is_empty() {
            return Err(FormError::MissingCredentials);
        }

        Ok(Credentials {
            email: email.to_lowercase(),
            password: form.password,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

impl TryFrom<RegisterForm> for NewRegistration {
    type Error = FormError;

    /// Checks run in a fixed order and stop at the first failure: required
    /// fields, email format, password length, confirmation.
    fn try_from(form: RegisterForm) -> Result<Self, Self::Error> {
        let name = form.name.trim();
        let email = form.email.trim();

        if name.is_empty()
            || email.is_empty()
            || form.password.trim().is_empty()
            || form.confirm_password.trim().is_empty()
        {
            return Err(FormError::MissingFields);
        }
        if !email.validate_email() {
            return Err(FormError::InvalidEmail);
        }
        if form.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(FormError::PasswordTooShort);
        }
        if form.password != form.confirm_password {
            return Err(FormError::PasswordMismatch);
        }

        Ok(NewRegistration {
            name: name.to_string(),
            email: email.to_lowercase(),
            phone_number: non_blank(form.phone_number.as_deref()),
            password: form.password,
        })
    }
}
