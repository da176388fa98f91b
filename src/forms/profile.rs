use serde::Deserialize;
use validator::ValidateEmail;

use crate::domain::user::UpdateUser;
use crate::forms::{FormError, MIN_PASSWORD_LEN};

/// Form data for editing the signed-in user's own account.
#[derive(Debug, Default, Deserialize)]
pub struct EditProfileForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

impl EditProfileForm {
    /// Builds the partial update, sending only fields that actually changed.
    pub fn into_update(self, current_email: &str) -> Result<UpdateUser, FormError> {
        if !self.password.is_empty() && self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        if !self.password.is_empty() && self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(FormError::PasswordTooShort);
        }

        let email = self.email.trim().to_lowercase();
        let email = if email.is_empty() || email == current_email.trim().to_lowercase() {
            None
        } else if !email.validate_email() {
            return Err(FormError::InvalidEmail);
        } else {
            Some(email)
        };

        let update = UpdateUser {
            email,
            password: Some(self.password).filter(|password| !password.is_empty()),
        };

        if update.is_empty() {
            return Err(FormError::NoChanges);
        }

        Ok(update)
    }
}
