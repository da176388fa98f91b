//! The single response shape accepted from the backend.
//!
//! Every endpoint answers with the same JSON envelope carrying a status, an
//! optional message and whichever record(s) the call produced. Older builds of
//! the backend used different keys for the same payload (`usersDTO`, `users`,
//! a nested `data` object); those spellings are folded into one place here so
//! no caller ever looks for a record under more than one name.

use serde::Deserialize;

use crate::backend::errors::{BackendError, BackendResult};
use crate::domain::booking::Booking;
use crate::domain::flight::Flight;
use crate::domain::user::{Role, User};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default, alias = "usersDTO", alias = "userDTO")]
    pub user: Option<User>,
    #[serde(default, alias = "users")]
    pub user_list: Option<Vec<User>>,
    #[serde(default)]
    pub flight: Option<Flight>,
    #[serde(default, alias = "flights")]
    pub flight_list: Option<Vec<Flight>>,
    #[serde(default)]
    pub booking: Option<Booking>,
    #[serde(default, alias = "bookings")]
    pub booking_list: Option<Vec<Booking>>,
    #[serde(default)]
    data: Option<Box<Envelope>>,
}

/// Token and role handed out by a successful login.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginGrant {
    pub token: String,
    pub role: Role,
}

impl Envelope {
    /// Parses a success body, lifting a nested `data` object and rejecting
    /// bodies whose embedded status code reports a failure.
    pub fn parse(body: &str) -> BackendResult<Self> {
        if body.trim().is_empty() {
            return Ok(Self::default());
        }
        let envelope: Envelope = serde_json::from_str(body)?;
        envelope.normalize().into_checked()
    }

    /// Extracts the best available error text from a failure body.
    pub fn error_message(body: &str) -> String {
        serde_json::from_str::<Envelope>(body)
            .ok()
            .map(Envelope::normalize)
            .and_then(|envelope| envelope.message)
            .unwrap_or_else(|| body.trim().to_string())
    }

    fn normalize(mut self) -> Self {
        if let Some(inner) = self.data.take() {
            let inner = inner.normalize();
            self.status_code = self.status_code.or(inner.status_code);
            self.message = self.message.or(inner.message);
            self.token = self.token.or(inner.token);
            self.role = self.role.or(inner.role);
            self.user = self.user.or(inner.user);
            self.user_list = self.user_list.or(inner.user_list);
            self.flight = self.flight.or(inner.flight);
            self.flight_list = self.flight_list.or(inner.flight_list);
            self.booking = self.booking.or(inner.booking);
            self.booking_list = self.booking_list.or(inner.booking_list);
        }
        self
    }

    fn into_checked(self) -> BackendResult<Self> {
        match self.status_code {
            Some(status) if status >= 400 => Err(BackendError::from_status(
                status,
                self.message.unwrap_or_default(),
            )),
            _ => Ok(self),
        }
    }

    pub fn into_message(self) -> Option<String> {
        self.message.filter(|message| !message.trim().is_empty())
    }

    pub fn into_login_grant(self) -> BackendResult<LoginGrant> {
        let token = self
            .token
            .filter(|token| !token.is_empty())
            .ok_or(BackendError::MissingField("token"))?;
        let role = self.role.ok_or(BackendError::MissingField("role"))?;
        Ok(LoginGrant { token, role })
    }

    pub fn into_user(self) -> BackendResult<User> {
        self.user.ok_or(BackendError::MissingField("user"))
    }

    pub fn into_users(self) -> Vec<User> {
        self.user_list.unwrap_or_default()
    }

    pub fn into_flight(self) -> BackendResult<Flight> {
        self.flight.ok_or(BackendError::MissingField("flight"))
    }

    pub fn into_flights(self) -> Vec<Flight> {
        self.flight_list.unwrap_or_default()
    }

    pub fn into_booking(self) -> Option<Booking> {
        self.booking
    }

    pub fn into_bookings(self) -> Vec<Booking> {
        self.booking_list.unwrap_or_default()
    }
}
