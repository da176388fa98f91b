use std::time::Duration;

use async_trait::async_trait;
use reqwest::RequestBuilder;
use reqwest::multipart::Form;

use crate::backend::errors::{BackendError, BackendResult};
use crate::backend::schema::{Envelope, LoginGrant};
use crate::backend::{AuthApi, BookingApi, FlightApi, UserApi};
use crate::domain::auth::AuthenticatedUser;
use crate::domain::booking::{Booking, BookingRequest};
use crate::domain::flight::{Flight, FlightDraft, FlightSearch};
use crate::domain::types::{BookingId, FlightId, UserId};
use crate::domain::user::{Credentials, NewRegistration, UpdateUser, User};

/// HTTP client for the booking backend.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    base_url: String,
    http: reqwest::Client,
}

impl HttpBackend {
    /// Create a client pointing at `base_url` with a per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> BackendResult<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorized(builder: RequestBuilder, auth: &AuthenticatedUser) -> RequestBuilder {
        if auth.token.is_empty() {
            builder
        } else {
            builder.bearer_auth(&auth.token)
        }
    }

    async fn send(&self, request: RequestBuilder) -> BackendResult<Envelope> {
        let resp = request.send().await?;
        handle_response(resp).await
    }
}

async fn handle_response(resp: reqwest::Response) -> BackendResult<Envelope> {
    let status = resp.status();
    let body = resp.text().await?;

    if status.is_success() {
        Envelope::parse(&body)
    } else {
        log::warn!("Backend answered {status}: {}", body.trim());
        Err(BackendError::from_status(
            status.as_u16(),
            Envelope::error_message(&body),
        ))
    }
}

fn draft_form(draft: &FlightDraft) -> Form {
    draft
        .form_fields()
        .into_iter()
        .fold(Form::new(), |form, (name, value)| form.text(name, value))
}

#[async_trait]
impl AuthApi for HttpBackend {
    async fn register(&self, registration: &NewRegistration) -> BackendResult<Option<String>> {
        let request = self.http.post(self.url("/auth/register")).json(registration);
        Ok(self.send(request).await?.into_message())
    }

    async fn login(&self, credentials: &Credentials) -> BackendResult<LoginGrant> {
        let request = self.http.post(self.url("/auth/login")).json(credentials);
        self.send(request).await?.into_login_grant()
    }
}

#[async_trait]
impl UserApi for HttpBackend {
    async fn list_users(&self, auth: &AuthenticatedUser) -> BackendResult<Vec<User>> {
        let request = Self::authorized(self.http.get(self.url("/users/all")), auth);
        Ok(self.send(request).await?.into_users())
    }

    async fn get_profile(&self, auth: &AuthenticatedUser) -> BackendResult<User> {
        let request = Self::authorized(self.http.get(self.url("/users/me")), auth);
        self.send(request).await?.into_user()
    }

    async fn get_user(&self, auth: &AuthenticatedUser, id: UserId) -> BackendResult<User> {
        let request = Self::authorized(self.http.get(self.url(&format!("/users/{id}"))), auth);
        self.send(request).await?.into_user()
    }

    async fn get_user_bookings(
        &self,
        auth: &AuthenticatedUser,
        id: UserId,
    ) -> BackendResult<User> {
        let request = Self::authorized(
            self.http.get(self.url(&format!("/users/{id}/bookings"))),
            auth,
        );
        self.send(request).await?.into_user()
    }

    async fn update_user(
        &self,
        auth: &AuthenticatedUser,
        id: UserId,
        updates: &UpdateUser,
    ) -> BackendResult<()> {
        let request = Self::authorized(
            self.http.put(self.url(&format!("/users/update/{id}"))),
            auth,
        )
        .json(updates);
        self.send(request).await?;
        Ok(())
    }

    async fn delete_user(&self, auth: &AuthenticatedUser, id: UserId) -> BackendResult<()> {
        let request = Self::authorized(
            self.http.delete(self.url(&format!("/users/delete/{id}"))),
            auth,
        );
        self.send(request).await?;
        Ok(())
    }
}

#[async_trait]
impl FlightApi for HttpBackend {
    async fn list_flights(&self) -> BackendResult<Vec<Flight>> {
        let request = self.http.get(self.url("/flights/all"));
        Ok(self.send(request).await?.into_flights())
    }

    async fn get_flight(&self, id: FlightId) -> BackendResult<Flight> {
        let request = self.http.get(self.url(&format!("/flights/{id}")));
        self.send(request).await?.into_flight()
    }

    async fn search_flights(&self, criteria: &FlightSearch) -> BackendResult<Vec<Flight>> {
        let request = self.http.post(self.url("/flights/search")).json(criteria);
        Ok(self.send(request).await?.into_flights())
    }

    async fn add_flight(
        &self,
        auth: &AuthenticatedUser,
        draft: &FlightDraft,
    ) -> BackendResult<()> {
        let request = Self::authorized(self.http.post(self.url("/flights/add")), auth)
            .multipart(draft_form(draft));
        self.send(request).await?;
        Ok(())
    }

    async fn update_flight(
        &self,
        auth: &AuthenticatedUser,
        id: FlightId,
        draft: &FlightDraft,
    ) -> BackendResult<()> {
        let request = Self::authorized(
            self.http.put(self.url(&format!("/flights/update/{id}"))),
            auth,
        )
        .multipart(draft_form(draft));
        self.send(request).await?;
        Ok(())
    }

    async fn delete_flight(&self, auth: &AuthenticatedUser, id: FlightId) -> BackendResult<()> {
        let request = Self::authorized(
            self.http.delete(self.url(&format!("/flights/delete/{id}"))),
            auth,
        );
        self.send(request).await?;
        Ok(())
    }
}

#[async_trait]
impl BookingApi for HttpBackend {
    async fn book_flight(
        &self,
        auth: &AuthenticatedUser,
        flight_id: FlightId,
        user_id: UserId,
        request: &BookingRequest,
    ) -> BackendResult<Option<Booking>> {
        let builder = Self::authorized(
            self.http
                .post(self.url(&format!("/bookings/book-flight/{flight_id}/{user_id}"))),
            auth,
        )
        .json(request);
        Ok(self.send(builder).await?.into_booking())
    }

    async fn list_bookings(&self, auth: &AuthenticatedUser) -> BackendResult<Vec<Booking>> {
        let request = Self::authorized(self.http.get(self.url("/bookings/all")), auth);
        Ok(self.send(request).await?.into_bookings())
    }

    async fn cancel_booking(&self, auth: &AuthenticatedUser, id: BookingId) -> BackendResult<()> {
        let request = Self::authorized(
            self.http.delete(self.url(&format!("/bookings/cancel/{id}"))),
            auth,
        );
        self.send(request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let backend = HttpBackend::new("http://localhost:8080/", Duration::from_secs(5)).unwrap();
        assert_eq!(backend.base_url(), "http://localhost:8080");
        assert_eq!(backend.url("/flights/all"), "http://localhost:8080/flights/all");
    }
}
