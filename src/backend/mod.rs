//! Typed access to the external booking API.
//!
//! Each concern of the backend gets its own trait so services can name exactly
//! what they call and tests can mock it. [`HttpBackend`] implements all of
//! them over HTTP.

use async_trait::async_trait;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::booking::{Booking, BookingRequest};
use crate::domain::flight::{Flight, FlightDraft, FlightSearch};
use crate::domain::types::{BookingId, FlightId, UserId};
use crate::domain::user::{Credentials, NewRegistration, UpdateUser, User};

pub mod errors;
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod schema;

pub use errors::{BackendError, BackendResult};
pub use http::HttpBackend;
pub use schema::LoginGrant;

#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Creates an account and returns the backend's confirmation message.
    async fn register(&self, registration: &NewRegistration) -> BackendResult<Option<String>>;
    async fn login(&self, credentials: &Credentials) -> BackendResult<LoginGrant>;
}

#[async_trait]
pub trait UserApi: Send + Sync {
    async fn list_users(&self, auth: &AuthenticatedUser) -> BackendResult<Vec<User>>;
    /// The account the bearer token belongs to.
    async fn get_profile(&self, auth: &AuthenticatedUser) -> BackendResult<User>;
    async fn get_user(&self, auth: &AuthenticatedUser, id: UserId) -> BackendResult<User>;
    /// The account `id` with its `bookings` populated.
    async fn get_user_bookings(&self, auth: &AuthenticatedUser, id: UserId)
    -> BackendResult<User>;
    async fn update_user(
        &self,
        auth: &AuthenticatedUser,
        id: UserId,
        updates: &UpdateUser,
    ) -> BackendResult<()>;
    async fn delete_user(&self, auth: &AuthenticatedUser, id: UserId) -> BackendResult<()>;
}

#[async_trait]
pub trait FlightApi: Send + Sync {
    async fn list_flights(&self) -> BackendResult<Vec<Flight>>;
    async fn get_flight(&self, id: FlightId) -> BackendResult<Flight>;
    async fn search_flights(&self, criteria: &FlightSearch) -> BackendResult<Vec<Flight>>;
    async fn add_flight(&self, auth: &AuthenticatedUser, draft: &FlightDraft)
    -> BackendResult<()>;
    async fn update_flight(
        &self,
        auth: &AuthenticatedUser,
        id: FlightId,
        draft: &FlightDraft,
    ) -> BackendResult<()>;
    async fn delete_flight(&self, auth: &AuthenticatedUser, id: FlightId) -> BackendResult<()>;
}

#[async_trait]
pub trait BookingApi: Send + Sync {
    async fn book_flight(
        &self,
        auth: &AuthenticatedUser,
        flight_id: FlightId,
        user_id: UserId,
        request: &BookingRequest,
    ) -> BackendResult<Option<Booking>>;
    async fn list_bookings(&self, auth: &AuthenticatedUser) -> BackendResult<Vec<Booking>>;
    async fn cancel_booking(&self, auth: &AuthenticatedUser, id: BookingId) -> BackendResult<()>;
}
