//! Mock backend implementation for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::backend::{AuthApi, BackendResult, BookingApi, FlightApi, LoginGrant, UserApi};
use crate::domain::auth::AuthenticatedUser;
use crate::domain::booking::{Booking, BookingRequest};
use crate::domain::flight::{Flight, FlightDraft, FlightSearch};
use crate::domain::types::{BookingId, FlightId, UserId};
use crate::domain::user::{Credentials, NewRegistration, UpdateUser, User};

mock! {
    pub Backend {}

    #[async_trait]
    impl AuthApi for Backend {
        async fn register(&self, registration: &NewRegistration) -> BackendResult<Option<String>>;
        async fn login(&self, credentials: &Credentials) -> BackendResult<LoginGrant>;
    }

    #[async_trait]
    impl UserApi for Backend {
        async fn list_users(&self, auth: &AuthenticatedUser) -> BackendResult<Vec<User>>;
        async fn get_profile(&self, auth: &AuthenticatedUser) -> BackendResult<User>;
        async fn get_user(&self, auth: &AuthenticatedUser, id: UserId) -> BackendResult<User>;
        async fn get_user_bookings(
            &self,
            auth: &AuthenticatedUser,
            id: UserId,
        ) -> BackendResult<User>;
        async fn update_user(
            &self,
            auth: &AuthenticatedUser,
            id: UserId,
            updates: &UpdateUser,
        ) -> BackendResult<()>;
        async fn delete_user(&self, auth: &AuthenticatedUser, id: UserId) -> BackendResult<()>;
    }

    #[async_trait]
    impl FlightApi for Backend {
        async fn list_flights(&self) -> BackendResult<Vec<Flight>>;
        async fn get_flight(&self, id: FlightId) -> BackendResult<Flight>;
        async fn search_flights(&self, criteria: &FlightSearch) -> BackendResult<Vec<Flight>>;
        async fn add_flight(
            &self,
            auth: &AuthenticatedUser,
            draft: &FlightDraft,
        ) -> BackendResult<()>;
        async fn update_flight(
            &self,
            auth: &AuthenticatedUser,
            id: FlightId,
            draft: &FlightDraft,
        ) -> BackendResult<()>;
        async fn delete_flight(&self, auth: &AuthenticatedUser, id: FlightId) -> BackendResult<()>;
    }

    #[async_trait]
    impl BookingApi for Backend {
        async fn book_flight(
            &self,
            auth: &AuthenticatedUser,
            flight_id: FlightId,
            user_id: UserId,
            request: &BookingRequest,
        ) -> BackendResult<Option<Booking>>;
        async fn list_bookings(&self, auth: &AuthenticatedUser) -> BackendResult<Vec<Booking>>;
        async fn cancel_booking(
            &self,
            auth: &AuthenticatedUser,
            id: BookingId,
        ) -> BackendResult<()>;
    }
}
