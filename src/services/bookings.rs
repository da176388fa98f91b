//! Booking a flight and the admin booking list.

use crate::backend::{BookingApi, UserApi};
use crate::domain::auth::AuthenticatedUser;
use crate::domain::booking::{Booking, BookingRequest};
use crate::domain::types::{BookingId, FlightId};
use crate::domain::user::Role;
use crate::dto::admin::{BookingsPageData, BookingsQuery};
use crate::forms::flights::BookFlightForm;
use crate::pagination::{PageState, Paginated};
use crate::services::{ServiceResult, ensure_role};

/// Books `flight_id` for the signed-in user.
///
/// The backend books on behalf of an explicit account id, so the current
/// account is resolved from the token first.
pub async fn book_flight<A>(
    api: &A,
    user: &AuthenticatedUser,
    flight_id: i64,
    form: BookFlightForm,
) -> ServiceResult<Option<Booking>>
where
    A: BookingApi + UserApi + ?Sized,
{
    let flight_id = FlightId::new(flight_id)?;
    let request = BookingRequest::try_from(form)?;
    let account = api.get_profile(user).await?;

    let booking = api
        .book_flight(user, flight_id, account.id, &request)
        .await
        .map_err(|err| {
            log::error!("Failed to book flight {flight_id} for {}: {err}", account.email);
            err
        })?;

    log::info!(
        "Flight {flight_id} booked for {} ({} x {})",
        account.email,
        request.passengers,
        request.seat_class
    );
    Ok(booking)
}

/// Loads every booking for the admin list, newest first.
pub async fn load_bookings<A>(
    api: &A,
    user: &AuthenticatedUser,
    query: BookingsQuery,
) -> ServiceResult<BookingsPageData>
where
    A: BookingApi + ?Sized,
{
    ensure_role(user, Role::Admin)?;

    let mut bookings = api.list_bookings(user).await?;
    bookings.sort_by(|a, b| b.booking_date.cmp(&a.booking_date));

    let state = PageState::with_default_size(bookings.len(), query.page.unwrap_or(1));

    Ok(BookingsPageData {
        bookings: Paginated::from_filtered(&bookings, &state),
    })
}

pub async fn cancel_booking<A>(
    api: &A,
    user: &AuthenticatedUser,
    booking_id: i64,
) -> ServiceResult<()>
where
    A: BookingApi + ?Sized,
{
    ensure_role(user, Role::Admin)?;

    let booking_id = BookingId::new(booking_id)?;

    api.cancel_booking(user, booking_id).await.map_err(|err| {
        log::error!("Failed to cancel booking {booking_id}: {err}");
        err
    })?;

    log::info!("Booking {booking_id} cancelled by {}", user.email);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::BackendError;
    use crate::backend::mock::MockBackend;
    use crate::domain::flight::SeatClass;
    use crate::services::ServiceError;
    use crate::services::test_support::{admin, customer, user};

    fn booking(id: i64) -> Booking {
        Booking {
            id: BookingId::new(id).unwrap(),
            confirmation_code: Some(format!("JK{id:04}")),
            seat_class: SeatClass::Business,
            passengers: 2,
            seat_number: None,
            booking_date: None,
            flight: None,
            user_email: Some("lan@example.com".into()),
        }
    }

    #[actix_web::test]
    async fn booking_uses_current_account_id() {
        let mut api = MockBackend::new();
        api.expect_get_profile()
            .returning(|_| Ok(user(7, Role::User)));
        api.expect_book_flight()
            .withf(|_, flight_id, user_id, request| {
                flight_id.get() == 12
                    && user_id.get() == 7
                    && request.seat_class == SeatClass::Business
                    && request.passengers == 2
            })
            .times(1)
            .returning(|_, _, _, _| Ok(Some(booking(1))));

        let form = BookFlightForm {
            seat_class: Some("business".into()),
            passengers: Some("2".into()),
        };
        let booking = book_flight(&api, &customer(), 12, form).await.unwrap();

        assert_eq!(booking.and_then(|b| b.confirmation_code).as_deref(), Some("JK0001"));
    }

    #[actix_web::test]
    async fn invalid_passenger_count_is_a_form_error() {
        let mut api = MockBackend::new();
        api.expect_get_profile().never();
        api.expect_book_flight().never();

        let form = BookFlightForm {
            seat_class: None,
            passengers: Some("0".into()),
        };

        match book_flight(&api, &customer(), 12, form).await {
            Err(ServiceError::Form(message)) => {
                assert_eq!(message, "At least one passenger is required.")
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[actix_web::test]
    async fn bookings_list_is_admin_only_and_paginated() {
        let mut api = MockBackend::new();
        api.expect_list_bookings()
            .returning(|_| Ok((1..=6).map(booking).collect()));

        assert!(matches!(
            load_bookings(&api, &customer(), BookingsQuery::default()).await,
            Err(ServiceError::Unauthorized)
        ));

        let data = load_bookings(&api, &admin(), BookingsQuery { page: Some(2) })
            .await
            .unwrap();
        assert_eq!(data.bookings.items.len(), 1);
        assert_eq!(data.bookings.pages, vec![1, 2]);
    }

    #[actix_web::test]
    async fn missing_booking_maps_to_not_found() {
        let mut api = MockBackend::new();
        api.expect_cancel_booking()
            .returning(|_, _| Err(BackendError::NotFound("Booking not found".into())));

        let result = cancel_booking(&api, &admin(), 5).await;

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }
}
