//! Flight listing, search and administration.

use crate::backend::FlightApi;
use crate::domain::auth::AuthenticatedUser;
use crate::domain::flight::{Flight, FlightDraft, FlightSearch, SeatClass};
use crate::domain::types::FlightId;
use crate::domain::user::Role;
use crate::dto::admin::{AdminFlightsPageData, EditFlightData};
use crate::dto::flights::{FlightDetailsData, FlightsPageData, FlightsQuery, SearchPageData};
use crate::dto::load_state::LoadState;
use crate::forms::flights::{FlightForm, SearchFlightForm};
use crate::pagination::{PageState, Paginated};
use crate::services::{ServiceError, ServiceResult, ensure_role, normalize_search};

/// Fetches every flight and keeps those matching `search`, in departure order.
async fn filtered_flights<A>(api: &A, search: Option<&str>) -> ServiceResult<Vec<Flight>>
where
    A: FlightApi + ?Sized,
{
    let needle = search.unwrap_or_default();
    let mut flights: Vec<Flight> = api
        .list_flights()
        .await?
        .into_iter()
        .filter(|flight| flight.matches(needle))
        .collect();
    flights.sort_by(|a, b| a.departure_time.cmp(&b.departure_time));
    Ok(flights)
}

/// Loads the public flight list page.
pub async fn list_flights<A>(api: &A, query: FlightsQuery) -> ServiceResult<FlightsPageData>
where
    A: FlightApi + ?Sized,
{
    let search_query = normalize_search(query.q.as_deref());
    let flights = filtered_flights(api, search_query.as_deref()).await?;

    let state = PageState::with_default_size(flights.len(), query.page.unwrap_or(1));
    let flights = Paginated::from_filtered(&flights, &state);

    Ok(FlightsPageData {
        flights,
        search_query,
    })
}

pub async fn flight_details<A>(api: &A, flight_id: i64) -> ServiceResult<FlightDetailsData>
where
    A: FlightApi + ?Sized,
{
    let flight = api.get_flight(FlightId::new(flight_id)?).await?;
    Ok(FlightDetailsData {
        duration: flight.duration(),
        flight,
        seat_classes: SeatClass::ALL,
    })
}

/// Runs the search page.
///
/// An unsubmitted form leaves the results `Idle`; invalid criteria and
/// backend failures both settle as `Failed` with a visitor-facing message.
pub async fn search_flights<A>(api: &A, form: SearchFlightForm) -> SearchPageData
where
    A: FlightApi + ?Sized,
{
    if !form.is_submitted() {
        return SearchPageData::new(form, LoadState::Idle);
    }

    let results = match FlightSearch::try_from(&form) {
        Ok(criteria) => {
            LoadState::load(async {
                api.search_flights(&criteria).await.map_err(|err| {
                    log::error!("Flight search failed: {err}");
                    err.user_message()
                })
            })
            .await
        }
        Err(err) => LoadState::Failed(err.to_string()),
    };

    SearchPageData::new(form, results)
}

/// Loads the admin flight table.
pub async fn load_admin_flights<A>(
    api: &A,
    user: &AuthenticatedUser,
    query: FlightsQuery,
) -> ServiceResult<AdminFlightsPageData>
where
    A: FlightApi + ?Sized,
{
    ensure_role(user, Role::Admin)?;

    let data = list_flights(api, query).await?;

    Ok(AdminFlightsPageData {
        flights: data.flights,
        search_query: data.search_query,
    })
}

/// Loads a flight into the edit form.
pub async fn load_flight_editor<A>(
    api: &A,
    user: &AuthenticatedUser,
    flight_id: i64,
) -> ServiceResult<EditFlightData>
where
    A: FlightApi + ?Sized,
{
    ensure_role(user, Role::Admin)?;

    let flight = api.get_flight(FlightId::new(flight_id)?).await?;
    let form = FlightForm::from_flight(&flight);

    Ok(EditFlightData { flight, form })
}

/// Validates the flight form and creates the flight.
pub async fn add_flight<A>(api: &A, user: &AuthenticatedUser, form: FlightForm) -> ServiceResult<()>
where
    A: FlightApi + ?Sized,
{
    ensure_role(user, Role::Admin)?;

    let draft = FlightDraft::try_from(form)?;

    api.add_flight(user, &draft).await.map_err(|err| {
        log::error!("Failed to add flight {}: {err}", draft.flight_number);
        err
    })?;

    log::info!("Flight {} added by {}", draft.flight_number, user.email);
    Ok(())
}

/// Validates the flight form and replaces the stored flight.
pub async fn update_flight<A>(
    api: &A,
    user: &AuthenticatedUser,
    flight_id: i64,
    form: FlightForm,
) -> ServiceResult<()>
where
    A: FlightApi + ?Sized,
{
    ensure_role(user, Role::Admin)?;

    let flight_id = FlightId::new(flight_id)?;
    let draft = FlightDraft::try_from(form)?;

    api.update_flight(user, flight_id, &draft)
        .await
        .map_err(|err| {
            log::error!("Failed to update flight {flight_id}: {err}");
            err
        })?;

    Ok(())
}

pub async fn delete_flight<A>(
    api: &A,
    user: &AuthenticatedUser,
    flight_id: i64,
) -> ServiceResult<()>
where
    A: FlightApi + ?Sized,
{
    ensure_role(user, Role::Admin)?;

    let flight_id = FlightId::new(flight_id)?;

    match api.delete_flight(user, flight_id).await {
        Ok(()) => {
            log::info!("Flight {flight_id} deleted by {}", user.email);
            Ok(())
        }
        Err(err) => {
            log::error!("Failed to delete flight {flight_id}: {err}");
            Err(ServiceError::from(err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::BackendError;
    use crate::backend::mock::MockBackend;
    use crate::services::test_support::{admin, customer, flight};

    fn twelve_flights() -> Vec<Flight> {
        (1..=12)
            .map(|id| flight(id, &format!("VN{id:03}"), "Hanoi", "Da Nang"))
            .collect()
    }

    #[actix_web::test]
    async fn list_paginates_by_five() {
        let mut api = MockBackend::new();
        api.expect_list_flights().returning(|| Ok(twelve_flights()));

        let data = list_flights(
            &api,
            FlightsQuery {
                q: None,
                page: Some(3),
            },
        )
        .await
        .unwrap();

        assert_eq!(data.flights.items.len(), 2);
        assert_eq!(data.flights.pages, vec![1, 2, 3]);
        assert_eq!(data.flights.page, 3);
    }

    #[actix_web::test]
    async fn search_term_filters_and_resets_to_existing_page() {
        let mut api = MockBackend::new();
        api.expect_list_flights().returning(|| {
            let mut flights = twelve_flights();
            flights.push(flight(13, "JQ456", "Hanoi", "Ho Chi Minh City"));
            Ok(flights)
        });

        let data = list_flights(
            &api,
            FlightsQuery {
                q: Some("  Chi Minh ".into()),
                page: Some(3),
            },
        )
        .await
        .unwrap();

        assert_eq!(data.search_query.as_deref(), Some("chi minh"));
        assert_eq!(data.flights.total_items, 1);
        assert_eq!(data.flights.page, 1);
        assert!(data.flights.pages.is_empty());
        assert_eq!(data.flights.items[0].flight_number, "JQ456");
    }

    #[actix_web::test]
    async fn unsubmitted_search_stays_idle() {
        let mut api = MockBackend::new();
        api.expect_search_flights().never();

        let data = search_flights(&api, SearchFlightForm::default()).await;

        assert!(data.results.is_idle());
        assert!(!data.show_results);
        assert!(!data.show_empty);
    }

    #[actix_web::test]
    async fn search_shows_results_only_when_non_empty() {
        let mut api = MockBackend::new();
        api.expect_search_flights()
            .times(1)
            .returning(|_| Ok(vec![flight(1, "VN123", "HAN", "SGN")]));

        let form = SearchFlightForm {
            departure: Some("HAN".into()),
            destination: Some("SGN".into()),
            departure_date: Some("2025-06-01".into()),
            ..Default::default()
        };
        let data = search_flights(&api, form.clone()).await;
        assert!(data.show_results);
        assert!(!data.show_empty);

        let mut api = MockBackend::new();
        api.expect_search_flights().returning(|_| Ok(Vec::new()));
        let data = search_flights(&api, form).await;
        assert!(!data.show_results);
        assert!(data.show_empty);
    }

    #[actix_web::test]
    async fn invalid_search_fails_without_backend_call() {
        let mut api = MockBackend::new();
        api.expect_search_flights().never();

        let form = SearchFlightForm {
            departure: Some("HAN".into()),
            destination: Some("HAN".into()),
            departure_date: Some("2025-06-01".into()),
            ..Default::default()
        };
        let data = search_flights(&api, form).await;

        assert_eq!(
            data.results.error(),
            Some("Departure and destination cannot be the same")
        );
    }

    #[actix_web::test]
    async fn backend_failure_settles_as_failed() {
        let mut api = MockBackend::new();
        api.expect_search_flights()
            .returning(|_| Err(BackendError::from_status(500, "Search unavailable".into())));

        let form = SearchFlightForm {
            departure: Some("HAN".into()),
            destination: Some("SGN".into()),
            departure_date: Some("2025-06-01".into()),
            ..Default::default()
        };
        let data = search_flights(&api, form).await;

        assert_eq!(data.results.error(), Some("Search unavailable"));
    }

    #[actix_web::test]
    async fn admin_flight_operations_require_admin() {
        let mut api = MockBackend::new();
        api.expect_list_flights().never();
        api.expect_delete_flight().never();
        api.expect_add_flight().never();

        let user = customer();
        assert!(matches!(
            load_admin_flights(&api, &user, FlightsQuery::default()).await,
            Err(ServiceError::Unauthorized)
        ));
        assert!(matches!(
            delete_flight(&api, &user, 1).await,
            Err(ServiceError::Unauthorized)
        ));
        assert!(matches!(
            add_flight(&api, &user, FlightForm::default()).await,
            Err(ServiceError::Unauthorized)
        ));
    }

    #[actix_web::test]
    async fn add_flight_sends_combined_departure() {
        let mut api = MockBackend::new();
        api.expect_add_flight()
            .withf(|_, draft| {
                draft.flight_number == "VN123"
                    && draft.departure_time.format("%Y-%m-%dT%H:%M").to_string()
                        == "2025-06-01T10:00"
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let form = FlightForm {
            airline: "Vietnam Airlines".into(),
            flight_number: "vn123".into(),
            departure: "Hanoi".into(),
            destination: "Ho Chi Minh City".into(),
            departure_date: "2025-06-01".into(),
            departure_time: "10:00".into(),
            price: "150".into(),
        };

        add_flight(&api, &admin(), form).await.unwrap();
    }

    #[actix_web::test]
    async fn editor_is_prefilled_from_flight() {
        let mut api = MockBackend::new();
        api.expect_get_flight()
            .withf(|id| id.get() == 2)
            .returning(|_| Ok(flight(2, "JQ456", "Da Nang", "Hanoi")));

        let data = load_flight_editor(&api, &admin(), 2).await.unwrap();

        assert_eq!(data.form.departure_date, "2025-06-01");
        assert_eq!(data.form.departure_time, "10:00");
        assert_eq!(data.form.flight_number, "JQ456");
    }

    #[actix_web::test]
    async fn non_positive_flight_id_is_rejected() {
        let mut api = MockBackend::new();
        api.expect_get_flight().never();

        let result = flight_details(&api, 0).await;

        assert!(matches!(result, Err(ServiceError::TypeConstraint(_))));
    }
}
