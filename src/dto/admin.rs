//! DTOs used in the admin dashboard pages.

use serde::{Deserialize, Serialize};

use crate::domain::booking::Booking;
use crate::domain::flight::Flight;
use crate::domain::user::{Role, User};
use crate::dto::lenient_page;
use crate::forms::flights::FlightForm;
use crate::pagination::Paginated;

/// Query parameters of the user management list.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UsersQuery {
    /// `ADMIN`, `USER` or empty for all roles.
    pub role: Option<String>,
    #[serde(default, deserialize_with = "lenient_page")]
    pub page: Option<usize>,
}

/// Data required to render the user management list.
#[derive(Debug, Serialize)]
pub struct UsersPageData {
    pub users: Paginated<User>,
    /// Active role filter; `None` shows every account.
    pub role: Option<Role>,
}

/// Data required to render the flight management list.
#[derive(Debug, Serialize)]
pub struct AdminFlightsPageData {
    pub flights: Paginated<Flight>,
    pub search_query: Option<String>,
}

/// Prefilled editor for an existing flight.
#[derive(Debug, Serialize)]
pub struct EditFlightData {
    pub flight: Flight,
    pub form: FlightForm,
}

#[derive(Debug, Default, Deserialize)]
pub struct BookingsQuery {
    #[serde(default, deserialize_with = "lenient_page")]
    pub page: Option<usize>,
}

/// Data required to render the booking management list.
#[derive(Debug, Serialize)]
pub struct BookingsPageData {
    pub bookings: Paginated<Booking>,
}

/// Where a list action returns to, carried as hidden form fields so the
/// list reopens on the same filter and page.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ReturnTo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(default, deserialize_with = "lenient_page", skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
}
