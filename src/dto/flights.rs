//! DTOs for the public flight pages.

use serde::{Deserialize, Serialize};

use crate::domain::flight::{Flight, SeatClass};
use crate::dto::lenient_page;
use crate::dto::load_state::LoadState;
use crate::forms::flights::SearchFlightForm;
use crate::pagination::Paginated;

/// Query parameters accepted by the flight list pages.
#[derive(Debug, Default, Deserialize)]
pub struct FlightsQuery {
    /// Free-text filter over flight number, airline and airports.
    pub q: Option<String>,
    /// Page number requested by the user interface.
    #[serde(default, deserialize_with = "lenient_page")]
    pub page: Option<usize>,
}

/// Data required to render a filtered, paginated flight table.
#[derive(Debug, Serialize)]
pub struct FlightsPageData {
    pub flights: Paginated<Flight>,
    /// Search query echoed back to the template when present.
    pub search_query: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FlightDetailsData {
    pub flight: Flight,
    /// Flight time, when the backend reports an arrival.
    pub duration: Option<String>,
    pub seat_classes: [SeatClass; 3],
}

/// Data required to render the search page in any of its states.
#[derive(Debug, Serialize)]
pub struct SearchPageData {
    pub form: SearchFlightForm,
    pub results: LoadState<Vec<Flight>>,
    pub show_results: bool,
    pub show_empty: bool,
    pub seat_classes: [SeatClass; 3],
}

impl SearchPageData {
    pub fn new(form: SearchFlightForm, results: LoadState<Vec<Flight>>) -> Self {
        Self {
            show_results: results.has_results(),
            show_empty: results.is_empty_result(),
            form,
            results,
            seat_classes: SeatClass::ALL,
        }
    }
}
