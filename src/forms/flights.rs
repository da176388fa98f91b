//! Flight search, booking and admin flight editor forms.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::booking::BookingRequest;
use crate::domain::flight::{Flight, FlightDraft, FlightSearch, SeatClass};
use crate::forms::{FormError, non_blank};

fn parse_seat_class(raw: Option<&str>) -> Result<SeatClass, FormError> {
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        None => Ok(SeatClass::default()),
        Some(value) => SeatClass::ALL
            .into_iter()
            .find(|class| class.as_str().eq_ignore_ascii_case(value))
            .ok_or(FormError::InvalidSeatClass),
    }
}

fn parse_passengers(raw: Option<&str>) -> Result<u32, FormError> {
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        None => Ok(1),
        Some(value) => value
            .parse::<u32>()
            .ok()
            .filter(|count| *count >= 1)
            .ok_or(FormError::InvalidPassengers),
    }
}

/// Query string of the flight search page.
///
/// Everything is optional so that the bare page (no query) deserializes too;
/// the search only runs once the form has been submitted.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SearchFlightForm {
    pub departure: Option<String>,
    pub destination: Option<String>,
    pub departure_date: Option<String>,
    pub flight_time: Option<String>,
    pub seat_class: Option<String>,
    pub passengers: Option<String>,
}

impl SearchFlightForm {
    /// Whether any search criteria were submitted at all.
    pub fn is_submitted(&self) -> bool {
        [
            &self.departure,
            &self.destination,
            &self.departure_date,
            &self.flight_time,
        ]
        .iter()
        .any(|field| field.is_some())
    }
}

impl TryFrom<&SearchFlightForm> for FlightSearch {
    type Error = FormError;

    fn try_from(form: &SearchFlightForm) -> Result<Self, Self::Error> {
        let departure = non_blank(form.departure.as_deref());
        let destination = non_blank(form.destination.as_deref());
        let departure_date = non_blank(form.departure_date.as_deref());

        let (Some(departure), Some(destination), Some(departure_date)) =
            (departure, destination, departure_date)
        else {
            return Err(FormError::MissingSearchCriteria);
        };

        if departure == destination {
            return Err(FormError::SameEndpoints);
        }

        let departure_date = NaiveDate::parse_from_str(&departure_date, "%Y-%m-%d")
            .map_err(|_| FormError::InvalidDateTime)?;
        let flight_time = non_blank(form.flight_time.as_deref())
            .map(|time| NaiveTime::parse_from_str(&time, "%H:%M"))
            .transpose()
            .map_err(|_| FormError::InvalidDateTime)?;

        Ok(FlightSearch {
            departure,
            destination,
            departure_date,
            flight_time,
            seat_class: parse_seat_class(form.seat_class.as_deref())?,
            passengers: parse_passengers(form.passengers.as_deref())?,
        })
    }
}

/// Form posted by the "Book now" button on a flight.
#[derive(Debug, Default, Deserialize)]
pub struct BookFlightForm {
    pub seat_class: Option<String>,
    pub passengers: Option<String>,
}

impl TryFrom<BookFlightForm> for BookingRequest {
    type Error = FormError;

    fn try_from(form: BookFlightForm) -> Result<Self, Self::Error> {
        Ok(BookingRequest {
            seat_class: parse_seat_class(form.seat_class.as_deref())?,
            passengers: parse_passengers(form.passengers.as_deref())?,
        })
    }
}

/// Admin add/edit flight form. Date and time arrive as separate inputs.
#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate)]
pub struct FlightForm {
    #[validate(length(min = 1))]
    pub airline: String,
    #[validate(length(min = 1, max = 16))]
    pub flight_number: String,
    #[validate(length(min = 1))]
    pub departure: String,
    #[validate(length(min = 1))]
    pub destination: String,
    /// `YYYY-MM-DD`
    pub departure_date: String,
    /// `HH:MM`
    pub departure_time: String,
    pub price: String,
}

impl FlightForm {
    /// Prefills the editor from an existing flight.
    pub fn from_flight(flight: &Flight) -> Self {
        Self {
            airline: flight.airline.clone(),
            flight_number: flight.flight_number.clone(),
            departure: flight.departure.clone(),
            destination: flight.destination.clone(),
            departure_date: flight.departure_time.format("%Y-%m-%d").to_string(),
            departure_time: flight.departure_time.format("%H:%M").to_string(),
            price: flight.price.to_string(),
        }
    }

    fn trimmed(self) -> Self {
        Self {
            airline: self.airline.trim().to_string(),
            flight_number: self.flight_number.trim().to_uppercase(),
            departure: self.departure.trim().to_string(),
            destination: self.destination.trim().to_string(),
            departure_date: self.departure_date.trim().to_string(),
            departure_time: self.departure_time.trim().to_string(),
            price: self.price.trim().to_string(),
        }
    }
}

impl TryFrom<FlightForm> for FlightDraft {
    type Error = FormError;

    fn try_from(form: FlightForm) -> Result<Self, Self::Error> {
        let form = form.trimmed();
        form.validate()?;

        if form.departure.eq_ignore_ascii_case(&form.destination) {
            return Err(FormError::SameEndpoints);
        }

        let departure_time = NaiveDateTime::parse_from_str(
            &format!("{}T{}", form.departure_date, form.departure_time),
            "%Y-%m-%dT%H:%M",
        )
        .map_err(|_| FormError::InvalidDateTime)?;

        let price = form
            .price
            .parse::<f64>()
            .ok()
            .filter(|price| price.is_finite() && *price >= 0.0)
            .ok_or(FormError::InvalidPrice)?;

        Ok(FlightDraft {
            airline: form.airline,
            flight_number: form.flight_number,
            departure: form.departure,
            destination: form.destination,
            departure_time,
            price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search_form() -> SearchFlightForm {
        SearchFlightForm {
            departure: Some(" Hanoi ".into()),
            destination: Some("SGN".into()),
            departure_date: Some("2025-06-01".into()),
            flight_time: Some(String::new()),
            seat_class: Some("business".into()),
            passengers: Some("2".into()),
        }
    }

    fn flight_form() -> FlightForm {
        FlightForm {
            airline: "Jetstar".into(),
            flight_number: " jq456 ".into(),
            departure: "Da Nang".into(),
            destination: "Hanoi".into(),
            departure_date: "2025-06-05".into(),
            departure_time: "15:30".into(),
            price: "90".into(),
        }
    }

    #[test]
    fn empty_query_is_not_a_submission() {
        assert!(!SearchFlightForm::default().is_submitted());
        assert!(search_form().is_submitted());
    }

    #[test]
    fn search_criteria_are_trimmed_but_kept_as_typed() {
        let criteria = FlightSearch::try_from(&search_form()).unwrap();
        assert_eq!(criteria.departure, "Hanoi");
        assert_eq!(criteria.destination, "SGN");
        assert_eq!(criteria.seat_class, SeatClass::Business);
        assert_eq!(criteria.passengers, 2);
        assert_eq!(criteria.flight_time, None);
    }

    #[test]
    fn search_requires_distinct_endpoints() {
        let mut form = search_form();
        form.destination = Some("Hanoi".into());
        assert!(matches!(
            FlightSearch::try_from(&form),
            Err(FormError::SameEndpoints)
        ));

        let mut form = search_form();
        form.destination = Some("hanoi".into());
        assert!(FlightSearch::try_from(&form).is_ok());

        let mut form = search_form();
        form.departure_date = None;
        assert!(matches!(
            FlightSearch::try_from(&form),
            Err(FormError::MissingSearchCriteria)
        ));
    }

    #[test]
    fn search_rejects_zero_passengers() {
        let mut form = search_form();
        form.passengers = Some("0".into());
        assert!(matches!(
            FlightSearch::try_from(&form),
            Err(FormError::InvalidPassengers)
        ));
    }

    #[test]
    fn flight_form_combines_date_and_time() {
        let draft = FlightDraft::try_from(flight_form()).unwrap();
        assert_eq!(draft.flight_number, "JQ456");
        assert_eq!(
            draft.departure_time.format("%Y-%m-%dT%H:%M:%S").to_string(),
            "2025-06-05T15:30:00"
        );
        assert_eq!(draft.price, 90.0);
    }

    #[test]
    fn flight_form_rejects_negative_price_and_blank_fields() {
        let mut form = flight_form();
        form.price = "-1".into();
        assert!(matches!(
            FlightDraft::try_from(form),
            Err(FormError::InvalidPrice)
        ));

        let mut form = flight_form();
        form.airline = "   ".into();
        assert!(matches!(
            FlightDraft::try_from(form),
            Err(FormError::Validation(_))
        ));
    }

    #[test]
    fn booking_defaults_to_one_economy_seat() {
        let request = BookingRequest::try_from(BookFlightForm::default()).unwrap();
        assert_eq!(request.seat_class, SeatClass::Economy);
        assert_eq!(request.passengers, 1);
    }
}
