use std::fmt::{Display, Formatter};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::{FlightId, backend_datetime};

/// Cabin class offered by the search and booking forms.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum SeatClass {
    #[default]
    Economy,
    Business,
    First,
}

impl SeatClass {
    pub const ALL: [SeatClass; 3] = [SeatClass::Economy, SeatClass::Business, SeatClass::First];

    pub fn as_str(&self) -> &'static str {
        match self {
            SeatClass::Economy => "Economy",
            SeatClass::Business => "Business",
            SeatClass::First => "First",
        }
    }
}

impl Display for SeatClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: FlightId,
    pub flight_number: String,
    #[serde(default)]
    pub airline: String,
    #[serde(alias = "from", alias = "departureAirport")]
    pub departure: String,
    #[serde(alias = "to", alias = "arrival", alias = "arrivalAirport")]
    pub destination: String,
    #[serde(with = "backend_datetime", alias = "departureDate")]
    pub departure_time: NaiveDateTime,
    #[serde(default, with = "backend_datetime::option")]
    pub arrival_time: Option<NaiveDateTime>,
    pub price: f64,
    #[serde(default)]
    pub aircraft: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub gate: Option<String>,
}

impl Flight {
    /// Case-insensitive substring match over the fields the list views search.
    ///
    /// `needle` is expected to be lower-cased already; an empty needle matches
    /// every flight.
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || [
                &self.flight_number,
                &self.airline,
                &self.departure,
                &self.destination,
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }

    /// Flight time as `"2h 05m"`, when the arrival is known and after departure.
    pub fn duration(&self) -> Option<String> {
        let minutes = (self.arrival_time? - self.departure_time).num_minutes();
        (minutes > 0).then(|| format!("{}h {:02}m", minutes / 60, minutes % 60))
    }
}

/// Criteria sent to `POST /flights/search`.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FlightSearch {
    #[serde(rename = "departureId")]
    pub departure: String,
    #[serde(rename = "destinationId")]
    pub destination: String,
    pub departure_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_time: Option<NaiveTime>,
    pub seat_class: SeatClass,
    pub passengers: u32,
}

/// Flight fields submitted by the admin add and edit forms.
#[derive(Clone, Debug, PartialEq)]
pub struct FlightDraft {
    pub airline: String,
    pub flight_number: String,
    pub departure: String,
    pub destination: String,
    pub departure_time: NaiveDateTime,
    pub price: f64,
}

impl FlightDraft {
    /// Multipart text fields in the order the backend expects them.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("airline", self.airline.clone()),
            ("flightNumber", self.flight_number.clone()),
            ("departure", self.departure.clone()),
            ("destination", self.destination.clone()),
            (
                "departureTime",
                self.departure_time
                    .format(crate::domain::types::DATETIME_WIRE_FORMAT)
                    .to_string(),
            ),
            ("price", self.price.to_string()),
        ]
    }
}
