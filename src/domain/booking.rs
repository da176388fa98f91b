use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::flight::{Flight, SeatClass};
use crate::domain::types::{BookingId, backend_datetime};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    #[serde(default, alias = "bookingConfirmationCode", alias = "bookingReference")]
    pub confirmation_code: Option<String>,
    #[serde(default)]
    pub seat_class: SeatClass,
    #[serde(default = "default_passengers", alias = "numOfPassengers")]
    pub passengers: u32,
    #[serde(default)]
    pub seat_number: Option<String>,
    #[serde(default, with = "backend_datetime::option")]
    pub booking_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub flight: Option<Flight>,
    /// Email of the passenger account, present on the admin listing.
    #[serde(default, alias = "email")]
    pub user_email: Option<String>,
}

fn default_passengers() -> u32 {
    1
}

/// Body of `POST /bookings/book-flight/{flight}/{user}`.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub seat_class: SeatClass,
    #[serde(rename = "numOfPassengers")]
    pub passengers: u32,
}
