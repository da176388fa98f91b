//! DTOs used by the profile pages.

use serde::Serialize;

use crate::domain::booking::Booking;
use crate::domain::user::User;

/// Data required to render the profile page.
#[derive(Debug, Serialize)]
pub struct ProfilePageData {
    pub user: User,
    /// Bookings of the user, most recent first.
    pub bookings: Vec<Booking>,
}
