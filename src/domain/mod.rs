//! Typed records exchanged with the booking backend.

pub mod auth;
pub mod booking;
pub mod flight;
pub mod types;
pub mod user;
