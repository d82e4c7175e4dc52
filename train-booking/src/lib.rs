//! Train ticket booking.
//!
//! A passenger picks an origin, destination, date and time from a fixed
//! schedule; the booking computes a discounted fare and an estimated
//! arrival, saves the boarding pass and appends a printable receipt.

pub mod booking;
pub mod domain;
pub mod eta;
pub mod fare;
pub mod logging;
pub mod menu;
pub mod prompt;
pub mod receipt;
pub mod schedule;
pub mod tickets;
