//! Booking orchestration.
//!
//! A [`BookingSession`] walks a passenger from identity through trip
//! selection to an issued, saved boarding pass. Each step waits for a
//! valid answer before moving on, and no step ever moves backwards.

mod config;
mod error;
mod session;

pub use config::{BookingConfig, ConfigError, RECEIPT_VAR, SCHEDULE_VAR, SPEED_VAR, TICKETS_VAR};
pub use error::BookingError;
pub use session::{BookingSession, BookingStep, banner};
