//! Schedule catalog.
//!
//! The catalog is the source of truth for which trains run, where to and
//! when. Booking only talks to it through [`ScheduleStore`], so any backing
//! store can stand in; [`Schedule`] is the in-memory one, loadable from a
//! JSON file.

mod catalog;
mod error;

pub use catalog::Schedule;
pub use error::ScheduleError;

use crate::domain::Train;

/// Read-only queries booking makes against the catalog.
///
/// Dates and times are returned as the text shown to the passenger
/// (`YYYY-MM-DD` and `HH:MM`); a departure is the two joined by a space.
/// Every list is distinct and in catalog order.
pub trait ScheduleStore {
    /// Every origin in the catalog.
    fn list_origins(&self) -> Result<Vec<String>, ScheduleError>;

    /// Every destination in the catalog.
    fn list_destinations(&self) -> Result<Vec<String>, ScheduleError>;

    /// Dates with a train to `destination`.
    fn list_dates(&self, destination: &str) -> Result<Vec<String>, ScheduleError>;

    /// Departure times on `date` with a train to `destination`.
    fn list_times(&self, date: &str, destination: &str) -> Result<Vec<String>, ScheduleError>;

    /// The train leaving at `departure` for `destination`.
    fn get_train(&self, departure: &str, destination: &str) -> Result<Train, ScheduleError>;
}
