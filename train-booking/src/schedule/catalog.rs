//! In-memory schedule catalog.

use std::collections::HashSet;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::domain::{Train, format_date, format_time, format_timestamp};

use super::ScheduleStore;
use super::error::ScheduleError;

/// A schedule held in memory, in catalog order.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    trains: Vec<Train>,
}

impl Schedule {
    /// Build a schedule from trains in catalog order.
    ///
    /// Identifiers must be unique, distances and prices non-negative, and
    /// prices whole cents so a discounted fare never rounds above its base.
    pub fn from_trains(trains: Vec<Train>) -> Result<Self, ScheduleError> {
        let mut ids = HashSet::new();
        for train in &trains {
            if !ids.insert(train.id) {
                return Err(ScheduleError::DuplicateId(train.id.0));
            }
            if train.distance < Decimal::ZERO {
                return Err(ScheduleError::Negative {
                    id: train.id.0,
                    field: "distance",
                });
            }
            if train.price < Decimal::ZERO {
                return Err(ScheduleError::Negative {
                    id: train.id.0,
                    field: "price",
                });
            }
            if train.price.round_dp(2) != train.price {
                return Err(ScheduleError::SubCentPrice {
                    id: train.id.0,
                    price: train.price,
                });
            }
        }
        Ok(Self { trains })
    }

    /// Load a schedule from a JSON array of trains.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScheduleError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ScheduleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let trains: Vec<Train> =
            serde_json::from_str(&json).map_err(|source| ScheduleError::Json {
                path: path.to_path_buf(),
                source,
            })?;

        let schedule = Self::from_trains(trains)?;
        if schedule.is_empty() {
            warn!(path = %path.display(), "Schedule has no trains");
        } else {
            info!(path = %path.display(), trains = schedule.len(), "Loaded schedule");
        }
        Ok(schedule)
    }

    /// Number of trains.
    pub fn len(&self) -> usize {
        self.trains.len()
    }

    /// Returns true if the schedule has no trains.
    pub fn is_empty(&self) -> bool {
        self.trains.is_empty()
    }

    fn bound_for(&self, destination: &str) -> impl Iterator<Item = &Train> {
        self.trains
            .iter()
            .filter(move |t| t.destination == destination)
    }
}

/// Keep the first appearance of each value, preserving order.
fn distinct(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(v.clone())).collect()
}

impl ScheduleStore for Schedule {
    fn list_origins(&self) -> Result<Vec<String>, ScheduleError> {
        Ok(distinct(self.trains.iter().map(|t| t.origin.clone())))
    }

    fn list_destinations(&self) -> Result<Vec<String>, ScheduleError> {
        Ok(distinct(self.trains.iter().map(|t| t.destination.clone())))
    }

    fn list_dates(&self, destination: &str) -> Result<Vec<String>, ScheduleError> {
        Ok(distinct(
            self.bound_for(destination)
                .map(|t| format_date(&t.departure.date())),
        ))
    }

    fn list_times(&self, date: &str, destination: &str) -> Result<Vec<String>, ScheduleError> {
        Ok(distinct(
            self.bound_for(destination)
                .filter(|t| format_date(&t.departure.date()) == date)
                .map(|t| format_time(&t.departure.time())),
        ))
    }

    fn get_train(&self, departure: &str, destination: &str) -> Result<Train, ScheduleError> {
        self.bound_for(destination)
            .find(|t| format_timestamp(&t.departure) == departure.trim())
            .cloned()
            .ok_or_else(|| ScheduleError::TrainNotFound {
                departure: departure.to_string(),
                destination: destination.to_string(),
            })
    }
}
