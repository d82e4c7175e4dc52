//! Schedule catalog error types.

use std::path::PathBuf;

use rust_decimal::Decimal;

/// Errors from loading or querying the schedule catalog.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// The catalog file could not be read
    #[error("failed to read schedule {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog file is not a valid list of trains
    #[error("failed to parse schedule {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Two catalog entries share an identifier
    #[error("duplicate train id {0} in schedule")]
    DuplicateId(u32),

    /// A catalog entry has a negative distance or price
    #[error("train {id} has a negative {field}")]
    Negative { id: u32, field: &'static str },

    /// A catalog price is not a whole number of cents
    #[error("train {id} has price {price} with fractions of a cent")]
    SubCentPrice { id: u32, price: Decimal },

    /// No train matches the requested departure and destination
    #[error("no train to {destination} leaving at {departure}")]
    TrainNotFound {
        departure: String,
        destination: String,
    },
}
