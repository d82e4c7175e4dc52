//! Booking configuration.

use std::path::PathBuf;
use std::str::FromStr;

use rust_decimal::Decimal;

/// Environment variable naming the schedule catalog file.
pub const SCHEDULE_VAR: &str = "TRAIN_BOOKING_SCHEDULE";

/// Environment variable naming the ticket store file.
pub const TICKETS_VAR: &str = "TRAIN_BOOKING_TICKETS";

/// Environment variable naming the receipt file.
pub const RECEIPT_VAR: &str = "TRAIN_BOOKING_RECEIPT";

/// Environment variable overriding the average train speed.
pub const SPEED_VAR: &str = "TRAIN_BOOKING_SPEED";

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The speed override is not a positive decimal number
    #[error("TRAIN_BOOKING_SPEED must be a positive number, got {0:?}")]
    InvalidSpeed(String),
}

/// Settings for a booking run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingConfig {
    /// Average train speed, in distance units per hour.
    /// Used to turn a route distance into a travel time.
    pub average_speed: Decimal,

    /// JSON file holding the schedule catalog.
    pub schedule_path: PathBuf,

    /// File the ticket store appends passes to.
    pub tickets_path: PathBuf,

    /// Text file receipts are appended to.
    pub receipt_path: PathBuf,
}

impl BookingConfig {
    /// Defaults, overridden by any `TRAIN_BOOKING_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults, overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = lookup(SCHEDULE_VAR) {
            config.schedule_path = path.into();
        }
        if let Some(path) = lookup(TICKETS_VAR) {
            config.tickets_path = path.into();
        }
        if let Some(path) = lookup(RECEIPT_VAR) {
            config.receipt_path = path.into();
        }
        if let Some(raw) = lookup(SPEED_VAR) {
            config.average_speed = parse_speed(&raw)?;
        }

        Ok(config)
    }
}

fn parse_speed(raw: &str) -> Result<Decimal, ConfigError> {
    match Decimal::from_str(raw.trim()) {
        Ok(speed) if speed > Decimal::ZERO => Ok(speed),
        _ => Err(ConfigError::InvalidSpeed(raw.to_string())),
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            average_speed: Decimal::from(60),
            schedule_path: PathBuf::from("data/schedule.json"),
            tickets_path: PathBuf::from("tickets.jsonl"),
            receipt_path: PathBuf::from("boarding_pass.txt"),
        }
    }
}
