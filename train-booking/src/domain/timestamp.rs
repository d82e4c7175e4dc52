//! Departure and arrival timestamps.
//!
//! Timestamps carry no timezone. The catalog and receipts use a single
//! textual form, `YYYY-MM-DD HH:MM`, which is also how a departure is
//! assembled from the date and time a passenger picks.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// `chrono` format for a full timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// `chrono` format for the date half of a timestamp.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// `chrono` format for the time half of a timestamp.
pub const TIME_FORMAT: &str = "%H:%M";

/// Error returned when a timestamp string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp {text:?}: expected YYYY-MM-DD HH:MM")]
pub struct InvalidTimestamp {
    text: String,
}

impl InvalidTimestamp {
    /// The text that failed to parse.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Parse a `YYYY-MM-DD HH:MM` timestamp.
///
/// # Examples
///
/// ```
/// use train_booking::domain::parse_timestamp;
///
/// let ts = parse_timestamp("2024-01-01 10:00").unwrap();
/// assert_eq!(ts.to_string(), "2024-01-01 10:00:00");
///
/// assert!(parse_timestamp("2024-01-01").is_err());
/// assert!(parse_timestamp("2024-13-01 10:00").is_err());
/// ```
pub fn parse_timestamp(text: &str) -> Result<NaiveDateTime, InvalidTimestamp> {
    NaiveDateTime::parse_from_str(text.trim(), TIMESTAMP_FORMAT).map_err(|_| InvalidTimestamp {
        text: text.to_string(),
    })
}

/// Render a timestamp as `YYYY-MM-DD HH:MM`.
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Render the date half of a timestamp as `YYYY-MM-DD`.
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Render the time half of a timestamp as `HH:MM`.
pub fn format_time(time: &NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Join a chosen date and time into the textual departure form.
pub fn join_departure(date: &str, time: &str) -> String {
    format!("{date} {time}")
}

/// Serde adapter storing a `NaiveDateTime` as `YYYY-MM-DD HH:MM`.
pub mod serde_timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&ts.format(super::TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_timestamp(&s).map_err(serde::de::Error::custom)
    }
}
