//! Arrival time estimation.
//!
//! Trains are assumed to run at a constant average speed, so the trip
//! length in hours is just `distance / speed`. That figure is rounded to
//! hundredths of an hour before it is split into whole hours and minutes.

use chrono::{NaiveDateTime, TimeDelta};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::domain::{InvalidTimestamp, parse_timestamp};

/// Errors from arrival time estimation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EtaError {
    /// Speed must be strictly positive
    #[error("speed must be positive, got {0}")]
    NonPositiveSpeed(Decimal),

    /// Distance must not be negative
    #[error("distance must not be negative, got {0}")]
    NegativeDistance(Decimal),

    /// Adding the trip length left the representable calendar
    #[error("arrival time out of range")]
    Overflow,
}

/// Trip length in hours, rounded half-up to two decimal places.
///
/// The distance is itself rounded to two places before dividing.
pub fn travel_hours(distance: Decimal, speed: Decimal) -> Result<Decimal, EtaError> {
    if speed <= Decimal::ZERO {
        return Err(EtaError::NonPositiveSpeed(speed));
    }
    if distance < Decimal::ZERO {
        return Err(EtaError::NegativeDistance(distance));
    }

    let distance = distance.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let hours = distance
        .checked_div(speed)
        .ok_or(EtaError::Overflow)?
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    Ok(hours)
}

/// Estimate the arrival time of a train.
///
/// The whole hours of [`travel_hours`] are added first, then the
/// fractional part as whole minutes (truncated). Day, month and year
/// boundaries roll over normally.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use train_booking::domain::{format_timestamp, parse_timestamp};
/// use train_booking::eta::compute_eta;
///
/// let departure = parse_timestamp("2024-01-01 10:00").unwrap();
/// let eta = compute_eta(departure, Decimal::from(150), Decimal::from(60)).unwrap();
/// assert_eq!(format_timestamp(&eta), "2024-01-01 12:30");
/// ```
pub fn compute_eta(
    departure: NaiveDateTime,
    distance: Decimal,
    speed: Decimal,
) -> Result<NaiveDateTime, EtaError> {
    let hours = travel_hours(distance, speed)?;
    let whole = hours.trunc();
    let minutes = ((hours - whole) * Decimal::from(60)).trunc();

    let whole = whole.to_i64().ok_or(EtaError::Overflow)?;
    let minutes = minutes.to_i64().ok_or(EtaError::Overflow)?;

    let eta = departure
        .checked_add_signed(TimeDelta::try_hours(whole).ok_or(EtaError::Overflow)?)
        .and_then(|t| t.checked_add_signed(TimeDelta::try_minutes(minutes)?))
        .ok_or(EtaError::Overflow)?;

    debug!(%departure, %hours, %eta, "Computed arrival time");
    Ok(eta)
}

/// Departure used when the selected departure text cannot be parsed.
///
/// This is the Unix epoch, `1970-01-01 00:00`.
pub fn sentinel_departure() -> NaiveDateTime {
    NaiveDateTime::default()
}

/// Parse the departure a passenger selected.
pub fn parse_departure(text: &str) -> Result<NaiveDateTime, InvalidTimestamp> {
    parse_timestamp(text)
}
