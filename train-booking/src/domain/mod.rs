//! Domain types for train booking.
//!
//! This module contains the validated values a booking is built from.
//! Types enforce their invariants at construction time, so code that
//! receives them can trust their validity.

mod error;
mod gender;
mod pass;
mod phone;
mod timestamp;
mod train;

pub use error::DomainError;
pub use gender::{Gender, InvalidGender};
pub use pass::{BoardingPass, Passenger};
pub use phone::{InvalidPhoneNumber, PhoneNumber};
pub use timestamp::{
    DATE_FORMAT, InvalidTimestamp, TIME_FORMAT, TIMESTAMP_FORMAT, format_date, format_time,
    format_timestamp, join_departure, parse_timestamp, serde_timestamp,
};
pub use train::{Train, TrainId};
