//! Passenger identity and the issued boarding pass.

use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::gender::Gender;
use super::phone::PhoneNumber;
use super::timestamp::serde_timestamp;
use super::train::{Train, TrainId};

/// Who is travelling. Collected before any trip selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    pub name: String,
    pub email: String,
    pub phone: PhoneNumber,
    pub gender: Gender,
    pub age: u32,
}

/// A completed booking.
///
/// A pass is only ever produced by [`BoardingPass::issue`], once identity,
/// trip and computed fields are all known, and exposes no setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardingPass {
    passenger: Passenger,
    train_id: TrainId,
    origin: String,
    destination: String,
    #[serde(with = "serde_timestamp")]
    departure: NaiveDateTime,
    #[serde(with = "serde_timestamp")]
    eta: NaiveDateTime,
    ticket_price: Decimal,
}

impl BoardingPass {
    /// Issue a pass for `passenger` on `train`.
    ///
    /// `train` must already carry the passenger's chosen origin. The price
    /// is stored at two decimal places and may not exceed the base fare.
    pub fn issue(
        passenger: Passenger,
        train: &Train,
        eta: NaiveDateTime,
        ticket_price: Decimal,
    ) -> Result<Self, DomainError> {
        let mut ticket_price =
            ticket_price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        ticket_price.rescale(2);

        if ticket_price > train.price {
            return Err(DomainError::PriceExceedsBase {
                price: ticket_price,
                base: train.price,
            });
        }

        Ok(Self {
            passenger,
            train_id: train.id,
            origin: train.origin.clone(),
            destination: train.destination.clone(),
            departure: train.departure,
            eta,
            ticket_price,
        })
    }

    pub fn name(&self) -> &str {
        &self.passenger.name
    }

    pub fn email(&self) -> &str {
        &self.passenger.email
    }

    pub fn phone(&self) -> &PhoneNumber {
        &self.passenger.phone
    }

    pub fn gender(&self) -> Gender {
        self.passenger.gender
    }

    pub fn age(&self) -> u32 {
        self.passenger.age
    }

    pub fn train_id(&self) -> TrainId {
        self.train_id
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn departure(&self) -> NaiveDateTime {
        self.departure
    }

    /// Estimated arrival.
    pub fn eta(&self) -> NaiveDateTime {
        self.eta
    }

    /// Discounted fare, always at two decimal places.
    pub fn ticket_price(&self) -> Decimal {
        self.ticket_price
    }
}
