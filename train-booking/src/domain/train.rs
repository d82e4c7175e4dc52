//! Schedule catalog records.

use std::fmt;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::timestamp::{format_timestamp, serde_timestamp};

/// Catalog identifier of a train slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrainId(pub u32);

impl fmt::Display for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One scheduled departure from the catalog.
///
/// The catalog owns these records; booking code only reads them, apart
/// from attaching the passenger's chosen origin via [`Train::with_origin`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Train {
    pub id: TrainId,
    pub origin: String,
    pub destination: String,
    #[serde(with = "serde_timestamp")]
    pub departure: NaiveDateTime,
    /// Route length. Never negative.
    pub distance: Decimal,
    /// Base fare before any discount. Never negative.
    pub price: Decimal,
}

impl Train {
    /// Returns this train with the passenger's chosen origin attached.
    ///
    /// The origin a passenger boards at is picked independently of the
    /// train slot, so it replaces whatever the catalog stored.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }
}

impl fmt::Display for Train {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - to {} - leaves {} - ${}",
            self.id,
            self.destination,
            format_timestamp(&self.departure),
            self.price
        )
    }
}
