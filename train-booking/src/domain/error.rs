//! Domain error types.
//!
//! These errors represent invariant violations when assembling a booking.
//! They are distinct from store and I/O errors.

use rust_decimal::Decimal;

/// Domain-level errors for booking invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A discounted price came out above the base fare
    #[error("ticket price {price} exceeds base fare {base}")]
    PriceExceedsBase { price: Decimal, base: Decimal },
}
