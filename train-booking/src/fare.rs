//! Fare calculation.
//!
//! Discounts are tiered and exclusive: the first tier a passenger falls
//! into decides the fare, nothing stacks.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::domain::Gender;

/// Oldest age that still travels at the child rate.
pub const CHILD_MAX_AGE: u32 = 12;

/// Youngest age that travels at the senior rate.
pub const SENIOR_MIN_AGE: u32 = 60;

/// Share of the base fare a child pays.
const CHILD_RATE: Decimal = dec!(0.5);

/// Share of the base fare a senior pays.
const SENIOR_RATE: Decimal = dec!(0.4);

/// Share of the base fare a female adult pays.
const FEMALE_RATE: Decimal = dec!(0.75);

/// Apply the passenger's discount tier to a base fare.
///
/// Tiers, first match wins:
///
/// 1. age 12 or under pays 50%
/// 2. age 60 or over pays 40%
/// 3. female passengers pay 75%
/// 4. everyone else pays the full fare
///
/// The result is rounded half-up to two decimal places.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use train_booking::domain::Gender;
/// use train_booking::fare::discount;
///
/// let base = Decimal::new(10000, 2); // 100.00
/// assert_eq!(discount(base, 10, Gender::Male), Decimal::new(5000, 2));
/// assert_eq!(discount(base, 65, Gender::Male), Decimal::new(4000, 2));
/// assert_eq!(discount(base, 30, Gender::Female), Decimal::new(7500, 2));
/// assert_eq!(discount(base, 30, Gender::Male), Decimal::new(10000, 2));
/// ```
pub fn discount(base_price: Decimal, age: u32, gender: Gender) -> Decimal {
    let price = if age <= CHILD_MAX_AGE {
        base_price * CHILD_RATE
    } else if age >= SENIOR_MIN_AGE {
        base_price * SENIOR_RATE
    } else if gender == Gender::Female {
        base_price * FEMALE_RATE
    } else {
        base_price
    };

    let mut price = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    price.rescale(2);
    price
}
