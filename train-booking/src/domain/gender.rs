//! Passenger gender.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a gender string is neither "male" nor "female".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid gender: expected Male or Female")]
pub struct InvalidGender;

/// Passenger gender as recorded on a boarding pass.
///
/// # Examples
///
/// ```
/// use train_booking::domain::Gender;
///
/// assert_eq!(Gender::parse("FEMALE").unwrap().as_str(), "Female");
/// assert_eq!(Gender::parse("male").unwrap(), Gender::Male);
/// assert!(Gender::parse("xyz").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Parse a gender, ignoring letter case and surrounding whitespace.
    pub fn parse(raw: &str) -> Result<Self, InvalidGender> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("male") {
            Ok(Gender::Male)
        } else if raw.eq_ignore_ascii_case("female") {
            Ok(Gender::Female)
        } else {
            Err(InvalidGender)
        }
    }

    /// Returns the capitalized form, `"Male"` or `"Female"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
