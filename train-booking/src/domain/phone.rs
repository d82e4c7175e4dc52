//! Passenger phone number type.

use std::fmt;

/// Error returned when a phone number matches none of the accepted formats.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid phone number: {reason}")]
pub struct InvalidPhoneNumber {
    reason: &'static str,
}

/// A ten-digit phone number, stored in canonical `(XXX) XXX-XXXX` form.
///
/// Three input layouts are accepted:
///
/// - `(XXX) XXX-XXXX`
/// - `XXX-XXX-XXXX`
/// - `XXXXXXXXXX`
///
/// # Examples
///
/// ```
/// use train_booking::domain::PhoneNumber;
///
/// let a = PhoneNumber::parse("6169321023").unwrap();
/// let b = PhoneNumber::parse("616-932-1023").unwrap();
/// let c = PhoneNumber::parse("(616) 932-1023").unwrap();
/// assert_eq!(a.as_str(), "(616) 932-1023");
/// assert_eq!(a, b);
/// assert_eq!(b, c);
///
/// assert!(PhoneNumber::parse("abc").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhoneNumber([u8; 14]);

impl PhoneNumber {
    /// Parse and normalize a phone number.
    ///
    /// Surrounding whitespace is ignored; anything else outside the three
    /// layouts is rejected.
    pub fn parse(raw: &str) -> Result<Self, InvalidPhoneNumber> {
        let bytes = raw.trim().as_bytes();

        let digits: Vec<u8> = match bytes.len() {
            14 => {
                // (XXX) XXX-XXXX
                if bytes[0] != b'(' || bytes[4] != b')' || bytes[5] != b' ' || bytes[9] != b'-' {
                    return Err(InvalidPhoneNumber {
                        reason: "expected (XXX) XXX-XXXX",
                    });
                }
                [&bytes[1..4], &bytes[6..9], &bytes[10..14]].concat()
            }
            12 => {
                // XXX-XXX-XXXX
                if bytes[3] != b'-' || bytes[7] != b'-' {
                    return Err(InvalidPhoneNumber {
                        reason: "expected XXX-XXX-XXXX",
                    });
                }
                [&bytes[0..3], &bytes[4..7], &bytes[8..12]].concat()
            }
            10 => bytes.to_vec(),
            _ => {
                return Err(InvalidPhoneNumber {
                    reason: "expected (XXX) XXX-XXXX, XXX-XXX-XXXX, or XXXXXXXXXX",
                });
            }
        };

        if !digits.iter().all(u8::is_ascii_digit) {
            return Err(InvalidPhoneNumber {
                reason: "must contain only ASCII digits 0-9",
            });
        }

        let mut out = *b"(000) 000-0000";
        out[1..4].copy_from_slice(&digits[0..3]);
        out[6..9].copy_from_slice(&digits[3..6]);
        out[10..14].copy_from_slice(&digits[6..10]);
        Ok(PhoneNumber(out))
    }

    /// Returns the canonical `(XXX) XXX-XXXX` form.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store ASCII digits and punctuation
        std::str::from_utf8(&self.0).unwrap()
    }

    /// Returns the ten bare digits.
    pub fn digits(&self) -> String {
        self.0.iter().filter(|b| b.is_ascii_digit()).map(|&b| b as char).collect()
    }
}

impl fmt::Debug for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PhoneNumber({})", self.digits())
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for PhoneNumber {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for PhoneNumber {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::parse(&s).map_err(serde::de::Error::custom)
    }
}
