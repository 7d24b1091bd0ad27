//! Domain validation errors.

use std::fmt;

/// Errors that can occur when a field value fails validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is not exactly ten decimal digits.
    InvalidPhone(String),

    /// The provided birthday does not match `YYYY.MM.DD` or is not a real date.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number format: {}", phone),
            Self::InvalidBirthday(birthday) => {
                write!(f, "Invalid birthday format (expected YYYY.MM.DD): {}", birthday)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
