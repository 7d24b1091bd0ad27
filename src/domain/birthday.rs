//! Birthday value object.

use super::errors::ValidationError;
use super::field::Field;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// chrono format matching the `YYYY.MM.DD` text form.
pub const BIRTHDAY_FORMAT: &str = "%Y.%m.%d";

// chrono accepts unpadded months and days, so the shape is checked first.
static BIRTHDAY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}\.\d{2}\.\d{2}$").expect("Failed to compile birthday regex"));

/// A contact's date of birth.
///
/// Parsed from `YYYY.MM.DD` text and stored as a [`NaiveDate`].
///
/// # Example
///
/// ```
/// use address_book::domain::{Birthday, Field};
/// use chrono::NaiveDate;
///
/// let birthday = Birthday::new("1999.11.06").unwrap();
/// assert_eq!(*birthday.value(), NaiveDate::from_ymd_opt(1999, 11, 6).unwrap());
/// assert_eq!(birthday.to_string(), "1999.11.06");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Get the underlying date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The occurrence of this birthday in `year`.
    ///
    /// A 29 February birthday falls on 28 February in non-leap years.
    pub fn in_year(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
            .unwrap_or(self.0)
    }

    /// The first occurrence of this birthday on or after `today`.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let this_year = self.in_year(today.year());
        if this_year < today {
            self.in_year(today.year() + 1)
        } else {
            this_year
        }
    }
}

impl Field for Birthday {
    type Value = NaiveDate;

    fn parse(raw: &str) -> Result<NaiveDate, ValidationError> {
        if !BIRTHDAY_PATTERN.is_match(raw) {
            return Err(ValidationError::InvalidBirthday(raw.to_string()));
        }
        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map_err(|_| ValidationError::InvalidBirthday(raw.to_string()))
    }

    fn new(raw: &str) -> Result<Self, ValidationError> {
        Self::parse(raw).map(Self)
    }

    fn value(&self) -> &NaiveDate {
        &self.0
    }

    fn set_value(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.0 = Self::parse(raw)?;
        Ok(())
    }
}

// Serde support - serialize as YYYY.MM.DD
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
