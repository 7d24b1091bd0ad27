//! A single contact in the address book.

use crate::domain::{Birthday, Field, Name, Phone};
use crate::error::{RecordError, RecordResult};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// A contact: a name, an ordered list of phone numbers, and an optional birthday.
///
/// The name is fixed at construction. Phones keep insertion order and may
/// contain the same number more than once.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: Name,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::Validation` if `birthday` is given and is not a
    /// valid `YYYY.MM.DD` date.
    pub fn new(name: &str, birthday: Option<&str>) -> RecordResult<Self> {
        let name = Name::new(name)?;
        let birthday = birthday.map(Birthday::new).transpose()?;

        Ok(Self {
            name,
            phones: Vec::new(),
            birthday,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Set or replace the birthday.
    ///
    /// An invalid value leaves the current birthday as it was.
    pub fn set_birthday(&mut self, birthday: &str) -> RecordResult<()> {
        match self.birthday.as_mut() {
            Some(existing) => existing.set_value(birthday)?,
            None => self.birthday = Some(Birthday::new(birthday)?),
        }
        Ok(())
    }

    /// Append a phone number. Duplicates are allowed.
    pub fn add_phone(&mut self, phone: &str) -> RecordResult<()> {
        self.phones.push(Phone::new(phone)?);
        debug!(contact = %self.name, phone = %phone, "Phone added");
        Ok(())
    }

    /// Find the first phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Remove the first phone equal to `phone`.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::PhoneNotFound` if the number is not on the record.
    pub fn remove_phone(&mut self, phone: &str) -> RecordResult<()> {
        let index = self
            .position_of(phone)
            .ok_or_else(|| RecordError::PhoneNotFound(phone.to_string()))?;
        self.phones.remove(index);
        debug!(contact = %self.name, phone = %phone, "Phone removed");
        Ok(())
    }

    /// Replace the first phone equal to `old` with `new`, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::PhoneNotFound` if `old` is not on the record, or
    /// `RecordError::Validation` if `new` is not a valid phone number. The
    /// phone list is unchanged in both cases.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> RecordResult<()> {
        let index = self
            .position_of(old)
            .ok_or_else(|| RecordError::PhoneNotFound(old.to_string()))?;
        self.phones[index].set_value(new)?;
        debug!(contact = %self.name, old = %old, new = %new, "Phone edited");
        Ok(())
    }

    /// Days from the local date until the next birthday.
    ///
    /// Returns `None` when no birthday is recorded.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next occurrence of the birthday.
    ///
    /// A birthday falling on `today` yields `Some(0)`; one already past this
    /// year is counted to next year's date.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        let Some(birthday) = self.birthday.as_ref() else {
            info!(contact = %self.name, "Contact has no birthday on record");
            return None;
        };

        let next = birthday.next_occurrence(today);
        let days = (next - today).num_days();
        debug!(
            contact = %self.name,
            next_birthday = %next,
            days = days,
            "Computed days to birthday"
        );
        Some(days)
    }

    fn position_of(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == phone)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))
    }
}
