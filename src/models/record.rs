//! Contact record: one name and its phone numbers.

use crate::domain::{ContactName, PhoneNumber, ValidationError};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use tracing::debug;

/// Outcome of [`ContactRecord::add_phone`] for a valid number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneAdded {
    /// The number was appended
    Added,
    /// The number was already stored; nothing changed
    AlreadyPresent,
}

/// Outcome of [`ContactRecord::edit_phone`] for valid numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneEdit {
    /// The old number was replaced in place
    Changed,
    /// The old number is missing, or the new number is already stored
    NotFound,
}

/// A contact in the address book.
///
/// Phones keep insertion order and never contain the same digits twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRecord {
    name: ContactName,
    phones: Vec<PhoneNumber>,
}

impl ContactRecord {
    /// Create a record with no phones.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// Phones in storage order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Validate `raw` and append it unless the same number is already stored.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhoneFormat` without touching the
    /// record if `raw` is not a valid phone number.
    pub fn add_phone(&mut self, raw: &str) -> Result<PhoneAdded, ValidationError> {
        let phone = PhoneNumber::new(raw)?;

        if self.phones.contains(&phone) {
            debug!(name = %self.name, phone = %phone, "Phone already stored");
            return Ok(PhoneAdded::AlreadyPresent);
        }

        debug!(name = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(PhoneAdded::Added)
    }

    /// Remove a stored number. Returns whether anything was removed.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhoneFormat` if `raw` is not a valid
    /// phone number; an invalid number cannot be searched for.
    pub fn remove_phone(&mut self, raw: &str) -> Result<bool, ValidationError> {
        let phone = PhoneNumber::new(raw)?;

        match self.position(&phone) {
            Some(idx) => {
                debug!(name = %self.name, phone = %phone, "Removing phone");
                self.phones.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Replace `old_raw` with `new_raw`, keeping its position.
    ///
    /// Nothing changes unless `old_raw` is stored and `new_raw` is not.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhoneFormat` if either number is invalid.
    pub fn edit_phone(
        &mut self,
        old_raw: &str,
        new_raw: &str,
    ) -> Result<PhoneEdit, ValidationError> {
        let old_phone = PhoneNumber::new(old_raw)?;
        let new_phone = PhoneNumber::new(new_raw)?;

        if self.phones.contains(&new_phone) {
            return Ok(PhoneEdit::NotFound);
        }

        match self.position(&old_phone) {
            Some(idx) => {
                debug!(
                    name = %self.name,
                    old = %old_phone,
                    new = %new_phone,
                    "Changing phone"
                );
                self.phones[idx] = new_phone;
                Ok(PhoneEdit::Changed)
            }
            None => Ok(PhoneEdit::NotFound),
        }
    }

    /// Look up a stored number.
    ///
    /// Returns `None` both for numbers that are not stored and for invalid input.
    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        let phone = PhoneNumber::new(raw).ok()?;
        self.phones.iter().find(|p| **p == phone)
    }

    fn position(&self, phone: &PhoneNumber) -> Option<usize> {
        self.phones.iter().position(|p| p == phone)
    }
}

/// Wire shape of a record before the phone list is checked for duplicates.
#[derive(Deserialize)]
struct RawContactRecord {
    name: ContactName,
    #[serde(default)]
    phones: Vec<PhoneNumber>,
}

// Serde support - later copies of a stored number are dropped
impl<'de> Deserialize<'de> for ContactRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawContactRecord::deserialize(deserializer)?;
        let mut record = ContactRecord::new(raw.name);
        for phone in raw.phones {
            if !record.phones.contains(&phone) {
                record.phones.push(phone);
            }
        }
        Ok(record)
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(PhoneNumber::as_str).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))
    }
}
