//! Ordered phone list owned by a single contact.

use crate::domain::{Phone, ValidationError};
use crate::error::{CommandError, CommandResult};
use serde::{Deserialize, Serialize};

/// Placeholder shown for a contact without any phone numbers.
pub const NO_PHONES: &str = "No phones";

/// The phone numbers of one contact, kept in insertion order.
///
/// Duplicates are allowed; adding the same number twice stores it twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneManager {
    phones: Vec<Phone>,
}

impl PhoneManager {
    /// Create an empty phone list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `raw` and append it.
    pub fn add(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.push(Phone::new(raw)?);
        Ok(())
    }

    /// Append an already validated phone.
    pub fn push(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    /// Remove every entry equal to `raw`. Missing numbers are ignored.
    pub fn remove(&mut self, raw: &str) {
        self.phones.retain(|p| p.as_str() != raw);
    }

    /// Replace the first occurrence of `old` with `new`, keeping its position.
    ///
    /// `new` is validated before anything is touched, so a bad replacement
    /// leaves the list exactly as it was.
    ///
    /// # Errors
    ///
    /// - `CommandError::Validation` if `new` is not a valid phone
    /// - `CommandError::PhoneNotFound` if `old` is not on the list
    pub fn edit(&mut self, old: &str, new: &str) -> CommandResult<()> {
        let replacement = Phone::new(new)?;

        let slot = self
            .phones
            .iter_mut()
            .find(|p| p.as_str() == old)
            .ok_or_else(|| CommandError::PhoneNotFound(old.to_string()))?;

        slot.replace(replacement);
        Ok(())
    }

    /// First entry equal to `raw`.
    pub fn find(&self, raw: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == raw)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Phone> {
        self.phones.iter()
    }

    pub fn len(&self) -> usize {
        self.phones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phones.is_empty()
    }

    /// Comma separated numbers, or [`NO_PHONES`] when there are none.
    pub fn summary(&self) -> String {
        if self.phones.is_empty() {
            return NO_PHONES.to_string();
        }

        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
