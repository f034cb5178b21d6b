//! Contact record: a name with its phones and an optional birthday.

use super::phones::PhoneManager;
use crate::domain::{Birthday, Name, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Holds at most one birthday for a contact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BirthdayManager {
    birthday: Option<Birthday>,
}

impl BirthdayManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `raw` and store it, replacing any earlier birthday.
    pub fn set(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }

    pub fn get(&self) -> Option<Birthday> {
        self.birthday
    }

    /// `", birthday: DD.MM.YYYY"`, or nothing when unset.
    pub fn summary(&self) -> String {
        match self.birthday {
            Some(birthday) => format!(", birthday: {}", birthday),
            None => String::new(),
        }
    }
}

/// A single contact in the address book.
///
/// The name is fixed at construction; phones and birthday are edited
/// through their managers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: PhoneManager,

    #[serde(default)]
    birthday: BirthdayManager,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: PhoneManager::new(),
            birthday: BirthdayManager::new(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &PhoneManager {
        &self.phones
    }

    pub fn phones_mut(&mut self) -> &mut PhoneManager {
        &mut self.phones
    }

    pub fn birthday(&self) -> &BirthdayManager {
        &self.birthday
    }

    pub fn birthday_mut(&mut self) -> &mut BirthdayManager {
        &mut self.birthday
    }

    /// One-line description used by the `phone` and `all` commands.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}{}",
            self.name,
            self.phones.summary(),
            self.birthday.summary()
        )
    }
}
