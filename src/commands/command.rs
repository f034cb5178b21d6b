//! The closed set of contact book commands.

use crate::domain::{Name, Phone};
use crate::error::{CommandError, CommandResult};
use crate::models::AddressBook;
use crate::services::{BirthdayCalculator, Clock};
use std::fmt;

pub const CONTACT_ADDED: &str = "Contact added.";
pub const PHONE_UPDATED: &str = "Phone number updated.";
pub const BIRTHDAY_ADDED: &str = "Birthday added.";
pub const CONTACT_NOT_FOUND: &str = "Contact not found.";
pub const BIRTHDAY_NOT_SET: &str = "Birthday not set.";
pub const NO_CONTACTS: &str = "No contacts found.";
pub const NO_UPCOMING_BIRTHDAYS: &str = "No upcoming birthdays in the next 7 days.";

/// Every command the dispatcher knows, by the name users type.
const COMMAND_TABLE: &[(&str, Command)] = &[
    ("add", Command::Add),
    ("change", Command::Change),
    ("phone", Command::ShowPhone),
    ("all", Command::ShowAll),
    ("add-birthday", Command::AddBirthday),
    ("show-birthday", Command::ShowBirthday),
    ("birthdays", Command::Birthdays),
];

/// A contact book operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// `add <name> <phone>`
    Add,
    /// `change <name> <old phone> <new phone>`
    Change,
    /// `phone <name>`
    ShowPhone,
    /// `all`
    ShowAll,
    /// `add-birthday <name> <DD.MM.YYYY>`
    AddBirthday,
    /// `show-birthday <name>`
    ShowBirthday,
    /// `birthdays`
    Birthdays,
}

impl Command {
    /// Look up a command by its (already lower-cased) name.
    pub fn from_name(name: &str) -> Option<Self> {
        COMMAND_TABLE
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, command)| *command)
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::Add => "add",
            Command::Change => "change",
            Command::ShowPhone => "phone",
            Command::ShowAll => "all",
            Command::AddBirthday => "add-birthday",
            Command::ShowBirthday => "show-birthday",
            Command::Birthdays => "birthdays",
        }
    }

    /// Number of arguments the command takes.
    pub fn arity(self) -> usize {
        match self {
            Command::ShowAll | Command::Birthdays => 0,
            Command::ShowPhone | Command::ShowBirthday => 1,
            Command::Add | Command::AddBirthday => 2,
            Command::Change => 3,
        }
    }

    fn usage(self) -> &'static str {
        match self {
            Command::Add => "name and phone",
            Command::Change => "name, old_phone, new_phone",
            Command::ShowPhone | Command::ShowBirthday => "name",
            Command::AddBirthday => "name and birthday",
            Command::ShowAll | Command::Birthdays => "",
        }
    }

    fn wrong_arity(self) -> CommandError {
        CommandError::WrongArity {
            command: self.name(),
            expected: self.arity(),
            usage: self.usage(),
        }
    }

    /// Run the command against `book`.
    ///
    /// The argument count is checked before the book is touched. Lookup
    /// misses ("Contact not found.", "Birthday not set.") are ordinary
    /// replies, not errors.
    ///
    /// # Errors
    ///
    /// - `CommandError::WrongArity` if `args` has the wrong length
    /// - `CommandError::Validation` for a malformed name, phone or birthday
    /// - `CommandError::PhoneNotFound` when `change` targets an unknown phone
    pub fn execute(
        self,
        args: &[String],
        book: &mut AddressBook,
        clock: &dyn Clock,
    ) -> CommandResult<String> {
        match (self, args) {
            (Command::Add, [name, phone]) => add_contact(book, name, phone),
            (Command::Change, [name, old, new]) => change_phone(book, name, old, new),
            (Command::ShowPhone, [name]) => Ok(show_phone(book, name)),
            (Command::ShowAll, []) => Ok(show_all(book)),
            (Command::AddBirthday, [name, birthday]) => add_birthday(book, name, birthday),
            (Command::ShowBirthday, [name]) => Ok(show_birthday(book, name)),
            (Command::Birthdays, []) => Ok(upcoming_birthdays(book, clock)),
            _ => Err(self.wrong_arity()),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn add_contact(book: &mut AddressBook, name: &str, phone: &str) -> CommandResult<String> {
    // Both fields are validated before a new record can be created
    let name = Name::new(name)?;
    let phone = Phone::new(phone)?;

    book.get_or_create(name).phones_mut().push(phone);
    Ok(CONTACT_ADDED.to_string())
}

fn change_phone(book: &mut AddressBook, name: &str, old: &str, new: &str) -> CommandResult<String> {
    let Some(record) = book.find_mut(name) else {
        return Ok(CONTACT_NOT_FOUND.to_string());
    };

    record.phones_mut().edit(old, new)?;
    Ok(PHONE_UPDATED.to_string())
}

fn show_phone(book: &AddressBook, name: &str) -> String {
    book.find(name)
        .map(|record| record.render())
        .unwrap_or_else(|| CONTACT_NOT_FOUND.to_string())
}

fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return NO_CONTACTS.to_string();
    }

    book.records()
        .map(|record| record.render())
        .collect::<Vec<_>>()
        .join("\n")
}

fn add_birthday(book: &mut AddressBook, name: &str, birthday: &str) -> CommandResult<String> {
    let Some(record) = book.find_mut(name) else {
        return Ok(CONTACT_NOT_FOUND.to_string());
    };

    record.birthday_mut().set(birthday)?;
    Ok(BIRTHDAY_ADDED.to_string())
}

fn show_birthday(book: &AddressBook, name: &str) -> String {
    let Some(record) = book.find(name) else {
        return CONTACT_NOT_FOUND.to_string();
    };

    match record.birthday().get() {
        Some(birthday) => format!("{}'s birthday: {}", record.name(), birthday),
        None => BIRTHDAY_NOT_SET.to_string(),
    }
}

fn upcoming_birthdays(book: &AddressBook, clock: &dyn Clock) -> String {
    let upcoming = BirthdayCalculator::new().upcoming(book.records(), clock.today());
    if upcoming.is_empty() {
        return NO_UPCOMING_BIRTHDAYS.to_string();
    }

    upcoming
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
