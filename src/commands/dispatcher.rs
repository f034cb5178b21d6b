//! Command dispatch with uniform error replies and save-after-command.

use super::command::Command;
use crate::error::{CommandResult, StorageResult};
use crate::models::AddressBook;
use crate::repositories::Storage;
use crate::services::{Clock, SystemClock};
use tracing::{debug, warn};

pub const INVALID_COMMAND: &str = "Invalid command.";

/// Owns the address book and runs commands against it.
///
/// Every command from the table is followed by a save, whether it
/// succeeded or was answered with an `"Error: ..."` reply. Unknown names
/// are answered without touching storage.
pub struct Dispatcher<S, C = SystemClock> {
    book: AddressBook,
    storage: S,
    clock: C,
}

impl<S: Storage> Dispatcher<S> {
    /// Load the book from `storage` and dispatch against the system clock.
    pub fn new(storage: S) -> StorageResult<Self> {
        Self::with_clock(storage, SystemClock)
    }
}

impl<S: Storage, C: Clock> Dispatcher<S, C> {
    /// Load the book from `storage`, taking "today" from `clock`.
    pub fn with_clock(storage: S, clock: C) -> StorageResult<Self> {
        let book = storage.load()?;
        Ok(Self::from_parts(book, storage, clock))
    }

    /// Build a dispatcher around an already loaded book.
    pub fn from_parts(book: AddressBook, storage: S, clock: C) -> Self {
        Self {
            book,
            storage,
            clock,
        }
    }

    /// Run the command called `name` and return the text to show the user.
    ///
    /// Command failures become `"Error: {message}"` replies.
    ///
    /// # Errors
    ///
    /// Only a failed save is returned as an error; the reply is lost in
    /// that case, but the in-memory change is kept.
    pub fn dispatch(&mut self, name: &str, args: &[String]) -> StorageResult<String> {
        let Some(command) = Command::from_name(name) else {
            debug!("Unknown command: {:?}", name);
            return Ok(INVALID_COMMAND.to_string());
        };

        debug!("Dispatching {} with {} argument(s)", command, args.len());
        let result = command.execute(args, &mut self.book, &self.clock);
        let reply = error_reply(command, result);

        self.save()?;
        Ok(reply)
    }

    /// Write the current book to storage.
    pub fn save(&self) -> StorageResult<()> {
        self.storage.save(&self.book)
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

fn error_reply(command: Command, result: CommandResult<String>) -> String {
    result.unwrap_or_else(|e| {
        warn!("Command {} failed: {}", command, e);
        format!("Error: {}", e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::services::FixedClock;
    use chrono::NaiveDate;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct RecordingStorage {
        saved: RefCell<Vec<AddressBook>>,
        fail: Cell<bool>,
    }

    impl Storage for RecordingStorage {
        fn save(&self, book: &AddressBook) -> StorageResult<()> {
            if self.fail.get() {
                return Err(StorageError::io(
                    "book.json",
                    std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
                ));
            }
            self.saved.borrow_mut().push(book.clone());
            Ok(())
        }

        fn load(&self) -> StorageResult<AddressBook> {
            Ok(self.saved.borrow().last().cloned().unwrap_or_default())
        }
    }

    fn dispatcher(storage: &RecordingStorage) -> Dispatcher<&RecordingStorage, FixedClock> {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        Dispatcher::with_clock(storage, FixedClock(today)).unwrap()
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_unknown_command_does_not_save() {
        let storage = RecordingStorage::default();
        let mut dispatcher = dispatcher(&storage);

        assert_eq!(dispatcher.dispatch("remove", &[]).unwrap(), "Invalid command.");
        assert!(storage.saved.borrow().is_empty());
    }

    #[test]
    fn test_success_saves_snapshot() {
        let storage = RecordingStorage::default();
        let mut dispatcher = dispatcher(&storage);

        let reply = dispatcher
            .dispatch("add", &args(&["john", "1234567890"]))
            .unwrap();
        assert_eq!(reply, "Contact added.");

        let saved = storage.saved.borrow();
        assert_eq!(saved.len(), 1);
        assert!(saved[0].find("john").is_some());
    }

    #[test]
    fn test_errors_become_replies_and_still_save() {
        let storage = RecordingStorage::default();
        let mut dispatcher = dispatcher(&storage);

        let reply = dispatcher.dispatch("add", &args(&["john"])).unwrap();
        assert_eq!(reply, "Error: Command 'add' requires 2 arguments: name and phone");

        let reply = dispatcher.dispatch("add", &args(&["john", "12"])).unwrap();
        assert_eq!(reply, "Error: Phone number must be a string of 10 digits");

        assert_eq!(storage.saved.borrow().len(), 2);
        assert!(dispatcher.book().is_empty());
    }

    #[test]
    fn test_queries_also_save() {
        let storage = RecordingStorage::default();
        let mut dispatcher = dispatcher(&storage);

        assert_eq!(dispatcher.dispatch("all", &[]).unwrap(), "No contacts found.");
        assert_eq!(storage.saved.borrow().len(), 1);
    }

    #[test]
    fn test_save_failure_propagates() {
        let storage = RecordingStorage::default();
        let mut dispatcher = dispatcher(&storage);
        storage.fail.set(true);

        let result = dispatcher.dispatch("add", &args(&["john", "1234567890"]));
        assert!(matches!(result, Err(StorageError::Io { .. })));
        assert!(dispatcher.book().find("john").is_some());
    }

    #[test]
    fn test_loads_existing_book() {
        let storage = RecordingStorage::default();
        {
            let mut first = dispatcher(&storage);
            first.dispatch("add", &args(&["john", "1234567890"])).unwrap();
        }

        let second = dispatcher(&storage);
        assert_eq!(second.book().len(), 1);
    }
}
