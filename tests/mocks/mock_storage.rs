use contact_book::error::{StorageError, StorageResult};
use contact_book::models::AddressBook;
use contact_book::repositories::Storage;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock storage for testing.
///
/// Provides an in-memory implementation of Storage that can be seeded
/// with a book, made to fail on save, and tracks method calls for
/// verification. Clones share state, so a test can keep a handle after
/// moving one into a dispatcher.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockStorage {
    book: Arc<Mutex<Option<AddressBook>>>,
    fail_saves: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockStorage {
    /// Create an empty MockStorage with nothing saved yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The last saved book, if any.
    pub fn saved_book(&self) -> Option<AddressBook> {
        self.book.lock().unwrap().clone()
    }

    /// Make every following save fail with an I/O error.
    pub fn fail_saves(&self, fail: bool) {
        *self.fail_saves.lock().unwrap() = fail;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Storage for MockStorage {
    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.track_call("save");

        if *self.fail_saves.lock().unwrap() {
            return Err(StorageError::Io {
                path: "mock.json".into(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "mock save failure"),
            });
        }

        *self.book.lock().unwrap() = Some(book.clone());
        Ok(())
    }

    fn load(&self) -> StorageResult<AddressBook> {
        self.track_call("load");
        Ok(self.saved_book().unwrap_or_default())
    }
}
