use crate::error::{StorageError, StorageResult};
use crate::models::AddressBook;
use crate::repositories::traits::Storage;
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Storage implementation keeping the book in a pretty-printed JSON file.
///
/// The file holds a list of `{ "name", "phones", "birthday" }` objects in
/// book order. Saves write a sibling `.tmp` file first and rename it over
/// the target, so an interrupted save never leaves a half-written book.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create a storage backed by the file at `path`.
    ///
    /// Nothing is touched on disk until the first save or load.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl Storage for JsonFileStorage {
    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
        }

        let json = serde_json::to_string_pretty(book)?;
        let temp = self.temp_path();
        fs::write(&temp, json).map_err(|e| StorageError::io(&temp, e))?;
        fs::rename(&temp, &self.path).map_err(|e| StorageError::io(&self.path, e))?;

        debug!("Saved {} contacts to {}", book.len(), self.path.display());
        Ok(())
    }

    fn load(&self) -> StorageResult<AddressBook> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(
                    "No address book at {}, starting empty",
                    self.path.display()
                );
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(StorageError::io(&self.path, e)),
        };

        if text.trim().is_empty() {
            return Ok(AddressBook::new());
        }

        let book: AddressBook = serde_json::from_str(&text)?;
        info!("Loaded {} contacts from {}", book.len(), self.path.display());
        Ok(book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Name;

    fn sample_book() -> AddressBook {
        let mut book = AddressBook::new();
        let record = book.get_or_create(Name::new("john").unwrap());
        record.phones_mut().add("1234567890").unwrap();
        record.birthday_mut().set("12.06.1990").unwrap();
        book.get_or_create(Name::new("jane").unwrap());
        book
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("book.json"));
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("book.json"));
        let book = sample_book();

        storage.save(&book).unwrap();
        assert_eq!(storage.load().unwrap(), book);
        assert!(!storage.temp_path().exists());
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("nested/deeper/book.json"));

        storage.save(&sample_book()).unwrap();
        assert!(storage.path().exists());
    }

    #[test]
    fn test_save_format() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("book.json"));
        storage.save(&sample_book()).unwrap();

        let raw = fs::read_to_string(storage.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                { "name": "john", "phones": ["1234567890"], "birthday": "12.06.1990" },
                { "name": "jane", "phones": [], "birthday": null }
            ])
        );
    }

    #[test]
    fn test_load_blank_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");
        fs::write(&path, "  \n").unwrap();

        assert!(JsonFileStorage::new(path).load().unwrap().is_empty());
    }

    #[test]
    fn test_load_corrupt_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");
        fs::write(&path, "not json").unwrap();

        let err = JsonFileStorage::new(path).load().unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }

    #[test]
    fn test_load_rejects_invalid_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");
        fs::write(&path, r#"[{ "name": "john", "phones": ["12"], "birthday": null }]"#).unwrap();

        assert!(JsonFileStorage::new(path).load().is_err());
    }
}
