use crate::error::StorageResult;
use crate::models::AddressBook;

/// Durable storage for the whole address book.
///
/// Provides abstraction over where and how the book is kept, enabling
/// different implementations (JSON file, in-memory mock).
pub trait Storage {
    /// Persist a full snapshot of the book, replacing the previous one.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;

    /// Read the last saved book.
    ///
    /// Returns an empty book when nothing has been saved yet; only
    /// unreadable or corrupt data is an error.
    fn load(&self) -> StorageResult<AddressBook>;
}

impl<T: Storage + ?Sized> Storage for &T {
    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        (**self).save(book)
    }

    fn load(&self) -> StorageResult<AddressBook> {
        (**self).load()
    }
}
