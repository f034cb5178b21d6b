//! Data models for the contact book.
//!
//! This module contains the contact record, its phone and birthday managers,
//! and the address book that owns every record.

pub mod address_book;
pub mod phones;
pub mod record;

pub use address_book::AddressBook;
pub use phones::{PhoneManager, NO_PHONES};
pub use record::{BirthdayManager, Record};
