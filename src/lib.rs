//! Contact Book - an interactive personal contact directory.
//!
//! Contacts are stored by name with any number of ten-digit phone numbers
//! and an optional birthday. A line-based session drives a fixed set of
//! commands, saving the whole book after each one.
//!
//! # Architecture
//!
//! - **domain**: Validated field types (name, phone, birthday)
//! - **models**: Records, their phone/birthday managers, and the address book
//! - **services**: Upcoming birthday calculation and the clock it reads
//! - **commands**: Command set, dispatcher, and session handling
//! - **repositories**: Storage abstraction and the JSON file implementation
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;

pub use commands::{parse_input, Command, Dispatcher, Reply, Session};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{CommandError, ConfigError, StorageError};
pub use models::{AddressBook, BirthdayManager, PhoneManager, Record};
pub use repositories::{JsonFileStorage, Storage};
pub use services::{BirthdayCalculator, Clock, FixedClock, SystemClock, UpcomingBirthday};
