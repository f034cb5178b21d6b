//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors a command can raise while validating or applying its arguments.
///
/// All of these are recoverable: the dispatcher turns them into an
/// `"Error: ..."` reply and the session carries on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A field failed its validation rule
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Wrong number of arguments for the invoked command
    #[error("{}", arity_message(.command, .expected, .usage))]
    WrongArity {
        command: &'static str,
        expected: usize,
        usage: &'static str,
    },

    /// The phone to edit is not on the contact
    #[error("Phone {0} not found")]
    PhoneNotFound(String),
}

fn arity_message(command: &str, expected: &usize, usage: &str) -> String {
    match *expected {
        0 => format!("Command '{}' takes no arguments", command),
        1 => format!("Command '{}' requires 1 argument: {}", command, usage),
        n => format!("Command '{}' requires {} arguments: {}", command, n, usage),
    }
}

/// Errors that can occur while saving or loading the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the storage file failed
    #[error("Storage I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The stored data could not be encoded or decoded
    #[error("Storage format error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
