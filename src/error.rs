//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised while executing a command against the address book.
#[derive(Error, Debug)]
pub enum ContactError {
    /// A phone number, birthday or name failed validation
    #[error("{0}")]
    InvalidFormat(#[from] ValidationError),

    /// A contact or phone number referenced by the command does not exist
    #[error("{0}")]
    NotFound(String),

    /// The command was given too few arguments
    #[error("Not enough arguments. Usage: {0}")]
    MissingArgument(&'static str),

    /// Anything the command could not anticipate (I/O while saving, ...)
    #[error("{0}")]
    Unexpected(String),
}

impl ContactError {
    /// Whether the error is one a user can cause with bad input.
    pub fn is_expected(&self) -> bool {
        !matches!(self, Self::Unexpected(_))
    }
}

/// Errors that can occur while reading or writing the address book snapshot.
#[derive(Error, Debug)]
pub enum StorageError {
    /// File system failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot could not be encoded or decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<StorageError> for ContactError {
    fn from(err: StorageError) -> Self {
        ContactError::Unexpected(err.to_string())
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ContactError::NotFound("Contact not found.".to_string());
        assert_eq!(err.to_string(), "Contact not found.");

        let err = ContactError::from(ValidationError::InvalidPhone("1".to_string()));
        assert_eq!(err.to_string(), "Phone number must contain exactly 10 digits.");

        let err = ContactError::MissingArgument("add <name> <phone>");
        assert_eq!(err.to_string(), "Not enough arguments. Usage: add <name> <phone>");

        let err = ConfigError::InvalidValue {
            var: "CONTACTS_FILE".to_string(),
            reason: "Cannot be empty".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for CONTACTS_FILE: Cannot be empty");
    }

    #[test]
    fn test_storage_errors_are_unexpected() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ContactError = StorageError::from(io).into();
        assert!(!err.is_expected());
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_user_errors_are_expected() {
        assert!(ContactError::NotFound("x".to_string()).is_expected());
        assert!(ContactError::MissingArgument("phone <name>").is_expected());
        assert!(ContactError::InvalidFormat(ValidationError::EmptyName).is_expected());
    }
}
