//! Contact Assistant - a console address book with birthday reminders.
//!
//! Contacts have a name, any number of ten digit phone numbers and an
//! optional birthday. The assistant answers text commands one line at a time
//! and keeps the whole book in a JSON snapshot between runs.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: Contact records and the directory, including the upcoming-birthday query
//! - **repositories**: Snapshot persistence behind the `DirectoryRepository` trait
//! - **session**: Command parsing, handlers and the read-print loop
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod session;

pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{ConfigError, ContactError, StorageError};
pub use models::{ContactDirectory, ContactRecord, UpcomingBirthday};
pub use repositories::{DirectoryRepository, JsonFileRepository};
pub use session::{Clock, FixedClock, Reply, Session, SystemClock};
