//! Address book data model.
//!
//! A [`ContactRecord`] holds one person's name, phones and birthday; the
//! [`ContactDirectory`] owns every record and answers the upcoming-birthday
//! query.

pub mod directory;
pub mod record;

pub use directory::{ContactDirectory, UpcomingBirthday};
pub use record::ContactRecord;
