//! Domain value objects and types.
//!
//! Type-safe wrappers for the fields of a contact: its name, phone numbers
//! and birthday. Each value object validates at construction time so invalid
//! data cannot be represented in the address book.

pub mod birthday;
pub mod contact_name;
pub mod errors;
pub mod phone;

pub use birthday::Birthday;
pub use contact_name::ContactName;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
