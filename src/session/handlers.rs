//! Command handlers.
//!
//! Each handler validates its arguments, applies the change to the directory
//! and returns the reply text. Failures come back as [`ContactError`] and are
//! turned into user-facing text by [`respond`].

use crate::error::{ContactError, ContactResult};
use crate::models::{ContactDirectory, ContactRecord};
use chrono::NaiveDate;
use tracing::debug;

pub const GREETING: &str = "How can I help you?";
pub const FAREWELL: &str = "Good bye!";
pub const INVALID_COMMAND: &str = "Invalid command. Type: add / change / phone / all / add-birthday / \
     show-birthday / birthdays / remove-phone / delete / save / exit";

const CONTACT_NOT_FOUND: &str = "Contact not found.";

/// Render a handler result as the line shown to the user.
pub fn respond(result: ContactResult<String>) -> String {
    match result {
        Ok(reply) => reply,
        Err(e) if e.is_expected() => format!("Error: {}", e),
        Err(e) => format!("Unexpected error: {}", e),
    }
}

/// Positional argument `index`, or `MissingArgument` with the command usage.
fn arg<'a>(args: &[&'a str], index: usize, usage: &'static str) -> ContactResult<&'a str> {
    args.get(index)
        .copied()
        .ok_or(ContactError::MissingArgument(usage))
}

fn not_found() -> ContactError {
    ContactError::NotFound(CONTACT_NOT_FOUND.to_string())
}

fn lookup<'a>(book: &'a ContactDirectory, name: &str) -> ContactResult<&'a ContactRecord> {
    book.find(name).ok_or_else(not_found)
}

fn lookup_mut<'a>(
    book: &'a mut ContactDirectory,
    name: &str,
) -> ContactResult<&'a mut ContactRecord> {
    book.find_mut(name).ok_or_else(not_found)
}

/// `add <name> <phone>`: create the contact if needed and append the phone.
///
/// The phone is validated before anything is created, so a bad number never
/// leaves an empty contact behind.
pub fn add_contact(args: &[&str], book: &mut ContactDirectory) -> ContactResult<String> {
    const USAGE: &str = "add <name> <phone>";
    let name = arg(args, 0, USAGE)?;
    let phone = arg(args, 1, USAGE)?;

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        debug!(contact = name, "phone appended to existing contact");
        return Ok("Contact updated.".to_string());
    }

    let mut record = ContactRecord::new(name)?;
    record.add_phone(phone)?;
    book.add(record);
    debug!(contact = name, "contact created");
    Ok("Contact added.".to_string())
}

/// `change <name> <old phone> <new phone>`
pub fn change_contact(args: &[&str], book: &mut ContactDirectory) -> ContactResult<String> {
    const USAGE: &str = "change <name> <old phone> <new phone>";
    let name = arg(args, 0, USAGE)?;
    let old = arg(args, 1, USAGE)?;
    let new = arg(args, 2, USAGE)?;

    lookup_mut(book, name)?.edit_phone(old, new)?;
    Ok("Phone changed.".to_string())
}

/// `phone <name>`
pub fn show_phone(args: &[&str], book: &ContactDirectory) -> ContactResult<String> {
    let name = arg(args, 0, "phone <name>")?;
    let record = lookup(book, name)?;

    if record.phones().is_empty() {
        return Ok("No phones.".to_string());
    }
    Ok(record
        .phones()
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(", "))
}

/// `all`
pub fn show_all(book: &ContactDirectory) -> String {
    if book.is_empty() {
        return "No contacts.".to_string();
    }
    book.records()
        .map(ContactRecord::describe)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[&str], book: &mut ContactDirectory) -> ContactResult<String> {
    const USAGE: &str = "add-birthday <name> <DD.MM.YYYY>";
    let name = arg(args, 0, USAGE)?;
    let birthday = arg(args, 1, USAGE)?;

    lookup_mut(book, name)?.add_birthday(birthday)?;
    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[&str], book: &ContactDirectory) -> ContactResult<String> {
    let name = arg(args, 0, "show-birthday <name>")?;
    Ok(match lookup(book, name)?.birthday() {
        Some(birthday) => birthday.to_string(),
        None => "No birthday set.".to_string(),
    })
}

/// `birthdays`: who to congratulate over the coming week.
pub fn birthdays(book: &ContactDirectory, today: NaiveDate) -> String {
    let upcoming = book.upcoming_birthdays(today);
    if upcoming.is_empty() {
        return "No birthdays next week.".to_string();
    }
    upcoming
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `remove-phone <name> <phone>`: drops the first matching phone, if any.
pub fn remove_phone(args: &[&str], book: &mut ContactDirectory) -> ContactResult<String> {
    const USAGE: &str = "remove-phone <name> <phone>";
    let name = arg(args, 0, USAGE)?;
    let phone = arg(args, 1, USAGE)?;

    lookup_mut(book, name)?.remove_phone(phone);
    Ok("Phone removed.".to_string())
}

/// `delete <name>`: unknown names are ignored.
pub fn delete_contact(args: &[&str], book: &mut ContactDirectory) -> ContactResult<String> {
    let name = arg(args, 0, "delete <name>")?;
    book.delete(name);
    Ok("Contact deleted.".to_string())
}
