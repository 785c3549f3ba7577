//! Contact record: one person in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use crate::error::{ContactError, ContactResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder shown in place of the phone list when a contact has none.
const NO_PHONES: &str = "no phones";

/// A contact in the address book.
///
/// The name is fixed at construction and is the record's key in
/// [`ContactDirectory`](super::ContactDirectory). Phones keep their insertion
/// order and may repeat; there is at most one birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    name: ContactName,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default)]
    birthday: Option<Birthday>,
}

impl ContactRecord {
    /// Create a contact with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    ///
    /// Repeated numbers are kept as separate entries.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.phones.push(PhoneNumber::new(phone)?);
        Ok(())
    }

    /// First phone equal to `phone`, if any.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Remove the first phone equal to `phone`.
    ///
    /// Returns whether anything was removed.
    pub fn remove_phone(&mut self, phone: &str) -> bool {
        match self.phones.iter().position(|p| p.as_str() == phone) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace the first occurrence of `old` with `new` in place.
    ///
    /// # Errors
    ///
    /// `ContactError::NotFound` when `old` is not on the record and
    /// `ContactError::InvalidFormat` when `new` is not a valid phone. The
    /// phone list is untouched in both cases.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> ContactResult<()> {
        let phone = self
            .phones
            .iter_mut()
            .find(|p| p.as_str() == old)
            .ok_or_else(|| ContactError::NotFound("Old phone number not found.".to_string()))?;

        phone.set(new)?;
        Ok(())
    }

    /// Parse and set the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::parse(birthday)?);
        Ok(())
    }

    /// Human-readable one-line summary of the contact.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = if self.phones.is_empty() {
            NO_PHONES.to_string()
        } else {
            self.phones
                .iter()
                .map(PhoneNumber::as_str)
                .collect::<Vec<_>>()
                .join("; ")
        };

        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone_list(record: &ContactRecord) -> Vec<&str> {
        record.phones().iter().map(PhoneNumber::as_str).collect()
    }

    #[test]
    fn test_record_new() {
        let record = ContactRecord::new("Ann").unwrap();
        assert_eq!(record.name().as_str(), "Ann");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_record_requires_name() {
        assert_eq!(ContactRecord::new(""), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_add_phone_keeps_duplicates() {
        let mut record = ContactRecord::new("Bob").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_phone("1234567890").unwrap();
        assert_eq!(phone_list(&record), vec!["1234567890", "1234567890"]);
    }

    #[test]
    fn test_add_phone_rejects_invalid() {
        let mut record = ContactRecord::new("Bob").unwrap();
        assert!(record.add_phone("12345").is_err());
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_find_phone() {
        let mut record = ContactRecord::new("Bob").unwrap();
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();

        assert_eq!(
            record.find_phone("2222222222").map(PhoneNumber::as_str),
            Some("2222222222")
        );
        assert!(record.find_phone("3333333333").is_none());
    }

    #[test]
    fn test_remove_phone_removes_first_match_only() {
        let mut record = ContactRecord::new("Bob").unwrap();
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.add_phone("1111111111").unwrap();

        assert!(record.remove_phone("1111111111"));
        assert_eq!(phone_list(&record), vec!["2222222222", "1111111111"]);

        assert!(!record.remove_phone("9999999999"));
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn test_edit_phone_in_place() {
        let mut record = ContactRecord::new("Bob").unwrap();
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();

        record.edit_phone("1111111111", "3333333333").unwrap();
        assert_eq!(phone_list(&record), vec!["3333333333", "2222222222"]);
    }

    #[test]
    fn test_edit_phone_missing_old() {
        let mut record = ContactRecord::new("Bob").unwrap();
        record.add_phone("1111111111").unwrap();

        let err = record.edit_phone("0000000000", "3333333333").unwrap_err();
        assert!(matches!(err, ContactError::NotFound(_)));
        assert_eq!(err.to_string(), "Old phone number not found.");
        assert_eq!(phone_list(&record), vec!["1111111111"]);
    }

    #[test]
    fn test_edit_phone_invalid_new_keeps_old() {
        let mut record = ContactRecord::new("Bob").unwrap();
        record.add_phone("1111111111").unwrap();

        let err = record.edit_phone("1111111111", "12-34").unwrap_err();
        assert!(matches!(err, ContactError::InvalidFormat(_)));
        assert_eq!(phone_list(&record), vec!["1111111111"]);
    }

    #[test]
    fn test_add_birthday_last_write_wins() {
        let mut record = ContactRecord::new("Ann").unwrap();
        record.add_birthday("15.06.1990").unwrap();
        record.add_birthday("16.07.1991").unwrap();
        assert_eq!(record.birthday().unwrap().to_string(), "16.07.1991");

        assert!(record.add_birthday("16/07/1991").is_err());
        assert_eq!(record.birthday().unwrap().to_string(), "16.07.1991");
    }

    #[test]
    fn test_describe() {
        let mut record = ContactRecord::new("Ann").unwrap();
        assert_eq!(record.describe(), "Contact name: Ann, phones: no phones");

        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        assert_eq!(
            record.describe(),
            "Contact name: Ann, phones: 1111111111; 2222222222"
        );

        record.add_birthday("15.06.1990").unwrap();
        assert_eq!(
            record.describe(),
            "Contact name: Ann, phones: 1111111111; 2222222222, birthday: 15.06.1990"
        );
        assert_eq!(record.describe(), record.describe());
    }

    #[test]
    fn test_record_serde_validates() {
        let json = r#"{"name":"Ann","phones":["1111111111"],"birthday":"15.06.1990"}"#;
        let record: ContactRecord = serde_json::from_str(json).unwrap();
        assert_eq!(phone_list(&record), vec!["1111111111"]);

        let json = r#"{"name":"Ann","phones":["111"]}"#;
        assert!(serde_json::from_str::<ContactRecord>(json).is_err());

        let json = r#"{"name":"Ann"}"#;
        let record: ContactRecord = serde_json::from_str(json).unwrap();
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }
}
