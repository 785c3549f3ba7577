//! The address book: every contact keyed by name, plus the birthday query.

use super::record::ContactRecord;
use crate::domain::{Birthday, ContactName};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::warn;

/// How many days ahead of today the birthday query looks (inclusive).
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

/// Format of congratulation dates in the birthday report.
pub const CONGRATULATION_FORMAT: &str = "%Y.%m.%d";

/// A contact whose birthday is coming up, with the day to congratulate them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: ContactName,

    /// The birthday moved off the weekend onto the following Monday.
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    /// Congratulation date as `YYYY.MM.DD`.
    pub fn formatted_date(&self) -> String {
        self.congratulation_date
            .format(CONGRATULATION_FORMAT)
            .to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.formatted_date(), self.name)
    }
}

/// All contacts, keyed by name, in the order they were first added.
///
/// The map is private so every insertion goes through [`ContactDirectory::add`],
/// which keys the record by its own name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDirectory {
    records: IndexMap<ContactName, ContactRecord>,
}

impl ContactDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record with the same name.
    ///
    /// A replaced record keeps its original position.
    pub fn add(&mut self, record: ContactRecord) {
        self.records.insert(record.name().clone(), record);
    }

    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.get(name)
    }

    /// Crate-private: swapping out the whole record would break the key.
    pub(crate) fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.get_mut(name)
    }

    /// Remove a record by name. Missing names are ignored.
    pub fn delete(&mut self, name: &str) -> Option<ContactRecord> {
        self.records.shift_remove(name)
    }

    /// Records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &ContactRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts with a birthday from `today` through the next seven days.
    ///
    /// A birthday that has already passed this year is looked up next year.
    /// Birthdays on a Saturday or Sunday are congratulated on the following
    /// Monday. Results follow directory order, not date order.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.records
            .values()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let next = match next_occurrence(birthday, today) {
                    Some(date) => date,
                    None => {
                        warn!(contact = %record.name(), "birthday falls outside the supported calendar");
                        return None;
                    }
                };

                let diff = (next - today).num_days();
                if !(0..=UPCOMING_WINDOW_DAYS).contains(&diff) {
                    return None;
                }

                let congratulation_date = roll_off_weekend(next)?;
                Some(UpcomingBirthday {
                    name: record.name().clone(),
                    congratulation_date,
                })
            })
            .collect()
    }
}

/// The first anniversary of `birthday` on or after `today`.
fn next_occurrence(birthday: &Birthday, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = birthday.anniversary_in(today.year())?;
    if this_year < today {
        birthday.anniversary_in(today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Saturday moves two days and Sunday one day forward. Applied once.
fn roll_off_weekend(date: NaiveDate) -> Option<NaiveDate> {
    match date.weekday() {
        Weekday::Sat => date.checked_add_days(Days::new(2)),
        Weekday::Sun => date.checked_add_days(Days::new(1)),
        _ => Some(date),
    }
}

// The snapshot is a plain list of records; the keys are rebuilt on load.
impl Serialize for ContactDirectory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.records.values())
    }
}

impl<'de> Deserialize<'de> for ContactDirectory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<ContactRecord>::deserialize(deserializer)?;
        let mut directory = ContactDirectory::new();
        for record in records {
            directory.add(record);
        }
        Ok(directory)
    }
}
