//! # Contacts
//!
//! [`Record`] aggregates one person's validated fields; [`AddressBook`] keys
//! records by name.
//!
//! ## Identity
//!
//! A record's [`Name`] is its identity: two records are equal when their names
//! are, and the book holds at most one record per name. Adding a record whose
//! name is already present does not overwrite anything. The caller gets the
//! stored record back instead, so it can tell the add was a no-op.
//!
//! ## Lookups
//!
//! - [`AddressBook::find`] is a case-sensitive *substring* match and returns
//!   the first hit in name order.
//! - [`AddressBook::get`] is an exact-name lookup, used by the edit commands.
//! - [`AddressBook::search`] matches against the name and every phone.

use crate::error::{Result, RoloError};
use crate::fields::{Address, Birthday, Email, Field, Name, Phone};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Shown in place of a field that has not been set.
pub const NOT_SET: &str = "Not set";

/// Batch size used by [`AddressBook::pages`] when the caller has no preference.
pub const DEFAULT_PAGE_SIZE: usize = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Option<Birthday>,
    #[serde(default)]
    email: Option<Email>,
    #[serde(default)]
    address: Option<Address>,
}

impl Record {
    pub fn new(
        name: Name,
        phone: Option<Phone>,
        birthday: Option<Birthday>,
        email: Option<Email>,
        address: Option<Address>,
    ) -> Self {
        Self {
            name,
            phones: phone.into_iter().collect(),
            birthday,
            email,
            address,
        }
    }

    /// A record with nothing but a name.
    pub fn named(name: Name) -> Self {
        Self::new(name, None, None, None, None)
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    /// Appends the phone unless an equal one is already listed.
    pub fn add_phone(&mut self, value: &str) -> Result<()> {
        let phone = Phone::new(value)?;
        if !self.phones.contains(&phone) {
            self.phones.push(phone);
        }
        Ok(())
    }

    /// Removes the first phone with this value. Absent values are ignored.
    pub fn remove_phone(&mut self, value: &str) {
        if let Some(pos) = self.phones.iter().position(|p| p.value() == value) {
            self.phones.remove(pos);
        }
    }

    /// Validates both numbers, then swaps `old` for `new` in place.
    pub fn change_phone(&mut self, old: &str, new: &str) -> Result<()> {
        let old = Phone::new(old)?;
        let new = Phone::new(new)?;
        self.replace_phone(&old, new)
    }

    /// Swaps an already validated phone for another, keeping its position.
    ///
    /// If `new` is listed elsewhere already, `old` is dropped instead so the
    /// list stays free of duplicates.
    pub fn replace_phone(&mut self, old: &Phone, new: Phone) -> Result<()> {
        let pos = self
            .phones
            .iter()
            .position(|p| p == old)
            .ok_or_else(|| RoloError::PhoneNotFound(old.value().to_string()))?;

        if *old != new && self.phones.contains(&new) {
            self.phones.remove(pos);
        } else {
            self.phones[pos] = new;
        }
        tracing::debug!(contact = %self.name, "phone changed");
        Ok(())
    }

    pub fn change_birthday(&mut self, value: &str) -> Result<()> {
        self.birthday = Some(Birthday::new(value)?);
        Ok(())
    }

    pub fn change_email(&mut self, value: &str) -> Result<()> {
        self.email = Some(Email::new(value)?);
        Ok(())
    }

    pub fn change_address(&mut self, value: &str) -> Result<()> {
        self.address = Some(Address::new(value)?);
        Ok(())
    }

    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.value() == value)
    }

    /// Days until the next birthday, counted from the local clock date.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next occurrence of the birthday.
    ///
    /// A birthday falling on `today` is 0 days away; the count only rolls over
    /// to next year once this year's date has passed. 29 February is
    /// celebrated on 28 February in non-leap years.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        let born = self.birthday.as_ref()?.date()?;

        let mut next = anniversary(born, today.year())?;
        if today > next {
            next = anniversary(born, today.year() + 1)?;
        }
        Some((next - today).num_days())
    }

    /// Phones joined with `", "` for the `phone` command.
    pub fn phones_display(&self) -> String {
        if self.phones.is_empty() {
            "Contact has no phones".to_string()
        } else {
            self.phones_joined(", ")
        }
    }

    pub(crate) fn phones_joined(&self, sep: &str) -> String {
        self.phones
            .iter()
            .map(|p| p.value())
            .collect::<Vec<_>>()
            .join(sep)
    }
}

fn anniversary(born: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, born.month(), born.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}

pub(crate) fn or_not_set<F: Field>(field: Option<&F>) -> &str {
    field.map(|f| f.value()).unwrap_or(NOT_SET)
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Record {}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}, email: {}, address: {}",
            self.name,
            self.phones_joined("; "),
            or_not_set(self.birthday()),
            or_not_set(self.email()),
            or_not_set(self.address()),
        )
    }
}

/// Contact records keyed by name, iterated in name order.
///
/// Serialized as a plain name-to-record map. Loading rebuilds the map through
/// [`AddressBook::add_record`], so a record is always keyed by its own name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, Record>", into = "BTreeMap<String, Record>")]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl From<BTreeMap<String, Record>> for AddressBook {
    fn from(stored: BTreeMap<String, Record>) -> Self {
        let mut book = AddressBook::new();
        for (key, record) in stored {
            if key != record.name.value() {
                tracing::warn!(
                    key = %key,
                    contact = %record.name,
                    "record stored under another name, rekeyed"
                );
            }
            book.add_record(record);
        }
        book
    }
}

impl From<AddressBook> for BTreeMap<String, Record> {
    fn from(book: AddressBook) -> Self {
        book.records
    }
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `record` unless its name is taken; returns whichever record ends
    /// up stored under that name.
    pub fn add_record(&mut self, record: Record) -> &Record {
        let key = record.name.value().to_string();
        if self.records.contains_key(&key) {
            tracing::debug!(contact = %key, "contact already stored, add ignored");
        } else {
            tracing::debug!(contact = %key, "contact added");
        }
        self.records.entry(key).or_insert(record)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// First record whose name contains `partial` (case-sensitive).
    pub fn find(&self, partial: &str) -> Option<&Record> {
        self.records
            .values()
            .find(|r| r.name.value().contains(partial))
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Records whose name or any phone contains `term`.
    pub fn search(&self, term: &str) -> Vec<&Record> {
        self.records
            .values()
            .filter(|r| {
                r.name.value().contains(term) || r.phones.iter().any(|p| p.value().contains(term))
            })
            .collect()
    }

    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.remove(name);
        if removed.is_some() {
            tracing::debug!(contact = %name, "contact deleted");
        }
        removed
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Lazily yields the records in batches of `size` (0 is treated as 1).
    /// Each call starts again from the first record.
    pub fn pages(&self, size: usize) -> Pages<'_> {
        Pages {
            inner: self.records.values(),
            size: size.max(1),
        }
    }

    pub fn table(&self) -> String {
        crate::render::contacts_table(self.records())
    }
}

/// Iterator returned by [`AddressBook::pages`].
pub struct Pages<'a> {
    inner: std::collections::btree_map::Values<'a, String, Record>,
    size: usize,
}

impl<'a> Iterator for Pages<'a> {
    type Item = Vec<&'a Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let page: Vec<&Record> = self.inner.by_ref().take(self.size).collect();
        if page.is_empty() {
            None
        } else {
            Some(page)
        }
    }
}
