//! # API Facade
//!
//! [`RoloApi`] is the single entry point the shell talks to. It owns the
//! address book and the note collection for the lifetime of a session, plus
//! the store they came from and go back to.
//!
//! - [`RoloApi::open`] loads both collections. A missing or unreadable slot
//!   never fails the session: it yields an empty collection and a message
//!   saying so.
//! - Each command method dispatches to `commands/*.rs` with the collection it
//!   needs and returns that command's [`CmdResult`].
//! - [`RoloApi::save`] writes the collections back. Empty collections are
//!   skipped, so emptying the book in a session leaves the previous file on
//!   disk untouched.
//!
//! Like the command layer, nothing here prints. Generic over [`DataStore`]:
//! the binary runs `RoloApi<FileStore>`, tests run `RoloApi<InMemoryStore>`.

use crate::commands;
use crate::config::RoloConfig;
use crate::contacts::{AddressBook, Record};
use crate::error::Result;
use crate::fields::Phone;
use crate::notes::NoteCollection;
use crate::store::{DataStore, Slot};
use chrono::{Local, NaiveDate};
use serde::de::DeserializeOwned;

pub struct RoloApi<S: DataStore> {
    store: S,
    book: AddressBook,
    notes: NoteCollection,
    config: RoloConfig,
}

impl<S: DataStore> RoloApi<S> {
    /// Loads both collections from `store`. The returned result carries the
    /// load messages ("AddressBook is created", corrupt file warnings).
    pub fn open(store: S, config: RoloConfig) -> (Self, CmdResult) {
        let mut result = CmdResult::default();
        let book: AddressBook =
            load_slot(&store, Slot::Contacts, "AddressBook is created", &mut result);
        let notes: NoteCollection =
            load_slot(&store, Slot::Notes, "New NotesBook is created", &mut result);
        tracing::info!(contacts = book.len(), notes = notes.len(), "session opened");

        let api = Self {
            store,
            book,
            notes,
            config,
        };
        (api, result)
    }

    /// Writes every non-empty collection back to the store.
    pub fn save(&mut self) -> Result<()> {
        if !self.book.is_empty() {
            self.store.save(Slot::Contacts, &self.book)?;
        }
        if !self.notes.is_empty() {
            self.store.save(Slot::Notes, &self.notes)?;
        }
        tracing::info!(
            contacts = self.book.len(),
            notes = self.notes.len(),
            "session saved"
        );
        Ok(())
    }

    pub fn add_contact(&mut self, record: Record) -> Result<CmdResult> {
        commands::contacts::add(&mut self.book, record)
    }

    pub fn phone(&self, partial: &str) -> Result<CmdResult> {
        Ok(commands::contacts::phone(&self.book, partial))
    }

    pub fn show_all(&self) -> Result<CmdResult> {
        Ok(commands::contacts::show_all(&self.book))
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<CmdResult> {
        Ok(commands::contacts::delete(&mut self.book, name))
    }

    pub fn edit_phone(&mut self, name: &str, old: &Phone, new: Phone) -> Result<CmdResult> {
        commands::contacts::edit_phone(&mut self.book, name, old, new)
    }

    pub fn edit_birthday(&mut self, name: &str, value: &str) -> Result<CmdResult> {
        commands::contacts::edit_birthday(&mut self.book, name, value)
    }

    pub fn edit_email(&mut self, name: &str, value: &str) -> Result<CmdResult> {
        commands::contacts::edit_email(&mut self.book, name, value)
    }

    pub fn edit_address(&mut self, name: &str, value: &str) -> Result<CmdResult> {
        commands::contacts::edit_address(&mut self.book, name, value)
    }

    pub fn search_contacts(&self, term: &str) -> Result<CmdResult> {
        Ok(commands::contacts::search(&self.book, term))
    }

    /// Contacts with a birthday fewer than `depth` days after `today`.
    /// `None` uses the configured window.
    pub fn birthdays(&self, depth: Option<i64>, today: NaiveDate) -> Result<CmdResult> {
        let depth = depth.unwrap_or(self.config.birthday_window_days);
        Ok(commands::birthdays::run(&self.book, today, depth))
    }

    /// Startup reminder over the configured startup window, as of today.
    pub fn reminder(&self) -> Result<CmdResult> {
        let today = Local::now().date_naive();
        Ok(commands::birthdays::reminder(
            &self.book,
            today,
            self.config.startup_birthday_days,
        ))
    }

    pub fn write_note(&mut self, title: &str, text: &str) -> Result<CmdResult> {
        commands::notes::write(&mut self.notes, title, text)
    }

    pub fn search_notes(&self, needle: &str) -> Result<CmdResult> {
        Ok(commands::notes::search(&self.notes, needle))
    }

    pub fn remove_note(&mut self, fragment: &str) -> Result<CmdResult> {
        commands::notes::remove(&mut self.notes, fragment)
    }

    pub fn edit_note(&mut self, fragment: &str, text: &str) -> Result<CmdResult> {
        commands::notes::edit(&mut self.notes, fragment, text)
    }

    pub fn show_notes(&self) -> Result<CmdResult> {
        Ok(commands::notes::show(&self.notes))
    }

    pub fn create_tag(&mut self, name: &str) -> Result<CmdResult> {
        commands::tags::create(&mut self.notes, name)
    }

    pub fn show_tags(&self) -> Result<CmdResult> {
        Ok(commands::tags::show(&self.notes))
    }

    pub fn link_tag(&mut self, note_title: &str, tag_name: &str) -> Result<CmdResult> {
        Ok(commands::tags::link(&mut self.notes, note_title, tag_name))
    }

    pub fn find_notes_by_tag(&self, tag_name: &str) -> Result<CmdResult> {
        Ok(commands::tags::find_by_tag(&self.notes, tag_name))
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn notes(&self) -> &NoteCollection {
        &self.notes
    }

    pub fn config(&self) -> &RoloConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn load_slot<S, T>(store: &S, slot: Slot, created: &str, result: &mut CmdResult) -> T
where
    S: DataStore,
    T: DeserializeOwned + Default,
{
    match store.load(slot) {
        Ok(Some(value)) => {
            tracing::info!(slot = %slot, from = %store.describe(slot), "loaded");
            value
        }
        Ok(None) => {
            result.add_message(CmdMessage::info(created));
            T::default()
        }
        Err(e) => {
            tracing::warn!(slot = %slot, error = %e, "could not load, starting empty");
            result.add_message(CmdMessage::warning(format!(
                "Could not read {}: {}",
                store.describe(slot),
                e
            )));
            result.add_message(CmdMessage::info(created));
            T::default()
        }
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Name;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn open(store: InMemoryStore) -> (RoloApi<InMemoryStore>, CmdResult) {
        RoloApi::open(store, RoloConfig::default())
    }

    #[test]
    fn empty_store_creates_both_collections() {
        let (api, result) = open(InMemoryStore::new());
        let texts: Vec<_> = result.messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(texts, ["AddressBook is created", "New NotesBook is created"]);
        assert!(api.book().is_empty());
        assert!(api.notes().is_empty());
    }

    #[test]
    fn loads_existing_data_quietly() {
        let store = StoreFixture::new()
            .with_contact("Ann", "0000000001")
            .with_note("Shopping", "milk")
            .build();
        let (api, result) = open(store);
        assert!(result.messages.is_empty());
        assert!(api.book().contains("Ann"));
        assert_eq!(api.notes().len(), 1);
    }

    #[test]
    fn corrupt_slot_warns_and_starts_empty() {
        let store = StoreFixture::new()
            .with_raw(Slot::Contacts, "{ not json")
            .with_note("Shopping", "milk")
            .build();
        let (api, result) = open(store);

        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.messages[0].content.starts_with("Could not read contacts"));
        assert!(api.book().is_empty());
        assert_eq!(api.notes().len(), 1);
    }

    #[test]
    fn save_skips_empty_collections() {
        let (mut api, _) = open(InMemoryStore::new());
        api.save().unwrap();
        assert_eq!(api.store().writes(), 0);

        api.write_note("Shopping", "milk").unwrap();
        api.save().unwrap();
        assert_eq!(api.store().writes(), 1);
    }

    #[test]
    fn saved_session_round_trips() {
        let (mut api, _) = open(InMemoryStore::new());
        let record = Record::new(
            Name::new("Ann").unwrap(),
            Some(Phone::new("0000000001").unwrap()),
            None,
            None,
            None,
        );
        api.add_contact(record).unwrap();
        api.edit_email("Ann", "ann@test.com").unwrap();
        api.create_tag("home").unwrap();
        api.write_note("Shopping", "milk").unwrap();
        api.link_tag("Shopping", "home").unwrap();
        api.save().unwrap();

        let (reopened, result) = open(api.store);
        assert!(result.messages.is_empty());
        let ann = reopened.book().get("Ann").unwrap();
        assert_eq!(ann.email().unwrap().to_string(), "ann@test.com");
        assert_eq!(ann.phones().len(), 1);
        assert_eq!(reopened.notes().get_note_tags(1), "home");
    }

    #[test]
    fn birthdays_default_to_configured_window() {
        let (mut api, _) = open(InMemoryStore::new());
        let mut record = Record::named(Name::new("Ann").unwrap());
        record.change_birthday("20.06.1990").unwrap();
        api.add_contact(record).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

        assert!(api.birthdays(None, today).unwrap().output.is_some());
        let narrow = api.birthdays(Some(3), today).unwrap();
        assert!(narrow.output.is_none());
        assert_eq!(
            narrow.messages[0].content,
            "Nobody from your contacts celebrates birthday for the next 3 days"
        );
    }
}
