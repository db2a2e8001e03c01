use super::{DataStore, Slot};
use crate::error::Result;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    slots: HashMap<Slot, String>,
    writes: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of writes performed so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl DataStore for InMemoryStore {
    fn read(&self, slot: Slot) -> Result<Option<String>> {
        Ok(self.slots.get(&slot).cloned())
    }

    fn write(&mut self, slot: Slot, data: &str) -> Result<()> {
        self.slots.insert(slot, data.to_string());
        self.writes += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::contacts::{AddressBook, Record};
    use crate::fields::{Name, Phone};
    use crate::notes::NoteCollection;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        book: AddressBook,
        notes: NoteCollection,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                book: AddressBook::new(),
                notes: NoteCollection::new(),
            }
        }

        pub fn with_contact(mut self, name: &str, phone: &str) -> Self {
            self.book.add_record(Record::new(
                Name::new(name).unwrap(),
                Some(Phone::new(phone).unwrap()),
                None,
                None,
                None,
            ));
            self
        }

        pub fn with_note(mut self, title: &str, text: &str) -> Self {
            self.notes.add_note(title, text);
            self
        }

        pub fn with_raw(mut self, slot: Slot, data: &str) -> Self {
            self.store.slots.insert(slot, data.to_string());
            self
        }

        /// Writes the collected contacts and notes into their slots.
        pub fn build(mut self) -> InMemoryStore {
            if !self.book.is_empty() {
                self.store.save(Slot::Contacts, &self.book).unwrap();
            }
            if !self.notes.is_empty() {
                self.store.save(Slot::Notes, &self.notes).unwrap();
            }
            self.store.writes = 0;
            self.store
        }
    }
}
