//! # Storage Layer
//!
//! rolo persists two slots: the address book and the note collection. The
//! [`DataStore`] trait moves raw serialized text in and out of a slot; the
//! provided [`DataStore::load`] and [`DataStore::save`] methods handle the
//! JSON encoding so every backend stores the same format.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one JSON file per slot in the data directory
//!   (`contacts.json` and `notes.json` unless configured otherwise). Writes
//!   go to a temporary file first and are renamed into place.
//! - [`memory::InMemoryStore`]: slots held in a map, for tests.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── config.json     # RoloConfig (optional)
//! ├── contacts.json   # { "<name>": Record, ... }
//! └── notes.json      # notes, tag registry, note→tag links, id counters
//! ```

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

pub mod fs;
pub mod memory;

/// A named unit of durable storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Contacts,
    Notes,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Contacts => f.write_str("contacts"),
            Slot::Notes => f.write_str("notes"),
        }
    }
}

/// Abstract interface for slot storage.
pub trait DataStore {
    /// Raw contents of a slot, `None` if nothing has been stored yet.
    fn read(&self, slot: Slot) -> Result<Option<String>>;

    /// Replace the contents of a slot.
    fn write(&mut self, slot: Slot, data: &str) -> Result<()>;

    /// Human readable location of a slot, used in messages.
    fn describe(&self, slot: Slot) -> String {
        slot.to_string()
    }

    fn load<T: DeserializeOwned>(&self, slot: Slot) -> Result<Option<T>>
    where
        Self: Sized,
    {
        match self.read(slot)? {
            Some(data) => Ok(Some(serde_json::from_str(&data)?)),
            None => Ok(None),
        }
    }

    fn save<T: Serialize>(&mut self, slot: Slot, value: &T) -> Result<()>
    where
        Self: Sized,
    {
        let data = serde_json::to_string_pretty(value)?;
        self.write(slot, &data)
    }
}
