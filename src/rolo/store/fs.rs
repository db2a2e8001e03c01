use super::{DataStore, Slot};
use crate::config::RoloConfig;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    root: PathBuf,
    contacts_file: String,
    notes_file: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        let defaults = RoloConfig::default();
        Self {
            root,
            contacts_file: defaults.contacts_file,
            notes_file: defaults.notes_file,
        }
    }

    /// Uses the slot file names from `config`.
    pub fn with_config(mut self, config: &RoloConfig) -> Self {
        self.contacts_file = config.contacts_file.clone();
        self.notes_file = config.notes_file.clone();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn slot_path(&self, slot: Slot) -> PathBuf {
        match slot {
            Slot::Contacts => self.root.join(&self.contacts_file),
            Slot::Notes => self.root.join(&self.notes_file),
        }
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn read(&self, slot: Slot) -> Result<Option<String>> {
        let path = self.slot_path(slot);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn write(&mut self, slot: Slot, data: &str) -> Result<()> {
        self.ensure_dir()?;
        let target = self.slot_path(slot);
        let tmp = self
            .root
            .join(format!(".{}-{}.tmp", slot, std::process::id()));
        fs::write(&tmp, data)?;
        if let Err(e) = fs::rename(&tmp, &target) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        tracing::info!(path = %target.display(), "saved {}", slot);
        Ok(())
    }

    fn describe(&self, slot: Slot) -> String {
        self.slot_path(slot).display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contacts::{AddressBook, Record};
    use crate::fields::{Field, Name, Phone};
    use crate::notes::NoteCollection;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("data"));
        (dir, store)
    }

    #[test]
    fn missing_slot_reads_as_none() {
        let (_dir, store) = setup();
        assert!(store.read(Slot::Contacts).unwrap().is_none());
        assert!(store.load::<AddressBook>(Slot::Contacts).unwrap().is_none());
    }

    #[test]
    fn address_book_round_trip() {
        let (_dir, mut store) = setup();
        let mut book = AddressBook::new();
        let mut ann = Record::new(
            Name::new("Ann").unwrap(),
            Some(Phone::new("0123456789").unwrap()),
            None,
            None,
            None,
        );
        ann.change_birthday("15.06.1990").unwrap();
        ann.change_email("ann@test.com").unwrap();
        ann.change_address("Kyiv").unwrap();
        book.add_record(ann);
        book.add_record(Record::named(Name::new("Bob").unwrap()));

        store.save(Slot::Contacts, &book).unwrap();
        let loaded: AddressBook = store.load(Slot::Contacts).unwrap().unwrap();

        let names: Vec<_> = loaded.records().map(|r| r.name().value()).collect();
        assert_eq!(names, ["Ann", "Bob"]);
        let ann = loaded.get("Ann").unwrap();
        assert_eq!(ann.phones()[0].value(), "0123456789");
        assert_eq!(ann.birthday().unwrap().value(), "15.06.1990");
        assert_eq!(ann.email().unwrap().value(), "ann@test.com");
        assert_eq!(ann.address().unwrap().value(), "Kyiv");
        assert!(loaded.get("Bob").unwrap().email().is_none());
    }

    #[test]
    fn write_leaves_no_temp_files() {
        let (_dir, mut store) = setup();
        store.save(Slot::Notes, &NoteCollection::new()).unwrap();

        for entry in fs::read_dir(store.root()).unwrap() {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_str().unwrap().to_string();
            assert!(!name.ends_with(".tmp"), "leftover temp file: {}", name);
        }
        assert!(store.slot_path(Slot::Notes).exists());
    }

    #[test]
    fn failed_rename_removes_temp_file() {
        let (_dir, mut store) = setup();
        let target = store.slot_path(Slot::Notes);
        fs::create_dir_all(target.join("occupied")).unwrap();

        assert!(store.save(Slot::Notes, &NoteCollection::new()).is_err());
        for entry in fs::read_dir(store.root()).unwrap() {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_str().unwrap().to_string();
            assert!(!name.ends_with(".tmp"), "leftover temp file: {}", name);
        }
        assert!(target.is_dir());
    }

    #[test]
    fn mismatched_key_on_disk_is_rekeyed_by_name() {
        let (_dir, mut store) = setup();
        store
            .write(
                Slot::Contacts,
                r#"{"Ann": {"name": "Ann", "phones": ["0000000001"]}, "Zed": {"name": "Ann"}}"#,
            )
            .unwrap();
        let loaded: AddressBook = store.load(Slot::Contacts).unwrap().unwrap();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.get("Ann").unwrap().phones()[0].value(), "0000000001");
        assert!(loaded.get("Zed").is_none());
    }

    #[test]
    fn corrupt_slot_is_a_serialization_error() {
        let (_dir, mut store) = setup();
        store.write(Slot::Contacts, "{ not json").unwrap();
        assert!(matches!(
            store.load::<AddressBook>(Slot::Contacts),
            Err(crate::error::RoloError::Serialization(_))
        ));
    }

    #[test]
    fn invalid_field_on_disk_is_rejected() {
        let (_dir, mut store) = setup();
        store
            .write(Slot::Contacts, r#"{"Ann": {"name": "Ann", "phones": ["12"]}}"#)
            .unwrap();
        assert!(store.load::<AddressBook>(Slot::Contacts).is_err());
    }

    #[test]
    fn file_names_come_from_config() {
        let dir = TempDir::new().unwrap();
        let config = RoloConfig {
            contacts_file: "people.json".to_string(),
            ..RoloConfig::default()
        };
        let mut store = FileStore::new(dir.path().to_path_buf()).with_config(&config);
        store.save(Slot::Contacts, &AddressBook::new()).unwrap();
        assert!(dir.path().join("people.json").exists());
        assert!(store.describe(Slot::Contacts).ends_with("people.json"));
    }
}
