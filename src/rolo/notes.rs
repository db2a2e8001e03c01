//! # Notes and Tags
//!
//! A [`NoteCollection`] owns three things:
//!
//! - the notes themselves, keyed by a numeric [`NoteId`]
//! - a [`TagRegistry`] of uniquely named tags, keyed by [`TagId`]
//! - the links from each note to an ordered, duplicate-free list of tag ids
//!
//! ## Ids
//!
//! Both notes and tags are numbered from 1. Each registry remembers the
//! last id it handed out and never goes back, so removing an item never
//! frees its id for reuse and a stale link can never point at a newer item.
//!
//! ## Matching
//!
//! Notes compare equal by title alone. Adding a second note with an existing
//! title is refused. [`NoteCollection::delete_note`] and
//! [`NoteCollection::edit_note`] take a title *fragment* and act on the first
//! note (lowest id) whose title contains it, ignoring case.

use crate::error::{Result, RoloError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub type NoteId = u32;
pub type TagId = u32;

/// Outcome of inserting into a registry that refuses duplicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Added {
    Created(u32),
    Duplicate,
}

/// Outcome of [`NoteCollection::add_tag_for_note`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagLink {
    Linked,
    AlreadyLinked,
    NoteMissing,
    TagMissing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    name: String,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

fn next_id<V>(items: &BTreeMap<u32, V>, last_id: &mut u32) -> u32 {
    let highest = items.keys().next_back().copied().unwrap_or(0);
    let id = (*last_id).max(highest) + 1;
    *last_id = id;
    id
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagRegistry {
    tags: BTreeMap<TagId, Tag>,
    #[serde(default)]
    last_id: TagId,
}

impl TagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_tag(&mut self, name: &str) -> Added {
        let tag = Tag::new(name);
        if self.tags.values().any(|t| *t == tag) {
            return Added::Duplicate;
        }
        let id = next_id(&self.tags, &mut self.last_id);
        self.tags.insert(id, tag);
        tracing::debug!(tag = %name, id, "tag created");
        Added::Created(id)
    }

    pub fn get_tag_name(&self, id: TagId) -> Result<&str> {
        self.tags
            .get(&id)
            .map(Tag::name)
            .ok_or(RoloError::KeyNotFound(id))
    }

    pub fn get_tag_id(&self, name: &str) -> Option<TagId> {
        self.tags
            .iter()
            .find(|(_, t)| t.name == name)
            .map(|(id, _)| *id)
    }

    pub fn contains(&self, id: TagId) -> bool {
        self.tags.contains_key(&id)
    }

    /// Tags in id order.
    pub fn tags(&self) -> impl Iterator<Item = (TagId, &Tag)> {
        self.tags.iter().map(|(id, t)| (*id, t))
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    title: String,
    text: String,
}

impl Note {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl PartialEq for Note {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
    }
}

impl Eq for Note {}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.title, self.text)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoteCollection {
    notes: BTreeMap<NoteId, Note>,
    #[serde(default)]
    tags: TagRegistry,
    #[serde(default)]
    links: BTreeMap<NoteId, Vec<TagId>>,
    #[serde(default)]
    last_id: NoteId,
}

impl NoteCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_note(&mut self, title: &str, text: &str) -> Added {
        let note = Note::new(title, text);
        if self.notes.values().any(|n| *n == note) {
            return Added::Duplicate;
        }
        let id = next_id(&self.notes, &mut self.last_id);
        self.notes.insert(id, note);
        tracing::debug!(note = %title, id, "note added");
        Added::Created(id)
    }

    /// Notes whose title or text contains `needle`, ignoring case, copied
    /// into a new collection numbered from 1. Their tags come along.
    pub fn find_notes(&self, needle: &str) -> NoteCollection {
        let needle = needle.to_lowercase();
        let mut found = NoteCollection::new();

        for (id, note) in self.notes() {
            let hit = note.title.to_lowercase().contains(&needle)
                || note.text.to_lowercase().contains(&needle);
            if !hit {
                continue;
            }
            found.add_note(&note.title, &note.text);
            for tag_id in self.tag_ids(id) {
                if let Ok(name) = self.tags.get_tag_name(*tag_id) {
                    found.tags.add_tag(name);
                    found.add_tag_for_note(name, &note.title);
                }
            }
        }
        found
    }

    fn first_title_match(&self, fragment: &str) -> Option<NoteId> {
        let fragment = fragment.trim().to_lowercase();
        self.notes
            .iter()
            .find(|(_, n)| n.title.to_lowercase().contains(&fragment))
            .map(|(id, _)| *id)
    }

    /// Removes the first note whose title contains `fragment`, along with
    /// its tag links.
    pub fn delete_note(&mut self, fragment: &str) -> Option<Note> {
        let id = self.first_title_match(fragment)?;
        self.links.remove(&id);
        let removed = self.notes.remove(&id);
        tracing::debug!(id, "note removed");
        removed
    }

    /// Replaces the text of the first note whose title contains `fragment`.
    pub fn edit_note(&mut self, fragment: &str, new_text: &str) -> Option<NoteId> {
        let id = self.first_title_match(fragment)?;
        let note = self.notes.get_mut(&id)?;
        note.text = new_text.to_string();
        tracing::debug!(id, "note edited");
        Some(id)
    }

    /// Exact-title lookup.
    pub fn get_note_id(&self, title: &str) -> Option<NoteId> {
        self.notes
            .iter()
            .find(|(_, n)| n.title == title)
            .map(|(id, _)| *id)
    }

    pub fn get_tag_id(&self, name: &str) -> Option<TagId> {
        self.tags.get_tag_id(name)
    }

    pub fn add_tag_for_note(&mut self, tag_name: &str, note_title: &str) -> TagLink {
        let Some(note_id) = self.get_note_id(note_title) else {
            return TagLink::NoteMissing;
        };
        let Some(tag_id) = self.get_tag_id(tag_name) else {
            return TagLink::TagMissing;
        };

        let linked = self.links.entry(note_id).or_default();
        if linked.contains(&tag_id) {
            return TagLink::AlreadyLinked;
        }
        linked.push(tag_id);
        tracing::debug!(note_id, tag_id, "tag linked");
        TagLink::Linked
    }

    pub fn tag_ids(&self, note_id: NoteId) -> &[TagId] {
        self.links.get(&note_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn note_ids_with_tag(&self, tag_id: TagId) -> Vec<NoteId> {
        self.links
            .iter()
            .filter(|(_, tags)| tags.contains(&tag_id))
            .map(|(id, _)| *id)
            .collect()
    }

    /// Table of the notes carrying `tag_id`.
    pub fn find_notes_by_tag(&self, tag_id: TagId) -> String {
        let ids = self.note_ids_with_tag(tag_id);
        crate::render::notes_table(self, Some(&ids))
    }

    /// Names of a note's tags joined with `", "`; empty when it has none.
    pub fn get_note_tags(&self, note_id: NoteId) -> String {
        self.tag_ids(note_id)
            .iter()
            .filter_map(|id| self.tags.get_tag_name(*id).ok())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.get(&id)
    }

    /// Notes in id order.
    pub fn notes(&self) -> impl Iterator<Item = (NoteId, &Note)> {
        self.notes.iter().map(|(id, n)| (*id, n))
    }

    pub fn tags(&self) -> &TagRegistry {
        &self.tags
    }

    pub fn tags_mut(&mut self) -> &mut TagRegistry {
        &mut self.tags
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn table(&self, only: Option<&[NoteId]>) -> String {
        crate::render::notes_table(self, only)
    }
}
