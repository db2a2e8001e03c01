use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RoloError};
use crate::notes::{Added, NoteCollection, TagLink};
use crate::render::tags_table;

pub fn create(notes: &mut NoteCollection, name: &str) -> Result<CmdResult> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RoloError::Api("Tag name cannot be empty".into()));
    }
    let message = match notes.tags_mut().add_tag(name) {
        Added::Created(_) => CmdMessage::success(format!("Tag with name {} successfully created!", name)),
        Added::Duplicate => CmdMessage::warning(format!("Tag with name {} already exists!", name)),
    };
    Ok(CmdResult::default().with_message(message))
}

pub fn show(notes: &NoteCollection) -> CmdResult {
    let tags = notes.tags();
    let mut result = CmdResult::default().with_output(tags_table(tags.tags()));
    if tags.is_empty() {
        result.add_message(CmdMessage::info("No tags defined"));
    }
    result
}

pub fn link(notes: &mut NoteCollection, note_title: &str, tag_name: &str) -> CmdResult {
    let message = match notes.add_tag_for_note(tag_name, note_title) {
        TagLink::Linked => CmdMessage::success(format!(
            "Tag '{}' for the note '{}' was created successfully.",
            tag_name, note_title
        )),
        TagLink::AlreadyLinked => CmdMessage::info(format!(
            "Tag '{}' was already linked to the note '{}'.",
            tag_name, note_title
        )),
        TagLink::NoteMissing => {
            CmdMessage::warning(format!("Such note with title '{}' doesn't exist", note_title))
        }
        TagLink::TagMissing => CmdMessage::warning(format!("Such tag '{}' doesn't exist", tag_name)),
    };
    CmdResult::default().with_message(message)
}

/// Notes carrying the tag called `tag_name`.
pub fn find_by_tag(notes: &NoteCollection, tag_name: &str) -> CmdResult {
    let Some(tag_id) = notes.get_tag_id(tag_name) else {
        return CmdResult::default()
            .with_message(CmdMessage::warning(format!("There is no such tag {}", tag_name)));
    };

    let mut result = CmdResult::default().with_output(notes.find_notes_by_tag(tag_id));
    if notes.note_ids_with_tag(tag_id).is_empty() {
        result.add_message(CmdMessage::info(format!("No notes are tagged '{}'", tag_name)));
    }
    result
}
