use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RoloError};
use crate::notes::{Added, NoteCollection};

fn require_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(RoloError::Api("Title cannot be empty".into()));
    }
    Ok(())
}

pub fn write(notes: &mut NoteCollection, title: &str, text: &str) -> Result<CmdResult> {
    require_title(title)?;
    let message = match notes.add_note(title, text) {
        Added::Created(_) => {
            CmdMessage::success(format!("Note with title {} was successfully added!", title))
        }
        Added::Duplicate => {
            CmdMessage::warning(format!("Note with title {} already exists!", title))
        }
    };
    Ok(CmdResult::default().with_message(message))
}

pub fn search(notes: &NoteCollection, needle: &str) -> CmdResult {
    let found = notes.find_notes(needle.trim());
    let mut result = CmdResult::default().with_output(found.table(None));
    if found.is_empty() {
        result.add_message(CmdMessage::info(format!("No notes contain '{}'", needle.trim())));
    }
    result
}

pub fn remove(notes: &mut NoteCollection, fragment: &str) -> Result<CmdResult> {
    require_title(fragment)?;
    let message = match notes.delete_note(fragment) {
        Some(note) => CmdMessage::success(format!("Removed note '{}'", note.title())),
        None => CmdMessage::warning("No note with such title"),
    };
    Ok(CmdResult::default().with_message(message))
}

/// Replaces the text of the first note whose title contains `fragment` and
/// shows the updated notes.
pub fn edit(notes: &mut NoteCollection, fragment: &str, text: &str) -> Result<CmdResult> {
    require_title(fragment)?;
    match notes.edit_note(fragment, text) {
        Some(_) => Ok(CmdResult::default()
            .with_output(notes.table(None))
            .with_message(CmdMessage::success("Note updated"))),
        None => Ok(CmdResult::default().with_message(CmdMessage::warning("No note with such title"))),
    }
}

pub fn show(notes: &NoteCollection) -> CmdResult {
    let mut result = CmdResult::default().with_output(notes.table(None));
    if notes.is_empty() {
        result.add_message(CmdMessage::info("You have no notes saved"));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    #[test]
    fn duplicate_title_is_a_warning_and_keeps_text() {
        let mut notes = NoteCollection::new();
        write(&mut notes, "Shopping", "milk").unwrap();
        let result = write(&mut notes, "Shopping", "eggs").unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(result.messages[0].content, "Note with title Shopping already exists!");
        assert_eq!(notes.get(1).unwrap().text(), "milk");
    }

    #[test]
    fn empty_titles_are_rejected() {
        let mut notes = NoteCollection::new();
        assert!(write(&mut notes, "  ", "x").is_err());
        notes.add_note("Keep", "me");
        assert!(remove(&mut notes, " ").is_err());
        assert!(edit(&mut notes, "", "x").is_err());
        assert_eq!(notes.len(), 1);
    }

    #[test]
    fn search_shows_matches_only() {
        let mut notes = NoteCollection::new();
        notes.add_note("Shopping", "milk");
        notes.add_note("Work", "report");

        let output = search(&notes, " MILK ").output.unwrap();
        assert!(output.contains("Shopping"));
        assert!(!output.contains("Work"));

        let none = search(&notes, "zzz");
        assert_eq!(none.messages[0].level, MessageLevel::Info);
    }

    #[test]
    fn remove_and_edit_report_misses() {
        let mut notes = NoteCollection::new();
        notes.add_note("Shopping", "milk");

        let edited = edit(&mut notes, "shop", "bread").unwrap();
        assert!(edited.output.unwrap().contains("bread"));
        assert_eq!(
            edit(&mut notes, "work", "x").unwrap().messages[0].content,
            "No note with such title"
        );

        assert_eq!(remove(&mut notes, "SHOP").unwrap().messages[0].level, MessageLevel::Success);
        assert_eq!(
            remove(&mut notes, "shop").unwrap().messages[0].content,
            "No note with such title"
        );
    }
}
