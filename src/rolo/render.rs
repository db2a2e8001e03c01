//! Plain-text tables for contacts, notes and tags.
//!
//! Everything here is a pure function of its arguments. Widths are measured
//! in terminal columns (`unicode-width`), so names in Cyrillic or with
//! emoji line up the same as ASCII ones. Cells wider than their column are
//! printed in full and push the row out, except note text, which is shown
//! as a one-line preview.

use crate::contacts::{or_not_set, Record};
use crate::fields::Field;
use crate::notes::{Note, NoteCollection, NoteId, Tag, TagId};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const CONTACT_COLUMNS: [(&str, usize); 5] = [
    ("Name", 10),
    ("Phones", 20),
    ("Birthday", 15),
    ("Email", 15),
    ("Address", 20),
];

const NOTE_TITLE_WIDTH: usize = 30;
const NOTE_TEXT_WIDTH: usize = 50;
const NOTE_TAGS_WIDTH: usize = 30;
const TAG_WIDTH: usize = 30;
const BIRTHDAY_WIDTH: usize = 15;

#[derive(Clone, Copy)]
enum Align {
    Left,
    Center,
}

fn cell(text: &str, width: usize, align: Align) -> String {
    let gap = width.saturating_sub(text.width());
    match align {
        Align::Left => format!("{}{}", text, " ".repeat(gap)),
        Align::Center => {
            let left = gap / 2;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(gap - left))
        }
    }
}

fn row(cells: &[String]) -> String {
    format!("|{}|\n", cells.join("|"))
}

/// Cuts `s` to at most `max_width` columns, marking the cut with `…`.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn one_line(s: &str) -> String {
    s.chars().map(|c| if c == '\n' { ' ' } else { c }).collect()
}

/// Header plus one row per record.
pub fn contacts_table<'a>(records: impl IntoIterator<Item = &'a Record>) -> String {
    let header: Vec<String> = CONTACT_COLUMNS
        .iter()
        .map(|(title, width)| cell(title, *width, Align::Center))
        .collect();
    let mut out = row(&header);

    for record in records {
        let values = [
            record.name().to_string(),
            record.phones_joined(", "),
            or_not_set(record.birthday()).to_string(),
            or_not_set(record.email()).to_string(),
            or_not_set(record.address()).to_string(),
        ];
        let cells: Vec<String> = values
            .iter()
            .zip(CONTACT_COLUMNS.iter())
            .map(|(value, (_, width))| cell(value, *width, Align::Center))
            .collect();
        out.push_str(&row(&cells));
    }
    out
}

fn note_row(note: &Note, tags: &str) -> String {
    let text = truncate_to_width(&one_line(note.text()), NOTE_TEXT_WIDTH);
    row(&[
        cell(note.title(), NOTE_TITLE_WIDTH, Align::Center),
        cell(&text, NOTE_TEXT_WIDTH, Align::Left),
        cell(tags, NOTE_TAGS_WIDTH, Align::Center),
    ])
}

/// Title/Text/Tags table. With `only`, rows are limited to those note ids
/// (an empty slice gives just the header).
pub fn notes_table(notes: &NoteCollection, only: Option<&[NoteId]>) -> String {
    let mut out = row(&[
        cell("Title", NOTE_TITLE_WIDTH, Align::Center),
        cell("Text", NOTE_TEXT_WIDTH, Align::Center),
        cell("Tags", NOTE_TAGS_WIDTH, Align::Center),
    ]);

    for (id, note) in notes.notes() {
        if only.is_some_and(|ids| !ids.contains(&id)) {
            continue;
        }
        out.push_str(&note_row(note, &notes.get_note_tags(id)));
    }
    out
}

pub fn tags_table<'a>(tags: impl IntoIterator<Item = (TagId, &'a Tag)>) -> String {
    let mut out = format!("{}\n", cell("Tag", TAG_WIDTH, Align::Left));
    for (_, tag) in tags {
        out.push_str(&format!("{}\n", cell(tag.name(), TAG_WIDTH, Align::Left)));
    }
    out
}

/// Name/Birthday listing used by the birthday reminder.
pub fn birthdays_table<'a>(records: impl IntoIterator<Item = &'a Record>) -> String {
    let mut out = format!(
        "{} {}\n",
        cell("Name", BIRTHDAY_WIDTH, Align::Center),
        cell("Birthday", BIRTHDAY_WIDTH, Align::Center)
    );
    for record in records {
        out.push_str(&format!(
            "{} {}\n",
            cell(record.name().value(), BIRTHDAY_WIDTH, Align::Center),
            cell(or_not_set(record.birthday()), BIRTHDAY_WIDTH, Align::Center)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contacts::AddressBook;
    use crate::fields::{Name, Phone};

    #[test]
    fn cells_center_and_pad() {
        assert_eq!(cell("ab", 6, Align::Center), "  ab  ");
        assert_eq!(cell("abc", 6, Align::Center), " abc  ");
        assert_eq!(cell("ab", 4, Align::Left), "ab  ");
        assert_eq!(cell("toolong", 3, Align::Center), "toolong");
    }

    #[test]
    fn cells_measure_display_width() {
        assert_eq!(cell("日本", 6, Align::Left), "日本  ");
    }

    #[test]
    fn truncation_marks_the_cut() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
    }

    #[test]
    fn contacts_table_has_header_and_rows() {
        let mut book = AddressBook::new();
        let mut ann = Record::named(Name::new("Ann").unwrap());
        ann.add_phone("0000000001").unwrap();
        ann.add_phone("0000000002").unwrap();
        book.add_record(ann);
        book.add_record(Record::new(
            Name::new("Bob").unwrap(),
            Some(Phone::new("0000000003").unwrap()),
            None,
            None,
            None,
        ));

        let table = book.table();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Name") && lines[0].contains("Address"));
        assert!(lines[1].contains("0000000001, 0000000002"));
        assert!(lines[2].contains("Bob") && lines[2].contains("Not set"));
        assert_eq!(lines[0].width(), lines[2].width());
    }

    #[test]
    fn notes_table_previews_long_text_on_one_line() {
        let mut notes = NoteCollection::new();
        notes.add_note("Long", &format!("first\n{}", "x".repeat(80)));
        let table = notes_table(&notes, None);
        let row = table.lines().nth(1).unwrap();
        assert!(row.contains("first x"));
        assert!(row.contains('…'));
    }

    #[test]
    fn notes_table_restricted_to_ids() {
        let mut notes = NoteCollection::new();
        notes.add_note("One", "a");
        notes.add_note("Two", "b");

        let only_two = notes_table(&notes, Some(&[2]));
        assert!(!only_two.contains("One"));
        assert!(only_two.contains("Two"));

        assert_eq!(notes_table(&notes, Some(&[])).lines().count(), 1);
        assert_eq!(notes_table(&notes, None).lines().count(), 3);
    }
}
