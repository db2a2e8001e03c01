use crate::commands::{CmdMessage, CmdResult};
use crate::contacts::{AddressBook, Record};
use crate::error::{Result, RoloError};
use crate::fields::{Field, Phone};

pub fn add(book: &mut AddressBook, record: Record) -> Result<CmdResult> {
    let name = record.name().value().to_string();
    if book.contains(&name) {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "Contact '{}' already exists, nothing was changed",
            name
        ))));
    }
    book.add_record(record);
    Ok(CmdResult::default().with_message(CmdMessage::success("New contact was added!")))
}

/// Phones of the first contact whose name contains `partial`.
pub fn phone(book: &AddressBook, partial: &str) -> CmdResult {
    match book.find(partial) {
        Some(record) => CmdResult::default().with_output(record.phones_display()),
        None => CmdResult::default().with_message(not_found(partial)),
    }
}

pub fn show_all(book: &AddressBook) -> CmdResult {
    if book.is_empty() {
        return CmdResult::default().with_message(CmdMessage::info("You have no contacts saved"));
    }
    CmdResult::default().with_output(book.table())
}

pub fn delete(book: &mut AddressBook, name: &str) -> CmdResult {
    match book.delete(name) {
        Some(_) => {
            CmdResult::default().with_message(CmdMessage::success("Contact was successfully deleted!"))
        }
        None => CmdResult::default().with_message(CmdMessage::warning("Contact not found")),
    }
}

pub fn edit_phone(book: &mut AddressBook, name: &str, old: &Phone, new: Phone) -> Result<CmdResult> {
    let message = format!("Phone '{}' was successfully changed to '{}'", old, new);
    match update(book, name, |record| record.replace_phone(old, new)) {
        Err(RoloError::PhoneNotFound(_)) => {
            Ok(CmdResult::default().with_message(CmdMessage::warning("Contact has no such phone")))
        }
        Ok(result) if result.messages.is_empty() => {
            Ok(result.with_message(CmdMessage::success(message)))
        }
        other => other,
    }
}

pub fn edit_birthday(book: &mut AddressBook, name: &str, value: &str) -> Result<CmdResult> {
    updated(update(book, name, |record| record.change_birthday(value)))
}

pub fn edit_email(book: &mut AddressBook, name: &str, value: &str) -> Result<CmdResult> {
    updated(update(book, name, |record| record.change_email(value)))
}

pub fn edit_address(book: &mut AddressBook, name: &str, value: &str) -> Result<CmdResult> {
    updated(update(book, name, |record| record.change_address(value)))
}

/// Contacts whose name or any phone contains `term`, one per line.
pub fn search(book: &AddressBook, term: &str) -> CmdResult {
    let hits = book.search(term);
    if hits.is_empty() {
        return CmdResult::default()
            .with_message(CmdMessage::info(format!("No contacts match '{}'", term)));
    }
    let lines: Vec<String> = hits.iter().map(|r| r.to_string()).collect();
    CmdResult::default().with_output(lines.join("\n"))
}

fn not_found(name: &str) -> CmdMessage {
    CmdMessage::warning(format!("There is no contacts with name '{}'", name))
}

/// Runs `change` on the contact named exactly `name`. A missing contact is
/// reported as a warning, not an error.
fn update<F>(book: &mut AddressBook, name: &str, change: F) -> Result<CmdResult>
where
    F: FnOnce(&mut Record) -> Result<()>,
{
    let Some(record) = book.get_mut(name) else {
        return Ok(CmdResult::default().with_message(not_found(name)));
    };
    change(record)?;
    Ok(CmdResult::default())
}

fn updated(result: Result<CmdResult>) -> Result<CmdResult> {
    let result = result?;
    if result.messages.is_empty() {
        Ok(result.with_message(CmdMessage::success("Contact updated!")))
    } else {
        Ok(result)
    }
}
