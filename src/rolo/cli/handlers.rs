//! Interactive flows behind each command.
//!
//! A handler collects its arguments through the [`Console`], calls the API
//! once and hands back the [`CmdResult`] for the REPL to show. Invalid phone,
//! birthday and email input is reported and asked again; optional fields are
//! skipped with an empty line or `pass`.

use super::command::Command;
use super::console::Console;
use super::help::HELP;
use chrono::Local;
use rolo::api::{CmdMessage, CmdResult, RoloApi};
use rolo::contacts::Record;
use rolo::error::{Result, RoloError};
use rolo::fields::{Address, Birthday, Email, Field, Name, Phone, ValidationError};
use rolo::store::DataStore;

const SKIP: &str = "pass";

pub fn dispatch<S: DataStore>(
    api: &mut RoloApi<S>,
    console: &mut impl Console,
    command: Command,
) -> Result<CmdResult> {
    match command {
        Command::Hello => Ok(CmdResult::default().with_output("How can I help you?")),
        Command::Add => handle_add(api, console),
        Command::Phone => {
            let name = ask_text(console, "Enter name: ")?;
            api.phone(&name)
        }
        Command::ShowAll => api.show_all(),
        Command::Delete => {
            let name = ask_text(console, "Enter name of the contact to delete: ")?;
            api.delete_contact(&name)
        }
        Command::EditPhone => handle_edit_phone(api, console),
        Command::EditBirthday => {
            let name = ask_contact(api, console)?;
            let birthday: Birthday = ask_field(console, "Enter new birthday (DD.MM.YYYY): ")?;
            api.edit_birthday(&name, birthday.value())
        }
        Command::EditEmail => {
            let name = ask_contact(api, console)?;
            let email: Email = ask_field(console, "Enter new email: ")?;
            api.edit_email(&name, email.value())
        }
        Command::EditAddress => {
            let name = ask_contact(api, console)?;
            let address = ask_required(console, "Enter new address: ")?;
            api.edit_address(&name, &address)
        }
        Command::SearchPhone => {
            let term = ask_text(console, "Enter part of a name or phone: ")?;
            api.search_contacts(&term)
        }
        Command::Birthday(depth) => {
            let depth = match depth {
                Some(_) => depth,
                None => ask_depth(console, api.config().birthday_window_days)?,
            };
            api.birthdays(depth, Local::now().date_naive())
        }
        Command::WriteNote => {
            let title = ask_text(console, "Enter title: ")?;
            let text = ask_text(console, "Enter text: ")?;
            api.write_note(&title, &text)
        }
        Command::SearchNotes => {
            let needle = ask_text(console, "Enter text to search for: ")?;
            api.search_notes(&needle)
        }
        Command::RemoveNote => {
            let fragment = ask_text(console, "Enter title of the note to remove: ")?;
            api.remove_note(&fragment)
        }
        Command::EditNote => {
            let fragment = ask_required(console, "Enter title of the note to edit: ")?;
            let text = ask_text(console, "Enter new text: ")?;
            api.edit_note(&fragment, &text)
        }
        Command::CreateTag => {
            let name = ask_text(console, "Enter tag name: ")?;
            api.create_tag(&name)
        }
        Command::ShowTags => api.show_tags(),
        Command::LinkTag => {
            let title = ask_text(console, "Enter title of the note: ")?;
            let tag = ask_text(console, "Enter tag name: ")?;
            api.link_tag(&title, &tag)
        }
        Command::ShowNotes => api.show_notes(),
        Command::FindNotesByTags => {
            let tag = ask_text(console, "Enter tag name: ")?;
            api.find_notes_by_tag(&tag)
        }
        Command::Help => Ok(CmdResult::default().with_output(HELP)),
        Command::Exit => Ok(CmdResult::default()),
    }
}

fn handle_add<S: DataStore>(api: &mut RoloApi<S>, console: &mut impl Console) -> Result<CmdResult> {
    let name = Name::new(ask_required(console, "Enter name: ")?)?;
    let phone: Phone = ask_field(console, "Enter phone: ")?;
    let birthday: Option<Birthday> =
        ask_optional_field(console, "Enter birthday (DD.MM.YYYY) or 'pass': ")?;
    let email: Option<Email> = ask_optional_field(console, "Enter email or 'pass': ")?;
    let address = match ask_text(console, "Enter address or 'pass': ")? {
        text if skipped(&text) => None,
        text => Some(Address::new(text)?),
    };

    api.add_contact(Record::new(name, Some(phone), birthday, email, address))
}

fn handle_edit_phone<S: DataStore>(
    api: &mut RoloApi<S>,
    console: &mut impl Console,
) -> Result<CmdResult> {
    let name = ask_contact(api, console)?;
    if let Some(record) = api.book().get(&name) {
        console.show(&CmdResult::default().with_output(record.phones_display()));
    }
    let old: Phone = ask_field(console, "Enter the phone to replace: ")?;
    let new: Phone = ask_field(console, "Enter new phone: ")?;
    api.edit_phone(&name, &old, new)
}

fn ask_text(console: &mut impl Console, prompt: &str) -> Result<String> {
    Ok(console.ask(prompt)?.trim().to_string())
}

/// An empty answer or `pass` in any case leaves an optional field unset.
fn skipped(text: &str) -> bool {
    text.is_empty() || text.eq_ignore_ascii_case(SKIP)
}

/// Like [`ask_text`], but an empty answer cancels the command.
fn ask_required(console: &mut impl Console, prompt: &str) -> Result<String> {
    let text = ask_text(console, prompt)?;
    if text.is_empty() {
        return Err(RoloError::Cancelled);
    }
    Ok(text)
}

/// Asks until the answer is a valid `F`.
fn ask_field<F>(console: &mut impl Console, prompt: &str) -> Result<F>
where
    F: Field + TryFrom<String, Error = ValidationError>,
{
    loop {
        match F::try_from(ask_text(console, prompt)?) {
            Ok(value) => return Ok(value),
            Err(e) => console.show(&warning(e)),
        }
    }
}

fn ask_optional_field<F>(console: &mut impl Console, prompt: &str) -> Result<Option<F>>
where
    F: Field + TryFrom<String, Error = ValidationError>,
{
    loop {
        let text = ask_text(console, prompt)?;
        if skipped(&text) {
            return Ok(None);
        }
        match F::try_from(text) {
            Ok(value) => return Ok(Some(value)),
            Err(e) => console.show(&warning(e)),
        }
    }
}

/// Asks for an exact contact name until one exists. Empty input cancels.
fn ask_contact<S: DataStore>(api: &RoloApi<S>, console: &mut impl Console) -> Result<String> {
    loop {
        let name = ask_required(console, "Enter name of the contact: ")?;
        if api.book().contains(&name) {
            return Ok(name);
        }
        console.show(&warning(format!("Contact '{}' not found, try again", name)));
    }
}

/// `None` when the answer is empty.
fn ask_depth(console: &mut impl Console, default: i64) -> Result<Option<i64>> {
    let prompt = format!("Enter the number of days (empty for {}): ", default);
    loop {
        let text = ask_text(console, &prompt)?;
        if text.is_empty() {
            return Ok(None);
        }
        match text.parse() {
            Ok(days) => return Ok(Some(days)),
            Err(_) => console.show(&warning(format!("'{}' is not a number of days", text))),
        }
    }
}

fn warning(message: impl ToString) -> CmdResult {
    CmdResult::default().with_message(CmdMessage::warning(message.to_string()))
}
