use rolo::error::{Result, RoloError};
use std::str::FromStr;

/// Everything the shell accepts at its top-level prompt, used for completion.
pub const COMMAND_NAMES: [&str; 24] = [
    "hello",
    "add",
    "phone",
    "show all",
    "delete",
    "edit phone",
    "edit birthday",
    "edit email",
    "edit address",
    "search phone",
    "birthday",
    "write note",
    "search notes",
    "remove note",
    "edit note",
    "create tag",
    "show tags",
    "link tag",
    "show notes",
    "find notes by tags",
    "help",
    "exit",
    "close",
    "good bye",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Phone,
    ShowAll,
    Delete,
    EditPhone,
    EditBirthday,
    EditEmail,
    EditAddress,
    SearchPhone,
    /// Look-ahead in days, when typed inline (`birthday 10`).
    Birthday(Option<i64>),
    WriteNote,
    SearchNotes,
    RemoveNote,
    EditNote,
    CreateTag,
    ShowTags,
    LinkTag,
    ShowNotes,
    FindNotesByTags,
    Help,
    Exit,
}

impl FromStr for Command {
    type Err = RoloError;

    /// Case-insensitive; runs of whitespace count as one space.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        let command = match normalized.as_str() {
            "hello" => Command::Hello,
            "add" => Command::Add,
            "phone" => Command::Phone,
            "show all" => Command::ShowAll,
            "delete" => Command::Delete,
            "edit phone" => Command::EditPhone,
            "edit birthday" => Command::EditBirthday,
            "edit email" => Command::EditEmail,
            "edit address" => Command::EditAddress,
            "search phone" => Command::SearchPhone,
            "birthday" => Command::Birthday(None),
            "write note" => Command::WriteNote,
            "search notes" => Command::SearchNotes,
            "remove note" => Command::RemoveNote,
            "edit note" => Command::EditNote,
            "create tag" => Command::CreateTag,
            "show tags" => Command::ShowTags,
            "link tag" => Command::LinkTag,
            "show notes" => Command::ShowNotes,
            "find notes by tags" => Command::FindNotesByTags,
            "help" => Command::Help,
            "exit" | "close" | "good bye" => Command::Exit,
            other => match other.strip_prefix("birthday ").map(str::parse) {
                Some(Ok(depth)) => Command::Birthday(Some(depth)),
                _ => return Err(RoloError::Api(format!("Unknown command: {}", s.trim()))),
            },
        };
        Ok(command)
    }
}
