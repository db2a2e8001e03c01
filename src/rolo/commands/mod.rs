//! # Command Layer
//!
//! One function per user-facing operation. Commands take the in-memory
//! collections and plain Rust values, and return a [`CmdResult`]: rendered
//! output (tables, listings) plus leveled messages. They never print.
//!
//! "Not found" and "already exists" are ordinary outcomes here and come back
//! as warning messages. `Err` is reserved for malformed input
//! ([`crate::error::RoloError::Validation`]) and the like.

pub mod birthdays;
pub mod contacts;
pub mod notes;
pub mod tags;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Rendered listing or table, printed before the messages.
    pub output: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Output and messages as one block of plain text.
    pub fn to_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if let Some(output) = &self.output {
            parts.push(output.trim_end_matches('\n'));
        }
        parts.extend(self.messages.iter().map(|m| m.content.as_str()));
        parts.join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_none() && self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_text_puts_output_first() {
        let result = CmdResult::default()
            .with_message(CmdMessage::info("done"))
            .with_output("table\n");
        assert_eq!(result.to_text(), "table\ndone");
    }

    #[test]
    fn empty_result() {
        assert!(CmdResult::default().is_empty());
        assert!(!CmdResult::default().with_output("").is_empty());
    }
}
