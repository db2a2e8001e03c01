//! Line input for the shell.
//!
//! The REPL and the command handlers only see the [`Console`] trait. The
//! binary plugs in [`Terminal`], a rustyline editor that completes command
//! names; tests plug in a scripted console.

use super::command::COMMAND_NAMES;
use super::print::print_result;
use rolo::api::CmdResult;
use rolo::error::{Result, RoloError};
use rustyline::completion::Completer;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

pub trait Console {
    /// Shows `prompt` and reads one line. End of input and Ctrl-C come back
    /// as [`RoloError::Cancelled`].
    fn ask(&mut self, prompt: &str) -> Result<String>;

    fn show(&mut self, result: &CmdResult);

    fn remember(&mut self, _line: &str) {}
}

/// Completes the top-level command names.
pub struct CommandHelper;

impl Completer for CommandHelper {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        let typed = line.get(..pos).unwrap_or(line).to_lowercase();
        let candidates = COMMAND_NAMES
            .iter()
            .filter(|name| name.starts_with(&typed))
            .map(|name| name.to_string())
            .collect();
        Ok((0, candidates))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {}

impl Validator for CommandHelper {}

impl Helper for CommandHelper {}

pub struct Terminal {
    editor: Editor<CommandHelper, DefaultHistory>,
}

impl Terminal {
    pub fn new() -> Result<Self> {
        let mut editor: Editor<CommandHelper, DefaultHistory> =
            Editor::new().map_err(readline_error)?;
        editor.set_helper(Some(CommandHelper));
        Ok(Self { editor })
    }
}

impl Console for Terminal {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(line),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Err(RoloError::Cancelled),
            Err(e) => Err(readline_error(e)),
        }
    }

    fn show(&mut self, result: &CmdResult) {
        print_result(result);
    }

    fn remember(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}

fn readline_error(e: ReadlineError) -> RoloError {
    match e {
        ReadlineError::Io(io) => RoloError::Io(io),
        other => RoloError::Api(format!("Line editor failed: {}", other)),
    }
}

#[cfg(test)]
pub mod scripted {
    use super::*;
    use std::collections::VecDeque;

    /// Replays canned input lines and records everything shown.
    #[derive(Default)]
    pub struct ScriptedConsole {
        inputs: VecDeque<String>,
        pub prompts: Vec<String>,
        pub shown: Vec<String>,
    }

    impl ScriptedConsole {
        pub fn new(inputs: &[&str]) -> Self {
            Self {
                inputs: inputs.iter().map(|s| s.to_string()).collect(),
                ..Self::default()
            }
        }

        pub fn transcript(&self) -> String {
            self.shown.join("\n")
        }
    }

    impl Console for ScriptedConsole {
        fn ask(&mut self, prompt: &str) -> Result<String> {
            self.prompts.push(prompt.to_string());
            self.inputs.pop_front().ok_or(RoloError::Cancelled)
        }

        fn show(&mut self, result: &CmdResult) {
            self.shown.push(result.to_text());
        }
    }
}
