use super::command::Command;
use super::console::Console;
use super::handlers::dispatch;
use super::help::HELP;
use rolo::api::{CmdMessage, CmdResult, RoloApi};
use rolo::error::{Result, RoloError};
use rolo::store::DataStore;

pub const PROMPT: &str = ">> ";

/// Reads commands until `exit`, end of input or Ctrl-C, then saves.
pub fn run<S: DataStore>(api: &mut RoloApi<S>, console: &mut impl Console) -> Result<()> {
    loop {
        let line = match console.ask(PROMPT) {
            Ok(line) => line,
            Err(RoloError::Cancelled) => break,
            Err(e) => return Err(e),
        };
        if line.trim().is_empty() {
            continue;
        }
        console.remember(&line);

        let command = match line.parse::<Command>() {
            Ok(Command::Exit) => break,
            Ok(command) => command,
            Err(e) => {
                tracing::debug!(error = %e, "unrecognized input");
                console.show(
                    &CmdResult::default()
                        .with_message(CmdMessage::warning("Unknown command!"))
                        .with_output(HELP),
                );
                continue;
            }
        };

        tracing::debug!(?command, "dispatching");
        let result = match dispatch(api, console, command) {
            Ok(result) => result,
            Err(RoloError::Cancelled) => {
                CmdResult::default().with_message(CmdMessage::info("Cancelled"))
            }
            Err(e) => CmdResult::default().with_message(CmdMessage::error(e.to_string())),
        };
        console.show(&result);
    }

    api.save()?;
    console.show(&CmdResult::default().with_output("Good bye!"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::console::scripted::ScriptedConsole;
    use rolo::config::RoloConfig;
    use rolo::store::memory::InMemoryStore;

    fn session(inputs: &[&str]) -> (RoloApi<InMemoryStore>, ScriptedConsole) {
        let (mut api, _) = RoloApi::open(InMemoryStore::new(), RoloConfig::default());
        let mut console = ScriptedConsole::new(inputs);
        run(&mut api, &mut console).unwrap();
        (api, console)
    }

    #[test]
    fn exit_saves_and_says_good_bye() {
        let (api, console) = session(&["write note", "Shopping", "milk", "good bye", "hello"]);
        assert_eq!(api.store().writes(), 1);
        assert_eq!(console.shown.last().unwrap(), "Good bye!");
        assert!(!console.transcript().contains("How can I help you?"));
    }

    #[test]
    fn end_of_input_also_saves() {
        let (api, _) = session(&["write note", "Shopping", "milk"]);
        assert_eq!(api.store().writes(), 1);
    }

    #[test]
    fn unknown_input_shows_help() {
        let (_, console) = session(&["sort folder"]);
        let first = &console.shown[0];
        assert!(first.contains("Unknown command!"));
        assert!(first.contains("show all"));
    }

    #[test]
    fn command_errors_do_not_end_the_session() {
        let (_, console) = session(&["remove note", "", "hello"]);
        assert!(console.shown[0].ends_with("Title cannot be empty"));
        assert_eq!(console.shown[1], "How can I help you?");
    }

    #[test]
    fn blank_lines_are_ignored() {
        let (_, console) = session(&["", "   ", "hello"]);
        assert_eq!(console.shown[0], "How can I help you?");
        assert_eq!(console.prompts.iter().filter(|p| *p == PROMPT).count(), 4);
    }
}
