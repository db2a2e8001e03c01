use colored::Colorize;
use rolo::api::{CmdMessage, CmdResult, MessageLevel};

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Rendered output first, then the messages.
pub(super) fn print_result(result: &CmdResult) {
    if let Some(output) = &result.output {
        print!("{}", output);
        if !output.ends_with('\n') {
            println!();
        }
    }
    print_messages(&result.messages);
}
