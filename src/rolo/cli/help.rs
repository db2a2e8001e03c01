/// Command reference printed by `help` and after an unknown command.
pub const HELP: &str = "\
Contacts:
  hello                 greeting
  add                   add a new contact
  phone                 show the phones of a contact
  show all              list every contact
  delete                delete a contact
  edit phone            replace one of a contact's phones
  edit birthday         change a contact's birthday
  edit email            change a contact's email
  edit address          change a contact's address
  search phone          find contacts by part of a name or phone
  birthday [days]       contacts celebrating within the next days

Notes:
  write note            add a note
  search notes          find notes by text in title or body
  remove note           remove a note by part of its title
  edit note             replace the text of a note
  show notes            list every note
  create tag            add a tag
  show tags             list every tag
  link tag              attach a tag to a note
  find notes by tags    list notes carrying a tag

Other:
  help                  show this help
  exit, close, good bye save and quit";

#[cfg(test)]
mod tests {
    use super::HELP;
    use crate::cli::command::COMMAND_NAMES;

    #[test]
    fn help_mentions_every_command() {
        for name in COMMAND_NAMES {
            assert!(HELP.contains(name), "help is missing '{}'", name);
        }
    }
}
