use crate::commands::{CmdMessage, CmdResult};
use crate::contacts::{AddressBook, Record};
use crate::render::birthdays_table;
use chrono::NaiveDate;

const REMINDER_HEADER: &str =
    "Contacts below celebrate birthday soon. Don't forget to prepare a gift and congrat them ;)";

/// Contacts whose next birthday is fewer than `depth` days after `today`,
/// nearest first.
pub fn upcoming(book: &AddressBook, today: NaiveDate, depth: i64) -> Vec<(&Record, i64)> {
    let mut hits: Vec<(&Record, i64)> = book
        .records()
        .filter_map(|r| r.days_to_birthday_from(today).map(|days| (r, days)))
        .filter(|(_, days)| *days < depth)
        .collect();
    hits.sort_by_key(|(_, days)| *days);
    hits
}

/// The `birthday` command.
pub fn run(book: &AddressBook, today: NaiveDate, depth: i64) -> CmdResult {
    let hits = upcoming(book, today, depth);
    if hits.is_empty() {
        return CmdResult::default().with_message(CmdMessage::info(format!(
            "Nobody from your contacts celebrates birthday for the next {} days",
            depth
        )));
    }
    CmdResult::default().with_output(birthdays_table(hits.into_iter().map(|(r, _)| r)))
}

/// Startup reminder: a header plus the table, or nothing at all.
pub fn reminder(book: &AddressBook, today: NaiveDate, depth: i64) -> CmdResult {
    let hits = upcoming(book, today, depth);
    if hits.is_empty() {
        return CmdResult::default();
    }
    let table = birthdays_table(hits.into_iter().map(|(r, _)| r));
    CmdResult::default().with_output(format!("{}\n{}", REMINDER_HEADER, table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{Field, Name};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn book() -> AddressBook {
        let mut book = AddressBook::new();
        for (name, birthday) in [("Ann", "20.06.1990"), ("Bob", "15.06.1985"), ("Cid", "01.01.2000")] {
            let mut r = Record::named(Name::new(name).unwrap());
            r.change_birthday(birthday).unwrap();
            book.add_record(r);
        }
        book.add_record(Record::named(Name::new("Dee").unwrap()));
        book
    }

    #[test]
    fn upcoming_is_strictly_within_depth_and_sorted() {
        let book = book();
        let names: Vec<_> = upcoming(&book, today(), 7)
            .iter()
            .map(|(r, days)| (r.name().value(), *days))
            .collect();
        assert_eq!(names, [("Bob", 0), ("Ann", 5)]);

        assert_eq!(upcoming(&book, today(), 5).len(), 1);
        assert!(upcoming(&book, today(), 0).is_empty());
    }

    #[test]
    fn run_reports_nobody() {
        let result = run(&book(), NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(), 7);
        assert_eq!(
            result.messages[0].content,
            "Nobody from your contacts celebrates birthday for the next 7 days"
        );
    }

    #[test]
    fn run_renders_table() {
        let output = run(&book(), today(), 7).output.unwrap();
        assert!(output.contains("Bob") && output.contains("20.06.1990"));
        assert!(!output.contains("Cid"));
    }

    #[test]
    fn reminder_is_silent_when_nobody_qualifies() {
        let quiet = reminder(&book(), NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(), 30);
        assert!(quiet.is_empty());

        let loud = reminder(&book(), today(), 30).output.unwrap();
        assert!(loud.starts_with("Contacts below celebrate birthday soon."));
    }
}
