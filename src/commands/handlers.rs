//! Command handlers.
//!
//! Each handler validates its arguments, applies one operation to the
//! address book and describes the outcome as a [`Reply`]. Handlers return
//! `CommandResult`; [`execute`] is the single place where failures are
//! turned into replies, so nothing escapes to the driver.

use super::parser::{Command, Input};
use super::{CommandError, CommandResult, Reply};
use crate::directory::AddressBook;
use crate::domain::ValidationError;
use crate::models::{PhoneAdded, PhoneEdit, Record};
use crate::render::{birthdays_table, contacts_table};
use chrono::NaiveDate;

/// Parameters of the upcoming birthday report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayWindow {
    pub today: NaiveDate,
    pub days: u32,
}

/// Run one parsed command against the book.
pub fn execute(input: &Input, book: &mut AddressBook, window: BirthdayWindow) -> Reply {
    tracing::debug!(command = %input.command, args = input.args.len(), "Executing command");

    let args = input.args.as_slice();
    let result = match &input.command {
        Command::Hello => Ok(Reply::text("How can I help you?")),
        Command::Add => add_contact(args, book),
        Command::AddBirthday => add_birthday(args, book),
        Command::ShowBirthday => show_birthday(args, book),
        Command::Birthdays => Ok(birthdays(book, window)),
        Command::Change => change_phone(args, book),
        Command::Phone => show_phone(args, book),
        Command::Delete => delete_contact(args, book),
        Command::DeletePhone => delete_phone(args, book),
        Command::All => Ok(show_all(book)),
        Command::Exit => Ok(Reply::Exit),
        Command::Unknown(token) => Err(CommandError::InvalidCommand(token.clone())),
    };

    result.unwrap_or_else(|e| {
        tracing::debug!(command = %input.command, error = ?e, "Command failed");
        Reply::Failure(e)
    })
}

/// Take exactly `N` arguments.
fn expect_args<const N: usize>(args: &[String]) -> Result<[&str; N], ValidationError> {
    if args.len() != N {
        return Err(ValidationError::InsufficientParameters);
    }
    Ok(std::array::from_fn(|i| args[i].as_str()))
}

fn record_mut<'a>(book: &'a mut AddressBook, name: &str) -> CommandResult<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))
}

/// `add <name> <phone>`: create the contact or add a phone to it.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult<Reply> {
    let [name, phone] = expect_args::<2>(args)?;

    match book.find_mut(name) {
        Some(record) => match record.add_phone(phone)? {
            PhoneAdded::Added => Ok(Reply::text("Contact updated.")),
            PhoneAdded::AlreadyExists => Ok(Reply::text("Phone already recorded.")),
        },
        None => {
            book.add(Record::new(name, Some(phone))?);
            Ok(Reply::text("Contact added."))
        }
    }
}

/// `change <name> <old_phone> <new_phone>`
pub fn change_phone(args: &[String], book: &mut AddressBook) -> CommandResult<Reply> {
    let [name, old, new] = expect_args::<3>(args)?;

    match record_mut(book, name)?.edit_phone(old, new)? {
        PhoneEdit::Changed => Ok(Reply::text("Record change.")),
        PhoneEdit::NotFound => Err(CommandError::NotFound(name.to_string())),
    }
}

/// `delete_phone <name> <phone>`
pub fn delete_phone(args: &[String], book: &mut AddressBook) -> CommandResult<Reply> {
    let [name, phone] = expect_args::<2>(args)?;

    record_mut(book, name)?.remove_phone(phone);
    Ok(Reply::text("Phone delete."))
}

/// `phone <name>`
pub fn show_phone(args: &[String], book: &AddressBook) -> CommandResult<Reply> {
    let [name] = expect_args::<1>(args)?;

    book.find(name)
        .map(|record| Reply::Text(record.to_string()))
        .ok_or_else(|| CommandError::NotFound(name.to_string()))
}

/// `delete <name>`. Deleting an unknown name is reported as not found.
pub fn delete_contact(args: &[String], book: &mut AddressBook) -> CommandResult<Reply> {
    let [name] = expect_args::<1>(args)?;

    book.delete(name)?;
    Ok(Reply::text("Record delete"))
}

/// `all`
pub fn show_all(book: &AddressBook) -> Reply {
    Reply::Table(contacts_table(book))
}

/// `add_birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> CommandResult<Reply> {
    let [name, date] = expect_args::<2>(args)?;

    record_mut(book, name)?.set_birthday(date)?;
    Ok(Reply::text("Birthday added"))
}

/// `show_birthday <name>`
pub fn show_birthday(args: &[String], book: &AddressBook) -> CommandResult<Reply> {
    let [name] = expect_args::<1>(args)?;

    let record = book
        .find(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))?;
    let birthday = record
        .birthday()
        .map(ToString::to_string)
        .unwrap_or_else(|| "not set".to_string());

    Ok(Reply::Text(format!(
        "Contact name: {}, birthday: {}",
        record.name(),
        birthday
    )))
}

/// `birthdays`
pub fn birthdays(book: &AddressBook, window: BirthdayWindow) -> Reply {
    let upcoming = book.upcoming_birthdays_within(window.today, window.days);
    Reply::Table(birthdays_table(&upcoming))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::parse_input;

    fn window() -> BirthdayWindow {
        BirthdayWindow {
            today: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            days: 7,
        }
    }

    fn run(book: &mut AddressBook, line: &str) -> String {
        let input = parse_input(line).unwrap();
        execute(&input, book, window()).to_string()
    }

    #[test]
    fn test_add_reports_each_outcome() {
        let mut book = AddressBook::new();
        assert_eq!(run(&mut book, "add Alice 1234567890"), "Contact added.");
        assert_eq!(run(&mut book, "add Alice 1234567890"), "Phone already recorded.");
        assert_eq!(run(&mut book, "add Alice 0987654321"), "Contact updated.");
        assert_eq!(book.find("Alice").unwrap().phones().len(), 2);
    }

    #[test]
    fn test_add_with_invalid_phone_creates_nothing() {
        let mut book = AddressBook::new();
        assert_eq!(run(&mut book, "add Alice 123"), "Incorrect phone number");
        assert!(book.is_empty());
    }

    #[test]
    fn test_wrong_argument_count() {
        let mut book = AddressBook::new();
        for line in [
            "add Alice",
            "add Alice 1234567890 extra",
            "change Alice 1234567890",
            "delete_phone Alice",
            "phone",
            "delete",
            "add_birthday Alice",
            "show_birthday",
        ] {
            assert_eq!(run(&mut book, line), "Insufficient parameters", "{line}");
        }
    }

    #[test]
    fn test_change_phone() {
        let mut book = AddressBook::new();
        run(&mut book, "add Alice 1234567890");

        assert_eq!(run(&mut book, "change Alice 1234567890 5555555555"), "Record change.");
        assert_eq!(
            run(&mut book, "phone Alice"),
            "Contact name: Alice, phones: 5555555555"
        );
        assert_eq!(run(&mut book, "change Alice 1234567890 6666666666"), "Record not found");
        assert_eq!(run(&mut book, "change Bob 1234567890 6666666666"), "Record not found");
        assert_eq!(run(&mut book, "change Alice 5555555555 bad"), "Incorrect phone number");
    }

    #[test]
    fn test_delete_phone() {
        let mut book = AddressBook::new();
        run(&mut book, "add Alice 1234567890");

        assert_eq!(run(&mut book, "delete_phone Alice 1234567890"), "Phone delete.");
        assert_eq!(run(&mut book, "delete_phone Alice 1234567890"), "Phone delete.");
        assert_eq!(run(&mut book, "delete_phone Bob 1234567890"), "Record not found");
    }

    #[test]
    fn test_delete_contact() {
        let mut book = AddressBook::new();
        run(&mut book, "add Alice 1234567890");

        assert_eq!(run(&mut book, "delete Alice"), "Record delete");
        assert!(book.find("Alice").is_none());
        assert_eq!(run(&mut book, "delete Alice"), "Record not found");
    }

    #[test]
    fn test_birthday_commands() {
        let mut book = AddressBook::new();
        run(&mut book, "add Alice 1234567890");

        assert_eq!(
            run(&mut book, "show_birthday Alice"),
            "Contact name: Alice, birthday: not set"
        );
        assert_eq!(
            run(&mut book, "add_birthday Alice 1990-06-15"),
            "Invalid date format. Use DD.MM.YYYY"
        );
        assert_eq!(run(&mut book, "add_birthday Alice 15.06.1990"), "Birthday added");
        assert_eq!(run(&mut book, "add_birthday Bob 15.06.1990"), "Record not found");
        assert_eq!(
            run(&mut book, "show_birthday Alice"),
            "Contact name: Alice, birthday: 15.06.1990"
        );
        assert_eq!(run(&mut book, "show_birthday Bob"), "Record not found");

        let report = run(&mut book, "birthdays");
        assert!(report.contains("Congratulation date"));
        assert!(report.contains("| Alice | 17.06.2024"));
    }

    #[test]
    fn test_hello_all_and_unknown() {
        let mut book = AddressBook::new();
        assert_eq!(run(&mut book, "HELLO"), "How can I help you?");
        assert!(run(&mut book, "all").contains("| Name | Phones |"));
        assert_eq!(run(&mut book, "dance"), "Invalid command.");
    }

    #[test]
    fn test_exit_reply() {
        let mut book = AddressBook::new();
        let input = parse_input("close").unwrap();
        assert_eq!(execute(&input, &mut book, window()), Reply::Exit);
    }
}
