use chrono::Local;
use colored::Colorize;

use crate::cli;
use crate::cli::command::{Command, parse_command};
use crate::domain::ContactStore;
use crate::errors::AppError;
use crate::validation::format_birthday;

/// Runs the interactive loop until `exit`/`close` or end of input.
///
/// Command failures are rendered here and never kill the process;
/// only stdin/stdout errors propagate out.
pub fn run_app() -> Result<(), AppError> {
    let mut book = ContactStore::new();

    println!("{}", "Welcome to the assistant bot!".blue());

    loop {
        cli::prompt("Enter a command: ".blue())?;

        let Some(line) = cli::get_input()? else {
            break;
        };

        if line.is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e.to_string().red());
                continue;
            }
        };

        let quitting = matches!(command, Command::Exit);

        match dispatch(command, &mut book) {
            Ok(output) => println!("{}", output.green()),
            Err(e) => println!("{}", e.to_string().red()),
        }

        if quitting {
            break;
        }
    }

    Ok(())
}

fn dispatch(command: Command, book: &mut ContactStore) -> Result<String, AppError> {
    match command {
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Exit => Ok("Good bye!".to_string()),
        Command::Add { name, phone } => add_contact(book, &name, &phone),
        Command::Change { name, old, new } => change_contact(book, &name, &old, &new),
        Command::Phone { name } => show_phone(book, &name),
        Command::All => list_all(book),
        Command::AddBirthday { name, birthday } => add_birthday(book, &name, &birthday),
        Command::ShowBirthday { name } => show_birthday(book, &name),
        Command::Birthdays => upcoming_birthdays(book),
    }
}

fn add_contact(book: &mut ContactStore, name: &str, phone: &str) -> Result<String, AppError> {
    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok("Contact updated.".to_string());
    }

    book.add(name)?;
    let record = book
        .find_mut(name)
        .ok_or_else(|| AppError::NotFound(format!("Contact {}", name)))?;
    if let Err(e) = record.add_phone(phone) {
        // A rejected phone must not leave a half-created contact behind
        book.delete(name);
        return Err(e);
    }
    Ok("Contact added.".to_string())
}

fn change_contact(
    book: &mut ContactStore,
    name: &str,
    old: &str,
    new: &str,
) -> Result<String, AppError> {
    let record = book
        .find_mut(name)
        .ok_or_else(|| AppError::NotFound(format!("Contact {}", name)))?;

    if record.find_phone(old).is_none() {
        return Err(AppError::NotFound(format!(
            "Phone {} for contact {}",
            old, name
        )));
    }

    record.edit_phone(old, new)?;
    Ok(format!(
        "Phone {} for contact {} was updated to {}.",
        old, name, new
    ))
}

fn show_phone(book: &ContactStore, name: &str) -> Result<String, AppError> {
    let record = book
        .find(name)
        .ok_or_else(|| AppError::NotFound(format!("Contact {}", name)))?;
    Ok(record.to_string())
}

fn list_all(book: &ContactStore) -> Result<String, AppError> {
    if book.is_empty() {
        return Ok("No contacts yet.".to_string());
    }
    let lines: Vec<String> = book.iter().map(|record| record.to_string()).collect();
    Ok(lines.join("\n"))
}

fn add_birthday(book: &mut ContactStore, name: &str, birthday: &str) -> Result<String, AppError> {
    let record = book
        .find_mut(name)
        .ok_or_else(|| AppError::NotFound(format!("Contact {}", name)))?;
    record.set_birthday(birthday)?;
    Ok(format!("Birthday was added to contact {}.", name))
}

fn show_birthday(book: &ContactStore, name: &str) -> Result<String, AppError> {
    let record = book
        .find(name)
        .ok_or_else(|| AppError::NotFound(format!("Contact {}", name)))?;
    match record.birthday {
        Some(date) => Ok(format!(
            "Contact {} has birthday {}",
            name,
            format_birthday(date)
        )),
        None => Ok(format!("No birthday set for contact {}.", name)),
    }
}

fn upcoming_birthdays(book: &ContactStore) -> Result<String, AppError> {
    let today = Local::now().date_naive();
    let greetings = book.upcoming_birthdays(today);

    if greetings.is_empty() {
        return Ok("No contacts with a birthday in the next 7 days.".to_string());
    }
    let lines: Vec<String> = greetings.iter().map(|greeting| greeting.to_string()).collect();
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_creates_then_updates() -> Result<(), AppError> {
        let mut book = ContactStore::new();
        assert_eq!(add_contact(&mut book, "John", "1234567890")?, "Contact added.");
        assert_eq!(
            add_contact(&mut book, "John", "5555555555")?,
            "Contact updated."
        );
        let record = book.find("John").ok_or(AppError::NotFound("John".to_string()))?;
        assert_eq!(record.phones, vec!["1234567890", "5555555555"]);
        Ok(())
    }

    #[test]
    fn rejected_phone_does_not_create_the_contact() {
        let mut book = ContactStore::new();
        assert!(add_contact(&mut book, "John", "12345").is_err());
        assert!(book.find("John").is_none());
    }

    #[test]
    fn change_requires_contact_and_old_phone() -> Result<(), AppError> {
        let mut book = ContactStore::new();
        assert!(matches!(
            change_contact(&mut book, "John", "1234567890", "5555555555"),
            Err(AppError::NotFound(_))
        ));

        add_contact(&mut book, "John", "1234567890")?;
        assert!(matches!(
            change_contact(&mut book, "John", "0000000000", "5555555555"),
            Err(AppError::NotFound(_))
        ));

        let message = change_contact(&mut book, "John", "1234567890", "5555555555")?;
        assert!(message.contains("was updated to 5555555555"));
        Ok(())
    }

    #[test]
    fn show_birthday_distinguishes_unset_from_unknown() -> Result<(), AppError> {
        let mut book = ContactStore::new();
        assert!(show_birthday(&book, "John").is_err());

        add_contact(&mut book, "John", "1234567890")?;
        assert_eq!(
            show_birthday(&book, "John")?,
            "No birthday set for contact John."
        );

        add_birthday(&mut book, "John", "24.03.1999")?;
        assert_eq!(
            show_birthday(&book, "John")?,
            "Contact John has birthday 24.03.1999"
        );
        Ok(())
    }

    #[test]
    fn list_all_reports_empty_store() -> Result<(), AppError> {
        let book = ContactStore::new();
        assert_eq!(list_all(&book)?, "No contacts yet.");
        Ok(())
    }
}
