use crate::errors::AppError;

/// A fully-parsed user command with its arguments.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Change { name: String, old: String, new: String },
    Phone { name: String },
    All,
    AddBirthday { name: String, birthday: String },
    ShowBirthday { name: String },
    Birthdays,
    Exit,
}

/// Parses a raw input line into a command.
///
/// The command word is case-insensitive; arguments are taken verbatim.
/// Surplus arguments are ignored, missing ones are an arity error.
pub fn parse_command(line: &str) -> Result<Command, AppError> {
    let mut tokens = line.split_whitespace();

    let word = match tokens.next() {
        Some(word) => word.to_lowercase(),
        None => return Err(AppError::ParseCommand(String::new())),
    };
    let args: Vec<&str> = tokens.collect();

    match word.as_str() {
        "hello" => Ok(Command::Hello),
        "all" => Ok(Command::All),
        "birthdays" => Ok(Command::Birthdays),
        "exit" | "close" => Ok(Command::Exit),
        "add" => match args[..] {
            [name, phone, ..] => Ok(Command::Add {
                name: name.to_string(),
                phone: phone.to_string(),
            }),
            _ => Err(AppError::Arity("add <name> <phone>")),
        },
        "change" => match args[..] {
            [name, old, new, ..] => Ok(Command::Change {
                name: name.to_string(),
                old: old.to_string(),
                new: new.to_string(),
            }),
            _ => Err(AppError::Arity("change <name> <old-phone> <new-phone>")),
        },
        "phone" => match args[..] {
            [name, ..] => Ok(Command::Phone {
                name: name.to_string(),
            }),
            _ => Err(AppError::Arity("phone <name>")),
        },
        "add-birthday" => match args[..] {
            [name, birthday, ..] => Ok(Command::AddBirthday {
                name: name.to_string(),
                birthday: birthday.to_string(),
            }),
            _ => Err(AppError::Arity("add-birthday <name> <DD.MM.YYYY>")),
        },
        "show-birthday" => match args[..] {
            [name, ..] => Ok(Command::ShowBirthday {
                name: name.to_string(),
            }),
            _ => Err(AppError::Arity("show-birthday <name>")),
        },
        _ => Err(AppError::ParseCommand(word)),
    }
}
