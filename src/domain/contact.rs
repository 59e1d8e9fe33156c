use core::fmt;

use chrono::NaiveDate;

use crate::errors::AppError;
use crate::validation::{parse_birthday, validate_phone};

/// A single contact: a unique name, its phone numbers in the order
/// they were added, and an optional birthday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub phones: Vec<String>,
    pub birthday: Option<NaiveDate>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Record {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn add_phone(&mut self, number: &str) -> Result<(), AppError> {
        if !validate_phone(number) {
            return Err(AppError::Validation(
                "Phone number must be 10 digits.".to_string(),
            ));
        }
        self.phones.push(number.to_string());
        Ok(())
    }

    /// Removes the first matching phone; no-op if absent.
    pub fn remove_phone(&mut self, number: &str) {
        if let Some(pos) = self.phones.iter().position(|p| p == number) {
            self.phones.remove(pos);
        }
    }

    /// Replaces the first occurrence of `old` with `new`.
    ///
    /// The new number is validated before `old` is looked up, so a
    /// malformed replacement errors even when `old` is absent. An
    /// absent `old` with a valid `new` is a no-op.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), AppError> {
        if !validate_phone(new) {
            return Err(AppError::Validation(
                "Phone number must be 10 digits.".to_string(),
            ));
        }
        if let Some(pos) = self.phones.iter().position(|p| p == old) {
            self.phones[pos] = new.to_string();
        }
        Ok(())
    }

    pub fn find_phone(&self, number: &str) -> Option<&str> {
        self.phones
            .iter()
            .find(|p| p.as_str() == number)
            .map(String::as_str)
    }

    /// Sets the birthday from a `DD.MM.YYYY` string.
    pub fn set_birthday(&mut self, value: &str) -> Result<(), AppError> {
        self.birthday = Some(parse_birthday(value)?);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones.join("; ")
        )
    }
}
