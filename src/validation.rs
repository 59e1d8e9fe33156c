use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::errors::AppError;

// Exactly 10 ASCII digits, nothing else
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is a valid regex"));

/// Input and display format for birthdays.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

pub fn validate_name(name: &str) -> bool {
    // Must be non-empty after trimming
    !name.trim().is_empty()
}

pub fn validate_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Parses a `DD.MM.YYYY` string into a calendar date.
pub fn parse_birthday(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
        .map_err(|_| AppError::Validation("Invalid date format. Use DD.MM.YYYY".to_string()))
}

pub fn format_birthday(date: NaiveDate) -> String {
    date.format(BIRTHDAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ten_digit_numbers() {
        assert!(validate_phone("0123456789"));
        assert!(validate_phone("9999999999"));
    }

    #[test]
    fn rejects_wrong_length_or_non_digits() {
        assert!(!validate_phone(""));
        assert!(!validate_phone("123"));
        assert!(!validate_phone("12345678901"));
        assert!(!validate_phone("123456789a"));
        assert!(!validate_phone("12345 6789"));
        assert!(!validate_phone("+123456789"));
    }

    #[test]
    fn rejects_blank_names() {
        assert!(!validate_name(""));
        assert!(!validate_name("   "));
        assert!(validate_name("Alice"));
    }

    #[test]
    fn birthday_parse_round_trips() -> Result<(), AppError> {
        let date = parse_birthday("24.03.1999")?;
        assert_eq!(format_birthday(date), "24.03.1999");
        Ok(())
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(parse_birthday("1999-03-24").is_err());
        assert!(parse_birthday("32.01.2000").is_err());
        assert!(parse_birthday("29.02.2023").is_err());
        assert!(parse_birthday("24.03.1999 extra").is_err());
        assert!(parse_birthday("").is_err());
    }

    #[test]
    fn accepts_leap_day_in_leap_years() {
        assert!(parse_birthday("29.02.2000").is_ok());
    }
}
