use core::fmt;

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    NotFound(String),
    ParseCommand(String),
    Arity(&'static str),
    Validation(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => {
                write!(f, "I/O error while reading input: {}", e)
            }
            AppError::NotFound(item) => {
                write!(f, "{} not found.", item)
            }
            AppError::ParseCommand(cmd) => {
                write!(f, "Invalid command: '{}'", cmd)
            }
            AppError::Arity(usage) => {
                write!(f, "Enter the argument for the command. Usage: {}", usage)
            }
            AppError::Validation(msg) => {
                write!(f, "{}", msg)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_missing_item() {
        let err = AppError::NotFound("Contact Alice".to_string());
        assert_eq!(err.to_string(), "Contact Alice not found.");
    }

    #[test]
    fn arity_error_shows_usage() {
        let err = AppError::Arity("add <name> <phone>");
        assert!(err.to_string().contains("add <name> <phone>"));
    }

    #[test]
    fn validation_message_passes_through_unchanged() {
        let err = AppError::Validation("Phone number must be 10 digits.".to_string());
        assert_eq!(err.to_string(), "Phone number must be 10 digits.");
    }
}
