pub mod command;
pub mod run;

use core::fmt;
use std::io::{self, Write};

use crate::errors::AppError;

/// Reads one trimmed line from stdin; `None` means end of input.
pub fn get_input() -> Result<Option<String>, AppError> {
    let mut input = String::new();
    let read = io::stdin().read_line(&mut input)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

pub fn prompt(text: impl fmt::Display) -> Result<(), AppError> {
    print!("{}", text);
    io::stdout().flush()?;
    Ok(())
}
