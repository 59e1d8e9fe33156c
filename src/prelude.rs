pub use crate::cli::{command, run::run_app};
pub use crate::domain::{
    book::{ContactStore, Greeting},
    contact::Record,
};
pub use crate::errors::AppError;
