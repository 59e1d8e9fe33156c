pub mod book;
pub mod contact;

pub use book::{ContactStore, Greeting};
pub use contact::Record;
