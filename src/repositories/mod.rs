//! In-memory stores for the session.
//!
//! The contact directory and the birthday registry are independent stores
//! correlated only by contact name.

mod birthday_registry;
mod contact_directory;

pub use birthday_registry::{BirthdayRegistry, UpcomingBirthday};
pub use contact_directory::ContactDirectory;
