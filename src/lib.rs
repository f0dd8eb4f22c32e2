//! Assistant Bot - an interactive command-line assistant for contacts and birthdays.
//!
//! The assistant keeps an in-memory address book (names with validated phone
//! numbers) and a birthday book, and works out which birthdays to announce
//! this week, moving weekend birthdays to the following Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (phone numbers, birthdays, names)
//! - **models**: The contact record and its phone mutations
//! - **repositories**: In-memory contact directory and birthday registry
//! - **services**: The weekly birthday notification rule
//! - **matching**: "Did you mean" suggestions for mistyped commands
//! - **cli**: Command tokenizer, session dispatcher, and the input loop
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod repositories;
pub mod services;

pub use cli::{Command, Reply, Session};
pub use config::Config;
pub use domain::{BirthdayDate, ContactName, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError, LookupError};
pub use models::{ContactRecord, PhoneAdded, PhoneEdit};
pub use repositories::{BirthdayRegistry, ContactDirectory, UpcomingBirthday};
