//! Error types for the assistant bot.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Domain validation failures live in [`crate::domain::ValidationError`] and are
//! wrapped here when they surface through a command.

use crate::domain::ValidationError;
use thiserror::Error;

/// A lookup by name found nothing.
///
/// These are expected outcomes: callers branch on them and report them to
/// the user, they never end the session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No contact with this name in the directory
    #[error("Record for {0} not found in Address book.")]
    ContactNotFound(String),

    /// No birthday with this name in the registry
    #[error("Birthday for {0} not found in Birthday book.")]
    BirthdayNotFound(String),
}

/// Errors that can occur while executing a user command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Command invoked without its required parts
    #[error("Invalid input for '{command}' command. Usage: {usage}")]
    MissingArgument {
        command: &'static str,
        usage: &'static str,
    },

    /// Command word not recognised
    #[error("Invalid command.")]
    UnknownCommand(String),

    /// A phone, date, or name failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A contact or birthday was not found
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with LookupError
pub type LookupResult<T> = Result<T, LookupError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
