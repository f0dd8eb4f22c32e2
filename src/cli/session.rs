//! Command dispatch over the session's two stores.
//!
//! The session owns the contact directory and the birthday registry and
//! turns every command into a reply line. Errors never end the session;
//! they are rendered as replies like any other outcome.

use super::parser::{parse_input, Command, COMMAND_NAMES};
use crate::domain::{BirthdayDate, ContactName};
use crate::error::{CommandError, CommandResult, LookupError};
use crate::matching::CommandMatcher;
use crate::models::{ContactRecord, PhoneAdded, PhoneEdit};
use crate::repositories::{BirthdayRegistry, ContactDirectory};
use chrono::NaiveDate;
use tracing::{debug, info};

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and read the next command
    Continue(String),
    /// Print the message and stop
    Exit(String),
}

impl Reply {
    pub fn message(&self) -> &str {
        match self {
            Self::Continue(message) | Self::Exit(message) => message,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Exit(_))
    }
}

/// One interactive session: the address book, the birthday book, and
/// the command suggestions.
#[derive(Debug, Clone)]
pub struct Session {
    contacts: ContactDirectory,
    birthdays: BirthdayRegistry,
    matcher: CommandMatcher,
}

impl Session {
    /// Create an empty session. `suggestion_threshold` is the minimum
    /// similarity (0-100) for a "did you mean" hint.
    pub fn new(suggestion_threshold: u8) -> Self {
        Self {
            contacts: ContactDirectory::new(),
            birthdays: BirthdayRegistry::new(),
            matcher: CommandMatcher::new(&COMMAND_NAMES, suggestion_threshold),
        }
    }

    pub fn contacts(&self) -> &ContactDirectory {
        &self.contacts
    }

    pub fn birthdays(&self) -> &BirthdayRegistry {
        &self.birthdays
    }

    /// Parse and run one input line against `today`.
    ///
    /// Returns `None` for a blank line.
    pub fn handle_line(&mut self, line: &str, today: NaiveDate) -> Option<Reply> {
        let result = parse_input(line).and_then(|command| match command {
            Some(command) => self.execute(command, today).map(Some),
            None => Ok(None),
        });

        match result {
            Ok(reply) => reply,
            Err(err) => Some(Reply::Continue(self.describe_error(&err))),
        }
    }

    /// Run a parsed command.
    ///
    /// # Errors
    ///
    /// Validation and lookup failures, for the caller to report.
    pub fn execute(&mut self, command: Command, today: NaiveDate) -> CommandResult<Reply> {
        debug!(?command, "Executing command");

        let message = match command {
            Command::Hello => "How can I help you?".to_string(),
            Command::Add { name, phone } => self.add_contact(&name, &phone)?,
            Command::Change { name, old, new } => {
                let record = self.contacts.find_mut(&name)?;
                match record.edit_phone(&old, &new)? {
                    PhoneEdit::Changed => format!("Contact '{}' changed.", name),
                    PhoneEdit::NotFound => {
                        format!("Such number {} isn't in Address book", old)
                    }
                }
            }
            Command::Phone { name } => self.contacts.find(&name)?.to_string(),
            Command::All => format!(
                "{}\n{}",
                self.contacts.show_all(),
                self.upcoming_report(today)
            ),
            Command::AddBirthday { name, date } => {
                if !self.contacts.contains(&name) {
                    return Err(LookupError::ContactNotFound(name).into());
                }
                let birthday = BirthdayDate::new(&date)?;
                self.birthdays.add(ContactName::new(name)?, birthday)
            }
            Command::ShowBirthday { name } => {
                if !self.contacts.contains(&name) {
                    return Ok(Reply::Continue(format!(
                        "Invalid contact name: '{}'.",
                        name
                    )));
                }
                match self.birthdays.find(&name) {
                    Some(birthday) => format!("Birthday day for '{}' ---> {}", name, birthday),
                    None => format!("No birthday found for '{}'.", name),
                }
            }
            Command::Birthdays => self.birthdays.list_all(),
            Command::RemovePhone { name, phone } => {
                let record = self.contacts.find_mut(&name)?;
                if record.remove_phone(&phone)? {
                    format!("Phone {} removed from '{}'.", phone, name)
                } else {
                    format!("Such number {} isn't in Address book", phone)
                }
            }
            Command::Delete { name } => {
                self.contacts.delete(&name)?;
                format!("Contact '{}' deleted.", name)
            }
            Command::RemoveBirthday { name } => {
                self.birthdays.remove(&name)?;
                format!("Birthday for '{}' removed.", name)
            }
            Command::Upcoming => self.upcoming_report(today),
            Command::Exit => {
                info!("Session closed by user");
                return Ok(Reply::Exit("Goodbye!".to_string()));
            }
        };

        Ok(Reply::Continue(message))
    }

    /// Add a phone to `name`, creating the contact on first use.
    ///
    /// An invalid phone leaves the directory untouched.
    fn add_contact(&mut self, name: &str, phone: &str) -> CommandResult<String> {
        if let Ok(record) = self.contacts.find_mut(name) {
            let message = match record.add_phone(phone)? {
                PhoneAdded::Added => format!("Phone {} added to '{}'.", phone, name),
                PhoneAdded::AlreadyPresent => {
                    format!("Phone {} is already stored for '{}'.", phone, name)
                }
            };
            return Ok(message);
        }

        let mut record = ContactRecord::new(ContactName::new(name)?);
        record.add_phone(phone)?;
        let message = format!("Contact '{}' added.", record.name());
        self.contacts.add_record(record);
        Ok(message)
    }

    fn upcoming_report(&self, today: NaiveDate) -> String {
        let mut report = String::from(">>> List of upcoming birthdays this week:");
        for entry in self.birthdays.upcoming(today) {
            report.push_str(&format!("\n* {}", entry));
        }
        report
    }

    fn describe_error(&self, err: &CommandError) -> String {
        debug!(error = %err, "Command failed");

        match err {
            CommandError::UnknownCommand(word) => match self.matcher.suggest(word) {
                Some(suggestion) => format!("{} Did you mean '{}'?", err, suggestion),
                None => err.to_string(),
            },
            _ => err.to_string(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(60)
    }
}
