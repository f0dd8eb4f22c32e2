//! In-memory birthday registry and the upcoming-week schedule.

use crate::domain::{BirthdayDate, ContactName};
use crate::error::{LookupError, LookupResult};
use crate::services::schedule::{self, ScheduleCase};
use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::fmt;
use tracing::{debug, warn};

/// A birthday to announce this week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    pub name: ContactName,

    /// Business day the birthday is announced on
    #[serde(serialize_with = "serialize_notification_date")]
    pub date: NaiveDate,
}

fn serialize_notification_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&schedule::format_notification_date(*date))
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}",
            self.name,
            schedule::format_notification_date(self.date)
        )
    }
}

/// Birthdays keyed by contact name, in insertion order.
///
/// Independent of the contact directory: the name is the only link.
#[derive(Debug, Clone, Default)]
pub struct BirthdayRegistry {
    entries: Vec<(ContactName, BirthdayDate)>,
}

impl BirthdayRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a birthday, replacing any previous one for the same name.
    ///
    /// A replaced entry keeps its original position.
    pub fn add(&mut self, name: ContactName, birthday: BirthdayDate) -> String {
        let message = format!("Birthday was successfully added for '{}'", name);

        match self.position(name.as_str()) {
            Some(idx) => {
                debug!(name = %name, birthday = %birthday, "Replaced birthday");
                self.entries[idx].1 = birthday;
            }
            None => {
                debug!(name = %name, birthday = %birthday, "Added birthday");
                self.entries.push((name, birthday));
            }
        }

        message
    }

    pub fn find(&self, name: &str) -> Option<&BirthdayDate> {
        self.entries
            .iter()
            .find(|(stored, _)| stored.as_str() == name)
            .map(|(_, birthday)| birthday)
    }

    /// Remove a birthday by name, returning it.
    pub fn remove(&mut self, name: &str) -> LookupResult<BirthdayDate> {
        let idx = self
            .position(name)
            .ok_or_else(|| LookupError::BirthdayNotFound(name.to_string()))?;
        let (_, birthday) = self.entries.remove(idx);
        debug!(name = %name, "Removed birthday");
        Ok(birthday)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ContactName, &BirthdayDate)> {
        self.entries.iter().map(|(name, birthday)| (name, birthday))
    }

    /// Human-readable listing of every stored birthday.
    pub fn list_all(&self) -> String {
        if self.entries.is_empty() {
            return "There are no birthdays in the Birthday book.".to_string();
        }

        let mut result = String::from(">>> All Birthdays:");
        for (name, birthday) in &self.entries {
            result.push('\n');
            result.push_str(&format!("'name': {}, 'birthday': {}", name, birthday));
        }
        result
    }

    /// Birthdays to announce relative to `today`, in insertion order.
    pub fn upcoming(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        let mut upcoming = Vec::new();

        for (name, birthday) in &self.entries {
            let case = schedule::classify(birthday, today);
            match case {
                ScheduleCase::Unschedulable => {
                    warn!(
                        name = %name,
                        birthday = %birthday,
                        "Birthday cannot be projected"
                    );
                }
                ScheduleCase::AlreadyPassed => {
                    debug!(name = %name, "Birthday already passed");
                }
                ScheduleCase::OnTime(date) | ScheduleCase::RolledToMonday(date) => {
                    debug!(name = %name, ?case, "Birthday scheduled");
                    upcoming.push(UpcomingBirthday {
                        name: name.clone(),
                        date,
                    });
                }
            }
        }

        upcoming
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(stored, _)| stored.as_str() == name)
    }
}
