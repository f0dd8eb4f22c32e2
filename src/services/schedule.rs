//! Weekly birthday notification rule.
//!
//! A birthday is projected onto the current year and then sorted into one
//! of three cases:
//!
//! - **On time**: it falls on a weekday within the next seven days
//!   (today included). It is announced on that day.
//! - **Already passed**: it fell on a weekday earlier this year. It is
//!   not announced.
//! - **Rolled to Monday**: everything else, weekend birthdays in
//!   particular. It is announced on the Monday after the projected date.
//!
//! The third case is a catch-all, so a weekday birthday more than a week
//! away is also rolled to the Monday after it, and a weekend birthday from
//! earlier in the year is rolled to a Monday that has already gone by.
//! Both outcomes are kept as-is and pinned by tests.

use crate::domain::BirthdayDate;
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Display format for notification dates.
pub const NOTIFICATION_DATE_FORMAT: &str = "%Y.%m.%d";

/// Length of the forward window, in days.
pub const WINDOW_DAYS: i64 = 7;

/// How a birthday was resolved against "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleCase {
    /// Weekday birthday inside the forward window; announced on the day
    OnTime(NaiveDate),

    /// Weekday birthday earlier this year; skipped
    AlreadyPassed,

    /// Announced on the Monday following the projected date
    RolledToMonday(NaiveDate),

    /// The projected date could not be represented (year out of range)
    Unschedulable,
}

impl ScheduleCase {
    /// The notification date, if this case produces one.
    pub fn notification_date(&self) -> Option<NaiveDate> {
        match self {
            Self::OnTime(date) | Self::RolledToMonday(date) => Some(*date),
            Self::AlreadyPassed | Self::Unschedulable => None,
        }
    }
}

/// Sort a birthday into its schedule case relative to `today`.
pub fn classify(birthday: &BirthdayDate, today: NaiveDate) -> ScheduleCase {
    let Some(projected) = birthday.projected_onto(today.year()) else {
        return ScheduleCase::Unschedulable;
    };

    let delta = (projected - today).num_days();
    let weekend = is_weekend(projected);

    if (0..WINDOW_DAYS).contains(&delta) && !weekend {
        return ScheduleCase::OnTime(projected);
    }

    if delta < 0 && !weekend {
        return ScheduleCase::AlreadyPassed;
    }

    match next_monday(projected) {
        Some(monday) => ScheduleCase::RolledToMonday(monday),
        None => ScheduleCase::Unschedulable,
    }
}

/// The date this birthday should be announced on, or `None` if it is skipped.
pub fn notification_date(birthday: &BirthdayDate, today: NaiveDate) -> Option<NaiveDate> {
    classify(birthday, today).notification_date()
}

/// Format a notification date as `YYYY.MM.DD`.
pub fn format_notification_date(date: NaiveDate) -> String {
    date.format(NOTIFICATION_DATE_FORMAT).to_string()
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Strictly after `date`: a Monday maps to the Monday a week later.
fn next_monday(date: NaiveDate) -> Option<NaiveDate> {
    let days_until_monday = 7 - date.weekday().num_days_from_monday();
    date.checked_add_days(Days::new(u64::from(days_until_monday)))
}
