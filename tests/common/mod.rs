//! Shared fixtures for integration tests.

use assistant_bot::{BirthdayDate, BirthdayRegistry, ContactName};
use chrono::NaiveDate;

/// Wednesday 12 June 2024.
#[allow(dead_code)]
pub fn wednesday() -> NaiveDate {
    ymd(2024, 6, 12)
}

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// A registry holding `(name, DD.MM.YYYY)` pairs in the given order.
#[allow(dead_code)]
pub fn registry_with(entries: &[(&str, &str)]) -> BirthdayRegistry {
    let mut registry = BirthdayRegistry::new();
    for (name, date) in entries {
        registry.add(
            ContactName::new(*name).unwrap(),
            BirthdayDate::new(date).unwrap(),
        );
    }
    registry
}
