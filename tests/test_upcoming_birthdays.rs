//! Weekly schedule scenarios for the birthday registry.
//!
//! All scenarios use Wednesday 12 June 2024 as "today" unless noted.

mod common;

use assistant_bot::UpcomingBirthday;
use common::{registry_with, wednesday, ymd};

fn formatted(upcoming: &[UpcomingBirthday]) -> Vec<String> {
    upcoming.iter().map(|entry| entry.to_string()).collect()
}

#[test]
fn test_saturday_birthday_rolls_to_monday() {
    let registry = registry_with(&[("John", "15.06.1990")]);
    let upcoming = registry.upcoming(wednesday());

    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].date, ymd(2024, 6, 17));
    assert_eq!(formatted(&upcoming), vec!["John, 2024.06.17"]);
}

#[test]
fn test_weekday_birthday_kept_as_is() {
    let registry = registry_with(&[("Jane", "13.06.1985")]);
    assert_eq!(formatted(&registry.upcoming(wednesday())), vec!["Jane, 2024.06.13"]);
}

#[test]
fn test_passed_weekday_birthday_is_omitted() {
    let registry = registry_with(&[("Bob", "10.06.1992")]);
    assert!(registry.upcoming(wednesday()).is_empty());
}

#[test]
fn test_mixed_registry_keeps_insertion_order() {
    let registry = registry_with(&[
        ("John", "15.06.1990"),
        ("Bob", "10.06.1992"),
        ("Jane", "13.06.1985"),
        ("Ann", "16.06.2001"),
    ]);

    assert_eq!(
        formatted(&registry.upcoming(wednesday())),
        vec!["John, 2024.06.17", "Jane, 2024.06.13", "Ann, 2024.06.17"]
    );
}

#[test]
fn test_every_notification_is_a_business_day() {
    use chrono::{Datelike, Weekday};

    let entries: Vec<(String, String)> = (1..=30)
        .map(|day| (format!("p{}", day), format!("{:02}.06.1990", day)))
        .collect();
    let refs: Vec<(&str, &str)> = entries
        .iter()
        .map(|(n, d)| (n.as_str(), d.as_str()))
        .collect();
    let registry = registry_with(&refs);

    for entry in registry.upcoming(wednesday()) {
        assert!(
            !matches!(entry.date.weekday(), Weekday::Sat | Weekday::Sun),
            "{} lands on a weekend",
            entry
        );
    }
}

#[test]
fn test_year_of_birth_is_ignored() {
    let registry = registry_with(&[("Old", "13.06.1901"), ("Young", "13.06.2020")]);
    assert_eq!(
        formatted(&registry.upcoming(wednesday())),
        vec!["Old, 2024.06.13", "Young, 2024.06.13"]
    );
}

// The rollover rule is a catch-all: anything that is neither "weekday in
// the next seven days" nor "weekday already passed" is moved to the Monday
// after its projected date. These tests pin that behavior.

#[test]
fn test_weekend_earlier_this_week_rolls_to_past_monday() {
    // Sunday 9 June, three days before today
    let registry = registry_with(&[("Sam", "09.06.1990")]);
    assert_eq!(formatted(&registry.upcoming(wednesday())), vec!["Sam, 2024.06.10"]);
}

#[test]
fn test_far_future_weekday_is_rolled_not_skipped() {
    // Tuesday 24 December 2024
    let registry = registry_with(&[("Eve", "24.12.1990")]);
    assert_eq!(formatted(&registry.upcoming(wednesday())), vec!["Eve, 2024.12.30"]);
}

#[test]
fn test_rollover_into_next_year() {
    // Saturday 31 December 2022, today Wednesday 28 December 2022
    let registry = registry_with(&[("Neo", "31.12.1999")]);
    assert_eq!(
        formatted(&registry.upcoming(ymd(2022, 12, 28))),
        vec!["Neo, 2023.01.02"]
    );
}

#[test]
fn test_empty_registry_has_no_upcoming() {
    let registry = registry_with(&[]);
    assert!(registry.upcoming(wednesday()).is_empty());
}
