//! BirthdayDate value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Input format accepted for birthdays.
pub const BIRTHDAY_INPUT_FORMAT: &str = "%d.%m.%Y";

static BIRTHDAY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile birthday regex")
});

/// A validated birthday.
///
/// Built only from a `DD.MM.YYYY` string naming a real calendar date. The
/// year is kept for display; recurrence only looks at month and day.
///
/// # Example
///
/// ```
/// use assistant_bot::domain::BirthdayDate;
///
/// let birthday = BirthdayDate::new("15.06.1990").unwrap();
/// assert_eq!((birthday.day(), birthday.month(), birthday.year()), (15, 6, 1990));
/// assert!(BirthdayDate::new("31.02.1990").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BirthdayDate(NaiveDate);

impl BirthdayDate {
    /// Parse a birthday from `DD.MM.YYYY`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDateFormat` if the string has the
    /// wrong shape or is not a real date (e.g. `31.04.2000`, `29.02.2023`).
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        if !BIRTHDAY_REGEX.is_match(raw) {
            return Err(ValidationError::InvalidDateFormat(raw.to_string()));
        }

        NaiveDate::parse_from_str(raw, BIRTHDAY_INPUT_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDateFormat(raw.to_string()))
    }

    /// Wrap an already valid date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// The full stored date, including the birth year.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// This birthday's month and day in `year`.
    ///
    /// A 29 February birthday lands on 28 February in non-leap years.
    /// Returns `None` only when `year` is outside chrono's supported range.
    pub fn projected_onto(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month(), self.day()).or_else(|| {
            if self.month() == 2 && self.day() == 29 {
                NaiveDate::from_ymd_opt(year, 2, 28)
            } else {
                None
            }
        })
    }
}

impl FromStr for BirthdayDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// Serialized in the same DD.MM.YYYY form it is entered in.
impl Serialize for BirthdayDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0
            .format(BIRTHDAY_INPUT_FORMAT)
            .to_string()
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BirthdayDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BirthdayDate::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for BirthdayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_valid() {
        let birthday = BirthdayDate::new("15.06.1990").unwrap();
        assert_eq!(birthday.day(), 15);
        assert_eq!(birthday.month(), 6);
        assert_eq!(birthday.year(), 1990);
        assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(1990, 6, 15).unwrap());
    }

    #[test]
    fn test_birthday_validates_format() {
        assert!(BirthdayDate::new("").is_err());
        assert!(BirthdayDate::new("1990-06-15").is_err());
        assert!(BirthdayDate::new("15/06/1990").is_err());
        assert!(BirthdayDate::new("5.06.1990").is_err());
        assert!(BirthdayDate::new("15.6.1990").is_err());
        assert!(BirthdayDate::new("15.06.90").is_err());
        assert!(BirthdayDate::new("15.06.1990x").is_err());
        assert!(BirthdayDate::new(" 15.06.1990").is_err());
        assert!(BirthdayDate::new("01.01.2000").is_ok());
    }

    #[test]
    fn test_birthday_rejects_impossible_dates() {
        assert!(BirthdayDate::new("32.01.2000").is_err());
        assert!(BirthdayDate::new("00.01.2000").is_err());
        assert!(BirthdayDate::new("10.13.2000").is_err());
        assert!(BirthdayDate::new("31.04.2000").is_err());
        assert!(BirthdayDate::new("29.02.2023").is_err());
        assert!(BirthdayDate::new("29.02.2024").is_ok());
    }

    #[test]
    fn test_birthday_error_variant() {
        assert_eq!(
            BirthdayDate::new("31.02.2000"),
            Err(ValidationError::InvalidDateFormat("31.02.2000".to_string()))
        );
    }

    #[test]
    fn test_birthday_projection() {
        let birthday = BirthdayDate::new("15.06.1990").unwrap();
        assert_eq!(
            birthday.projected_onto(2024),
            NaiveDate::from_ymd_opt(2024, 6, 15)
        );
    }

    #[test]
    fn test_leap_day_projects_onto_feb_28() {
        let birthday = BirthdayDate::new("29.02.2000").unwrap();
        assert_eq!(
            birthday.projected_onto(2023),
            NaiveDate::from_ymd_opt(2023, 2, 28)
        );
        assert_eq!(
            birthday.projected_onto(2024),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
    }

    #[test]
    fn test_birthday_display_is_iso() {
        let birthday = BirthdayDate::new("03.11.1985").unwrap();
        assert_eq!(birthday.to_string(), "1985-11-03");
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = BirthdayDate::new("03.11.1985").unwrap();
        assert_eq!(serde_json::to_string(&birthday).unwrap(), "\"03.11.1985\"");
        let parsed: BirthdayDate = serde_json::from_str("\"03.11.1985\"").unwrap();
        assert_eq!(parsed, birthday);
    }
}
