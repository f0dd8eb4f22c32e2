//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    InvalidPhoneFormat(String),

    /// The provided birthday is not a real `DD.MM.YYYY` date.
    InvalidDateFormat(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
            Self::InvalidPhoneFormat(phone) => write!(
                f,
                "Number - {} - incorrect, it has {} figures (expected 10 digits)",
                phone,
                phone.chars().count()
            ),
            Self::InvalidDateFormat(date) => {
                write!(f, "Invalid date format: {}. Use DD.MM.YYYY", date)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::InvalidPhoneFormat("12345".to_string()).to_string(),
            "Number - 12345 - incorrect, it has 5 figures (expected 10 digits)"
        );
        assert_eq!(
            ValidationError::InvalidDateFormat("2024-06-15".to_string()).to_string(),
            "Invalid date format: 2024-06-15. Use DD.MM.YYYY"
        );
        assert_eq!(
            ValidationError::EmptyName.to_string(),
            "Contact name cannot be empty"
        );
    }
}
