//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the values the assistant
//! stores: contact names, phone numbers, and birthdays. These value objects
//! provide validation at construction time and prevent invalid data from
//! being represented in the system.

pub mod birthday;
pub mod contact_name;
pub mod errors;
pub mod phone;

pub use birthday::BirthdayDate;
pub use contact_name::ContactName;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
