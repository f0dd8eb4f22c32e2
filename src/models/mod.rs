//! Data models for the assistant's address book.
//!
//! This module contains the contact record: a validated name together with
//! its ordered, duplicate-free list of phone numbers.

pub mod record;

pub use record::{ContactRecord, PhoneAdded, PhoneEdit};
