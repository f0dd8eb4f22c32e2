//! Fuzzy matching utilities.
//!
//! Used by the command loop to suggest the closest known command when the
//! user mistypes one.

pub mod command_matcher;

pub use command_matcher::CommandMatcher;
