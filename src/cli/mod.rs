//! Command-line front end: tokenizer, dispatcher, and the input loop.

pub mod parser;
pub mod repl;
pub mod session;

pub use parser::{parse_input, Command, COMMAND_NAMES};
pub use repl::run;
pub use session::{Reply, Session};
