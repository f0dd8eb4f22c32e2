//! Tokenizer for command lines.
//!
//! A line is split on whitespace; the first token is the command word
//! (case-insensitive) and the rest are its arguments. Extra arguments are
//! ignored.

use crate::error::{CommandError, CommandResult};

/// Every command word the assistant understands.
pub const COMMAND_NAMES: [&str; 14] = [
    "hello",
    "add",
    "change",
    "phone",
    "all",
    "add-birthday",
    "show-birthday",
    "birthdays",
    "remove-phone",
    "delete",
    "remove-birthday",
    "upcoming",
    "close",
    "exit",
];

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Change { name: String, old: String, new: String },
    Phone { name: String },
    All,
    AddBirthday { name: String, date: String },
    ShowBirthday { name: String },
    Birthdays,
    RemovePhone { name: String, phone: String },
    Delete { name: String },
    RemoveBirthday { name: String },
    Upcoming,
    Exit,
}

/// Parse one input line.
///
/// Returns `Ok(None)` for a blank line.
///
/// # Errors
///
/// - `CommandError::UnknownCommand` for an unrecognised command word
/// - `CommandError::MissingArgument` when required arguments are absent
pub fn parse_input(line: &str) -> CommandResult<Option<Command>> {
    let mut tokens = line.split_whitespace();
    let Some(word) = tokens.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = tokens.collect();
    let word = word.to_lowercase();

    let command = match word.as_str() {
        "hello" => Command::Hello,
        "add" => {
            let [name, phone] = take::<2>(&args, "add", "add <name> <phone>")?;
            Command::Add { name, phone }
        }
        "change" => {
            let [name, old, new] =
                take::<3>(&args, "change", "change <name> <old phone> <new phone>")?;
            Command::Change { name, old, new }
        }
        "phone" => {
            let [name] = take::<1>(&args, "phone", "phone <name>")?;
            Command::Phone { name }
        }
        "all" => Command::All,
        "add-birthday" => {
            let [name, date] =
                take::<2>(&args, "add-birthday", "add-birthday <name> <DD.MM.YYYY>")?;
            Command::AddBirthday { name, date }
        }
        "show-birthday" => {
            let [name] = take::<1>(&args, "show-birthday", "show-birthday <name>")?;
            Command::ShowBirthday { name }
        }
        "birthdays" => Command::Birthdays,
        "remove-phone" => {
            let [name, phone] =
                take::<2>(&args, "remove-phone", "remove-phone <name> <phone>")?;
            Command::RemovePhone { name, phone }
        }
        "delete" => {
            let [name] = take::<1>(&args, "delete", "delete <name>")?;
            Command::Delete { name }
        }
        "remove-birthday" => {
            let [name] = take::<1>(&args, "remove-birthday", "remove-birthday <name>")?;
            Command::RemoveBirthday { name }
        }
        "upcoming" => Command::Upcoming,
        "close" | "exit" => Command::Exit,
        _ => return Err(CommandError::UnknownCommand(word)),
    };

    Ok(Some(command))
}

/// The first `N` arguments, or a usage error.
fn take<const N: usize>(
    args: &[&str],
    command: &'static str,
    usage: &'static str,
) -> CommandResult<[String; N]> {
    if args.len() < N {
        return Err(CommandError::MissingArgument { command, usage });
    }
    Ok(std::array::from_fn(|i| args[i].to_string()))
}
