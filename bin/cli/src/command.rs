//! Line commands understood by the terminal host.

use std::fmt;
use std::str::FromStr;

/// Usage text printed by `help`.
pub const USAGE: &str = "\
Commands:
  scopes                  list the scopes on offer
  select <label|value>    choose a scope
  unselect                clear the scope selection
  load                    fetch records in the background
  clear                   empty the loaded records
  show                    display the loaded records
  help                    show this message
  quit                    leave";

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Scopes,
    Select(String),
    Unselect,
    Load,
    Clear,
    Show,
    Quit,
}

/// Errors from parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The line is blank.
    Empty,
    /// The command word is not recognized.
    Unknown { command: String },
    /// The command needs an argument.
    MissingArgument { command: &'static str },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty command"),
            Self::Unknown { command } => {
                write!(f, "Unknown command '{command}'. Type 'help' for a list.")
            }
            Self::MissingArgument { command } => {
                write!(f, "'{command}' needs an argument")
            }
        }
    }
}

impl std::error::Error for CommandError {}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim()));

        match word.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "help" | "?" => Ok(Self::Help),
            "scopes" => Ok(Self::Scopes),
            "select" if rest.is_empty() => Err(CommandError::MissingArgument { command: "select" }),
            "select" => Ok(Self::Select(rest.to_string())),
            "unselect" => Ok(Self::Unselect),
            "load" => Ok(Self::Load),
            "clear" => Ok(Self::Clear),
            "show" => Ok(Self::Show),
            "quit" | "exit" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown {
                command: word.to_string(),
            }),
        }
    }
}
