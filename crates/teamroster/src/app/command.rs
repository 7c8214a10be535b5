//! Parsing of interactive command lines.
//!
//! The words that are accepted depend on the current [`Mode`]: `add`, `edit`
//! and `delete` while browsing, field names plus `save`/`cancel` inside the
//! form, and `yes`/`no` while a delete is pending. `list`, `stats`, `show`,
//! `help` and `quit` work everywhere.

use thiserror::Error;

use super::form::Field;
use super::{Action, Mode};
use crate::team::TeamId;

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the team list.
    List {
        /// Print JSON instead of cards.
        json: bool,
    },
    /// Print the statistics panel.
    Stats {
        /// Print JSON instead of the panel.
        json: bool,
    },
    /// Re-render the current view.
    Show,
    /// Print the command reference.
    Help,
    /// End the session.
    Quit,
    /// Forward an action to the app.
    Act(Action),
}

/// Why a command line was not understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    /// The first word is not a command in this mode.
    #[error("unknown command '{0}', type 'help' for a list")]
    Unknown(String),

    /// A required argument is missing.
    #[error("'{command}' needs {expected}")]
    MissingArgument {
        /// The command word.
        command: &'static str,
        /// What was expected.
        expected: &'static str,
    },

    /// The argument is not a team id.
    #[error("'{0}' is not a team id")]
    InvalidId(String),
}

/// Parse one input line in the context of `mode`.
///
/// Returns `Ok(None)` for a blank line.
///
/// # Errors
///
/// Returns an error if the line is not a command available in `mode`.
pub fn parse_command(line: &str, mode: &Mode) -> Result<Option<Command>, ParseCommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let word = word.to_ascii_lowercase();
    let json = rest == "--json";

    let command = match (word.as_str(), mode) {
        ("help" | "?", _) => Command::Help,
        ("quit" | "exit" | "q", _) => Command::Quit,
        ("list" | "ls", _) => Command::List { json },
        ("stats", _) => Command::Stats { json },
        ("show", _) => Command::Show,

        ("add" | "new", Mode::Browsing) => Command::Act(Action::Add),
        ("edit", Mode::Browsing) => Command::Act(Action::Edit(team_id("edit", rest)?)),
        ("delete" | "del" | "rm", Mode::Browsing) => {
            Command::Act(Action::Delete(team_id("delete", rest)?))
        }

        ("save" | "submit", Mode::Editing(_)) => Command::Act(Action::Submit),
        ("cancel", Mode::Editing(_) | Mode::ConfirmingDelete { .. }) => {
            Command::Act(Action::Cancel)
        }
        (other, Mode::Editing(_)) => match other.parse::<Field>() {
            Ok(field) => Command::Act(Action::SetField(field, rest.to_string())),
            Err(()) => return Err(ParseCommandError::Unknown(other.to_string())),
        },

        ("yes" | "y", Mode::ConfirmingDelete { .. }) => Command::Act(Action::Confirm(true)),
        ("no" | "n", Mode::ConfirmingDelete { .. }) => Command::Act(Action::Confirm(false)),

        (other, _) => return Err(ParseCommandError::Unknown(other.to_string())),
    };

    Ok(Some(command))
}

fn team_id(command: &'static str, arg: &str) -> Result<TeamId, ParseCommandError> {
    if arg.is_empty() {
        return Err(ParseCommandError::MissingArgument {
            command,
            expected: "a team id",
        });
    }
    arg.parse()
        .map_err(|_| ParseCommandError::InvalidId(arg.to_string()))
}
