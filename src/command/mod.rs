//! Commands understood by Oscar
//!
//! One input line becomes one `Command`, which is executed once against the
//! session's task list and then dropped. Each family of commands lives in its
//! own file:
//! - `add`: todo, deadline and event
//! - `update`: mark, unmark and delete
//! - `query`: list and find
//! - `parser`: turning raw input into a `Command`

mod add;
mod parser;
mod query;
mod update;

use crate::error::{OscarError, Result};
use crate::storage::Storage;
use crate::task::TaskList;
use std::str::FromStr;
use tracing::warn;

pub use parser::parse;

/// Reply given to the exit command
pub const EXIT_MESSAGE: &str = "Goodbye for now. Oscar hopes to see you again soon!\n";

/// Keywords recognised at the start of an input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKeyword {
    List,
    Mark,
    Unmark,
    Delete,
    Todo,
    Deadline,
    Event,
    Find,
    Bye,
}

impl FromStr for CommandKeyword {
    type Err = OscarError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "LIST" => Ok(CommandKeyword::List),
            "MARK" => Ok(CommandKeyword::Mark),
            "UNMARK" => Ok(CommandKeyword::Unmark),
            "DELETE" => Ok(CommandKeyword::Delete),
            "TODO" => Ok(CommandKeyword::Todo),
            "DEADLINE" => Ok(CommandKeyword::Deadline),
            "EVENT" => Ok(CommandKeyword::Event),
            "FIND" => Ok(CommandKeyword::Find),
            "BYE" => Ok(CommandKeyword::Bye),
            _ => Err(OscarError::user_input("Oscar does not recognise this command")),
        }
    }
}

/// A parsed request, holding the text that followed its keyword
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Mark(String),
    Unmark(String),
    Delete(String),
    Todo(String),
    Deadline(String),
    Event(String),
    Find(String),
    Exit,
}

impl Command {
    /// Build the command for `keyword`, taking ownership of its details
    pub fn new(keyword: CommandKeyword, details: String) -> Self {
        match keyword {
            CommandKeyword::List => Command::List,
            CommandKeyword::Mark => Command::Mark(details),
            CommandKeyword::Unmark => Command::Unmark(details),
            CommandKeyword::Delete => Command::Delete(details),
            CommandKeyword::Todo => Command::Todo(details),
            CommandKeyword::Deadline => Command::Deadline(details),
            CommandKeyword::Event => Command::Event(details),
            CommandKeyword::Find => Command::Find(details),
            CommandKeyword::Bye => Command::Exit,
        }
    }

    /// Whether the read loop should stop after this command
    pub fn is_exit(&self) -> bool {
        matches!(self, Command::Exit)
    }

    /// Run the command and return the text to show the user
    ///
    /// Validation happens before any change to `tasks`. Commands that change
    /// the list save it through `storage` afterwards; if that save fails the
    /// change stays in memory and the persistence error is returned.
    pub fn execute(&self, tasks: &mut TaskList, storage: &Storage) -> Result<String> {
        match self {
            Command::List => Ok(query::list(tasks)),
            Command::Find(keyword) => Ok(query::find(tasks, keyword)),
            Command::Mark(details) => update::mark(details, tasks, storage),
            Command::Unmark(details) => update::unmark(details, tasks, storage),
            Command::Delete(details) => update::delete(details, tasks, storage),
            Command::Todo(details) => add::todo(details, tasks, storage),
            Command::Deadline(details) => add::deadline(details, tasks, storage),
            Command::Event(details) => add::event(details, tasks, storage),
            Command::Exit => Ok(EXIT_MESSAGE.to_string()),
        }
    }
}

/// Persist the list after a change, logging the failure before reporting it
fn save(tasks: &TaskList, storage: &Storage) -> Result<()> {
    storage.save(tasks).map_err(|e| {
        warn!(path = %storage.path().display(), error = %e, "failed to save task list");
        OscarError::from(e)
    })
}
