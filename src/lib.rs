//! Oscar, a friendly todo list chatbot
//!
//! Oscar reads one command per line (`todo`, `deadline`, `event`, `list`,
//! `mark`, `unmark`, `delete`, `find`, `bye`), applies it to an in-memory task
//! list and answers with a short message. The list is saved to a TOML file
//! after every change.
//!
//! # Architecture
//!
//! - **Session Layer**: `Oscar` - owns the task list and storage for one run
//! - **Command Layer**: `command` module - parsing, validation and execution
//! - **Domain Layer**: `task` module - tasks and the ordered task list
//! - **Persistence Layer**: `storage` module - versioned TOML save file
//!
//! # Example
//!
//! ```no_run
//! use oscar::Oscar;
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let mut oscar = Oscar::new("data/oscar.toml")?;
//!     let reply = oscar.get_response("todo read book");
//!     print!("{}", reply.text);
//!     Ok(())
//! }
//! ```

pub mod command;
pub mod error;
pub mod storage;
pub mod task;
pub mod ui;
pub mod validation;

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::info;

// Re-export commonly used types
pub use command::{Command, EXIT_MESSAGE};
pub use error::{OscarError, PersistenceError};
pub use storage::Storage;
pub use task::{Task, TaskKind, TaskList};
pub use ui::Ui;

/// Opening message shown when a session starts
pub const GREETING: &str = "Hello! This is Oscar, your friendly chatbot :)\nWhat can Oscar do for you?\n";

/// Oscar's answer to one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    /// Set when the user asked to leave
    pub exit: bool,
}

/// One chat session: the task list plus the file it is saved to
///
/// Any front end (the console loop here, or a chat window) feeds lines to
/// `get_response` and shows what comes back.
pub struct Oscar {
    pub(crate) tasks: TaskList,
    pub(crate) storage: Storage,
}

impl Oscar {
    /// Start a session backed by the save file at `storage_path`
    ///
    /// # Arguments
    /// * `storage_path` - Path to the TOML save file; it need not exist yet
    ///
    /// # Returns
    /// Result containing the session, or an error if the file cannot be read
    pub fn new(storage_path: impl AsRef<Path>) -> Result<Self> {
        let storage = Storage::new(storage_path);
        let tasks = storage
            .load()
            .with_context(|| format!("Failed to load tasks from {}", storage.path().display()))?;
        Ok(Self { tasks, storage })
    }

    pub fn greet(&self) -> &'static str {
        GREETING
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Handle one line of input, keeping failures typed
    pub fn respond(&mut self, input: &str) -> Result<Reply, OscarError> {
        let command = command::parse(input)?;
        let text = command.execute(&mut self.tasks, &self.storage)?;
        Ok(Reply {
            text,
            exit: command.is_exit(),
        })
    }

    /// Handle one line of input
    ///
    /// Errors never escape: they become the reply text and the session
    /// carries on.
    pub fn get_response(&mut self, input: &str) -> Reply {
        self.respond(input).unwrap_or_else(|e| Reply {
            text: e.to_string(),
            exit: false,
        })
    }

    /// Run the read loop until `bye` or the end of input
    pub fn run<R: BufRead, W: Write>(&mut self, ui: &mut Ui<R, W>) -> Result<()> {
        ui.show_response(self.greet())?;
        ui.show_line()?;

        while let Some(line) = ui.read_command().context("Failed to read input")? {
            match self.respond(&line) {
                Ok(reply) => {
                    ui.show_response(&reply.text)?;
                    ui.show_line()?;
                    if reply.exit {
                        break;
                    }
                }
                Err(e) => {
                    ui.show_error(&e)?;
                    ui.show_line()?;
                }
            }
        }

        info!(count = self.tasks.len(), "session finished");
        Ok(())
    }
}
