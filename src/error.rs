//! Error types for Oscar
//!
//! Two kinds of failure exist: problems with what the user typed, which are
//! always recoverable and leave the task list untouched, and problems reading
//! or writing the save file.

use std::path::PathBuf;
use thiserror::Error;

/// Failure reported back to the user in place of a normal reply
#[derive(Debug, Error)]
pub enum OscarError {
    /// Malformed or unrecognised input; the message is shown verbatim
    #[error("{0}")]
    UserInput(String),

    #[error("Sorry! Oscar could not access the save file: {0}\n")]
    Persistence(#[from] PersistenceError),
}

impl OscarError {
    /// Build a user input error with the standard "Sorry! " prefix and trailing newline
    pub fn user_input(message: impl AsRef<str>) -> Self {
        OscarError::UserInput(format!("Sorry! {}\n", message.as_ref()))
    }
}

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode task list: {0}")]
    Encode(#[from] toml::ser::Error),

    #[error("failed to decode task list: {0}")]
    Decode(#[from] toml::de::Error),

    #[error("unsupported save file version {0}")]
    UnsupportedVersion(u32),

    #[error("corrupt task record #{index}: {reason}")]
    Corrupt { index: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, OscarError>;
