//! Validation helper functions for Oscar commands
//!
//! Every check here runs before a command touches the task list, so a
//! rejected line never leaves a partial change behind.

use crate::error::{OscarError, Result};

/// Convert a 1-based task number typed by the user into a checked 0-based index
///
/// # Arguments
/// * `details` - Text following the command keyword
/// * `len` - Current number of tasks
///
/// # Returns
/// Index satisfying `index < len`, or a user input error
pub fn parse_task_number(details: &str, len: usize) -> Result<usize> {
    let number: i64 = details
        .trim()
        .parse()
        .map_err(|_| OscarError::user_input("Please enter a valid task number."))?;

    if number < 1 {
        return Err(OscarError::user_input("Task numbers must be natural numbers."));
    }

    match usize::try_from(number - 1) {
        Ok(index) if index < len => Ok(index),
        _ => Err(OscarError::user_input("Task number is too large.")),
    }
}

/// Split `text` around the first `marker` that stands as its own word
///
/// A marker closing the text counts, with an empty right side, since the
/// details arrive trimmed. A marker opening the text does not.
fn split_marker<'a>(text: &'a str, marker: &str) -> Option<(&'a str, &'a str)> {
    if let Some(parts) = text.split_once(&format!(" {} ", marker)) {
        return Some(parts);
    }
    text.strip_suffix(&format!(" {}", marker))
        .map(|before| (before, ""))
}

fn require(field: &str, message: &str) -> Result<String> {
    let field = field.trim();
    if field.is_empty() {
        Err(OscarError::user_input(message))
    } else {
        Ok(field.to_string())
    }
}

/// Validate the description of a todo task
pub fn parse_todo(details: &str) -> Result<String> {
    require(details, "The description of a todo task cannot be empty.")
}

/// Split deadline details of the form `<description> /by <deadline>`
///
/// # Returns
/// `(description, by)`, both trimmed and non-empty
pub fn parse_deadline(details: &str) -> Result<(String, String)> {
    let (description, by) = split_marker(details, "/by")
        .ok_or_else(|| OscarError::user_input("The deadline task is not formatted correctly."))?;

    let description = require(
        description,
        "The description of a deadline task cannot be empty.",
    )?;
    let by = require(by, "The deadline of a deadline task cannot be empty.")?;
    Ok((description, by))
}

/// Split event details of the form `<description> /from <start> /to <end>`
///
/// Exactly one `/from` followed by exactly one `/to` is accepted.
///
/// # Returns
/// `(description, start, end)`, all trimmed and non-empty
pub fn parse_event(details: &str) -> Result<(String, String, String)> {
    let not_formatted = || OscarError::user_input("The event task is not formatted correctly.");

    let (description, rest) = split_marker(details, "/from").ok_or_else(not_formatted)?;
    if split_marker(description, "/to").is_some() {
        return Err(not_formatted());
    }

    let (start, end) = split_marker(rest, "/to").ok_or_else(not_formatted)?;
    if split_marker(start, "/from").is_some()
        || split_marker(end, "/from").is_some()
        || split_marker(end, "/to").is_some()
    {
        return Err(not_formatted());
    }

    let description = require(
        description,
        "The description of an event task cannot be empty.",
    )?;
    let start = require(start, "The start date/time of an event task cannot be empty.")?;
    let end = require(end, "The end date/time of an event task cannot be empty.")?;
    Ok((description, start, end))
}
