use super::{Command, CommandKeyword};
use crate::error::Result;
use tracing::debug;

/// Parse one line of input into a command
///
/// The first whitespace-separated word is the keyword; everything after it,
/// trimmed, is handed to the command as its details.
pub fn parse(input: &str) -> Result<Command> {
    let input = input.trim();
    let (keyword, details) = input
        .split_once(char::is_whitespace)
        .unwrap_or((input, ""));

    let keyword: CommandKeyword = keyword.parse()?;
    let command = Command::new(keyword, details.trim().to_string());
    debug!(?command, "parsed input");
    Ok(command)
}
